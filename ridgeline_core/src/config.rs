// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mount configuration: image references and container height.
//!
//! A [`ParallaxConfig`] is immutable for the lifetime of one mount. Passing a
//! config with a different identity (`!=`) to
//! [`ParallaxEngine::set_config`](crate::engine::ParallaxEngine::set_config)
//! tears down and fully re-creates all layers; partial updates are not
//! supported.

use alloc::string::String;
use core::fmt;

use crate::layer::DepthPlane;

/// Container height used when [`ParallaxConfig::with_height`] is not called:
/// 60% of the viewport height.
pub const DEFAULT_HEIGHT: &str = "60vh";

/// An opaque image resource locator, resolved by the host rendering
/// environment.
///
/// The core never interprets the contents; equality participates in config
/// identity. A reference the host cannot resolve renders as an empty layer
/// without functional failure.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    /// Creates an image reference from any string-like locator.
    #[must_use]
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    /// Returns the locator as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageRef({:?})", self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(locator: &str) -> Self {
        Self::new(locator)
    }
}

/// The immutable per-mount configuration: one image per depth plane plus an
/// optional container height.
///
/// The height is an opaque host CSS length (`"70vh"`, `"480px"`, …); the
/// core never parses it. Scroll progress is computed from measured geometry,
/// so any unit the host resolves behaves correctly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParallaxConfig {
    background: ImageRef,
    middle: ImageRef,
    foreground: ImageRef,
    height: Option<String>,
}

impl ParallaxConfig {
    /// Creates a config from the three image references, back-to-front.
    #[must_use]
    pub fn new(
        background: impl Into<ImageRef>,
        middle: impl Into<ImageRef>,
        foreground: impl Into<ImageRef>,
    ) -> Self {
        Self {
            background: background.into(),
            middle: middle.into(),
            foreground: foreground.into(),
            height: None,
        }
    }

    /// Sets an explicit container height as a host CSS length.
    #[must_use]
    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    /// Returns the image reference for the given depth plane.
    #[must_use]
    pub fn image(&self, plane: DepthPlane) -> &ImageRef {
        match plane {
            DepthPlane::Background => &self.background,
            DepthPlane::Middle => &self.middle,
            DepthPlane::Foreground => &self.foreground,
        }
    }

    /// Returns the container height, falling back to [`DEFAULT_HEIGHT`].
    #[must_use]
    pub fn height(&self) -> &str {
        self.height.as_deref().unwrap_or(DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParallaxConfig {
        ParallaxConfig::new("bg.webp", "mid.webp", "fg.webp")
    }

    #[test]
    fn default_height_is_sixty_vh() {
        assert_eq!(sample().height(), "60vh");
    }

    #[test]
    fn explicit_height_overrides_default() {
        let config = sample().with_height("70vh");
        assert_eq!(config.height(), "70vh");
    }

    #[test]
    fn images_map_to_planes_back_to_front() {
        let config = sample();
        assert_eq!(config.image(DepthPlane::Background).as_str(), "bg.webp");
        assert_eq!(config.image(DepthPlane::Middle).as_str(), "mid.webp");
        assert_eq!(config.image(DepthPlane::Foreground).as_str(), "fg.webp");
    }

    #[test]
    fn identity_is_value_equality() {
        assert_eq!(sample(), sample());
        assert_ne!(sample(), sample().with_height("50vh"));
        assert_ne!(
            sample(),
            ParallaxConfig::new("other.webp", "mid.webp", "fg.webp")
        );
    }
}

// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed three-plane layer stack.
//!
//! A parallax mount always consists of exactly three layers, back-to-front:
//! background, middle, foreground. Each plane carries a fixed *speed
//! coefficient* in `[0, 1]` controlling how much the layer lags the scroll
//! (lower speed moves more) and a fixed stacking index preserving the
//! back-to-front order. Per frame, a layer's vertical offset is
//!
//! ```text
//! offset_y = progress * 100 * (1 - speed)
//! ```
//!
//! so the foreground stays nearly static while the background travels the
//! farthest, producing the depth illusion.
//!
//! [`LayerStack`] owns the three slots exclusively: no external writer ever
//! touches them. Mutations mark dirty channels (see [`crate::dirty`]), and
//! [`LayerStack::evaluate`] drains the channels into a [`FrameChanges`]
//! value that backends apply to their native tree.

mod evaluate;
mod stack;

pub use evaluate::FrameChanges;
pub use stack::LayerStack;

/// Number of depth planes in every stack.
pub const PLANE_COUNT: usize = 3;

/// One of the three fixed depth planes, back-to-front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DepthPlane {
    /// Deepest layer; moves the most under scroll.
    Background,
    /// Middle layer.
    Middle,
    /// Closest layer; nearly static under scroll.
    Foreground,
}

impl DepthPlane {
    /// All planes in slot order (back-to-front).
    pub const ALL: [Self; PLANE_COUNT] = [Self::Background, Self::Middle, Self::Foreground];

    /// The plane's speed coefficient: how strongly it tracks the scroll.
    ///
    /// Lower values lag the scroll more and therefore move farther.
    #[must_use]
    pub const fn speed(self) -> f64 {
        match self {
            Self::Background => 0.2,
            Self::Middle => 0.5,
            Self::Foreground => 0.8,
        }
    }

    /// The plane's stacking index (1 = deepest), preserving back-to-front
    /// order in the native tree.
    #[must_use]
    pub const fn z_index(self) -> u8 {
        match self {
            Self::Background => 1,
            Self::Middle => 2,
            Self::Foreground => 3,
        }
    }

    /// The plane's slot index in the stack's arrays.
    #[must_use]
    pub const fn index(self) -> u32 {
        match self {
            Self::Background => 0,
            Self::Middle => 1,
            Self::Foreground => 2,
        }
    }

    /// Returns the plane for a raw slot index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 3`.
    #[must_use]
    pub const fn from_index(idx: u32) -> Self {
        match idx {
            0 => Self::Background,
            1 => Self::Middle,
            2 => Self::Foreground,
            _ => panic!("depth plane index out of range"),
        }
    }

    /// The vertical offset for this plane at the given scroll progress, in
    /// the same linear unit (px) as the layer's height overdraw.
    #[must_use]
    pub fn offset_y(self, progress: f64) -> f64 {
        progress * 100.0 * (1.0 - self.speed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planes_are_back_to_front() {
        assert_eq!(DepthPlane::ALL[0], DepthPlane::Background);
        assert_eq!(DepthPlane::ALL[2], DepthPlane::Foreground);
        let mut i = 0;
        while i < PLANE_COUNT {
            let plane = DepthPlane::ALL[i];
            assert_eq!(plane.index() as usize, i);
            assert_eq!(DepthPlane::from_index(plane.index()), plane);
            i += 1;
        }
    }

    #[test]
    fn z_indices_preserve_stacking_order() {
        assert_eq!(DepthPlane::Background.z_index(), 1);
        assert_eq!(DepthPlane::Middle.z_index(), 2);
        assert_eq!(DepthPlane::Foreground.z_index(), 3);
    }

    #[test]
    fn offsets_order_background_over_middle_over_foreground() {
        // Slower planes (lower speed) must travel farther for any progress > 0.
        let mut progress = 0.1;
        while progress <= 1.0 {
            let bg = DepthPlane::Background.offset_y(progress);
            let mid = DepthPlane::Middle.offset_y(progress);
            let fg = DepthPlane::Foreground.offset_y(progress);
            assert!(bg > mid, "background must move more than middle");
            assert!(mid > fg, "middle must move more than foreground");
            progress += 0.1;
        }
    }

    #[test]
    fn offset_formula_matches_speed() {
        let eps = 1e-12;
        assert!((DepthPlane::Background.offset_y(0.5) - 40.0).abs() < eps);
        assert!((DepthPlane::Middle.offset_y(0.5) - 25.0).abs() < eps);
        assert!((DepthPlane::Foreground.offset_y(0.5) - 10.0).abs() < eps);
    }

    #[test]
    fn zero_progress_means_zero_offset() {
        for plane in DepthPlane::ALL {
            assert_eq!(plane.offset_y(0.0), 0.0);
        }
    }
}

// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll geometry sampling and progress computation.
//!
//! A [`ScrollGeometry`] is a derived snapshot, never stored across frames:
//! backends sample the container's bounding box and the viewport height
//! immediately before each recompute. Progress is the normalized `[0, 1]`
//! measure of how far the container has traveled through the viewport —
//! `0` while its top edge is still below the viewport, `1` once its bottom
//! edge has left through the top.

use kurbo::Rect;

/// A sampled snapshot of the container's position relative to the viewport.
///
/// The container rect is in viewport coordinates (the same space as a
/// bounding-client-rect read): `y0` is the distance from the viewport top to
/// the container top, negative once the container has scrolled past it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollGeometry {
    container: Rect,
    viewport_height: f64,
}

impl ScrollGeometry {
    /// Creates a snapshot from a container rect (viewport coordinates) and
    /// the current viewport height.
    #[must_use]
    pub const fn new(container: Rect, viewport_height: f64) -> Self {
        Self {
            container,
            viewport_height,
        }
    }

    /// Creates a snapshot from raw metrics: the container's top edge and
    /// height, and the viewport height. Horizontal extent is irrelevant to
    /// the vertical effect and is left zero.
    #[must_use]
    pub fn from_metrics(container_top: f64, container_height: f64, viewport_height: f64) -> Self {
        Self {
            container: Rect::new(0.0, container_top, 0.0, container_top + container_height),
            viewport_height,
        }
    }

    /// Returns the container rect in viewport coordinates.
    #[must_use]
    pub const fn container(&self) -> Rect {
        self.container
    }

    /// Returns the container's top edge (viewport coordinates).
    #[must_use]
    pub const fn container_top(&self) -> f64 {
        self.container.y0
    }

    /// Returns the container's height.
    #[must_use]
    pub fn container_height(&self) -> f64 {
        self.container.height()
    }

    /// Returns the viewport height.
    #[must_use]
    pub const fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Computes the scroll progress, clamped to `[0, 1]`.
    ///
    /// Defined as `(viewport_height - container_top) / (viewport_height +
    /// container_height)`. A not-yet-measurable container (zero or negative
    /// denominator, non-finite inputs) degrades to `0` or `1` by the
    /// numerator's sign instead of producing NaN or infinity.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let numer = self.viewport_height - self.container.y0;
        let denom = self.viewport_height + self.container.height();
        if denom <= 0.0 || !denom.is_finite() || !numer.is_finite() {
            return if numer > 0.0 { 1.0 } else { 0.0 };
        }
        (numer / denom).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_zero_when_container_below_viewport() {
        // Top edge exactly at the viewport bottom.
        let g = ScrollGeometry::from_metrics(800.0, 0.0, 800.0);
        assert_eq!(g.progress(), 0.0);

        // Further below: still zero, clamped.
        let g = ScrollGeometry::from_metrics(2000.0, 400.0, 800.0);
        assert_eq!(g.progress(), 0.0);
    }

    #[test]
    fn progress_is_one_when_container_fully_scrolled_past() {
        // Bottom edge exactly at the viewport top.
        let g = ScrollGeometry::from_metrics(-400.0, 400.0, 800.0);
        assert_eq!(g.progress(), 1.0);

        // Further past: still one, clamped.
        let g = ScrollGeometry::from_metrics(-3000.0, 400.0, 800.0);
        assert_eq!(g.progress(), 1.0);
    }

    #[test]
    fn progress_is_half_when_container_centered() {
        // numer = 800 - 200 = 600, denom = 800 + 400 = 1200.
        let g = ScrollGeometry::from_metrics(200.0, 400.0, 800.0);
        assert!((g.progress() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn progress_stays_in_unit_interval() {
        let viewport = 768.0;
        let height = 460.8; // 60vh
        let mut top = 4000.0;
        while top > -4000.0 {
            let p = ScrollGeometry::from_metrics(top, height, viewport).progress();
            assert!((0.0..=1.0).contains(&p), "progress {p} out of range");
            top -= 37.0;
        }
    }

    #[test]
    fn progress_is_monotonic_as_container_rises() {
        let viewport = 800.0;
        let height = 480.0;
        let mut prev = -1.0;
        let mut top = 1200.0;
        while top > -1200.0 {
            let p = ScrollGeometry::from_metrics(top, height, viewport).progress();
            assert!(
                p >= prev,
                "progress decreased from {prev} to {p} at top {top}"
            );
            prev = p;
            top -= 16.0;
        }
    }

    #[test]
    fn zero_height_container_does_not_divide_by_zero() {
        let g = ScrollGeometry::from_metrics(100.0, 0.0, 800.0);
        let p = g.progress();
        assert!(p.is_finite(), "progress must stay finite");
        assert!((p - 700.0 / 800.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_denominator_clamps_by_numerator_sign() {
        // Viewport and container both zero-height: denominator is 0.
        let above = ScrollGeometry::from_metrics(-10.0, 0.0, 0.0);
        assert_eq!(above.progress(), 1.0);

        let below = ScrollGeometry::from_metrics(10.0, 0.0, 0.0);
        assert_eq!(below.progress(), 0.0);
    }

    #[test]
    fn non_finite_inputs_never_produce_nan() {
        let g = ScrollGeometry::from_metrics(f64::NAN, 400.0, 800.0);
        assert_eq!(g.progress(), 0.0);

        let g = ScrollGeometry::from_metrics(f64::NEG_INFINITY, 400.0, 800.0);
        assert_eq!(g.progress(), 1.0);

        let g = ScrollGeometry::from_metrics(100.0, f64::INFINITY, 800.0);
        assert_eq!(g.progress(), 0.0);
    }

    #[test]
    fn from_metrics_round_trips_accessors() {
        let g = ScrollGeometry::from_metrics(120.0, 460.0, 900.0);
        assert_eq!(g.container_top(), 120.0);
        assert_eq!(g.container_height(), 460.0);
        assert_eq!(g.viewport_height(), 900.0);
    }
}

// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry probing.
//!
//! Samples the container's bounding client rect and the window's inner
//! height into a [`ScrollGeometry`] immediately before each recompute. The
//! snapshot is derived state — nothing here is cached across frames.

use kurbo::Rect;
use web_sys::{HtmlElement, Window};

use ridgeline_core::geometry::ScrollGeometry;

/// Samples the current scroll geometry for `container`.
///
/// An unmeasurable window height reads as zero, which the progress
/// computation degrades to a clamped 0/1 rather than NaN.
#[must_use]
pub fn probe_geometry(container: &HtmlElement, window: &Window) -> ScrollGeometry {
    let rect = container.get_bounding_client_rect();
    let container = Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom());
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    ScrollGeometry::new(container, viewport_height)
}

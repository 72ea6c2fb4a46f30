// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! Ridgeline splits platform-specific work into *backend* crates. Each
//! backend provides the following pieces:
//!
//! - **Event sources** — Subscribes to the platform's scroll and resize
//!   notifications and routes scroll through the
//!   [`FrameCoalescer`](crate::coalesce::FrameCoalescer). This is
//!   backend-specific and not abstracted by a trait because subscription and
//!   lifecycle differ fundamentally across platforms.
//!
//! - **Frame scheduling** — A one-shot "run on next rendering frame"
//!   primitive (e.g. `requestAnimationFrame`) used to frame-align every
//!   recompute.
//!
//! - **Geometry probe** — Samples the container's bounding box and the
//!   viewport height into a
//!   [`ScrollGeometry`](crate::geometry::ScrollGeometry) immediately before
//!   each recompute. Stateless, so it stays as a free function rather than a
//!   trait method.
//!
//! - **Presenter** — Implements the [`Presenter`] trait to apply frame
//!   changes to a platform-native tree (e.g. DOM elements).
//!
//! # Crate boundaries
//!
//! `ridgeline_core` owns the data model, progress math, evaluation, and this
//! contract module. Backend crates depend on `ridgeline_core` and provide
//! platform glue. Application code depends on both and mounts the effect
//! through the backend's handle type.

use crate::layer::{FrameChanges, LayerStack};

/// Applies evaluated frame changes to a platform-native presentation tree.
///
/// # Recompute pseudocode
///
/// A typical frame callback wires the pieces together like this:
///
/// ```rust,ignore
/// fn on_frame() {
///     let geometry = probe_geometry(&container);
///     let changes = engine.recompute(geometry);
///     presenter.apply(engine.stack(), &changes);
///     coalescer.finish();
/// }
/// ```
///
/// The trait is the only abstraction point between core and backends, which
/// also makes test doubles trivial: record the change sets and assert on
/// them.
pub trait Presenter {
    /// Applies the given [`FrameChanges`] to the backing presentation tree,
    /// reading current slot values from `stack` as needed.
    ///
    /// Removals are listed separately from additions and must be processed
    /// first, so config rebuilds can reuse slot indices within one apply.
    fn apply(&mut self, stack: &LayerStack, changes: &FrameChanges);
}

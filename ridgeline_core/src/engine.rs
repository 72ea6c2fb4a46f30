// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The attach/recompute/detach state machine.
//!
//! [`ParallaxEngine`] ties a [`ParallaxConfig`] to the [`LayerStack`] it
//! owns. There is no state beyond attached/detached: recompute is a pure
//! function of the sampled geometry, and every lifecycle operation is
//! idempotent. A recompute that fires after detach (e.g. a frame callback
//! that was already scheduled) is a guarded no-op yielding empty changes.

use crate::config::ParallaxConfig;
use crate::geometry::ScrollGeometry;
use crate::layer::{FrameChanges, LayerStack};

/// Whether the engine currently owns live layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum EngineState {
    Attached,
    Detached,
}

/// The parallax effect engine: owns the three depth layers and maps sampled
/// scroll geometry to their offsets.
///
/// The engine never talks to a platform directly; backends feed it
/// [`ScrollGeometry`] snapshots and apply the returned
/// [`FrameChanges`] through a [`Presenter`](crate::backend::Presenter).
#[derive(Debug)]
pub struct ParallaxEngine {
    config: ParallaxConfig,
    stack: LayerStack,
    progress: f64,
    state: EngineState,
}

impl ParallaxEngine {
    /// Creates an attached engine for the given config.
    ///
    /// All layers start pending-added at progress 0, so the first
    /// [`recompute`](Self::recompute) both mounts them and positions them
    /// (at progress 0 every offset is exactly 0).
    #[must_use]
    pub fn new(config: ParallaxConfig) -> Self {
        let stack = LayerStack::new(&config);
        Self {
            config,
            stack,
            progress: 0.0,
            state: EngineState::Attached,
        }
    }

    /// Returns the current config.
    #[must_use]
    pub fn config(&self) -> &ParallaxConfig {
        &self.config
    }

    /// Returns the layer stack for presenter reads.
    #[must_use]
    pub fn stack(&self) -> &LayerStack {
        &self.stack
    }

    /// Returns the most recently computed scroll progress.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Returns whether the engine still owns live layers.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.state == EngineState::Attached
    }

    /// Recomputes layer offsets from a fresh geometry sample.
    ///
    /// Returns the change set to present. After [`detach`](Self::detach)
    /// this is a guarded no-op yielding empty changes.
    pub fn recompute(&mut self, geometry: ScrollGeometry) -> FrameChanges {
        let mut changes = FrameChanges::default();
        self.recompute_into(geometry, &mut changes);
        changes
    }

    /// Like [`recompute`](Self::recompute), but reuses a caller-provided
    /// buffer to avoid allocation in the per-frame path.
    pub fn recompute_into(&mut self, geometry: ScrollGeometry, changes: &mut FrameChanges) {
        changes.clear();
        if self.state == EngineState::Detached {
            return;
        }
        self.progress = geometry.progress();
        self.stack.set_progress(self.progress);
        self.stack.evaluate_into(changes);
    }

    /// Replaces the config.
    ///
    /// An identity-equal config is a no-op. Otherwise all layers are
    /// released and re-created — removals and additions land in one change
    /// set (removals first) — and the new layers are positioned at the
    /// current progress.
    pub fn set_config(&mut self, config: ParallaxConfig) -> FrameChanges {
        let mut changes = FrameChanges::default();
        if self.state == EngineState::Detached || config == self.config {
            return changes;
        }

        self.stack.release();
        let torn_down = self.stack.evaluate();

        self.config = config;
        self.stack = LayerStack::new(&self.config);
        self.stack.set_progress(self.progress);
        self.stack.evaluate_into(&mut changes);
        changes.removed = torn_down.removed;
        changes
    }

    /// Detaches the engine, releasing all layers.
    ///
    /// Idempotent: the first call yields the removals, every later call
    /// yields empty changes.
    pub fn detach(&mut self) -> FrameChanges {
        let mut changes = FrameChanges::default();
        if self.state == EngineState::Detached {
            return changes;
        }
        self.state = EngineState::Detached;
        self.stack.release();
        self.stack.evaluate_into(&mut changes);
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Presenter;
    use crate::layer::{DepthPlane, PLANE_COUNT};
    use alloc::vec::Vec;

    fn sample_config() -> ParallaxConfig {
        ParallaxConfig::new("bg.webp", "mid.webp", "fg.webp").with_height("70vh")
    }

    /// Presenter test double that records every change set it is handed.
    #[derive(Default)]
    struct RecordingPresenter {
        added: Vec<u32>,
        removed: Vec<u32>,
        offsets: Vec<(u32, f64)>,
    }

    impl Presenter for RecordingPresenter {
        fn apply(&mut self, stack: &LayerStack, changes: &FrameChanges) {
            self.removed.extend_from_slice(&changes.removed);
            self.added.extend_from_slice(&changes.added);
            for &idx in &changes.transforms {
                self.offsets.push((idx, stack.offset_y_at(idx)));
            }
        }
    }

    #[test]
    fn initial_recompute_mounts_three_layers_at_zero_offset() {
        let mut engine = ParallaxEngine::new(sample_config());
        let mut presenter = RecordingPresenter::default();

        // Container top at the viewport bottom: progress 0.
        let geometry = ScrollGeometry::from_metrics(800.0, 560.0, 800.0);
        let changes = engine.recompute(geometry);
        presenter.apply(engine.stack(), &changes);

        assert_eq!(presenter.added, &[0, 1, 2]);
        assert_eq!(presenter.offsets.len(), PLANE_COUNT);
        for &(_, offset) in &presenter.offsets {
            assert_eq!(offset, 0.0, "progress 0 must leave every layer at 0");
        }
        assert_eq!(engine.progress(), 0.0);
    }

    #[test]
    fn recompute_tracks_scroll_geometry() {
        let mut engine = ParallaxEngine::new(sample_config());
        let _ = engine.recompute(ScrollGeometry::from_metrics(800.0, 400.0, 800.0));

        // Centered: progress 0.5.
        let changes = engine.recompute(ScrollGeometry::from_metrics(200.0, 400.0, 800.0));
        assert_eq!(changes.transforms.len(), PLANE_COUNT);

        let eps = 1e-12;
        let stack = engine.stack();
        assert!((stack.offset_y_at(0) - 40.0).abs() < eps);
        assert!((stack.offset_y_at(1) - 25.0).abs() < eps);
        assert!((stack.offset_y_at(2) - 10.0).abs() < eps);
    }

    #[test]
    fn recompute_with_unchanged_geometry_is_quiet() {
        let mut engine = ParallaxEngine::new(sample_config());
        let geometry = ScrollGeometry::from_metrics(200.0, 400.0, 800.0);
        let _ = engine.recompute(geometry);

        let changes = engine.recompute(geometry);
        assert!(changes.is_empty());
    }

    #[test]
    fn detach_is_idempotent() {
        let mut engine = ParallaxEngine::new(sample_config());
        let _ = engine.recompute(ScrollGeometry::from_metrics(800.0, 400.0, 800.0));

        let first = engine.detach();
        assert_eq!(first.removed.len(), PLANE_COUNT);
        assert!(!engine.is_attached());

        let second = engine.detach();
        assert!(second.is_empty(), "second detach must be a no-op");
    }

    #[test]
    fn recompute_after_detach_is_guarded() {
        let mut engine = ParallaxEngine::new(sample_config());
        let _ = engine.recompute(ScrollGeometry::from_metrics(800.0, 400.0, 800.0));
        let _ = engine.detach();

        // A frame callback that was pending at detach time fires afterwards.
        let changes = engine.recompute(ScrollGeometry::from_metrics(0.0, 400.0, 800.0));
        assert!(changes.is_empty());
    }

    #[test]
    fn set_config_with_equal_identity_is_noop() {
        let mut engine = ParallaxEngine::new(sample_config());
        let _ = engine.recompute(ScrollGeometry::from_metrics(800.0, 400.0, 800.0));

        let changes = engine.set_config(sample_config());
        assert!(changes.is_empty());
    }

    #[test]
    fn set_config_rebuilds_all_layers_at_current_progress() {
        let mut engine = ParallaxEngine::new(sample_config());
        let _ = engine.recompute(ScrollGeometry::from_metrics(200.0, 400.0, 800.0));

        let next = ParallaxConfig::new("bg2.webp", "mid2.webp", "fg2.webp");
        let changes = engine.set_config(next);

        assert_eq!(changes.removed, &[0, 1, 2]);
        assert_eq!(changes.added, &[0, 1, 2]);
        assert_eq!(changes.content.len(), PLANE_COUNT);

        // New layers carry the new images, positioned at the old progress.
        let stack = engine.stack();
        assert_eq!(stack.image_at(0).as_str(), "bg2.webp");
        let eps = 1e-12;
        assert!((stack.offset_y_at(0) - DepthPlane::Background.offset_y(0.5)).abs() < eps);
    }

    #[test]
    fn bursty_scroll_coalesces_to_one_recompute_per_frame() {
        use crate::coalesce::FrameCoalescer;

        let mut engine = ParallaxEngine::new(sample_config());
        let coalescer = FrameCoalescer::new();
        let mut recomputes = 0;
        let mut top = 900.0;

        let mut frame = 0;
        while frame < 10 {
            // Five scroll events land before the frame boundary.
            let mut scheduled = false;
            let mut event = 0;
            while event < 5 {
                top -= 8.0;
                if coalescer.request() {
                    scheduled = true;
                }
                event += 1;
            }
            // Frame boundary: at most one recompute runs.
            if scheduled {
                let _ = engine.recompute(ScrollGeometry::from_metrics(top, 400.0, 800.0));
                recomputes += 1;
                coalescer.finish();
            }
            frame += 1;
        }

        assert_eq!(recomputes, 10, "one recompute per frame, never five");
    }

    #[test]
    fn set_config_after_detach_is_guarded() {
        let mut engine = ParallaxEngine::new(sample_config());
        let _ = engine.detach();

        let changes = engine.set_config(ParallaxConfig::new("a", "b", "c"));
        assert!(changes.is_empty());
    }
}

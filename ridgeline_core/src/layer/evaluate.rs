// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame evaluation and change tracking.
//!
//! Evaluation follows a drain pattern per dirty channel:
//!
//! 1. **TRANSFORM** — Drain dirty indices; the offsets were already written
//!    by [`LayerStack::set_progress`], so backends read the current values
//!    directly from the stack.
//! 2. **CONTENT** — Drain dirty indices (image references are read from the
//!    stack the same way).
//! 3. **Lifecycle** — The pending-added and pending-removed lists are moved
//!    into the change set.
//!
//! [`FrameChanges`] uses raw slot indices (`u32`) so that backends can index
//! directly into the stack's arrays via the `*_at()` accessors (e.g.
//! [`offset_y_at`](LayerStack::offset_y_at)).

use alloc::vec::Vec;

use super::stack::LayerStack;
use crate::dirty;

/// The set of changes produced by a single [`LayerStack::evaluate`] call.
///
/// Each field contains the raw slot indices of layers that changed in the
/// corresponding category. Backends use these to apply incremental updates;
/// removals are listed separately so they can be processed first.
#[derive(Clone, Debug, Default)]
pub struct FrameChanges {
    /// Slots whose vertical offset changed.
    pub transforms: Vec<u32>,
    /// Slots whose image reference changed (or was first assigned).
    pub content: Vec<u32>,
    /// Slots added since the last evaluate.
    pub added: Vec<u32>,
    /// Slots removed since the last evaluate.
    pub removed: Vec<u32>,
}

impl FrameChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.transforms.clear();
        self.content.clear();
        self.added.clear();
        self.removed.clear();
    }

    /// Returns whether no changes were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
            && self.content.is_empty()
            && self.added.is_empty()
            && self.removed.is_empty()
    }
}

impl LayerStack {
    /// Evaluates the stack, draining dirty channels and lifecycle lists into
    /// a fresh change set.
    pub fn evaluate(&mut self) -> FrameChanges {
        let mut changes = FrameChanges::default();
        self.evaluate_into(&mut changes);
        changes
    }

    /// Like [`evaluate`](Self::evaluate), but reuses a caller-provided
    /// buffer to avoid allocation in the per-frame path.
    pub fn evaluate_into(&mut self, changes: &mut FrameChanges) {
        changes.clear();

        changes.transforms = self
            .dirty_mut()
            .drain(dirty::TRANSFORM)
            .deterministic()
            .run()
            .collect();

        changes.content = self
            .dirty_mut()
            .drain(dirty::CONTENT)
            .deterministic()
            .run()
            .collect();

        let mut added = core::mem::take(&mut changes.added);
        let mut removed = core::mem::take(&mut changes.removed);
        self.take_lifecycle(&mut added, &mut removed);
        changes.added = added;
        changes.removed = removed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParallaxConfig;
    use crate::layer::PLANE_COUNT;

    fn sample_stack() -> LayerStack {
        LayerStack::new(&ParallaxConfig::new("bg.webp", "mid.webp", "fg.webp"))
    }

    #[test]
    fn first_evaluate_mounts_everything() {
        let mut stack = sample_stack();
        let changes = stack.evaluate();

        assert_eq!(changes.added, &[0, 1, 2]);
        assert_eq!(changes.content.len(), PLANE_COUNT);
        assert_eq!(changes.transforms.len(), PLANE_COUNT);
        assert!(changes.removed.is_empty());
    }

    #[test]
    fn no_change_evaluate_returns_empty() {
        let mut stack = sample_stack();
        let _ = stack.evaluate();

        let changes = stack.evaluate();
        assert!(changes.is_empty());
    }

    #[test]
    fn unchanged_progress_marks_nothing() {
        let mut stack = sample_stack();
        stack.set_progress(0.4);
        let _ = stack.evaluate();

        stack.set_progress(0.4);
        let changes = stack.evaluate();
        assert!(
            changes.transforms.is_empty(),
            "same progress must not re-mark offsets"
        );
    }

    #[test]
    fn changed_progress_marks_all_planes() {
        let mut stack = sample_stack();
        let _ = stack.evaluate();

        stack.set_progress(0.25);
        let changes = stack.evaluate();
        assert_eq!(changes.transforms.len(), PLANE_COUNT);
        assert!(changes.content.is_empty());
        assert!(changes.added.is_empty());
    }

    #[test]
    fn evaluate_into_reuses_buffer() {
        let mut stack = sample_stack();
        let mut changes = FrameChanges::default();

        stack.evaluate_into(&mut changes);
        assert_eq!(changes.added.len(), PLANE_COUNT);

        stack.set_progress(0.8);
        stack.evaluate_into(&mut changes);
        assert!(changes.added.is_empty(), "added should be cleared");
        assert_eq!(changes.transforms.len(), PLANE_COUNT);
    }
}

// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays storage for the three depth-layer slots.

use alloc::vec::Vec;

use understory_dirty::{CycleHandling, DirtyTracker};

use crate::config::{ImageRef, ParallaxConfig};
use crate::dirty;

use super::{DepthPlane, PLANE_COUNT};

/// Struct-of-arrays storage for all three layer slots of one mount.
///
/// Slots are addressed by raw index 0–2, in back-to-front plane order. The
/// stack is created from a [`ParallaxConfig`], mutated only through
/// [`set_progress`](Self::set_progress), and torn down with
/// [`release`](Self::release); it is owned exclusively by the engine and is
/// never handed to external writers.
#[derive(Debug)]
pub struct LayerStack {
    // -- Static properties (fixed at creation) --
    image: [ImageRef; PLANE_COUNT],

    // -- Computed properties (written by set_progress) --
    offset_y: [f64; PLANE_COUNT],

    // -- Dirty tracking --
    dirty: DirtyTracker<u32>,

    // -- Lifecycle tracking --
    pending_added: Vec<u32>,
    pending_removed: Vec<u32>,
    released: bool,
}

impl LayerStack {
    /// Creates the three slots for a config.
    ///
    /// All slots start at offset zero and are pending-added with their
    /// content and transform channels marked, so the first
    /// [`evaluate`](Self::evaluate) surfaces everything a presenter needs to
    /// mount them.
    #[must_use]
    pub fn new(config: &ParallaxConfig) -> Self {
        let mut dirty = DirtyTracker::with_cycle_handling(CycleHandling::Error);
        let mut pending_added = Vec::with_capacity(PLANE_COUNT);
        for plane in DepthPlane::ALL {
            let idx = plane.index();
            pending_added.push(idx);
            dirty.mark(idx, dirty::CONTENT);
            dirty.mark(idx, dirty::TRANSFORM);
        }
        Self {
            image: [
                config.image(DepthPlane::Background).clone(),
                config.image(DepthPlane::Middle).clone(),
                config.image(DepthPlane::Foreground).clone(),
            ],
            offset_y: [0.0; PLANE_COUNT],
            dirty,
            pending_added,
            pending_removed: Vec::new(),
            released: false,
        }
    }

    /// Recomputes every slot's offset for the given scroll progress.
    ///
    /// Only slots whose offset actually changed are marked dirty, so an
    /// unchanged progress produces an empty transform change list.
    pub fn set_progress(&mut self, progress: f64) {
        if self.released {
            return;
        }
        for plane in DepthPlane::ALL {
            let idx = plane.index();
            let offset = plane.offset_y(progress);
            if self.offset_y[idx as usize] != offset {
                self.offset_y[idx as usize] = offset;
                self.dirty.mark(idx, dirty::TRANSFORM);
            }
        }
    }

    /// Moves every slot to the pending-removed list.
    ///
    /// Safe to call more than once; later calls are no-ops. The removals are
    /// surfaced by the next [`evaluate`](Self::evaluate).
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        for plane in DepthPlane::ALL {
            self.pending_removed.push(plane.index());
        }
    }

    /// Returns whether [`release`](Self::release) has run.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    // -- Slot accessors (raw indices, for presenters) --

    /// Returns the vertical offset of the given slot, in px.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 3`.
    #[must_use]
    pub fn offset_y_at(&self, idx: u32) -> f64 {
        self.offset_y[idx as usize]
    }

    /// Returns the image reference of the given slot.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 3`.
    #[must_use]
    pub fn image_at(&self, idx: u32) -> &ImageRef {
        &self.image[idx as usize]
    }

    /// Returns the depth plane occupying the given slot.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 3`.
    #[must_use]
    pub const fn plane_at(&self, idx: u32) -> DepthPlane {
        DepthPlane::from_index(idx)
    }

    pub(super) fn dirty_mut(&mut self) -> &mut DirtyTracker<u32> {
        &mut self.dirty
    }

    pub(super) fn take_lifecycle(&mut self, added: &mut Vec<u32>, removed: &mut Vec<u32>) {
        core::mem::swap(&mut self.pending_added, added);
        core::mem::swap(&mut self.pending_removed, removed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParallaxConfig;

    fn sample_stack() -> LayerStack {
        LayerStack::new(&ParallaxConfig::new("bg.webp", "mid.webp", "fg.webp"))
    }

    #[test]
    fn new_stack_starts_at_zero_offset() {
        let stack = sample_stack();
        for plane in DepthPlane::ALL {
            assert_eq!(stack.offset_y_at(plane.index()), 0.0);
        }
    }

    #[test]
    fn set_progress_updates_all_offsets() {
        let mut stack = sample_stack();
        stack.set_progress(1.0);
        let eps = 1e-12;
        assert!((stack.offset_y_at(0) - 80.0).abs() < eps);
        assert!((stack.offset_y_at(1) - 50.0).abs() < eps);
        assert!((stack.offset_y_at(2) - 20.0).abs() < eps);
    }

    #[test]
    fn images_follow_slot_order() {
        let stack = sample_stack();
        assert_eq!(stack.image_at(0).as_str(), "bg.webp");
        assert_eq!(stack.image_at(1).as_str(), "mid.webp");
        assert_eq!(stack.image_at(2).as_str(), "fg.webp");
    }

    #[test]
    fn release_is_idempotent() {
        let mut stack = sample_stack();
        let _ = stack.evaluate();

        stack.release();
        let first = stack.evaluate();
        assert_eq!(first.removed.len(), PLANE_COUNT);

        stack.release();
        let second = stack.evaluate();
        assert!(second.removed.is_empty(), "double release must not re-remove");
    }

    #[test]
    fn set_progress_after_release_is_inert() {
        let mut stack = sample_stack();
        let _ = stack.evaluate();
        stack.release();
        let _ = stack.evaluate();

        stack.set_progress(0.7);
        let changes = stack.evaluate();
        assert!(changes.transforms.is_empty());
    }
}

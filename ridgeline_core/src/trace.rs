// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the recompute loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! recompute-loop instrumentation calls at each stage. All method bodies
//! default to no-ops, so implementing only the events you care about is
//! fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.

use crate::coalesce::RecomputeReason;
use crate::layer::FrameChanges;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once per mount, after the initial recompute.
#[derive(Clone, Copy, Debug)]
pub struct AttachEvent {
    /// Scroll progress at mount time.
    pub progress: f64,
    /// Number of layers mounted.
    pub layers: u32,
}

/// Emitted for every recompute that runs.
#[derive(Clone, Copy, Debug)]
pub struct RecomputeEvent {
    /// Monotonically increasing recompute counter for this mount.
    pub sequence: u64,
    /// What triggered the recompute.
    pub reason: RecomputeReason,
    /// The freshly computed scroll progress.
    pub progress: f64,
}

/// Emitted after a change set is handed to the presenter.
#[derive(Clone, Copy, Debug)]
pub struct ApplyEvent {
    /// Recompute counter this apply belongs to.
    pub sequence: u64,
    /// Number of slots whose offset was rewritten.
    pub transforms: u32,
    /// Number of slots whose content was rewritten.
    pub content: u32,
    /// Number of slots added.
    pub added: u32,
    /// Number of slots removed.
    pub removed: u32,
}

impl ApplyEvent {
    /// Summarizes a change set for the given recompute counter.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "a stack has exactly three slots"
    )]
    pub fn new(sequence: u64, changes: &FrameChanges) -> Self {
        Self {
            sequence,
            transforms: changes.transforms.len() as u32,
            content: changes.content.len() as u32,
            added: changes.added.len() as u32,
            removed: changes.removed.len() as u32,
        }
    }
}

/// Emitted once per teardown.
#[derive(Clone, Copy, Debug)]
pub struct DetachEvent {
    /// Number of layers removed by the teardown.
    pub layers_removed: u32,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the recompute loop.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called once per mount, after the initial recompute.
    fn on_attach(&mut self, e: &AttachEvent) {
        _ = e;
    }

    /// Called for every recompute that runs.
    fn on_recompute(&mut self, e: &RecomputeEvent) {
        _ = e;
    }

    /// Called after a change set is handed to the presenter.
    fn on_apply(&mut self, e: &ApplyEvent) {
        _ = e;
    }

    /// Called once per teardown.
    fn on_detach(&mut self, e: &DetachEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits an [`AttachEvent`].
    #[inline]
    pub fn attach(&mut self, e: &AttachEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_attach(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RecomputeEvent`].
    #[inline]
    pub fn recompute(&mut self, e: &RecomputeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_recompute(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`ApplyEvent`].
    #[inline]
    pub fn apply(&mut self, e: &ApplyEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_apply(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DetachEvent`].
    #[inline]
    pub fn detach(&mut self, e: &DetachEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_detach(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParallaxConfig;
    use crate::layer::LayerStack;

    fn sample_recompute() -> RecomputeEvent {
        RecomputeEvent {
            sequence: 7,
            reason: RecomputeReason::Scroll,
            progress: 0.25,
        }
    }

    #[test]
    fn apply_event_counts_change_lists() {
        let mut stack = LayerStack::new(&ParallaxConfig::new("a", "b", "c"));
        let changes = stack.evaluate();
        let e = ApplyEvent::new(3, &changes);
        assert_eq!(e.sequence, 3);
        assert_eq!(e.added, 3);
        assert_eq!(e.transforms, 3);
        assert_eq!(e.content, 3);
        assert_eq!(e.removed, 0);
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_recompute(&sample_recompute());
        sink.on_detach(&DetachEvent { layers_removed: 3 });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.recompute(&sample_recompute());
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            sequences: Vec<u64>,
        }
        impl TraceSink for RecordingSink {
            fn on_recompute(&mut self, e: &RecomputeEvent) {
                self.sequences.push(e.sequence);
            }
        }

        let mut sink = RecordingSink {
            sequences: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.recompute(&sample_recompute());
        drop(tracer);
        assert_eq!(sink.sequences, &[7]);
    }
}

// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecordingSink`] implements [`TraceSink`] and keeps every event it
//! receives as a [`RecordedEvent`], in arrival order. Tests and harnesses
//! use it to assert on recompute counts, coalescing behavior, and the
//! progress trajectory of a scripted scroll.

use ridgeline_core::trace::{ApplyEvent, AttachEvent, DetachEvent, RecomputeEvent, TraceSink};

/// One recorded trace event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// A mount completed its initial recompute.
    Attach(AttachEvent),
    /// A recompute ran.
    Recompute(RecomputeEvent),
    /// A change set was handed to the presenter.
    Apply(ApplyEvent),
    /// A mount was torn down.
    Detach(DetachEvent),
}

/// A [`TraceSink`] that appends every event to an in-memory log.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<RecordedEvent>,
}

impl RecordingSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Returns how many recomputes were observed.
    #[must_use]
    pub fn recompute_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, RecordedEvent::Recompute(_)))
            .count()
    }

    /// Returns the progress of the most recent recompute, if any ran.
    #[must_use]
    pub fn last_progress(&self) -> Option<f64> {
        self.events.iter().rev().find_map(|e| match e {
            RecordedEvent::Recompute(r) => Some(r.progress),
            _ => None,
        })
    }

    /// Consumes the recorder and returns the event log.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }
}

impl TraceSink for RecordingSink {
    fn on_attach(&mut self, e: &AttachEvent) {
        self.events.push(RecordedEvent::Attach(*e));
    }

    fn on_recompute(&mut self, e: &RecomputeEvent) {
        self.events.push(RecordedEvent::Recompute(*e));
    }

    fn on_apply(&mut self, e: &ApplyEvent) {
        self.events.push(RecordedEvent::Apply(*e));
    }

    fn on_detach(&mut self, e: &DetachEvent) {
        self.events.push(RecordedEvent::Detach(*e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridgeline_core::coalesce::RecomputeReason;

    #[test]
    fn records_in_arrival_order() {
        let mut sink = RecordingSink::new();
        sink.on_recompute(&RecomputeEvent {
            sequence: 0,
            reason: RecomputeReason::Initial,
            progress: 0.0,
        });
        sink.on_recompute(&RecomputeEvent {
            sequence: 1,
            reason: RecomputeReason::Scroll,
            progress: 0.3,
        });
        sink.on_detach(&DetachEvent { layers_removed: 3 });

        assert_eq!(sink.recompute_count(), 2);
        assert_eq!(sink.last_progress(), Some(0.3));
        assert!(matches!(sink.events()[2], RecordedEvent::Detach(_)));
    }

    #[test]
    fn empty_recorder_has_no_progress() {
        let sink = RecordingSink::new();
        assert_eq!(sink.recompute_count(), 0);
        assert_eq!(sink.last_progress(), None);
    }
}

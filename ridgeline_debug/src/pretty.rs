// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per
//! event to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use ridgeline_core::coalesce::RecomputeReason;
use ridgeline_core::trace::{ApplyEvent, AttachEvent, DetachEvent, RecomputeEvent, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

fn reason_name(reason: RecomputeReason) -> &'static str {
    match reason {
        RecomputeReason::Initial => "initial",
        RecomputeReason::Scroll => "scroll",
        RecomputeReason::Resize => "resize",
        RecomputeReason::ConfigChange => "config",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_attach(&mut self, e: &AttachEvent) {
        let _ = writeln!(
            self.writer,
            "[attach] layers={} progress={:.3}",
            e.layers, e.progress,
        );
    }

    fn on_recompute(&mut self, e: &RecomputeEvent) {
        let _ = writeln!(
            self.writer,
            "[recompute] #{} {} progress={:.3}",
            e.sequence,
            reason_name(e.reason),
            e.progress,
        );
    }

    fn on_apply(&mut self, e: &ApplyEvent) {
        let _ = writeln!(
            self.writer,
            "[apply] #{} transforms={} content={} added={} removed={}",
            e.sequence, e.transforms, e.content, e.added, e.removed,
        );
    }

    fn on_detach(&mut self, e: &DetachEvent) {
        let _ = writeln!(self.writer, "[detach] removed={}", e.layers_removed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_event() {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        sink.on_attach(&AttachEvent {
            progress: 0.0,
            layers: 3,
        });
        sink.on_recompute(&RecomputeEvent {
            sequence: 1,
            reason: RecomputeReason::Scroll,
            progress: 0.25,
        });
        sink.on_detach(&DetachEvent { layers_removed: 3 });

        let out = String::from_utf8(sink.writer).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "[attach] layers=3 progress=0.000");
        assert_eq!(lines[1], "[recompute] #1 scroll progress=0.250");
        assert_eq!(lines[2], "[detach] removed=3");
    }
}

// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated scroll loop that exercises the tracing and diagnostics
//! pipeline.
//!
//! Scrolls a container from below the viewport to fully past it, delivering
//! bursty scroll events into the [`FrameCoalescer`] so the coalescing ratio
//! is visible in the output. Events are recorded to both a
//! [`PrettyPrintSink`](ridgeline_debug::pretty::PrettyPrintSink) and a
//! [`RecordingSink`](ridgeline_debug::recorder::RecordingSink), then
//! summarized.
//!
//! [`FrameCoalescer`]: ridgeline_core::coalesce::FrameCoalescer

use ridgeline_core::backend::Presenter;
use ridgeline_core::coalesce::{FrameCoalescer, RecomputeReason};
use ridgeline_core::config::ParallaxConfig;
use ridgeline_core::engine::ParallaxEngine;
use ridgeline_core::geometry::ScrollGeometry;
use ridgeline_core::layer::{FrameChanges, LayerStack, PLANE_COUNT};
use ridgeline_core::trace::{ApplyEvent, AttachEvent, DetachEvent, RecomputeEvent, TraceSink};

use ridgeline_debug::pretty::PrettyPrintSink;
use ridgeline_debug::recorder::RecordingSink;

const FRAME_COUNT: u64 = 120;
const VIEWPORT_HEIGHT: f64 = 800.0;
const CONTAINER_HEIGHT: f64 = 480.0;
/// Container top at the start of the script, well below the viewport.
const START_TOP: f64 = 1600.0;
/// Pixels scrolled per delivered event.
const SCROLL_STEP: f64 = 9.0;

/// Presenter stand-in that counts style writes instead of touching a DOM.
#[derive(Debug, Default)]
struct CountingPresenter {
    style_writes: u64,
}

impl Presenter for CountingPresenter {
    fn apply(&mut self, _stack: &LayerStack, changes: &FrameChanges) {
        self.style_writes +=
            (changes.transforms.len() + changes.content.len() + changes.added.len()) as u64;
    }
}

fn main() {
    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut recorder = RecordingSink::new();

    // -- engine ------------------------------------------------------------
    let config = ParallaxConfig::new(
        "mountains/back.webp",
        "mountains/mid.webp",
        "mountains/front.webp",
    )
    .with_height("60vh");
    let mut engine = ParallaxEngine::new(config);
    let mut presenter = CountingPresenter::default();
    let coalescer = FrameCoalescer::new();
    let mut changes = FrameChanges::default();

    let mut container_top = START_TOP;
    let mut sequence: u64 = 0;
    let mut events_delivered: u64 = 0;

    // Initial recompute at mount time.
    let geometry = ScrollGeometry::from_metrics(container_top, CONTAINER_HEIGHT, VIEWPORT_HEIGHT);
    engine.recompute_into(geometry, &mut changes);
    presenter.apply(engine.stack(), &changes);
    #[expect(
        clippy::cast_possible_truncation,
        reason = "a stack has exactly three slots"
    )]
    let attach = AttachEvent {
        progress: engine.progress(),
        layers: PLANE_COUNT as u32,
    };
    pretty.on_attach(&attach);
    recorder.on_attach(&attach);

    // -- simulated loop ----------------------------------------------------
    for frame_index in 0..FRAME_COUNT {
        // Bursty delivery: between 0 and 3 scroll events land in this frame.
        let burst = frame_index % 4;
        let mut scheduled = false;
        for _ in 0..burst {
            container_top -= SCROLL_STEP;
            events_delivered += 1;
            if coalescer.request() {
                scheduled = true;
            }
        }

        // Frame boundary: run the single coalesced recompute, if any.
        if scheduled {
            let geometry =
                ScrollGeometry::from_metrics(container_top, CONTAINER_HEIGHT, VIEWPORT_HEIGHT);
            engine.recompute_into(geometry, &mut changes);
            presenter.apply(engine.stack(), &changes);

            let recompute = RecomputeEvent {
                sequence,
                reason: RecomputeReason::Scroll,
                progress: engine.progress(),
            };
            let apply = ApplyEvent::new(sequence, &changes);
            pretty.on_recompute(&recompute);
            recorder.on_recompute(&recompute);
            pretty.on_apply(&apply);
            recorder.on_apply(&apply);

            sequence += 1;
            coalescer.finish();
        }
    }

    // Teardown.
    let torn_down = engine.detach();
    presenter.apply(engine.stack(), &torn_down);
    #[expect(
        clippy::cast_possible_truncation,
        reason = "a stack has exactly three slots"
    )]
    let detach = DetachEvent {
        layers_removed: torn_down.removed.len() as u32,
    };
    pretty.on_detach(&detach);
    recorder.on_detach(&detach);

    println!(
        "{} events coalesced into {} recomputes ({} frames, {} style writes, final progress {:.3})",
        events_delivered,
        recorder.recompute_count(),
        FRAME_COUNT,
        presenter.style_writes,
        recorder.last_progress().unwrap_or(0.0),
    );
}

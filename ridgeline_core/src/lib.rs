// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types and depth-layer stack for scroll-synchronized parallax.
//!
//! `ridgeline_core` provides the data model and evaluation logic for a
//! three-layer parallax effect: a background, middle, and foreground image
//! layer whose vertical offsets track how far a host-owned container has
//! scrolled through the viewport. It is `no_std` compatible (with `alloc`)
//! and leaves all platform work (event listeners, frame callbacks, native
//! tree mutation) to backend crates.
//!
//! # Architecture
//!
//! The crate is organized around an event-driven recompute loop that turns
//! scroll and resize events into incremental style updates:
//!
//! ```text
//!   Backend (scroll/resize events)
//!       │
//!       ▼
//!   FrameCoalescer::request() ──► one-shot frame callback
//!                                       │
//!                                       ▼
//!   ScrollGeometry ──► ParallaxEngine::recompute() ──► FrameChanges
//!                                                           │
//!                      ┌────────────────────────────────────┘
//!                      ▼
//!   Presenter::apply() ──► FrameCoalescer::finish()
//! ```
//!
//! **[`layer`]** — The fixed three-plane layer stack. Offsets are computed
//! from scroll progress; the stack is owned and mutated exclusively by the
//! engine, never by callers.
//!
//! **[`geometry`]** — [`ScrollGeometry`](geometry::ScrollGeometry), a
//! sampled snapshot of the container's viewport position, and the clamped
//! scroll-progress computation.
//!
//! **[`engine`]** — [`ParallaxEngine`](engine::ParallaxEngine), the
//! attach/recompute/detach state machine tying config, stack, and progress
//! together.
//!
//! **[`coalesce`]** — The frame-aligned coalescing guard that keeps
//! recomputation to at most one execution per rendering frame.
//!
//! **[`backend`]** — The [`Presenter`](backend::Presenter) trait that
//! platform backends implement to apply frame changes to native trees.
//!
//! **[`config`]** — [`ParallaxConfig`](config::ParallaxConfig): the three
//! image references and optional container height. Config identity changes
//! tear down and re-create all layers.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types
//! for recompute-loop instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod coalesce;
pub mod config;
pub mod dirty;
pub mod engine;
pub mod geometry;
pub mod layer;
pub mod trace;

// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording and pretty-printing for ridgeline diagnostics.
//!
//! This crate provides [`TraceSink`](ridgeline_core::trace::TraceSink)
//! implementations for development and tests:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`recorder::RecordingSink`] — in-memory event log with count accessors.

pub mod pretty;
pub mod recorder;

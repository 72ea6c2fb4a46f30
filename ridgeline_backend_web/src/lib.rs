// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for ridgeline.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`Parallax`]: mount handle — attach, config swap, idempotent detach
//! - [`DomPresenter`]: DOM element management for the three layers
//! - [`MountOptions`]: caption, scrim, and trace instrumentation
//! - [`probe_geometry`]: bounding-rect + viewport-height sampling
//!
//! Scroll events are coalesced to one recompute per rendering frame through
//! a one-shot `requestAnimationFrame` registration; resize events schedule
//! their own frame-aligned recompute.

#![no_std]

extern crate alloc;

mod decor;
mod events;
mod measure;
mod mount;
mod presenter;
mod raf;

pub use decor::{CaptionBackdrop, CaptionPlacement};
pub use measure::probe_geometry;
pub use mount::{MountOptions, Parallax};
pub use presenter::DomPresenter;
pub use ridgeline_core::backend::Presenter;

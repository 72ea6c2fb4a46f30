// Copyright 2026 the Ridgeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! Ridgeline uses multi-channel dirty tracking (via [`understory_dirty`]) to
//! batch style invalidation between recomputes. Each channel represents an
//! independent category of change to a layer slot.
//!
//! The stack is a flat, fixed set of three slots, so there are no dependency
//! edges and nothing propagates: a mark affects exactly the marked slot.
//! Structural changes (slot creation and release) are tracked through the
//! stack's pending-added/pending-removed lists rather than a channel.
//!
//! # Consumption
//!
//! Callers never query dirty state directly. Each
//! [`LayerStack::evaluate`](crate::layer::LayerStack::evaluate) call drains
//! all channels and surfaces the results as
//! [`FrameChanges`](crate::layer::FrameChanges), which backends
//! [consume](crate::backend::Presenter::apply) to apply incremental updates.

use understory_dirty::Channel;

/// Parallax offset changed — the slot's translation style must be rewritten.
pub const TRANSFORM: Channel = Channel::new(0);

/// Image reference changed (or was first assigned) — the slot's content
/// style must be rewritten.
pub const CONTENT: Channel = Channel::new(1);

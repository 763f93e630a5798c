// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Virtual: windowed rendering for large seat sections.
//!
//! A section's seats form a dense strip indexed `0..len` in row-major order.
//! Small sections are drawn in full. Once a section reaches a configurable
//! threshold, only the seats inside a fixed-size window over that strip are
//! materialized, driven by a scroll offset.
//!
//! The core concepts are:
//!
//! - [`ExtentModel`]: a 1D strip of items with per-item extents and
//!   offset/index queries. [`FixedExtentModel`] gives every item the same
//!   pitch.
//! - [`compute_visible_strip`]: given a scroll offset, window extent, and
//!   overscan distances, returns which indices to materialize plus the padding
//!   before and after them.
//! - [`Virtualizer`]: picks a [`RenderMode`] from the item count and produces a
//!   [`RenderPlan`] for one section.
//!
//! The mode is recomputed on every call; nothing is cached, so a section that
//! grows past the threshold switches mode on its next plan.
//!
//! ## Minimal example
//!
//! ```rust
//! use seatmap_virtual::{RenderMode, VirtualConfig, Virtualizer};
//!
//! let virtualizer = Virtualizer::new(VirtualConfig::default());
//!
//! // 200 seats: drawn directly.
//! let plan = virtualizer.plan(200, 0.0);
//! assert_eq!(plan.mode, RenderMode::Direct);
//! assert_eq!(plan.range(), 0..200);
//!
//! // 5000 seats: a 600-unit window over a 30-unit pitch shows 20 seats.
//! let plan = virtualizer.plan(5000, 900.0);
//! assert_eq!(plan.mode, RenderMode::Windowed);
//! assert_eq!(plan.range(), 30..50);
//! assert_eq!(plan.strip.before_extent, 900.0);
//! ```
//!
//! All extents and offsets are expected to be finite and non-negative.
//! This crate is `no_std`.

#![no_std]

mod fixed;
mod model;
mod plan;

pub use fixed::FixedExtentModel;
pub use model::{ExtentModel, VisibleStrip, compute_visible_strip};
pub use plan::{RenderMode, RenderPlan, VirtualConfig, Virtualizer};

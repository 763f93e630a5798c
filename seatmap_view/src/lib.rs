// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap View: the viewport transform engine.
//!
//! This crate owns the pan/zoom state of a seating chart and the mapping
//! between screen (pointer) coordinates and scene coordinates. It focuses on:
//! - A small [`Transform`] value: `{ scale, tx, ty }`, with translation in
//!   scene units.
//! - Anchor-preserving zoom: the scene point under the cursor or pinch
//!   center stays put while the scale changes.
//! - Pixel panning that is independent of the current zoom level.
//! - Fitting the whole logical canvas into the container.
//!
//! It does **not** interpret input events; see `seatmap_input` for that.
//! Callers feed container measurements via [`Viewport::set_container`] and
//! the logical canvas size via [`Viewport::set_canvas_size`].
//!
//! ## Coordinate model
//!
//! The container is a rectangle in screen pixels. Its *base scale* is the
//! number of pixels per scene unit before any user zoom: container width
//! divided by canvas width. A scene point `p` is drawn at
//!
//! ```text
//! screen = container.origin + (p + (tx, ty)) * scale * base_scale
//! ```
//!
//! which is `translate(tx, ty)` followed by `scale(scale)` applied to the
//! scene root.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use seatmap_view::Viewport;
//!
//! let mut view = Viewport::default();
//! view.set_canvas_size(Size::new(800.0, 600.0));
//! view.set_container(Rect::new(0.0, 0.0, 800.0, 600.0));
//!
//! // Wheel zoom anchored at the pointer.
//! let pointer = Point::new(200.0, 150.0);
//! let before = view.screen_to_scene(pointer, None).unwrap();
//! view.zoom_at_point(pointer, 1.1);
//! let after = view.screen_to_scene(pointer, None).unwrap();
//! assert!((before - after).hypot() < 1e-9);
//!
//! // Frame the whole canvas.
//! view.fit_to_container();
//! ```
//!
//! ## Unmeasured containers
//!
//! Until the container has a positive size, every operation that needs
//! metrics is a no-op that leaves stored state untouched.
//! [`Viewport::metrics`] reports this as [`ViewportNotReady`] for callers
//! that want to defer work.
//!
//! This crate is `no_std`.

#![no_std]

mod metrics;
mod transform;
mod viewport;

pub use metrics::{ContainerMetrics, ViewportNotReady};
pub use transform::Transform;
pub use viewport::{ViewConfig, Viewport, ViewportDebugInfo};

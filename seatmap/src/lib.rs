// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap: a headless interactive seating chart.
//!
//! This crate composes the seatmap primitives into one controller,
//! [`SeatingMap`]:
//!
//! - `seatmap_scene`: the immutable venue ([`Scene`], sections, rows, seats).
//! - `seatmap_view`: pan/zoom with anchored zoom and fit-to-container.
//! - `seatmap_input`: wheel, pointer, touch, and keyboard gestures.
//! - `seatmap_selection`: capacity-bounded seat selection and focus.
//! - `seatmap_virtual`: windowed materialization of large sections.
//!
//! The host feeds container geometry, input events, and clock ticks in, and
//! reads a [`SceneView`] back out to draw. Nothing here draws or blocks.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use kurbo::{Point, Rect};
//! use seatmap::{InputEvent, SeatFill, SeatingMap};
//! use seatmap::scene::{Placement, SceneBuilder};
//!
//! let scene = SceneBuilder::new(800.0, 600.0)
//!     .venue("arena", "Arena")
//!     .grid_section("A", Placement::new(50.0, 50.0, 1.0), 10, 20)
//!     .build()
//!     .unwrap();
//!
//! let mut map = SeatingMap::default();
//! map.load_scene(Arc::new(scene));
//! // The fit waits for a measured container.
//! assert!(map.is_fit_pending());
//! map.set_container(Rect::new(0.0, 0.0, 1024.0, 768.0));
//! assert!(!map.is_fit_pending());
//!
//! map.click_seat("A-1-1");
//! let response = map.handle_event(&InputEvent::Wheel {
//!     position: Point::new(512.0, 384.0),
//!     delta_y: -100.0,
//! });
//! assert!(response.changed && response.prevent_default);
//!
//! let frame = map.render().unwrap();
//! assert_eq!(frame.seat("A-1-1").unwrap().fill, SeatFill::Selected);
//! assert_eq!(frame.summary.count, 1);
//! ```
//!
//! ## Logging
//!
//! Committed transitions are logged with `tracing` at `debug` level; ignored
//! or deferred input at `trace`. Install any subscriber to see them.
//!
//! ## Features
//!
//! - `std` (default): build the whole stack against `std`.
//! - `libm`: floating-point math for `no_std` targets.
//! - `serde`: deserialize [`SeatingConfig`] and scenes from JSON-like data.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod hint;
mod map;
mod render;

pub use config::SeatingConfig;
pub use hint::{HINT_TEXT, HintTimer};
pub use map::{EventResponse, SeatingMap};
pub use render::{
    FOCUS_STROKE, SceneView, SeatFill, SeatView, SectionView, SelectedSeatView, TierClass,
};

pub use seatmap_input::{Command, GestureSession, InputEvent, Key, Modifiers, Touches};
pub use seatmap_selection::SelectionSummary;
pub use seatmap_scene::Scene;

/// Venue model.
pub use seatmap_scene as scene;
/// Selection store.
pub use seatmap_selection as selection;
/// Viewport transform engine.
pub use seatmap_view as view;
/// Windowed rendering.
pub use seatmap_virtual as virtualization;
/// Gesture dispatch.
pub use seatmap_input as input;

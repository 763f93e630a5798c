// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Selection: the seat selection store.
//!
//! This crate owns the interactive state of a seating chart that is not
//! geometry: which seats are selected, which seat has focus, which scene is
//! loaded, and whether a load is in flight. It does **not** know how seats are
//! drawn or how input arrives; hosts map clicks and keys onto the operations
//! here.
//!
//! The pieces are:
//! - [`BoundedSelection`]: an ordered, duplicate-free container with a fixed
//!   capacity and a revision counter.
//! - [`SelectionState`] and [`SeatAction`]: a plain state value and the
//!   operations on it. [`SelectionState::reduce`] is pure: it returns the next
//!   state, or `None` when the action does not apply.
//! - [`SelectionStore`]: owns a state, commits reduced states, and exposes the
//!   derived values (total price, remaining capacity).
//!
//! Rejected operations are not errors. Selecting a sold seat, or a ninth seat
//! with a capacity of eight, simply leaves the state unchanged.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use seatmap_scene::{Placement, SceneBuilder};
//! use seatmap_selection::{SelectionConfig, SelectionStore};
//!
//! let scene = Arc::new(
//!     SceneBuilder::new(800.0, 600.0)
//!         .grid_section("A", Placement::IDENTITY, 2, 5)
//!         .build()
//!         .unwrap(),
//! );
//!
//! let mut store = SelectionStore::new(SelectionConfig::default());
//! store.load_scene(scene.clone());
//!
//! let seat = scene.item("A-1-1").unwrap();
//! assert!(store.select(seat.clone()));
//! assert!(!store.select(seat.clone())); // already selected
//! assert_eq!(store.total_price(), 50);
//! assert_eq!(store.remaining_capacity(), 7);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounded;
mod state;
mod store;

pub use bounded::BoundedSelection;
pub use state::{SeatAction, SeatRef, SelectionState};
pub use store::{SelectionConfig, SelectionStore, SelectionSummary};

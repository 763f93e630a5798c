// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Scene: the static description of a venue.
//!
//! A [`Scene`] is an immutable snapshot of a venue: a logical canvas size and
//! an ordered list of [`Section`]s, each holding ordered [`Row`]s of
//! [`Item`]s (seats). It is pure data. Nothing in this crate mutates a scene
//! after construction; a reload replaces the whole value.
//!
//! Scenes are validated when they are built. Duplicate seat ids, negative
//! canvas dimensions and similar problems are reported as
//! [`SceneLoadMalformed`] to whoever is loading the data, which is also the
//! layer responsible for surfacing them to a user.
//!
//! Items are stored as `Arc<Item>` so selection state elsewhere can hold a
//! reference to a seat without copying it.
//!
//! ## Minimal example
//!
//! ```rust
//! use seatmap_scene::{Placement, SceneBuilder};
//!
//! let scene = SceneBuilder::new(800.0, 600.0)
//!     .venue("venue-1", "Example Venue")
//!     .grid_section("A", Placement::new(50.0, 50.0, 1.0), 10, 20)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(scene.item_count(), 200);
//! let seat = scene.item("A-3-7").unwrap();
//! assert_eq!(seat.price_tier, 3);
//! ```
//!
//! ## Features
//!
//! - `serde`: deserialize a [`Scene`] from the venue JSON shape
//!   (`venueId`, `map`, `sections[].transform`, `rows[].seats[]`). Input goes
//!   through the same validation as [`Scene::new`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod builder;
mod error;
mod id;
mod item;
mod scene;
mod section;
#[cfg(feature = "serde")]
mod wire;

pub use builder::SceneBuilder;
pub use error::SceneLoadMalformed;
pub use id::ItemId;
pub use item::{Item, Row, SeatStatus};
pub use scene::{ItemLocation, Scene};
pub use section::{Placement, Section};

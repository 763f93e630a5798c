// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Input: gesture dispatch for a pan/zoom seating chart.
//!
//! This crate normalizes five input modalities into a small vocabulary of
//! [`Command`]s:
//!
//! - **Wheel**: zoom at the pointer, out when scrolling down and in when
//!   scrolling up.
//! - **Mouse drag**: press, move, release. Each move pans by the delta since
//!   the previous one.
//! - **Single-touch drag**: as mouse drag.
//! - **Two-finger pinch**: zoom at the midpoint by the ratio of finger
//!   distances since the previous move.
//! - **Keyboard**: arrows pan (faster with Shift), `+`/`=` and `-` zoom, `f`
//!   fits, `0` resets, `Escape` clears the selection. Keys held with Ctrl,
//!   Alt, or Meta are not handled, so platform shortcuts keep working.
//!
//! The [`Dispatcher`] tracks which continuous gesture is running in a
//! [`GestureSession`] and never touches transform or selection state; the host
//! applies the returned command and honors [`Dispatch::prevent_default`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use seatmap_input::{Command, Dispatcher, InputEvent, InputConfig, Touches};
//!
//! let mut input = Dispatcher::new(InputConfig::default());
//!
//! let start: Touches = [Point::new(350.0, 300.0), Point::new(450.0, 300.0)].into();
//! input.handle(&InputEvent::TouchStart(start));
//!
//! let spread: Touches = [Point::new(325.0, 300.0), Point::new(475.0, 300.0)].into();
//! let out = input.handle(&InputEvent::TouchMove(spread));
//! assert_eq!(
//!     out.command,
//!     Some(Command::ZoomAt { anchor: Point::new(400.0, 300.0), factor: 1.5 })
//! );
//! assert!(out.prevent_default);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod dispatch;
mod event;
mod session;

pub use dispatch::{Command, Dispatch, Dispatcher, InputConfig};
pub use event::{InputEvent, Key, Modifiers, Touches};
pub use session::GestureSession;

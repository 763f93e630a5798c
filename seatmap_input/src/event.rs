// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input events as delivered by the host.
//!
//! Positions are screen pixels in the same space as the container rectangle
//! given to the viewport, not relative to the container's origin (for a DOM
//! host, `clientX`/`clientY`). Touch events carry the
//! touches still on the surface *after* the event, so a `TouchEnd` with one
//! point means one finger was lifted from a two-finger gesture.

use kurbo::Point;
use smallvec::SmallVec;

/// Touch points currently on the surface.
pub type Touches = SmallVec<[Point; 2]>;

bitflags::bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Alt or Option.
        const ALT   = 0b0000_0100;
        /// Meta, Command, or Windows.
        const META  = 0b0000_1000;
    }
}

/// A logical key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Escape.
    Escape,
    /// A key that produces a character.
    Character(char),
    /// Anything else.
    Other,
}

impl Key {
    /// Parses a DOM `KeyboardEvent.key` value.
    ///
    /// Single-character values become [`Key::Character`]; unknown names map to
    /// [`Key::Other`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "Escape" | "Esc" => Self::Escape,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// One input event.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse wheel or trackpad scroll. Positive `delta_y` scrolls down.
    Wheel {
        /// Pointer position.
        position: Point,
        /// Vertical scroll delta.
        delta_y: f64,
    },
    /// Primary button pressed.
    PointerDown {
        /// Pointer position.
        position: Point,
    },
    /// Pointer moved.
    PointerMove {
        /// Pointer position.
        position: Point,
    },
    /// Primary button released.
    PointerUp,
    /// Pointer left the container.
    PointerLeave,
    /// A finger touched the surface.
    TouchStart(Touches),
    /// Fingers moved.
    TouchMove(Touches),
    /// A finger was lifted or the touch was canceled.
    TouchEnd(Touches),
    /// A key was pressed.
    Key {
        /// The key.
        key: Key,
        /// Held modifiers.
        modifiers: Modifiers,
    },
}

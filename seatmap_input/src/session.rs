// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture session: which continuous gesture, if any, is in progress.
//!
//! ## Usage
//!
//! 1) Start a drag with [`GestureSession::start_drag`] or a pinch with
//!    [`GestureSession::start_pinch`].
//! 2) On each move, call [`GestureSession::drag_to`] or
//!    [`GestureSession::pinch_to`] to get the increment since the last move.
//! 3) When fingers are lifted, call [`GestureSession::reseed`] with what is
//!    left; [`GestureSession::end`] returns to idle.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use seatmap_input::GestureSession;
//!
//! let mut session = GestureSession::default();
//! session.start_drag(Point::new(10.0, 20.0));
//! assert_eq!(session.drag_to(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//!
//! session.start_pinch(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
//! let (mid, factor) = session
//!     .pinch_to(Point::new(0.0, 0.0), Point::new(150.0, 0.0))
//!     .unwrap();
//! assert_eq!(mid, Point::new(75.0, 0.0));
//! assert_eq!(factor, 1.5);
//! ```

use kurbo::{Point, Vec2};

/// The gesture in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureSession {
    /// No gesture.
    #[default]
    Idle,
    /// One pointer or finger is panning.
    Dragging {
        /// The last position seen.
        last: Point,
    },
    /// Two fingers are pinching.
    Pinching {
        /// Distance between the fingers at the last move. May be zero.
        last_distance: f64,
    },
}

impl GestureSession {
    /// Returns `true` when no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns `true` while dragging.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns `true` while pinching.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        matches!(self, Self::Pinching { .. })
    }

    /// Starts a drag at `pos`, replacing any gesture in progress.
    pub fn start_drag(&mut self, pos: Point) {
        *self = Self::Dragging { last: pos };
    }

    /// Moves the drag to `pos`, returning the delta since the last position.
    ///
    /// Returns `None` unless dragging.
    pub fn drag_to(&mut self, pos: Point) -> Option<Vec2> {
        match self {
            Self::Dragging { last } => {
                let delta = pos - *last;
                *last = pos;
                Some(delta)
            }
            _ => None,
        }
    }

    /// Starts a pinch between `a` and `b`, replacing any gesture in progress.
    pub fn start_pinch(&mut self, a: Point, b: Point) {
        *self = Self::Pinching {
            last_distance: a.distance(b),
        };
    }

    /// Moves the pinch, returning the midpoint and the distance ratio since
    /// the last move.
    ///
    /// Returns `None` unless pinching, or when either distance is zero. A zero
    /// previous distance is replaced so the next move can produce a ratio.
    pub fn pinch_to(&mut self, a: Point, b: Point) -> Option<(Point, f64)> {
        let Self::Pinching { last_distance } = self else {
            return None;
        };
        let distance = a.distance(b);
        let previous = *last_distance;
        *last_distance = distance;
        if previous > 0.0 && distance > 0.0 && distance.is_finite() {
            Some((a.midpoint(b), distance / previous))
        } else {
            None
        }
    }

    /// Re-seeds the session from the touches still on the surface.
    ///
    /// Two or more touches pinch between the first two, one touch drags from
    /// where it is, none ends the gesture.
    pub fn reseed(&mut self, touches: &[Point]) {
        match touches {
            [] => self.end(),
            [only] => self.start_drag(*only),
            [a, b, ..] => self.start_pinch(*a, *b),
        }
    }

    /// Ends any gesture.
    pub fn end(&mut self) {
        *self = Self::Idle;
    }
}

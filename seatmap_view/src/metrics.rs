// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Rect, Size};

/// Measured container geometry needed by every screen-space operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerMetrics {
    /// Container rectangle in screen pixels.
    pub rect: Rect,
    /// Logical canvas size in scene units.
    pub canvas: Size,
}

impl ContainerMetrics {
    /// Pixels per scene unit at `scale == 1`.
    ///
    /// This is the container width over the canvas width, or `1.0` when no
    /// canvas size is known.
    #[must_use]
    pub fn base_scale(&self) -> f64 {
        if self.canvas.width > 0.0 {
            self.rect.width() / self.canvas.width
        } else {
            1.0
        }
    }

    /// Top-left corner of the container in screen pixels.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.rect.origin()
    }

    /// Returns `true` if a positive canvas size is known.
    #[must_use]
    pub fn has_canvas(&self) -> bool {
        self.canvas.width > 0.0 && self.canvas.height > 0.0
    }
}

/// The container has not been laid out yet (zero or non-finite size).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ViewportNotReady;

impl fmt::Display for ViewportNotReady {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("viewport container has no measurable size")
    }
}

impl core::error::Error for ViewportNotReady {}

// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

use crate::ItemId;

/// Booking status of a seat.
///
/// Status is owned by the external data source. The seatmap core only reads
/// it, to decide whether a seat can be selected and how it is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SeatStatus {
    /// Free to select.
    #[default]
    Available,
    /// Temporarily held by another party.
    Held,
    /// Reserved but not yet paid.
    Reserved,
    /// Sold.
    Sold,
}

impl SeatStatus {
    /// Returns `true` for [`SeatStatus::Available`].
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }

    /// Lowercase name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Held => "held",
            Self::Reserved => "reserved",
            Self::Sold => "sold",
        }
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single seat.
///
/// Positions are in section-local scene units; the owning section's
/// [`Placement`](crate::Placement) maps them onto the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    /// Unique id within the scene.
    pub id: ItemId,
    /// 1-based column number within the row, when the source provides one.
    pub col: Option<u32>,
    /// Section-local x position.
    pub x: f64,
    /// Section-local y position.
    pub y: f64,
    /// Price tier; always at least `1` in a validated scene.
    pub price_tier: u32,
    /// Current booking status.
    pub status: SeatStatus,
}

impl Item {
    /// Creates an available seat at `(x, y)`.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, x: f64, y: f64, price_tier: u32) -> Self {
        Self {
            id: id.into(),
            col: None,
            x,
            y,
            price_tier,
            status: SeatStatus::Available,
        }
    }

    /// Returns this seat with the given status.
    #[must_use]
    pub fn with_status(mut self, status: SeatStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns this seat with the given column number.
    #[must_use]
    pub fn with_col(mut self, col: u32) -> Self {
        self.col = Some(col);
        self
    }

    /// Section-local position.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// An ordered row of seats.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    /// 1-based row number.
    pub index: u32,
    /// Seats in drawing order.
    pub items: Vec<Arc<Item>>,
}

impl Row {
    /// Creates a row from owned seats.
    #[must_use]
    pub fn new(index: u32, items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            index,
            items: items.into_iter().map(Arc::new).collect(),
        }
    }

    /// Number of seats in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the row has no seats.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

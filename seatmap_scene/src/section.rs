// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{Affine, Point, Rect, Vec2};

use crate::{Item, Row};

/// Affine placement of a section on the canvas: uniform scale, then offset.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Placement {
    /// Canvas x of the section origin.
    pub x: f64,
    /// Canvas y of the section origin.
    pub y: f64,
    /// Uniform scale applied to section-local coordinates.
    pub scale: f64,
}

impl Placement {
    /// Placement that leaves section-local coordinates unchanged.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a placement.
    #[must_use]
    pub const fn new(x: f64, y: f64, scale: f64) -> Self {
        Self { x, y, scale }
    }

    /// Section-local to canvas transform.
    #[must_use]
    pub fn affine(&self) -> Affine {
        Affine::translate(Vec2::new(self.x, self.y)) * Affine::scale(self.scale)
    }

    /// Maps a section-local point onto the canvas.
    #[must_use]
    pub fn apply(&self, local: Point) -> Point {
        Point::new(self.x + local.x * self.scale, self.y + local.y * self.scale)
    }

    /// Maps a section-local rectangle onto the canvas.
    #[must_use]
    pub fn apply_rect(&self, local: Rect) -> Rect {
        let p0 = self.apply(Point::new(local.x0, local.y0));
        let p1 = self.apply(Point::new(local.x1, local.y1));
        Rect::from_points(p0, p1)
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A section of the venue: a placement plus ordered rows.
///
/// Sections also answer flat, row-major index queries ([`Section::item_at`])
/// so virtualized rendering can address seat `i` without flattening the rows
/// on every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    id: String,
    label: String,
    placement: Placement,
    rows: Vec<Row>,
    // (flat index of first seat, row index) for every non-empty row.
    row_starts: Vec<(usize, usize)>,
    item_count: usize,
}

impl Section {
    /// Creates a section.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        placement: Placement,
        rows: Vec<Row>,
    ) -> Self {
        let mut row_starts = Vec::with_capacity(rows.len());
        let mut item_count = 0;
        for (row_idx, row) in rows.iter().enumerate() {
            if !row.is_empty() {
                row_starts.push((item_count, row_idx));
                item_count += row.len();
            }
        }
        Self {
            id: id.into(),
            label: label.into(),
            placement,
            rows,
            row_starts,
            item_count,
        }
    }

    /// Section id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human readable label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Placement on the canvas.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Rows in order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Total number of seats across all rows.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns the seat at flat, row-major index `index`.
    #[must_use]
    pub fn item_at(&self, index: usize) -> Option<&Arc<Item>> {
        if index >= self.item_count {
            return None;
        }
        let slot = self.row_starts.partition_point(|&(start, _)| start <= index) - 1;
        let (start, row) = self.row_starts[slot];
        self.rows[row].items.get(index - start)
    }

    /// Iterates all seats in row-major order.
    pub fn items(&self) -> impl Iterator<Item = &Arc<Item>> + '_ {
        self.rows.iter().flat_map(|row| row.items.iter())
    }
}

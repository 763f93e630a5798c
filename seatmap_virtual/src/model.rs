// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// A dense 1D strip of items indexed `0..len`.
///
/// Offsets are measured from the start of the strip; item `i` covers
/// `offset_of(i)..offset_of(i) + extent_of(i)`.
pub trait ExtentModel {
    /// Number of items.
    fn len(&self) -> usize;

    /// Returns `true` if the strip has no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all item extents.
    fn total_extent(&self) -> f64;

    /// Extent of item `index`. Out-of-range indices have zero extent.
    fn extent_of(&self, index: usize) -> f64;

    /// Offset of the start of item `index`.
    ///
    /// `offset_of(len)` is the total extent.
    fn offset_of(&self, index: usize) -> f64;

    /// Index of the item containing `offset`.
    ///
    /// Negative offsets map to `0`; offsets at or past the total extent map to
    /// `len`.
    fn index_at_offset(&self, offset: f64) -> usize;
}

/// The realized slice of a strip and the space around it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleStrip {
    /// First realized index.
    pub start: usize,
    /// One past the last realized index.
    pub end: usize,
    /// Extent of the items before `start`.
    pub before_extent: f64,
    /// Extent of the items at and after `end`.
    pub after_extent: f64,
    /// Total extent of the strip.
    pub content_extent: f64,
}

impl VisibleStrip {
    /// A strip that realizes nothing.
    pub const EMPTY: Self = Self {
        start: 0,
        end: 0,
        before_extent: 0.0,
        after_extent: 0.0,
        content_extent: 0.0,
    };

    /// The realized indices.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of realized items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if nothing is realized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Computes which items intersect a window onto `model`.
///
/// `scroll_offset` is clamped so the window never runs past the end of the
/// content. The window is then grown by `overscan_before` and
/// `overscan_after` and clipped to the content. Every item overlapping the
/// grown window is realized.
///
/// A strip with zero total extent realizes all of its items.
pub fn compute_visible_strip<M: ExtentModel + ?Sized>(
    model: &M,
    scroll_offset: f64,
    viewport_extent: f64,
    overscan_before: f64,
    overscan_after: f64,
) -> VisibleStrip {
    let len = model.len();
    if len == 0 {
        return VisibleStrip::EMPTY;
    }
    let total = model.total_extent().max(0.0);
    if total <= 0.0 {
        return VisibleStrip {
            start: 0,
            end: len,
            before_extent: 0.0,
            after_extent: 0.0,
            content_extent: total,
        };
    }

    let viewport = sanitize(viewport_extent);
    let max_scroll = (total - viewport).max(0.0);
    let scroll = sanitize(scroll_offset).min(max_scroll);

    let window_start = (scroll - sanitize(overscan_before)).max(0.0);
    let window_end = (scroll + viewport + sanitize(overscan_after)).min(total);

    let start = model.index_at_offset(window_start).min(len);
    let mut end = model.index_at_offset(window_end).min(len);
    // Include the item the window ends inside of.
    if end < len && model.offset_of(end) < window_end {
        end += 1;
    }
    let end = end.max(start);

    let before_extent = model.offset_of(start);
    VisibleStrip {
        start,
        end,
        before_extent,
        after_extent: (total - model.offset_of(end)).max(0.0),
        content_extent: total,
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

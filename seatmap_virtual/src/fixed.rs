// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::ExtentModel;

/// A strip where every item has the same extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedExtentModel {
    len: usize,
    pitch: f64,
}

impl FixedExtentModel {
    /// Creates a model of `len` items, each `pitch` long.
    ///
    /// Negative or non-finite pitches are treated as zero.
    #[must_use]
    pub fn new(len: usize, pitch: f64) -> Self {
        let pitch = if pitch.is_finite() && pitch > 0.0 {
            pitch
        } else {
            0.0
        };
        Self { len, pitch }
    }

    /// Extent shared by every item.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Changes the number of items.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }
}

impl ExtentModel for FixedExtentModel {
    fn len(&self) -> usize {
        self.len
    }

    fn total_extent(&self) -> f64 {
        self.len as f64 * self.pitch
    }

    fn extent_of(&self, index: usize) -> f64 {
        if index < self.len { self.pitch } else { 0.0 }
    }

    fn offset_of(&self, index: usize) -> f64 {
        index.min(self.len) as f64 * self.pitch
    }

    fn index_at_offset(&self, offset: f64) -> usize {
        if self.pitch <= 0.0 || offset.is_nan() || offset <= 0.0 {
            return 0;
        }
        if offset >= self.total_extent() {
            return self.len;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Offset is non-negative and below the total extent; truncation is floor"
        )]
        let index = (offset / self.pitch) as usize;
        index.min(self.len)
    }
}

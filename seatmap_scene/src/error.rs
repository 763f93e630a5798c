// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use crate::ItemId;

/// Error returned when scene data violates the model's invariants.
///
/// This is reported to the loader that produced the data. The interactive
/// core never sees a malformed scene because [`Scene`](crate::Scene) can only
/// be constructed through validation.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneLoadMalformed {
    /// Two seats share the same id.
    DuplicateItemId(ItemId),
    /// Canvas width or height is negative or not finite.
    InvalidCanvasSize {
        /// Offending width.
        width: f64,
        /// Offending height.
        height: f64,
    },
    /// A section placement has a non-positive or non-finite scale, or a
    /// non-finite offset.
    InvalidPlacement {
        /// Section id.
        section: String,
    },
    /// A seat has price tier `0`.
    InvalidPriceTier(ItemId),
    /// A seat position is not finite.
    NonFinitePosition(ItemId),
}

impl fmt::Display for SceneLoadMalformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateItemId(id) => write!(f, "duplicate seat id `{id}`"),
            Self::InvalidCanvasSize { width, height } => {
                write!(f, "invalid canvas size {width}x{height}")
            }
            Self::InvalidPlacement { section } => {
                write!(f, "section `{section}` has an invalid placement")
            }
            Self::InvalidPriceTier(id) => write!(f, "seat `{id}` has price tier 0"),
            Self::NonFinitePosition(id) => write!(f, "seat `{id}` has a non-finite position"),
        }
    }
}

impl core::error::Error for SceneLoadMalformed {}

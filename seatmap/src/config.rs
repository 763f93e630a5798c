// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use seatmap_input::InputConfig;
use seatmap_selection::SelectionConfig;
use seatmap_view::ViewConfig;
use seatmap_virtual::VirtualConfig;

/// All tunables of a [`SeatingMap`](crate::SeatingMap).
///
/// With the `serde` feature this deserializes from camelCase keys. Missing
/// keys take their default; unknown keys are an error.
///
/// ```
/// use seatmap::SeatingConfig;
///
/// let config = SeatingConfig::default();
/// assert_eq!(config.max_selection, 8);
/// assert_eq!(config.scale_bounds, [0.4, 6.0]);
/// assert_eq!(config.selection().unit_price, 50);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "camelCase", default, deny_unknown_fields)
)]
pub struct SeatingConfig {
    /// Maximum number of selected seats.
    pub max_selection: usize,
    /// Price of one tier unit.
    pub unit_price: u64,
    /// `[min, max]` user scale.
    pub scale_bounds: [f64; 2],
    /// Zoom step for the zoom-in/out controls.
    pub zoom_factor: f64,
    /// Share of the container used by fit-to-screen.
    pub fit_padding: f64,
    /// Seats per section at which windowed rendering starts.
    pub virtualization_threshold: usize,
    /// Strip pitch of one seat in windowed mode.
    pub item_pitch: f64,
    /// Strip window extent in windowed mode.
    pub window_extent: f64,
    /// Extra seats realized on each side of the window.
    pub overscan: usize,
    /// Edge length of a seat box in scene units.
    pub seat_size: f64,
    /// Skip seats outside the visible scene rectangle.
    pub cull_to_viewport: bool,
    /// Arrow-key pan in screen pixels.
    pub pan_step: f64,
    /// Arrow-key pan with Shift held.
    pub pan_step_fast: f64,
    /// How long the usage hint stays up.
    pub hint_duration_ms: u64,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            max_selection: 8,
            unit_price: 50,
            scale_bounds: [0.4, 6.0],
            zoom_factor: 1.2,
            fit_padding: 0.92,
            virtualization_threshold: 1000,
            item_pitch: 30.0,
            window_extent: 600.0,
            overscan: 0,
            seat_size: 20.0,
            cull_to_viewport: false,
            pan_step: 60.0,
            pan_step_fast: 120.0,
            hint_duration_ms: 2500,
        }
    }
}

impl SeatingConfig {
    /// Selection store settings.
    #[must_use]
    pub fn selection(&self) -> SelectionConfig {
        SelectionConfig {
            max_selection: self.max_selection,
            unit_price: self.unit_price,
        }
    }

    /// Viewport settings.
    #[must_use]
    pub fn view(&self) -> ViewConfig {
        let [min_scale, max_scale] = self.scale_bounds;
        ViewConfig {
            min_scale,
            max_scale,
            zoom_factor: self.zoom_factor,
            fit_padding: self.fit_padding,
        }
    }

    /// Windowing settings.
    #[must_use]
    pub fn virtualization(&self) -> VirtualConfig {
        VirtualConfig {
            threshold: self.virtualization_threshold,
            item_pitch: self.item_pitch,
            window_extent: self.window_extent,
            overscan: self.overscan,
        }
    }

    /// Input step sizes.
    #[must_use]
    pub fn input(&self) -> InputConfig {
        InputConfig {
            pan_step: self.pan_step,
            pan_step_fast: self.pan_step_fast,
            ..InputConfig::default()
        }
    }

    /// Hint lifetime.
    #[must_use]
    pub fn hint_duration(&self) -> Duration {
        Duration::from_millis(self.hint_duration_ms)
    }
}

// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{ExtentModel, FixedExtentModel, VisibleStrip, compute_visible_strip};

/// How a section's seats are materialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Every seat is materialized.
    Direct,
    /// Only the seats in the scroll window are materialized.
    Windowed,
}

/// Windowing parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VirtualConfig {
    /// Item count at which windowing starts.
    pub threshold: usize,
    /// Extent of one item along the strip.
    pub item_pitch: f64,
    /// Extent of the scroll window.
    pub window_extent: f64,
    /// Extra items realized on each side of the window.
    pub overscan: usize,
}

impl Default for VirtualConfig {
    fn default() -> Self {
        Self {
            threshold: 1000,
            item_pitch: 30.0,
            window_extent: 600.0,
            overscan: 0,
        }
    }
}

/// The result of planning one section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderPlan {
    /// The chosen mode.
    pub mode: RenderMode,
    /// The realized slice. In [`RenderMode::Direct`] it covers every item.
    pub strip: VisibleStrip,
}

impl RenderPlan {
    /// The indices to materialize.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.strip.range()
    }
}

/// Chooses between direct and windowed rendering per section.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Virtualizer {
    config: VirtualConfig,
}

impl Virtualizer {
    /// Creates a virtualizer.
    #[must_use]
    pub fn new(config: VirtualConfig) -> Self {
        Self { config }
    }

    /// The parameters in use.
    #[must_use]
    pub fn config(&self) -> &VirtualConfig {
        &self.config
    }

    /// The mode for a section of `len` items.
    #[must_use]
    pub fn mode_for(&self, len: usize) -> RenderMode {
        if len >= self.config.threshold {
            RenderMode::Windowed
        } else {
            RenderMode::Direct
        }
    }

    /// Plans a section of `len` items scrolled to `scroll_offset`.
    ///
    /// The scroll offset is ignored in direct mode.
    #[must_use]
    pub fn plan(&self, len: usize, scroll_offset: f64) -> RenderPlan {
        let model = FixedExtentModel::new(len, self.config.item_pitch);
        let mode = self.mode_for(len);
        let strip = match mode {
            RenderMode::Direct => VisibleStrip {
                start: 0,
                end: len,
                before_extent: 0.0,
                after_extent: 0.0,
                content_extent: model.total_extent(),
            },
            RenderMode::Windowed => {
                let overscan = self.config.overscan as f64 * model.pitch();
                compute_visible_strip(
                    &model,
                    scroll_offset,
                    self.config.window_extent,
                    overscan,
                    overscan,
                )
            }
        };
        RenderPlan { mode, strip }
    }
}

#[cfg(test)]
mod tests {
    use super::{RenderMode, VirtualConfig, Virtualizer};

    #[test]
    fn switches_exactly_at_threshold() {
        let v = Virtualizer::default();
        assert_eq!(v.plan(999, 0.0).mode, RenderMode::Direct);
        assert_eq!(v.plan(999, 0.0).range(), 0..999);

        let plan = v.plan(1000, 0.0);
        assert_eq!(plan.mode, RenderMode::Windowed);
        assert_eq!(plan.range(), 0..20);
    }

    #[test]
    fn threshold_is_configurable() {
        let v = Virtualizer::new(VirtualConfig {
            threshold: 10,
            ..VirtualConfig::default()
        });
        assert_eq!(v.mode_for(9), RenderMode::Direct);
        assert_eq!(v.mode_for(10), RenderMode::Windowed);
    }

    #[test]
    fn overscan_counts_items() {
        let v = Virtualizer::new(VirtualConfig {
            overscan: 2,
            ..VirtualConfig::default()
        });
        let plan = v.plan(5000, 300.0);
        assert_eq!(plan.range(), 8..32);
    }

    #[test]
    fn direct_mode_ignores_scroll() {
        let v = Virtualizer::default();
        let plan = v.plan(50, 10_000.0);
        assert_eq!(plan.range(), 0..50);
        assert_eq!(plan.strip.before_extent, 0.0);
    }
}

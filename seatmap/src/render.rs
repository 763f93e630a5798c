// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render bindings: plain values a host turns into drawables.
//!
//! Everything here is rebuilt from the current scene, selection, and viewport
//! on every [`SeatingMap::render`](crate::SeatingMap::render) call.

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashSet;
use kurbo::{Affine, Rect, Size};
use seatmap_scene::{Item, ItemId, SeatStatus, Section};
use seatmap_selection::SelectionSummary;
use seatmap_virtual::{RenderMode, RenderPlan, VisibleStrip};

/// Stroke color of the focused seat.
pub const FOCUS_STROKE: &str = "#1d4ed8";

/// Seat fill category. Status colors win over the selection color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeatFill {
    /// Free to select.
    Available,
    /// In the user's selection.
    Selected,
    /// Temporarily held.
    Held,
    /// Reserved.
    Reserved,
    /// Sold.
    Sold,
}

impl SeatFill {
    /// The fill for a seat with `status`.
    #[must_use]
    pub fn resolve(status: SeatStatus, is_selected: bool) -> Self {
        match status {
            SeatStatus::Sold => Self::Sold,
            SeatStatus::Reserved => Self::Reserved,
            SeatStatus::Held => Self::Held,
            SeatStatus::Available if is_selected => Self::Selected,
            SeatStatus::Available => Self::Available,
        }
    }

    /// CSS hex color.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Available => "#10b981",
            Self::Selected => "#2563eb",
            Self::Held => "#6b7280",
            Self::Reserved => "#f59e0b",
            Self::Sold => "#dc2626",
        }
    }
}

/// Style class for a price tier, displayed as `tier-<n>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TierClass(pub u32);

impl fmt::Display for TierClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tier-{}", self.0)
    }
}

/// One materialized seat.
#[derive(Clone, Debug, PartialEq)]
pub struct SeatView {
    /// Seat id.
    pub id: ItemId,
    /// Section-local x of the seat box's top-left corner.
    pub x: f64,
    /// Section-local y of the seat box's top-left corner.
    pub y: f64,
    /// Owning section.
    pub section_id: Arc<str>,
    /// Sale status.
    pub status: SeatStatus,
    /// Price tier.
    pub price_tier: u32,
    /// Style class for the tier.
    pub tier_class: TierClass,
    /// Fill category.
    pub fill: SeatFill,
    /// In the selection.
    pub is_selected: bool,
    /// Has focus.
    pub is_focused: bool,
    /// Responds to clicks and takes keyboard focus.
    pub interactive: bool,
}

impl SeatView {
    /// Focus ring color, if focused.
    #[must_use]
    pub fn stroke(&self) -> Option<&'static str> {
        self.is_focused.then_some(FOCUS_STROKE)
    }

    /// Accessible name, e.g. `Seat A-1-1, available, Price tier 1`.
    #[must_use]
    pub fn aria_label(&self) -> String {
        format!(
            "Seat {}, {}, Price tier {}",
            self.id, self.status, self.price_tier
        )
    }
}

/// One section and the seats materialized for it.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionView {
    /// Section id.
    pub id: Arc<str>,
    /// Display label.
    pub label: String,
    /// Section-local to scene coordinates.
    pub placement: Affine,
    /// Direct or windowed.
    pub mode: RenderMode,
    /// The realized slice of the section's seats.
    pub strip: VisibleStrip,
    /// Materialized seats in row-major order.
    pub seats: Vec<SeatView>,
}

/// A selected seat as listed in the selection panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedSeatView {
    /// Seat id.
    pub id: ItemId,
    /// Price tier.
    pub price_tier: u32,
    /// `price_tier * unit_price`.
    pub price: u64,
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneView {
    /// Accessible name of the map.
    pub label: String,
    /// Scene to container-local pixels.
    pub root: Affine,
    /// Logical canvas size.
    pub canvas: Size,
    /// Sections in scene order.
    pub sections: Vec<SectionView>,
    /// The selection in selection order.
    pub selected: Vec<SelectedSeatView>,
    /// Selection counts.
    pub summary: SelectionSummary,
    /// Usage hint while it is showing.
    pub hint: Option<&'static str>,
}

impl SceneView {
    /// Iterates over every materialized seat.
    pub fn seats(&self) -> impl Iterator<Item = &SeatView> + '_ {
        self.sections.iter().flat_map(|section| section.seats.iter())
    }

    /// Finds a materialized seat by id.
    #[must_use]
    pub fn seat(&self, id: &str) -> Option<&SeatView> {
        self.seats().find(|seat| seat.id.as_str() == id)
    }
}

/// Per-frame inputs shared by every section.
#[derive(Debug)]
pub(crate) struct FrameContext<'a> {
    pub(crate) selected: HashSet<&'a str>,
    pub(crate) focus: Option<&'a str>,
    /// Visible scene rectangle and seat edge length when culling.
    pub(crate) cull: Option<(Rect, f64)>,
}

impl FrameContext<'_> {
    fn seat_view(&self, item: &Item, section_id: &Arc<str>) -> SeatView {
        let id = item.id.as_str();
        let is_selected = self.selected.contains(id);
        SeatView {
            id: item.id.clone(),
            x: item.x,
            y: item.y,
            section_id: section_id.clone(),
            status: item.status,
            price_tier: item.price_tier,
            tier_class: TierClass(item.price_tier),
            fill: SeatFill::resolve(item.status, is_selected),
            is_selected,
            is_focused: self.focus == Some(id),
            interactive: item.status.is_available(),
        }
    }

    fn keeps(&self, item: &Item, section: &Section) -> bool {
        let Some((view, size)) = self.cull else {
            return true;
        };
        let local = Rect::new(item.x, item.y, item.x + size, item.y + size);
        overlaps(section.placement().apply_rect(local), view)
    }

    pub(crate) fn section_view(&self, section: &Section, plan: RenderPlan) -> SectionView {
        let id: Arc<str> = Arc::from(section.id());
        let seats = plan
            .range()
            .filter_map(|index| section.item_at(index))
            .filter(|item| self.keeps(item, section))
            .map(|item| self.seat_view(item, &id))
            .collect();
        SectionView {
            id,
            label: String::from(section.label()),
            placement: section.placement().affine(),
            mode: plan.mode,
            strip: plan.strip,
            seats,
        }
    }
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use seatmap_scene::SeatStatus;

    use super::{SeatFill, TierClass};

    #[test]
    fn status_beats_selection() {
        assert_eq!(SeatFill::resolve(SeatStatus::Sold, true), SeatFill::Sold);
        assert_eq!(SeatFill::resolve(SeatStatus::Held, true).color(), "#6b7280");
        assert_eq!(
            SeatFill::resolve(SeatStatus::Available, true).color(),
            "#2563eb"
        );
        assert_eq!(
            SeatFill::resolve(SeatStatus::Available, false).color(),
            "#10b981"
        );
    }

    #[test]
    fn tier_class_formats() {
        assert_eq!(TierClass(3).to_string(), "tier-3");
    }
}

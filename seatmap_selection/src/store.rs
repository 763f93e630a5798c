// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use seatmap_scene::{Item, ItemId, Scene};

use crate::{SeatAction, SeatRef, SelectionState};

/// Limits and pricing for a [`SelectionStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Maximum number of seats that can be selected at once.
    pub max_selection: usize,
    /// Price of one tier unit; a seat costs `price_tier * unit_price`.
    pub unit_price: u64,
}

impl SelectionConfig {
    /// Sets [`Self::max_selection`].
    #[must_use]
    pub fn with_max_selection(mut self, max_selection: usize) -> Self {
        self.max_selection = max_selection;
        self
    }

    /// Sets [`Self::unit_price`].
    #[must_use]
    pub fn with_unit_price(mut self, unit_price: u64) -> Self {
        self.unit_price = unit_price;
        self
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            max_selection: 8,
            unit_price: 50,
        }
    }
}

/// Counts for a "3/8 selected" style badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionSummary {
    /// Number of selected seats.
    pub count: usize,
    /// Maximum number of selected seats.
    pub capacity: usize,
    /// `capacity - count`.
    pub remaining: usize,
    /// Sum of the selected seats' prices.
    pub total_price: u64,
    /// Whether another seat can be selected.
    pub can_select_more: bool,
}

/// Owns a [`SelectionState`] and commits actions against it.
///
/// Every operation goes through [`SelectionStore::dispatch`]; the convenience
/// methods only build the matching [`SeatAction`]. A committed action bumps
/// [`SelectionStore::revision`], a rejected one leaves it alone.
#[derive(Clone, Debug)]
pub struct SelectionStore {
    config: SelectionConfig,
    state: SelectionState,
    revision: u64,
}

impl SelectionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            state: SelectionState::new(&config),
            config,
            revision: 0,
        }
    }

    /// The limits this store was created with.
    #[must_use]
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Applies `action`. Returns `true` if the state changed.
    pub fn dispatch(&mut self, action: SeatAction) -> bool {
        match self.state.reduce(&action, &self.config) {
            Some(next) => {
                self.state = next;
                self.revision = self.revision.wrapping_add(1);
                true
            }
            None => false,
        }
    }

    /// Monotonic counter bumped on every committed action.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Selects an available seat if there is room and it is not selected.
    pub fn select(&mut self, item: Arc<Item>) -> bool {
        self.dispatch(SeatAction::Select(item))
    }

    /// Deselects a seat by id.
    pub fn deselect(&mut self, id: impl Into<ItemId>) -> bool {
        self.dispatch(SeatAction::Deselect(id.into()))
    }

    /// Deselects a selected seat, selects an unselected one.
    pub fn toggle(&mut self, item: Arc<Item>) -> bool {
        self.dispatch(SeatAction::Toggle(item))
    }

    /// Empties the selection.
    pub fn clear_selection(&mut self) -> bool {
        self.dispatch(SeatAction::Clear)
    }

    /// Replaces the focused seat.
    pub fn set_focus(&mut self, id: Option<ItemId>) -> bool {
        self.dispatch(SeatAction::SetFocus(id))
    }

    /// Replaces the scene, purging selected ids it does not contain.
    pub fn load_scene(&mut self, scene: Arc<Scene>) -> bool {
        self.dispatch(SeatAction::LoadScene(scene))
    }

    /// Marks a scene load as in flight.
    pub fn set_loading(&mut self, loading: bool) -> bool {
        self.dispatch(SeatAction::SetLoading(loading))
    }

    /// The loaded scene, if any.
    #[must_use]
    pub fn scene(&self) -> Option<&Arc<Scene>> {
        self.state.scene()
    }

    /// The focused seat id, if any.
    #[must_use]
    pub fn focus(&self) -> Option<&ItemId> {
        self.state.focus()
    }

    /// Whether a scene load is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Returns `true` if a seat with `id` is selected.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.state.is_selected(id)
    }

    /// Selected seats in selection order.
    #[must_use]
    pub fn items(&self) -> &[SeatRef] {
        self.state.selection().items()
    }

    /// Number of selected seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.selection().len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.selection().is_empty()
    }

    /// Sum of `price_tier * unit_price` over the selection.
    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.items()
            .iter()
            .map(|seat| u64::from(seat.price_tier) * self.config.unit_price)
            .sum()
    }

    /// How many more seats can be selected.
    #[must_use]
    pub fn remaining_capacity(&self) -> usize {
        self.config.max_selection.saturating_sub(self.len())
    }

    /// Returns `true` while the selection is below capacity.
    #[must_use]
    pub fn can_select_more(&self) -> bool {
        self.remaining_capacity() > 0
    }

    /// Snapshot of the derived counts.
    #[must_use]
    pub fn summary(&self) -> SelectionSummary {
        SelectionSummary {
            count: self.len(),
            capacity: self.config.max_selection,
            remaining: self.remaining_capacity(),
            total_price: self.total_price(),
            can_select_more: self.can_select_more(),
        }
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new(SelectionConfig::default())
    }
}

// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::ops::Deref;

use seatmap_scene::{Item, ItemId, Scene};

use crate::{BoundedSelection, SelectionConfig};

/// A selected seat.
///
/// Holds the scene's shared [`Item`] so that price and status can be read
/// without a lookup. Two refs are equal when their ids are equal, regardless
/// of which scene load produced them.
#[derive(Clone, Debug)]
pub struct SeatRef(Arc<Item>);

impl SeatRef {
    /// Wraps a shared item.
    #[must_use]
    pub fn new(item: Arc<Item>) -> Self {
        Self(item)
    }

    /// The shared item.
    #[must_use]
    pub fn item(&self) -> &Arc<Item> {
        &self.0
    }
}

impl Deref for SeatRef {
    type Target = Item;

    fn deref(&self) -> &Item {
        &self.0
    }
}

impl PartialEq for SeatRef {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for SeatRef {}

impl From<Arc<Item>> for SeatRef {
    fn from(item: Arc<Item>) -> Self {
        Self(item)
    }
}

/// An operation on a [`SelectionState`].
#[derive(Clone, Debug)]
pub enum SeatAction {
    /// Add an available seat if there is room.
    Select(Arc<Item>),
    /// Remove a seat by id.
    Deselect(ItemId),
    /// Click semantics: deselect if selected, otherwise select.
    ///
    /// Unavailable seats are ignored either way.
    Toggle(Arc<Item>),
    /// Empty the selection.
    Clear,
    /// Replace the focused seat. The id is not validated.
    SetFocus(Option<ItemId>),
    /// Replace the scene and clear the loading flag.
    ///
    /// Selected ids that the new scene does not contain are dropped; the rest
    /// are re-bound to the new scene's items.
    LoadScene(Arc<Scene>),
    /// Mark a scene load as in flight (or not).
    SetLoading(bool),
}

/// Selection, focus, and scene lifecycle as a plain value.
#[derive(Clone, Debug)]
pub struct SelectionState {
    scene: Option<Arc<Scene>>,
    selection: BoundedSelection<SeatRef>,
    focus: Option<ItemId>,
    loading: bool,
}

impl SelectionState {
    /// An empty state with no scene, sized for `config.max_selection` seats.
    #[must_use]
    pub fn new(config: &SelectionConfig) -> Self {
        Self {
            scene: None,
            selection: BoundedSelection::new(config.max_selection),
            focus: None,
            loading: false,
        }
    }

    /// The loaded scene, if any.
    #[must_use]
    pub fn scene(&self) -> Option<&Arc<Scene>> {
        self.scene.as_ref()
    }

    /// The selected seats in selection order.
    #[must_use]
    pub fn selection(&self) -> &BoundedSelection<SeatRef> {
        &self.selection
    }

    /// The focused seat id, if any.
    #[must_use]
    pub fn focus(&self) -> Option<&ItemId> {
        self.focus.as_ref()
    }

    /// Whether a scene load is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns `true` if a seat with `id` is selected.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.iter().any(|seat| seat.id.as_str() == id)
    }

    /// Computes the state after `action`.
    ///
    /// Returns `None` when the action is rejected or would not change
    /// anything. `self` is never modified.
    #[must_use]
    pub fn reduce(&self, action: &SeatAction, config: &SelectionConfig) -> Option<Self> {
        match action {
            SeatAction::Select(item) => self.with_selected(item, config),
            SeatAction::Deselect(id) => self.without(id.as_str()),
            SeatAction::Toggle(item) => {
                if !item.status.is_available() {
                    None
                } else if self.is_selected(item.id.as_str()) {
                    self.without(item.id.as_str())
                } else {
                    self.with_selected(item, config)
                }
            }
            SeatAction::Clear => {
                let mut next = self.clone();
                next.selection.clear().then_some(next)
            }
            SeatAction::SetFocus(focus) => {
                if self.focus == *focus {
                    return None;
                }
                let mut next = self.clone();
                next.focus.clone_from(focus);
                Some(next)
            }
            SeatAction::LoadScene(scene) => {
                let mut next = self.clone();
                next.selection
                    .retain_map(|seat| scene.item(seat.id.as_str()).cloned().map(SeatRef));
                next.scene = Some(scene.clone());
                next.loading = false;
                Some(next)
            }
            SeatAction::SetLoading(loading) => {
                if self.loading == *loading {
                    return None;
                }
                let mut next = self.clone();
                next.loading = *loading;
                Some(next)
            }
        }
    }

    fn with_selected(&self, item: &Arc<Item>, config: &SelectionConfig) -> Option<Self> {
        if !item.status.is_available() || self.selection.len() >= config.max_selection {
            return None;
        }
        let mut next = self.clone();
        next.selection
            .insert(SeatRef(item.clone()))
            .then_some(next)
    }

    fn without(&self, id: &str) -> Option<Self> {
        let seat = self.selection.iter().find(|seat| seat.id.as_str() == id)?;
        let mut next = self.clone();
        next.selection.remove(seat);
        Some(next)
    }
}

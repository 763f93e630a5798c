// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use kurbo::{Point, Size};

use crate::{Item, ItemId, SceneLoadMalformed, Section};

/// Where a seat lives inside a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemLocation {
    /// Index into [`Scene::sections`].
    pub section: usize,
    /// Index into the section's rows.
    pub row: usize,
    /// Index within the row.
    pub seat: usize,
}

/// Immutable description of a venue.
///
/// Built once per load through [`Scene::new`] (or [`SceneBuilder`](crate::SceneBuilder)),
/// which validates it and indexes every seat by id.
#[derive(Clone, Debug)]
pub struct Scene {
    venue_id: String,
    name: String,
    size: Size,
    sections: Vec<Section>,
    index: HashMap<ItemId, ItemLocation>,
}

impl Scene {
    /// Validates and indexes a scene.
    ///
    /// # Errors
    ///
    /// Returns [`SceneLoadMalformed`] for negative or non-finite canvas
    /// dimensions, invalid section placements, zero price tiers, non-finite
    /// seat positions, or seat ids that are not unique across the scene.
    pub fn new(size: Size, sections: Vec<Section>) -> Result<Self, SceneLoadMalformed> {
        if !(size.width.is_finite() && size.height.is_finite())
            || size.width < 0.0
            || size.height < 0.0
        {
            return Err(SceneLoadMalformed::InvalidCanvasSize {
                width: size.width,
                height: size.height,
            });
        }

        let mut index = HashMap::new();
        for (section_idx, section) in sections.iter().enumerate() {
            let placement = section.placement();
            if !(placement.scale.is_finite()
                && placement.scale > 0.0
                && placement.x.is_finite()
                && placement.y.is_finite())
            {
                return Err(SceneLoadMalformed::InvalidPlacement {
                    section: section.id().into(),
                });
            }
            for (row_idx, row) in section.rows().iter().enumerate() {
                for (seat_idx, item) in row.items.iter().enumerate() {
                    validate_item(item)?;
                    match index.entry(item.id.clone()) {
                        Entry::Occupied(_) => {
                            return Err(SceneLoadMalformed::DuplicateItemId(item.id.clone()));
                        }
                        Entry::Vacant(slot) => {
                            slot.insert(ItemLocation {
                                section: section_idx,
                                row: row_idx,
                                seat: seat_idx,
                            });
                        }
                    }
                }
            }
        }

        Ok(Self {
            venue_id: String::new(),
            name: String::new(),
            size,
            sections,
            index,
        })
    }

    /// Returns this scene with venue identity attached.
    #[must_use]
    pub fn with_venue(mut self, venue_id: impl Into<String>, name: impl Into<String>) -> Self {
        self.venue_id = venue_id.into();
        self.name = name.into();
        self
    }

    /// Venue id, empty when not provided.
    #[must_use]
    pub fn venue_id(&self) -> &str {
        &self.venue_id
    }

    /// Venue name, empty when not provided.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Logical canvas size in scene units.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Sections in drawing order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Looks up a section by id.
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == id)
    }

    /// Total number of seats.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if a seat with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Location of a seat by id.
    #[must_use]
    pub fn location(&self, id: &str) -> Option<ItemLocation> {
        self.index.get(id).copied()
    }

    /// Looks up a seat by id.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Arc<Item>> {
        let loc = self.location(id)?;
        self.sections[loc.section].rows()[loc.row].items.get(loc.seat)
    }

    /// Canvas position of a seat, with its section placement applied.
    #[must_use]
    pub fn canvas_position(&self, id: &str) -> Option<Point> {
        let loc = self.location(id)?;
        let section = &self.sections[loc.section];
        let item = section.rows()[loc.row].items.get(loc.seat)?;
        Some(section.placement().apply(item.position()))
    }

    /// Iterates every seat, section by section in row-major order.
    pub fn items(&self) -> impl Iterator<Item = &Arc<Item>> + '_ {
        self.sections.iter().flat_map(Section::items)
    }
}

fn validate_item(item: &Item) -> Result<(), SceneLoadMalformed> {
    if item.price_tier == 0 {
        return Err(SceneLoadMalformed::InvalidPriceTier(item.id.clone()));
    }
    if !(item.x.is_finite() && item.y.is_finite()) {
        return Err(SceneLoadMalformed::NonFinitePosition(item.id.clone()));
    }
    Ok(())
}

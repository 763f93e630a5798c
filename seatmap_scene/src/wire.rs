// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deserialization of the venue JSON shape.
//!
//! ```json
//! {
//!   "venueId": "venue-1",
//!   "name": "Example Venue",
//!   "map": { "width": 800, "height": 600 },
//!   "sections": [{
//!     "id": "section-A",
//!     "label": "Section A",
//!     "transform": { "x": 50, "y": 50, "scale": 1 },
//!     "rows": [{
//!       "index": 1,
//!       "seats": [{ "id": "A-1-1", "col": 1, "x": 0, "y": 0, "priceTier": 1, "status": "available" }]
//!     }]
//!   }]
//! }
//! ```

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::Size;
use serde::Deserialize;

use crate::{Item, ItemId, Placement, Row, Scene, SceneLoadMalformed, SeatStatus, Section};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VenueData {
    #[serde(default)]
    venue_id: String,
    #[serde(default)]
    name: String,
    map: MapData,
    #[serde(default)]
    sections: Vec<SectionData>,
}

#[derive(Deserialize)]
struct MapData {
    width: f64,
    height: f64,
}

#[derive(Deserialize)]
struct SectionData {
    id: String,
    #[serde(default)]
    label: String,
    #[serde(default)]
    transform: Placement,
    #[serde(default)]
    rows: Vec<RowData>,
}

#[derive(Deserialize)]
struct RowData {
    index: u32,
    #[serde(default)]
    seats: Vec<SeatData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeatData {
    id: ItemId,
    #[serde(default)]
    col: Option<u32>,
    x: f64,
    y: f64,
    price_tier: u32,
    #[serde(default)]
    status: SeatStatus,
}

impl VenueData {
    fn into_scene(self) -> Result<Scene, SceneLoadMalformed> {
        let sections = self
            .sections
            .into_iter()
            .map(|section| {
                let rows = section
                    .rows
                    .into_iter()
                    .map(|row| Row {
                        index: row.index,
                        items: row
                            .seats
                            .into_iter()
                            .map(|seat| {
                                Arc::new(Item {
                                    id: seat.id,
                                    col: seat.col,
                                    x: seat.x,
                                    y: seat.y,
                                    price_tier: seat.price_tier,
                                    status: seat.status,
                                })
                            })
                            .collect(),
                    })
                    .collect();
                Section::new(section.id, section.label, section.transform, rows)
            })
            .collect();
        Ok(Scene::new(Size::new(self.map.width, self.map.height), sections)?
            .with_venue(self.venue_id, self.name))
    }
}

impl<'de> Deserialize<'de> for Scene {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        VenueData::deserialize(deserializer)?
            .into_scene()
            .map_err(serde::de::Error::custom)
    }
}

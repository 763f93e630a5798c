// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Size;

use crate::{Item, Placement, Row, Scene, SceneLoadMalformed, Section};

/// Distance between neighbouring seats produced by [`SceneBuilder::grid_section`].
const GRID_PITCH: f64 = 30.0;

/// Incremental construction of a [`Scene`].
///
/// Mostly useful for fixtures and demos; loaders that already hold a list of
/// sections can call [`Scene::new`] directly.
#[derive(Clone, Debug)]
pub struct SceneBuilder {
    size: Size,
    venue_id: String,
    name: String,
    sections: Vec<Section>,
}

impl SceneBuilder {
    /// Starts a scene with the given logical canvas size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            venue_id: String::new(),
            name: String::new(),
            sections: Vec::new(),
        }
    }

    /// Sets the venue identity.
    #[must_use]
    pub fn venue(mut self, venue_id: impl Into<String>, name: impl Into<String>) -> Self {
        self.venue_id = venue_id.into();
        self.name = name.into();
        self
    }

    /// Appends a prebuilt section.
    #[must_use]
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Appends a rectangular block of available seats.
    ///
    /// The section id is `section-<prefix>` and seat ids follow
    /// `<prefix>-<row>-<col>` with 1-based row and column numbers. Seats sit
    /// on a 30-unit grid and cycle through price tiers 1 to 3 diagonally.
    #[must_use]
    pub fn grid_section(self, prefix: &str, placement: Placement, rows: u32, cols: u32) -> Self {
        let rows = (0..rows)
            .map(|r| {
                Row::new(
                    r + 1,
                    (0..cols).map(|c| {
                        Item::new(
                            format!("{prefix}-{}-{}", r + 1, c + 1),
                            f64::from(c) * GRID_PITCH,
                            f64::from(r) * GRID_PITCH,
                            (r + c) % 3 + 1,
                        )
                        .with_col(c + 1)
                    }),
                )
            })
            .collect();
        self.section(Section::new(
            format!("section-{prefix}"),
            format!("Section {prefix}"),
            placement,
            rows,
        ))
    }

    /// Validates and builds the scene.
    ///
    /// # Errors
    ///
    /// See [`Scene::new`].
    pub fn build(self) -> Result<Scene, SceneLoadMalformed> {
        Ok(Scene::new(self.size, self.sections)?.with_venue(self.venue_id, self.name))
    }
}

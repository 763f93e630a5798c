// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::time::Duration;

use hashbrown::{HashMap, HashSet};
use kurbo::{Point, Rect, Vec2};
use seatmap_input::{Command, Dispatcher, GestureSession, InputEvent};
use seatmap_scene::{ItemId, Scene};
use seatmap_selection::{SelectionStore, SelectionSummary};
use seatmap_view::Viewport;
use seatmap_virtual::Virtualizer;
use tracing::{debug, trace};

use crate::render::{FrameContext, SceneView, SelectedSeatView};
use crate::{HintTimer, SeatingConfig};

/// The result of [`SeatingMap::handle_event`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EventResponse {
    /// The command the event produced, if any.
    pub command: Option<Command>,
    /// Whether applying it changed the transform or the selection.
    pub changed: bool,
    /// Whether the host should suppress the platform's default handling.
    pub prevent_default: bool,
}

/// An interactive seating chart.
///
/// `SeatingMap` owns one of each component and routes between them: input
/// goes through the [`Dispatcher`], the resulting commands are applied to the
/// [`Viewport`] or the [`SelectionStore`], and [`SeatingMap::render`] reads
/// everything back into a [`SceneView`].
///
/// Fitting the canvas needs a measured container. Loading a scene marks a fit
/// as pending; it runs as soon as [`SeatingMap::set_container`] supplies a
/// usable size, or immediately if one is already known. A later change of
/// container size fits again.
#[derive(Clone, Debug)]
pub struct SeatingMap {
    config: SeatingConfig,
    store: SelectionStore,
    viewport: Viewport,
    input: Dispatcher,
    virtualizer: Virtualizer,
    hint: HintTimer,
    section_scroll: HashMap<String, f64>,
    pending_fit: bool,
}

impl SeatingMap {
    /// Creates an empty map with no scene and an unmeasured container.
    #[must_use]
    pub fn new(config: SeatingConfig) -> Self {
        Self {
            store: SelectionStore::new(config.selection()),
            viewport: Viewport::new(config.view()),
            input: Dispatcher::new(config.input()),
            virtualizer: Virtualizer::new(config.virtualization()),
            hint: HintTimer::new(config.hint_duration()),
            section_scroll: HashMap::new(),
            pending_fit: false,
            config,
        }
    }

    /// The configuration this map was created with.
    #[must_use]
    pub fn config(&self) -> &SeatingConfig {
        &self.config
    }

    /// The selection store.
    #[must_use]
    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    /// The viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The gesture in progress.
    #[must_use]
    pub fn session(&self) -> GestureSession {
        self.input.session()
    }

    /// The loaded scene, if any.
    #[must_use]
    pub fn scene(&self) -> Option<&Arc<Scene>> {
        self.store.scene()
    }

    /// Whether a fit is waiting for a measured container.
    #[must_use]
    pub fn is_fit_pending(&self) -> bool {
        self.pending_fit
    }

    // --- scene and container ---

    /// Replaces the scene.
    ///
    /// Selected seats missing from the new scene are dropped and a fit is
    /// scheduled.
    pub fn load_scene(&mut self, scene: Arc<Scene>) {
        debug!(
            venue = scene.venue_id(),
            seats = scene.item_count(),
            sections = scene.sections().len(),
            "scene loaded"
        );
        self.section_scroll
            .retain(|id, _| scene.section(id).is_some());
        self.viewport.set_canvas_size(scene.size());
        self.store.load_scene(scene);
        self.pending_fit = true;
        self.run_pending_fit();
    }

    /// Marks a scene load as in flight.
    pub fn set_loading(&mut self, loading: bool) -> bool {
        self.store.set_loading(loading)
    }

    /// Whether a scene load is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    /// Updates the container rectangle in screen pixels.
    ///
    /// A change of size (not just position) re-fits the loaded scene.
    pub fn set_container(&mut self, rect: Rect) {
        let resized = self.viewport.container().size() != rect.size();
        self.viewport.set_container(rect);
        if resized && self.scene().is_some() {
            self.pending_fit = true;
        }
        self.run_pending_fit();
    }

    fn run_pending_fit(&mut self) {
        if !self.pending_fit {
            return;
        }
        if !self.viewport.is_ready() {
            trace!("fit deferred until the container is measured");
            return;
        }
        self.pending_fit = false;
        self.viewport.fit_to_container();
        debug!(scale = self.viewport.scale(), "fit applied");
    }

    // --- input ---

    /// Handles one input event and applies the command it produces.
    ///
    /// Event positions are in the same screen space as the rectangle passed
    /// to [`SeatingMap::set_container`].
    pub fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        let dispatch = self.input.handle(event);
        let changed = match dispatch.command {
            Some(command) => self.apply(command),
            None => {
                trace!(?event, "no command");
                false
            }
        };
        EventResponse {
            command: dispatch.command,
            changed,
            prevent_default: dispatch.prevent_default,
        }
    }

    /// Applies a command. Returns `true` if anything changed.
    pub fn apply(&mut self, command: Command) -> bool {
        let changed = match command {
            Command::ZoomAt { anchor, factor } => self.viewport.zoom_at_point(anchor, factor),
            Command::PanBy(delta) => self.viewport.pan_by(delta),
            Command::ZoomIn => self.viewport.zoom_in(),
            Command::ZoomOut => self.viewport.zoom_out(),
            Command::Fit => self.fit_to_screen(),
            Command::Reset => self.viewport.reset(),
            Command::ClearSelection => self.store.clear_selection(),
        };
        if changed {
            debug!(?command, transform = ?self.viewport.transform(), "command applied");
        } else {
            trace!(?command, "command had no effect");
        }
        changed
    }

    // --- viewport controls ---

    /// One zoom step in about the container center.
    pub fn zoom_in(&mut self) -> bool {
        self.apply(Command::ZoomIn)
    }

    /// One zoom step out about the container center.
    pub fn zoom_out(&mut self) -> bool {
        self.apply(Command::ZoomOut)
    }

    /// Zooms by `factor` keeping `anchor` (screen pixels) still.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) -> bool {
        self.apply(Command::ZoomAt { anchor, factor })
    }

    /// Pans by a screen-pixel offset.
    pub fn pan_by(&mut self, delta: Vec2) -> bool {
        self.apply(Command::PanBy(delta))
    }

    /// Returns to the identity transform.
    pub fn reset(&mut self) -> bool {
        self.apply(Command::Reset)
    }

    /// Fits the canvas to the container.
    ///
    /// While the container is unmeasured the fit is deferred instead.
    pub fn fit_to_screen(&mut self) -> bool {
        if self.viewport.is_ready() {
            self.pending_fit = false;
            self.viewport.fit_to_container()
        } else {
            trace!("fit deferred until the container is measured");
            self.pending_fit = true;
            false
        }
    }

    // --- selection ---

    /// Click on a seat: toggles it if available.
    pub fn click_seat(&mut self, id: &str) -> bool {
        let Some(item) = self.scene().and_then(|scene| scene.item(id)).cloned() else {
            trace!(id, "click on unknown seat");
            return false;
        };
        let changed = self.store.toggle(item);
        if changed {
            debug!(
                id,
                selected = self.store.is_selected(id),
                count = self.store.len(),
                "seat toggled"
            );
        }
        changed
    }

    /// Moves focus to a seat.
    pub fn focus_seat(&mut self, id: &str) -> bool {
        self.store.set_focus(Some(ItemId::new(id)))
    }

    /// Clears focus.
    pub fn blur(&mut self) -> bool {
        self.store.set_focus(None)
    }

    /// Selects a seat by id.
    pub fn select(&mut self, id: &str) -> bool {
        let Some(item) = self.scene().and_then(|scene| scene.item(id)).cloned() else {
            return false;
        };
        self.store.select(item)
    }

    /// Deselects a seat by id.
    pub fn deselect(&mut self, id: &str) -> bool {
        self.store.deselect(id)
    }

    /// Empties the selection.
    pub fn clear_selection(&mut self) -> bool {
        self.apply(Command::ClearSelection)
    }

    /// Selection counts.
    #[must_use]
    pub fn summary(&self) -> SelectionSummary {
        self.store.summary()
    }

    // --- rendering ---

    /// Sets the window scroll offset of a windowed section.
    ///
    /// Returns `false` for unknown sections.
    pub fn set_section_scroll(&mut self, section_id: &str, offset: f64) -> bool {
        if self.scene().and_then(|scene| scene.section(section_id)).is_none() {
            return false;
        }
        let offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        self.section_scroll.insert(String::from(section_id), offset);
        true
    }

    /// Builds the bindings for the current frame, or `None` without a scene.
    #[must_use]
    pub fn render(&self) -> Option<SceneView> {
        let scene = self.scene()?;
        let selected_seats = self.store.items();
        let frame = FrameContext {
            selected: selected_seats
                .iter()
                .map(|seat| seat.id.as_str())
                .collect::<HashSet<_>>(),
            focus: self.store.focus().map(ItemId::as_str),
            cull: self
                .config
                .cull_to_viewport
                .then(|| self.viewport.visible_scene_rect())
                .flatten()
                .map(|view| (view, self.config.seat_size)),
        };

        let sections = scene
            .sections()
            .iter()
            .map(|section| {
                let scroll = self
                    .section_scroll
                    .get(section.id())
                    .copied()
                    .unwrap_or(0.0);
                let plan = self.virtualizer.plan(section.item_count(), scroll);
                frame.section_view(section, plan)
            })
            .collect::<Vec<_>>();

        let unit_price = self.store.config().unit_price;
        let selected = selected_seats
            .iter()
            .map(|seat| SelectedSeatView {
                id: seat.id.clone(),
                price_tier: seat.price_tier,
                price: u64::from(seat.price_tier) * unit_price,
            })
            .collect();

        trace!(
            sections = sections.len(),
            seats = sections.iter().map(|s| s.seats.len()).sum::<usize>(),
            "frame built"
        );
        Some(SceneView {
            label: format!("{} seating map", scene.name()),
            root: self.viewport.root_affine(),
            canvas: scene.size(),
            sections,
            selected,
            summary: self.store.summary(),
            hint: self.hint.text(),
        })
    }

    // --- usage hint ---

    /// Shows the usage hint until `now + hint_duration`.
    pub fn arm_hint(&mut self, now: Duration) {
        self.hint.arm(now);
    }

    /// Advances the hint clock. Returns `true` when the hint was dismissed.
    pub fn advance(&mut self, now: Duration) -> bool {
        let dismissed = self.hint.advance(now);
        if dismissed {
            debug!("hint dismissed");
        }
        dismissed
    }

    /// Hides the hint.
    pub fn dismiss_hint(&mut self) {
        self.hint.dismiss();
    }

    /// Stops the hint from auto-dismissing.
    pub fn cancel_hint(&mut self) {
        self.hint.cancel();
    }

    /// The hint timer.
    #[must_use]
    pub fn hint(&self) -> &HintTimer {
        &self.hint
    }
}

impl Default for SeatingMap {
    fn default() -> Self {
        Self::new(SeatingConfig::default())
    }
}

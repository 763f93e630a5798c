// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::{GestureSession, InputEvent, Key, Modifiers};

/// A request for the viewport or selection, produced from input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Multiply the scale by `factor`, keeping `anchor` fixed on screen.
    ZoomAt {
        /// Screen point to hold still.
        anchor: Point,
        /// Scale multiplier.
        factor: f64,
    },
    /// Pan by a screen-pixel offset.
    PanBy(Vec2),
    /// One step in.
    ZoomIn,
    /// One step out.
    ZoomOut,
    /// Fit the canvas to the container.
    Fit,
    /// Back to the identity transform.
    Reset,
    /// Empty the selection.
    ClearSelection,
}

/// What the host should do with an event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dispatch {
    /// The command to apply, if any.
    pub command: Option<Command>,
    /// Whether the host should suppress the platform's default handling.
    pub prevent_default: bool,
}

impl Dispatch {
    const IGNORED: Self = Self {
        command: None,
        prevent_default: false,
    };

    fn handled(command: Option<Command>) -> Self {
        Self {
            command,
            prevent_default: true,
        }
    }
}

/// Step sizes for discrete input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputConfig {
    /// Arrow-key pan distance in screen pixels.
    pub pan_step: f64,
    /// Arrow-key pan distance with Shift held.
    pub pan_step_fast: f64,
    /// Wheel factor when scrolling up.
    pub wheel_zoom_in: f64,
    /// Wheel factor when scrolling down.
    pub wheel_zoom_out: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            pan_step: 60.0,
            pan_step_fast: 120.0,
            wheel_zoom_in: 1.1,
            wheel_zoom_out: 0.9,
        }
    }
}

/// Turns [`InputEvent`]s into [`Command`]s.
///
/// The dispatcher owns the [`GestureSession`] and nothing else; it never sees
/// the transform or the selection.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    config: InputConfig,
    session: GestureSession,
}

impl Dispatcher {
    /// Creates an idle dispatcher.
    #[must_use]
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            session: GestureSession::Idle,
        }
    }

    /// Step sizes in use.
    #[must_use]
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// The gesture in progress.
    #[must_use]
    pub fn session(&self) -> GestureSession {
        self.session
    }

    /// Handles one event.
    pub fn handle(&mut self, event: &InputEvent) -> Dispatch {
        match event {
            InputEvent::Wheel { position, delta_y } => {
                let factor = if *delta_y > 0.0 {
                    Some(self.config.wheel_zoom_out)
                } else if *delta_y < 0.0 {
                    Some(self.config.wheel_zoom_in)
                } else {
                    None
                };
                Dispatch::handled(factor.map(|factor| Command::ZoomAt {
                    anchor: *position,
                    factor,
                }))
            }
            InputEvent::PointerDown { position } => {
                self.session.start_drag(*position);
                Dispatch::IGNORED
            }
            InputEvent::PointerMove { position } => Dispatch {
                command: self.session.drag_to(*position).map(Command::PanBy),
                prevent_default: false,
            },
            InputEvent::PointerUp | InputEvent::PointerLeave => {
                if self.session.is_dragging() {
                    self.session.end();
                }
                Dispatch::IGNORED
            }
            InputEvent::TouchStart(touches) => {
                self.session.reseed(touches);
                Dispatch::handled(None)
            }
            InputEvent::TouchMove(touches) => Dispatch::handled(self.touch_move(touches)),
            InputEvent::TouchEnd(touches) => {
                self.session.reseed(touches);
                Dispatch::handled(None)
            }
            InputEvent::Key { key, modifiers } => match self.key(*key, *modifiers) {
                Some(command) => Dispatch::handled(Some(command)),
                None => Dispatch::IGNORED,
            },
        }
    }

    fn touch_move(&mut self, touches: &[Point]) -> Option<Command> {
        match touches {
            [] => None,
            [only] => self.session.drag_to(*only).map(Command::PanBy),
            [a, b, ..] => {
                if !self.session.is_pinching() {
                    // A second finger arrived without its own start event.
                    self.session.start_pinch(*a, *b);
                    return None;
                }
                self.session
                    .pinch_to(*a, *b)
                    .map(|(anchor, factor)| Command::ZoomAt { anchor, factor })
            }
        }
    }

    fn key(&self, key: Key, modifiers: Modifiers) -> Option<Command> {
        // Chorded keys belong to the platform (browser zoom, history).
        if modifiers.intersects(Modifiers::CTRL | Modifiers::ALT | Modifiers::META) {
            return None;
        }
        let step = if modifiers.contains(Modifiers::SHIFT) {
            self.config.pan_step_fast
        } else {
            self.config.pan_step
        };
        let command = match key {
            Key::ArrowLeft => Command::PanBy(Vec2::new(step, 0.0)),
            Key::ArrowRight => Command::PanBy(Vec2::new(-step, 0.0)),
            Key::ArrowUp => Command::PanBy(Vec2::new(0.0, step)),
            Key::ArrowDown => Command::PanBy(Vec2::new(0.0, -step)),
            Key::Escape => Command::ClearSelection,
            Key::Character('+' | '=') => Command::ZoomIn,
            Key::Character('-') => Command::ZoomOut,
            Key::Character('f' | 'F') => Command::Fit,
            Key::Character('0') => Command::Reset,
            Key::Character(_) | Key::Other => return None,
        };
        Some(command)
    }
}

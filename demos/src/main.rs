// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless walkthrough of a seating map.
//!
//! Loads `data/venue.json` (or the path given as the first argument) with the
//! settings in `data/config.json`, replays a short scripted session, and prints
//! what a renderer would draw after each step.
//!
//! Run with `RUST_LOG=seatmap=debug` to see the controller's transitions.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use kurbo::{Point, Rect};
use seatmap::{
    InputEvent, Key, Modifiers, Scene, SceneView, SeatFill, SeatingConfig, SeatingMap, Touches,
};
use smallvec::smallvec;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const VENUE: &str = include_str!("../data/venue.json");
const CONFIG: &str = include_str!("../data/config.json");

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config: SeatingConfig = serde_json::from_str(CONFIG)?;
    let scene: Scene = match std::env::args().nth(1) {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => serde_json::from_str(VENUE)?,
    };
    info!(venue = scene.name(), seats = scene.item_count(), "venue parsed");

    let mut map = SeatingMap::new(config);
    map.set_loading(true);
    map.load_scene(Arc::new(scene));
    map.arm_hint(Duration::ZERO);
    report("loaded, container not measured yet", &map);

    map.set_container(Rect::new(0.0, 0.0, 1280.0, 720.0));
    report("container measured", &map);

    for id in ["A-1-1", "A-1-2", "A-1-3", "B-2-4", "A-4-9"] {
        map.click_seat(id);
    }
    map.focus_seat("A-1-2");
    report("clicked five seats", &map);

    map.handle_event(&InputEvent::Wheel {
        position: Point::new(300.0, 250.0),
        delta_y: -120.0,
    });
    map.handle_event(&InputEvent::PointerDown {
        position: Point::new(600.0, 400.0),
    });
    map.handle_event(&InputEvent::PointerMove {
        position: Point::new(520.0, 380.0),
    });
    map.handle_event(&InputEvent::PointerUp);
    map.handle_event(&InputEvent::Key {
        key: Key::ArrowRight,
        modifiers: Modifiers::SHIFT,
    });
    report("wheel zoom, drag, and shift+arrow", &map);

    let start: Touches = smallvec![Point::new(600.0, 360.0), Point::new(700.0, 360.0)];
    let spread: Touches = smallvec![Point::new(575.0, 360.0), Point::new(725.0, 360.0)];
    map.handle_event(&InputEvent::TouchStart(start));
    map.handle_event(&InputEvent::TouchMove(spread));
    map.handle_event(&InputEvent::TouchEnd(smallvec![]));
    report("pinch out", &map);

    map.advance(Duration::from_secs(3));
    map.handle_event(&InputEvent::Key {
        key: Key::from_name("f"),
        modifiers: Modifiers::empty(),
    });
    map.handle_event(&InputEvent::Key {
        key: Key::Escape,
        modifiers: Modifiers::empty(),
    });
    report("fit and clear", &map);

    Ok(())
}

fn report(step: &str, map: &SeatingMap) {
    let info = map.viewport().debug_info();
    println!("== {step}");
    println!(
        "   scale {:.3}  translate ({:.1}, {:.1})  fit pending: {}",
        info.transform.scale,
        info.transform.tx,
        info.transform.ty,
        map.is_fit_pending()
    );
    if let Some(visible) = info.visible_scene_rect {
        println!(
            "   visible scene ({:.0}, {:.0}) - ({:.0}, {:.0})",
            visible.x0, visible.y0, visible.x1, visible.y1
        );
    }
    if let Some(frame) = map.render() {
        print_frame(&frame);
    }
}

fn print_frame(frame: &SceneView) {
    for section in &frame.sections {
        let selected = section
            .seats
            .iter()
            .filter(|seat| seat.fill == SeatFill::Selected)
            .count();
        println!(
            "   {:<10} {:?}: {} seats drawn, {} selected",
            section.label,
            section.mode,
            section.seats.len(),
            selected
        );
    }
    if let Some(focused) = frame.seats().find(|seat| seat.is_focused) {
        println!("   focus: {}", focused.aria_label());
    }
    let summary = frame.summary;
    println!(
        "   selection {}/{}  total ${}",
        summary.count, summary.capacity, summary.total_price
    );
    for seat in &frame.selected {
        println!("     {} (tier {}) ${}", seat.id, seat.price_tier, seat.price);
    }
    if let Some(hint) = frame.hint {
        println!("   hint: {hint}");
    }
}

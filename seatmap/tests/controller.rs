// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behavior of `SeatingMap`.

use std::sync::Arc;
use std::time::Duration;

use kurbo::{Point, Rect, Size, Vec2};
use seatmap::scene::{Item, Placement, Row, Scene, SceneBuilder, SeatStatus, Section};
use seatmap::virtualization::RenderMode;
use seatmap::{Command, InputEvent, Key, Modifiers, SeatFill, SeatingConfig, SeatingMap, Touches};
use smallvec::smallvec;

const EPS: f64 = 1e-9;

fn arena(rows: u32, cols: u32) -> Arc<Scene> {
    Arc::new(
        SceneBuilder::new(800.0, 600.0)
            .venue("arena", "Arena")
            .grid_section("A", Placement::new(50.0, 50.0, 1.0), rows, cols)
            .build()
            .unwrap(),
    )
}

/// A measured 800x600 container showing an 800x600 canvas at the identity.
fn measured(scene: Arc<Scene>) -> SeatingMap {
    let mut map = SeatingMap::default();
    map.set_container(Rect::new(0.0, 0.0, 800.0, 600.0));
    map.load_scene(scene);
    map.reset();
    map
}

#[test]
fn pinch_keeps_midpoint_anchored() {
    let mut map = measured(arena(10, 20));
    let mid = Point::new(400.0, 300.0);
    let before = map.viewport().screen_to_scene(mid, None).unwrap();

    let start: Touches = smallvec![Point::new(350.0, 300.0), Point::new(450.0, 300.0)];
    let out = map.handle_event(&InputEvent::TouchStart(start));
    assert!(out.prevent_default);
    assert!(map.session().is_pinching());

    let spread: Touches = smallvec![Point::new(325.0, 300.0), Point::new(475.0, 300.0)];
    let out = map.handle_event(&InputEvent::TouchMove(spread));
    assert_eq!(
        out.command,
        Some(Command::ZoomAt {
            anchor: mid,
            factor: 1.5
        })
    );
    assert!(out.changed);
    assert!((map.viewport().scale() - 1.5).abs() < EPS);

    let after = map.viewport().screen_to_scene(mid, None).unwrap();
    assert!((after - before).hypot() < EPS, "{before:?} -> {after:?}");

    // Lift one finger: the other keeps panning.
    map.handle_event(&InputEvent::TouchEnd(smallvec![Point::new(475.0, 300.0)]));
    assert!(map.session().is_dragging());
    let out = map.handle_event(&InputEvent::TouchMove(smallvec![Point::new(485.0, 290.0)]));
    assert_eq!(out.command, Some(Command::PanBy(Vec2::new(10.0, -10.0))));

    map.handle_event(&InputEvent::TouchEnd(smallvec![]));
    assert!(map.session().is_idle());
}

#[test]
fn gestures_anchor_in_an_offset_container() {
    // The container sits below a header and right of a sidebar.
    let mut map = SeatingMap::default();
    map.set_container(Rect::new(100.0, 200.0, 900.0, 800.0));
    map.load_scene(arena(10, 20));
    map.reset();

    let cursor = Point::new(500.0, 500.0);
    let before = map.viewport().screen_to_scene(cursor, None).unwrap();
    assert!((before - Point::new(400.0, 300.0)).hypot() < EPS);

    let out = map.handle_event(&InputEvent::Wheel {
        position: cursor,
        delta_y: -1.0,
    });
    assert!(out.changed);
    let after = map.viewport().screen_to_scene(cursor, None).unwrap();
    assert!((after - before).hypot() < EPS, "{before:?} -> {after:?}");

    let start: Touches = smallvec![Point::new(450.0, 500.0), Point::new(550.0, 500.0)];
    map.handle_event(&InputEvent::TouchStart(start));
    let spread: Touches = smallvec![Point::new(425.0, 500.0), Point::new(575.0, 500.0)];
    let out = map.handle_event(&InputEvent::TouchMove(spread));
    assert!(out.changed);
    assert!((map.viewport().scale() - 1.65).abs() < EPS);
    let pinched = map.viewport().screen_to_scene(cursor, None).unwrap();
    assert!((pinched - before).hypot() < EPS, "{before:?} -> {pinched:?}");
    map.handle_event(&InputEvent::TouchEnd(smallvec![]));

    // A drag keeps the grabbed scene point under the pointer.
    map.handle_event(&InputEvent::PointerDown { position: cursor });
    let target = Point::new(530.0, 480.0);
    map.handle_event(&InputEvent::PointerMove { position: target });
    map.handle_event(&InputEvent::PointerUp);
    let dragged = map.viewport().screen_to_scene(target, None).unwrap();
    assert!((dragged - before).hypot() < 1e-6, "{before:?} -> {dragged:?}");
}

#[test]
fn fit_waits_for_container_then_follows_resizes() {
    let mut map = SeatingMap::default();
    map.load_scene(arena(10, 20));
    assert!(map.is_fit_pending());

    map.set_container(Rect::ZERO);
    assert!(map.is_fit_pending());

    map.set_container(Rect::new(0.0, 0.0, 800.0, 600.0));
    assert!(!map.is_fit_pending());
    assert!((map.viewport().scale() - 0.92).abs() < EPS);

    // Moving the container without resizing keeps the user's view.
    map.pan_by(Vec2::new(25.0, 0.0));
    let panned = map.viewport().transform();
    map.set_container(Rect::new(100.0, 40.0, 900.0, 640.0));
    assert_eq!(map.viewport().transform(), panned);

    // Resizing fits again.
    map.set_container(Rect::new(100.0, 40.0, 1700.0, 640.0));
    assert_ne!(map.viewport().transform(), panned);
    let canvas_br = map
        .viewport()
        .scene_to_screen(Point::new(800.0, 600.0), None)
        .unwrap();
    assert!(canvas_br.y <= 640.0);
}

#[test]
fn fit_command_defers_while_unmeasured() {
    let mut map = SeatingMap::default();
    assert!(!map.apply(Command::Fit));
    assert!(map.is_fit_pending());
}

#[test]
fn five_zoom_ins_compound() {
    let mut map = measured(arena(2, 2));
    for _ in 0..5 {
        assert!(map.zoom_in());
    }
    assert!((map.viewport().scale() - 1.2_f64.powi(5)).abs() < 1e-12);
    for _ in 0..10 {
        map.zoom_in();
    }
    assert_eq!(map.viewport().scale(), 6.0);
}

#[test]
fn ninth_click_is_rejected() {
    let mut map = measured(arena(10, 20));
    for col in 1..=9 {
        map.click_seat(&format!("A-1-{col}"));
    }
    let summary = map.summary();
    assert_eq!(summary.count, 8);
    assert_eq!(summary.remaining, 0);
    assert!(!summary.can_select_more);
    assert!(!map.store().is_selected("A-1-9"));
}

#[test]
fn render_reflects_latest_selection_and_focus() {
    let sold = Item::new("B-1-1", 0.0, 0.0, 2).with_status(SeatStatus::Sold);
    let free = Item::new("B-1-2", 30.0, 0.0, 3);
    let scene = Scene::new(
        Size::new(400.0, 300.0),
        vec![Section::new(
            "section-B",
            "Balcony",
            Placement::new(10.0, 20.0, 0.5),
            vec![Row::new(1, [sold, free])],
        )],
    )
    .unwrap()
    .with_venue("hall", "Hall");
    let mut map = measured(Arc::new(scene));

    assert!(!map.click_seat("B-1-1"));
    assert!(map.click_seat("B-1-2"));
    assert!(map.focus_seat("B-1-2"));

    let frame = map.render().unwrap();
    assert_eq!(frame.label, "Hall seating map");
    let section = &frame.sections[0];
    assert_eq!(&*section.id, "section-B");
    assert_eq!(section.mode, RenderMode::Direct);

    let sold = frame.seat("B-1-1").unwrap();
    assert_eq!(sold.fill, SeatFill::Sold);
    assert!(!sold.interactive);
    assert_eq!(sold.stroke(), None);

    let free = frame.seat("B-1-2").unwrap();
    assert!(free.is_selected && free.is_focused && free.interactive);
    assert_eq!(free.fill.color(), "#2563eb");
    assert_eq!(free.stroke(), Some("#1d4ed8"));
    assert_eq!(free.tier_class.to_string(), "tier-3");
    assert_eq!(free.aria_label(), "Seat B-1-2, available, Price tier 3");

    assert_eq!(frame.selected.len(), 1);
    assert_eq!(frame.selected[0].price, 150);
    assert_eq!(frame.summary.total_price, 150);

    // Clicking again deselects; the next frame shows it.
    map.click_seat("B-1-2");
    let frame = map.render().unwrap();
    assert_eq!(frame.seat("B-1-2").unwrap().fill, SeatFill::Available);
    assert!(frame.selected.is_empty());
}

#[test]
fn escape_clears_selection() {
    let mut map = measured(arena(2, 2));
    map.click_seat("A-1-1");
    let out = map.handle_event(&InputEvent::Key {
        key: Key::Escape,
        modifiers: Modifiers::empty(),
    });
    assert!(out.changed && out.prevent_default);
    assert!(map.store().is_empty());
}

#[test]
fn large_sections_render_a_window() {
    let mut map = measured(arena(40, 30));
    let frame = map.render().unwrap();
    let section = &frame.sections[0];
    assert_eq!(section.mode, RenderMode::Windowed);
    assert_eq!(section.seats.len(), 20);
    assert_eq!(section.seats[0].id.as_str(), "A-1-1");

    assert!(map.set_section_scroll("section-A", 900.0));
    assert!(!map.set_section_scroll("section-Z", 900.0));
    let frame = map.render().unwrap();
    let section = &frame.sections[0];
    assert_eq!(section.strip.start, 30);
    assert_eq!(section.seats[0].id.as_str(), "A-2-1");
    assert_eq!(section.strip.before_extent, 900.0);
}

#[test]
fn culling_drops_seats_outside_the_view() {
    let config = SeatingConfig {
        cull_to_viewport: true,
        ..SeatingConfig::default()
    };
    let mut map = SeatingMap::new(config);
    map.set_container(Rect::new(0.0, 0.0, 800.0, 600.0));
    map.load_scene(arena(10, 20));
    map.reset();

    assert_eq!(map.render().unwrap().seats().count(), 200);

    // Scene x 400..1200 is visible; seat boxes span 50 + 30c .. 70 + 30c.
    map.pan_by(Vec2::new(-400.0, 0.0));
    let frame = map.render().unwrap();
    assert_eq!(frame.seats().count(), 80);
    assert!(frame.seat("A-1-12").is_none());
    assert!(frame.seat("A-1-13").is_some());
}

#[test]
fn reload_purges_missing_seats() {
    let mut map = measured(arena(5, 5));
    map.click_seat("A-1-1");
    map.click_seat("A-5-5");
    map.load_scene(arena(2, 2));
    assert!(map.store().is_selected("A-1-1"));
    assert!(!map.store().is_selected("A-5-5"));
    assert_eq!(map.summary().count, 1);
}

#[test]
fn hint_dismisses_on_deadline_unless_canceled() {
    let mut map = measured(arena(1, 1));
    map.arm_hint(Duration::from_secs(10));
    assert_eq!(
        map.render().unwrap().hint,
        Some("Scroll to zoom • Drag to pan • Arrow keys pan • +/- zoom • F fit • 0 reset")
    );
    assert!(!map.advance(Duration::from_millis(12_499)));
    assert!(map.advance(Duration::from_millis(12_500)));
    assert_eq!(map.render().unwrap().hint, None);

    map.arm_hint(Duration::ZERO);
    map.cancel_hint();
    assert!(!map.advance(Duration::from_secs(60)));
    assert!(map.hint().is_visible());
    map.dismiss_hint();
    assert!(!map.hint().is_visible());
}

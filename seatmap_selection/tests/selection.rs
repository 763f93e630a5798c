// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `seatmap_selection` crate.
//!
//! These exercise the store against real scenes, with a focus on the capacity
//! bound, status gating, and how a scene reload interacts with the selection.

use std::sync::Arc;

use kurbo::Size;
use seatmap_scene::{Item, Placement, Row, Scene, SceneBuilder, SeatStatus, Section};
use seatmap_selection::{SelectionConfig, SelectionStore};

fn grid(rows: u32, cols: u32) -> Arc<Scene> {
    Arc::new(
        SceneBuilder::new(800.0, 600.0)
            .grid_section("A", Placement::new(50.0, 50.0, 1.0), rows, cols)
            .build()
            .unwrap(),
    )
}

fn loaded(scene: &Arc<Scene>) -> SelectionStore {
    let mut store = SelectionStore::new(SelectionConfig::default());
    store.load_scene(scene.clone());
    store
}

#[test]
fn ninth_select_is_rejected_at_capacity() {
    let scene = grid(10, 20);
    let mut store = loaded(&scene);

    for col in 1..=9 {
        let seat = scene.item(&format!("A-1-{col}")).unwrap().clone();
        let accepted = store.select(seat);
        assert_eq!(accepted, col <= 8, "seat A-1-{col}");
    }

    assert_eq!(store.len(), 8);
    assert!(!store.is_selected("A-1-9"));
    assert_eq!(store.remaining_capacity(), 0);
    assert!(!store.can_select_more());
    // Tiers along row 1 cycle 1, 2, 3.
    assert_eq!(store.total_price(), (1 + 2 + 3 + 1 + 2 + 3 + 1 + 2) * 50);
}

#[test]
fn unavailable_seat_never_enters_selection() {
    let mut store = SelectionStore::default();
    for status in [SeatStatus::Held, SeatStatus::Reserved, SeatStatus::Sold] {
        let seat = Arc::new(Item::new("B-1-1", 0.0, 0.0, 1).with_status(status));
        assert!(!store.select(seat.clone()));
        assert!(!store.toggle(seat));
    }
    assert!(store.is_empty());
    assert_eq!(store.revision(), 0);
}

#[test]
fn deselect_twice_equals_once() {
    let scene = grid(2, 2);
    let mut store = loaded(&scene);
    store.select(scene.item("A-1-1").unwrap().clone());
    store.select(scene.item("A-2-2").unwrap().clone());

    assert!(store.deselect("A-1-1"));
    let after_once: Vec<_> = store.items().iter().map(|s| s.id.clone()).collect();
    let rev = store.revision();

    assert!(!store.deselect("A-1-1"));
    let after_twice: Vec<_> = store.items().iter().map(|s| s.id.clone()).collect();
    assert_eq!(after_once, after_twice);
    assert_eq!(store.revision(), rev);
}

#[test]
fn clear_and_focus() {
    let scene = grid(2, 2);
    let mut store = loaded(&scene);
    store.select(scene.item("A-1-1").unwrap().clone());

    assert!(store.set_focus(Some("A-2-1".into())));
    assert!(store.clear_selection());
    assert!(store.is_empty());
    assert_eq!(store.focus().map(|id| id.as_str()), Some("A-2-1"));
    assert!(!store.clear_selection());
}

#[test]
fn reload_purges_absent_ids_and_rebinds_the_rest() {
    let big = grid(5, 5);
    let mut store = loaded(&big);
    store.select(big.item("A-1-1").unwrap().clone());
    store.select(big.item("A-3-3").unwrap().clone());
    store.set_focus(Some("A-3-3".into()));
    store.set_loading(true);

    // Same venue, fewer rows, and A-1-1 has since been sold.
    let sold = Item::new("A-1-1", 0.0, 0.0, 1).with_status(SeatStatus::Sold);
    let smaller = Arc::new(
        Scene::new(
            Size::new(800.0, 600.0),
            vec![Section::new(
                "section-A",
                "Section A",
                Placement::IDENTITY,
                vec![Row::new(1, [sold, Item::new("A-1-2", 30.0, 0.0, 2)])],
            )],
        )
        .unwrap(),
    );
    assert!(store.load_scene(smaller.clone()));

    assert!(!store.is_loading());
    assert!(store.is_selected("A-1-1"));
    assert!(!store.is_selected("A-3-3"));
    assert_eq!(store.items()[0].status, SeatStatus::Sold);
    assert!(Arc::ptr_eq(
        store.items()[0].item(),
        smaller.item("A-1-1").unwrap()
    ));
    // Focus is left alone even though its seat is gone.
    assert_eq!(store.focus().map(|id| id.as_str()), Some("A-3-3"));

    // A sold seat can still be deselected.
    assert!(store.deselect("A-1-1"));
}

#[test]
fn capacity_and_uniqueness_hold_under_mixed_operations() {
    let scene = grid(4, 6);
    let ids: Vec<_> = scene.items().map(|item| item.id.clone()).collect();
    let mut store = SelectionStore::new(SelectionConfig::default().with_max_selection(5));

    let mut seed = 0x2545_f491_u32;
    for _ in 0..500 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let id = &ids[seed as usize % ids.len()];
        let item = scene.item(id.as_str()).unwrap().clone();
        match seed % 7 {
            0 | 1 => {
                store.select(item);
            }
            2 | 3 => {
                store.toggle(item);
            }
            4 | 5 => {
                store.deselect(id.clone());
            }
            _ => {
                store.clear_selection();
            }
        }

        assert!(store.len() <= 5);
        let items = store.items();
        for (i, a) in items.iter().enumerate() {
            assert!(items[i + 1..].iter().all(|b| b.id != a.id));
        }
        assert_eq!(store.remaining_capacity(), 5 - store.len());
    }
}

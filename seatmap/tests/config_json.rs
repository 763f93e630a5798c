// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading configuration and venues from JSON.

#![cfg(feature = "serde")]

use std::sync::Arc;

use seatmap::{Scene, SeatingConfig, SeatingMap};

#[test]
fn missing_keys_take_defaults() {
    let config: SeatingConfig =
        serde_json::from_str(r#"{ "maxSelection": 4, "scaleBounds": [0.5, 3.0] }"#).unwrap();
    assert_eq!(config.max_selection, 4);
    assert_eq!(config.scale_bounds, [0.5, 3.0]);
    assert_eq!(config.unit_price, 50);
    assert_eq!(config.hint_duration_ms, 2500);
    assert!(!config.cull_to_viewport);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = serde_json::from_str::<SeatingConfig>(r#"{ "maxSeats": 4 }"#).unwrap_err();
    assert!(err.to_string().contains("maxSeats"), "{err}");
}

#[test]
fn configured_map_uses_json_venue() {
    let config: SeatingConfig = serde_json::from_str(r#"{ "maxSelection": 1 }"#).unwrap();
    let scene: Scene = serde_json::from_str(
        r#"{
            "venueId": "club",
            "name": "Club",
            "map": { "width": 300, "height": 200 },
            "sections": [{
                "id": "floor",
                "label": "Floor",
                "transform": { "x": 0, "y": 0, "scale": 1 },
                "rows": [{
                    "index": 1,
                    "seats": [
                        { "id": "F-1", "col": 1, "x": 0, "y": 0, "priceTier": 1, "status": "available" },
                        { "id": "F-2", "col": 2, "x": 30, "y": 0, "priceTier": 2, "status": "available" }
                    ]
                }]
            }]
        }"#,
    )
    .unwrap();

    let mut map = SeatingMap::new(config);
    map.load_scene(Arc::new(scene));
    assert!(map.click_seat("F-1"));
    assert!(!map.click_seat("F-2"));
    assert_eq!(map.summary().total_price, 50);
}

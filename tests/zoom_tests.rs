// Host-side tests for the navigation state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod data {
    include!("../src/data.rs");
}
mod zoom {
    include!("../src/zoom.rs");
}

use data::*;
use zoom::*;

fn tiny_data() -> Vec<TimelineItem> {
    vec![TimelineItem {
        id: "hadean",
        name: "Hadean",
        kind: ItemKind::Eon,
        position: -75.0,
        color: [0.8, 0.3, 0.2],
        children: vec![TimelineItem {
            id: "period-a",
            name: "Period A",
            kind: ItemKind::Period,
            position: -60.0,
            color: [0.8, 0.4, 0.3],
            children: vec![TimelineItem {
                id: "event-a1",
                name: "Event A1",
                kind: ItemKind::Event,
                position: -55.0,
                color: [0.8, 0.5, 0.4],
                children: vec![],
            }],
        }],
    }]
}

#[test]
fn builtin_dataset_is_consistent() {
    let data = timeline_data();
    assert!(validate(&data).is_ok());
    assert_eq!(data.len(), 4);
    for eon in &data {
        assert_eq!(eon.kind, ItemKind::Eon);
        let mut prev = f32::NEG_INFINITY;
        for period in &eon.children {
            assert_eq!(period.kind, ItemKind::Period);
            assert!(period.position > prev, "periods out of order in {}", eon.id);
            prev = period.position;
            let mut ev_prev = f32::NEG_INFINITY;
            for ev in &period.children {
                assert_eq!(ev.kind, ItemKind::Event);
                assert!(ev.children.is_empty());
                assert!(ev.position > ev_prev);
                ev_prev = ev.position;
            }
        }
    }
}

#[test]
fn validate_rejects_duplicate_ids() {
    let mut data = tiny_data();
    let mut dup = data[0].clone();
    dup.children.clear();
    dup.children.push(TimelineItem {
        id: "leaf",
        name: "Leaf",
        kind: ItemKind::Period,
        position: 0.0,
        color: [0.0; 3],
        children: vec![data[0].children[0].children[0].clone()],
    });
    data.push(dup);
    assert_eq!(validate(&data), Err("hadean"));
}

#[test]
fn path_length_matches_level_depth_everywhere() {
    let data = timeline_data();
    let mut nav = NavState::new();
    assert_eq!(nav.active_path().len(), nav.level().depth());

    let eon = data[1].clone();
    nav.zoom_in(&eon);
    assert_eq!(nav.active_path().len(), nav.level().depth());

    let period = eon.children[0].clone();
    nav.zoom_in(&period);
    assert_eq!(nav.active_path().len(), nav.level().depth());

    nav.zoom_out(&data);
    assert_eq!(nav.active_path().len(), nav.level().depth());
    nav.zoom_out(&data);
    assert_eq!(nav.active_path().len(), nav.level().depth());
}

#[test]
fn zoom_in_then_out_round_trips() {
    let data = timeline_data();
    let mut nav = NavState::new();
    let eon = data[2].clone();
    nav.zoom_in(&eon);
    let before_level = nav.level();
    let before_path: Vec<_> = nav.active_path().to_vec();

    let period = eon.children[1].clone();
    assert!(nav.zoom_in(&period));
    assert!(nav.zoom_out(&data));

    assert_eq!(nav.level(), before_level);
    assert_eq!(nav.active_path(), before_path.as_slice());
    assert_eq!(nav.target_position(), Some(eon.position));
}

#[test]
fn clicking_an_event_is_a_no_op() {
    let data = tiny_data();
    let mut nav = NavState::new();
    nav.zoom_in(&data[0]);
    nav.zoom_in(&data[0].children[0]);
    let snapshot_path: Vec<_> = nav.active_path().to_vec();

    let event = data[0].children[0].children[0].clone();
    assert!(!nav.zoom_in(&event));
    assert_eq!(nav.level(), ZoomLevel::Event);
    assert_eq!(nav.active_path(), snapshot_path.as_slice());
}

#[test]
fn root_visible_items_is_full_top_level_after_any_navigation() {
    let data = timeline_data();
    let mut nav = NavState::new();
    nav.zoom_in(&data[3]);
    nav.zoom_in(&data[3].children[2].clone());
    while nav.can_zoom_out() {
        nav.zoom_out(&data);
    }
    let visible = nav.visible_items(&data);
    assert_eq!(visible.len(), data.len());
    for (a, b) in visible.iter().zip(&data) {
        assert_eq!(a.id, b.id);
    }
    assert_eq!(nav.target_position(), None);
}

#[test]
fn can_zoom_out_iff_not_at_eon_level() {
    let data = timeline_data();
    let mut nav = NavState::new();
    assert!(!nav.can_zoom_out());
    nav.zoom_in(&data[0]);
    assert!(nav.can_zoom_out());
    nav.zoom_in(&data[0].children[0].clone());
    assert!(nav.can_zoom_out());
    nav.zoom_out(&data);
    nav.zoom_out(&data);
    assert!(!nav.can_zoom_out());
    // Extra zoom-outs at the root stay put.
    assert!(!nav.zoom_out(&data));
    assert_eq!(nav.level(), ZoomLevel::Eon);
}

#[test]
fn lookup_misses_degrade_to_empty() {
    let data = tiny_data();
    let mut nav = NavState::new();
    let ghost = TimelineItem {
        id: "ghost",
        name: "Ghost",
        kind: ItemKind::Eon,
        position: 12.0,
        color: [0.0; 3],
        children: vec![],
    };
    nav.zoom_in(&ghost);
    assert!(nav.visible_items(&data).is_empty());
    assert!(nav.breadcrumbs(&data).is_empty());

    // Backing out from a dangling path lands on a zero target, not a panic.
    let ghost_period = TimelineItem {
        kind: ItemKind::Period,
        id: "ghost-period",
        name: "Ghost Period",
        position: 13.0,
        color: [0.0; 3],
        children: vec![],
    };
    nav.zoom_in(&ghost_period);
    nav.zoom_out(&data);
    assert_eq!(nav.target_position(), Some(0.0));
}

#[test]
fn breadcrumbs_track_the_active_path() {
    let data = timeline_data();
    let mut nav = NavState::new();
    assert!(nav.breadcrumbs(&data).is_empty());

    nav.zoom_in(&data[0]);
    let crumbs = nav.breadcrumbs(&data);
    assert_eq!(crumbs.len(), 1);
    assert_eq!(crumbs[0].name, "Hadean");
    assert_eq!(crumbs[0].level, ZoomLevel::Eon);

    nav.zoom_in(&data[0].children[0].clone());
    let crumbs = nav.breadcrumbs(&data);
    assert_eq!(crumbs.len(), 2);
    assert_eq!(crumbs[1].level, ZoomLevel::Period);
}

#[test]
fn full_drill_down_walkthrough() {
    let data = tiny_data();
    let mut nav = NavState::new();
    assert_eq!(nav.level(), ZoomLevel::Eon);
    assert_eq!(nav.visible_items(&data)[0].name, "Hadean");

    nav.zoom_in(&data[0]);
    assert_eq!(nav.level(), ZoomLevel::Period);
    assert_eq!(nav.active_path(), &["hadean"][..]);
    assert_eq!(nav.target_position(), Some(-75.0));
    assert_eq!(nav.visible_items(&data)[0].name, "Period A");

    nav.zoom_in(&data[0].children[0]);
    assert_eq!(nav.level(), ZoomLevel::Event);
    assert_eq!(nav.active_path(), &["hadean", "period-a"][..]);
    assert_eq!(nav.target_position(), Some(-60.0));
    assert_eq!(nav.visible_items(&data)[0].name, "Event A1");

    nav.zoom_out(&data);
    assert_eq!(nav.level(), ZoomLevel::Period);
    assert_eq!(nav.target_position(), Some(-75.0));
    assert_eq!(nav.visible_items(&data)[0].name, "Period A");

    nav.zoom_out(&data);
    assert_eq!(nav.level(), ZoomLevel::Eon);
    assert!(nav.active_path().is_empty());
    assert_eq!(nav.target_position(), None);
    assert_eq!(nav.visible_items(&data)[0].name, "Hadean");
}

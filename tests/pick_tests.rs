// Host-side tests for picking and the marker lifecycle.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod data {
    include!("../src/data.rs");
}
mod scene {
    include!("../src/scene.rs");
}
mod pick {
    include!("../src/pick.rs");
}

use constants::*;
use data::{ItemKind, TimelineItem};
use glam::Vec3;
use pick::*;
use scene::MarkerSet;

fn item(id: &'static str, position: f32) -> TimelineItem {
    TimelineItem {
        id,
        name: id,
        kind: ItemKind::Eon,
        position,
        color: [0.5, 0.5, 0.5],
        children: vec![],
    }
}

#[test]
fn ray_sphere_hits_a_sphere_ahead() {
    let result = ray_sphere(
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, 5.0),
        2.0,
    );
    let t = result.expect("should intersect");
    assert!(t > 0.0 && t < 5.0);
}

#[test]
fn ray_sphere_misses_off_axis() {
    let result = ray_sphere(
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 5.0),
        2.0,
    );
    assert!(result.is_none());
}

#[test]
fn ray_sphere_ignores_spheres_behind_the_origin() {
    let result = ray_sphere(
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, -5.0),
        2.0,
    );
    assert!(result.is_none());
}

#[test]
fn pick_resolves_the_nearest_of_two_markers_on_the_ray() {
    let mut markers = MarkerSet::new();
    markers.rebuild(&[item("near", 10.0), item("far", 20.0)]);
    // Cast along the axis so the ray passes through both bodies in order.
    let ro = Vec3::new(0.0, MARKER_Y, 0.0);
    let rd = Vec3::new(1.0, 0.0, 0.0);
    let hit = pick_marker(ro, rd, &markers).expect("should hit");
    assert_eq!(hit.id, "near");
}

#[test]
fn pick_with_no_target_is_a_normal_negative_result() {
    let mut markers = MarkerSet::new();
    markers.rebuild(&[item("a", 10.0)]);
    let ro = Vec3::new(0.0, MARKER_Y, 30.0);
    let rd = Vec3::new(0.0, 0.0, 1.0); // away from everything
    assert!(pick_marker(ro, rd, &markers).is_none());
    assert!(pick_marker(ro, rd, &MarkerSet::new()).is_none());
}

#[test]
fn rebuild_reconciles_records_to_the_visible_set_exactly() {
    let mut markers = MarkerSet::new();
    markers.rebuild(&[item("a", 1.0), item("b", 2.0), item("c", 3.0)]);
    assert_eq!(markers.len(), 3);
    assert!(markers.find("b").is_some());

    markers.rebuild(&[item("d", 4.0)]);
    assert_eq!(markers.len(), 1);
    assert!(markers.find("a").is_none(), "stale record survived rebuild");
    assert!(markers.find("d").is_some());

    markers.rebuild(&[]);
    assert!(markers.is_empty());
}

#[test]
fn records_back_reference_their_source_items() {
    let mut markers = MarkerSet::new();
    let src = item("archean", -35.0);
    markers.rebuild(std::slice::from_ref(&src));
    let rec = markers.find("archean").unwrap();
    assert_eq!(rec.name, src.name);
    assert_eq!(rec.position, src.position);
    assert_eq!(rec.kind, src.kind);
    assert_eq!(rec.anchor(), Vec3::new(-35.0, MARKER_Y, 0.0));
}

#[test]
fn hover_scales_one_marker_and_is_idempotent() {
    let mut markers = MarkerSet::new();
    markers.rebuild(&[item("a", 1.0), item("b", 2.0)]);

    for _ in 0..3 {
        markers.set_hovered(Some("a"));
        assert_eq!(markers.hovered(), Some("a"));
        assert_eq!(markers.find("a").unwrap().scale, HOVER_SCALE);
        assert_eq!(markers.find("b").unwrap().scale, 1.0);
    }

    markers.set_hovered(None);
    assert_eq!(markers.hovered(), None);
    assert!(markers.records().iter().all(|r| r.scale == 1.0));

    // Hovering an id that is not in the set clears emphasis.
    markers.set_hovered(Some("ghost"));
    assert_eq!(markers.hovered(), None);
}

#[test]
fn hover_survives_rebuild_only_if_the_id_is_still_visible() {
    let mut markers = MarkerSet::new();
    markers.rebuild(&[item("a", 1.0), item("b", 2.0)]);
    markers.set_hovered(Some("a"));

    markers.rebuild(&[item("a", 1.0)]);
    assert_eq!(markers.hovered(), Some("a"));
    assert_eq!(markers.find("a").unwrap().scale, HOVER_SCALE);

    markers.rebuild(&[item("b", 2.0)]);
    assert_eq!(markers.hovered(), None);
    assert_eq!(markers.find("b").unwrap().scale, 1.0);
}

use crate::constants::MARKER_RADIUS;
use crate::scene::{MarkerRecord, MarkerSet};
use glam::Vec3;

/// Nearest forward intersection of a ray with a sphere, if any.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Cast against the marker bodies only (stems and rings are not pickable)
/// and resolve the nearest hit. No hit is a normal negative result.
pub fn pick_marker<'a>(
    ray_origin: Vec3,
    ray_dir: Vec3,
    markers: &'a MarkerSet,
) -> Option<&'a MarkerRecord> {
    let mut best: Option<(&MarkerRecord, f32)> = None;
    for record in markers.records() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, record.anchor(), MARKER_RADIUS) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((record, t)),
            }
        }
    }
    best.map(|(r, _)| r)
}

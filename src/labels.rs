use crate::camera::CameraRig;
use crate::constants::{LABEL_DEPTH_LIMIT, LABEL_NDC_X_LIMIT};
use crate::scene::MarkerSet;

/// Where one marker's text belongs on the overlay this frame, in pixels
/// relative to the viewport center. Off-screen labels stay in the list with
/// `visible` false so the overlay can fade them out instead of popping.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelPlacement {
    pub text: &'static str,
    pub x: f32,
    pub y: f32,
    pub visible: bool,
}

/// Decide visibility from a projected point: in front of the far clip and
/// horizontally within a band looser than the strict frustum, so labels
/// fade in slightly before their markers are centered.
#[inline]
pub fn label_visible(ndc_x: f32, ndc_z: f32) -> bool {
    ndc_z < LABEL_DEPTH_LIMIT && ndc_x.abs() < LABEL_NDC_X_LIMIT
}

/// Project every marker's anchor through the camera and map it to
/// container-relative pixel coordinates. Runs once per presented frame,
/// after the camera has advanced, so labels never lag by more than a frame.
pub fn project_labels(
    markers: &MarkerSet,
    camera: &CameraRig,
    width: f32,
    height: f32,
) -> Vec<LabelPlacement> {
    markers
        .records()
        .iter()
        .map(|record| {
            let ndc = camera.project(record.anchor(), width, height);
            let px = (ndc.x * 0.5 + 0.5) * width;
            let py = (-ndc.y * 0.5 + 0.5) * height;
            LabelPlacement {
                text: record.name,
                x: px - width * 0.5,
                y: py - height * 0.5,
                visible: label_visible(ndc.x, ndc.z),
            }
        })
        .collect()
}

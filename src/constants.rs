// Camera, interaction, and label tuning constants

// Camera rig
pub const CAMERA_DAMPING: f32 = 0.05; // exponential catch-up per frame
pub const CAMERA_EYE_Y: f32 = 10.0;
pub const CAMERA_LOOK_Y: f32 = 5.0;
pub const CAMERA_FOV_Y_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Overview framing (un-zoomed) and zoomed-in distance
pub const OVERVIEW_X: f32 = -75.0;
pub const OVERVIEW_Z: f32 = 30.0;
pub const ZOOMED_Z: f32 = 15.0;

// Scroll-driven free roam
pub const SCROLL_SENSITIVITY: f32 = 0.02;
pub const SCROLL_MIN_X: f32 = -85.0;
pub const SCROLL_MAX_X: f32 = 85.0;

// Timeline geometry
pub const TIMELINE_LENGTH: f32 = 180.0;
pub const MARKER_Y: f32 = 5.0; // marker anchor height above the ground plane
pub const MARKER_RADIUS: f32 = 1.5; // body sphere, also the pick radius
pub const STEM_HEIGHT: f32 = 6.0;
pub const RING_RADIUS: f32 = 2.0;

// Hover feedback
pub const HOVER_SCALE: f32 = 1.2;
pub const HOVER_BRIGHTEN: f32 = 1.4;

// Label projection thresholds
pub const LABEL_DEPTH_LIMIT: f32 = 1.0; // ndc depth at the far clip
pub const LABEL_NDC_X_LIMIT: f32 = 1.5; // looser than the frustum so labels fade in early

// Decoration
pub const CLOUD_COUNT: usize = 30;
pub const CLOUD_SEED: u64 = 42;

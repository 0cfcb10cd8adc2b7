use crate::constants::*;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Smoothed camera rig riding the timeline axis.
///
/// `current` is the continuously animated (x, z) of the eye; `target` is
/// where navigation or scrolling wants it. Each frame closes a fixed
/// fraction of the gap, so motion is an exponential decay toward the target
/// rather than a simulated spring. Eye height and look height are fixed.
#[derive(Clone, Copy, Debug)]
pub struct CameraRig {
    current: Vec2,
    target: Vec2,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraRig {
    pub fn new() -> Self {
        let overview = Vec2::new(OVERVIEW_X, OVERVIEW_Z);
        Self {
            current: overview,
            target: overview,
        }
    }

    pub fn current(&self) -> Vec2 {
        self.current
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Advance one frame of damped interpolation toward the target.
    pub fn tick(&mut self) {
        self.current += (self.target - self.current) * CAMERA_DAMPING;
    }

    /// Point the rig at a navigation target: `Some(x)` pulls in close over
    /// that coordinate, `None` returns to the overview framing.
    pub fn retarget(&mut self, nav_target: Option<f32>) {
        self.target = match nav_target {
            Some(x) => Vec2::new(x, ZOOMED_Z),
            None => Vec2::new(OVERVIEW_X, OVERVIEW_Z),
        };
    }

    /// Scroll-wheel free roam along the axis, clamped to the traversal
    /// range. Callers suppress this while a navigation target is active.
    pub fn scroll_by(&mut self, delta: f32) {
        self.target.x =
            (self.target.x + delta * SCROLL_SENSITIVITY).clamp(SCROLL_MIN_X, SCROLL_MAX_X);
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(self.current.x, CAMERA_EYE_Y, self.current.y)
    }

    pub fn look_target(&self) -> Vec3 {
        Vec3::new(self.current.x, CAMERA_LOOK_Y, 0.0)
    }

    /// Combined view-projection for the given surface size in pixels.
    pub fn view_proj(&self, width: f32, height: f32) -> Mat4 {
        let aspect = width / height.max(1.0);
        let proj = Mat4::perspective_rh(
            CAMERA_FOV_Y_DEG.to_radians(),
            aspect,
            CAMERA_NEAR,
            CAMERA_FAR,
        );
        let view = Mat4::look_at_rh(self.eye(), self.look_target(), Vec3::Y);
        proj * view
    }

    /// Project a world point to normalized device coordinates. Depth lands
    /// in [0, 1] inside the frustum; points behind the eye come out with
    /// depth > 1 and so fail the label visibility test.
    pub fn project(&self, world: Vec3, width: f32, height: f32) -> Vec3 {
        let clip = self.view_proj(width, height) * Vec4::from((world, 1.0));
        clip.truncate() / clip.w
    }

    /// World-space ray through the given surface pixel, for picking.
    /// Returns `(origin, direction)`.
    pub fn screen_to_world_ray(&self, sx: f32, sy: f32, width: f32, height: f32) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
        let inv = self.view_proj(width, height).inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let far: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.eye();
        let rd = (far - ro).normalize();
        (ro, rd)
    }
}

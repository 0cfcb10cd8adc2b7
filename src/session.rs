use crate::camera::CameraRig;
use crate::data::{self, TimelineItem};
use crate::pick;
use crate::scene::MarkerSet;
use crate::zoom::{Breadcrumb, NavState, ZoomLevel};

/// Owned state of one explorer view.
///
/// Event handlers and the frame loop mutate the session through these
/// methods instead of closing over ambient globals; the wasm shell only
/// converts DOM events to surface pixels and forwards them here. Everything
/// below is host-testable.
pub struct Session {
    data: Vec<TimelineItem>,
    nav: NavState,
    camera: CameraRig,
    markers: MarkerSet,
    running: bool,
}

impl Session {
    pub fn new(data: Vec<TimelineItem>) -> Self {
        if let Err(id) = data::validate(&data) {
            log::warn!("[data] inconsistent dataset near id {id:?}; lookups degrade to empty");
        }
        let mut session = Self {
            data,
            nav: NavState::new(),
            camera: CameraRig::new(),
            markers: MarkerSet::new(),
            running: true,
        };
        session.sync_after_nav();
        session
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraRig {
        &mut self.camera
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the view: the frame loop stops rescheduling and input handlers
    /// early-return. Safe to call repeatedly.
    pub fn shutdown(&mut self) {
        self.running = false;
    }

    /// Reconcile markers and camera after a navigation transition.
    fn sync_after_nav(&mut self) {
        self.markers.rebuild(self.nav.visible_items(&self.data));
        self.camera.retarget(self.nav.target_position());
    }

    /// Pointer move over the surface: re-pick and update hover emphasis.
    /// Returns the hovered id for cursor feedback.
    pub fn hover_at(&mut self, sx: f32, sy: f32, width: f32, height: f32) -> Option<&'static str> {
        if !self.running {
            return None;
        }
        let (ro, rd) = self.camera.screen_to_world_ray(sx, sy, width, height);
        let hit = pick::pick_marker(ro, rd, &self.markers).map(|r| r.id);
        self.markers.set_hovered(hit);
        hit
    }

    /// Click on the surface: pick the nearest marker and drill into it.
    /// Returns true if navigation changed (HUD and overlay need a refresh).
    pub fn click_at(&mut self, sx: f32, sy: f32, width: f32, height: f32) -> bool {
        if !self.running {
            return false;
        }
        let (ro, rd) = self.camera.screen_to_world_ray(sx, sy, width, height);
        let Some(id) = pick::pick_marker(ro, rd, &self.markers).map(|r| r.id) else {
            return false;
        };
        let Some(item) = self
            .nav
            .visible_items(&self.data)
            .iter()
            .find(|i| i.id == id)
            .cloned()
        else {
            return false;
        };
        log::info!("[nav] zoom in on {:?}", item.name);
        if self.nav.zoom_in(&item) {
            self.sync_after_nav();
            true
        } else {
            false
        }
    }

    /// Wheel input pans the free-roam target; suppressed while a zoom
    /// target owns the camera.
    pub fn wheel(&mut self, delta: f32) {
        if !self.running || self.nav.target_position().is_some() {
            return;
        }
        self.camera.scroll_by(delta);
    }

    /// Back out one level. Returns true if navigation changed.
    pub fn zoom_out(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let changed = self.nav.zoom_out(&self.data);
        if changed {
            log::info!("[nav] zoom out to {} level", self.nav.level().label());
            self.sync_after_nav();
        }
        changed
    }

    // --- HUD projections ---

    pub fn zoom_level(&self) -> ZoomLevel {
        self.nav.level()
    }

    pub fn visible_count(&self) -> usize {
        self.markers.len()
    }

    pub fn can_zoom_out(&self) -> bool {
        self.nav.can_zoom_out()
    }

    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        self.nav.breadcrumbs(&self.data)
    }

    /// Breadcrumb trail as shown in the HUD, "Root" when at the top.
    pub fn breadcrumb_text(&self) -> String {
        let crumbs = self.breadcrumbs();
        if crumbs.is_empty() {
            "Root".to_string()
        } else {
            crumbs
                .iter()
                .map(|c| c.name)
                .collect::<Vec<_>>()
                .join(" > ")
        }
    }
}

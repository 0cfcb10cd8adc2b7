use crate::data::{ItemKind, TimelineItem};
use smallvec::SmallVec;

/// Current drill-down depth of the explorer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomLevel {
    Eon,
    Period,
    Event,
}

impl ZoomLevel {
    /// Expected length of the active path at this level.
    pub fn depth(self) -> usize {
        match self {
            ZoomLevel::Eon => 0,
            ZoomLevel::Period => 1,
            ZoomLevel::Event => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ZoomLevel::Eon => "eon",
            ZoomLevel::Period => "period",
            ZoomLevel::Event => "event",
        }
    }
}

/// One entry of the breadcrumb trail shown in the HUD.
#[derive(Clone, Debug, PartialEq)]
pub struct Breadcrumb {
    pub name: &'static str,
    pub level: ZoomLevel,
}

/// Navigation state machine.
///
/// Owns the zoom level, the ids of the ancestors drilled into, and the
/// world-space X the camera should move toward (`None` means the default
/// overview framing). Invariant: `active_path.len() == level.depth()` and
/// `target_position.is_some()` exactly when the level is not `Eon`.
///
/// All id lookups are lenient: the dataset is static and trusted, so a miss
/// degrades to an empty slice or a zero position instead of failing.
#[derive(Clone, Debug)]
pub struct NavState {
    level: ZoomLevel,
    active_path: SmallVec<[&'static str; 2]>,
    target_position: Option<f32>,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavState {
    pub fn new() -> Self {
        Self {
            level: ZoomLevel::Eon,
            active_path: SmallVec::new(),
            target_position: None,
        }
    }

    pub fn level(&self) -> ZoomLevel {
        self.level
    }

    pub fn active_path(&self) -> &[&'static str] {
        &self.active_path
    }

    pub fn target_position(&self) -> Option<f32> {
        self.target_position
    }

    pub fn can_zoom_out(&self) -> bool {
        self.level != ZoomLevel::Eon
    }

    fn active_eon<'a>(&self, data: &'a [TimelineItem]) -> Option<&'a TimelineItem> {
        let id = *self.active_path.first()?;
        data.iter().find(|e| e.id == id)
    }

    fn active_period<'a>(&self, data: &'a [TimelineItem]) -> Option<&'a TimelineItem> {
        let id = *self.active_path.get(1)?;
        self.active_eon(data)?.children.iter().find(|p| p.id == id)
    }

    /// The subset of the tree presented at the current level, in data order.
    pub fn visible_items<'a>(&self, data: &'a [TimelineItem]) -> &'a [TimelineItem] {
        match self.level {
            ZoomLevel::Eon => data,
            ZoomLevel::Period => self
                .active_eon(data)
                .map(|e| e.children.as_slice())
                .unwrap_or(&[]),
            ZoomLevel::Event => self
                .active_period(data)
                .map(|p| p.children.as_slice())
                .unwrap_or(&[]),
        }
    }

    /// Drill into `item`. Eons open their periods, periods open their
    /// events; clicking an event is deliberately a no-op (the hierarchy
    /// bottoms out there). Returns whether the state changed.
    pub fn zoom_in(&mut self, item: &TimelineItem) -> bool {
        let changed = match item.kind {
            ItemKind::Eon => {
                self.level = ZoomLevel::Period;
                self.active_path.clear();
                self.active_path.push(item.id);
                self.target_position = Some(item.position);
                true
            }
            ItemKind::Period => {
                self.level = ZoomLevel::Event;
                self.active_path.push(item.id);
                self.target_position = Some(item.position);
                true
            }
            ItemKind::Event => false,
        };
        debug_assert_eq!(self.active_path.len(), self.level.depth());
        changed
    }

    /// Back out one level. At the root this is a no-op; callers gate the
    /// back action on [`NavState::can_zoom_out`]. Returns whether the state
    /// changed.
    pub fn zoom_out(&mut self, data: &[TimelineItem]) -> bool {
        let changed = match self.level {
            ZoomLevel::Event => {
                self.level = ZoomLevel::Period;
                self.active_path.pop();
                self.target_position =
                    Some(self.active_eon(data).map(|e| e.position).unwrap_or(0.0));
                true
            }
            ZoomLevel::Period => {
                self.level = ZoomLevel::Eon;
                self.active_path.clear();
                self.target_position = None;
                true
            }
            ZoomLevel::Eon => false,
        };
        debug_assert_eq!(self.active_path.len(), self.level.depth());
        changed
    }

    /// Read-only projection of the active path into displayable crumbs;
    /// empty at the root. An id that no longer resolves drops its crumb.
    pub fn breadcrumbs(&self, data: &[TimelineItem]) -> Vec<Breadcrumb> {
        let mut crumbs = Vec::new();
        if let Some(eon) = self.active_eon(data) {
            crumbs.push(Breadcrumb {
                name: eon.name,
                level: ZoomLevel::Eon,
            });
        }
        if let Some(period) = self.active_period(data) {
            crumbs.push(Breadcrumb {
                name: period.name,
                level: ZoomLevel::Period,
            });
        }
        crumbs
    }
}

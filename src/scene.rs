use crate::constants::{HOVER_SCALE, MARKER_Y};
use crate::data::{ItemKind, TimelineItem};
use glam::Vec3;

/// Renderable state for one visible timeline item: the disc body, stem, and
/// halo ring all derive from this record. Carries a snapshot of the source
/// item so picking can hand navigation the thing that was clicked.
#[derive(Clone, Debug)]
pub struct MarkerRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ItemKind,
    pub position: f32,
    pub color: [f32; 3],
    pub scale: f32,
}

impl MarkerRecord {
    /// World-space anchor of the marker body (shared by picking and labels).
    pub fn anchor(&self) -> Vec3 {
        Vec3::new(self.position, MARKER_Y, 0.0)
    }
}

/// The set of markers currently in the scene.
///
/// Reconciliation uses the rebuild strategy: every visible-set change drops
/// all records and constructs fresh ones, so after `rebuild` the record set
/// equals the visible items exactly and nothing stale stays pickable.
#[derive(Clone, Debug, Default)]
pub struct MarkerSet {
    records: Vec<MarkerRecord>,
    hovered: Option<&'static str>,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[MarkerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&MarkerRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn hovered(&self) -> Option<&'static str> {
        self.hovered
    }

    /// Replace all records with fresh ones for `visible`. Hover state is
    /// carried over only if the hovered id survived the change.
    pub fn rebuild(&mut self, visible: &[TimelineItem]) {
        self.records = visible
            .iter()
            .map(|item| MarkerRecord {
                id: item.id,
                name: item.name,
                kind: item.kind,
                position: item.position,
                color: item.color,
                scale: 1.0,
            })
            .collect();
        let hovered = self.hovered.take();
        self.set_hovered(hovered);
    }

    /// Emphasize one marker and relax all others. Repeated calls with the
    /// same id just reapply the same scales.
    pub fn set_hovered(&mut self, id: Option<&'static str>) {
        self.hovered = id.filter(|id| self.records.iter().any(|r| r.id == *id));
        for r in &mut self.records {
            r.scale = if Some(r.id) == self.hovered {
                HOVER_SCALE
            } else {
                1.0
            };
        }
    }
}

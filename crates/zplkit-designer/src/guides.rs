//! Smart guides: edge and center alignment between a dragged element and its
//! siblings.
//!
//! For each sibling and each axis the candidates are tested in a fixed order
//! (start edge, center, end edge) and the first one within the threshold is
//! taken. Siblings are visited in order and a later match overrides an
//! earlier one, so the last matching sibling decides the axis.

use smallvec::SmallVec;
use zplkit_core::constants::{GUIDE_SPAN_PX, SNAP_THRESHOLD_MM};
use zplkit_settings::{AlignmentSettings, SettingsResult, SettingsStore};

use crate::element::{Alignable, ElementGeometry};
use crate::scene::{ItemHandle, ItemKind, ItemShape, Scene, SceneItem};
use crate::transform::mm_to_px;

/// Axis a guide constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideAxis {
    /// Vertical line at a fixed x
    X,
    /// Horizontal line at a fixed y
    Y,
}

/// Which reference lines matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentKind {
    Start,
    Center,
    End,
}

/// A rendered guide line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guide {
    pub axis: GuideAxis,
    pub position_mm: f64,
}

/// Snap along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSnap {
    /// Sibling reference line the guide is drawn through (mm)
    pub guide_mm: f64,
    /// Top-left coordinate that puts the dragged element on the guide (mm)
    pub position_mm: f64,
    pub kind: AlignmentKind,
}

/// Proposed snap for a drag update. At least one axis is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapProposal {
    pub x: Option<AxisSnap>,
    pub y: Option<AxisSnap>,
}

impl SnapProposal {
    /// Guide coordinate on the X axis, if snapped.
    pub fn snap_x(&self) -> Option<f64> {
        self.x.map(|s| s.guide_mm)
    }

    /// Guide coordinate on the Y axis, if snapped.
    pub fn snap_y(&self) -> Option<f64> {
        self.y.map(|s| s.guide_mm)
    }

    /// Applies the snap to a proposed top-left position.
    pub fn apply(&self, x_mm: f64, y_mm: f64) -> (f64, f64) {
        (
            self.x.map_or(x_mm, |s| s.position_mm),
            self.y.map_or(y_mm, |s| s.position_mm),
        )
    }
}

/// Where the engine is within a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignmentState {
    #[default]
    Idle,
    Checking,
    Snapped,
}

/// Alignment engine plus the guide lines it has drawn.
#[derive(Debug, Clone)]
pub struct SmartGuides {
    enabled: bool,
    threshold_mm: f64,
    dpi: f64,
    state: AlignmentState,
    guides: Vec<Guide>,
    handles: SmallVec<[ItemHandle; 2]>,
}

impl SmartGuides {
    pub fn new(dpi: f64) -> Self {
        Self {
            enabled: true,
            threshold_mm: SNAP_THRESHOLD_MM,
            dpi,
            state: AlignmentState::Idle,
            guides: Vec::new(),
            handles: SmallVec::new(),
        }
    }

    pub fn from_settings(settings: &AlignmentSettings, dpi: f64) -> Self {
        Self {
            enabled: settings.enabled,
            threshold_mm: settings.threshold_mm,
            ..Self::new(dpi)
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn threshold_mm(&self) -> f64 {
        self.threshold_mm
    }

    pub fn state(&self) -> AlignmentState {
        self.state
    }

    /// Guides from the most recent check.
    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    pub fn set_dpi(&mut self, dpi: f64) {
        self.dpi = dpi;
    }

    /// Enables or disables alignment. Disabling removes any drawn guides.
    pub fn set_enabled(&mut self, enabled: bool, scene: &mut Scene) {
        self.enabled = enabled;
        if !enabled {
            self.clear(scene);
            self.state = AlignmentState::Idle;
        }
    }

    /// Same as [`SmartGuides::set_enabled`], also persisting the choice.
    pub fn set_enabled_persisted(
        &mut self,
        enabled: bool,
        scene: &mut Scene,
        store: &mut SettingsStore,
    ) -> SettingsResult<()> {
        self.set_enabled(enabled, scene);
        store.set_alignment(AlignmentSettings {
            enabled,
            threshold_mm: self.threshold_mm,
        })
    }

    /// Removes drawn guides. Guides already gone from the scene are ignored.
    pub fn clear(&mut self, scene: &mut Scene) {
        for handle in self.handles.drain(..) {
            let _ = scene.remove(handle);
        }
        self.guides.clear();
    }

    /// Ends the drag gesture.
    pub fn end_drag(&mut self, scene: &mut Scene) {
        self.clear(scene);
        self.state = AlignmentState::Idle;
    }

    /// Checks `moving` against `siblings` for one drag update, redrawing the
    /// guides. Returns `None` when nothing is within the threshold or
    /// alignment is disabled.
    pub fn check_alignment<'a, M, I, S>(
        &mut self,
        moving: &M,
        siblings: I,
        scene: &mut Scene,
    ) -> Option<SnapProposal>
    where
        M: Alignable + ?Sized,
        I: IntoIterator<Item = &'a S>,
        S: Alignable + ?Sized + 'a,
    {
        if !self.enabled {
            return None;
        }

        self.clear(scene);
        self.state = AlignmentState::Checking;

        let me = ElementGeometry::of(moving, self.dpi);
        let my_id = moving.element_id();
        let threshold = self.threshold_mm;

        let mut snap_x: Option<AxisSnap> = None;
        let mut snap_y: Option<AxisSnap> = None;

        for sibling in siblings {
            let Some(id) = sibling.element_id() else {
                continue;
            };
            if Some(id) == my_id {
                continue;
            }
            let other = ElementGeometry::of(sibling, self.dpi);

            if let Some(hit) = match_axis(
                [me.left, me.center_x, me.right],
                [other.left, other.center_x, other.right],
                me.width(),
                threshold,
            ) {
                snap_x = Some(hit);
            }
            if let Some(hit) = match_axis(
                [me.top, me.center_y, me.bottom],
                [other.top, other.center_y, other.bottom],
                me.height(),
                threshold,
            ) {
                snap_y = Some(hit);
            }
        }

        if let Some(hit) = snap_x {
            self.draw_guide(GuideAxis::X, hit.guide_mm, scene);
        }
        if let Some(hit) = snap_y {
            self.draw_guide(GuideAxis::Y, hit.guide_mm, scene);
        }

        if snap_x.is_none() && snap_y.is_none() {
            self.state = AlignmentState::Idle;
            return None;
        }

        self.state = AlignmentState::Snapped;
        tracing::trace!(
            "Smart guide snap x={:?} y={:?}",
            snap_x.map(|s| s.guide_mm),
            snap_y.map(|s| s.guide_mm)
        );
        Some(SnapProposal {
            x: snap_x,
            y: snap_y,
        })
    }

    fn draw_guide(&mut self, axis: GuideAxis, position_mm: f64, scene: &mut Scene) {
        let p = mm_to_px(position_mm, self.dpi);
        let shape = match axis {
            GuideAxis::X => ItemShape::Line {
                x1: p,
                y1: 0.0,
                x2: p,
                y2: GUIDE_SPAN_PX,
            },
            GuideAxis::Y => ItemShape::Line {
                x1: 0.0,
                y1: p,
                x2: GUIDE_SPAN_PX,
                y2: p,
            },
        };
        self.handles
            .push(scene.add(SceneItem::new(ItemKind::Guide, shape)));
        self.guides.push(Guide { axis, position_mm });
    }
}

/// First of start/center/end whose distance is under `threshold`.
fn match_axis(mine: [f64; 3], theirs: [f64; 3], extent: f64, threshold: f64) -> Option<AxisSnap> {
    let [start, center, end] = theirs;
    if (mine[0] - start).abs() < threshold {
        Some(AxisSnap {
            guide_mm: start,
            position_mm: start,
            kind: AlignmentKind::Start,
        })
    } else if (mine[1] - center).abs() < threshold {
        Some(AxisSnap {
            guide_mm: center,
            position_mm: center - extent / 2.0,
            kind: AlignmentKind::Center,
        })
    } else if (mine[2] - end).abs() < threshold {
        Some(AxisSnap {
            guide_mm: end,
            position_mm: end - extent,
            kind: AlignmentKind::End,
        })
    } else {
        None
    }
}

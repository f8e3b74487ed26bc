//! Label canvas: the drawing surface plus everything that shapes its view.
//!
//! The canvas owns the physical label space, the view transform, the scene,
//! the grid layer and the smart guides. Observers (rulers, status readouts)
//! never get called directly; they subscribe to the [`ViewEventBus`] returned
//! by [`LabelCanvas::bus`].

use zplkit_core::constants::VIEW_PADDING;
use zplkit_core::{Orientation, ViewEvent, ViewEventBus};
use zplkit_settings::{LabelSettings, SettingsStore, SnapMode};

use crate::element::{Alignable, LabelElement};
use crate::error::DesignerResult;
use crate::grid::{Axis, GridConfig, GridLayer};
use crate::guides::{SmartGuides, SnapProposal};
use crate::scene::{ItemKind, ItemShape, Scene, SceneItem};
use crate::transform::{CanvasSpace, Point};
use crate::viewport::ViewTransform;

/// Canvas for one label.
#[derive(Debug)]
pub struct LabelCanvas {
    space: CanvasSpace,
    view: ViewTransform,
    scene: Scene,
    grid: GridLayer,
    guides: SmartGuides,
    bus: ViewEventBus,
}

impl LabelCanvas {
    /// Builds a canvas from persisted label, grid and alignment settings and
    /// draws the grid.
    pub fn new(store: &SettingsStore, viewport_width: f64, viewport_height: f64) -> DesignerResult<Self> {
        let label = store.label();
        let space = CanvasSpace::new(label.width_mm, label.height_mm, label.dpi)?;
        let grid = GridLayer::load(store)?;
        let guides = SmartGuides::from_settings(store.alignment(), label.dpi);

        let mut canvas = Self {
            space,
            view: ViewTransform::new(viewport_width, viewport_height),
            scene: Scene::new(),
            grid,
            guides,
            bus: ViewEventBus::new(),
        };
        canvas.grid.regenerate(&mut canvas.scene, &canvas.space);

        tracing::info!("Label canvas ready: {}", canvas.space);
        Ok(canvas)
    }

    pub fn space(&self) -> &CanvasSpace {
        &self.space
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn grid(&self) -> &GridLayer {
        &self.grid
    }

    pub fn guides(&self) -> &SmartGuides {
        &self.guides
    }

    /// Bus carrying scale, length, cursor and selection events.
    pub fn bus(&self) -> &ViewEventBus {
        &self.bus
    }

    /// Publishes on the canvas bus. Returns how many handlers ran.
    pub fn publish(&self, event: ViewEvent) -> usize {
        self.bus.publish(event)
    }

    // ---- zoom & pan ----

    pub fn zoom_in(&mut self) -> f64 {
        self.view.zoom_in();
        self.scale_changed()
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.view.zoom_out();
        self.scale_changed()
    }

    /// Zooms about `anchor` (view px).
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) -> f64 {
        self.view.zoom_at(anchor, factor);
        self.scale_changed()
    }

    /// Handles a mouse wheel notch at `anchor`.
    pub fn wheel_zoom(&mut self, delta: f64, anchor: Point) -> f64 {
        self.view.wheel_zoom(delta, anchor);
        self.scale_changed()
    }

    pub fn reset_zoom(&mut self) -> f64 {
        self.view.reset_zoom();
        self.scale_changed()
    }

    /// Scales and centers the view so the whole label is visible.
    pub fn fit_to_view(&mut self) -> f64 {
        self.view
            .fit_to_view(self.space.width_px(), self.space.height_px(), VIEW_PADDING);
        self.scale_changed()
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.view.pan_by(dx, dy);
    }

    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.view.set_viewport_size(width, height);
    }

    fn scale_changed(&mut self) -> f64 {
        let scale = self.space.set_scale_factor(self.view.scale());
        self.publish(ViewEvent::ScaleChanged { scale });
        scale
    }

    // ---- coordinates ----

    /// View pixels to label millimeters.
    pub fn view_to_mm(&self, view: Point) -> Point {
        let scene = self.view.map_to_scene(view);
        Point::new(self.space.to_mm(scene.x), self.space.to_mm(scene.y))
    }

    /// Label millimeters to view pixels.
    pub fn mm_to_view(&self, mm: Point) -> Point {
        self.view
            .map_from_scene(Point::new(self.space.to_px(mm.x), self.space.to_px(mm.y)))
    }

    // ---- label stock ----

    /// Resizes the label. Guides are dropped, the grid is rebuilt at the new
    /// extent and every other item is kept.
    pub fn set_label_size(
        &mut self,
        width_mm: f64,
        height_mm: f64,
        store: &mut SettingsStore,
    ) -> DesignerResult<()> {
        self.space.set_size_mm(width_mm, height_mm)?;
        self.guides.clear(&mut self.scene);
        self.grid.resize(&mut self.scene, &self.space);

        self.publish(ViewEvent::LengthChanged {
            orientation: Orientation::Horizontal,
            length_mm: width_mm,
        });
        self.publish(ViewEvent::LengthChanged {
            orientation: Orientation::Vertical,
            length_mm: height_mm,
        });

        tracing::info!("Label resized to {:.2}x{:.2} mm", width_mm, height_mm);
        store.set_label(self.label_settings())?;
        Ok(())
    }

    /// Changes the printer resolution and redraws the grid.
    ///
    /// Element items keep their old pixel geometry until resynced with
    /// [`LabelCanvas::sync_element`].
    pub fn set_dpi(&mut self, dpi: f64, store: &mut SettingsStore) -> DesignerResult<()> {
        self.space.set_dpi(dpi)?;
        self.guides.clear(&mut self.scene);
        self.guides.set_dpi(dpi);
        self.grid.regenerate(&mut self.scene, &self.space);

        self.publish(ViewEvent::DpiChanged { dpi });

        tracing::info!("Label resolution set to {} dpi", dpi);
        store.set_label(self.label_settings())?;
        Ok(())
    }

    fn label_settings(&self) -> LabelSettings {
        LabelSettings {
            width_mm: self.space.width_mm(),
            height_mm: self.space.height_mm(),
            dpi: self.space.dpi(),
        }
    }

    // ---- grid ----

    pub fn set_grid_visible(&mut self, visible: bool, store: &mut SettingsStore) -> DesignerResult<()> {
        self.grid
            .set_visible(visible, &mut self.scene, &self.space, store)?;
        Ok(())
    }

    pub fn update_grid(&mut self, config: GridConfig, store: &mut SettingsStore) -> DesignerResult<()> {
        self.grid
            .update_config(config, &mut self.scene, &self.space, store)?;
        Ok(())
    }

    pub fn set_snap_mode(&mut self, mode: SnapMode, store: &mut SettingsStore) -> DesignerResult<()> {
        self.grid.set_snap_mode(mode, store)?;
        Ok(())
    }

    pub fn snap_mode(&self) -> SnapMode {
        self.grid.config().snap_mode()
    }

    /// Nearest grid intersection to a point in mm.
    pub fn snap_to_grid(&self, x_mm: f64, y_mm: f64) -> (f64, f64) {
        let config = self.grid.config();
        (config.snap(x_mm, Axis::X), config.snap(y_mm, Axis::Y))
    }

    // ---- smart guides ----

    pub fn set_alignment_enabled(&mut self, enabled: bool, store: &mut SettingsStore) -> DesignerResult<()> {
        self.guides
            .set_enabled_persisted(enabled, &mut self.scene, store)?;
        Ok(())
    }

    /// Runs the alignment check for one drag update.
    pub fn check_alignment<'a, M, I, S>(&mut self, moving: &M, siblings: I) -> Option<SnapProposal>
    where
        M: Alignable + ?Sized,
        I: IntoIterator<Item = &'a S>,
        S: Alignable + ?Sized + 'a,
    {
        self.guides.check_alignment(moving, siblings, &mut self.scene)
    }

    pub fn end_drag(&mut self) {
        self.guides.end_drag(&mut self.scene);
    }

    // ---- element items ----

    /// Draws `element` or updates its existing item.
    pub fn sync_element(&mut self, element: &LabelElement) -> DesignerResult<()> {
        let (x, y, w, h) = element.bounds_mm();
        let shape = ItemShape::Rect {
            x: self.space.to_px(x),
            y: self.space.to_px(y),
            width: self.space.to_px(w),
            height: self.space.to_px(h),
        };
        match self.scene.find_element(element.id) {
            Some(handle) => self.scene.set_shape(handle, shape)?,
            None => {
                self.scene
                    .add(SceneItem::new(ItemKind::Element(element.id), shape));
            }
        }
        Ok(())
    }

    /// Removes the item drawn for `element`, if any.
    pub fn remove_element_item(&mut self, element: &LabelElement) {
        if let Some(handle) = self.scene.find_element(element.id) {
            let _ = self.scene.remove(handle);
        }
    }

    /// Empties the scene behind the grid's back; the next grid operation
    /// notices and regenerates.
    pub fn clear_scene(&mut self) {
        self.scene.clear();
    }
}

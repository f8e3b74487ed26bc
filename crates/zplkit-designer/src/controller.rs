//! Designer controller.
//!
//! Composes the canvas, the element registry, the rulers and the settings
//! store. Rulers are wired to the canvas only through the view event bus.

use zplkit_core::{thread_safe, MeasurementUnit, SubscriptionId, ThreadSafe, ViewEvent};
use zplkit_settings::{SettingsStore, SnapMode};

use crate::canvas::LabelCanvas;
use crate::element::{ElementId, ElementRegistry, LabelElement};
use crate::error::{DesignerError, DesignerResult};
use crate::grid::GridConfig;
use crate::ruler::RulerModel;
use crate::transform::Point;

/// Front door for a designer session.
#[derive(Debug)]
pub struct DesignerController {
    canvas: LabelCanvas,
    store: SettingsStore,
    elements: ElementRegistry,
    horizontal_ruler: ThreadSafe<RulerModel>,
    vertical_ruler: ThreadSafe<RulerModel>,
    subscriptions: Vec<SubscriptionId>,
    dragging: Option<ElementId>,
    selection: Option<ElementId>,
}

impl DesignerController {
    /// Builds a canvas from `store` and attaches a ruler per axis.
    pub fn new(store: SettingsStore, viewport_width: f64, viewport_height: f64) -> DesignerResult<Self> {
        let canvas = LabelCanvas::new(&store, viewport_width, viewport_height)?;
        let space = canvas.space();
        let unit = store.ruler_unit();

        let mut horizontal = RulerModel::horizontal(space.width_mm(), space.dpi());
        horizontal.set_unit(unit);
        let mut vertical = RulerModel::vertical(space.height_mm(), space.dpi());
        vertical.set_unit(unit);

        let horizontal_ruler = thread_safe(horizontal);
        let vertical_ruler = thread_safe(vertical);
        let subscriptions = vec![
            RulerModel::attach(&horizontal_ruler, canvas.bus()),
            RulerModel::attach(&vertical_ruler, canvas.bus()),
        ];

        tracing::info!("Designer controller started");
        Ok(Self {
            canvas,
            store,
            elements: ElementRegistry::new(),
            horizontal_ruler,
            vertical_ruler,
            subscriptions,
            dragging: None,
            selection: None,
        })
    }

    pub fn canvas(&self) -> &LabelCanvas {
        &self.canvas
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    pub fn elements(&self) -> &ElementRegistry {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> Option<&LabelElement> {
        self.elements.get(id)
    }

    pub fn horizontal_ruler(&self) -> &ThreadSafe<RulerModel> {
        &self.horizontal_ruler
    }

    pub fn vertical_ruler(&self) -> &ThreadSafe<RulerModel> {
        &self.vertical_ruler
    }

    pub fn selection(&self) -> Option<ElementId> {
        self.selection
    }

    /// Element currently being dragged, if any.
    pub fn dragging(&self) -> Option<ElementId> {
        self.dragging
    }

    // ---- elements ----

    /// Places an element on the label.
    pub fn add_element(&mut self, element: LabelElement) -> DesignerResult<ElementId> {
        self.canvas.sync_element(&element)?;
        tracing::debug!("Added {} element {}", element.kind.name(), element.id);
        Ok(self.elements.insert(element))
    }

    pub fn remove_element(&mut self, id: ElementId) -> DesignerResult<LabelElement> {
        let element = self
            .elements
            .remove(id)
            .ok_or(DesignerError::UnknownElement(id))?;
        self.canvas.remove_element_item(&element);
        if self.dragging == Some(id) {
            self.end_drag();
        }
        if self.selection == Some(id) {
            self.clear_selection();
        }
        Ok(element)
    }

    /// Moves an element without any snapping.
    pub fn move_element(&mut self, id: ElementId, x_mm: f64, y_mm: f64) -> DesignerResult<()> {
        let element = self
            .elements
            .get_mut(id)
            .ok_or(DesignerError::UnknownElement(id))?;
        element.move_to(x_mm, y_mm);
        self.after_move(id)
    }

    fn after_move(&mut self, id: ElementId) -> DesignerResult<()> {
        let element = self
            .elements
            .get(id)
            .ok_or(DesignerError::UnknownElement(id))?;
        self.canvas.sync_element(element)?;
        if self.selection == Some(id) {
            self.publish_selection();
        }
        Ok(())
    }

    // ---- drag gesture ----

    /// Starts dragging `id` and selects it.
    pub fn begin_drag(&mut self, id: ElementId) -> DesignerResult<()> {
        if self.elements.get(id).is_none() {
            return Err(DesignerError::UnknownElement(id));
        }
        self.dragging = Some(id);
        self.select(id)
    }

    /// Moves the dragged element toward `(x_mm, y_mm)` (top-left), applying
    /// grid and guide snapping per the snap mode. Returns where it landed.
    pub fn drag_to(&mut self, id: ElementId, x_mm: f64, y_mm: f64) -> DesignerResult<(f64, f64)> {
        let mut moved = self
            .elements
            .get(id)
            .cloned()
            .ok_or(DesignerError::UnknownElement(id))?;

        let mode = self.canvas.snap_mode();
        let (mut x, mut y) = if mode.snaps_to_grid() {
            self.canvas.snap_to_grid(x_mm, y_mm)
        } else {
            (x_mm, y_mm)
        };

        if mode.snaps_to_guides() {
            moved.move_to(x, y);
            if let Some(proposal) = self.canvas.check_alignment(&moved, self.elements.iter()) {
                (x, y) = proposal.apply(x, y);
            }
        }

        if let Some(element) = self.elements.get_mut(id) {
            element.move_to(x, y);
        }
        self.after_move(id)?;
        Ok((x, y))
    }

    /// Finishes the drag and removes any guides.
    pub fn end_drag(&mut self) {
        self.canvas.end_drag();
        self.dragging = None;
    }

    // ---- overlays ----

    /// Pointer moved to `view` (view px); rulers show the cursor position.
    pub fn pointer_moved(&mut self, view: Point) -> Point {
        let mm = self.canvas.view_to_mm(view);
        self.canvas.publish(ViewEvent::CursorMoved {
            x_mm: Some(mm.x),
            y_mm: Some(mm.y),
        });
        mm
    }

    pub fn pointer_left(&mut self) {
        self.canvas.publish(ViewEvent::CursorMoved {
            x_mm: None,
            y_mm: None,
        });
    }

    /// Selects `id`; rulers highlight its extent.
    pub fn select(&mut self, id: ElementId) -> DesignerResult<()> {
        if self.elements.get(id).is_none() {
            return Err(DesignerError::UnknownElement(id));
        }
        self.selection = Some(id);
        self.publish_selection();
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.publish_selection();
    }

    fn publish_selection(&self) {
        let bounds_mm = self
            .selection
            .and_then(|id| self.elements.get(id))
            .map(LabelElement::bounds_mm);
        self.canvas
            .publish(ViewEvent::SelectionBoundsChanged { bounds_mm });
    }

    // ---- view ----

    pub fn zoom_in(&mut self) -> f64 {
        self.canvas.zoom_in()
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.canvas.zoom_out()
    }

    pub fn wheel_zoom(&mut self, delta: f64, anchor: Point) -> f64 {
        self.canvas.wheel_zoom(delta, anchor)
    }

    pub fn reset_zoom(&mut self) -> f64 {
        self.canvas.reset_zoom()
    }

    pub fn fit_to_view(&mut self) -> f64 {
        self.canvas.fit_to_view()
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.canvas.pan_by(dx, dy);
    }

    // ---- settings-backed state ----

    pub fn set_label_size(&mut self, width_mm: f64, height_mm: f64) -> DesignerResult<()> {
        self.canvas
            .set_label_size(width_mm, height_mm, &mut self.store)
    }

    /// Changes the resolution and redraws every element at the new density.
    pub fn set_dpi(&mut self, dpi: f64) -> DesignerResult<()> {
        self.canvas.set_dpi(dpi, &mut self.store)?;
        for element in self.elements.iter() {
            self.canvas.sync_element(element)?;
        }
        Ok(())
    }

    pub fn set_grid_visible(&mut self, visible: bool) -> DesignerResult<()> {
        self.canvas.set_grid_visible(visible, &mut self.store)
    }

    pub fn update_grid(&mut self, config: GridConfig) -> DesignerResult<()> {
        self.canvas.update_grid(config, &mut self.store)
    }

    pub fn set_snap_mode(&mut self, mode: SnapMode) -> DesignerResult<()> {
        self.canvas.set_snap_mode(mode, &mut self.store)
    }

    pub fn set_alignment_enabled(&mut self, enabled: bool) -> DesignerResult<()> {
        self.canvas.set_alignment_enabled(enabled, &mut self.store)
    }

    /// Switches both rulers to `unit` and remembers the choice.
    pub fn set_ruler_unit(&mut self, unit: MeasurementUnit) -> DesignerResult<()> {
        self.horizontal_ruler.lock().set_unit(unit);
        self.vertical_ruler.lock().set_unit(unit);
        self.store.set_ruler_unit(unit)?;
        Ok(())
    }

    /// Detaches the rulers and writes settings.
    pub fn shutdown(&mut self) -> DesignerResult<()> {
        for id in self.subscriptions.drain(..) {
            self.canvas.bus().unsubscribe(id);
        }
        self.store.save()?;
        tracing::info!("Designer controller stopped");
        Ok(())
    }
}

//! Grid configuration, line generation, snapping and the grid layer.
//!
//! Lines sit at `offset + k * size` for every `k >= 0` that stays within the
//! label extent (inclusive). The grid layer keeps handles to the lines it drew
//! so visibility toggles only flip flags; if the surface was cleared behind its
//! back it discards the handles and regenerates from configuration.

use zplkit_core::{GeometryError, Result};
use zplkit_settings::{GridSettings, SettingsResult, SettingsStore, SnapMode};

use crate::scene::{ItemHandle, ItemKind, ItemShape, Scene, SceneItem};
use crate::transform::CanvasSpace;

// Absorbs float error so a line exactly on the far edge is kept.
const EXTENT_EPSILON: f64 = 1e-9;

/// Axis selector for grid queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Validated grid configuration (all values in mm).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    size_x_mm: f64,
    size_y_mm: f64,
    offset_x_mm: f64,
    offset_y_mm: f64,
    visible: bool,
    snap_mode: SnapMode,
}

impl GridConfig {
    pub fn new(size_x_mm: f64, size_y_mm: f64, offset_x_mm: f64, offset_y_mm: f64) -> Result<Self> {
        Ok(Self {
            size_x_mm: GeometryError::ensure_positive("size_x_mm", size_x_mm)?,
            size_y_mm: GeometryError::ensure_positive("size_y_mm", size_y_mm)?,
            offset_x_mm: GeometryError::ensure_non_negative("offset_x_mm", offset_x_mm)?,
            offset_y_mm: GeometryError::ensure_non_negative("offset_y_mm", offset_y_mm)?,
            visible: true,
            snap_mode: SnapMode::default(),
        })
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_snap_mode(mut self, snap_mode: SnapMode) -> Self {
        self.snap_mode = snap_mode;
        self
    }

    pub fn from_settings(settings: &GridSettings) -> Result<Self> {
        Ok(Self::new(
            settings.size_x,
            settings.size_y,
            settings.offset_x,
            settings.offset_y,
        )?
        .with_visible(settings.show_gridlines)
        .with_snap_mode(settings.snap_mode))
    }

    pub fn to_settings(&self) -> GridSettings {
        GridSettings {
            size_x: self.size_x_mm,
            size_y: self.size_y_mm,
            offset_x: self.offset_x_mm,
            offset_y: self.offset_y_mm,
            show_gridlines: self.visible,
            snap_mode: self.snap_mode,
        }
    }

    pub fn size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.size_x_mm,
            Axis::Y => self.size_y_mm,
        }
    }

    pub fn offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.offset_x_mm,
            Axis::Y => self.offset_y_mm,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn snap_mode(&self) -> SnapMode {
        self.snap_mode
    }

    /// X positions (mm) of vertical lines within `[0, width_mm]`.
    pub fn vertical_lines(&self, width_mm: f64) -> Vec<f64> {
        line_positions(self.offset_x_mm, self.size_x_mm, width_mm)
    }

    /// Y positions (mm) of horizontal lines within `[0, height_mm]`.
    pub fn horizontal_lines(&self, height_mm: f64) -> Vec<f64> {
        line_positions(self.offset_y_mm, self.size_y_mm, height_mm)
    }

    /// Nearest grid coordinate to `value_mm` along `axis`.
    ///
    /// Values before the offset snap to the first line.
    pub fn snap(&self, value_mm: f64, axis: Axis) -> f64 {
        let offset = self.offset(axis);
        let size = self.size(axis);
        let k = ((value_mm - offset) / size).round().max(0.0);
        offset + k * size
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        let settings = GridSettings::default();
        Self {
            size_x_mm: settings.size_x,
            size_y_mm: settings.size_y,
            offset_x_mm: settings.offset_x,
            offset_y_mm: settings.offset_y,
            visible: settings.show_gridlines,
            snap_mode: settings.snap_mode,
        }
    }
}

/// Positions `offset + k * size` for `k = 0, 1, ...` while `<= extent`.
pub fn line_positions(offset: f64, size: f64, extent: f64) -> Vec<f64> {
    if size <= 0.0 || !size.is_finite() || !offset.is_finite() || !extent.is_finite() {
        return Vec::new();
    }
    let mut positions = Vec::new();
    let mut k = 0u32;
    loop {
        let pos = offset + f64::from(k) * size;
        if pos > extent + EXTENT_EPSILON {
            break;
        }
        positions.push(pos);
        k += 1;
    }
    positions
}

/// Grid lines and label border drawn on a scene.
#[derive(Debug, Clone)]
pub struct GridLayer {
    config: GridConfig,
    lines: Vec<ItemHandle>,
    border: Option<ItemHandle>,
    regenerations: usize,
}

impl GridLayer {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            lines: Vec::new(),
            border: None,
            regenerations: 0,
        }
    }

    /// Builds the layer from the persisted grid record.
    pub fn load(store: &SettingsStore) -> Result<Self> {
        Ok(Self::new(GridConfig::from_settings(store.grid())?))
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Handles of the grid lines currently drawn (border excluded).
    pub fn line_handles(&self) -> &[ItemHandle] {
        &self.lines
    }

    pub fn border_handle(&self) -> Option<ItemHandle> {
        self.border
    }

    /// How many times the grid was rebuilt from configuration.
    pub fn regeneration_count(&self) -> usize {
        self.regenerations
    }

    /// Discards any existing grid items and draws the grid from configuration.
    pub fn regenerate(&mut self, scene: &mut Scene, space: &CanvasSpace) {
        self.remove_items(scene);

        let width_px = space.width_px();
        let height_px = space.height_px();
        let visible = self.config.visible;

        for x in self.config.vertical_lines(space.width_mm()) {
            let x_px = space.to_px(x);
            self.lines.push(scene.add(
                SceneItem::new(
                    ItemKind::GridLine,
                    ItemShape::Line {
                        x1: x_px,
                        y1: 0.0,
                        x2: x_px,
                        y2: height_px,
                    },
                )
                .with_visible(visible),
            ));
        }

        for y in self.config.horizontal_lines(space.height_mm()) {
            let y_px = space.to_px(y);
            self.lines.push(scene.add(
                SceneItem::new(
                    ItemKind::GridLine,
                    ItemShape::Line {
                        x1: 0.0,
                        y1: y_px,
                        x2: width_px,
                        y2: y_px,
                    },
                )
                .with_visible(visible),
            ));
        }

        // The outline is drawn whether or not the grid is shown.
        self.border = Some(scene.add(SceneItem::new(
            ItemKind::Border,
            ItemShape::Rect {
                x: 0.0,
                y: 0.0,
                width: width_px,
                height: height_px,
            },
        )));

        self.regenerations += 1;
        tracing::debug!(
            "Grid regenerated: {} lines for {:.2}x{:.2} mm",
            self.lines.len(),
            space.width_mm(),
            space.height_mm()
        );
    }

    /// Shows or hides the grid lines and persists the choice.
    ///
    /// Flips visibility in place when every handle is still live, otherwise
    /// rebuilds the grid.
    pub fn set_visible(
        &mut self,
        visible: bool,
        scene: &mut Scene,
        space: &CanvasSpace,
        store: &mut SettingsStore,
    ) -> SettingsResult<()> {
        self.config.visible = visible;
        self.apply_visibility(scene, space);
        store.set_grid(self.config.to_settings())
    }

    /// Changes the snap mode and persists it.
    pub fn set_snap_mode(&mut self, mode: SnapMode, store: &mut SettingsStore) -> SettingsResult<()> {
        self.config.snap_mode = mode;
        store.set_grid(self.config.to_settings())
    }

    /// Replaces the configuration, persists it and redraws the grid.
    pub fn update_config(
        &mut self,
        config: GridConfig,
        scene: &mut Scene,
        space: &CanvasSpace,
        store: &mut SettingsStore,
    ) -> SettingsResult<()> {
        store.set_grid(config.to_settings())?;
        self.config = config;
        self.regenerate(scene, space);
        Ok(())
    }

    /// Rebuilds the surface for a new label size. Non-grid items are kept
    /// exactly as they were; grid lines are regenerated at the new extent.
    pub fn resize(&mut self, scene: &mut Scene, space: &CanvasSpace) {
        let preserved: Vec<SceneItem> = scene
            .items()
            .filter(|(_, item)| !item.kind.is_grid())
            .map(|(_, item)| item.clone())
            .collect();

        scene.clear();
        self.lines.clear();
        self.border = None;
        self.regenerate(scene, space);

        for item in preserved {
            scene.add(item);
        }
    }

    fn apply_visibility(&mut self, scene: &mut Scene, space: &CanvasSpace) {
        let all_live = self.border.is_some_and(|b| scene.contains(b))
            && self.lines.iter().all(|h| scene.contains(*h));
        if !all_live {
            tracing::debug!("Grid handles invalidated, regenerating");
            self.regenerate(scene, space);
            return;
        }

        let visible = self.config.visible;
        for handle in &self.lines {
            if let Err(e) = scene.set_visible(*handle, visible) {
                tracing::warn!("{}, regenerating grid", e);
                self.regenerate(scene, space);
                return;
            }
        }
    }

    fn remove_items(&mut self, scene: &mut Scene) {
        // Items may already be gone if the scene was cleared elsewhere.
        for handle in self.lines.drain(..) {
            let _ = scene.remove(handle);
        }
        if let Some(border) = self.border.take() {
            let _ = scene.remove(border);
        }
    }
}

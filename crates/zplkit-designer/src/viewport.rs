//! View transform and zoom-to-point handling.
//!
//! Maps scene coordinates (device pixels at scale 1.0) to view coordinates
//! (on-screen pixels) and back:
//!
//! ```text
//! view = scene * scale + translation
//! scene = (view - translation) / scale
//! ```
//!
//! Every zoom keeps the scene point under an anchor pixel fixed on screen.

use std::fmt;

use zplkit_core::constants::ZOOM_STEP;

use crate::transform::{clamp_scale, Point};

/// Scale and translation applied to the scene when drawing it on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    scale: f64,
    translate_x: f64,
    translate_y: f64,
    viewport_width: f64,
    viewport_height: f64,
}

impl ViewTransform {
    /// Creates an identity transform for a viewport of the given size (px).
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            viewport_width,
            viewport_height,
        }
    }

    /// Current scale factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Accumulated translation in view pixels.
    pub fn translation(&self) -> (f64, f64) {
        (self.translate_x, self.translate_y)
    }

    pub fn viewport_size(&self) -> (f64, f64) {
        (self.viewport_width, self.viewport_height)
    }

    /// Sets the viewport dimensions (typically called when the window resizes).
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Center of the viewport in view pixels.
    pub fn viewport_center(&self) -> Point {
        Point::new(self.viewport_width / 2.0, self.viewport_height / 2.0)
    }

    /// View pixel to scene coordinate.
    pub fn map_to_scene(&self, view: Point) -> Point {
        Point::new(
            (view.x - self.translate_x) / self.scale,
            (view.y - self.translate_y) / self.scale,
        )
    }

    /// Scene coordinate to view pixel.
    pub fn map_from_scene(&self, scene: Point) -> Point {
        Point::new(
            scene.x * self.scale + self.translate_x,
            scene.y * self.scale + self.translate_y,
        )
    }

    /// Scales the view by `factor` while keeping the scene point under
    /// `anchor` (view px) in place. Returns the new, clamped scale.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) -> f64 {
        let old_pos = self.map_to_scene(anchor);

        let new_scale = clamp_scale(self.scale * factor);
        let scale_ratio = new_scale / self.scale;
        self.scale = new_scale;

        let new_pos = self.map_to_scene(anchor);
        let delta_x = new_pos.x - old_pos.x;
        let delta_y = new_pos.y - old_pos.y;
        self.translate_scene(delta_x, delta_y);

        tracing::trace!(
            "Zoom x{:.4} (ratio {:.4}) at ({:.1}, {:.1}) -> scale {:.4}",
            factor,
            scale_ratio,
            anchor.x,
            anchor.y,
            self.scale
        );
        self.scale
    }

    /// Zooms in one step around the viewport center.
    pub fn zoom_in(&mut self) -> f64 {
        let center = self.viewport_center();
        self.zoom_at(center, ZOOM_STEP)
    }

    /// Zooms out one step around the viewport center.
    pub fn zoom_out(&mut self) -> f64 {
        let center = self.viewport_center();
        self.zoom_at(center, 1.0 / ZOOM_STEP)
    }

    /// Zooms one step for a wheel event. Positive `delta` zooms in, negative
    /// zooms out, zero leaves the view alone.
    pub fn wheel_zoom(&mut self, delta: f64, anchor: Point) -> f64 {
        if delta > 0.0 {
            self.zoom_at(anchor, ZOOM_STEP)
        } else if delta < 0.0 {
            self.zoom_at(anchor, 1.0 / ZOOM_STEP)
        } else {
            self.scale
        }
    }

    /// Resets scale to 1.0 and clears all accumulated translation.
    pub fn reset_zoom(&mut self) -> f64 {
        self.scale = 1.0;
        self.translate_x = 0.0;
        self.translate_y = 0.0;
        self.scale
    }

    /// Pans by a delta in view pixels.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.translate_x += dx;
        self.translate_y += dy;
    }

    /// Fits a scene rectangle of `width` x `height` (scene px) into the
    /// viewport with `padding` (fraction of the viewport per side) and
    /// centers it. Returns the new scale.
    pub fn fit_to_view(&mut self, width: f64, height: f64, padding: f64) -> f64 {
        if width <= 0.0 || height <= 0.0 {
            return self.scale;
        }

        let padding_factor = 1.0 - (padding * 2.0);
        let zoom_x = (self.viewport_width * padding_factor) / width;
        let zoom_y = (self.viewport_height * padding_factor) / height;
        self.scale = clamp_scale(zoom_x.min(zoom_y));

        self.translate_x = (self.viewport_width - width * self.scale) / 2.0;
        self.translate_y = (self.viewport_height - height * self.scale) / 2.0;
        self.scale
    }

    // Translation expressed in scene units, as a view "translate" call does.
    fn translate_scene(&mut self, dx: f64, dy: f64) {
        self.translate_x += dx * self.scale;
        self.translate_y += dy * self.scale;
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}

impl fmt::Display for ViewTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale: {:.2}x | Translate: ({:.1}, {:.1})",
            self.scale, self.translate_x, self.translate_y
        )
    }
}

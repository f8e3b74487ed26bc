//! Millimeter to device-pixel conversion and the label canvas extent.
//!
//! Label geometry lives in millimeters. The printer addresses whole dots, so
//! the canvas works in device pixels at the printer's resolution (1 px = 1 dot
//! at view scale 1.0).

use std::fmt;

use zplkit_core::constants::{DEFAULT_DPI, MAX_SCALE, MIN_SCALE, MM_PER_INCH};
use zplkit_core::{GeometryError, Result};

/// Converts millimeters to whole device pixels at `dpi`.
pub fn mm_to_px(mm: f64, dpi: f64) -> f64 {
    (mm * dpi / MM_PER_INCH).round()
}

/// Converts device pixels back to millimeters at `dpi`.
pub fn px_to_mm(px: f64, dpi: f64) -> f64 {
    px * MM_PER_INCH / dpi
}

/// Clamps a view scale into the supported zoom range.
pub fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// A 2D point. Units depend on context (mm, scene px or view px).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Physical label extent plus the current view scale.
///
/// Pixel dimensions are derived and refreshed whenever the millimeter size or
/// resolution changes.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasSpace {
    width_mm: f64,
    height_mm: f64,
    dpi: f64,
    scale_factor: f64,
    width_px: f64,
    height_px: f64,
}

impl CanvasSpace {
    /// Creates a canvas space at scale 1.0.
    pub fn new(width_mm: f64, height_mm: f64, dpi: f64) -> Result<Self> {
        GeometryError::ensure_positive("width_mm", width_mm)?;
        GeometryError::ensure_positive("height_mm", height_mm)?;
        GeometryError::ensure_positive("dpi", dpi)?;
        Ok(Self {
            width_mm,
            height_mm,
            dpi,
            scale_factor: 1.0,
            width_px: mm_to_px(width_mm, dpi),
            height_px: mm_to_px(height_mm, dpi),
        })
    }

    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    pub fn height_mm(&self) -> f64 {
        self.height_mm
    }

    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    /// Label width in device pixels.
    pub fn width_px(&self) -> f64 {
        self.width_px
    }

    /// Label height in device pixels.
    pub fn height_px(&self) -> f64 {
        self.height_px
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Sets the view scale, clamped to the zoom range. Returns the stored value.
    pub fn set_scale_factor(&mut self, scale: f64) -> f64 {
        self.scale_factor = clamp_scale(scale);
        self.scale_factor
    }

    /// Changes the label size and recomputes pixel dimensions.
    pub fn set_size_mm(&mut self, width_mm: f64, height_mm: f64) -> Result<()> {
        GeometryError::ensure_positive("width_mm", width_mm)?;
        GeometryError::ensure_positive("height_mm", height_mm)?;
        self.width_mm = width_mm;
        self.height_mm = height_mm;
        self.recompute_px();
        Ok(())
    }

    /// Changes the resolution and recomputes pixel dimensions.
    pub fn set_dpi(&mut self, dpi: f64) -> Result<()> {
        GeometryError::ensure_positive("dpi", dpi)?;
        self.dpi = dpi;
        self.recompute_px();
        Ok(())
    }

    /// Millimeters to device pixels at this canvas' resolution.
    pub fn to_px(&self, mm: f64) -> f64 {
        mm_to_px(mm, self.dpi)
    }

    /// Device pixels to millimeters at this canvas' resolution.
    pub fn to_mm(&self, px: f64) -> f64 {
        px_to_mm(px, self.dpi)
    }

    fn recompute_px(&mut self) {
        self.width_px = mm_to_px(self.width_mm, self.dpi);
        self.height_px = mm_to_px(self.height_mm, self.dpi);
    }
}

impl Default for CanvasSpace {
    fn default() -> Self {
        Self {
            width_mm: 100.0,
            height_mm: 50.0,
            dpi: DEFAULT_DPI,
            scale_factor: 1.0,
            width_px: mm_to_px(100.0, DEFAULT_DPI),
            height_px: mm_to_px(50.0, DEFAULT_DPI),
        }
    }
}

impl fmt::Display for CanvasSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}x{:.1} mm @ {} dpi ({}x{} px) | Scale: {:.2}x",
            self.width_mm, self.height_mm, self.dpi, self.width_px, self.height_px, self.scale_factor
        )
    }
}

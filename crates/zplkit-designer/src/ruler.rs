//! Ruler tick layout.
//!
//! Each ruler keeps its own copy of the canvas scale and label length; the
//! canvas never touches a ruler directly. Rulers follow the canvas by
//! subscribing to its [`ViewEventBus`].

use zplkit_core::constants::{MAJOR_TICK_TOLERANCE_MM, MM_PER_INCH};
use zplkit_core::event_bus::{EventFilter, Orientation, SubscriptionId, ViewEvent, ViewEventBus};
use zplkit_core::types::ThreadSafe;
use zplkit_core::units::{mm_to_unit, MeasurementUnit};

use crate::transform::{clamp_scale, mm_to_px};

const MAJOR_MARK_PX: f64 = 10.0;
const MINOR_MARK_PX: f64 = 5.0;

/// Tick spacing and label precision for a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSteps {
    pub major_mm: f64,
    pub minor_mm: f64,
    pub decimals: usize,
}

impl TickSteps {
    pub fn for_unit(unit: MeasurementUnit) -> Self {
        match unit {
            MeasurementUnit::Millimeter => Self {
                major_mm: 5.0,
                minor_mm: 2.0,
                decimals: 0,
            },
            MeasurementUnit::Centimeter => Self {
                major_mm: 10.0,
                minor_mm: 5.0,
                decimals: 1,
            },
            MeasurementUnit::Inch => Self {
                major_mm: MM_PER_INCH,
                minor_mm: MM_PER_INCH / 8.0,
                decimals: 2,
            },
        }
    }

    /// Whether `position_mm` falls on a major graduation.
    ///
    /// The remainder is compared against zero from both sides, so a multiple
    /// that lands a hair under the step (`3 * 25.4`) still counts.
    pub fn is_major(&self, position_mm: f64) -> bool {
        let rem = (position_mm % self.major_mm).abs();
        rem < MAJOR_TICK_TOLERANCE_MM || self.major_mm - rem < MAJOR_TICK_TOLERANCE_MM
    }
}

/// A single graduation.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position_mm: f64,
    /// Offset along the ruler in view pixels.
    pub position_px: f64,
    pub major: bool,
    /// Value in the ruler unit; major ticks only.
    pub label: Option<String>,
}

impl Tick {
    /// Length of the tick mark in pixels.
    pub fn mark_length(&self) -> f64 {
        if self.major {
            MAJOR_MARK_PX
        } else {
            MINOR_MARK_PX
        }
    }
}

/// State of one ruler.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerModel {
    orientation: Orientation,
    length_mm: f64,
    dpi: f64,
    scale_factor: f64,
    unit: MeasurementUnit,
    cursor_pos_mm: Option<f64>,
    highlighted_bounds: Option<(f64, f64)>,
    needs_repaint: bool,
}

impl RulerModel {
    pub fn new(orientation: Orientation, length_mm: f64, dpi: f64) -> Self {
        Self {
            orientation,
            length_mm,
            dpi,
            scale_factor: 1.0,
            unit: MeasurementUnit::default(),
            cursor_pos_mm: None,
            highlighted_bounds: None,
            needs_repaint: true,
        }
    }

    pub fn horizontal(length_mm: f64, dpi: f64) -> Self {
        Self::new(Orientation::Horizontal, length_mm, dpi)
    }

    pub fn vertical(length_mm: f64, dpi: f64) -> Self {
        Self::new(Orientation::Vertical, length_mm, dpi)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length_mm(&self) -> f64 {
        self.length_mm
    }

    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn unit(&self) -> MeasurementUnit {
        self.unit
    }

    pub fn cursor_pos_mm(&self) -> Option<f64> {
        self.cursor_pos_mm
    }

    pub fn highlighted_bounds(&self) -> Option<(f64, f64)> {
        self.highlighted_bounds
    }

    /// On-screen length of the ruler in pixels.
    pub fn extent_px(&self) -> f64 {
        self.to_view_px(self.length_mm)
    }

    pub fn update_scale(&mut self, scale_factor: f64) {
        self.scale_factor = clamp_scale(scale_factor);
        self.request_repaint();
    }

    pub fn set_length(&mut self, length_mm: f64) {
        self.length_mm = length_mm;
        self.request_repaint();
    }

    pub fn set_dpi(&mut self, dpi: f64) {
        self.dpi = dpi;
        self.request_repaint();
    }

    pub fn set_unit(&mut self, unit: MeasurementUnit) {
        self.unit = unit;
        self.request_repaint();
    }

    /// Moves the cursor marker; `None` hides it.
    pub fn set_cursor(&mut self, position_mm: Option<f64>) {
        self.cursor_pos_mm = position_mm;
        self.request_repaint();
    }

    /// Highlights `(start_mm, width_mm)`; `None` clears the highlight.
    pub fn set_highlight(&mut self, bounds: Option<(f64, f64)>) {
        self.highlighted_bounds = bounds;
        self.request_repaint();
    }

    /// Cursor marker offset in view pixels.
    pub fn cursor_px(&self) -> Option<f64> {
        self.cursor_pos_mm.map(|mm| self.to_view_px(mm))
    }

    /// Highlight as `(start_px, width_px)` in view pixels.
    pub fn highlight_px(&self) -> Option<(f64, f64)> {
        self.highlighted_bounds
            .map(|(start, width)| (self.to_view_px(start), self.to_view_px(width)))
    }

    pub fn request_repaint(&mut self) {
        self.needs_repaint = true;
    }

    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Returns whether a repaint was pending and clears the flag.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    /// Graduations from 0 to the ruler length, ascending.
    pub fn ticks(&self) -> Vec<Tick> {
        let steps = TickSteps::for_unit(self.unit);

        let mut positions = multiples_up_to(steps.major_mm, self.length_mm);
        positions.extend(multiples_up_to(steps.minor_mm, self.length_mm));
        positions.sort_by(f64::total_cmp);
        positions.dedup_by(|a, b| (*a - *b).abs() < 1e-9);

        positions
            .into_iter()
            .map(|position_mm| {
                let major = steps.is_major(position_mm);
                let label = major.then(|| {
                    format!(
                        "{:.*}",
                        steps.decimals,
                        mm_to_unit(position_mm, self.unit)
                    )
                });
                Tick {
                    position_mm,
                    position_px: self.to_view_px(position_mm),
                    major,
                    label,
                }
            })
            .collect()
    }

    /// Keeps `ruler` in sync with the canvas publishing on `bus`.
    pub fn attach(ruler: &ThreadSafe<RulerModel>, bus: &ViewEventBus) -> SubscriptionId {
        let ruler = ruler.clone();
        bus.subscribe(EventFilter::All, move |event| {
            ruler.lock().handle_event(event);
        })
    }

    /// Applies a canvas event to this ruler.
    pub fn handle_event(&mut self, event: &ViewEvent) {
        match event {
            ViewEvent::ScaleChanged { scale } => self.update_scale(*scale),
            ViewEvent::DpiChanged { dpi } => self.set_dpi(*dpi),
            ViewEvent::LengthChanged {
                orientation,
                length_mm,
            } if *orientation == self.orientation => self.set_length(*length_mm),
            ViewEvent::LengthChanged { .. } => {}
            ViewEvent::CursorMoved { x_mm, y_mm } => {
                let position = match self.orientation {
                    Orientation::Horizontal => *x_mm,
                    Orientation::Vertical => *y_mm,
                };
                self.set_cursor(position);
            }
            ViewEvent::SelectionBoundsChanged { bounds_mm } => {
                let highlight = bounds_mm.map(|(x, y, w, h)| match self.orientation {
                    Orientation::Horizontal => (x, w),
                    Orientation::Vertical => (y, h),
                });
                self.set_highlight(highlight);
            }
        }
    }

    fn to_view_px(&self, mm: f64) -> f64 {
        (mm_to_px(mm, self.dpi) * self.scale_factor).round()
    }
}

fn multiples_up_to(step: f64, limit: f64) -> Vec<f64> {
    let mut out = Vec::new();
    if !limit.is_finite() || !step.is_finite() || step <= 0.0 {
        return out;
    }
    let mut k = 0u32;
    loop {
        let pos = f64::from(k) * step;
        if pos > limit + 1e-9 {
            break;
        }
        out.push(pos);
        k += 1;
    }
    out
}

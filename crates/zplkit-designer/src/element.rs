//! Label elements and their geometric facet.
//!
//! The alignment engine only needs an identity, a top-left position in mm and
//! a device-pixel bounding box; everything else about an element is opaque to
//! the geometry layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::transform::{mm_to_px, px_to_mm};

/// Stable element identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Geometry the alignment engine reads from an element.
pub trait Alignable {
    /// Identity used for self-exclusion. `None` means the item has no
    /// geometric identity and is never used as an alignment target.
    fn element_id(&self) -> Option<ElementId>;

    /// Top-left corner in mm, absolute label coordinates.
    fn position_mm(&self) -> (f64, f64);

    /// Bounding box `(width, height)` in device pixels at `dpi`.
    fn bounds_px(&self, dpi: f64) -> (f64, f64);
}

impl<T: Alignable + ?Sized> Alignable for &T {
    fn element_id(&self) -> Option<ElementId> {
        (**self).element_id()
    }

    fn position_mm(&self) -> (f64, f64) {
        (**self).position_mm()
    }

    fn bounds_px(&self, dpi: f64) -> (f64, f64) {
        (**self).bounds_px(dpi)
    }
}

/// The six reference lines of an element, in mm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementGeometry {
    pub left: f64,
    pub center_x: f64,
    pub right: f64,
    pub top: f64,
    pub center_y: f64,
    pub bottom: f64,
}

impl ElementGeometry {
    /// Reads the reference lines of `item`, converting its pixel bounds back to mm.
    pub fn of<A: Alignable + ?Sized>(item: &A, dpi: f64) -> Self {
        let (x, y) = item.position_mm();
        let (w_px, h_px) = item.bounds_px(dpi);
        Self::from_rect(x, y, px_to_mm(w_px, dpi), px_to_mm(h_px, dpi))
    }

    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            left: x,
            center_x: x + width / 2.0,
            right: x + width,
            top: y,
            center_y: y + height / 2.0,
            bottom: y + height,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// ZPL element types the designer can place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKind {
    /// `^FD` text field
    Text { content: String, font_height_mm: f64 },
    /// `^BC` Code 128 barcode
    Barcode { data: String },
    /// `^BQ` QR code
    QrCode { data: String },
    /// `^GB` graphic box
    Box { thickness_mm: f64 },
    /// Horizontal or vertical `^GB` line
    Line { thickness_mm: f64 },
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text { .. } => "Text",
            Self::Barcode { .. } => "Barcode",
            Self::QrCode { .. } => "QR Code",
            Self::Box { .. } => "Box",
            Self::Line { .. } => "Line",
        }
    }
}

/// An element placed on the label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelElement {
    pub id: ElementId,
    pub kind: ElementKind,
    pub x_mm: f64,
    pub y_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl LabelElement {
    pub fn new(kind: ElementKind, x_mm: f64, y_mm: f64, width_mm: f64, height_mm: f64) -> Self {
        Self {
            id: ElementId::new(),
            kind,
            x_mm,
            y_mm,
            width_mm,
            height_mm,
        }
    }

    /// A graphic box, mostly useful for layout and tests.
    pub fn boxed(x_mm: f64, y_mm: f64, width_mm: f64, height_mm: f64) -> Self {
        Self::new(
            ElementKind::Box { thickness_mm: 0.25 },
            x_mm,
            y_mm,
            width_mm,
            height_mm,
        )
    }

    pub fn move_to(&mut self, x_mm: f64, y_mm: f64) {
        self.x_mm = x_mm;
        self.y_mm = y_mm;
    }

    /// `(x, y, width, height)` in mm.
    pub fn bounds_mm(&self) -> (f64, f64, f64, f64) {
        (self.x_mm, self.y_mm, self.width_mm, self.height_mm)
    }
}

impl Alignable for LabelElement {
    fn element_id(&self) -> Option<ElementId> {
        Some(self.id)
    }

    fn position_mm(&self) -> (f64, f64) {
        (self.x_mm, self.y_mm)
    }

    fn bounds_px(&self, dpi: f64) -> (f64, f64) {
        (mm_to_px(self.width_mm, dpi), mm_to_px(self.height_mm, dpi))
    }
}

/// Ordered collection of the elements on a label.
///
/// Iteration follows insertion order, which is also the order the alignment
/// engine visits siblings in.
#[derive(Debug, Clone, Default)]
pub struct ElementRegistry {
    elements: Vec<LabelElement>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, element: LabelElement) -> ElementId {
        let id = element.id;
        self.elements.push(element);
        id
    }

    pub fn remove(&mut self, id: ElementId) -> Option<LabelElement> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(index))
    }

    pub fn get(&self, id: ElementId) -> Option<&LabelElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut LabelElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabelElement> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

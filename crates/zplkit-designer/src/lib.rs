//! # ZPLKit Designer
//!
//! Geometry core of the label designer: everything between a label's
//! physical size in millimeters and what ends up on screen.
//!
//! ## Core Components
//!
//! - **Transform**: mm/device-pixel conversion and the label [`CanvasSpace`]
//! - **Viewport**: zoom-to-point, pan and fit for the [`ViewTransform`]
//! - **Scene**: retained surface with generation-stamped handles
//! - **Grid**: line layout, snapping and the self-healing [`GridLayer`]
//! - **Ruler**: tick layout per unit, cursor and selection overlays
//! - **Guides**: edge/center alignment against sibling elements
//! - **Density**: dots-per-mm for label preview services
//!
//! ## Architecture
//!
//! ```text
//! DesignerController
//!   ├── LabelCanvas
//!   │     ├── CanvasSpace + ViewTransform
//!   │     ├── Scene
//!   │     ├── GridLayer
//!   │     ├── SmartGuides
//!   │     └── ViewEventBus ──► RulerModel (horizontal, vertical)
//!   ├── ElementRegistry
//!   └── SettingsStore
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zplkit_designer::{DesignerController, LabelElement};
//! use zplkit_settings::SettingsStore;
//!
//! let mut designer = DesignerController::new(SettingsStore::in_memory(), 1200.0, 800.0)?;
//! let id = designer.add_element(LabelElement::boxed(10.0, 10.0, 30.0, 15.0))?;
//! designer.begin_drag(id)?;
//! designer.drag_to(id, 10.6, 40.0)?;
//! designer.end_drag();
//! ```

pub mod canvas;
pub mod controller;
pub mod density;
pub mod element;
pub mod error;
pub mod grid;
pub mod guides;
pub mod ruler;
pub mod scene;
pub mod transform;
pub mod viewport;

pub use canvas::LabelCanvas;
pub use controller::DesignerController;
pub use density::{dpmm, PrintDensity};
pub use element::{Alignable, ElementGeometry, ElementId, ElementKind, ElementRegistry, LabelElement};
pub use error::{DesignerError, DesignerResult};
pub use grid::{line_positions, Axis, GridConfig, GridLayer};
pub use guides::{AlignmentKind, AlignmentState, AxisSnap, Guide, GuideAxis, SmartGuides, SnapProposal};
pub use ruler::{RulerModel, Tick, TickSteps};
pub use scene::{ItemHandle, ItemKind, ItemShape, Scene, SceneError, SceneItem, SceneResult};
pub use transform::{clamp_scale, mm_to_px, px_to_mm, CanvasSpace, Point};
pub use viewport::ViewTransform;

//! Retained drawing surface.
//!
//! Items are addressed through generation-stamped handles. Clearing the
//! surface bumps the generation, so every handle issued before the clear
//! becomes stale and is rejected instead of aliasing a newer item.

use std::collections::BTreeMap;
use thiserror::Error;

use crate::element::ElementId;

/// Errors raised by the drawing surface.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// The handle refers to an item that no longer exists
    #[error("Stale scene handle {0:?}")]
    StaleHandle(ItemHandle),
}

/// Result type for scene operations
pub type SceneResult<T> = Result<T, SceneError>;

/// Handle to an item on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemHandle {
    key: u64,
    generation: u64,
}

/// What an item is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A vertical or horizontal grid line
    GridLine,
    /// The label outline
    Border,
    /// A smart guide
    Guide,
    /// A label element
    Element(ElementId),
}

impl ItemKind {
    /// Grid lines and the border belong to the grid layer.
    pub fn is_grid(self) -> bool {
        matches!(self, Self::GridLine | Self::Border)
    }
}

/// Item geometry in scene pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemShape {
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
}

/// A drawable item.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    pub kind: ItemKind,
    pub shape: ItemShape,
    pub visible: bool,
}

impl SceneItem {
    pub fn new(kind: ItemKind, shape: ItemShape) -> Self {
        Self {
            kind,
            shape,
            visible: true,
        }
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// The drawing surface owned by a canvas.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    items: BTreeMap<u64, SceneItem>,
    next_key: u64,
    generation: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item and returns its handle.
    pub fn add(&mut self, item: SceneItem) -> ItemHandle {
        let key = self.next_key;
        self.next_key += 1;
        self.items.insert(key, item);
        ItemHandle {
            key,
            generation: self.generation,
        }
    }

    /// Whether the handle still refers to a live item.
    pub fn contains(&self, handle: ItemHandle) -> bool {
        handle.generation == self.generation && self.items.contains_key(&handle.key)
    }

    pub fn get(&self, handle: ItemHandle) -> SceneResult<&SceneItem> {
        if handle.generation != self.generation {
            return Err(SceneError::StaleHandle(handle));
        }
        self.items
            .get(&handle.key)
            .ok_or(SceneError::StaleHandle(handle))
    }

    pub fn get_mut(&mut self, handle: ItemHandle) -> SceneResult<&mut SceneItem> {
        if handle.generation != self.generation {
            return Err(SceneError::StaleHandle(handle));
        }
        self.items
            .get_mut(&handle.key)
            .ok_or(SceneError::StaleHandle(handle))
    }

    pub fn set_visible(&mut self, handle: ItemHandle, visible: bool) -> SceneResult<()> {
        self.get_mut(handle)?.visible = visible;
        Ok(())
    }

    pub fn set_shape(&mut self, handle: ItemHandle, shape: ItemShape) -> SceneResult<()> {
        self.get_mut(handle)?.shape = shape;
        Ok(())
    }

    /// Removes an item, returning it.
    pub fn remove(&mut self, handle: ItemHandle) -> SceneResult<SceneItem> {
        if handle.generation != self.generation {
            return Err(SceneError::StaleHandle(handle));
        }
        self.items
            .remove(&handle.key)
            .ok_or(SceneError::StaleHandle(handle))
    }

    /// Removes everything and invalidates all outstanding handles.
    pub fn clear(&mut self) {
        self.items.clear();
        self.generation += 1;
        tracing::trace!("Scene cleared (generation {})", self.generation);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Live items with their handles, in insertion order.
    pub fn items(&self) -> impl Iterator<Item = (ItemHandle, &SceneItem)> + '_ {
        let generation = self.generation;
        self.items
            .iter()
            .map(move |(&key, item)| (ItemHandle { key, generation }, item))
    }

    /// Items of one kind.
    pub fn items_of_kind(&self, kind: ItemKind) -> impl Iterator<Item = (ItemHandle, &SceneItem)> + '_ {
        self.items().filter(move |(_, item)| item.kind == kind)
    }

    /// Handle of the item drawing an element, if any.
    pub fn find_element(&self, id: ElementId) -> Option<ItemHandle> {
        self.items_of_kind(ItemKind::Element(id))
            .map(|(handle, _)| handle)
            .next()
    }
}

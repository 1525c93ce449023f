use std::sync::Arc;

use egui::{Color32, Pos2, Rect, Vec2};
use log::warn;

use crate::asset::ImageAsset;

/// Opaque reference to a primitive issued on a [`RenderSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimitiveHandle(u64);

impl PrimitiveHandle {
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Fill and outline settings for a primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimitiveStyle {
    pub fill: Option<Color32>,
    pub outline: Option<Color32>,
    pub width: f32,
    pub dashed: bool,
}

impl PrimitiveStyle {
    pub fn filled(color: Color32, width: f32) -> Self {
        Self {
            fill: Some(color),
            outline: Some(color),
            width,
            dashed: false,
        }
    }

    pub fn stroke(color: Color32, width: f32) -> Self {
        Self {
            fill: None,
            outline: Some(color),
            width,
            dashed: false,
        }
    }

    pub fn dashed(color: Color32, width: f32) -> Self {
        Self {
            dashed: true,
            ..Self::stroke(color, width)
        }
    }
}

/// The canvas the editor draws onto.
///
/// The editor keeps its own geometry as ground truth and never reads back
/// from the surface; handles are only ever created, moved and deleted.
pub trait RenderSurface {
    fn create_rectangle(&mut self, rect: Rect, style: PrimitiveStyle) -> PrimitiveHandle;

    fn create_ellipse(&mut self, rect: Rect, style: PrimitiveStyle) -> PrimitiveHandle;

    fn create_line(&mut self, from: Pos2, to: Pos2, style: PrimitiveStyle) -> PrimitiveHandle;

    fn create_text(&mut self, anchor: Pos2, text: &str, style: PrimitiveStyle) -> PrimitiveHandle;

    fn create_image(&mut self, rect: Rect, asset: Arc<ImageAsset>) -> PrimitiveHandle;

    fn delete_primitive(&mut self, handle: PrimitiveHandle);

    fn move_primitive(&mut self, handle: PrimitiveHandle, delta: Vec2);
}

/// Geometry of one issued primitive
#[derive(Debug, Clone)]
pub enum Primitive {
    Rectangle { rect: Rect, style: PrimitiveStyle },
    Ellipse { rect: Rect, style: PrimitiveStyle },
    Line { from: Pos2, to: Pos2, style: PrimitiveStyle },
    Text { anchor: Pos2, text: String, style: PrimitiveStyle },
    Image { rect: Rect, asset: Arc<ImageAsset> },
}

impl Primitive {
    fn translate(&mut self, delta: Vec2) {
        match self {
            Primitive::Rectangle { rect, .. }
            | Primitive::Ellipse { rect, .. }
            | Primitive::Image { rect, .. } => *rect = rect.translate(delta),
            Primitive::Line { from, to, .. } => {
                *from += delta;
                *to += delta;
            }
            Primitive::Text { anchor, .. } => *anchor += delta,
        }
    }
}

/// Retained-mode surface: primitives live until deleted and are painted in
/// issue order, so the last issued primitive ends up on top.
#[derive(Debug, Default)]
pub struct DisplayList {
    primitives: Vec<(PrimitiveHandle, Primitive)>,
    next_handle: u64,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, primitive: Primitive) -> PrimitiveHandle {
        self.next_handle += 1;
        let handle = PrimitiveHandle(self.next_handle);
        self.primitives.push((handle, primitive));
        handle
    }

    /// Live primitives in paint order
    pub fn primitives(&self) -> impl Iterator<Item = (PrimitiveHandle, &Primitive)> {
        self.primitives.iter().map(|(handle, primitive)| (*handle, primitive))
    }

    pub fn get(&self, handle: PrimitiveHandle) -> Option<&Primitive> {
        self.primitives
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, primitive)| primitive)
    }

    /// The most recently issued primitive that is still alive
    pub fn last_handle(&self) -> Option<PrimitiveHandle> {
        self.primitives.last().map(|(handle, _)| *handle)
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl RenderSurface for DisplayList {
    fn create_rectangle(&mut self, rect: Rect, style: PrimitiveStyle) -> PrimitiveHandle {
        self.push(Primitive::Rectangle { rect, style })
    }

    fn create_ellipse(&mut self, rect: Rect, style: PrimitiveStyle) -> PrimitiveHandle {
        self.push(Primitive::Ellipse { rect, style })
    }

    fn create_line(&mut self, from: Pos2, to: Pos2, style: PrimitiveStyle) -> PrimitiveHandle {
        self.push(Primitive::Line { from, to, style })
    }

    fn create_text(&mut self, anchor: Pos2, text: &str, style: PrimitiveStyle) -> PrimitiveHandle {
        self.push(Primitive::Text {
            anchor,
            text: text.to_owned(),
            style,
        })
    }

    fn create_image(&mut self, rect: Rect, asset: Arc<ImageAsset>) -> PrimitiveHandle {
        self.push(Primitive::Image { rect, asset })
    }

    fn delete_primitive(&mut self, handle: PrimitiveHandle) {
        let before = self.primitives.len();
        self.primitives.retain(|(h, _)| *h != handle);
        if self.primitives.len() == before {
            warn!("Tried to delete unknown primitive {}", handle.raw());
        }
    }

    fn move_primitive(&mut self, handle: PrimitiveHandle, delta: Vec2) {
        match self.primitives.iter_mut().find(|(h, _)| *h == handle) {
            Some((_, primitive)) => primitive.translate(delta),
            None => warn!("Tried to move unknown primitive {}", handle.raw()),
        }
    }
}

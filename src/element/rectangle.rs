use egui::Rect;

use super::{Element, ShapeBase, ShapeKind};
use crate::surface::{PrimitiveHandle, PrimitiveStyle, RenderSurface};

/// Axis-aligned filled rectangle
#[derive(Debug)]
pub struct Rectangle {
    base: ShapeBase,
}

impl Rectangle {
    pub(crate) fn new(base: ShapeBase) -> Self {
        Self { base }
    }

    /// The drawn box. A negative extent flips it rather than failing.
    pub fn rect(&self) -> Rect {
        Rect::from_two_pos(self.base.position, self.base.position + self.base.extent)
    }
}

impl Element for Rectangle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn issue_primitive(&self, surface: &mut dyn RenderSurface) -> PrimitiveHandle {
        surface.create_rectangle(
            self.rect(),
            PrimitiveStyle::filled(self.base.color, self.base.stroke_width),
        )
    }
}

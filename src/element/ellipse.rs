use egui::Rect;

use super::{Element, ShapeBase, ShapeKind};
use crate::surface::{PrimitiveHandle, PrimitiveStyle, RenderSurface};

/// Filled ellipse inscribed in its bounding box
#[derive(Debug)]
pub struct Ellipse {
    base: ShapeBase,
}

impl Ellipse {
    pub(crate) fn new(base: ShapeBase) -> Self {
        Self { base }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_two_pos(self.base.position, self.base.position + self.base.extent)
    }

    pub fn radii(&self) -> egui::Vec2 {
        self.bounds().size() * 0.5
    }
}

impl Element for Ellipse {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }

    fn issue_primitive(&self, surface: &mut dyn RenderSurface) -> PrimitiveHandle {
        surface.create_ellipse(
            self.bounds(),
            PrimitiveStyle::filled(self.base.color, self.base.stroke_width),
        )
    }
}

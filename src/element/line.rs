use egui::Pos2;

use super::{Element, ShapeBase, ShapeKind};
use crate::surface::{PrimitiveHandle, PrimitiveStyle, RenderSurface};

/// Straight segment. The extent is the vector from the first endpoint to
/// the second, so it may be negative on either axis.
#[derive(Debug)]
pub struct Line {
    base: ShapeBase,
}

impl Line {
    pub(crate) fn new(base: ShapeBase) -> Self {
        Self { base }
    }

    pub fn start(&self) -> Pos2 {
        self.base.position
    }

    pub fn end(&self) -> Pos2 {
        self.base.position + self.base.extent
    }
}

impl Element for Line {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn issue_primitive(&self, surface: &mut dyn RenderSurface) -> PrimitiveHandle {
        surface.create_line(
            self.start(),
            self.end(),
            PrimitiveStyle::stroke(self.base.color, self.base.stroke_width),
        )
    }
}

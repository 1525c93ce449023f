use egui::Vec2;
use log::debug;

use super::{Element, ShapeBase, ShapeKind};
use crate::surface::{PrimitiveHandle, PrimitiveStyle, RenderSurface};

/// A text label anchored at its top-left corner.
///
/// Text has no geometric extent: it stays zero, so the center is the anchor.
#[derive(Debug)]
pub struct Text {
    base: ShapeBase,
    content: String,
}

impl Text {
    pub(crate) fn new(base: ShapeBase, content: String) -> Self {
        Self { base, content }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Element for Text {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Text
    }

    fn issue_primitive(&self, surface: &mut dyn RenderSurface) -> PrimitiveHandle {
        surface.create_text(
            self.base.position,
            &self.content,
            PrimitiveStyle::filled(self.base.color, self.base.stroke_width),
        )
    }

    fn set_size(&mut self, size: Vec2, surface: &mut dyn RenderSurface) {
        debug!("Ignoring size {:?} for text {}", size, self.base.id);
        self.draw(surface);
    }
}

use std::path::Path;
use std::sync::Arc;

use egui::{Rect, Vec2};
use log::debug;

use super::{Element, ShapeBase, ShapeKind};
use crate::asset::ImageAsset;
use crate::surface::{PrimitiveHandle, RenderSurface};

/// Bitmap placed at its top-left corner. Its extent is the decoded pixel
/// size and never changes; color is stored but not used when drawing.
#[derive(Debug)]
pub struct Image {
    base: ShapeBase,
    asset: Arc<ImageAsset>,
}

impl Image {
    pub(crate) fn new(base: ShapeBase, asset: Arc<ImageAsset>) -> Self {
        Self { base, asset }
    }

    pub fn source_path(&self) -> &Path {
        self.asset.path()
    }

    pub fn asset(&self) -> &Arc<ImageAsset> {
        &self.asset
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.base.position, self.base.extent)
    }
}

impl Element for Image {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Image
    }

    fn issue_primitive(&self, surface: &mut dyn RenderSurface) -> PrimitiveHandle {
        surface.create_image(self.rect(), Arc::clone(&self.asset))
    }

    fn set_size(&mut self, size: Vec2, surface: &mut dyn RenderSurface) {
        debug!("Ignoring size {:?} for image {}, extent is fixed", size, self.base.id);
        self.draw(surface);
    }
}

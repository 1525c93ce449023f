use std::path::PathBuf;

use egui::{Color32, Pos2, Vec2};
use log::info;

use super::{
    DEFAULT_STROKE_WIDTH, Element, Ellipse, Image, Line, Rectangle, Shape, ShapeBase, ShapeKind, Text,
};
use crate::asset::AssetCache;
use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult};
use crate::id_generator::IdAllocator;

/// Kind-specific input that doesn't come from the drag gesture
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ShapeExtra {
    #[default]
    None,
    Text(String),
    Image(PathBuf),
}

/// Builds shapes from a kind tag and gesture points.
///
/// The factory only constructs; adding the shape to a scene and drawing it
/// is up to the caller. Ids are allocated after every input is validated,
/// so a failed call never burns a sequence number.
#[derive(Debug)]
pub struct ShapeFactory {
    ids: IdAllocator,
    assets: AssetCache,
    stroke_width: f32,
}

impl Default for ShapeFactory {
    fn default() -> Self {
        Self {
            ids: IdAllocator::default(),
            assets: AssetCache::new(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl ShapeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &EditorConfig) -> Self {
        Self {
            ids: IdAllocator::new(config.id_width),
            assets: AssetCache::new(),
            stroke_width: config.stroke_width,
        }
    }

    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    pub fn assets(&self) -> &AssetCache {
        &self.assets
    }

    /// Create a shape of `kind`.
    ///
    /// Rectangle and Ellipse treat `p1`/`p2` as opposite corners, Line as
    /// endpoints; both store `p2 - p1` as the extent. Text and Image only use
    /// `p1` as their anchor and take their content from `extra`.
    pub fn create(
        &mut self,
        kind: ShapeKind,
        p1: Pos2,
        p2: Pos2,
        color: Color32,
        extra: ShapeExtra,
    ) -> EditorResult<Shape> {
        let shape = match (kind, extra) {
            (ShapeKind::Rectangle, _) => {
                Shape::Rectangle(Rectangle::new(self.base(kind, p1, p2 - p1, color)))
            }
            (ShapeKind::Ellipse, _) => {
                Shape::Ellipse(Ellipse::new(self.base(kind, p1, p2 - p1, color)))
            }
            (ShapeKind::Line, _) => Shape::Line(Line::new(self.base(kind, p1, p2 - p1, color))),
            (ShapeKind::Text, ShapeExtra::Text(content)) => {
                if content.is_empty() {
                    return Err(EditorError::EmptyText);
                }
                Shape::Text(Text::new(self.base(kind, p1, Vec2::ZERO, color), content))
            }
            (ShapeKind::Image, ShapeExtra::Image(path)) => {
                let asset = self.assets.load(&path)?;
                let extent = asset.size();
                Shape::Image(Image::new(self.base(kind, p1, extent, color), asset))
            }
            (ShapeKind::Text | ShapeKind::Image, _) => return Err(EditorError::MissingInput(kind)),
        };

        info!("✅ Created {} at {:?}", shape.id(), shape.position());
        Ok(shape)
    }

    fn base(&mut self, kind: ShapeKind, position: Pos2, extent: Vec2, color: Color32) -> ShapeBase {
        let id = self.ids.generate_id(kind);
        ShapeBase::new(id, position, extent, color, self.stroke_width)
    }
}

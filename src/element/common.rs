use egui::{Color32, Pos2, Vec2};

use super::ShapeId;
use crate::surface::PrimitiveHandle;

// Common constants for all shape kinds
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

/// Fields every shape kind carries.
#[derive(Debug)]
pub struct ShapeBase {
    pub(crate) id: ShapeId,
    pub(crate) position: Pos2,
    pub(crate) extent: Vec2,
    pub(crate) color: Color32,
    pub(crate) stroke_width: f32,
    pub(crate) z_order: i32,
    pub(crate) render_handle: Option<PrimitiveHandle>,
}

impl ShapeBase {
    pub(crate) fn new(id: ShapeId, position: Pos2, extent: Vec2, color: Color32, stroke_width: f32) -> Self {
        Self {
            id,
            position,
            extent,
            color,
            stroke_width,
            z_order: 0,
            render_handle: None,
        }
    }
}

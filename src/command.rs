use egui::{Color32, Pos2, Vec2};

use crate::element::{Element, Shape};
use crate::surface::RenderSurface;

/// A property change applied uniformly to every selected shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyEdit {
    Color(Color32),
    Size(Vec2),
    Position(Pos2),
    ZOrder(i32),
}

impl PropertyEdit {
    pub fn name(&self) -> &'static str {
        match self {
            PropertyEdit::Color(_) => "color",
            PropertyEdit::Size(_) => "size",
            PropertyEdit::Position(_) => "position",
            PropertyEdit::ZOrder(_) => "z-order",
        }
    }

    /// Z-order changes reshuffle the paint order of the whole scene
    pub fn requires_full_redraw(&self) -> bool {
        matches!(self, PropertyEdit::ZOrder(_))
    }

    pub fn apply(&self, shape: &mut Shape, surface: &mut dyn RenderSurface) {
        match *self {
            PropertyEdit::Color(color) => shape.set_color(color, surface),
            PropertyEdit::Size(size) => shape.set_size(size, surface),
            PropertyEdit::Position(position) => shape.set_position(position, surface),
            PropertyEdit::ZOrder(z_order) => shape.set_z_order(z_order, surface),
        }
    }
}

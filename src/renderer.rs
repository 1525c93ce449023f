use egui::{Align2, Context, FontId, Painter, Pos2, Rect, Shape, Stroke};

use crate::config::EditorConfig;
use crate::surface::{DisplayList, Primitive, PrimitiveStyle};
use crate::texture_manager::TextureManager;

const DASH_LENGTH: f32 = 4.0;
const MAX_CACHED_TEXTURES: usize = 64;

/// Paints a [`DisplayList`] with egui, in issue order
pub struct Renderer {
    textures: TextureManager,
    font_size: f32,
}

impl Renderer {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            textures: TextureManager::new(MAX_CACHED_TEXTURES),
            font_size: config.font_size,
        }
    }

    /// Paint every live primitive, offsetting scene coordinates by `origin`
    pub fn render(&mut self, ctx: &Context, painter: &Painter, origin: Pos2, display_list: &DisplayList) {
        self.textures.begin_frame();
        let offset = origin.to_vec2();

        for (_, primitive) in display_list.primitives() {
            match primitive {
                Primitive::Rectangle { rect, style } => {
                    paint_rect(painter, rect.translate(offset), style);
                }
                Primitive::Ellipse { rect, style } => {
                    let rect = rect.translate(offset);
                    let radius = rect.size() * 0.5;
                    if let Some(fill) = style.fill {
                        painter.add(Shape::ellipse_filled(rect.center(), radius, fill));
                    }
                    if let Some(outline) = style.outline {
                        painter.add(Shape::ellipse_stroke(
                            rect.center(),
                            radius,
                            Stroke::new(style.width, outline),
                        ));
                    }
                }
                Primitive::Line { from, to, style } => {
                    if let Some(color) = style.outline {
                        painter.line_segment([*from + offset, *to + offset], Stroke::new(style.width, color));
                    }
                }
                Primitive::Text { anchor, text, style } => {
                    let color = style.fill.or(style.outline).unwrap_or(egui::Color32::BLACK);
                    painter.text(
                        *anchor + offset,
                        Align2::LEFT_TOP,
                        text,
                        FontId::proportional(self.font_size),
                        color,
                    );
                }
                Primitive::Image { rect, asset } => {
                    let texture = self.textures.texture_for(asset, ctx);
                    painter.image(
                        texture,
                        rect.translate(offset),
                        Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                }
            }
        }
    }
}

fn paint_rect(painter: &Painter, rect: Rect, style: &PrimitiveStyle) {
    if let Some(fill) = style.fill {
        painter.rect_filled(rect, 0.0, fill);
    }
    let Some(outline) = style.outline else {
        return;
    };
    let stroke = Stroke::new(style.width, outline);
    if style.dashed {
        let corners = [
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
            rect.left_top(),
        ];
        painter.extend(Shape::dashed_line(&corners, stroke, DASH_LENGTH, DASH_LENGTH));
    } else {
        painter.rect_stroke(rect, 0.0, stroke);
    }
}

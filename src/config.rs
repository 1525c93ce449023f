use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::element::DEFAULT_STROKE_WIDTH;
use crate::id_generator::DEFAULT_SEQUENCE_WIDTH;
use crate::tools::EditMode;

/// User settings, restored between runs through eframe storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old settings
pub struct EditorConfig {
    /// Color given to newly created shapes
    pub draw_color: Color32,
    /// Outline of the marquee preview
    pub marquee_color: Color32,
    pub stroke_width: f32,
    pub font_size: f32,
    /// Minimum digits in the sequence part of a shape id
    pub id_width: usize,
    pub initial_mode: EditMode,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            draw_color: Color32::BLACK,
            marquee_color: Color32::BLACK,
            stroke_width: DEFAULT_STROKE_WIDTH,
            font_size: 16.0,
            id_width: DEFAULT_SEQUENCE_WIDTH,
            initial_mode: EditMode::Rectangle,
        }
    }
}

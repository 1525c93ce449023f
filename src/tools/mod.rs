use serde::{Deserialize, Serialize};

use crate::element::ShapeKind;

/// The mutually exclusive editing mode chosen from the mode bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EditMode {
    #[default]
    Rectangle,
    Ellipse,
    Line,
    Text,
    Image,
    Select,
    Multiselect,
}

impl EditMode {
    pub const ALL: [EditMode; 7] = [
        EditMode::Rectangle,
        EditMode::Ellipse,
        EditMode::Line,
        EditMode::Text,
        EditMode::Image,
        EditMode::Select,
        EditMode::Multiselect,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EditMode::Rectangle => "Rectangle",
            EditMode::Ellipse => "Ellipse",
            EditMode::Line => "Line",
            EditMode::Text => "Text",
            EditMode::Image => "Image",
            EditMode::Select => "Select",
            EditMode::Multiselect => "Multiselect",
        }
    }

    /// The shape kind this mode creates, if it's a creation mode
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            EditMode::Rectangle => Some(ShapeKind::Rectangle),
            EditMode::Ellipse => Some(ShapeKind::Ellipse),
            EditMode::Line => Some(ShapeKind::Line),
            EditMode::Text => Some(ShapeKind::Text),
            EditMode::Image => Some(ShapeKind::Image),
            EditMode::Select | EditMode::Multiselect => None,
        }
    }
}

impl std::fmt::Display for EditMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

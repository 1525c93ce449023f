use egui::{Pos2, Vec2};

use crate::command::PropertyEdit;
use crate::error::{EditorError, EditorResult};

/// Properties edited through a numeric modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyField {
    Position,
    Size,
    ZOrder,
}

impl PropertyField {
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            PropertyField::Position => &["x", "y"],
            PropertyField::Size => &["width", "height"],
            PropertyField::ZOrder => &["z-order"],
        }
    }

    /// Parse the raw modal strings into an edit
    pub fn parse(self, fields: &[String]) -> EditorResult<PropertyEdit> {
        let labels = self.labels();
        match self {
            PropertyField::Position => {
                let x = parse_number(labels[0], field(fields, 0))?;
                let y = parse_number(labels[1], field(fields, 1))?;
                Ok(PropertyEdit::Position(Pos2::new(x, y)))
            }
            PropertyField::Size => {
                let width = parse_number(labels[0], field(fields, 0))?;
                let height = parse_number(labels[1], field(fields, 1))?;
                Ok(PropertyEdit::Size(Vec2::new(width, height)))
            }
            PropertyField::ZOrder => Ok(PropertyEdit::ZOrder(parse_z_order(field(fields, 0))?)),
        }
    }
}

/// What a pending modal is collecting
#[derive(Debug, Clone, PartialEq)]
pub enum ModalRequest {
    PlaceText { anchor: Pos2 },
    PlaceImage { anchor: Pos2 },
    EditProperty(PropertyField),
}

impl ModalRequest {
    pub fn title(&self) -> &'static str {
        match self {
            ModalRequest::PlaceText { .. } => "Add Text",
            ModalRequest::PlaceImage { .. } => "Add Image",
            ModalRequest::EditProperty(PropertyField::Position) => "Change Position",
            ModalRequest::EditProperty(PropertyField::Size) => "Change Size",
            ModalRequest::EditProperty(PropertyField::ZOrder) => "Change Z-Order",
        }
    }

    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            ModalRequest::PlaceText { .. } => &["text"],
            ModalRequest::PlaceImage { .. } => &["path"],
            ModalRequest::EditProperty(field) => field.labels(),
        }
    }
}

fn field(fields: &[String], index: usize) -> &str {
    fields.get(index).map_or("", String::as_str)
}

/// Parse a finite number, ignoring surrounding whitespace
pub fn parse_number(field: &'static str, input: &str) -> EditorResult<f32> {
    input
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| EditorError::Parse {
            field,
            input: input.to_owned(),
        })
}

pub fn parse_z_order(input: &str) -> EditorResult<i32> {
    input.trim().parse::<i32>().map_err(|_| EditorError::Parse {
        field: "z-order",
        input: input.to_owned(),
    })
}

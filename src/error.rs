use std::path::PathBuf;

use thiserror::Error;

use crate::element::{ShapeId, ShapeKind};

/// Errors produced by editor gestures and edits.
///
/// None of these are fatal: every failure is confined to the gesture that
/// produced it and leaves the scene and the selection untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// A numeric modal field could not be parsed
    #[error("Invalid number for {field}: {input:?}")]
    Parse { field: &'static str, input: String },

    /// An image file could not be read or decoded
    #[error("Failed to load image {}: {reason}", path.display())]
    AssetLoad { path: PathBuf, reason: String },

    /// An edit was requested while nothing is selected
    #[error("No shape is selected")]
    EmptySelection,

    #[error("Text content must not be empty")]
    EmptyText,

    /// The factory was asked for a kind without the extra data it needs
    #[error("Missing input for {0} shape")]
    MissingInput(ShapeKind),

    #[error("Shape id {0} is already in the scene")]
    DuplicateId(ShapeId),

    #[error("No modal input is pending")]
    NoPendingModal,
}

pub type EditorResult<T> = Result<T, EditorError>;

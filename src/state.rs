use egui::Pos2;

use crate::element::ShapeKind;
use crate::modal::ModalRequest;

/// Where the editor is within a pointer gesture.
///
/// ```text
///  Idle ──down (Rectangle/Ellipse/Line)──► CreatingShape ──up──► Idle
///  Idle ──down (Multiselect)─────────────► Marqueeing ────up──► Idle
///  Idle ──down (Text/Image), edit button─► AwaitingModalInput ──submit ok / cancel──► Idle
///  Idle ──down (Select)──► Idle
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Dragging out a new shape from `anchor`
    CreatingShape { kind: ShapeKind, anchor: Pos2 },
    /// Dragging a selection marquee from `anchor`
    Marqueeing { anchor: Pos2 },
    AwaitingModalInput(ModalRequest),
}

impl GestureState {
    pub fn name(&self) -> &'static str {
        match self {
            GestureState::Idle => "Idle",
            GestureState::CreatingShape { .. } => "CreatingShape",
            GestureState::Marqueeing { .. } => "Marqueeing",
            GestureState::AwaitingModalInput(_) => "AwaitingModalInput",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    pub fn pending_modal(&self) -> Option<&ModalRequest> {
        match self {
            GestureState::AwaitingModalInput(request) => Some(request),
            _ => None,
        }
    }
}

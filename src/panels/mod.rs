mod central_panel;
mod modal_window;
mod mode_bar;
mod properties_panel;

pub use central_panel::central_panel;
pub use modal_window::{ModalForm, modal_window};
pub use mode_bar::mode_bar;
pub use properties_panel::properties_panel;

use egui::Color32;

/// `#rrggbb` text for a color
pub(crate) fn color_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

use egui::color_picker::{Alpha, color_edit_button_srgba};

use super::color_hex;
use crate::app::SceneEditorApp;
use crate::command::PropertyEdit;
use crate::modal::PropertyField;

pub fn properties_panel(app: &mut SceneEditorApp, ctx: &egui::Context) {
    egui::SidePanel::right("properties_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            let summary = app.controller.selection_summary();

            ui.heading("Selection");
            ui.separator();

            if summary.is_empty() {
                ui.label("Selected Object: None");
            } else {
                egui::Grid::new("selection_grid")
                    .num_columns(4)
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong("Id");
                        ui.strong("Color");
                        ui.strong("Position");
                        ui.strong("Z");
                        ui.end_row();

                        for shape in &summary {
                            ui.label(shape.id.as_str());
                            ui.colored_label(shape.color, color_hex(shape.color));
                            ui.label(format!("({:.1}, {:.1})", shape.position.x, shape.position.y));
                            ui.label(shape.z_order.to_string());
                            ui.end_row();
                        }
                    });
            }

            ui.separator();
            let has_selection = !summary.is_empty();

            ui.add_enabled_ui(has_selection, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Change objects color:");
                    let mut color = summary
                        .first()
                        .map_or(app.controller.draw_color(), |shape| shape.color);
                    if color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
                        let result = app.controller.apply_edit(PropertyEdit::Color(color), &mut app.surface);
                        app.report(result);
                    }
                });

                for (label, field) in [
                    ("Change the position", PropertyField::Position),
                    ("Change the size", PropertyField::Size),
                    ("Change the z-order", PropertyField::ZOrder),
                ] {
                    if ui.button(label).clicked() {
                        let result = app.controller.open_property_modal(field, &mut app.surface);
                        app.report(result);
                    }
                }
            });

            if let Some(status) = &app.status {
                ui.separator();
                ui.label(status);
            }
        });
}

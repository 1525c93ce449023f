use egui::color_picker::{Alpha, color_edit_button_srgba};

use crate::app::SceneEditorApp;
use crate::tools::EditMode;

pub fn mode_bar(app: &mut SceneEditorApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("mode_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let current = app.controller.mode();
            for mode in EditMode::ALL {
                if ui.selectable_label(current == mode, format!("{} Mode", mode)).clicked() {
                    log::info!("Mode selected from UI: {}", mode);
                    app.controller.set_mode(mode, &mut app.surface);
                }
            }

            ui.separator();
            ui.label("Color:");
            let mut color = app.controller.draw_color();
            if color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
                app.controller.set_draw_color(color);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("Mode: {} ({})", app.controller.mode(), app.controller.state().name()));
            });
        });
    });
}

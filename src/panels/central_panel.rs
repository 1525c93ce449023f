use egui::Color32;

use crate::app::SceneEditorApp;

pub fn central_panel(app: &mut SceneEditorApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        let canvas_rect = response.rect;
        painter.rect_filled(canvas_rect, 0.0, Color32::WHITE);

        app.input.set_canvas_rect(canvas_rect);
        for event in app.input.process_input(ctx, response.hovered()) {
            let result = app.controller.handle_event(event, &mut app.surface);
            app.report(result);
        }

        app.renderer.render(ctx, &painter, canvas_rect.min, &app.surface);
    });
}

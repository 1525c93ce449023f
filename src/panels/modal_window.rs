use crate::app::SceneEditorApp;
use crate::modal::ModalRequest;

/// Raw text typed into the open modal
#[derive(Debug, Default)]
pub struct ModalForm {
    request: Option<ModalRequest>,
    fields: Vec<String>,
    error: Option<String>,
}

impl ModalForm {
    /// Start over whenever a different modal is opened
    fn sync(&mut self, request: &ModalRequest) {
        if self.request.as_ref() != Some(request) {
            self.request = Some(request.clone());
            self.fields = vec![String::new(); request.labels().len()];
            self.error = None;
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

pub fn modal_window(app: &mut SceneEditorApp, ctx: &egui::Context) {
    let Some(request) = app.controller.state().pending_modal().cloned() else {
        app.modal.reset();
        return;
    };
    app.modal.sync(&request);

    let mut submit = false;
    let mut cancel = false;

    egui::Window::new(request.title())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            for (label, value) in request.labels().iter().zip(app.modal.fields.iter_mut()) {
                ui.label(format!("Enter the {}:", label));
                ui.text_edit_singleline(value);
            }

            if matches!(request, ModalRequest::PlaceImage { .. }) {
                browse_button(ui, &mut app.modal.fields[0]);
            }

            if let Some(error) = &app.modal.error {
                ui.colored_label(egui::Color32::RED, error);
            }

            ui.horizontal(|ui| {
                submit = ui.button("Submit").clicked();
                cancel = ui.button("Cancel").clicked();
            });
        });

    if cancel {
        app.controller.cancel_modal();
        app.modal.reset();
    } else if submit {
        match app.controller.submit_modal(&app.modal.fields, &mut app.surface) {
            Ok(()) => {
                app.modal.reset();
                app.status = None;
            }
            Err(err) => app.modal.error = Some(err.to_string()),
        }
    }
}

/// Native file picker filling in the image path
#[cfg(not(target_arch = "wasm32"))]
fn browse_button(ui: &mut egui::Ui, path_field: &mut String) {
    if ui.button("Browse…").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
            .pick_file()
        {
            *path_field = path.display().to_string();
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn browse_button(_ui: &mut egui::Ui, _path_field: &mut String) {}

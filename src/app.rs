use crate::config::EditorConfig;
use crate::controller::EditController;
use crate::error::EditorResult;
use crate::input::InputHandler;
use crate::panels::{self, ModalForm};
use crate::renderer::Renderer;
use crate::surface::DisplayList;

/// The desktop shell around the editor core.
///
/// Only the [`EditorConfig`] survives a restart; the scene is never saved.
pub struct SceneEditorApp {
    pub(crate) config: EditorConfig,
    pub(crate) controller: EditController,
    pub(crate) surface: DisplayList,
    pub(crate) renderer: Renderer,
    pub(crate) input: InputHandler,
    pub(crate) modal: ModalForm,
    /// Last warning shown in the properties panel
    pub(crate) status: Option<String>,
}

impl Default for SceneEditorApp {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl SceneEditorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config: EditorConfig = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        log::info!("Starting with {:?}", config);
        Self::with_config(config)
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            controller: EditController::with_config(&config),
            surface: DisplayList::new(),
            renderer: Renderer::new(&config),
            input: InputHandler::new(egui::Rect::NOTHING),
            modal: ModalForm::default(),
            status: None,
            config,
        }
    }

    /// Show a failed action's error in the properties panel, or clear the
    /// last warning once an action succeeds
    pub(crate) fn report<T>(&mut self, result: EditorResult<T>) -> Option<T> {
        match result {
            Ok(value) => {
                self.status = None;
                Some(value)
            }
            Err(err) => {
                log::warn!("{}", err);
                self.status = Some(err.to_string());
                None
            }
        }
    }
}

impl eframe::App for SceneEditorApp {
    /// Called by the frame work to save settings before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.config.draw_color = self.controller.draw_color();
        self.config.initial_mode = self.controller.mode();
        eframe::set_value(storage, eframe::APP_KEY, &self.config);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::mode_bar(self, ctx);
        panels::properties_panel(self, ctx);
        panels::modal_window(self, ctx);
        panels::central_panel(self, ctx);
    }
}

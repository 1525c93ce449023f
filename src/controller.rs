use egui::{Color32, Pos2, Rect};
use log::{debug, info, warn};

use crate::command::PropertyEdit;
use crate::config::EditorConfig;
use crate::element::{Element, ShapeExtra, ShapeFactory, ShapeId, ShapeKind};
use crate::error::{EditorError, EditorResult};
use crate::input::InputEvent;
use crate::modal::{ModalRequest, PropertyField};
use crate::scene::Scene;
use crate::selection::{self, Selection};
use crate::state::GestureState;
use crate::surface::{PrimitiveHandle, PrimitiveStyle, RenderSurface};
use crate::tools::EditMode;

/// Display data for one selected shape
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSummary {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub color: Color32,
    pub position: Pos2,
    pub z_order: i32,
}

/// Drives pointer gestures and panel edits against the scene.
///
/// The controller is the only owner of the current selection. The scene is
/// only ever mutated after a gesture's inputs have been validated.
#[derive(Debug)]
pub struct EditController {
    mode: EditMode,
    state: GestureState,
    scene: Scene,
    factory: ShapeFactory,
    selection: Selection,
    draw_color: Color32,
    marquee_color: Color32,
    stroke_width: f32,
    /// Transient primitive shown while dragging
    preview: Option<PrimitiveHandle>,
}

impl Default for EditController {
    fn default() -> Self {
        Self::with_config(&EditorConfig::default())
    }
}

impl EditController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &EditorConfig) -> Self {
        Self {
            mode: config.initial_mode,
            state: GestureState::Idle,
            scene: Scene::new(),
            factory: ShapeFactory::with_config(config),
            selection: Selection::default(),
            draw_color: config.draw_color,
            marquee_color: config.marquee_color,
            stroke_width: config.stroke_width,
            preview: None,
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn draw_color(&self) -> Color32 {
        self.draw_color
    }

    /// Color used for shapes created from now on
    pub fn set_draw_color(&mut self, color: Color32) {
        self.draw_color = color;
    }

    pub fn preview_handle(&self) -> Option<PrimitiveHandle> {
        self.preview
    }

    /// Switch mode, abandoning any gesture or modal in progress
    pub fn set_mode(&mut self, mode: EditMode, surface: &mut dyn RenderSurface) {
        if self.mode == mode {
            return;
        }
        self.clear_preview(surface);
        if !self.state.is_idle() {
            debug!("Abandoning {} on mode change", self.state.name());
        }
        self.state = GestureState::Idle;
        self.mode = mode;
        info!("Mode: {}", mode);
    }

    /// Id, kind, color, position and z-order of each selected shape
    pub fn selection_summary(&self) -> Vec<ShapeSummary> {
        self.selection
            .resolve(&self.scene)
            .map(|shape| ShapeSummary {
                id: shape.id().clone(),
                kind: shape.kind(),
                color: shape.color(),
                position: shape.position(),
                z_order: shape.z_order(),
            })
            .collect()
    }

    pub fn handle_event(&mut self, event: InputEvent, surface: &mut dyn RenderSurface) -> EditorResult<()> {
        match event {
            InputEvent::PointerDown { position } => {
                self.on_pointer_down(position, surface);
                Ok(())
            }
            InputEvent::PointerMove { position } => {
                self.on_pointer_move(position, surface);
                Ok(())
            }
            InputEvent::PointerUp { position } => self.on_pointer_up(position, surface),
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2, surface: &mut dyn RenderSurface) {
        if self.state.pending_modal().is_some() {
            debug!("Ignoring pointer down while a modal is open");
            return;
        }
        // A press without a matching release drops the stale gesture
        self.clear_preview(surface);

        self.state = match self.mode.shape_kind() {
            Some(ShapeKind::Text) => GestureState::AwaitingModalInput(ModalRequest::PlaceText { anchor: pos }),
            Some(ShapeKind::Image) => GestureState::AwaitingModalInput(ModalRequest::PlaceImage { anchor: pos }),
            Some(kind) => GestureState::CreatingShape { kind, anchor: pos },
            None if self.mode == EditMode::Multiselect => GestureState::Marqueeing { anchor: pos },
            None => {
                self.selection = selection::select_nearest(&self.scene, pos);
                info!("Selected {:?}", self.selection.ids());
                GestureState::Idle
            }
        };
    }

    fn on_pointer_move(&mut self, pos: Pos2, surface: &mut dyn RenderSurface) {
        let handle = match self.state {
            GestureState::CreatingShape { kind, anchor } => {
                self.clear_preview(surface);
                let style = PrimitiveStyle::filled(self.draw_color, self.stroke_width);
                match kind {
                    ShapeKind::Ellipse => surface.create_ellipse(Rect::from_two_pos(anchor, pos), style),
                    ShapeKind::Line => surface.create_line(
                        anchor,
                        pos,
                        PrimitiveStyle::stroke(self.draw_color, self.stroke_width),
                    ),
                    _ => surface.create_rectangle(Rect::from_two_pos(anchor, pos), style),
                }
            }
            GestureState::Marqueeing { anchor } => {
                self.clear_preview(surface);
                surface.create_rectangle(
                    Rect::from_two_pos(anchor, pos),
                    PrimitiveStyle::dashed(self.marquee_color, 1.0),
                )
            }
            _ => return,
        };
        self.preview = Some(handle);
    }

    fn on_pointer_up(&mut self, pos: Pos2, surface: &mut dyn RenderSurface) -> EditorResult<()> {
        match std::mem::take(&mut self.state) {
            GestureState::CreatingShape { kind, anchor } => {
                self.clear_preview(surface);
                self.create_shape(kind, anchor, pos, ShapeExtra::None, surface)?;
            }
            GestureState::Marqueeing { anchor } => {
                self.clear_preview(surface);
                self.selection = selection::select_in_marquee(&self.scene, anchor, pos);
                info!("Marquee selected {:?}", self.selection.ids());
            }
            // Modal input and idle states survive a stray release
            other => self.state = other,
        }
        Ok(())
    }

    /// Build a shape through the factory, add it to the scene and draw it
    pub fn create_shape(
        &mut self,
        kind: ShapeKind,
        p1: Pos2,
        p2: Pos2,
        extra: ShapeExtra,
        surface: &mut dyn RenderSurface,
    ) -> EditorResult<ShapeId> {
        let shape = self.factory.create(kind, p1, p2, self.draw_color, extra)?;
        let id = shape.id().clone();
        self.scene.add(shape)?;
        if let Some(shape) = self.scene.get_mut(&id) {
            shape.draw(surface);
        }
        Ok(id)
    }

    /// Open the numeric modal for `field`. Needs a selection.
    ///
    /// A drag in progress is abandoned and its preview deleted.
    pub fn open_property_modal(&mut self, field: PropertyField, surface: &mut dyn RenderSurface) -> EditorResult<()> {
        if self.selection.is_empty() {
            info!("Ignoring {:?} edit: nothing selected", field);
            return Err(EditorError::EmptySelection);
        }
        if !self.state.is_idle() {
            debug!("Replacing {} with {:?} modal", self.state.name(), field);
        }
        self.clear_preview(surface);
        self.state = GestureState::AwaitingModalInput(ModalRequest::EditProperty(field));
        Ok(())
    }

    /// Validate the modal's raw strings and apply them.
    ///
    /// On error the modal stays open and nothing is changed.
    pub fn submit_modal(&mut self, fields: &[String], surface: &mut dyn RenderSurface) -> EditorResult<()> {
        let request = self
            .state
            .pending_modal()
            .cloned()
            .ok_or(EditorError::NoPendingModal)?;

        let result = match request {
            ModalRequest::PlaceText { anchor } => {
                let content = fields.first().cloned().unwrap_or_default();
                if content.trim().is_empty() {
                    Err(EditorError::EmptyText)
                } else {
                    self.create_shape(ShapeKind::Text, anchor, anchor, ShapeExtra::Text(content), surface)
                        .map(|_| ())
                }
            }
            ModalRequest::PlaceImage { anchor } => {
                let path = fields.first().map_or("", |path| path.trim());
                if path.is_empty() {
                    Err(EditorError::MissingInput(ShapeKind::Image))
                } else {
                    self.create_shape(
                        ShapeKind::Image,
                        anchor,
                        anchor,
                        ShapeExtra::Image(path.into()),
                        surface,
                    )
                    .map(|_| ())
                }
            }
            ModalRequest::EditProperty(field) => field
                .parse(fields)
                .and_then(|edit| self.apply_edit(edit, surface))
                .map(|_| ()),
        };

        match result {
            Ok(()) => {
                self.state = GestureState::Idle;
                Ok(())
            }
            Err(err) => {
                warn!("Invalid input: {}", err);
                Err(err)
            }
        }
    }

    /// Close the modal without touching the scene
    pub fn cancel_modal(&mut self) {
        if self.state.pending_modal().is_some() {
            self.state = GestureState::Idle;
        }
    }

    /// Apply `edit` to every selected shape and return how many changed.
    ///
    /// Z-order edits redraw the whole scene so the paint order matches the
    /// new z values; other edits rely on each shape redrawing itself.
    pub fn apply_edit(&mut self, edit: PropertyEdit, surface: &mut dyn RenderSurface) -> EditorResult<usize> {
        if self.selection.is_empty() {
            info!("Ignoring {} edit: nothing selected", edit.name());
            return Err(EditorError::EmptySelection);
        }

        let mut edited = 0;
        for id in self.selection.ids() {
            match self.scene.get_mut(id) {
                Some(shape) => {
                    edit.apply(shape, surface);
                    edited += 1;
                }
                None => warn!("Selected shape {} is no longer in the scene", id),
            }
        }

        if edit.requires_full_redraw() {
            self.scene.redraw_all(surface);
        }

        info!("Applied {} edit to {} shape(s)", edit.name(), edited);
        Ok(edited)
    }

    fn clear_preview(&mut self, surface: &mut dyn RenderSurface) {
        if let Some(handle) = self.preview.take() {
            surface.delete_primitive(handle);
        }
    }
}

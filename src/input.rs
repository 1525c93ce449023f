use egui::{Context, PointerButton, Pos2, Rect};

/// Pointer events in scene coordinates (relative to the canvas origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed
    PointerDown { position: Pos2 },
    /// Pointer moved while the primary button is held
    PointerMove { position: Pos2 },
    /// Primary button was released
    PointerUp { position: Pos2 },
}

/// Turns raw egui pointer input over the canvas into [`InputEvent`]s
pub struct InputHandler {
    canvas_rect: Rect,
    last_pointer_pos: Option<Pos2>,
    pressed: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pointer_pos: None,
            pressed: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_scene(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Process raw egui input and generate our InputEvents.
    ///
    /// A press only starts a gesture inside the canvas and while the canvas
    /// is hovered, i.e. no popup or window covers it. Once started, moves and
    /// the release are reported wherever the pointer goes.
    pub fn process_input(&mut self, ctx: &Context, canvas_hovered: bool) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pos = input.pointer.interact_pos().or(self.last_pointer_pos);

            if canvas_hovered && input.pointer.button_pressed(PointerButton::Primary) {
                if let Some(pos) = pos.filter(|pos| self.canvas_rect.contains(*pos)) {
                    self.pressed = true;
                    events.push(InputEvent::PointerDown {
                        position: self.to_scene(pos),
                    });
                }
            }

            if self.pressed && pos != self.last_pointer_pos {
                if let Some(pos) = pos {
                    events.push(InputEvent::PointerMove {
                        position: self.to_scene(pos),
                    });
                }
            }

            if self.pressed && input.pointer.button_released(PointerButton::Primary) {
                self.pressed = false;
                if let Some(pos) = pos {
                    events.push(InputEvent::PointerUp {
                        position: self.to_scene(pos),
                    });
                }
            }

            self.last_pointer_pos = pos;
        });

        events
    }
}

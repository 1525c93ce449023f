use std::fmt;

use egui::{Color32, Pos2, Vec2};

mod common;
pub(crate) mod ellipse;
pub mod factory;
pub(crate) mod image;
pub(crate) mod line;
pub(crate) mod rectangle;
pub(crate) mod text;

pub use common::{DEFAULT_STROKE_WIDTH, ShapeBase};
pub use ellipse::Ellipse;
pub use factory::{ShapeExtra, ShapeFactory};
pub use self::image::Image;
pub use line::Line;
pub use rectangle::Rectangle;
pub use text::Text;

use crate::surface::{PrimitiveHandle, RenderSurface};

/// Identifier of a shape, e.g. `Rectangle003`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(String);

impl ShapeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed set of shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Line,
    Text,
    Image,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Rectangle,
        ShapeKind::Ellipse,
        ShapeKind::Line,
        ShapeKind::Text,
        ShapeKind::Image,
    ];

    /// Name used as the id prefix
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Line => "Line",
            ShapeKind::Text => "Text",
            ShapeKind::Image => "Image",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Behavior shared by every shape kind.
///
/// Every mutator writes its field and then calls [`Element::draw`] before
/// returning, so the primitive on the surface always matches the fields.
pub trait Element {
    fn base(&self) -> &ShapeBase;

    fn base_mut(&mut self) -> &mut ShapeBase;

    fn kind(&self) -> ShapeKind;

    /// Issue a new primitive for the current fields and return its handle
    fn issue_primitive(&self, surface: &mut dyn RenderSurface) -> PrimitiveHandle;

    fn id(&self) -> &ShapeId {
        &self.base().id
    }

    fn position(&self) -> Pos2 {
        self.base().position
    }

    fn extent(&self) -> Vec2 {
        self.base().extent
    }

    fn color(&self) -> Color32 {
        self.base().color
    }

    fn z_order(&self) -> i32 {
        self.base().z_order
    }

    fn render_handle(&self) -> Option<PrimitiveHandle> {
        self.base().render_handle
    }

    fn center(&self) -> Pos2 {
        self.position() + self.extent() * 0.5
    }

    /// Replace this shape's primitive. Calling it twice leaves exactly one
    /// primitive behind.
    fn draw(&mut self, surface: &mut dyn RenderSurface) {
        if let Some(old) = self.base_mut().render_handle.take() {
            surface.delete_primitive(old);
        }
        let handle = self.issue_primitive(surface);
        self.base_mut().render_handle = Some(handle);
    }

    fn move_by(&mut self, delta: Vec2, surface: &mut dyn RenderSurface) {
        self.base_mut().position += delta;
        match self.render_handle() {
            Some(handle) => surface.move_primitive(handle, delta),
            None => self.draw(surface),
        }
    }

    fn set_position(&mut self, position: Pos2, surface: &mut dyn RenderSurface) {
        self.base_mut().position = position;
        self.draw(surface);
    }

    fn set_color(&mut self, color: Color32, surface: &mut dyn RenderSurface) {
        self.base_mut().color = color;
        self.draw(surface);
    }

    fn set_size(&mut self, size: Vec2, surface: &mut dyn RenderSurface) {
        self.base_mut().extent = size;
        self.draw(surface);
    }

    fn set_z_order(&mut self, z_order: i32, surface: &mut dyn RenderSurface) {
        self.base_mut().z_order = z_order;
        self.draw(surface);
    }
}

/// A shape in the scene
#[derive(Debug)]
pub enum Shape {
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Line(Line),
    Text(Text),
    Image(Image),
}

impl Shape {
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Shape::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&Image> {
        match self {
            Shape::Image(i) => Some(i),
            _ => None,
        }
    }
}

impl Element for Shape {
    fn base(&self) -> &ShapeBase {
        match self {
            Shape::Rectangle(r) => r.base(),
            Shape::Ellipse(e) => e.base(),
            Shape::Line(l) => l.base(),
            Shape::Text(t) => t.base(),
            Shape::Image(i) => i.base(),
        }
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        match self {
            Shape::Rectangle(r) => r.base_mut(),
            Shape::Ellipse(e) => e.base_mut(),
            Shape::Line(l) => l.base_mut(),
            Shape::Text(t) => t.base_mut(),
            Shape::Image(i) => i.base_mut(),
        }
    }

    fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Text(_) => ShapeKind::Text,
            Shape::Image(_) => ShapeKind::Image,
        }
    }

    fn issue_primitive(&self, surface: &mut dyn RenderSurface) -> PrimitiveHandle {
        match self {
            Shape::Rectangle(r) => r.issue_primitive(surface),
            Shape::Ellipse(e) => e.issue_primitive(surface),
            Shape::Line(l) => l.issue_primitive(surface),
            Shape::Text(t) => t.issue_primitive(surface),
            Shape::Image(i) => i.issue_primitive(surface),
        }
    }

    fn set_size(&mut self, size: Vec2, surface: &mut dyn RenderSurface) {
        match self {
            Shape::Rectangle(r) => r.set_size(size, surface),
            Shape::Ellipse(e) => e.set_size(size, surface),
            Shape::Line(l) => l.set_size(size, surface),
            Shape::Text(t) => t.set_size(size, surface),
            Shape::Image(i) => i.set_size(size, surface),
        }
    }
}

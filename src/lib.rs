#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod asset;
pub mod command;
pub mod config;
pub mod controller;
pub mod element;
pub mod error;
pub mod id_generator;
pub mod input;
pub mod modal;
pub mod panels;
pub mod renderer;
pub mod scene;
pub mod selection;
pub mod state;
pub mod surface;
pub mod texture_manager;
pub mod tools;

pub use app::SceneEditorApp;
pub use command::PropertyEdit;
pub use config::EditorConfig;
pub use controller::{EditController, ShapeSummary};
pub use element::{Element, Shape, ShapeExtra, ShapeFactory, ShapeId, ShapeKind};
pub use error::{EditorError, EditorResult};
pub use input::InputEvent;
pub use scene::Scene;
pub use selection::Selection;
pub use state::GestureState;
pub use surface::{DisplayList, PrimitiveHandle, RenderSurface};
pub use tools::EditMode;

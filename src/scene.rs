use log::debug;

use crate::element::{Element, Shape, ShapeId};
use crate::error::{EditorError, EditorResult};
use crate::surface::RenderSurface;

/// Owns every shape, in insertion order.
///
/// Insertion order breaks ties between equal z-orders. Shapes are never
/// removed.
#[derive(Debug, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, shape: Shape) -> EditorResult<()> {
        if self.get(shape.id()).is_some() {
            return Err(EditorError::DuplicateId(shape.id().clone()));
        }
        debug!("Adding {} to scene ({} shapes)", shape.id(), self.shapes.len() + 1);
        self.shapes.push(shape);
        Ok(())
    }

    /// Shapes in insertion order
    pub fn all(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    pub fn get_mut(&mut self, id: &ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|shape| shape.id() == id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes sorted by z-order, ties kept in insertion order
    pub fn by_z_order(&self) -> Vec<&Shape> {
        self.z_order_indices().into_iter().map(|i| &self.shapes[i]).collect()
    }

    /// Redraw every shape, lowest z first. The surface paints the last
    /// issued primitive on top, which is what puts higher z above lower z.
    pub fn redraw_all(&mut self, surface: &mut dyn RenderSurface) {
        for i in self.z_order_indices() {
            self.shapes[i].draw(surface);
        }
    }

    fn z_order_indices(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.shapes.len()).collect();
        // sort_by_key is stable
        order.sort_by_key(|&i| self.shapes[i].z_order());
        order
    }
}

use egui::Pos2;

use crate::element::{Element, Shape, ShapeId};
use crate::scene::Scene;

/// Ids of the currently selected shapes.
///
/// A selection only refers to shapes; it is rebuilt wholesale by each
/// select gesture and isn't kept in sync with later scene changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    ids: Vec<ShapeId>,
}

impl Selection {
    pub fn new(ids: Vec<ShapeId>) -> Self {
        Self { ids }
    }

    pub fn ids(&self) -> &[ShapeId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Look the selected shapes up in `scene`, skipping any that are gone
    pub fn resolve<'a>(&'a self, scene: &'a Scene) -> impl Iterator<Item = &'a Shape> + 'a {
        self.ids.iter().filter_map(move |id| scene.get(id))
    }
}

/// Select the shape whose center is closest to `point`.
///
/// Only a strictly smaller distance replaces the current best, so the
/// earliest inserted shape wins ties. An empty scene gives an empty selection.
pub fn select_nearest(scene: &Scene, point: Pos2) -> Selection {
    let mut closest: Option<(&Shape, f32)> = None;

    for shape in scene.all() {
        let distance = point.distance(shape.center());
        if closest.is_none_or(|(_, best)| distance < best) {
            closest = Some((shape, distance));
        }
    }

    Selection::new(closest.map(|(shape, _)| shape.id().clone()).into_iter().collect())
}

/// Select every shape whose center lies inside the marquee spanned by `a`
/// and `b`, bounds included. Shapes that only overlap the marquee without
/// their center inside it are not selected.
pub fn select_in_marquee(scene: &Scene, a: Pos2, b: Pos2) -> Selection {
    let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
    let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));

    let ids = scene
        .all()
        .iter()
        .filter(|shape| {
            let center = shape.center();
            center.x >= min_x && center.x <= max_x && center.y >= min_y && center.y <= max_y
        })
        .map(|shape| shape.id().clone())
        .collect();

    Selection::new(ids)
}

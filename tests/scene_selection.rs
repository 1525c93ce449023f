use egui::{Color32, Pos2, Vec2};
use scene_editor::element::{Element, ShapeExtra, ShapeFactory, ShapeId, ShapeKind};
use scene_editor::error::EditorError;
use scene_editor::scene::Scene;
use scene_editor::selection::{select_in_marquee, select_nearest};
use scene_editor::surface::DisplayList;

/// Add a rectangle centered on `center` with the given size
fn add_centered(scene: &mut Scene, factory: &mut ShapeFactory, center: Pos2, size: Vec2) -> ShapeId {
    let min = center - size * 0.5;
    let shape = factory
        .create(ShapeKind::Rectangle, min, min + size, Color32::RED, ShapeExtra::None)
        .unwrap();
    let id = shape.id().clone();
    scene.add(shape).unwrap();
    id
}

fn z_ids(scene: &Scene) -> Vec<String> {
    scene.by_z_order().iter().map(|shape| shape.id().to_string()).collect()
}

#[test]
fn test_scene_keeps_insertion_order() {
    let mut scene = Scene::new();
    let mut factory = ShapeFactory::new();
    let a = add_centered(&mut scene, &mut factory, Pos2::new(35.0, 25.0), Vec2::new(50.0, 30.0));

    assert_eq!(scene.len(), 1);
    assert_eq!(scene.all()[0].id(), &a);
    assert_eq!(scene.get(&a).unwrap().center(), Pos2::new(35.0, 25.0));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let mut scene = Scene::new();
    let mut first = ShapeFactory::new();
    let mut second = ShapeFactory::new();
    add_centered(&mut scene, &mut first, Pos2::ZERO, Vec2::splat(2.0));

    let clash = second
        .create(ShapeKind::Rectangle, Pos2::ZERO, Pos2::ZERO, Color32::RED, ShapeExtra::None)
        .unwrap();
    let result = scene.add(clash);

    assert_eq!(result, Err(EditorError::DuplicateId(ShapeId::new("Rectangle001"))));
    assert_eq!(scene.len(), 1);
}

#[test]
fn test_z_order_is_stable_for_ties() {
    let mut scene = Scene::new();
    let mut factory = ShapeFactory::new();
    let mut list = DisplayList::new();
    for i in 0..4 {
        add_centered(&mut scene, &mut factory, Pos2::new(i as f32 * 10.0, 0.0), Vec2::splat(4.0));
    }
    assert_eq!(z_ids(&scene), ["Rectangle001", "Rectangle002", "Rectangle003", "Rectangle004"]);

    // Raising one shape doesn't disturb the relative order of the others
    scene
        .get_mut(&ShapeId::new("Rectangle002"))
        .unwrap()
        .set_z_order(3, &mut list);
    assert_eq!(z_ids(&scene), ["Rectangle001", "Rectangle003", "Rectangle004", "Rectangle002"]);

    scene
        .get_mut(&ShapeId::new("Rectangle004"))
        .unwrap()
        .set_z_order(-1, &mut list);
    assert_eq!(z_ids(&scene), ["Rectangle004", "Rectangle001", "Rectangle003", "Rectangle002"]);

    // Repeated calls give the same order
    assert_eq!(z_ids(&scene), z_ids(&scene));
}

#[test]
fn test_redraw_all_draws_highest_z_last() {
    let mut scene = Scene::new();
    let mut factory = ShapeFactory::new();
    let mut list = DisplayList::new();
    let top = add_centered(&mut scene, &mut factory, Pos2::new(10.0, 10.0), Vec2::splat(10.0));
    add_centered(&mut scene, &mut factory, Pos2::new(12.0, 12.0), Vec2::splat(10.0));
    scene.redraw_all(&mut list);

    scene.get_mut(&top).unwrap().set_z_order(5, &mut list);
    scene.redraw_all(&mut list);

    let top_handle = scene.get(&top).unwrap().render_handle();
    assert_eq!(list.last_handle(), top_handle);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_nearest_select() {
    let mut scene = Scene::new();
    let mut factory = ShapeFactory::new();

    assert!(select_nearest(&scene, Pos2::new(2.0, 2.0)).is_empty());

    let first = add_centered(&mut scene, &mut factory, Pos2::new(0.0, 0.0), Vec2::splat(10.0));
    let second = add_centered(&mut scene, &mut factory, Pos2::new(100.0, 100.0), Vec2::splat(10.0));

    assert_eq!(select_nearest(&scene, Pos2::new(2.0, 2.0)).ids(), [first.clone()]);
    assert_eq!(select_nearest(&scene, Pos2::new(90.0, 95.0)).ids(), [second]);

    // Equidistant: the earliest inserted shape wins
    assert_eq!(select_nearest(&scene, Pos2::new(50.0, 50.0)).ids(), [first]);
}

#[test]
fn test_marquee_uses_inclusive_center_containment() {
    let mut scene = Scene::new();
    let mut factory = ShapeFactory::new();
    let on_edge = add_centered(&mut scene, &mut factory, Pos2::new(60.0, 60.0), Vec2::splat(20.0));
    add_centered(&mut scene, &mut factory, Pos2::new(60.01, 60.0), Vec2::splat(20.0));
    let inside = add_centered(&mut scene, &mut factory, Pos2::new(5.0, 5.0), Vec2::splat(2.0));
    // Overlaps the marquee, but its center is outside
    add_centered(&mut scene, &mut factory, Pos2::new(100.0, 100.0), Vec2::splat(200.0));

    let selection = select_in_marquee(&scene, Pos2::new(0.0, 0.0), Pos2::new(60.0, 60.0));
    assert_eq!(selection.ids(), [on_edge.clone(), inside.clone()]);

    // Corner order doesn't matter
    let reversed = select_in_marquee(&scene, Pos2::new(60.0, 60.0), Pos2::new(0.0, 0.0));
    assert_eq!(reversed, selection);
    assert_eq!(selection.resolve(&scene).count(), 2);
}

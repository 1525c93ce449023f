use std::path::PathBuf;

use egui::{Color32, Pos2, Vec2};
use scene_editor::command::PropertyEdit;
use scene_editor::controller::EditController;
use scene_editor::element::{Element, ShapeId, ShapeKind};
use scene_editor::error::EditorError;
use scene_editor::input::InputEvent;
use scene_editor::modal::{ModalRequest, PropertyField};
use scene_editor::state::GestureState;
use scene_editor::surface::DisplayList;
use scene_editor::tools::EditMode;

fn down(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDown { position: Pos2::new(x, y) }
}

fn drag_to(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove { position: Pos2::new(x, y) }
}

fn up(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerUp { position: Pos2::new(x, y) }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Drag out a shape in the current mode
fn drag_shape(controller: &mut EditController, list: &mut DisplayList, from: Pos2, to: Pos2) {
    controller.handle_event(down(from.x, from.y), list).unwrap();
    controller.handle_event(drag_to(to.x, to.y), list).unwrap();
    controller.handle_event(up(to.x, to.y), list).unwrap();
}

fn click_select(controller: &mut EditController, list: &mut DisplayList, at: Pos2) {
    controller.set_mode(EditMode::Select, list);
    controller.handle_event(down(at.x, at.y), list).unwrap();
    controller.handle_event(up(at.x, at.y), list).unwrap();
}

#[test]
fn test_drag_creates_rectangle() {
    let mut controller = EditController::new();
    let mut list = DisplayList::new();
    controller.set_draw_color(Color32::RED);

    controller.handle_event(down(10.0, 10.0), &mut list).unwrap();
    assert!(matches!(controller.state(), GestureState::CreatingShape { kind: ShapeKind::Rectangle, .. }));

    for step in 0..10 {
        controller.handle_event(drag_to(20.0 + step as f32, 20.0), &mut list).unwrap();
        // The preview is replaced, never accumulated
        assert_eq!(list.len(), 1);
        assert!(controller.scene().is_empty());
    }

    controller.handle_event(up(60.0, 40.0), &mut list).unwrap();

    assert!(controller.state().is_idle());
    assert!(controller.preview_handle().is_none());
    assert_eq!(controller.scene().len(), 1);
    assert_eq!(list.len(), 1);

    let shape = &controller.scene().all()[0];
    assert_eq!(shape.id().as_str(), "Rectangle001");
    assert_eq!(shape.center(), Pos2::new(35.0, 25.0));
    assert_eq!(shape.color(), Color32::RED);
    assert_eq!(list.last_handle(), shape.render_handle());
}

#[test]
fn test_ellipse_and_line_modes() {
    let mut controller = EditController::new();
    let mut list = DisplayList::new();

    controller.set_mode(EditMode::Ellipse, &mut list);
    drag_shape(&mut controller, &mut list, Pos2::new(0.0, 0.0), Pos2::new(20.0, 10.0));
    controller.set_mode(EditMode::Line, &mut list);
    drag_shape(&mut controller, &mut list, Pos2::new(5.0, 5.0), Pos2::new(0.0, 25.0));

    let kinds: Vec<ShapeKind> = controller.scene().all().iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, [ShapeKind::Ellipse, ShapeKind::Line]);
    assert_eq!(controller.scene().all()[1].extent(), Vec2::new(-5.0, 20.0));
    assert_eq!(list.len(), 2);
}

#[test]
fn test_mode_change_mid_drag_drops_preview() {
    let mut controller = EditController::new();
    let mut list = DisplayList::new();

    controller.handle_event(down(0.0, 0.0), &mut list).unwrap();
    controller.handle_event(drag_to(30.0, 30.0), &mut list).unwrap();
    assert_eq!(list.len(), 1);

    controller.set_mode(EditMode::Select, &mut list);

    assert!(list.is_empty());
    assert!(controller.state().is_idle());
    assert!(controller.scene().is_empty());
}

#[test]
fn test_select_and_marquee() {
    let mut controller = EditController::new();
    let mut list = DisplayList::new();
    drag_shape(&mut controller, &mut list, Pos2::new(-5.0, -5.0), Pos2::new(5.0, 5.0));
    drag_shape(&mut controller, &mut list, Pos2::new(95.0, 95.0), Pos2::new(105.0, 105.0));

    click_select(&mut controller, &mut list, Pos2::new(2.0, 2.0));
    assert!(controller.state().is_idle());
    assert_eq!(controller.selection().ids(), [ShapeId::new("Rectangle001")]);

    controller.set_mode(EditMode::Multiselect, &mut list);
    controller.handle_event(down(-10.0, -10.0), &mut list).unwrap();
    assert!(matches!(controller.state(), GestureState::Marqueeing { .. }));
    controller.handle_event(drag_to(50.0, 50.0), &mut list).unwrap();
    controller.handle_event(drag_to(120.0, 120.0), &mut list).unwrap();
    // Two shapes plus one marquee preview
    assert_eq!(list.len(), 3);
    controller.handle_event(up(120.0, 120.0), &mut list).unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(controller.selection().len(), 2);
    let summary = controller.selection_summary();
    assert_eq!(summary[1].id, ShapeId::new("Rectangle002"));
    assert_eq!(summary[1].position, Pos2::new(95.0, 95.0));
}

#[test]
fn test_select_on_empty_scene() {
    let mut controller = EditController::new();
    let mut list = DisplayList::new();

    click_select(&mut controller, &mut list, Pos2::new(1.0, 1.0));

    assert!(controller.selection().is_empty());
    assert!(controller.selection_summary().is_empty());
}

#[test]
fn test_edits_without_selection_are_noops() {
    let mut controller = EditController::new();
    let mut list = DisplayList::new();
    drag_shape(&mut controller, &mut list, Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0));

    let result = controller.apply_edit(PropertyEdit::Color(Color32::BLUE), &mut list);
    assert_eq!(result, Err(EditorError::EmptySelection));
    assert_eq!(controller.scene().all()[0].color(), Color32::BLACK);

    assert_eq!(
        controller.open_property_modal(PropertyField::Size, &mut list),
        Err(EditorError::EmptySelection)
    );
    assert!(controller.state().is_idle());
}

#[test]
fn test_color_edit_applies_to_whole_selection() {
    let mut controller = EditController::new();
    let mut list = DisplayList::new();
    drag_shape(&mut controller, &mut list, Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0));
    drag_shape(&mut controller, &mut list, Pos2::new(20.0, 0.0), Pos2::new(30.0, 10.0));
    drag_shape(&mut controller, &mut list, Pos2::new(200.0, 200.0), Pos2::new(210.0, 210.0));

    controller.set_mode(EditMode::Multiselect, &mut list);
    controller.handle_event(down(0.0, 0.0), &mut list).unwrap();
    controller.handle_event(up(40.0, 40.0), &mut list).unwrap();

    let edited = controller
        .apply_edit(PropertyEdit::Color(Color32::BLUE), &mut list)
        .unwrap();

    assert_eq!(edited, 2);
    let colors: Vec<Color32> = controller.scene().all().iter().map(|s| s.color()).collect();
    assert_eq!(colors, [Color32::BLUE, Color32::BLUE, Color32::BLACK]);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_z_order_edit_redraws_scene() {
    let mut controller = EditController::new();
    let mut list = DisplayList::new();
    drag_shape(&mut controller, &mut list, Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0));
    drag_shape(&mut controller, &mut list, Pos2::new(2.0, 2.0), Pos2::new(12.0, 12.0));

    click_select(&mut controller, &mut list, Pos2::new(4.0, 4.0));
    assert_eq!(controller.selection().ids(), [ShapeId::new("Rectangle001")]);

    controller.open_property_modal(PropertyField::ZOrder, &mut list).unwrap();
    controller.submit_modal(&strings(&["5"]), &mut list).unwrap();

    let raised = controller.scene().get(&ShapeId::new("Rectangle001")).unwrap();
    assert_eq!(raised.z_order(), 5);
    assert_eq!(list.last_handle(), raised.render_handle());
    assert_eq!(list.len(), 2);
    assert!(controller.state().is_idle());
}

#[test]
fn test_property_modal_during_marquee_drops_preview() {
    let mut controller = EditController::new();
    let mut list = DisplayList::new();
    drag_shape(&mut controller, &mut list, Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0));
    click_select(&mut controller, &mut list, Pos2::new(5.0, 5.0));

    controller.set_mode(EditMode::Multiselect, &mut list);
    controller.handle_event(down(0.0, 0.0), &mut list).unwrap();
    controller.handle_event(drag_to(50.0, 50.0), &mut list).unwrap();
    assert_eq!(list.len(), 2);

    controller.open_property_modal(PropertyField::ZOrder, &mut list).unwrap();
    assert!(controller.preview_handle().is_none());
    assert_eq!(list.len(), 1);

    // The release no longer belongs to a drag
    controller.handle_event(up(50.0, 50.0), &mut list).unwrap();
    controller.submit_modal(&strings(&["1"]), &mut list).unwrap();

    assert!(controller.state().is_idle());
    assert_eq!(controller.scene().len(), 1);
    assert_eq!(list.len(), 1);
    let shape = &controller.scene().all()[0];
    assert_eq!(shape.z_order(), 1);
    assert_eq!(list.last_handle(), shape.render_handle());
}

#[test]
fn test_size_modal_parse_error_keeps_modal_open() {
    let mut controller = EditController::new();
    let mut list = DisplayList::new();
    drag_shape(&mut controller, &mut list, Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0));
    click_select(&mut controller, &mut list, Pos2::new(5.0, 5.0));

    controller.open_property_modal(PropertyField::Size, &mut list).unwrap();
    let result = controller.submit_modal(&strings(&["abc", "10"]), &mut list);

    assert!(matches!(result, Err(EditorError::Parse { field: "width", .. })));
    assert_eq!(
        controller.state().pending_modal(),
        Some(&ModalRequest::EditProperty(PropertyField::Size))
    );
    assert_eq!(controller.scene().all()[0].extent(), Vec2::new(10.0, 10.0));

    // Fixing the input applies it
    controller.submit_modal(&strings(&["40", "20"]), &mut list).unwrap();
    assert_eq!(controller.scene().all()[0].extent(), Vec2::new(40.0, 20.0));
    assert!(controller.state().is_idle());
}

#[test]
fn test_position_modal_moves_every_selected_shape() {
    let mut controller = EditController::new();
    let mut list = DisplayList::new();
    drag_shape(&mut controller, &mut list, Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0));
    drag_shape(&mut controller, &mut list, Pos2::new(20.0, 0.0), Pos2::new(30.0, 10.0));
    controller.set_mode(EditMode::Multiselect, &mut list);
    controller.handle_event(down(0.0, 0.0), &mut list).unwrap();
    controller.handle_event(up(40.0, 40.0), &mut list).unwrap();

    controller.open_property_modal(PropertyField::Position, &mut list).unwrap();
    controller.submit_modal(&strings(&["100", "50.5"]), &mut list).unwrap();

    for shape in controller.scene().all() {
        assert_eq!(shape.position(), Pos2::new(100.0, 50.5));
    }
}

#[test]
fn test_text_modal_flow() {
    let mut controller = EditController::new();
    let mut list = DisplayList::new();
    controller.set_mode(EditMode::Text, &mut list);

    controller.handle_event(down(30.0, 40.0), &mut list).unwrap();
    controller.handle_event(up(30.0, 40.0), &mut list).unwrap();
    assert_eq!(
        controller.state().pending_modal(),
        Some(&ModalRequest::PlaceText { anchor: Pos2::new(30.0, 40.0) })
    );

    // Pointer presses are ignored while the modal is open
    controller.handle_event(down(0.0, 0.0), &mut list).unwrap();
    assert!(controller.state().pending_modal().is_some());

    assert_eq!(
        controller.submit_modal(&strings(&["   "]), &mut list),
        Err(EditorError::EmptyText)
    );
    assert!(controller.scene().is_empty());

    controller.submit_modal(&strings(&["hello"]), &mut list).unwrap();
    assert!(controller.state().is_idle());
    let text = &controller.scene().all()[0];
    assert_eq!(text.id().as_str(), "Text001");
    assert_eq!(text.center(), Pos2::new(30.0, 40.0));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_cancel_modal_leaves_scene_untouched() {
    let mut controller = EditController::new();
    let mut list = DisplayList::new();
    controller.set_mode(EditMode::Text, &mut list);
    controller.handle_event(down(1.0, 1.0), &mut list).unwrap();

    controller.cancel_modal();

    assert!(controller.state().is_idle());
    assert!(controller.scene().is_empty());
    assert!(list.is_empty());
    assert_eq!(
        controller.submit_modal(&strings(&["late"]), &mut list),
        Err(EditorError::NoPendingModal)
    );
}

#[test]
fn test_image_modal_with_missing_file() {
    let mut controller = EditController::new();
    let mut list = DisplayList::new();
    controller.set_mode(EditMode::Image, &mut list);
    controller.handle_event(down(10.0, 10.0), &mut list).unwrap();

    let result = controller.submit_modal(&strings(&["/no/such/picture.png"]), &mut list);

    assert!(matches!(result, Err(EditorError::AssetLoad { .. })));
    assert!(controller.scene().is_empty());
    assert!(list.is_empty());
    assert!(controller.state().pending_modal().is_some());
}

#[test]
fn test_image_modal_places_image() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("photo.png");
    image::RgbaImage::new(8, 6).save(&path).unwrap();

    let mut controller = EditController::new();
    let mut list = DisplayList::new();
    controller.set_mode(EditMode::Image, &mut list);
    controller.handle_event(down(10.0, 20.0), &mut list).unwrap();
    controller
        .submit_modal(&[path.display().to_string()], &mut list)
        .unwrap();

    let image = &controller.scene().all()[0];
    assert_eq!(image.id().as_str(), "Image001");
    assert_eq!(image.center(), Pos2::new(14.0, 23.0));
    assert_eq!(list.len(), 1);
}

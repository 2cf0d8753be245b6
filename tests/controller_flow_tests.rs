use approx::assert_abs_diff_eq;
use dxf_shape_editor::{
    AppCommand, AppController, CommandOutcome, AppIntent, AppState, AreaUnit, EditorTool, NudgeDirection, Point,
    PointRef, Rejection,
};

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Invariantenfehler durchlaufen");
}

fn seed_id(state: &AppState) -> dxf_shape_editor::ShapeId {
    state.drawing.shapes[0].id
}

#[test]
fn test_initial_state_reports_seed_totals() {
    let controller = AppController::new();
    let state = AppState::new();

    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.active_tool, EditorTool::Select);
    assert_abs_diff_eq!(scene.total_area, 416.67, epsilon = 0.01);
    assert_abs_diff_eq!(scene.total_perimeter, 83.33, epsilon = 0.01);
    assert!(scene.last_warning.is_none());
}

#[test]
fn test_every_command_is_logged() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::SnapToGridToggled);
    send(&mut controller, &mut state, AppIntent::UndoRequested);

    send(
        &mut controller,
        &mut state,
        AppIntent::ScaleSelectedShapeRequested { factor: 2.0 },
    );

    let entries = state.command_log.entries();
    assert_eq!(entries.len(), 3);
    assert!(matches!(entries[0].command, AppCommand::ToggleSnapToGrid));
    assert_eq!(entries[0].outcome, CommandOutcome::Applied);
    assert!(matches!(entries[1].command, AppCommand::Undo));
    assert_eq!(
        entries[1].outcome,
        CommandOutcome::Rejected(Rejection::NothingToUndo)
    );
    assert_eq!(
        entries[2].outcome,
        CommandOutcome::Rejected(Rejection::NothingSelected)
    );
    assert_eq!(entries[2].history_position, (0, 1));
    assert_eq!(state.command_log.rejections().count(), 2);
    assert!(!state.options.snap_to_grid);
}

#[test]
fn test_rejection_is_reported_and_cleared_by_next_intent() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::DeleteSelectedShapeRequested);
    assert_eq!(state.ui.last_rejection, Some(Rejection::NothingSelected));
    let scene = controller.build_render_scene(&state);
    assert_eq!(
        scene.last_warning.as_deref(),
        Some("Bitte zuerst ein Shape oder einen Punkt auswählen")
    );

    send(&mut controller, &mut state, AppIntent::BackgroundClicked);
    assert!(state.ui.last_rejection.is_none());
    assert_eq!(state.shape_count(), 1);
}

#[test]
fn test_invariant_violation_is_returned_as_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.editor.active_tool = EditorTool::DeletePoint;

    let result = controller.handle_intent(
        &mut state,
        AppIntent::PointClicked {
            shape_index: 4,
            point_index: 0,
        },
    );
    assert!(result.is_err());
    assert_eq!(state.drawing.shapes[0].points.len(), 4);
    assert_eq!(state.history.len(), 1);
}

#[test]
fn test_point_drag_commits_once() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for x in [405.0, 410.0, 430.0] {
        send(
            &mut controller,
            &mut state,
            AppIntent::PointDragMoved {
                shape_index: 0,
                point_index: 1,
                world_pos: Point::new(x, 100.0),
            },
        );
    }
    assert_eq!(state.history.len(), 1);
    send(&mut controller, &mut state, AppIntent::PointDragEnded);
    assert_eq!(state.history.len(), 2);
    assert_eq!(state.drawing.shapes[0].points[1], Point::new(432.0, 102.0));
}

#[test]
fn test_select_duplicate_scale_delete_flow() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = seed_id(&state);

    send(&mut controller, &mut state, AppIntent::ShapeClicked { shape_id: id });
    send(&mut controller, &mut state, AppIntent::DuplicateSelectedShapeRequested);
    assert_eq!(state.shape_count(), 2);
    let copy_id = state.selection.selected_shape.expect("Kopie selektiert");
    assert_ne!(copy_id, id);

    send(
        &mut controller,
        &mut state,
        AppIntent::ScaleSelectedShapeRequested { factor: 0.5 },
    );
    assert_abs_diff_eq!(
        state.measurements.total_area_sq_ft,
        416.666_667 * 1.25,
        epsilon = 1e-3
    );

    send(&mut controller, &mut state, AppIntent::DeleteSelectedShapeRequested);
    assert_eq!(state.shape_count(), 1);
    assert_eq!(state.drawing.shapes[0].id, id);
    assert_eq!(state.history.len(), 4);
}

#[test]
fn test_locked_shape_ignores_selection_and_edits() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = seed_id(&state);

    send(&mut controller, &mut state, AppIntent::ToggleLockRequested { shape_id: id });
    send(&mut controller, &mut state, AppIntent::ShapeClicked { shape_id: id });
    assert_eq!(state.selection.selected_shape, None);

    send(
        &mut controller,
        &mut state,
        AppIntent::StrokeWidthChanged {
            shape_id: id,
            width: 3.0,
        },
    );
    assert_eq!(state.ui.last_rejection, Some(Rejection::ShapeLocked));

    send(
        &mut controller,
        &mut state,
        AppIntent::SetEditorToolRequested {
            tool: EditorTool::DeletePoint,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointClicked {
            shape_index: 0,
            point_index: 0,
        },
    );
    assert_eq!(state.ui.last_rejection, Some(Rejection::ShapeLocked));
    assert_eq!(state.drawing.shapes[0].points.len(), 4);

    // Sichtbarkeit bleibt auch bei gesperrten Shapes umschaltbar
    send(&mut controller, &mut state, AppIntent::ToggleVisibilityRequested { shape_id: id });
    assert!(!state.drawing.shapes[0].visible);
}

#[test]
fn test_select_point_and_nudge() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(
        &mut controller,
        &mut state,
        AppIntent::SetEditorToolRequested {
            tool: EditorTool::SelectPoint,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointClicked {
            shape_index: 0,
            point_index: 2,
        },
    );
    assert_eq!(state.selection.selected_point, Some(PointRef::new(0, 2)));

    send(
        &mut controller,
        &mut state,
        AppIntent::NudgeSelectedPointRequested {
            direction: NudgeDirection::Left,
        },
    );
    assert_eq!(state.drawing.shapes[0].points[2], Point::new(394.0, 300.0));

    // Werkzeugwechsel verwirft die Punkt-Selektion
    send(
        &mut controller,
        &mut state,
        AppIntent::SetEditorToolRequested {
            tool: EditorTool::Select,
        },
    );
    assert_eq!(state.selection.selected_point, None);
    send(
        &mut controller,
        &mut state,
        AppIntent::NudgeSelectedPointRequested {
            direction: NudgeDirection::Left,
        },
    );
    assert_eq!(state.ui.last_rejection, Some(Rejection::NothingSelected));
}

#[test]
fn test_add_point_on_segment() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.editor.active_tool = EditorTool::AddPoint;

    send(
        &mut controller,
        &mut state,
        AppIntent::SegmentClicked {
            shape_index: 0,
            segment_index: 1,
            world_pos: Point::new(400.0, 200.0),
        },
    );
    let points = &state.drawing.shapes[0].points;
    assert_eq!(points.len(), 5);
    assert_eq!(points[2], Point::new(402.0, 198.0));
}

#[test]
fn test_settings_change_scene() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::GridSizeChanged { inches: 100.0 });
    send(&mut controller, &mut state, AppIntent::GridVisibilityToggled);
    send(&mut controller, &mut state, AppIntent::MeasurementsVisibilityToggled);
    send(
        &mut controller,
        &mut state,
        AppIntent::AreaUnitChanged {
            unit: AreaUnit::SquareInches,
        },
    );
    send(&mut controller, &mut state, AppIntent::MoveIncrementChanged { inches: -1.0 });

    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.grid_step, 144.0);
    assert!(!scene.grid_visible);
    assert!(!scene.show_measurements);
    assert_abs_diff_eq!(scene.total_area, 60_000.0, epsilon = 0.01);
    assert_eq!(state.options.move_increment_inches, 0.5);
}

#[test]
fn test_template_replaces_drawing_and_is_undoable() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = seed_id(&state);

    send(
        &mut controller,
        &mut state,
        AppIntent::TemplateSelected {
            template_id: "hexagon".into(),
        },
    );
    assert_eq!(state.shape_count(), 1);
    assert_ne!(seed_id(&state), id);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(seed_id(&state), id);
    assert_abs_diff_eq!(state.measurements.total_area_sq_ft, 416.67, epsilon = 0.01);
}

use crate::app::{AppCommand, AppIntent, AppState, EditorTool};
use crate::core::{Point, PointRef};

use super::map_intent_to_commands;

fn state_with_tool(tool: EditorTool) -> AppState {
    let mut state = AppState::new();
    state.editor.active_tool = tool;
    state
}

fn point_click() -> AppIntent {
    AppIntent::PointClicked {
        shape_index: 0,
        point_index: 2,
    }
}

#[test]
fn point_click_depends_on_active_tool() {
    let commands = map_intent_to_commands(&state_with_tool(EditorTool::Select), point_click());
    assert!(commands.is_empty());

    let commands = map_intent_to_commands(&state_with_tool(EditorTool::SelectPoint), point_click());
    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::TogglePointSelection { point } if point == PointRef::new(0, 2)
    ));

    let commands = map_intent_to_commands(&state_with_tool(EditorTool::DeletePoint), point_click());
    assert!(matches!(commands[0], AppCommand::DeletePoint { .. }));

    let commands = map_intent_to_commands(&state_with_tool(EditorTool::RoundByDrag), point_click());
    assert!(matches!(commands[0], AppCommand::RoundingPickPoint { .. }));
}

#[test]
fn point_drag_only_moves_in_select_tool() {
    let drag = AppIntent::PointDragMoved {
        shape_index: 0,
        point_index: 1,
        world_pos: Point::new(5.0, 6.0),
    };

    let commands = map_intent_to_commands(&state_with_tool(EditorTool::Select), drag.clone());
    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::MovePoint { .. }));

    let commands = map_intent_to_commands(&state_with_tool(EditorTool::AddPoint), drag);
    assert!(commands.is_empty());

    let commands =
        map_intent_to_commands(&state_with_tool(EditorTool::Select), AppIntent::PointDragEnded);
    assert!(matches!(commands[0], AppCommand::EndPointDrag));
}

#[test]
fn segment_click_only_adds_in_add_point_tool() {
    let click = AppIntent::SegmentClicked {
        shape_index: 0,
        segment_index: 3,
        world_pos: Point::new(1.0, 2.0),
    };

    let commands = map_intent_to_commands(&state_with_tool(EditorTool::AddPoint), click.clone());
    assert!(matches!(
        commands[0],
        AppCommand::AddPoint {
            shape_index: 0,
            segment_index: 3,
            ..
        }
    ));
    assert!(map_intent_to_commands(&state_with_tool(EditorTool::Select), click).is_empty());
}

#[test]
fn rounding_handle_requires_rounding_tool() {
    let commands = map_intent_to_commands(
        &state_with_tool(EditorTool::RoundByDrag),
        AppIntent::RoundingHandleDragStarted,
    );
    assert!(matches!(commands[0], AppCommand::BeginRoundingDrag));

    let commands = map_intent_to_commands(
        &state_with_tool(EditorTool::Select),
        AppIntent::RoundingHandleDragEnded,
    );
    assert!(commands.is_empty());
}

#[test]
fn background_click_clears_selection() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::BackgroundClicked);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::ClearSelection));
}

#[test]
fn save_options_maps_to_single_command() {
    let commands = map_intent_to_commands(&AppState::new(), AppIntent::SaveOptionsRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::SaveOptions));
}

//! Builder für Render-Szenen aus dem AppState.

use crate::app::state::EditorTool;
use crate::app::AppState;
use crate::core::geometry::{bounding_box, segment_lengths};
use crate::core::units::UNITS_PER_FOOT;
use crate::shared::{RenderScene, RoundingOverlay};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let drawing = &state.drawing;
    let selected = state
        .selection
        .selected_shape
        .and_then(|id| drawing.shape(id));

    let rounding = if state.editor.active_tool == EditorTool::RoundByDrag {
        let tool = &state.editor.rounding;
        RoundingOverlay {
            selected_points: tool.selected_points(),
            handle: tool.handle_position(drawing),
            drag_offset: tool.drag_offset(),
            preview_arc: tool.preview(drawing, state.options.arc_preview_segments),
        }
    } else {
        RoundingOverlay::default()
    };

    let unit = state.options.area_unit;
    RenderScene {
        drawing: drawing.clone(),
        visible_shape_indices: drawing.visible_shapes().map(|(i, _)| i).collect(),
        active_tool: state.editor.active_tool,
        selected_shape: selected.map(|s| s.id),
        selected_point: state.selection.selected_point,
        rounding,
        selection_bounds: selected.and_then(|s| bounding_box(s.points.iter().copied())),
        content_bounds: drawing.bounds(),
        segment_lengths_ft: selected
            .map(|s| {
                segment_lengths(s)
                    .into_iter()
                    .map(|len| len / UNITS_PER_FOOT)
                    .collect()
            })
            .unwrap_or_default(),
        total_area: state.measurements.area_in(unit),
        total_perimeter: state.measurements.perimeter_in(unit),
        area_unit: unit,
        grid_step: state.options.grid_step(),
        grid_visible: state.options.grid_visible,
        show_measurements: state.options.show_measurements,
        last_warning: state.ui.last_rejection.map(|r| r.to_string()),
    }
}

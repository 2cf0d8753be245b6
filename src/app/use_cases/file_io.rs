//! Use-Case-Funktionen zum Ersetzen der Sammlung (DXF-Import, Vorlagen).

use crate::app::{AppState, EditError, Rejection};
use crate::core::{find_template, Drawing, Shape};
use crate::dxf::{fit_to_canvas, parse_dxf, CanvasFit};

/// Ersetzt die Sammlung durch die Shapes eines DXF-Texts.
///
/// Ohne lesbare Shapes bleibt der Zustand inkl. History unverändert.
/// Gibt die Anzahl geladener Shapes zurück.
pub fn load_dxf_content(
    state: &mut AppState,
    source_name: &str,
    content: &str,
) -> Result<usize, EditError> {
    let mut drafts = parse_dxf(content);
    if drafts.is_empty() {
        log::warn!("DXF '{}': keine Shapes gefunden", source_name);
        return Err(Rejection::NoShapesParsed.into());
    }

    fit_to_canvas(&mut drafts, &CanvasFit::from_options(&state.options));

    let shapes: Vec<Shape> = drafts
        .into_iter()
        .enumerate()
        .map(|(i, draft)| {
            Shape::new(
                state.next_shape_id(),
                draft.kind,
                draft.points,
                draft.closed,
                format!("{} - Shape {}", source_name, i + 1),
            )
        })
        .collect();
    let count = shapes.len();

    state.replace_drawing(Drawing::from_shapes(shapes));
    state.ui.status_message = Some(format!("{} Shapes aus {} geladen", count, source_name));
    log::info!("DXF '{}' geladen: {} Shapes", source_name, count);
    Ok(count)
}

/// Ersetzt die Sammlung durch ein Shape aus der Vorlage `template_id`.
pub fn load_template(state: &mut AppState, template_id: &str) -> Result<(), EditError> {
    let template = find_template(template_id).ok_or(Rejection::UnknownTemplate)?;
    let shape = template.instantiate(state.next_shape_id());

    state.replace_drawing(Drawing::from_shapes(vec![shape]));
    state.ui.status_message = Some(format!("Vorlage '{}' geladen", template.name));
    log::info!("Vorlage '{}' geladen", template.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ShapeKind;

    const TWO_LINES: &str = "0\nSECTION\n2\nENTITIES\n0\nLINE\n10\n0\n20\n0\n11\n10\n21\n0\n0\nLINE\n10\n10\n20\n0\n11\n10\n21\n5\n0\nENDSEC\n0\nEOF\n";

    #[test]
    fn dxf_replaces_collection_and_commits() {
        let mut state = AppState::new();
        let seed_id = state.drawing.shapes[0].id;
        state.selection.selected_shape = Some(seed_id);

        let count = load_dxf_content(&mut state, "plan.dxf", TWO_LINES).expect("lesbar");
        assert_eq!(count, 2);
        assert_eq!(state.drawing.shapes[0].name, "plan.dxf - Shape 1");
        assert_eq!(state.drawing.shapes[1].kind, ShapeKind::Line);
        assert!(state.drawing.shapes.iter().all(|s| s.id != seed_id));
        assert_eq!(state.selection.selected_shape, None);
        assert!(state.can_undo());
    }

    #[test]
    fn empty_dxf_leaves_state_untouched() {
        let mut state = AppState::new();
        let before = state.drawing.clone();

        let err = load_dxf_content(&mut state, "leer.dxf", "kein dxf").unwrap_err();
        assert_eq!(err, EditError::Rejected(Rejection::NoShapesParsed));
        assert!(std::sync::Arc::ptr_eq(&before, &state.drawing));
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn template_replaces_collection() {
        let mut state = AppState::new();
        load_template(&mut state, "l-shape").expect("bekannt");
        assert_eq!(state.shape_count(), 1);
        assert_eq!(state.drawing.shapes[0].kind, ShapeKind::Template);
        assert_eq!(
            load_template(&mut state, "gibt-es-nicht").unwrap_err(),
            EditError::Rejected(Rejection::UnknownTemplate)
        );
        assert_eq!(state.history.len(), 2);
    }
}

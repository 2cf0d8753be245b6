//! Handler für das Laden von DXF-Inhalten und Vorlagen.

use crate::app::use_cases;
use crate::app::{AppState, EditError};

/// Ersetzt die Sammlung durch den Inhalt einer DXF-Datei.
pub fn load_dxf_content(
    state: &mut AppState,
    source_name: &str,
    content: &str,
) -> Result<(), EditError> {
    use_cases::file_io::load_dxf_content(state, source_name, content).map(|_| ())
}

/// Ersetzt die Sammlung durch eine Vorlage.
pub fn load_template(state: &mut AppState, template_id: &str) -> Result<(), EditError> {
    use_cases::file_io::load_template(state, template_id)
}

//! Handler für Raster-, Anzeige- und Einheiten-Einstellungen.

use crate::app::AppState;
use crate::core::AreaUnit;
use crate::shared::EditorOptions;

/// Setzt die Rastergröße in Zoll (begrenzt).
pub fn set_grid_size(state: &mut AppState, inches: f64) {
    state.options.set_grid_size_inches(inches);
    log::info!("Rastergröße: {} Zoll", state.options.grid_size_inches);
}

/// Schaltet Raster-Snap um.
pub fn toggle_snap_to_grid(state: &mut AppState) {
    state.options.snap_to_grid = !state.options.snap_to_grid;
    log::info!("Raster-Snap: {}", state.options.snap_to_grid);
}

/// Schaltet die Raster-Anzeige um.
pub fn toggle_grid_visibility(state: &mut AppState) {
    state.options.grid_visible = !state.options.grid_visible;
}

/// Schaltet die Messwert-Anzeige um.
pub fn toggle_measurements_visibility(state: &mut AppState) {
    state.options.show_measurements = !state.options.show_measurements;
}

/// Setzt die Schrittweite für Präzisions-Verschieben.
pub fn set_move_increment(state: &mut AppState, inches: f64) {
    if !inches.is_finite() || inches <= 0.0 {
        log::warn!("Ungültige Schrittweite ignoriert: {}", inches);
        return;
    }
    state.options.move_increment_inches = inches;
}

/// Setzt die Anzeige-Einheit.
pub fn set_area_unit(state: &mut AppState, unit: AreaUnit) {
    state.options.area_unit = unit;
    log::debug!("Anzeige-Einheit: {:?}", unit);
}

/// Schreibt die aktuellen Optionen in die Konfigurationsdatei neben der Binary.
pub fn save_options(state: &AppState) -> anyhow::Result<()> {
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

//! DXF Shape Editor (Headless-Shell).
//!
//! Lädt optional eine DXF-Datei und gibt Gesamtfläche und Umfang aus.
//! Die Darstellung übernimmt eine externe UI-Schicht.

use anyhow::Context;
use dxf_shape_editor::{AppController, AppIntent, AppState, EditorOptions};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("DXF Shape Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    if let Some(path) = std::env::args().nth(1) {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("DXF-Datei konnte nicht gelesen werden: {}", path))?;
        let source_name = Path::new(&path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.clone());

        controller.handle_intent(
            &mut state,
            AppIntent::DxfContentLoaded {
                source_name,
                content,
            },
        )?;
        if let Some(rejection) = state.ui.last_rejection {
            log::warn!("{}: {}", path, rejection);
        }
    }

    let scene = controller.build_render_scene(&state);
    log::info!(
        "{} Shapes, {} sichtbar",
        scene.drawing.shape_count(),
        scene.visible_shape_indices.len()
    );
    println!(
        "Fläche: {:.2} {}",
        scene.total_area,
        scene.area_unit.area_suffix()
    );
    println!(
        "Umfang: {:.2} {}",
        scene.total_perimeter,
        scene.area_unit.perimeter_suffix()
    );

    Ok(())
}

//! Zentrale Konfiguration für den DXF Shape Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::geometry::grid_step;
use crate::core::{AreaUnit, Point};
use serde::{Deserialize, Serialize};

// ── Raster ──────────────────────────────────────────────────────────

/// Standard-Rastergröße in Zoll.
pub const GRID_SIZE_INCHES: f64 = 0.5;
/// Kleinste einstellbare Rastergröße in Zoll.
pub const GRID_SIZE_MIN_INCHES: f64 = 0.1;
/// Größte einstellbare Rastergröße in Zoll.
pub const GRID_SIZE_MAX_INCHES: f64 = 12.0;

// ── Bearbeitung ─────────────────────────────────────────────────────

/// Schrittweite für das Punkt-Verschieben per Pfeiltaste (Zoll).
pub const MOVE_INCREMENT_INCHES: f64 = 0.5;
/// Versatz einer Shape-Kopie (Zeichnungseinheiten).
pub const DUPLICATE_OFFSET: [f64; 2] = [50.0, 50.0];
/// Maximale Anzahl an History-Einträgen (0 = unbegrenzt).
pub const HISTORY_DEPTH: usize = 0;

// ── Abrunden ────────────────────────────────────────────────────────

/// Segmente des Vorschau-Bogens.
pub const ARC_PREVIEW_SEGMENTS: usize = 20;
/// Segmente des übernommenen Bogens.
pub const ARC_COMMIT_SEGMENTS: usize = 16;
/// Mindest-Ausbuchtung, ab der beim Loslassen ein Bogen eingefügt wird.
pub const ROUNDING_MIN_OFFSET: f64 = 5.0;

// ── DXF-Import ──────────────────────────────────────────────────────

/// Breite der Zeichenfläche beim Einpassen.
pub const DXF_CANVAS_WIDTH: f64 = 1200.0;
/// Höhe der Zeichenfläche beim Einpassen.
pub const DXF_CANVAS_HEIGHT: f64 = 700.0;
/// Rand beim Einpassen.
pub const DXF_CANVAS_PADDING: f64 = 50.0;
/// Verkleinerungsfaktor beim Einpassen.
pub const DXF_FIT_FACTOR: f64 = 0.8;

/// Laufzeit-Optionen des Editors (persistiert als TOML).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Raster ──────────────────────────────────────────────────
    /// Rastergröße in Zoll (Raster-Schritt = Rastergröße × 12)
    pub grid_size_inches: f64,
    /// Punkte beim Verschieben/Einfügen auf das Raster runden
    pub snap_to_grid: bool,
    /// Raster anzeigen
    pub grid_visible: bool,
    /// Messwerte und Kantenlängen anzeigen
    pub show_measurements: bool,

    // ── Bearbeitung ─────────────────────────────────────────────
    /// Schrittweite für Präzisions-Verschieben in Zoll
    pub move_increment_inches: f64,
    /// Versatz einer Shape-Kopie
    pub duplicate_offset: [f64; 2],
    /// Maximale History-Tiefe, 0 = unbegrenzt (sonst fallen älteste Einträge heraus)
    pub history_depth: usize,

    // ── Abrunden ────────────────────────────────────────────────
    /// Segmente des Vorschau-Bogens
    pub arc_preview_segments: usize,
    /// Segmente des übernommenen Bogens
    pub arc_commit_segments: usize,
    /// Mindest-Ausbuchtung für einen Bogen
    pub rounding_min_offset: f64,

    // ── Anzeige ─────────────────────────────────────────────────
    /// Einheit für Fläche/Umfang
    pub area_unit: AreaUnit,

    // ── DXF-Import ──────────────────────────────────────────────
    /// Breite der Zeichenfläche
    pub dxf_canvas_width: f64,
    /// Höhe der Zeichenfläche
    pub dxf_canvas_height: f64,
    /// Rand
    pub dxf_canvas_padding: f64,
    /// Verkleinerungsfaktor
    pub dxf_fit_factor: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_size_inches: GRID_SIZE_INCHES,
            snap_to_grid: true,
            grid_visible: true,
            show_measurements: true,

            move_increment_inches: MOVE_INCREMENT_INCHES,
            duplicate_offset: DUPLICATE_OFFSET,
            history_depth: HISTORY_DEPTH,

            arc_preview_segments: ARC_PREVIEW_SEGMENTS,
            arc_commit_segments: ARC_COMMIT_SEGMENTS,
            rounding_min_offset: ROUNDING_MIN_OFFSET,

            area_unit: AreaUnit::default(),

            dxf_canvas_width: DXF_CANVAS_WIDTH,
            dxf_canvas_height: DXF_CANVAS_HEIGHT,
            dxf_canvas_padding: DXF_CANVAS_PADDING,
            dxf_fit_factor: DXF_FIT_FACTOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("dxf_shape_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("dxf_shape_editor.toml")
    }

    /// Raster-Schritt in Zeichnungseinheiten.
    pub fn grid_step(&self) -> f64 {
        grid_step(self.grid_size_inches)
    }

    /// Raster-Schritt für Snap, oder `None` wenn Snap deaktiviert ist.
    pub fn snap_step(&self) -> Option<f64> {
        self.snap_to_grid.then(|| self.grid_step())
    }

    /// Präzisions-Schrittweite in Zeichnungseinheiten.
    pub fn move_increment_units(&self) -> f64 {
        grid_step(self.move_increment_inches)
    }

    /// Versatz einer Shape-Kopie als Vektor.
    pub fn duplicate_offset_vec(&self) -> Point {
        Point::from_array(self.duplicate_offset)
    }

    /// Setzt die Rastergröße, begrenzt auf den gültigen Bereich.
    pub fn set_grid_size_inches(&mut self, inches: f64) {
        if !inches.is_finite() {
            log::warn!("Ungültige Rastergröße ignoriert: {}", inches);
            return;
        }
        self.grid_size_inches = inches.clamp(GRID_SIZE_MIN_INCHES, GRID_SIZE_MAX_INCHES);
    }
}

//! Zentrale Konfiguration des Stroke-Kernels.
//!
//! `StrokeOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Dezimierung ─────────────────────────────────────────────────────

/// Mindestabstand zwischen zwei behaltenen Punkten (Einheiten des
/// Host-Koordinatenraums). Die Dezimierung rechnet mit dem Quadrat.
pub const MIN_POINT_DISTANCE: f32 = 2.0;

// ── Glättung ────────────────────────────────────────────────────────

/// Anzahl interpolierter Samples pro Spline-Segment (ohne Endpunkt).
pub const SAMPLES_PER_SEGMENT: usize = 8;

// ── Druck-Formung ───────────────────────────────────────────────────

/// Untere Klemmgrenze des Ausgabe-Drucks.
pub const PRESSURE_FLOOR: f32 = 0.1;
/// Obere Klemmgrenze des Ausgabe-Drucks.
pub const PRESSURE_CEILING: f32 = 1.0;
/// Referenz-Distanz für den Velocity-Faktor: ab dieser Segmentlänge
/// dämpft die Druck-Formung maximal.
pub const VELOCITY_REFERENCE: f32 = 50.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Kernel-Optionen.
/// Kann vom Host als `ink_stroke_engine.toml` neben der Binary gespeichert werden.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrokeOptions {
    // ── Dezimierung ─────────────────────────────────────────────
    /// Mindestabstand zwischen zwei behaltenen Punkten (Welteinheiten)
    pub min_point_distance: f32,

    // ── Glättung ────────────────────────────────────────────────
    /// Interpolierte Samples pro Spline-Segment (ohne Endpunkt)
    pub samples_per_segment: usize,

    // ── Druck-Formung ───────────────────────────────────────────
    /// Untere Klemmgrenze des Ausgabe-Drucks
    #[serde(default = "default_pressure_floor")]
    pub pressure_floor: f32,
    /// Obere Klemmgrenze des Ausgabe-Drucks
    #[serde(default = "default_pressure_ceiling")]
    pub pressure_ceiling: f32,
    /// Referenz-Distanz für den Velocity-Faktor der Druck-Dämpfung
    #[serde(default = "default_velocity_reference")]
    pub velocity_reference: f32,
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self {
            min_point_distance: MIN_POINT_DISTANCE,
            samples_per_segment: SAMPLES_PER_SEGMENT,
            pressure_floor: PRESSURE_FLOOR,
            pressure_ceiling: PRESSURE_CEILING,
            velocity_reference: VELOCITY_REFERENCE,
        }
    }
}

/// Serde-Default für `pressure_floor` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_pressure_floor() -> f32 {
    PRESSURE_FLOOR
}

/// Serde-Default für `pressure_ceiling` (Abwärtskompatibilität).
fn default_pressure_ceiling() -> f32 {
    PRESSURE_CEILING
}

/// Serde-Default für `velocity_reference` (Abwärtskompatibilität).
fn default_velocity_reference() -> f32 {
    VELOCITY_REFERENCE
}

impl StrokeOptions {
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

    /// Ermittelt den Pfad zur Optionen-Datei neben der Host-Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("ink_stroke_engine"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("ink_stroke_engine.toml")
    }

    /// Quadrierte Distanzschwelle für die Dezimierung.
    ///
    /// `min_point_distance * min_point_distance`
    pub fn min_point_distance_sq(&self) -> f32 {
        self.min_point_distance * self.min_point_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_entsprechen_den_konstanten() {
        let opts = StrokeOptions::default();
        assert_eq!(opts.min_point_distance, MIN_POINT_DISTANCE);
        assert_eq!(opts.samples_per_segment, SAMPLES_PER_SEGMENT);
        assert_eq!(opts.pressure_floor, PRESSURE_FLOOR);
        assert_eq!(opts.pressure_ceiling, PRESSURE_CEILING);
        assert_eq!(opts.velocity_reference, VELOCITY_REFERENCE);
        assert_eq!(opts.min_point_distance_sq(), 4.0);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut opts = StrokeOptions::default();
        opts.min_point_distance = 3.5;
        opts.samples_per_segment = 5;

        let toml_str = toml::to_string_pretty(&opts).expect("Serialisierung erwartet");
        let restored: StrokeOptions = toml::from_str(&toml_str).expect("Parse erwartet");
        assert_eq!(restored, opts);
    }

    #[test]
    fn test_save_und_load_roundtrip_ueber_datei() {
        let path = std::env::temp_dir().join("ink_stroke_engine_options_test.toml");

        let mut opts = StrokeOptions::default();
        opts.samples_per_segment = 12;
        opts.velocity_reference = 80.0;
        opts.save_to_file(&path).expect("Speichern erwartet");

        let restored = StrokeOptions::load_from_file(&path);
        assert_eq!(restored, opts);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_ohne_datei_liefert_defaults() {
        let path = std::path::Path::new("/nonexistent/ink_stroke_engine.toml");
        assert_eq!(StrokeOptions::load_from_file(path), StrokeOptions::default());
    }

    #[test]
    fn test_fehlende_felder_fallen_auf_defaults_zurueck() {
        // Ältere Options-Datei ohne Druck-Formungs-Felder
        let toml_str = "min_point_distance = 1.5\nsamples_per_segment = 6\n";
        let opts: StrokeOptions = toml::from_str(toml_str).expect("Parse erwartet");
        assert_eq!(opts.min_point_distance, 1.5);
        assert_eq!(opts.samples_per_segment, 6);
        assert_eq!(opts.pressure_floor, PRESSURE_FLOOR);
        assert_eq!(opts.pressure_ceiling, PRESSURE_CEILING);
        assert_eq!(opts.velocity_reference, VELOCITY_REFERENCE);
    }
}

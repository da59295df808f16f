//! Der StrokePoint-Werttyp: Position plus Druckwert eines Eingabe-Samples.

use glam::Vec2;

/// Ein einzelnes Sample eines Freihand-Strichs.
///
/// Reiner Werttyp ohne Identität: Position im Koordinatenraum des Hosts
/// plus Druckwert (nominell [0, 1], eingangsseitig nicht erzwungen).
/// Ein Strich ist schlicht eine geordnete Folge solcher Punkte; die
/// Reihenfolge entspricht der zeitlichen Abtastung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePoint {
    /// Position im Koordinatenraum des Aufrufers
    pub position: Vec2,
    /// Druckwert des Samples
    pub pressure: f32,
}

impl StrokePoint {
    /// Erstellt einen neuen StrokePoint
    pub fn new(x: f32, y: f32, pressure: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            pressure,
        }
    }
}

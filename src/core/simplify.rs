//! Distanzbasierte Punkt-Dezimierung (Stufe 1 der Stroke-Pipeline).

use super::StrokePoint;

/// Reduziert die Punktdichte eines Rohstrichs über eine quadrierte Distanzschwelle.
///
/// Der erste Punkt wird immer behalten. Jeder weitere Kandidat wird nur
/// behalten, wenn sein quadrierter x/y-Abstand zum zuletzt behaltenen Punkt
/// `min_distance_sq` überschreitet; der Druckwert geht nicht in den Abstand
/// ein. Fällt der echte Endpunkt dabei weg (kein exaktes Koordinaten-Match
/// mit dem zuletzt behaltenen Punkt), wird er unverändert angehängt — das
/// Strichende geht nie an die Dezimierung verloren.
///
/// Gieriger Einzeldurchlauf in O(n), kein globales Optimum (bewusst kein
/// Douglas-Peucker): angemessen für Echtzeit-Ink-Erfassung.
pub fn simplify_stroke(points: &[StrokePoint], min_distance_sq: f32) -> Vec<StrokePoint> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };

    let mut kept = Vec::with_capacity(points.len());
    kept.push(first);
    let mut last_kept = first;

    for &candidate in rest {
        if candidate.position.distance_squared(last_kept.position) > min_distance_sq {
            kept.push(candidate);
            last_kept = candidate;
        }
    }

    // Endpunkt immer exakt übernehmen (exakter x/y-Vergleich, Druck egal)
    if let Some(&last_raw) = points.last() {
        if last_kept.position != last_raw.position {
            kept.push(last_raw);
        }
    }

    kept
}

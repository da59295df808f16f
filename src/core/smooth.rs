//! Catmull-Rom-Glättung mit Druck-Formung (Stufe 2 der Stroke-Pipeline).

use super::StrokePoint;
use crate::shared::spline_geometry::{catmull_rom_point, catmull_rom_scalar};
use crate::shared::StrokeOptions;

/// Glättet einen dezimierten Strich über fensterweise Catmull-Rom-Interpolation.
///
/// Unter 3 Kontrollpunkten definiert die Spline keine Krümmung — die Eingabe
/// wird unverändert zurückgegeben. Sonst erzeugt jedes Segment
/// `samples_per_segment` Samples bei t ∈ [0, 1); t = 1 entfällt, weil es dem
/// t = 0 des Folgesegments entspricht. Am Rand werden fehlende Nachbarn per
/// Index-Klemmung dupliziert statt über Sentinel-Punkte. Der exakte letzte
/// Kontrollpunkt wird einmal am Ende angehängt.
///
/// Druck-Formung (velocity-gewichtete Variante): der interpolierte Druck wird
/// über die Länge des Kontroll-Segments gedämpft — schnelle Segmente ergeben
/// einen dünneren Strich — und in `[pressure_floor, pressure_ceiling]`
/// geklemmt.
pub fn smooth_stroke(points: &[StrokePoint], options: &StrokeOptions) -> Vec<StrokePoint> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let n = points.len();
    let steps = options.samples_per_segment.max(1);
    let mut result = Vec::with_capacity((n - 1) * steps + 1);

    for seg in 0..(n - 1) {
        // Randfenster: max(i-1, 0) bzw. min(i+2, n-1)
        let p0 = points[seg.saturating_sub(1)];
        let p1 = points[seg];
        let p2 = points[seg + 1];
        let p3 = points[(seg + 2).min(n - 1)];

        // Segmentlänge der echten Kontrollpunkte schätzt die lokale
        // Strichgeschwindigkeit; längere Segmente dämpfen den Druck stärker
        let segment_length = p1.position.distance(p2.position);
        let velocity_factor = (1.0 - segment_length / options.velocity_reference).max(0.0);

        for i in 0..steps {
            let t = i as f32 / steps as f32;
            let position =
                catmull_rom_point(p0.position, p1.position, p2.position, p3.position, t);
            let base_pressure =
                catmull_rom_scalar(p0.pressure, p1.pressure, p2.pressure, p3.pressure, t);
            let pressure = (base_pressure * (0.5 + 0.5 * velocity_factor))
                .clamp(options.pressure_floor, options.pressure_ceiling);
            result.push(StrokePoint { position, pressure });
        }
    }

    // Endpunkt exakt übernehmen; nur der Druck bleibt in den Klemmgrenzen
    let last = points[n - 1];
    result.push(StrokePoint {
        position: last.position,
        pressure: last
            .pressure
            .clamp(options.pressure_floor, options.pressure_ceiling),
    });

    result
}

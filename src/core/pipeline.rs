//! Die komponierte Stroke-Pipeline: Dezimierung, dann Glättung.

use super::{simplify_stroke, smooth_stroke, StrokePoint};
use crate::shared::StrokeOptions;

/// Verarbeitet einen Rohstrich zur renderfertigen Punktfolge.
///
/// Einzige Operation der Host-Schnittstelle: geordnete Punktfolge rein,
/// geordnete Punktfolge raus. Rein und zustandslos — gleiche Eingabe ergibt
/// immer gleiche Ausgabe; parallele Aufrufe mit disjunkten Eingaben sind
/// ohne Locking sicher. Ob der Host pro finalisiertem Strich oder inkrementell
/// aufruft, ist seine Sache.
pub fn process_stroke(points: &[StrokePoint], options: &StrokeOptions) -> Vec<StrokePoint> {
    let simplified = simplify_stroke(points, options.min_point_distance_sq());
    let smoothed = smooth_stroke(&simplified, options);

    log::debug!(
        "Stroke verarbeitet: {} roh, {} dezimiert, {} geglättet",
        points.len(),
        simplified.len(),
        smoothed.len()
    );

    smoothed
}

#![no_main]

use ink_stroke_engine::{process_stroke, StrokeOptions, StrokePoint};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // 12 Bytes pro Punkt: x, y, pressure als f32 (little-endian).
    // Nicht-endliche und extreme Werte werden verworfen, damit die
    // Spline-Basis nicht überläuft und die Invarianten prüfbar bleiben.
    const COORD_LIMIT: f32 = 1.0e6;

    let points: Vec<StrokePoint> = data
        .chunks_exact(12)
        .map(|c| {
            let x = f32::from_le_bytes([c[0], c[1], c[2], c[3]]);
            let y = f32::from_le_bytes([c[4], c[5], c[6], c[7]]);
            let pressure = f32::from_le_bytes([c[8], c[9], c[10], c[11]]);
            StrokePoint::new(x, y, pressure)
        })
        .filter(|p| {
            p.position.is_finite()
                && p.pressure.is_finite()
                && p.position.abs().max_element() < COORD_LIMIT
                && p.pressure.abs() < COORD_LIMIT
        })
        .collect();

    let options = StrokeOptions::default();
    let output = process_stroke(&points, &options);

    if points.is_empty() {
        assert!(output.is_empty());
    } else {
        assert!(!output.is_empty());
        assert_eq!(output[0].position, points[0].position);
        assert_eq!(
            output.last().unwrap().position,
            points.last().unwrap().position
        );
    }
});

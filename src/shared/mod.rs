//! Layer-neutrale Helfer: Spline-Geometrie und Laufzeit-Optionen.
//!
//! Enthält alles, was von den Pipeline-Stufen in `crate::core` geteilt wird,
//! ohne Zirkel-Abhängigkeiten zu erzeugen.

pub mod options;
pub mod spline_geometry;

pub use options::StrokeOptions;
pub use options::{MIN_POINT_DISTANCE, SAMPLES_PER_SEGMENT};

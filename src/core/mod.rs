//! Core-Domänentypen und Pipeline-Stufen: StrokePoint, Dezimierung, Glättung.

pub mod pipeline;
pub mod point;
pub mod simplify;
pub mod smooth;

pub use pipeline::process_stroke;
pub use point::StrokePoint;
pub use simplify::simplify_stroke;
pub use smooth::smooth_stroke;

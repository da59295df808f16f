//! Ink Stroke Engine Library.
//! Stroke-Verarbeitungs-Kernel als Library exportiert für Hosts und Tests.

pub mod core;
pub mod shared;

pub use core::{process_stroke, simplify_stroke, smooth_stroke, StrokePoint};
pub use shared::StrokeOptions;

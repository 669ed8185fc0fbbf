//! Glyph data for segmented displays
//!
//! Two static fonts:
//! - `segments`: seven-segment on/off patterns for digits
//! - `strokes`: vector polylines for unit and SI-prefix symbols
//!
//! Both are pure lookup tables; geometry and rasterization live under
//! `display`.

pub mod segments;
pub mod strokes;

pub use segments::{segments_for, Segments};
pub use strokes::{strokes_for, Polyline, StrokePoint, SYMBOL_SET};

//! ledcell - segmented LED/LCD display glyphs for character-cell grids
//!
//! Renders the glyph families of a segment panel (seven-segment digits
//! with optional decimal point, colon separators, vector unit symbols)
//! onto terminal-style cell grids of any size.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │          SegmentDisplay (display)        │
//! ├──────────────────────────────────────────┤
//! │  font (segment + stroke tables)          │
//! │             ↓                             │
//! │  geometry (per-kind cell anchors)        │
//! │             ↓                             │
//! │  raster (strokes → 2-wide cell runs)     │
//! │             ↓                             │
//! │  Surface (erase_rect / fill_run)         │
//! └──────────────────────────────────────────┘
//! ```
//!
//! The layout host owns box allocation and the theme: it respects
//! [`SegmentDisplay::min_size`], calls [`SegmentDisplay::reshape`] when a
//! box moves and [`SegmentDisplay::refresh_style`] when colors change.
//! A draw call is then a pure function of the display's cached state.

pub mod config;
pub mod constants;
pub mod display;
pub mod font;
pub mod style;
pub mod surface;
pub mod utils;

pub use display::{parse_digit_and_dot, DisplayKind, KindError, SegmentDisplay};
pub use style::{Paint, PaintAttrs, PaintRole, Palette, StyleProvider};
pub use surface::{BoundingBox, CellSurface, Surface};

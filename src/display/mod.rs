//! Segmented display rendering
//!
//! [`SegmentDisplay`] is one display instance: a kind, the current value,
//! the bounding box the layout host allocated, and caches derived from
//! them (geometry anchors, resolved paint attributes). Drawing never
//! mutates the instance and never recomputes the caches; hosts call
//! [`SegmentDisplay::reshape`] after layout changes and
//! [`SegmentDisplay::refresh_style`] after theme changes.

pub mod geometry;
pub mod raster;

use std::str::FromStr;

use log::{debug, trace};
use smol_str::SmolStr;
use thiserror::Error;

use crate::constants::{DOT_WIDTH, MIN_COLS, MIN_ROWS, SIDE_WIDTH};
use crate::font::segments::{segments_for, Segments};
use crate::font::strokes::strokes_for;
use crate::style::{PaintAttrs, StyleProvider};
use crate::surface::{BoundingBox, Surface};
use geometry::{ColonGeometry, Geometry, SegmentGeometry, SymbolGeometry};

/// Unknown display-kind string at construction time.
///
/// The only fallible display operation. Everything after construction
/// degrades (unknown values render unlit or empty) instead of failing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown display kind {0:?} (expected \"seven\", \"seven_dp\", \"colon\" or \"symb\")")]
pub struct KindError(pub String);

/// The glyph family a display renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    /// Seven-segment digit
    SevenSegment,
    /// Seven-segment digit with a trailing decimal-point mark
    SevenSegmentDot,
    /// Double-dot time separator, always lit
    Colon,
    /// Vector-stroke unit or SI-prefix symbol
    Symbol,
}

impl FromStr for DisplayKind {
    type Err = KindError;

    /// Parse a configuration kind string. Case-exact; the short aliases
    /// `"7"`, `"7."` and `":"` are accepted alongside the long names.
    fn from_str(s: &str) -> Result<Self, KindError> {
        match s {
            "seven" | "7" => Ok(Self::SevenSegment),
            "seven_dp" | "7." => Ok(Self::SevenSegmentDot),
            "colon" | ":" => Ok(Self::Colon),
            "symb" => Ok(Self::Symbol),
            _ => Err(KindError(s.to_string())),
        }
    }
}

/// Split a seven-segment value into its digit and decimal-point parts.
///
/// Accepts at most one ASCII digit followed by at most one trailing `'.'`.
/// A lone `"."` keeps the dot with no digit. Anything else (empty, multi
/// digit, stray characters) yields `(None, false)`, which renders as the
/// all-unlit state rather than an error.
pub fn parse_digit_and_dot(value: &str) -> (Option<u8>, bool) {
    let mut chars = value.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(d), None, _) if d.is_ascii_digit() => (Some(d as u8 - b'0'), false),
        (Some(d), Some('.'), None) if d.is_ascii_digit() => (Some(d as u8 - b'0'), true),
        (Some('.'), None, _) => (None, true),
        _ => (None, false),
    }
}

/// One segmented display instance.
pub struct SegmentDisplay {
    kind: DisplayKind,
    value: SmolStr,
    bounds: BoundingBox,
    /// Anchors derived from `bounds`; replaced by `reshape`, never patched
    geometry: Geometry,
    /// Paint pair resolved from the style provider at construction or on
    /// the last `refresh_style`
    paint: PaintAttrs,
}

impl SegmentDisplay {
    /// Smallest box a layout host may allocate, as `(rows, cols)`.
    ///
    /// Geometry assumes this minimum; hosts own the precondition and the
    /// renderer does not clamp.
    pub const fn min_size() -> (usize, usize) {
        (MIN_ROWS, MIN_COLS)
    }

    pub fn new(
        kind: DisplayKind,
        value: &str,
        bounds: BoundingBox,
        style: &dyn StyleProvider,
    ) -> Self {
        Self {
            kind,
            value: SmolStr::new(value),
            bounds,
            geometry: Geometry::resolve(kind, bounds),
            paint: PaintAttrs::resolve(style),
        }
    }

    /// Build from a configuration kind string (`"seven"`, `"7."`, ...).
    pub fn from_config(
        kind: &str,
        value: &str,
        bounds: BoundingBox,
        style: &dyn StyleProvider,
    ) -> Result<Self, KindError> {
        Ok(Self::new(kind.parse()?, value, bounds, style))
    }

    #[inline]
    pub fn kind(&self) -> DisplayKind {
        self.kind
    }

    #[inline]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    #[inline]
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Replace the displayed value. Geometry and paint caches are
    /// untouched; the host triggers the redraw.
    pub fn set_value(&mut self, value: &str) {
        self.value = SmolStr::new(value);
    }

    /// Recompute geometry for a new bounding box. Must run before the next
    /// draw whenever the host reallocates the box.
    pub fn reshape(&mut self, bounds: BoundingBox) {
        debug!(
            "reshape {:?} to {}x{} at ({},{})",
            self.kind, bounds.rows, bounds.cols, bounds.top, bounds.left
        );
        self.bounds = bounds;
        self.geometry = Geometry::resolve(self.kind, bounds);
    }

    /// Re-resolve the cached paint pair after a host theme change.
    pub fn refresh_style(&mut self, style: &dyn StyleProvider) {
        debug!("refresh style for {:?}", self.kind);
        self.paint = PaintAttrs::resolve(style);
    }

    /// Render into `surface`: erase the box with the unlit paint, then
    /// paint the current value on top.
    ///
    /// Deterministic: equal kind, value, box and paints emit an identical
    /// operation sequence, so hosts may redraw freely.
    pub fn draw(&self, surface: &mut dyn Surface) {
        trace!("draw {:?} value={:?}", self.kind, self.value);
        surface.set_paint(self.paint.unlit);
        surface.erase_rect(self.bounds);
        match &self.geometry {
            Geometry::Segment(geo) => self.draw_digit(geo, surface),
            Geometry::Colon(geo) => self.draw_colon(geo, surface),
            Geometry::Symbol(geo) => self.draw_symbol(geo, surface),
        }
    }

    /// Paint the three bars and four side pairs, each lit or unlit per the
    /// segment state, plus the decimal-point mark on the dot variant.
    /// Unlit regions are painted explicitly so a previous value never
    /// shows through.
    fn draw_digit(&self, geo: &SegmentGeometry, surface: &mut dyn Surface) {
        let (digit, dot) = parse_digit_and_dot(&self.value);
        let state = segments_for(digit);
        let lit = self.paint.lit;
        let unlit = self.paint.unlit;
        let on = |seg: Segments| if state.contains(seg) { lit } else { unlit };

        // Horizontal bars: A top, G middle, D bottom
        surface.fill_run(geo.top_row, geo.band_col, geo.band_width, on(Segments::A));
        surface.fill_run(geo.mid_row, geo.band_col, geo.band_width, on(Segments::G));
        surface.fill_run(geo.bottom_row, geo.band_col, geo.band_width, on(Segments::D));

        // Upper sides on the rows strictly between A and G: F left, B right
        for row in geo.top_row + 1..geo.mid_row {
            surface.fill_run(row, geo.left_col, SIDE_WIDTH, on(Segments::F));
            surface.fill_run(row, geo.right_col, SIDE_WIDTH, on(Segments::B));
        }
        // Lower sides between G and D: E left, C right
        for row in geo.mid_row + 1..geo.bottom_row {
            surface.fill_run(row, geo.left_col, SIDE_WIDTH, on(Segments::E));
            surface.fill_run(row, geo.right_col, SIDE_WIDTH, on(Segments::C));
        }

        if let Some(col) = geo.dot_col {
            let paint = if dot { lit } else { unlit };
            surface.fill_run(geo.bottom_row, col, DOT_WIDTH, paint);
        }
    }

    /// Paint the two colon marks. The glyph is static; the value plays no
    /// part and the marks are always lit.
    fn draw_colon(&self, geo: &ColonGeometry, surface: &mut dyn Surface) {
        surface.fill_run(geo.upper_row, geo.col, DOT_WIDTH, self.paint.lit);
        surface.fill_run(geo.lower_row, geo.col, DOT_WIDTH, self.paint.lit);
    }

    /// Rasterize the symbol strokes for the value, which must be exactly
    /// one character. Unknown glyphs (and multi-character values) have an
    /// empty stroke set and leave the box erased.
    fn draw_symbol(&self, geo: &SymbolGeometry, surface: &mut dyn Surface) {
        let mut chars = self.value.chars();
        let strokes = match (chars.next(), chars.next()) {
            (Some(glyph), None) => strokes_for(glyph),
            _ => &[],
        };
        for &line in strokes {
            raster::stroke_polyline(geo, line, self.paint.lit, surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Palette;

    fn display(kind: DisplayKind, value: &str) -> SegmentDisplay {
        SegmentDisplay::new(
            kind,
            value,
            BoundingBox::new(0, 0, 7, 8),
            &Palette::default(),
        )
    }

    #[test]
    fn test_parse_digit_and_dot() {
        assert_eq!(parse_digit_and_dot(""), (None, false));
        assert_eq!(parse_digit_and_dot("0"), (Some(0), false));
        assert_eq!(parse_digit_and_dot("5"), (Some(5), false));
        assert_eq!(parse_digit_and_dot("9."), (Some(9), true));
        assert_eq!(parse_digit_and_dot("."), (None, true));
        assert_eq!(parse_digit_and_dot("12"), (None, false));
        assert_eq!(parse_digit_and_dot(".5"), (None, false));
        assert_eq!(parse_digit_and_dot("5x"), (None, false));
        assert_eq!(parse_digit_and_dot("5.x"), (None, false));
        assert_eq!(parse_digit_and_dot("x"), (None, false));
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("seven".parse(), Ok(DisplayKind::SevenSegment));
        assert_eq!("seven_dp".parse(), Ok(DisplayKind::SevenSegmentDot));
        assert_eq!("colon".parse(), Ok(DisplayKind::Colon));
        assert_eq!("symb".parse(), Ok(DisplayKind::Symbol));
        // Short aliases
        assert_eq!("7".parse(), Ok(DisplayKind::SevenSegment));
        assert_eq!("7.".parse(), Ok(DisplayKind::SevenSegmentDot));
        assert_eq!(":".parse(), Ok(DisplayKind::Colon));
    }

    #[test]
    fn test_kind_from_str_is_case_exact() {
        assert!("SEVEN".parse::<DisplayKind>().is_err());
        assert!("Seven".parse::<DisplayKind>().is_err());
        assert!("SYMB".parse::<DisplayKind>().is_err());
        assert!("".parse::<DisplayKind>().is_err());
        assert!("eight".parse::<DisplayKind>().is_err());
    }

    #[test]
    fn test_kind_error_display() {
        let err = "blink".parse::<DisplayKind>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown display kind \"blink\" (expected \"seven\", \"seven_dp\", \"colon\" or \"symb\")"
        );
    }

    #[test]
    fn test_from_config_parses_kind() {
        let palette = Palette::default();
        let bounds = BoundingBox::new(0, 0, 7, 8);
        let display = SegmentDisplay::from_config("7.", "3.", bounds, &palette).unwrap();
        assert_eq!(display.kind(), DisplayKind::SevenSegmentDot);
        assert_eq!(display.value(), "3.");
        assert!(SegmentDisplay::from_config("nixie", "0", bounds, &palette).is_err());
    }

    #[test]
    fn test_set_value_keeps_geometry() {
        let mut d = display(DisplayKind::SevenSegment, "1");
        let before = d.geometry;
        d.set_value("8");
        assert_eq!(d.geometry, before);
        assert_eq!(d.value(), "8");
    }

    #[test]
    fn test_reshape_recomputes_geometry() {
        let mut d = display(DisplayKind::SevenSegment, "1");
        let before = d.geometry;
        d.reshape(BoundingBox::new(2, 3, 9, 12));
        assert_ne!(d.geometry, before);
        assert_eq!(d.bounds(), BoundingBox::new(2, 3, 9, 12));
    }

    #[test]
    fn test_refresh_style_swaps_paint() {
        use crate::utils::color::Rgb;
        let mut d = display(DisplayKind::Colon, "");
        let before = d.paint;
        d.refresh_style(&Palette::new(Rgb::new(255, 0, 0), Rgb::new(40, 0, 0)));
        assert_ne!(d.paint, before);
    }
}

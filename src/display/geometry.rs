//! Display geometry
//!
//! Derives the integer cell anchors a draw pass paints from. Anchors are
//! recomputed from scratch on every reshape and cached by the display;
//! nothing in this module touches a surface.
//!
//! All arithmetic is integer. Half-cell positions (middle bar, colon
//! offsets) are expressed as scaled fractions so the truncation point is
//! explicit instead of hidden in float rounding.

use crate::constants::{BAND_INSET, DOT_WIDTH, SIDE_WIDTH};
use crate::display::DisplayKind;
use crate::surface::BoundingBox;

/// Anchors for the seven-segment bars and sides.
///
/// Rows and columns are absolute surface coordinates; the box offsets are
/// already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentGeometry {
    /// First column of the A/G/D bar band
    pub band_col: usize,
    /// Width of the bar band in cells
    pub band_width: usize,
    /// Left column of the F/E side pair
    pub left_col: usize,
    /// Left column of the B/C side pair
    pub right_col: usize,
    /// Row of the A bar
    pub top_row: usize,
    /// Row of the G bar
    pub mid_row: usize,
    /// Row of the D bar
    pub bottom_row: usize,
    /// First column of the decimal-point mark (dot variant only)
    pub dot_col: Option<usize>,
}

/// Anchors for the two colon marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColonGeometry {
    /// First column of both marks
    pub col: usize,
    /// Row of the upper mark
    pub upper_row: usize,
    /// Row of the lower mark
    pub lower_row: usize,
}

/// Scale and centering anchors for vector symbol strokes.
///
/// `row_span`/`col_span` are exact integer scale numerators: stroke space
/// runs 0..=100, so a normalized coordinate `v` maps to `v * span / 100`
/// cells. Keeping the integer numerator (instead of a precomputed float
/// ratio) lets the rasterizer multiply before dividing, so a point that
/// lands exactly on a grid line comes out with a zero fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolGeometry {
    /// Top row of the box (absolute)
    pub top: usize,
    /// Left column of the box (absolute)
    pub left: usize,
    /// Center row, box-relative; rounding spreads away from it
    pub center_row: usize,
    /// Center column, box-relative
    pub center_col: usize,
    /// Rows covered by the full stroke space (rows - 1)
    pub row_span: usize,
    /// Columns covered by the full stroke space (cols - 2)
    pub col_span: usize,
}

/// Per-kind anchor record.
///
/// Resolution is pure: equal kind and box always produce equal anchors, so
/// a cached value never needs patching, only replacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Segment(SegmentGeometry),
    Colon(ColonGeometry),
    Symbol(SymbolGeometry),
}

impl Geometry {
    /// Resolve the anchors for `kind` inside `bounds`.
    ///
    /// Defined for any box at or above the declared minimum
    /// ([`crate::constants::MIN_ROWS`] x [`crate::constants::MIN_COLS`]);
    /// smaller boxes are a layout-host bug, not a recoverable input.
    pub fn resolve(kind: DisplayKind, bounds: BoundingBox) -> Geometry {
        match kind {
            DisplayKind::SevenSegment => Geometry::Segment(segment_anchors(bounds, false)),
            DisplayKind::SevenSegmentDot => Geometry::Segment(segment_anchors(bounds, true)),
            DisplayKind::Colon => Geometry::Colon(colon_anchors(bounds)),
            DisplayKind::Symbol => Geometry::Symbol(symbol_anchors(bounds)),
        }
    }
}

fn segment_anchors(bounds: BoundingBox, dot: bool) -> SegmentGeometry {
    // The dot variant reserves the rightmost DOT_WIDTH columns for the
    // point and lays the digit out in what is left.
    let cols = if dot { bounds.cols - DOT_WIDTH } else { bounds.cols };

    SegmentGeometry {
        band_col: bounds.left + BAND_INSET,
        band_width: cols - 2 * BAND_INSET,
        left_col: bounds.left,
        right_col: bounds.left + cols - SIDE_WIDTH,
        top_row: bounds.top,
        // (2*rows - 1) / 4 truncates (rows - 0.5) / 2: on even heights the
        // middle bar takes the upper of the two center candidates
        mid_row: bounds.top + (2 * bounds.rows - 1) / 4,
        bottom_row: bounds.bottom(),
        dot_col: if dot { Some(bounds.left + cols) } else { None },
    }
}

fn colon_anchors(bounds: BoundingBox) -> ColonGeometry {
    // Marks sit a quarter of the height in from each end, measured with
    // the same half-cell bias as the middle bar: (2*rows - 1) / 8
    // truncates (rows - 0.5) / 4.
    let inset = (2 * bounds.rows - 1) / 8;

    ColonGeometry {
        col: bounds.left + BAND_INSET + (bounds.cols - 2 * BAND_INSET) / 2,
        upper_row: bounds.top + inset,
        lower_row: bounds.bottom() - inset,
    }
}

fn symbol_anchors(bounds: BoundingBox) -> SymbolGeometry {
    SymbolGeometry {
        top: bounds.top,
        left: bounds.left,
        center_row: (bounds.rows - 1) / 2,
        center_col: (bounds.cols - 2) / 2,
        row_span: bounds.rows - 1,
        // Strokes are painted 2 cells wide, so the rightmost anchor
        // column is cols - 2, not cols - 1
        col_span: bounds.cols - 2,
    }
}

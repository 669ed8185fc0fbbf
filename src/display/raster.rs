//! Stroke rasterization
//!
//! Converts normalized-space polylines into horizontal cell runs on a
//! [`Surface`]. Cells are roughly twice as tall as wide, so every run is
//! [`STROKE_WIDTH`] (2) columns and vertical movement advances one row at
//! a time; that keeps stroke weight even in both directions.
//!
//! Rounding spreads away from the glyph center rather than in a fixed
//! direction. Rounding every coordinate the same way would shift whole
//! glyphs off-center in small boxes, which is exactly where these shapes
//! are hardest to read.

use crate::constants::{STROKE_SPAN, STROKE_WIDTH};
use crate::display::geometry::SymbolGeometry;
use crate::font::strokes::StrokePoint;
use crate::style::Paint;
use crate::surface::Surface;

/// Scale one normalized coordinate onto a grid axis.
///
/// Multiplies by the integer span before dividing, so a coordinate that
/// lands exactly on a grid line (e.g. 50 of 100 over an even span) comes
/// out with a zero fraction instead of an accumulated float error.
#[inline]
fn scale(value: u8, span: usize) -> f64 {
    (value as usize * span) as f64 / STROKE_SPAN as f64
}

/// Round a scaled coordinate, spreading away from the glyph center.
///
/// Exact cell positions stay put. Fractional positions round up only when
/// strictly past the center anchor; at or below it they truncate toward
/// zero. The two halves of a symmetric glyph therefore widen outward by
/// the same amount.
#[inline]
fn round_from_center(value: f64, center: usize) -> usize {
    // value is never negative: inputs are 0..=100 scaled by a usize span
    let cell = value as usize;
    if value.fract() != 0.0 && value > center as f64 {
        cell + 1
    } else {
        cell
    }
}

/// Rasterize one polyline: scale and round each point, then paint every
/// consecutive pair as a straight stroke.
pub fn stroke_polyline(
    geo: &SymbolGeometry,
    line: &[StrokePoint],
    paint: Paint,
    surface: &mut dyn Surface,
) {
    let points: Vec<(usize, usize)> = line
        .iter()
        .map(|p| {
            (
                round_from_center(scale(p.y, geo.row_span), geo.center_row),
                round_from_center(scale(p.x, geo.col_span), geo.center_col),
            )
        })
        .collect();

    for pair in points.windows(2) {
        stroke_segment(geo, pair[0], pair[1], paint, surface);
    }
}

/// Paint one straight stroke between two rounded box-relative points.
fn stroke_segment(
    geo: &SymbolGeometry,
    (r0, c0): (usize, usize),
    (r1, c1): (usize, usize),
    paint: Paint,
    surface: &mut dyn Surface,
) {
    if r0 == r1 {
        // Horizontal: one run over the inclusive column span, widened by
        // one trailing cell so the end carries the same 2-cell weight as
        // every other sample
        let col = c0.min(c1);
        surface.fill_run(
            geo.top + r0,
            geo.left + col,
            c0.abs_diff(c1) + STROKE_WIDTH,
            paint,
        );
    } else if c0 == c1 {
        // Vertical: a 2-wide run on every row, endpoints inclusive
        for row in r0.min(r1)..=r0.max(r1) {
            surface.fill_run(geo.top + row, geo.left + c0, STROKE_WIDTH, paint);
        }
    } else {
        diagonal(geo, (r0, c0), (r1, c1), paint, surface);
    }
}

/// Integer error-accumulator walk for diagonal strokes.
///
/// Steps the longer axis one cell at a time from start to end inclusive,
/// painting a 2-wide run at each step; the shorter axis advances whenever
/// the accumulated error reaches the major span. Both endpoints are always
/// painted and the walk finishes exactly on the end cell. Equal spans walk
/// row-major.
fn diagonal(
    geo: &SymbolGeometry,
    (r0, c0): (usize, usize),
    (r1, c1): (usize, usize),
    paint: Paint,
    surface: &mut dyn Surface,
) {
    let dr = r0.abs_diff(r1);
    let dc = c0.abs_diff(c1);
    let row_step: isize = if r1 >= r0 { 1 } else { -1 };
    let col_step: isize = if c1 >= c0 { 1 } else { -1 };

    if dr >= dc {
        let mut row = r0 as isize;
        let mut col = c0 as isize;
        let mut err = 0;
        for _ in 0..=dr {
            surface.fill_run(
                geo.top + row as usize,
                geo.left + col as usize,
                STROKE_WIDTH,
                paint,
            );
            err += dc;
            if err >= dr {
                err -= dr;
                col += col_step;
            }
            row += row_step;
        }
    } else {
        let mut row = r0 as isize;
        let mut col = c0 as isize;
        let mut err = 0;
        for _ in 0..=dc {
            surface.fill_run(
                geo.top + row as usize,
                geo.left + col as usize,
                STROKE_WIDTH,
                paint,
            );
            err += dr;
            if err >= dc {
                err -= dc;
                row += row_step;
            }
            col += col_step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::CellSurface;
    use crate::utils::color::Rgb;

    const LIT: Paint = Paint::new(Rgb::new(255, 255, 255));
    const BG: Paint = Paint::new(Rgb::new(0, 0, 0));

    fn geo(rows: usize, cols: usize) -> SymbolGeometry {
        SymbolGeometry {
            top: 0,
            left: 0,
            center_row: (rows - 1) / 2,
            center_col: (cols - 2) / 2,
            row_span: rows - 1,
            col_span: cols - 2,
        }
    }

    fn lit_cells(surface: &CellSurface) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for row in 0..surface.rows() {
            for col in 0..surface.cols() {
                if surface.cell(row, col) == LIT {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    #[test]
    fn test_scale_exact_points_have_zero_fraction() {
        assert_eq!(scale(100, 7), 7.0);
        assert_eq!(scale(50, 8), 4.0);
        assert_eq!(scale(0, 13), 0.0);
        assert_eq!(scale(25, 4), 1.0);
    }

    #[test]
    fn test_round_from_center() {
        // Exact positions never move
        assert_eq!(round_from_center(4.0, 2), 4);
        assert_eq!(round_from_center(0.0, 4), 0);
        assert_eq!(round_from_center(4.0, 4), 4);
        // Fractional below the center truncates
        assert_eq!(round_from_center(1.75, 4), 1);
        assert_eq!(round_from_center(3.99, 4), 3);
        // Fractional past the center rounds up
        assert_eq!(round_from_center(4.5, 4), 5);
        assert_eq!(round_from_center(6.25, 4), 7);
    }

    #[test]
    fn test_horizontal_stroke_is_one_widened_run() {
        let mut surface = CellSurface::new(5, 10, BG);
        // (20,0)-(80,0) over col_span 8: cols 1.6 -> 1, 6.4 -> 7 (center 4)
        let line: &[StrokePoint] = &[StrokePoint { x: 20, y: 0 }, StrokePoint { x: 80, y: 0 }];
        stroke_polyline(&geo(5, 10), line, LIT, &mut surface);
        let cells = lit_cells(&surface);
        // Inclusive span 1..=7 plus the widening cell = 8 cells on row 0
        assert_eq!(cells, (1..=8).map(|c| (0, c)).collect::<Vec<_>>());
    }

    #[test]
    fn test_vertical_stroke_paints_every_row() {
        let mut surface = CellSurface::new(5, 10, BG);
        let line: &[StrokePoint] = &[StrokePoint { x: 0, y: 0 }, StrokePoint { x: 0, y: 100 }];
        stroke_polyline(&geo(5, 10), line, LIT, &mut surface);
        let cells = lit_cells(&surface);
        assert_eq!(
            cells,
            (0..5).flat_map(|r| [(r, 0), (r, 1)]).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_diagonal_endpoints_are_painted() {
        let mut surface = CellSurface::new(9, 10, BG);
        // (0,0) -> (100,50): rows 0 -> 8, cols 0 -> 4, row-major walk
        let line: &[StrokePoint] = &[StrokePoint { x: 0, y: 0 }, StrokePoint { x: 50, y: 100 }];
        stroke_polyline(&geo(9, 10), line, LIT, &mut surface);
        let cells = lit_cells(&surface);
        assert!(cells.contains(&(0, 0)));
        assert!(cells.contains(&(8, 4)));
        assert!(cells.contains(&(8, 5)));
        // One 2-wide run per row, no more
        assert_eq!(cells.len(), 9 * 2);
        // Column drift is monotone toward the endpoint
        for rows in cells.chunks(2).collect::<Vec<_>>().windows(2) {
            assert!(rows[1][0].1 >= rows[0][0].1);
        }
    }

    #[test]
    fn test_shallow_diagonal_walks_column_major() {
        let mut surface = CellSurface::new(5, 12, BG);
        // (0,0) -> (100,50): rows 0 -> 2, cols 0 -> 10, col-major walk
        let line: &[StrokePoint] = &[StrokePoint { x: 0, y: 0 }, StrokePoint { x: 100, y: 50 }];
        stroke_polyline(&geo(5, 12), line, LIT, &mut surface);
        let cells = lit_cells(&surface);
        assert!(cells.contains(&(0, 0)));
        assert!(cells.contains(&(2, 10)));
        assert!(cells.contains(&(2, 11)));
        // Adjacent 2-wide runs overlap by one cell within a row:
        // cols 0..=5 on row 0, 5..=10 on row 1, 10..=11 on row 2
        assert_eq!(cells.len(), 6 + 6 + 2);
        assert!(!cells.contains(&(0, 6)));
        assert!(!cells.contains(&(1, 4)));
    }

    #[test]
    fn test_equal_span_diagonal_ends_on_endpoint() {
        let mut surface = CellSurface::new(5, 6, BG);
        // rows 0 -> 4 and cols 0 -> 4: ties walk row-major
        let line: &[StrokePoint] = &[StrokePoint { x: 0, y: 0 }, StrokePoint { x: 100, y: 100 }];
        stroke_polyline(&geo(5, 6), line, LIT, &mut surface);
        let cells = lit_cells(&surface);
        assert!(cells.contains(&(0, 0)));
        assert!(cells.contains(&(4, 4)));
        assert_eq!(cells.len(), 5 * 2);
    }
}

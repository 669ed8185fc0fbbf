//! Cell surface
//!
//! 2D cell array that backs display rendering, plus the [`Surface`] trait
//! displays paint through. A display never owns cells; the host hands it a
//! [`BoundingBox`] inside some surface and the display fills runs there.

use crate::style::Paint;

/// Rectangular cell region allocated to one display by the layout host.
///
/// `top`/`left` are absolute surface coordinates; `rows`/`cols` must be at
/// least the display minimum ([`crate::constants::MIN_ROWS`] x
/// [`crate::constants::MIN_COLS`]). Allocating smaller boxes is a host bug;
/// geometry math assumes the minimum holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Topmost row of the box
    pub top: usize,
    /// Leftmost column of the box
    pub left: usize,
    /// Height in rows (>= 1)
    pub rows: usize,
    /// Width in columns (>= 1)
    pub cols: usize,
}

impl BoundingBox {
    pub const fn new(top: usize, left: usize, rows: usize, cols: usize) -> Self {
        Self { top, left, rows, cols }
    }

    /// Last row inside the box.
    #[inline]
    pub fn bottom(&self) -> usize {
        self.top + self.rows - 1
    }
}

/// Paint sink for display rendering.
///
/// Implementations keep a current default paint (set via [`set_paint`])
/// used by erases; explicit runs carry their own paint. Coordinates are
/// absolute surface cells.
///
/// [`set_paint`]: Surface::set_paint
pub trait Surface {
    /// Set the default paint used by subsequent erases.
    fn set_paint(&mut self, paint: Paint);

    /// Fill every cell of `area` with the current default paint.
    fn erase_rect(&mut self, area: BoundingBox);

    /// Paint a horizontal run of `width` cells starting at (`row`, `col`).
    ///
    /// Runs are clipped to the surface; a zero `width` is a no-op. Callers
    /// rely on this when stroke runs poke past a box edge.
    fn fill_run(&mut self, row: usize, col: usize, width: usize, paint: Paint);
}

/// In-memory cell grid.
///
/// Row-major `Vec` storage, `row * cols + col` indexing. This is the
/// reference surface used by the demo binary and the tests; embedders with
/// their own framebuffers implement [`Surface`] directly.
pub struct CellSurface {
    cells: Vec<Paint>,
    cols: usize,
    rows: usize,
    default_paint: Paint,
}

impl CellSurface {
    /// Create a surface filled with `background`, which also becomes the
    /// initial default paint.
    pub fn new(rows: usize, cols: usize, background: Paint) -> Self {
        Self {
            cells: vec![background; cols * rows],
            cols,
            rows,
            default_paint: background,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the paint at a cell. Panics if out of range.
    pub fn cell(&self, row: usize, col: usize) -> Paint {
        self.cells[row * self.cols + col]
    }

    /// Fill the whole surface with `paint`.
    pub fn reset(&mut self, paint: Paint) {
        self.cells.fill(paint);
    }

    /// Resize the grid, keeping the overlapping area. New cells take the
    /// current default paint.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        if rows == self.rows && cols == self.cols {
            return;
        }

        let mut new_cells = vec![self.default_paint; cols * rows];

        // Copy existing cells (only common area)
        let copy_rows = self.rows.min(rows);
        let copy_cols = self.cols.min(cols);
        for row in 0..copy_rows {
            let src_start = row * self.cols;
            let dst_start = row * cols;
            new_cells[dst_start..dst_start + copy_cols]
                .copy_from_slice(&self.cells[src_start..src_start + copy_cols]);
        }

        self.cells = new_cells;
        self.cols = cols;
        self.rows = rows;
    }
}

impl Surface for CellSurface {
    fn set_paint(&mut self, paint: Paint) {
        self.default_paint = paint;
    }

    fn erase_rect(&mut self, area: BoundingBox) {
        let paint = self.default_paint;
        for row in area.top..area.top + area.rows {
            self.fill_run(row, area.left, area.cols, paint);
        }
    }

    fn fill_run(&mut self, row: usize, col: usize, width: usize, paint: Paint) {
        if row >= self.rows || col >= self.cols {
            return;
        }
        let end = (col + width).min(self.cols);
        for c in col..end {
            self.cells[row * self.cols + c] = paint;
        }
    }
}

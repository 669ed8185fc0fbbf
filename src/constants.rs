//! Global constants for ledcell
//!
//! Consolidates grid-geometry and stroke-space constants
//! to eliminate magic numbers throughout the codebase.

// ============================================================================
// Layout Minimums
// ============================================================================

/// Minimum bounding-box height in rows.
/// Three bar rows plus one row for each side band between them.
pub const MIN_ROWS: usize = 5;

/// Minimum bounding-box width in columns.
/// Two side pairs plus at least two columns of bar band.
pub const MIN_COLS: usize = 6;

// ============================================================================
// Segment Metrics (cells)
// ============================================================================

/// Width of a vertical segment pair (F/B/E/C)
pub const SIDE_WIDTH: usize = 2;

/// Columns reserved on each side of the horizontal bar band
pub const BAND_INSET: usize = 2;

/// Width of point-like marks (decimal point, colon dots)
pub const DOT_WIDTH: usize = 2;

// ============================================================================
// Stroke Space
// ============================================================================

/// Upper bound of the normalized stroke coordinate space (0..=100)
pub const STROKE_SPAN: usize = 100;

/// Width of a rasterized stroke run in cells.
/// Cells are roughly twice as tall as wide; 2-column runs keep stroke
/// weight even between horizontal and vertical directions.
pub const STROKE_WIDTH: usize = 2;

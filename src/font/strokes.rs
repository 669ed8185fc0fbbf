//! Vector symbol font
//!
//! Unit letters and SI prefixes as polylines in a normalized 0..=100
//! coordinate space (x right, y down). The rasterizer scales a glyph onto
//! whatever cell box the host allocated, so one table serves every display
//! size. Shapes are deliberately chunky: they have to survive landing on a
//! dozen cells.

/// One point of a stroke polyline, in normalized glyph space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokePoint {
    pub x: u8,
    pub y: u8,
}

/// Ordered points connected pen-down. At least two points per line.
pub type Polyline = &'static [StrokePoint];

const fn pt(x: u8, y: u8) -> StrokePoint {
    StrokePoint { x, y }
}

// ============================================================================
// Glyph Tables
// ============================================================================

const VOLT: &[Polyline] = &[
    // Two strokes meeting at bottom-center
    &[pt(0, 0), pt(50, 100), pt(100, 0)],
];

const AMPERE: &[Polyline] = &[
    &[pt(0, 100), pt(50, 0), pt(100, 100)],
    &[pt(20, 60), pt(80, 60)],
];

const WATT: &[Polyline] = &[
    &[pt(0, 0), pt(20, 100), pt(50, 40), pt(80, 100), pt(100, 0)],
];

const OHM: &[Polyline] = &[
    // Feet out, shoulders in
    &[
        pt(0, 100),
        pt(30, 100),
        pt(30, 75),
        pt(10, 55),
        pt(10, 20),
        pt(30, 0),
        pt(70, 0),
        pt(90, 20),
        pt(90, 55),
        pt(70, 75),
        pt(70, 100),
        pt(100, 100),
    ],
];

const FARAD: &[Polyline] = &[
    &[pt(0, 100), pt(0, 0), pt(100, 0)],
    &[pt(0, 50), pt(70, 50)],
];

const HENRY: &[Polyline] = &[
    &[pt(0, 0), pt(0, 100)],
    &[pt(100, 0), pt(100, 100)],
    &[pt(0, 50), pt(100, 50)],
];

const PERCENT: &[Polyline] = &[
    &[pt(0, 100), pt(100, 0)],
    &[pt(0, 0), pt(30, 0), pt(30, 30), pt(0, 30), pt(0, 0)],
    &[pt(70, 70), pt(100, 70), pt(100, 100), pt(70, 100), pt(70, 70)],
];

const DEGREE: &[Polyline] = &[
    &[pt(30, 0), pt(70, 0), pt(70, 30), pt(30, 30), pt(30, 0)],
];

const PICO: &[Polyline] = &[
    // Descender stem plus bowl
    &[pt(0, 30), pt(0, 100)],
    &[pt(0, 30), pt(60, 30), pt(75, 40), pt(75, 55), pt(60, 65), pt(0, 65)],
];

const NANO: &[Polyline] = &[
    &[pt(0, 100), pt(0, 30)],
    &[pt(0, 45), pt(25, 30), pt(60, 30), pt(75, 45), pt(75, 100)],
];

const MICRO: &[Polyline] = &[
    // Left stem descends below the bowl
    &[pt(0, 30), pt(0, 100)],
    &[pt(0, 70), pt(15, 85), pt(55, 85), pt(75, 70)],
    &[pt(75, 30), pt(75, 85)],
];

const MILLI: &[Polyline] = &[
    &[pt(0, 100), pt(0, 30)],
    &[pt(0, 45), pt(20, 30), pt(45, 45), pt(45, 100)],
    &[pt(45, 45), pt(70, 30), pt(95, 45), pt(95, 100)],
];

const KILO: &[Polyline] = &[
    &[pt(15, 0), pt(15, 100)],
    &[pt(85, 30), pt(15, 65), pt(85, 100)],
];

const MEGA: &[Polyline] = &[
    &[pt(0, 100), pt(0, 0), pt(50, 55), pt(100, 0), pt(100, 100)],
];

const GIGA: &[Polyline] = &[
    &[
        pt(90, 20),
        pt(70, 0),
        pt(30, 0),
        pt(10, 20),
        pt(10, 80),
        pt(30, 100),
        pt(70, 100),
        pt(90, 80),
        pt(90, 55),
        pt(55, 55),
    ],
];

/// Characters the symbol font defines, in display order.
pub const SYMBOL_SET: &[char] = &[
    'V', 'A', 'W', 'Ω', 'F', 'H', '%', '°', 'p', 'n', 'µ', 'm', 'k', 'M', 'G',
];

/// Stroke set for a glyph. Empty for characters outside the symbol font;
/// the display renders nothing for those (the box stays erased).
pub fn strokes_for(glyph: char) -> &'static [Polyline] {
    match glyph {
        'V' => VOLT,
        'A' => AMPERE,
        'W' => WATT,
        'Ω' => OHM,
        'F' => FARAD,
        'H' => HENRY,
        '%' => PERCENT,
        '°' => DEGREE,
        'p' => PICO,
        'n' => NANO,
        'µ' => MICRO,
        'm' => MILLI,
        'k' => KILO,
        'M' => MEGA,
        'G' => GIGA,
        _ => &[],
    }
}

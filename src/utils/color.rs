//! Color parsing utilities
//!
//! Consolidates hex color parsing shared by the config layer and the
//! ANSI output path.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Parse 6-digit hex color (e.g., "ff0000" -> Rgb(255, 0, 0))
/// Also supports 3-digit short format (e.g., "f00" -> Rgb(255, 0, 0))
/// Returns None on invalid input.
pub fn parse_hex_color(hex: &str) -> Option<Rgb> {
    let hex = hex.trim_start_matches('#');
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Rgb::new(r, g, b))
        }
        3 => {
            // Short format: expand F -> FF
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

/// Parse hex color with a fallback for invalid input.
/// Config values go through this so a typo degrades to the default
/// instead of failing the whole load.
pub fn parse_hex_or(hex: &str, fallback: Rgb) -> Rgb {
    parse_hex_color(hex).unwrap_or(fallback)
}

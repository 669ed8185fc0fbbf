//! ledcell - segmented LED/LCD panel in your terminal
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │   text ("3.3 kV") → one display / char   │
//! ├──────────────────────────────────────────┤
//! │  SegmentDisplay  →  paint runs           │
//! │                          ↓               │
//! │              CellSurface (grid)          │
//! │                          ↓               │
//! │              ANSI truecolor stdout       │
//! └──────────────────────────────────────────┘
//! ```
//!
//! Digits render as seven-segment displays, a `'.'` merges into the
//! preceding digit as its decimal point, `':'` renders the colon glyph and
//! everything else is looked up in the vector symbol font.

use std::io::{self, Write};

use anyhow::Result;
use log::info;

use ledcell::config::Config;
use ledcell::display::{DisplayKind, SegmentDisplay};
use ledcell::font::strokes::SYMBOL_SET;
use ledcell::style::Paint;
use ledcell::surface::{BoundingBox, CellSurface};

/// One laid-out display cell of the panel.
#[derive(Debug, PartialEq, Eq)]
struct PanelCell {
    kind: DisplayKind,
    value: String,
}

impl PanelCell {
    fn new(kind: DisplayKind, value: impl Into<String>) -> Self {
        Self { kind, value: value.into() }
    }
}

/// Split input text into display cells.
///
/// A `'.'` directly after a plain digit cell upgrades that cell to the
/// decimal-point kind instead of taking its own box (the usual LED panel
/// trick). A `'.'` anywhere else gets a dot-only cell.
fn layout_text(text: &str) -> Vec<PanelCell> {
    let mut cells: Vec<PanelCell> = Vec::new();
    for ch in text.chars() {
        if ch == '.' {
            if let Some(prev) = cells.last_mut() {
                if prev.kind == DisplayKind::SevenSegment {
                    prev.kind = DisplayKind::SevenSegmentDot;
                    prev.value.push('.');
                    continue;
                }
            }
            cells.push(PanelCell::new(DisplayKind::SevenSegmentDot, "."));
        } else if ch.is_ascii_digit() {
            cells.push(PanelCell::new(DisplayKind::SevenSegment, ch));
        } else if ch == ':' {
            cells.push(PanelCell::new(DisplayKind::Colon, ""));
        } else {
            // Unknown symbols (including plain spaces) render as a blank box
            cells.push(PanelCell::new(DisplayKind::Symbol, ch));
        }
    }
    cells
}

/// Write the surface as ANSI truecolor cells, one space per cell.
fn render_ansi(surface: &CellSurface, out: &mut impl Write) -> io::Result<()> {
    for row in 0..surface.rows() {
        for col in 0..surface.cols() {
            let rgb = surface.cell(row, col).rgb();
            write!(out, "\x1b[48;2;{};{};{}m ", rgb.r, rgb.g, rgb.b)?;
        }
        writeln!(out, "\x1b[0m")?;
    }
    Ok(())
}

/// Print help message
fn print_help() {
    println!(
        r#"ledcell {} - segmented LED/LCD panel in your terminal

USAGE:
    ledcell [OPTIONS] [TEXT]

OPTIONS:
    -h, --help       Print this help message
    -V, --version    Print version information
    --list-symbols   List the characters the symbol font defines

TEXT:
    Rendered one display per character. Digits become seven-segment
    displays, '.' merges into the preceding digit as its decimal point,
    ':' becomes a colon separator, anything else is looked up in the
    symbol font (unknown characters render as a blank box).

EXAMPLES:
    ledcell 12:30          Clock-style panel
    ledcell "3.3 kV"       Reading with decimal point and unit
    ledcell "100 µF"       SI prefixes from the symbol font

CONFIG FILE:
    ~/.config/ledcell/config.toml (colors, cell box size, gap)
"#,
        env!("CARGO_PKG_VERSION")
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Check command line arguments
    let args: Vec<String> = std::env::args().collect();

    // --help
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    // --version
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("ledcell {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // --list-symbols
    if args.iter().any(|a| a == "--list-symbols") {
        let symbols: Vec<String> = SYMBOL_SET.iter().map(|c| c.to_string()).collect();
        println!("{}", symbols.join(" "));
        return Ok(());
    }

    // Positional args joined with spaces; spaces render as blank boxes
    let text = args[1..]
        .iter()
        .filter(|a| !a.starts_with('-'))
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
    let text = if text.is_empty() { "3.3 kV".to_string() } else { text };

    let config = Config::load();
    let palette = config.appearance.palette();
    let (rows, cols) = config.cell.clamped();
    let gap = config.cell.gap;

    let cells = layout_text(&text);
    info!("rendering {} displays for {:?}", cells.len(), text);

    // One shared surface wide enough for every display plus gaps
    let width = cells.len() * cols + cells.len().saturating_sub(1) * gap;
    let background = Paint::new(config.appearance.background_rgb());
    let mut surface = CellSurface::new(rows, width, background);

    let mut left = 0;
    for cell in &cells {
        let bounds = BoundingBox::new(0, left, rows, cols);
        let display = SegmentDisplay::new(cell.kind, &cell.value, bounds, &palette);
        display.draw(&mut surface);
        left += cols + gap;
    }

    render_ansi(&surface, &mut io::stdout().lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_merges_dot_into_digit() {
        let cells = layout_text("3.3");
        assert_eq!(
            cells,
            vec![
                PanelCell::new(DisplayKind::SevenSegmentDot, "3."),
                PanelCell::new(DisplayKind::SevenSegment, "3"),
            ]
        );
    }

    #[test]
    fn test_layout_lone_dot_gets_own_cell() {
        let cells = layout_text(".5");
        assert_eq!(
            cells,
            vec![
                PanelCell::new(DisplayKind::SevenSegmentDot, "."),
                PanelCell::new(DisplayKind::SevenSegment, "5"),
            ]
        );
    }

    #[test]
    fn test_layout_dot_never_merges_twice() {
        let cells = layout_text("1..");
        assert_eq!(
            cells,
            vec![
                PanelCell::new(DisplayKind::SevenSegmentDot, "1."),
                PanelCell::new(DisplayKind::SevenSegmentDot, "."),
            ]
        );
    }

    #[test]
    fn test_layout_mixed_text() {
        let cells = layout_text("1:2 µ");
        assert_eq!(
            cells,
            vec![
                PanelCell::new(DisplayKind::SevenSegment, "1"),
                PanelCell::new(DisplayKind::Colon, ""),
                PanelCell::new(DisplayKind::SevenSegment, "2"),
                PanelCell::new(DisplayKind::Symbol, " "),
                PanelCell::new(DisplayKind::Symbol, "µ"),
            ]
        );
    }
}

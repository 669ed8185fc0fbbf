//! Utility functions shared across ledcell
//!
//! Common helpers that don't fit in specialized modules.

pub mod color;

pub use color::{parse_hex_color, parse_hex_or, Rgb};

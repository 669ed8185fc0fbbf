//! Seven-segment digit font
//!
//! Canonical segment naming, top bar clockwise, middle last:
//!
//! ```text
//!      AAAA
//!     F    B
//!     F    B
//!      GGGG
//!     E    C
//!     E    C
//!      DDDD
//! ```

use bitflags::bitflags;

bitflags! {
    /// On/off state of the seven segments of one digit
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Segments: u8 {
        /// Top bar
        const A = 0b000_0001;
        /// Upper-right vertical
        const B = 0b000_0010;
        /// Lower-right vertical
        const C = 0b000_0100;
        /// Bottom bar
        const D = 0b000_1000;
        /// Lower-left vertical
        const E = 0b001_0000;
        /// Upper-left vertical
        const F = 0b010_0000;
        /// Middle bar
        const G = 0b100_0000;
    }
}

/// Canonical patterns for digits 0-9 (bit 0 = A through bit 6 = G)
const DIGIT_FONT: [Segments; 10] = [
    Segments::from_bits_truncate(0x3F), // 0: ABCDEF
    Segments::from_bits_truncate(0x06), // 1: BC
    Segments::from_bits_truncate(0x5B), // 2: ABDEG
    Segments::from_bits_truncate(0x4F), // 3: ABCDG
    Segments::from_bits_truncate(0x66), // 4: BCFG
    Segments::from_bits_truncate(0x6D), // 5: ACDFG
    Segments::from_bits_truncate(0x7D), // 6: ACDEFG
    Segments::from_bits_truncate(0x07), // 7: ABC
    Segments::from_bits_truncate(0x7F), // 8: ABCDEFG
    Segments::from_bits_truncate(0x6F), // 9: ABCDFG
];

/// Segment state for an optional digit.
///
/// Digits outside 0-9 and `None` both map to the empty state; the display
/// then paints every segment unlit rather than failing.
pub fn segments_for(digit: Option<u8>) -> Segments {
    match digit {
        Some(d) if d <= 9 => DIGIT_FONT[d as usize],
        _ => Segments::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_patterns() {
        assert_eq!(
            segments_for(Some(0)),
            Segments::A | Segments::B | Segments::C | Segments::D | Segments::E | Segments::F
        );
        assert_eq!(segments_for(Some(1)), Segments::B | Segments::C);
        assert_eq!(
            segments_for(Some(2)),
            Segments::A | Segments::B | Segments::D | Segments::E | Segments::G
        );
        assert_eq!(
            segments_for(Some(3)),
            Segments::A | Segments::B | Segments::C | Segments::D | Segments::G
        );
        assert_eq!(
            segments_for(Some(4)),
            Segments::B | Segments::C | Segments::F | Segments::G
        );
        assert_eq!(
            segments_for(Some(5)),
            Segments::A | Segments::C | Segments::D | Segments::F | Segments::G
        );
        assert_eq!(
            segments_for(Some(6)),
            Segments::A | Segments::C | Segments::D | Segments::E | Segments::F | Segments::G
        );
        assert_eq!(segments_for(Some(7)), Segments::A | Segments::B | Segments::C);
        assert_eq!(segments_for(Some(8)), Segments::all());
        assert_eq!(
            segments_for(Some(9)),
            Segments::A | Segments::B | Segments::C | Segments::D | Segments::F | Segments::G
        );
    }

    #[test]
    fn test_unknown_digit_is_unlit() {
        assert_eq!(segments_for(None), Segments::empty());
        assert_eq!(segments_for(Some(10)), Segments::empty());
        assert_eq!(segments_for(Some(255)), Segments::empty());
    }

    #[test]
    fn test_all_covers_seven_bits() {
        assert_eq!(Segments::all().bits(), 0x7F);
    }
}

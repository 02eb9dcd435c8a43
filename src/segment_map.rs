//! Digit glyph table for the seven-segment flap display.

use crate::error::{Error, Result};

/// A 7-bit glyph: bit `slot` is set when segment `slot` must be shown.
///
/// These are *logical* states; per-slot wiring polarity is applied later by
/// [`crate::inversion_map`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, defmt::Format)]
pub struct SegmentPattern(u8);

impl SegmentPattern {
    /// The all-segments-hidden glyph, used for leading-zero suppression.
    pub const BLANK: Self = Self(0);

    /// Segment patterns for the decimal digits 0..=9, matching the physical
    /// segment-to-slot wiring of the display.
    const GLYPHS: [Self; 10] = [
        Self(0b111_0111), // 0
        Self(0b010_0100), // 1
        Self(0b101_1101), // 2
        Self(0b110_1101), // 3
        Self(0b010_1110), // 4
        Self(0b110_1011), // 5
        Self(0b111_1011), // 6
        Self(0b010_0101), // 7
        Self(0b111_1111), // 8
        Self(0b110_1111), // 9
    ];

    /// Look up the glyph for a decimal digit.
    ///
    /// The table is total over exactly the ten decimal digits; anything else
    /// is a programming error and fails with [`Error::InvalidDigit`] rather
    /// than wrapping.
    pub fn for_digit(digit: u8) -> Result<Self> {
        match Self::GLYPHS.get(digit as usize) {
            Some(&pattern) => Ok(pattern),
            None => Err(Error::InvalidDigit(digit)),
        }
    }

    /// Whether segment `slot` is shown in this glyph.
    #[must_use]
    pub const fn is_lit(self, slot: usize) -> bool {
        (self.0 >> slot) & 1 == 1
    }

    /// Raw bit pattern (bit i = segment i).
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

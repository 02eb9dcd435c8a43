//! Turns one decimal digit into the seven physical segment commands for a
//! display position.

use crate::error::Result;
use crate::four_digit_time::DigitPosition;
use crate::inversion_map::apply_inversion;
use crate::segment_map::SegmentPattern;
use crate::shared_constants::SEGMENTS_PER_DIGIT;

/// One servo actuation within a digit group: `slot` is the local index
/// (0..=6), `on` is the *physical* state after polarity correction.
#[derive(Copy, Clone, Eq, PartialEq, Debug, defmt::Format)]
pub struct SegmentCommand {
    pub slot: u8,
    pub on: bool,
}

/// Render `digit` at `position` as seven slot commands in ascending slot
/// order.
///
/// A zero in the leading position is suppressed to a blank glyph before the
/// inversion map is applied; a zero anywhere else renders normally, which is
/// what keeps "10:00" from displaying as "1 :00".
///
/// # Errors
///
/// [`crate::Error::InvalidDigit`] when `digit > 9`; never clamps.
pub fn render(digit: u8, position: DigitPosition) -> Result<[SegmentCommand; SEGMENTS_PER_DIGIT]> {
    let mut pattern = SegmentPattern::for_digit(digit)?;

    if position.is_leading() && digit == 0 {
        pattern = SegmentPattern::BLANK;
    }

    Ok(core::array::from_fn(|slot| SegmentCommand {
        slot: slot as u8,
        on: apply_inversion(slot, pattern.is_lit(slot)),
    }))
}

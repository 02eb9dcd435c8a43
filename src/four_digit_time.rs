//! The 4-digit HHMM value shown on the display, and digit addressing.

use crate::error::{Error, Result};
use crate::shared_constants::DIGIT_COUNT;

/// A display position, left to right: 0 = tens of hours, 3 = units of minutes.
#[derive(Copy, Clone, Eq, PartialEq, Debug, defmt::Format)]
pub struct DigitPosition(u8);

impl DigitPosition {
    /// All positions in render order (left to right).
    pub const ALL: [Self; DIGIT_COUNT] = [Self(0), Self(1), Self(2), Self(3)];

    /// Validate a raw index. Out-of-range positions are programming errors.
    pub const fn new(index: u8) -> Result<Self> {
        if (index as usize) < DIGIT_COUNT {
            Ok(Self(index))
        } else {
            Err(Error::InvalidPosition(index))
        }
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Only the most-significant position ever suppresses a zero.
    #[must_use]
    pub const fn is_leading(self) -> bool {
        self.0 == 0
    }

    /// First global servo channel of this digit group (groups are 8 wide).
    #[must_use]
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "index < 4, so the product is at most 24"
    )]
    pub const fn channel_base(self) -> usize {
        (self.0 as usize) * crate::shared_constants::SLOTS_PER_DIGIT
    }
}

/// Wall-clock time packed as `hour * 100 + minute` (e.g. 11:42 → 1142).
#[derive(Copy, Clone, Eq, PartialEq, Debug, defmt::Format)]
pub struct TimeValue(u16);

impl TimeValue {
    /// Pack an (hour, minute) pair.
    ///
    /// In 12-hour mode only hours *above* 12 are folded back, so noon stays
    /// 12 and midnight stays 0 (rendered with its leading zero suppressed).
    #[must_use]
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        reason = "hour <= 23 and minute <= 59, so hour * 100 + minute <= 2359"
    )]
    pub const fn from_hour_minute(hour: u8, minute: u8, military_time: bool) -> Self {
        let hour = if !military_time && hour > 12 {
            hour % 12
        } else {
            hour
        };
        Self(hour as u16 * 100 + minute as u16)
    }

    /// The decimal digit rendered at `position`.
    #[must_use]
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "digit extraction by successive division"
    )]
    pub const fn digit(self, position: DigitPosition) -> u8 {
        let divisor: u16 = match position.index() {
            0 => 1000,
            1 => 100,
            2 => 10,
            _ => 1,
        };
        ((self.0 / divisor) % 10) as u8
    }

    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

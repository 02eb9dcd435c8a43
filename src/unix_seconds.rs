//! Unix timestamp type for the time-source collaborators.

use defmt::Format;
use time::{OffsetDateTime, UtcOffset};

/// Units-safe wrapper for Unix timestamps (seconds since 1970-01-01 00:00:00 UTC)
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Format)]
pub struct UnixSeconds(pub i64);

impl UnixSeconds {
    /// Get the underlying i64 value
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Seconds elapsed since `earlier` (zero if `earlier` is in the future).
    #[must_use]
    pub const fn saturating_since(self, earlier: Self) -> i64 {
        let delta = self.0.saturating_sub(earlier.0);
        if delta < 0 { 0 } else { delta }
    }

    /// Convert NTP seconds (since 1900-01-01) to Unix seconds (since 1970-01-01)
    #[must_use]
    #[expect(clippy::cast_lossless, reason = "`i64::from` is not const")]
    pub const fn from_ntp_seconds(ntp: u32) -> Option<Self> {
        // Seconds between the NTP era (1900) and the Unix epoch (1970).
        const NTP_TO_UNIX_SECONDS: i64 = 2_208_988_800;
        let unix = (ntp as i64) - NTP_TO_UNIX_SECONDS;
        // Pre-1970 timestamps mean a garbled NTP reply.
        if unix >= 0 { Some(Self(unix)) } else { None }
    }

    /// Convert to OffsetDateTime with the given timezone offset
    #[must_use]
    pub fn to_offset_datetime(self, offset: UtcOffset) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp(self.as_i64())
            .ok()
            .map(|dt| dt.to_offset(offset))
    }

    /// Local (hour, minute) under the given offset, for display.
    #[must_use]
    pub fn hour_minute(self, offset: UtcOffset) -> Option<(u8, u8)> {
        self.to_offset_datetime(offset)
            .map(|dt| (dt.hour(), dt.minute()))
    }
}

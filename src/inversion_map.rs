//! Per-slot servo polarity correction.
//!
//! Some flap linkages are mirrored, so "segment shown" is the 0° end of the
//! servo travel instead of the 180° end. The wiring pattern is identical in
//! every digit group, so one 8-entry table serves all 32 channels, applied
//! modulo the group size. Whether that uniformity is intentional for every
//! installation is unknown; it is the behavior of the deployed hardware and
//! is kept as-is.

use crate::shared_constants::SLOTS_PER_DIGIT;

/// Polarity per slot within a digit group. Slot 7 is the unused spare.
const INVERSION_MAP: [bool; SLOTS_PER_DIGIT] =
    [true, true, false, true, false, true, true, false];

/// Whether the servo at `slot` has mirrored linkage. Accepts global channel
/// indexes too; the per-group pattern repeats modulo 8.
#[must_use]
#[expect(
    clippy::indexing_slicing,
    clippy::integer_division_remainder_used,
    reason = "slot % SLOTS_PER_DIGIT is always in bounds"
)]
pub fn is_inverted(slot: usize) -> bool {
    INVERSION_MAP[slot % SLOTS_PER_DIGIT]
}

/// Map a logical segment state to the physical command for `slot`.
#[must_use]
pub fn apply_inversion(slot: usize, logical_on: bool) -> bool {
    logical_on ^ is_inverted(slot)
}

//! Host-level tests for glyph lookup, polarity correction and digit
//! rendering.

use flapclock::{DigitPosition, Error, SegmentPattern, is_inverted, render};

fn position(index: u8) -> DigitPosition {
    DigitPosition::new(index).expect("test position is valid")
}

#[test]
fn rendering_applies_glyph_and_inversion_bit_for_bit() {
    for digit in 0..=9u8 {
        let pattern = SegmentPattern::for_digit(digit).expect("digit is valid");
        for pos_index in 1..=3u8 {
            let commands = render(digit, position(pos_index)).expect("render succeeds");
            for (slot, command) in commands.iter().enumerate() {
                assert_eq!(command.slot as usize, slot);
                assert_eq!(
                    command.on,
                    pattern.is_lit(slot) ^ is_inverted(slot),
                    "digit {digit} position {pos_index} slot {slot}"
                );
            }
        }
    }
}

#[test]
fn slot_order_is_deterministic_and_ascending() {
    let commands = render(8, position(2)).expect("render succeeds");
    let slots: Vec<u8> = commands.iter().map(|command| command.slot).collect();
    assert_eq!(slots, vec![0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn leading_zero_is_visually_blank() {
    // Suppression replaces the glyph *before* inversion, so the physical
    // command per slot is exactly the inversion flag (= visually off).
    let commands = render(0, position(0)).expect("render succeeds");
    for command in commands {
        assert_eq!(command.on, is_inverted(command.slot as usize));
    }
}

#[test]
fn leading_nonzero_digit_is_not_suppressed() {
    let pattern = SegmentPattern::for_digit(1).expect("digit is valid");
    let commands = render(1, position(0)).expect("render succeeds");
    for (slot, command) in commands.iter().enumerate() {
        assert_eq!(command.on, pattern.is_lit(slot) ^ is_inverted(slot));
    }
}

#[test]
fn nonleading_zero_is_not_suppressed() {
    // The case that distinguishes "10:00" from a blanked display: a zero in
    // position 1 must render the full 0 glyph.
    let pattern = SegmentPattern::for_digit(0).expect("digit is valid");
    assert_ne!(pattern.bits(), 0);

    let commands = render(0, position(1)).expect("render succeeds");
    for (slot, command) in commands.iter().enumerate() {
        assert_eq!(command.on, pattern.is_lit(slot) ^ is_inverted(slot));
    }
}

#[test]
fn out_of_range_digit_fails_loudly() {
    assert!(matches!(
        render(10, position(3)),
        Err(Error::InvalidDigit(10))
    ));
    assert!(matches!(
        SegmentPattern::for_digit(255),
        Err(Error::InvalidDigit(255))
    ));
}

#[test]
fn out_of_range_position_fails_loudly() {
    assert!(matches!(DigitPosition::new(4), Err(Error::InvalidPosition(4))));
    assert!(matches!(
        DigitPosition::new(200),
        Err(Error::InvalidPosition(200))
    ));
}

#[test]
fn glyph_table_matches_display_wiring() {
    // Spot checks against the physical wiring table.
    let zero = SegmentPattern::for_digit(0).expect("digit is valid");
    assert_eq!(zero.bits(), 0b111_0111);
    let five = SegmentPattern::for_digit(5).expect("digit is valid");
    assert_eq!(five.bits(), 0b110_1011);
    let eight = SegmentPattern::for_digit(8).expect("digit is valid");
    assert_eq!(eight.bits(), 0b111_1111);
}

//! Host-level tests for HHMM packing, digit extraction and the 12-hour fold.

use flapclock::{DigitPosition, TimeValue};

fn digits(value: TimeValue) -> [u8; 4] {
    DigitPosition::ALL.map(|position| value.digit(position))
}

#[test]
fn digits_round_trip_for_every_display_value() {
    for hour in 0..24u8 {
        for minute in 0..60u8 {
            let value = TimeValue::from_hour_minute(hour, minute, true);
            assert_eq!(value.as_u16(), u16::from(hour) * 100 + u16::from(minute));

            let [d0, d1, d2, d3] = digits(value);
            let reassembled =
                u16::from(d0) * 1000 + u16::from(d1) * 100 + u16::from(d2) * 10 + u16::from(d3);
            assert_eq!(reassembled, value.as_u16());
        }
    }
}

#[test]
fn twelve_hour_fold_only_touches_hours_above_twelve() {
    // 13:00 -> 1:00
    assert_eq!(TimeValue::from_hour_minute(13, 0, false).as_u16(), 100);
    // 23:59 -> 11:59
    assert_eq!(TimeValue::from_hour_minute(23, 59, false).as_u16(), 1159);
    // Noon stays 12.
    assert_eq!(TimeValue::from_hour_minute(12, 30, false).as_u16(), 1230);
    // Midnight stays hour 0; the renderer blanks the leading digit.
    assert_eq!(TimeValue::from_hour_minute(0, 5, false).as_u16(), 5);
}

#[test]
fn military_mode_never_folds() {
    assert_eq!(TimeValue::from_hour_minute(13, 0, true).as_u16(), 1300);
    assert_eq!(TimeValue::from_hour_minute(23, 0, true).as_u16(), 2300);
    // Rollover boundary 23 -> 0.
    assert_eq!(TimeValue::from_hour_minute(0, 0, true).as_u16(), 0);
}

#[test]
fn digit_positions_read_left_to_right() {
    let value = TimeValue::from_hour_minute(11, 42, true);
    assert_eq!(digits(value), [1, 1, 4, 2]);

    let early = TimeValue::from_hour_minute(0, 5, true);
    assert_eq!(digits(early), [0, 0, 0, 5]);
}

#[test]
fn channel_bases_step_by_group_width() {
    let bases: Vec<usize> = DigitPosition::ALL
        .iter()
        .map(|position| position.channel_base())
        .collect();
    assert_eq!(bases, vec![0, 8, 16, 24]);
}

use embassy_time::Duration;

/// `false` renders 12-hour time (the original installation), `true` renders 24-hour.
pub const MILITARY_TIME: bool = false;

/// Display geometry: 4 digit groups of 8 addressable servo slots each.
/// Only slots 0..=6 of a group drive segments; slot 7 is wired but unused.
pub const DIGIT_COUNT: usize = 4;
pub const SLOTS_PER_DIGIT: usize = 8;
pub const SEGMENTS_PER_DIGIT: usize = 7;
pub const SEGMENT_CHANNEL_COUNT: usize = DIGIT_COUNT * SLOTS_PER_DIGIT;

/// How often the controller re-reads the wall clock.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);
/// How long the clock free-runs before asking the time source to resync.
pub const RESYNC_INTERVAL: Duration = Duration::from_secs(4 * 60 * 60);
/// Pause after each individual segment actuation so the I2C/PWM bus and the
/// servo supply are never saturated by a burst of 28 commands.
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Servo pulse bounds and frame rate for the PCA9685 outputs.
pub const MIN_PULSE_US: u16 = 1000;
pub const MAX_PULSE_US: u16 = 2000;
pub const PWM_FREQ_HZ: u16 = 50;

/// Flap positions, in degrees across the pulse range.
pub const SERVO_ON_DEGREES: u16 = 180;
pub const SERVO_OFF_DEGREES: u16 = 0;

/// I2C addresses of the two 16-channel PWM expanders, in channel order.
pub const PWM_DRIVER_ADDRESSES: [u8; 2] = [0x40, 0x41];
pub const CHANNELS_PER_DRIVER: usize = 16;

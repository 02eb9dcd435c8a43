//! Minimal register-level driver for the PCA9685 16-channel PWM expander.
//!
//! The servo bank shares one I2C bus between two expanders, so this type
//! only holds the device address; the bus is passed in per call.

use embassy_rp::i2c::{self, Instance as I2cInstance};
use embassy_time::Timer;

use crate::error::{Error, Result};
use crate::shared_constants::PWM_FREQ_HZ;

const REG_MODE1: u8 = 0x00;
const REG_PRESCALE: u8 = 0xFE;
const REG_LED0_ON_L: u8 = 0x06;

const MODE1_SLEEP: u8 = 0x10;
const MODE1_AUTO_INCREMENT: u8 = 0x20;
const MODE1_RESTART: u8 = 0x80;

/// Internal oscillator of the PCA9685.
const OSC_CLOCK_HZ: u32 = 25_000_000;
/// PWM resolution per frame.
const COUNTS_PER_FRAME: u32 = 4096;

/// One PCA9685 on the shared servo bus.
#[derive(Copy, Clone)]
pub struct Pca9685 {
    address: u8,
}

impl Pca9685 {
    /// Wrap a device address. No bus traffic until [`Self::init`].
    #[must_use]
    pub const fn new(address: u8) -> Self {
        Self { address }
    }

    /// Program the frame rate and wake the oscillator.
    ///
    /// This is the first traffic to the device, so an unreachable bus shows
    /// up here as the fatal [`Error::HardwareInit`].
    ///
    /// # Errors
    ///
    /// [`Error::HardwareInit`] when the expander does not acknowledge.
    pub async fn init<T: I2cInstance>(
        &self,
        bus: &mut i2c::I2c<'_, T, i2c::Blocking>,
    ) -> Result<()> {
        // prescale = osc / (4096 * frame_rate) - 1, and the prescaler is
        // only writable while the oscillator sleeps.
        #[expect(
            clippy::arithmetic_side_effects,
            clippy::integer_division_remainder_used,
            clippy::cast_possible_truncation,
            reason = "50 Hz gives prescale 121, comfortably a u8"
        )]
        let prescale = (OSC_CLOCK_HZ / (COUNTS_PER_FRAME * u32::from(PWM_FREQ_HZ)))
            .saturating_sub(1) as u8;

        self.write(bus, &[REG_MODE1, MODE1_SLEEP])
            .map_err(Error::HardwareInit)?;
        self.write(bus, &[REG_PRESCALE, prescale])
            .map_err(Error::HardwareInit)?;
        self.write(bus, &[REG_MODE1, MODE1_AUTO_INCREMENT])
            .map_err(Error::HardwareInit)?;

        // Oscillator start-up time before RESTART may be set.
        Timer::after_micros(500).await;
        self.write(bus, &[REG_MODE1, MODE1_AUTO_INCREMENT | MODE1_RESTART])
            .map_err(Error::HardwareInit)?;
        Ok(())
    }

    /// Drive `channel` (0..=15) with a pulse of `pulse_us` microseconds each
    /// frame, asserted from the start of the frame.
    ///
    /// # Errors
    ///
    /// [`Error::PwmWrite`] on a failed bus transaction.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        clippy::cast_possible_truncation,
        reason = "pulse_us <= 20000 keeps every intermediate within u32 and the count within 12 bits"
    )]
    pub fn set_pulse_us<T: I2cInstance>(
        &self,
        bus: &mut i2c::I2c<'_, T, i2c::Blocking>,
        channel: usize,
        pulse_us: u16,
    ) -> Result<()> {
        let off_count =
            (u32::from(pulse_us) * COUNTS_PER_FRAME * u32::from(PWM_FREQ_HZ) / 1_000_000) as u16;

        self.write_channel(bus, channel, 0, off_count.min(COUNTS_PER_FRAME as u16 - 1))
            .map_err(Error::PwmWrite)
    }

    /// Stop driving `channel` entirely (full-off bit), relaxing the servo.
    ///
    /// # Errors
    ///
    /// [`Error::PwmWrite`] on a failed bus transaction.
    pub fn full_off<T: I2cInstance>(
        &self,
        bus: &mut i2c::I2c<'_, T, i2c::Blocking>,
        channel: usize,
    ) -> Result<()> {
        // Bit 12 of LEDn_OFF is the full-off latch.
        self.write_channel(bus, channel, 0, 1 << 12).map_err(Error::PwmWrite)
    }

    #[expect(
        clippy::arithmetic_side_effects,
        clippy::cast_possible_truncation,
        reason = "channel < 16, so the register offset fits a u8"
    )]
    fn write_channel<T: I2cInstance>(
        &self,
        bus: &mut i2c::I2c<'_, T, i2c::Blocking>,
        channel: usize,
        on_count: u16,
        off_count: u16,
    ) -> core::result::Result<(), i2c::Error> {
        let base = REG_LED0_ON_L + 4 * channel as u8;
        self.write(
            bus,
            &[
                base,
                (on_count & 0xFF) as u8,
                (on_count >> 8) as u8,
                (off_count & 0xFF) as u8,
                (off_count >> 8) as u8,
            ],
        )
    }

    fn write<T: I2cInstance>(
        &self,
        bus: &mut i2c::I2c<'_, T, i2c::Blocking>,
        bytes: &[u8],
    ) -> core::result::Result<(), i2c::Error> {
        bus.blocking_write(self.address, bytes)
    }
}

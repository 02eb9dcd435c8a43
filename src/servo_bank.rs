//! The 32-channel servo bank behind the flap display.
//!
//! Two PCA9685 expanders on one I2C bus give 32 PWM outputs; global channel
//! `n` is channel `n % 16` of expander `n / 16`. Implements [`ActuatorPort`]
//! by mapping boolean segment state to the flap end angles.

use defmt::info;
use embassy_rp::Peri;
use embassy_rp::i2c::{self, Instance as I2cInstance, SclPin, SdaPin};
use embassy_time::Timer;

use crate::error::{Error, Result};
use crate::pca9685::Pca9685;
use crate::ports::ActuatorPort;
use crate::shared_constants::{
    CHANNELS_PER_DRIVER, MAX_PULSE_US, MIN_PULSE_US, PWM_DRIVER_ADDRESSES, SEGMENT_CHANNEL_COUNT,
    SERVO_OFF_DEGREES, SERVO_ON_DEGREES, SETTLE_DELAY,
};

pub struct ServoBank<'d, T: I2cInstance> {
    bus: i2c::I2c<'d, T, i2c::Blocking>,
    drivers: [Pca9685; PWM_DRIVER_ADDRESSES.len()],
}

impl<'d, T: I2cInstance> ServoBank<'d, T> {
    /// Bring up the bus and both expanders.
    ///
    /// # Errors
    ///
    /// [`Error::HardwareInit`] when either expander is unreachable; without
    /// the bank no display is possible, so callers treat this as fatal.
    pub async fn new(
        i2c_peripheral: Peri<'d, T>,
        scl: Peri<'d, impl SclPin<T>>,
        sda: Peri<'d, impl SdaPin<T>>,
    ) -> Result<Self> {
        let mut bank = Self {
            bus: i2c::I2c::new_blocking(i2c_peripheral, scl, sda, i2c::Config::default()),
            drivers: PWM_DRIVER_ADDRESSES.map(Pca9685::new),
        };

        for driver in &bank.drivers {
            driver.init(&mut bank.bus).await?;
        }
        info!(
            "Servo bank ready: {} channels across {} PWM drivers",
            SEGMENT_CHANNEL_COUNT,
            PWM_DRIVER_ADDRESSES.len()
        );
        Ok(bank)
    }

    /// Map degrees (0..=180) into the configured pulse range.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        clippy::cast_possible_truncation,
        reason = "degrees is clamped to 180, so the result stays within [MIN, MAX] pulse"
    )]
    fn degrees_to_pulse_us(degrees: u16) -> u16 {
        let degrees = u32::from(degrees.min(180));
        let span = u32::from(MAX_PULSE_US - MIN_PULSE_US);
        (u32::from(MIN_PULSE_US) + degrees * span / 180) as u16
    }

    #[expect(
        clippy::indexing_slicing,
        clippy::integer_division_remainder_used,
        reason = "channel is bounds-checked against SEGMENT_CHANNEL_COUNT by the caller"
    )]
    fn driver_for(&self, channel: usize) -> (Pca9685, usize) {
        (
            self.drivers[channel / CHANNELS_PER_DRIVER],
            channel % CHANNELS_PER_DRIVER,
        )
    }
}

impl<T: I2cInstance> ActuatorPort for ServoBank<'_, T> {
    async fn set_segment(&mut self, channel: usize, on: bool) -> Result<()> {
        if channel >= SEGMENT_CHANNEL_COUNT {
            return Err(Error::ChannelOutOfBounds);
        }

        let degrees = if on { SERVO_ON_DEGREES } else { SERVO_OFF_DEGREES };
        let pulse_us = Self::degrees_to_pulse_us(degrees);
        let (driver, local) = self.driver_for(channel);
        driver.set_pulse_us(&mut self.bus, local, pulse_us)?;

        // Bound the actuation rate so a 28-command burst cannot brown out
        // the servo supply or saturate the bus.
        Timer::after(SETTLE_DELAY).await;
        Ok(())
    }

    async fn relax_all(&mut self) -> Result<()> {
        for channel in 0..SEGMENT_CHANNEL_COUNT {
            let (driver, local) = self.driver_for(channel);
            driver.full_off(&mut self.bus, local)?;
        }
        Ok(())
    }
}

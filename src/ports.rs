//! Traits at the seams between the display logic and its collaborators.
//!
//! The controller never touches hardware or the network directly; it talks
//! to an actuator port and a time source through these traits, and sleeps
//! through an injectable timer so host tests run without real delays.

use embassy_time::Duration;

use crate::error::Result;
use crate::unix_seconds::UnixSeconds;

/// The physical display: 32 addressable servo channels.
#[expect(async_fn_in_trait, reason = "single-threaded, no Send bound wanted")]
pub trait ActuatorPort {
    /// Command one segment servo to its physical on/off angle.
    ///
    /// Returns once the command has been issued (including the port's own
    /// settle delay), not once the flap has mechanically come to rest.
    async fn set_segment(&mut self, channel: usize, on: bool) -> Result<()>;

    /// Drop drive to every channel so the flaps stop holding torque.
    async fn relax_all(&mut self) -> Result<()>;
}

/// The wall clock and its resync mechanism.
#[expect(async_fn_in_trait, reason = "single-threaded, no Send bound wanted")]
pub trait TimeSource {
    /// Current local wall-clock (hour, minute).
    fn hour_minute(&self) -> (u8, u8);

    /// Current epoch seconds, used only to schedule resyncs.
    fn epoch_seconds(&self) -> UnixSeconds;

    /// Re-acquire time from the external source. Fails with
    /// [`crate::Error::TimeSync`]; the caller treats that as recoverable.
    async fn resync(&mut self) -> Result<UnixSeconds>;
}

/// Suspension point between poll ticks.
#[expect(async_fn_in_trait, reason = "single-threaded, no Send bound wanted")]
pub trait TickTimer {
    async fn sleep(&mut self, duration: Duration);
}

/// [`TickTimer`] backed by the embassy time driver.
#[cfg(feature = "pico1")]
pub struct PollTimer;

#[cfg(feature = "pico1")]
impl TickTimer for PollTimer {
    async fn sleep(&mut self, duration: Duration) {
        embassy_time::Timer::after(duration).await;
    }
}

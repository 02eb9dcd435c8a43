//! Owns the displayed time and decides when the servos actually move.
//!
//! The controller runs a single cooperative polling loop: read the wall
//! clock, re-render only when the HHMM value changed, and periodically ask
//! the time source to resync. There are no other actors; `last shown time`
//! and `sync epoch` are plain fields mutated only from the loop.

#![allow(clippy::future_not_send, reason = "single-threaded")]

use embassy_time::Duration;

use crate::digit_renderer::render;
use crate::error::{Error, Result};
use crate::four_digit_time::{DigitPosition, TimeValue};
use crate::never::Never;
use crate::ports::{ActuatorPort, TickTimer, TimeSource};
use crate::shared_constants::{MILITARY_TIME, POLL_INTERVAL, RESYNC_INTERVAL};
use crate::unix_seconds::UnixSeconds;

/// Display state: nothing shown yet, or the HHMM value currently on the flaps.
#[derive(Copy, Clone, Eq, PartialEq, Debug, defmt::Format)]
enum DisplayState {
    Idle,
    Displaying(TimeValue),
}

/// Orchestrates rendering and resync timing for the flap display.
pub struct ClockController {
    state: DisplayState,
    sync_epoch: UnixSeconds,
    last_sync_failure: Option<&'static str>,
    military_time: bool,
    poll_interval: Duration,
    resync_interval: Duration,
}

impl Default for ClockController {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockController {
    /// Controller with the boot-time configuration constants.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_settings(MILITARY_TIME, POLL_INTERVAL, RESYNC_INTERVAL)
    }

    /// Controller with explicit settings (tests shorten the intervals).
    #[must_use]
    pub const fn with_settings(
        military_time: bool,
        poll_interval: Duration,
        resync_interval: Duration,
    ) -> Self {
        Self {
            state: DisplayState::Idle,
            sync_epoch: UnixSeconds(0),
            last_sync_failure: None,
            military_time,
            poll_interval,
            resync_interval,
        }
    }

    /// The HHMM value currently shown, if any.
    #[must_use]
    pub const fn displayed(&self) -> Option<TimeValue> {
        match self.state {
            DisplayState::Idle => None,
            DisplayState::Displaying(value) => Some(value),
        }
    }

    /// When the time source was last (re)synced, per its own epoch.
    #[must_use]
    pub const fn sync_epoch(&self) -> UnixSeconds {
        self.sync_epoch
    }

    /// Reason the most recent resync attempt failed, until one succeeds.
    #[must_use]
    pub const fn last_sync_failure(&self) -> Option<&'static str> {
        self.last_sync_failure
    }

    /// Render the current time unconditionally and record the sync epoch.
    ///
    /// # Errors
    ///
    /// Propagates actuator failures and digit/position programming errors.
    pub async fn start<T, A>(&mut self, time: &T, port: &mut A) -> Result<()>
    where
        T: TimeSource,
        A: ActuatorPort,
    {
        self.sync_epoch = time.epoch_seconds();
        let initial = self.current_time(time);
        Self::display(initial, port).await?;
        self.state = DisplayState::Displaying(initial);
        Ok(())
    }

    /// One poll tick: maybe resync, then re-render only on change.
    ///
    /// Resync failure is recoverable: the epoch is left unchanged (so the
    /// attempt repeats next tick until one succeeds), the reason is kept for
    /// diagnostics, and the clock free-runs on stale time.
    ///
    /// # Errors
    ///
    /// Propagates actuator failures and digit/position programming errors;
    /// never fails on time-sync trouble.
    pub async fn tick<T, A>(&mut self, time: &mut T, port: &mut A) -> Result<()>
    where
        T: TimeSource,
        A: ActuatorPort,
    {
        let now = time.epoch_seconds();
        #[expect(
            clippy::cast_possible_wrap,
            reason = "resync interval is hours, nowhere near i64::MAX seconds"
        )]
        let resync_due =
            now.saturating_since(self.sync_epoch) >= self.resync_interval.as_secs() as i64;
        if resync_due {
            match time.resync().await {
                Ok(epoch) => {
                    self.sync_epoch = epoch;
                    self.last_sync_failure = None;
                }
                Err(Error::TimeSync(reason)) => {
                    self.last_sync_failure = Some(reason);
                }
                Err(other) => return Err(other),
            }
        }

        let current = self.current_time(time);
        if self.state != DisplayState::Displaying(current) {
            Self::display(current, port).await?;
            self.state = DisplayState::Displaying(current);
        }
        Ok(())
    }

    /// Scheduling loop: start, then tick every poll interval, forever.
    ///
    /// # Errors
    ///
    /// Only on actuator failure or a programming error; the loop otherwise
    /// never returns.
    pub async fn run<T, A, S>(mut self, time: &mut T, port: &mut A, timer: &mut S) -> Result<Never>
    where
        T: TimeSource,
        A: ActuatorPort,
        S: TickTimer,
    {
        self.start(time, port).await?;
        loop {
            timer.sleep(self.poll_interval).await;
            self.tick(time, port).await?;
        }
    }

    fn current_time<T: TimeSource>(&self, time: &T) -> TimeValue {
        let (hour, minute) = time.hour_minute();
        TimeValue::from_hour_minute(hour, minute, self.military_time)
    }

    /// Push all four digits to the servos, positions 0→3 and slots 0→6, then
    /// relax the bank. The update is not atomic; mid-update states are
    /// visible on the physical display.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "channel_base <= 24 and slot <= 6, so the sum is below 32"
    )]
    async fn display<A: ActuatorPort>(value: TimeValue, port: &mut A) -> Result<()> {
        for position in DigitPosition::ALL {
            let digit = value.digit(position);
            for command in render(digit, position)? {
                port.set_segment(position.channel_base() + command.slot as usize, command.on)
                    .await?;
            }
        }
        port.relax_all().await
    }
}

//! Host-level tests for the polling controller: change detection, command
//! ordering and resync scheduling, all without real delays or hardware.

use embassy_futures::block_on;
use embassy_time::Duration;
use flapclock::{
    ActuatorPort, ClockController, Error, Result, TimeSource, TimeValue, UnixSeconds, is_inverted,
};

const POLL: Duration = Duration::from_secs(2);
const RESYNC_AFTER: Duration = Duration::from_secs(100);

/// Records every actuation instead of moving servos.
#[derive(Default)]
struct RecordingPort {
    commands: Vec<(usize, bool)>,
    relax_count: usize,
}

impl ActuatorPort for RecordingPort {
    async fn set_segment(&mut self, channel: usize, on: bool) -> Result<()> {
        self.commands.push((channel, on));
        Ok(())
    }

    async fn relax_all(&mut self) -> Result<()> {
        self.relax_count += 1;
        Ok(())
    }
}

/// Scriptable wall clock.
struct FakeTime {
    hour: u8,
    minute: u8,
    epoch: i64,
    resync_ok: bool,
    resync_calls: usize,
}

impl FakeTime {
    fn at(hour: u8, minute: u8) -> Self {
        Self {
            hour,
            minute,
            epoch: 1_000,
            resync_ok: true,
            resync_calls: 0,
        }
    }
}

impl TimeSource for FakeTime {
    fn hour_minute(&self) -> (u8, u8) {
        (self.hour, self.minute)
    }

    fn epoch_seconds(&self) -> UnixSeconds {
        UnixSeconds(self.epoch)
    }

    async fn resync(&mut self) -> Result<UnixSeconds> {
        self.resync_calls += 1;
        if self.resync_ok {
            Ok(UnixSeconds(self.epoch))
        } else {
            Err(Error::TimeSync("ntp unreachable"))
        }
    }
}

fn controller() -> ClockController {
    ClockController::with_settings(true, POLL, RESYNC_AFTER)
}

#[test]
fn start_renders_unconditionally_and_records_epoch() {
    let mut time = FakeTime::at(11, 42);
    let mut port = RecordingPort::default();
    let mut clock = controller();

    block_on(clock.start(&time, &mut port)).expect("start succeeds");

    // 4 positions x 7 slots, then one relax pass.
    assert_eq!(port.commands.len(), 28);
    assert_eq!(port.relax_count, 1);
    assert_eq!(
        clock.displayed(),
        Some(TimeValue::from_hour_minute(11, 42, true))
    );
    assert_eq!(clock.sync_epoch(), UnixSeconds(1_000));
}

#[test]
fn unchanged_time_issues_no_actuation() {
    let mut time = FakeTime::at(11, 42);
    let mut port = RecordingPort::default();
    let mut clock = controller();

    block_on(clock.start(&time, &mut port)).expect("start succeeds");
    let after_start = port.commands.len();

    time.epoch += 2;
    block_on(clock.tick(&mut time, &mut port)).expect("tick succeeds");

    assert_eq!(port.commands.len(), after_start);
    assert_eq!(port.relax_count, 1);
    assert_eq!(time.resync_calls, 0);
}

#[test]
fn minute_change_rerenders_every_position_in_order() {
    let mut time = FakeTime::at(11, 42);
    let mut port = RecordingPort::default();
    let mut clock = controller();

    block_on(clock.start(&time, &mut port)).expect("start succeeds");
    time.minute = 43;
    time.epoch += 2;
    block_on(clock.tick(&mut time, &mut port)).expect("tick succeeds");

    let update = &port.commands[28..];
    assert_eq!(update.len(), 28);
    for (i, &(channel, _)) in update.iter().enumerate() {
        // Positions 0->3 (groups 8 wide), slots 0->6 within each group.
        assert_eq!(channel, (i / 7) * 8 + i % 7);
    }
    assert_eq!(
        clock.displayed(),
        Some(TimeValue::from_hour_minute(11, 43, true))
    );
}

#[test]
fn midnight_leading_zero_is_blank_but_minutes_zero_is_not() {
    let time = FakeTime::at(0, 5);
    let mut port = RecordingPort::default();
    let mut clock = controller();

    block_on(clock.start(&time, &mut port)).expect("start succeeds");

    // Position 0 (channels 0..=6): suppressed, physically the inversion flags.
    for &(channel, on) in &port.commands[..7] {
        assert_eq!(on, is_inverted(channel));
    }
    // Position 2 (channels 16..=22) renders a real 0 glyph: visually lit
    // somewhere, so at least one command differs from the blank rendering.
    let tens_of_minutes = &port.commands[14..21];
    assert!(
        tens_of_minutes
            .iter()
            .any(|&(channel, on)| on != is_inverted(channel))
    );
}

#[test]
fn resync_fires_once_interval_elapsed() {
    let mut time = FakeTime::at(8, 0);
    let mut port = RecordingPort::default();
    let mut clock = controller();

    block_on(clock.start(&time, &mut port)).expect("start succeeds");

    // Not yet due.
    time.epoch += 50;
    block_on(clock.tick(&mut time, &mut port)).expect("tick succeeds");
    assert_eq!(time.resync_calls, 0);

    // Due now; epoch moves to the resync result.
    time.epoch += 50;
    block_on(clock.tick(&mut time, &mut port)).expect("tick succeeds");
    assert_eq!(time.resync_calls, 1);
    assert_eq!(clock.sync_epoch(), UnixSeconds(1_100));
}

#[test]
fn failed_resync_keeps_epoch_and_retries_every_tick() {
    let mut time = FakeTime::at(8, 0);
    let mut port = RecordingPort::default();
    let mut clock = controller();

    block_on(clock.start(&time, &mut port)).expect("start succeeds");

    time.resync_ok = false;
    time.epoch += 200;
    block_on(clock.tick(&mut time, &mut port)).expect("tick still succeeds");
    assert_eq!(time.resync_calls, 1);
    assert_eq!(clock.sync_epoch(), UnixSeconds(1_000));
    assert_eq!(clock.last_sync_failure(), Some("ntp unreachable"));

    // Still failing: retried on the very next tick.
    time.epoch += 2;
    block_on(clock.tick(&mut time, &mut port)).expect("tick still succeeds");
    assert_eq!(time.resync_calls, 2);

    // Recovery clears the diagnostic and moves the epoch.
    time.resync_ok = true;
    time.epoch += 2;
    block_on(clock.tick(&mut time, &mut port)).expect("tick succeeds");
    assert_eq!(clock.sync_epoch(), UnixSeconds(1_204));
    assert_eq!(clock.last_sync_failure(), None);
}

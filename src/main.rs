//! Headless boot task for the servo flap seven-segment clock.
//!
//! Runs on a Raspberry Pi Pico W: two PCA9685 PWM expanders on I2C0 drive
//! 32 flap servos (4 digits x 8 slots), and the wall clock is kept honest
//! over NTP. There is no interactive surface; the process runs until power
//! loss.
#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "Single-threaded")]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_time::Timer;
use flapclock::{ClockController, Hardware, Never, NtpClock, PollTimer, Result, ServoBank};
use panic_probe as _;

#[cfg(feature = "wifi")]
use flapclock::{TimeSource, Wifi};

/// Bring-up aid: cycle 0-9 on every position instead of running the clock.
const DEBUG_DIGIT_CYCLE: bool = false;

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    // If it returns, something went wrong.
    let err = inner_main(spawner).await.unwrap_err();
    core::panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Never> {
    info!("Starting servo flap clock");
    let hardware = Hardware::default();

    // No display without the servo bank, so a bus failure here is fatal.
    let mut servo_bank = ServoBank::new(hardware.i2c0, hardware.scl, hardware.sda).await?;

    if DEBUG_DIGIT_CYCLE {
        return debug_digit_cycle(&mut servo_bank).await;
    }

    #[cfg(feature = "wifi")]
    let mut clock = {
        let stack = Wifi::join(
            hardware.wifi_pwr,
            hardware.wifi_cs,
            hardware.wifi_pio,
            hardware.wifi_clk,
            hardware.wifi_data,
            hardware.wifi_dma,
            spawner,
        )
        .await?;
        let mut clock = NtpClock::new(stack);
        initial_sync(&mut clock).await;
        clock
    };
    #[cfg(not(feature = "wifi"))]
    let mut clock = {
        let _ = &spawner;
        NtpClock::new()
    };

    let controller = ClockController::new();
    let mut timer = PollTimer;
    controller.run(&mut clock, &mut servo_bank, &mut timer).await
}

/// Initial time acquisition, bounded: a few attempts, then start anyway and
/// let the regular resync schedule catch up.
#[cfg(feature = "wifi")]
async fn initial_sync(clock: &mut NtpClock) {
    const ATTEMPTS: u32 = 3;
    for attempt in 1..=ATTEMPTS {
        info!("Initial sync attempt {}/{}", attempt, ATTEMPTS);
        match clock.resync().await {
            Ok(epoch) => {
                info!("Initial sync done at unix={}", epoch.as_i64());
                return;
            }
            Err(flapclock::Error::TimeSync(reason)) => {
                info!("Initial sync failed: {}, retrying", reason);
            }
            Err(_) => info!("Initial sync failed, retrying"),
        }
        Timer::after_secs(10).await;
    }
    info!("Starting without initial sync; will retry on the resync schedule");
}

/// Original bring-up mode: count 0-9 across all four positions forever.
async fn debug_digit_cycle<A: flapclock::ActuatorPort>(port: &mut A) -> Result<Never> {
    use flapclock::{DigitPosition, render};

    loop {
        for digit in 0..=9u8 {
            for position in DigitPosition::ALL {
                for command in render(digit, position)? {
                    #[expect(
                        clippy::arithmetic_side_effects,
                        reason = "channel_base <= 24 and slot <= 6"
                    )]
                    let channel = position.channel_base() + command.slot as usize;
                    port.set_segment(channel, command.on).await?;
                }
            }
            port.relax_all().await?;
            Timer::after_secs(2).await;
        }
    }
}

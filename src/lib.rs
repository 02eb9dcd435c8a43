//! Shared items for the servo flap clock project.
//!
//! A 4-digit seven-segment clock whose segments are mechanical flaps, each
//! driven by its own servo through a pair of PCA9685 PWM expanders. The
//! rendering and scheduling logic here is pure and host-testable; the
//! hardware collaborators (servo bank, Wi-Fi, NTP) only build for the
//! Pico W target.
#![no_std]

mod clock_controller;
mod digit_renderer;
mod error;
mod four_digit_time;
mod inversion_map;
mod never;
mod ports;
mod segment_map;
mod shared_constants;
mod unix_seconds;

#[cfg(feature = "pico1")]
mod hardware;
#[cfg(feature = "pico1")]
mod pca9685;
#[cfg(feature = "pico1")]
mod servo_bank;
#[cfg(feature = "pico1")]
mod time_sync;
#[cfg(all(feature = "pico1", feature = "wifi"))]
mod wifi;

// Re-export commonly used items
pub use clock_controller::ClockController;
pub use digit_renderer::{SegmentCommand, render};
pub use error::{Error, Result};
pub use four_digit_time::{DigitPosition, TimeValue};
pub use inversion_map::{apply_inversion, is_inverted};
pub use never::Never;
pub use ports::{ActuatorPort, TickTimer, TimeSource};
pub use segment_map::SegmentPattern;
pub use shared_constants::*;
pub use unix_seconds::UnixSeconds;

#[cfg(feature = "pico1")]
pub use hardware::Hardware;
#[cfg(feature = "pico1")]
pub use pca9685::Pca9685;
#[cfg(feature = "pico1")]
pub use ports::PollTimer;
#[cfg(feature = "pico1")]
pub use servo_bank::ServoBank;
#[cfg(feature = "pico1")]
pub use time_sync::{NtpClock, utc_offset_minutes};
#[cfg(all(feature = "pico1", feature = "wifi"))]
pub use wifi::Wifi;

use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
///
/// Two very different kinds of failure live here. `TimeSync` is transient and
/// recovered at the call site (the clock free-runs on stale time until the
/// next successful sync). `InvalidDigit`/`InvalidPosition` are programming
/// errors and must propagate rather than being clamped away.
#[expect(missing_docs, reason = "The variants are self-explanatory.")]
#[derive(Debug, Display, Error)]
pub enum Error {
    // `#[error(not(source))]` below tells `derive_more` that the wrapped type
    // does not implement Rust's `core::error::Error` trait.
    #[cfg(feature = "pico1")]
    #[display("{_0:?}")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),

    #[display("{_0} is not a decimal digit")]
    InvalidDigit(#[error(not(source))] u8),

    #[display("{_0} is not a display position")]
    InvalidPosition(#[error(not(source))] u8),

    #[display("Segment channel index out of bounds")]
    ChannelOutOfBounds,

    #[cfg(feature = "pico1")]
    #[display("PWM driver initialization failed: {_0:?}")]
    HardwareInit(#[error(not(source))] embassy_rp::i2c::Error),

    #[cfg(feature = "pico1")]
    #[display("PWM driver write failed: {_0:?}")]
    PwmWrite(#[error(not(source))] embassy_rp::i2c::Error),

    #[display("Time sync failed: {_0}")]
    TimeSync(#[error(not(source))] &'static str),
}

#[cfg(feature = "pico1")]
impl From<embassy_executor::SpawnError> for Error {
    fn from(err: embassy_executor::SpawnError) -> Self {
        Self::TaskSpawn(err)
    }
}

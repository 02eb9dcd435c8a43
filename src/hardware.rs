//! Pin and peripheral assignment for the flap clock board.

use embassy_rp::Peri;
use embassy_rp::peripherals::{I2C0, PIN_4, PIN_5};
#[cfg(feature = "wifi")]
use embassy_rp::peripherals::{DMA_CH0, PIN_23, PIN_24, PIN_25, PIN_29, PIO0};

/// The peripherals this project actually uses: the I2C bus shared by both
/// PWM expanders, plus the CYW43 radio pins when Wi-Fi is compiled in.
pub struct Hardware {
    pub i2c0: Peri<'static, I2C0>,
    pub sda: Peri<'static, PIN_4>,
    pub scl: Peri<'static, PIN_5>,
    #[cfg(feature = "wifi")]
    pub wifi_pwr: Peri<'static, PIN_23>,
    #[cfg(feature = "wifi")]
    pub wifi_cs: Peri<'static, PIN_25>,
    #[cfg(feature = "wifi")]
    pub wifi_pio: Peri<'static, PIO0>,
    #[cfg(feature = "wifi")]
    pub wifi_clk: Peri<'static, PIN_24>,
    #[cfg(feature = "wifi")]
    pub wifi_data: Peri<'static, PIN_29>,
    #[cfg(feature = "wifi")]
    pub wifi_dma: Peri<'static, DMA_CH0>,
}

impl Default for Hardware {
    fn default() -> Self {
        let peripherals: embassy_rp::Peripherals =
            embassy_rp::init(embassy_rp::config::Config::default());

        Self {
            i2c0: peripherals.I2C0,
            sda: peripherals.PIN_4,
            scl: peripherals.PIN_5,
            #[cfg(feature = "wifi")]
            wifi_pwr: peripherals.PIN_23,
            #[cfg(feature = "wifi")]
            wifi_cs: peripherals.PIN_25,
            #[cfg(feature = "wifi")]
            wifi_pio: peripherals.PIO0,
            #[cfg(feature = "wifi")]
            wifi_clk: peripherals.PIN_24,
            #[cfg(feature = "wifi")]
            wifi_data: peripherals.PIN_29,
            #[cfg(feature = "wifi")]
            wifi_dma: peripherals.DMA_CH0,
        }
    }
}

//! Wi-Fi client bring-up for the Pico W (CYW43 over PIO SPI).
//!
//! The clock is a fixed headless appliance, so there is no provisioning
//! flow: credentials are compile-time constants injected by `build.rs`
//! (`WIFI_SSID` / `WIFI_PASS`) and the device simply joins as a DHCP client.

#![allow(clippy::future_not_send, reason = "single-threaded")]

use cyw43::JoinOptions;
use cyw43_pio::{DEFAULT_CLOCK_DIVIDER, PioSpi};
use defmt::info;
use embassy_executor::Spawner;
use embassy_net::{Config, Stack, StackResources};
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::{DMA_CH0, PIN_23, PIN_24, PIN_25, PIN_29, PIO0};
use embassy_rp::pio::{InterruptHandler, Pio};
use embassy_rp::{Peri, bind_interrupts};
use embassy_time::Timer;
use static_cell::StaticCell;

use crate::error::Result;

const WIFI_SSID: &str = env!("WIFI_SSID");
const WIFI_PASS: &str = env!("WIFI_PASS");

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

/// Client-mode Wi-Fi: radio init, join, DHCP.
pub struct Wifi;

impl Wifi {
    /// Bring up the radio, join the configured network and wait for DHCP.
    ///
    /// Join attempts repeat until the access point accepts us; this is the
    /// one deliberately unbounded wait in the system, and it happens before
    /// the render loop starts.
    ///
    /// # Errors
    ///
    /// [`crate::Error::TaskSpawn`] if the radio or net tasks cannot spawn.
    pub async fn join(
        pin_23: Peri<'static, PIN_23>,
        pin_25: Peri<'static, PIN_25>,
        pio0: Peri<'static, PIO0>,
        pin_24: Peri<'static, PIN_24>,
        pin_29: Peri<'static, PIN_29>,
        dma_ch0: Peri<'static, DMA_CH0>,
        spawner: Spawner,
    ) -> Result<&'static Stack<'static>> {
        info!("Wi-Fi initializing in client mode");

        let fw = cyw43_firmware::CYW43_43439A0;
        let clm = cyw43_firmware::CYW43_43439A0_CLM;

        let pwr = Output::new(pin_23, Level::Low);
        let cs = Output::new(pin_25, Level::High);
        let mut pio = Pio::new(pio0, Irqs);
        let spi = PioSpi::new(
            &mut pio.common,
            pio.sm0,
            DEFAULT_CLOCK_DIVIDER,
            pio.irq0,
            cs,
            pin_24,
            pin_29,
            dma_ch0,
        );

        static STATE: StaticCell<cyw43::State> = StaticCell::new();
        let state = STATE.init(cyw43::State::new());
        let (net_device, mut control, runner) = cyw43::new(state, pwr, spi, fw).await;
        let wifi_token = wifi_task(runner)?;
        spawner.spawn(wifi_token);

        control.init(clm).await;
        control
            .set_power_management(cyw43::PowerManagementMode::PowerSave)
            .await;

        let config = Config::dhcpv4(Default::default());
        let seed = 0x7c8f_3a2e_9d14_6b5a;

        static RESOURCES: StaticCell<StackResources<5>> = StaticCell::new();
        static STACK: StaticCell<Stack<'static>> = StaticCell::new();
        let (stack_val, runner) = embassy_net::new(
            net_device,
            config,
            RESOURCES.init(StackResources::<5>::new()),
            seed,
        );
        let stack = STACK.init(stack_val);

        let net_token = net_task(runner)?;
        spawner.spawn(net_token);

        info!("Connecting to Wi-Fi: {}", WIFI_SSID);
        loop {
            match control
                .join(WIFI_SSID, JoinOptions::new(WIFI_PASS.as_bytes()))
                .await
            {
                Ok(()) => break,
                Err(err) => {
                    info!("Join failed: {}", err.status);
                    Timer::after_secs(1).await;
                }
            }
        }

        info!("Wi-Fi connected! Waiting for DHCP...");
        stack.wait_config_up().await;

        if let Some(config) = stack.config_v4() {
            info!("IP Address: {}", config.address);
        }

        Ok(stack)
    }
}

#[embassy_executor::task]
async fn wifi_task(
    runner: cyw43::Runner<'static, Output<'static>, PioSpi<'static, PIO0, 0, DMA_CH0>>,
) -> ! {
    runner.run().await
}

#[embassy_executor::task]
async fn net_task(mut runner: embassy_net::Runner<'static, cyw43::NetDriver<'static>>) -> ! {
    runner.run().await
}

//! Wall-clock time source for the flap display, synced over NTP when Wi-Fi
//! support is compiled in.
//!
//! The clock anchors a Unix timestamp against the monotonic uptime counter
//! at each successful sync and free-runs between syncs. Sync failures are
//! recoverable: the display keeps running on stale time.

#![allow(clippy::future_not_send, reason = "single-threaded")]

use time::UtcOffset;

/// Fixed local timezone offset, injected at build time (`UTC_OFFSET_MINUTES`).
#[must_use]
pub fn utc_offset_minutes() -> i32 {
    env!("UTC_OFFSET_MINUTES").parse().unwrap_or(0)
}

fn utc_offset() -> UtcOffset {
    UtcOffset::from_whole_seconds(utc_offset_minutes().saturating_mul(60))
        .unwrap_or(UtcOffset::UTC)
}

#[cfg(feature = "wifi")]
mod wifi_impl {
    use defmt::{info, warn};
    use embassy_net::{Stack, dns, udp};
    use embassy_time::{Duration, Instant};
    use time::UtcOffset;

    use crate::error::{Error, Result};
    use crate::ports::TimeSource;
    use crate::unix_seconds::UnixSeconds;

    /// NTP-synced wall clock over an existing network stack.
    pub struct NtpClock {
        stack: &'static Stack<'static>,
        // Unix timestamp of the moment the processor booted (0 = never synced)
        boot_unix: i64,
        offset: UtcOffset,
    }

    impl NtpClock {
        #[must_use]
        pub fn new(stack: &'static Stack<'static>) -> Self {
            Self {
                stack,
                boot_unix: 0,
                offset: super::utc_offset(),
            }
        }

        fn now_unix(&self) -> UnixSeconds {
            #[expect(
                clippy::cast_possible_wrap,
                reason = "uptime seconds will not reach i64::MAX"
            )]
            let uptime = Instant::now().as_secs() as i64;
            UnixSeconds(self.boot_unix.saturating_add(uptime))
        }
    }

    impl TimeSource for NtpClock {
        fn hour_minute(&self) -> (u8, u8) {
            // Before the first sync this renders the time since boot, which
            // mirrors an unsynced hardware RTC starting at midnight.
            self.now_unix().hour_minute(self.offset).unwrap_or((0, 0))
        }

        fn epoch_seconds(&self) -> UnixSeconds {
            self.now_unix()
        }

        async fn resync(&mut self) -> Result<UnixSeconds> {
            let unix = fetch_ntp_time(self.stack).await.map_err(|reason| {
                warn!("NTP sync failed: {}", reason);
                Error::TimeSync(reason)
            })?;

            #[expect(
                clippy::cast_possible_wrap,
                reason = "uptime seconds will not reach i64::MAX"
            )]
            let uptime = Instant::now().as_secs() as i64;
            self.boot_unix = unix.as_i64().saturating_sub(uptime);
            info!("Time synced: unix={}", unix.as_i64());
            Ok(self.now_unix())
        }
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "request and response are fixed 48-byte packets"
    )]
    async fn fetch_ntp_time(stack: &Stack<'static>) -> Result<UnixSeconds, &'static str> {
        use dns::DnsQueryType;
        use udp::UdpSocket;

        const NTP_SERVER: &str = "pool.ntp.org";
        const NTP_PORT: u16 = 123;

        info!("Resolving NTP host {}...", NTP_SERVER);
        let dns_result = stack
            .dns_query(NTP_SERVER, DnsQueryType::A)
            .await
            .map_err(|e| {
                warn!("DNS lookup failed: {:?}", e);
                "DNS lookup failed"
            })?;
        let server_addr = dns_result.first().ok_or("No DNS results")?;

        let mut rx_meta = [udp::PacketMetadata::EMPTY; 1];
        let mut rx_buffer = [0; 128];
        let mut tx_meta = [udp::PacketMetadata::EMPTY; 1];
        let mut tx_buffer = [0; 128];
        let mut socket = UdpSocket::new(
            *stack,
            &mut rx_meta,
            &mut rx_buffer,
            &mut tx_meta,
            &mut tx_buffer,
        );

        socket.bind(0).map_err(|e| {
            warn!("Socket bind failed: {:?}", e);
            "Socket bind failed"
        })?;

        // 48-byte NTP request: LI=0, VN=3, Mode=3 (client)
        let mut ntp_request = [0u8; 48];
        ntp_request[0] = 0x1B;

        info!("Sending NTP request to {}...", server_addr);
        socket
            .send_to(&ntp_request, (*server_addr, NTP_PORT))
            .await
            .map_err(|e| {
                warn!("NTP send failed: {:?}", e);
                "NTP send failed"
            })?;

        let mut response = [0u8; 48];
        let (n, _from) =
            embassy_time::with_timeout(Duration::from_secs(5), socket.recv_from(&mut response))
                .await
                .map_err(|_| {
                    warn!("NTP receive timeout");
                    "NTP receive timeout"
                })?
                .map_err(|e| {
                    warn!("NTP receive failed: {:?}", e);
                    "NTP receive failed"
                })?;

        if n < 48 {
            warn!("NTP response too short: {} bytes", n);
            return Err("NTP response too short");
        }

        // Transmit timestamp, bytes 40-47, big-endian; seconds are enough.
        let ntp_seconds =
            u32::from_be_bytes([response[40], response[41], response[42], response[43]]);

        UnixSeconds::from_ntp_seconds(ntp_seconds).ok_or("Invalid NTP timestamp")
    }
}

#[cfg(feature = "wifi")]
pub use wifi_impl::NtpClock;

// ============================================================================
// No-WiFi Stub Implementation
// ============================================================================

#[cfg(not(feature = "wifi"))]
mod stub {
    use embassy_time::Instant;
    use time::UtcOffset;

    use crate::error::{Error, Result};
    use crate::ports::TimeSource;
    use crate::unix_seconds::UnixSeconds;

    /// Free-running clock for builds without network support. Starts at the
    /// Unix epoch and never syncs; resync always fails recoverably.
    pub struct NtpClock {
        offset: UtcOffset,
    }

    impl NtpClock {
        #[must_use]
        pub fn new() -> Self {
            Self {
                offset: super::utc_offset(),
            }
        }

        fn now_unix(&self) -> UnixSeconds {
            #[expect(
                clippy::cast_possible_wrap,
                reason = "uptime seconds will not reach i64::MAX"
            )]
            let uptime = Instant::now().as_secs() as i64;
            UnixSeconds(uptime)
        }
    }

    impl Default for NtpClock {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TimeSource for NtpClock {
        fn hour_minute(&self) -> (u8, u8) {
            self.now_unix().hour_minute(self.offset).unwrap_or((0, 0))
        }

        fn epoch_seconds(&self) -> UnixSeconds {
            self.now_unix()
        }

        async fn resync(&mut self) -> Result<UnixSeconds> {
            Err(Error::TimeSync("wifi support not compiled in"))
        }
    }
}

#[cfg(not(feature = "wifi"))]
pub use stub::NtpClock;

//! Gauge polling task
//!
//! Drains the UART into the angle reader and publishes every change.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::uart::BufferedUartRx;
use embassy_time::{Delay, Duration, Ticker};

use gemred_drivers::AngleReader;

use crate::board::UptimeClock;
use crate::channels::GAUGE_READING;

/// Angle reader as wired on this board
pub type GaugeReader = AngleReader<BufferedUartRx, Output<'static>, Delay, UptimeClock>;

/// Poll interval in milliseconds
const POLL_INTERVAL_MS: u64 = 1;

/// Polls per tick; 9600 baud delivers about one byte per millisecond
const POLLS_PER_TICK: usize = 8;

/// Gauge task - powers the gauge up and keeps reading it
#[embassy_executor::task]
pub async fn gauge_task(mut reader: GaugeReader) {
    info!("Gauge task started");

    if reader.begin().is_err() {
        warn!("Failed to power up gauge");
    }

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        for _ in 0..POLLS_PER_TICK {
            if reader.poll() {
                GAUGE_READING.signal(reader.reading());
            }
        }

        ticker.next().await;
    }
}

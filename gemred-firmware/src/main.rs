//! GemRed - Angle Gauge Reader Firmware
//!
//! Main firmware binary for RP2040-based boards wired to a hacked GemRed
//! 82421 Mini Angle Gauge. The gauge's TX pad feeds UART1 RX and its 1.5V
//! rail is switched from a GPIO through a transistor, so the firmware can
//! restart the gauge whenever it powers itself down.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::UART1;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use gemred_drivers::AngleReader;

use crate::board::UptimeClock;

mod board;
mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    UART1_IRQ => BufferedInterruptHandler<UART1>;
});

// Static cells for UART buffers (must live forever)
// The gauge never listens, so the TX buffer stays tiny
static TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("GemRed angle gauge firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup UART1 for the gauge stream
    // Pin assignments are board-specific (UART1: GPIO4 TX, GPIO5 RX)
    let uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = board::GAUGE_BAUDRATE;
        cfg
    };

    let tx_buf = TX_BUF.init([0u8; 16]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART1, p.PIN_4, p.PIN_5, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();

    info!("UART initialized at {} baud", board::GAUGE_BAUDRATE);

    // Gauge power switch (GPIO6), held off until the gauge task starts
    let gauge_config = board::gauge_config();
    let power_pin = Output::new(p.PIN_6, board::power_off_level(&gauge_config));

    info!(
        "Gauge config: power_on_high={}, silence={}ms, off={}ms, cycle={}",
        gauge_config.power_on_high,
        gauge_config.silence_timeout_ms,
        gauge_config.power_off_ms,
        gauge_config.power_cycle
    );

    let reader = AngleReader::with_config(rx, power_pin, Delay, UptimeClock, gauge_config);

    // Spawn tasks
    spawner.spawn(tasks::gauge_task(reader)).unwrap();
    spawner.spawn(tasks::report_task()).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do; it keeps the UART TX half alive
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

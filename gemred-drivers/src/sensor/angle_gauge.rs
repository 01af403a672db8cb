//! GemRed Mini Angle Gauge reader
//!
//! The gauge streams ASCII messages over its TX pad and switches itself off
//! when the measured angle stays unchanged for a while. The reader decodes
//! the stream into a single calibrated angle and power-cycles the gauge when
//! it announces a shutdown.
//!
//! # Usage
//!
//! The reader is driven by calling `poll()` from the host loop. Each call
//! consumes at most one byte and returns true when the reading changed.
//!
//! ```ignore
//! let mut gauge = AngleReader::new(uart_rx, power_pin, true, delay, clock);
//! gauge.begin()?;
//!
//! loop {
//!     if gauge.poll() {
//!         report(gauge.reading());
//!     }
//! }
//! ```
//!
//! Faults never stop the reader. They show up as sentinel readings
//! (see [`AngleReading`]) and the next good message replaces them.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use gemred_hal::{ByteSource, Clock, PowerSwitch};
use gemred_protocol::{decode, AngleReading, Decoded, LineBuffer, LineError, LineStatus};

use super::power_cycle::{PowerCycle, POWER_OFF_MS};
use super::watchdog::{SilenceWatchdog, SILENCE_TIMEOUT_MS};

/// Idle filler the gauge emits between messages
const IDLE_BYTE: u8 = 0x00;

/// How the gauge is restarted after a stop message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PowerCycleMode {
    /// Hold power off with the delay provider inside `poll()`
    Blocking,
    /// Cut power and restore it on the first poll after the off period
    Deferred,
}

/// Angle reader configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AngleReaderConfig {
    /// If true, the gauge is powered when the power pin is HIGH
    pub power_on_high: bool,
    /// Silence after which a timeout is reported (ms)
    pub silence_timeout_ms: u32,
    /// Time the gauge is held unpowered during a restart (ms)
    pub power_off_ms: u32,
    /// Restart strategy
    pub power_cycle: PowerCycleMode,
}

impl Default for AngleReaderConfig {
    fn default() -> Self {
        Self {
            power_on_high: true,
            silence_timeout_ms: SILENCE_TIMEOUT_MS,
            power_off_ms: POWER_OFF_MS,
            power_cycle: PowerCycleMode::Blocking,
        }
    }
}

/// GemRed angle gauge reader
pub struct AngleReader<S, P, D, C> {
    source: S,
    power: PowerSwitch<P>,
    delay: D,
    clock: C,
    config: AngleReaderConfig,
    /// Message being assembled
    line: LineBuffer,
    /// Current reading
    reading: AngleReading,
    /// A genuine measurement arrived since the last (re)start
    measured: bool,
    watchdog: SilenceWatchdog,
    power_cycle: PowerCycle,
}

impl<S, P, D, C> AngleReader<S, P, D, C>
where
    S: ByteSource,
    P: OutputPin,
    D: DelayNs,
    C: Clock,
{
    /// Create a reader with default timing
    ///
    /// # Arguments
    /// - `source`: Serial stream from the gauge's TX pad
    /// - `power_pin`: GPIO pin feeding the gauge
    /// - `power_on_high`: If true, the gauge is powered when the pin is HIGH
    /// - `delay`: Delay provider for the blocking restart
    /// - `clock`: Millisecond uptime clock
    pub fn new(source: S, power_pin: P, power_on_high: bool, delay: D, clock: C) -> Self {
        let config = AngleReaderConfig {
            power_on_high,
            ..Default::default()
        };
        Self::with_config(source, power_pin, delay, clock, config)
    }

    /// Create a reader with explicit configuration
    pub fn with_config(
        source: S,
        power_pin: P,
        delay: D,
        clock: C,
        config: AngleReaderConfig,
    ) -> Self {
        let now = clock.now_ms();
        Self {
            source,
            power: PowerSwitch::new(power_pin, config.power_on_high),
            delay,
            clock,
            config,
            line: LineBuffer::new(),
            reading: AngleReading::NotInitialized,
            measured: false,
            watchdog: SilenceWatchdog::new(config.silence_timeout_ms, now),
            power_cycle: PowerCycle::new(config.power_off_ms),
        }
    }

    /// Switch the gauge on
    pub fn begin(&mut self) -> Result<(), P::Error> {
        self.power.power_on()
    }

    /// Process at most one byte from the gauge and check for silence
    ///
    /// Returns true if the reading changed during this call.
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now_ms();
        let previous = self.reading;

        if self.power_cycle.is_due(now) {
            self.restore_power();
        }

        match self.source.read_byte() {
            Ok(Some(IDLE_BYTE)) => return false,
            Ok(Some(byte)) => {
                self.accept(byte, now);
                self.watchdog.feed(now);
            }
            Ok(None) => {}
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("GemRed read error: {}", defmt::Debug2Format(&_e));
            }
        }

        // Silence only counts once the gauge has produced a real reading
        if self.watchdog.check(now) && self.measured {
            #[cfg(feature = "defmt")]
            defmt::warn!("GemRed is silent. Pending line: {=str}", self.line.as_str());
            self.reading = AngleReading::Timeout;
        }

        self.reading != previous
    }

    /// Current reading as a raw value (degrees or negative fault code)
    pub fn angle(&self) -> f32 {
        self.reading.as_f32()
    }

    /// Current reading
    pub fn reading(&self) -> AngleReading {
        self.reading
    }

    /// Check if a genuine measurement arrived since the last (re)start
    pub fn has_measurement(&self) -> bool {
        self.measured
    }

    /// Partially received message, for diagnostics
    pub fn pending_line(&self) -> &str {
        self.line.as_str()
    }

    /// Check if the gauge is currently switched on
    pub fn is_powered(&self) -> bool {
        self.power.is_on()
    }

    /// Check if a deferred restart is waiting to restore power
    pub fn is_power_cycling(&self) -> bool {
        self.power_cycle.is_pending()
    }

    /// Configuration the reader was built with
    pub fn config(&self) -> &AngleReaderConfig {
        &self.config
    }

    /// Append a byte and decode the line once it is complete
    fn accept(&mut self, byte: u8, now: u32) {
        match self.line.push(byte) {
            Ok(LineStatus::Pending) => {}
            Ok(LineStatus::Complete) => {
                self.handle_line(now);
                self.line.clear();
            }
            Err(LineError::Overflow) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("GemRed line overflow, fragment discarded");
            }
        }
    }

    fn handle_line(&mut self, now: u32) {
        #[cfg(feature = "defmt")]
        defmt::trace!("GemRed message: {=str}", self.line.as_str());

        match decode(self.line.as_str(), self.measured) {
            Decoded::Reading(reading) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("GemRed {}: {=str}", reading, self.line.as_str());
                self.reading = reading;
            }
            Decoded::Measurement(reading) => {
                #[cfg(feature = "defmt")]
                defmt::trace!("GemRed measurement: {}", reading);
                self.measured = true;
                self.reading = reading;
            }
            Decoded::Placeholder => {}
            Decoded::Stop => {
                #[cfg(feature = "defmt")]
                defmt::info!("GemRed stop. Restarting");
                self.measured = false;
                self.restart(now);
            }
        }
    }

    /// Cut power and bring it back after the off period
    fn restart(&mut self, now: u32) {
        if let Err(_e) = self.power.power_off() {
            #[cfg(feature = "defmt")]
            defmt::warn!("GemRed power off failed: {}", defmt::Debug2Format(&_e));
        }

        match self.config.power_cycle {
            PowerCycleMode::Blocking => {
                self.delay.delay_ms(self.config.power_off_ms);
                self.restore_power();
            }
            PowerCycleMode::Deferred => self.power_cycle.start(now),
        }
    }

    fn restore_power(&mut self) {
        if let Err(_e) = self.power.power_on() {
            #[cfg(feature = "defmt")]
            defmt::warn!("GemRed power on failed: {}", defmt::Debug2Format(&_e));
        }
    }
}

//! Gauge power control
//!
//! The gauge is fed from a GPIO pin (directly or through a transistor), so
//! switching that pin restarts it. Depending on the circuit the gauge may be
//! powered when the pin is HIGH (default) or when it is LOW.

use embedded_hal::digital::OutputPin;

/// Power line of the gauge
pub struct PowerSwitch<P> {
    pin: P,
    /// If false, gauge ON = pin LOW
    active_high: bool,
    /// Current logical state (true = gauge powered)
    on: bool,
}

impl<P: OutputPin> PowerSwitch<P> {
    /// Wrap a power pin without driving it
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin feeding the gauge
    /// - `active_high`: If true, the gauge is powered when the pin is HIGH
    pub fn new(pin: P, active_high: bool) -> Self {
        Self {
            pin,
            active_high,
            on: false,
        }
    }

    /// Drive the power line to the requested logical state
    pub fn set_on(&mut self, on: bool) -> Result<(), P::Error> {
        if on == self.active_high {
            self.pin.set_high()?;
        } else {
            self.pin.set_low()?;
        }
        self.on = on;
        Ok(())
    }

    /// Switch the gauge on
    pub fn power_on(&mut self) -> Result<(), P::Error> {
        self.set_on(true)
    }

    /// Switch the gauge off
    pub fn power_off(&mut self) -> Result<(), P::Error> {
        self.set_on(false)
    }

    /// Check if the gauge was last switched on
    pub fn is_on(&self) -> bool {
        self.on
    }
}

//! Hardware driver implementations
//!
//! This crate turns the collaborator seams defined in `gemred-hal` and the
//! line protocol in `gemred-protocol` into a working driver:
//!
//! - Angle gauge reader (line assembly, decoding, calibrated reading)
//! - Silence watchdog (loss of contact detection)
//! - Power-cycle recovery (restart after the gauge shuts itself down)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod sensor;

pub use sensor::{AngleReader, AngleReaderConfig, PowerCycleMode};

//! GemRed Mini Angle Gauge line protocol
//!
//! This crate decodes the ASCII stream a GemRed 82421 angle gauge emits on its
//! TX pad (9600 baud, 8N1). It is pure logic: no I/O, no timing, no state
//! beyond the line being assembled.
//!
//! # Protocol Overview
//!
//! Every message is a run of `;`-terminated fields closed by a carriage return:
//! ```text
//! ┌────────┬───┬─────────┬───┬───────────┬───┬─────┬────┐
//! │ TYPE   │ ; │ FLAGS   │ ; │ MAGNITUDE │ ; │ ... │ CR │
//! │ *25    │   │ 0000y   │   │ 45.0      │   │     │ 0D │
//! └────────┴───┴─────────┴───┴───────────┴───┴─────┴────┘
//! ```
//!
//! - `*25` angle reading; flag `y` (index 4) is the rotational quadrant
//! - `*9` the gauge is about to power itself down
//! - `*30` the gauge entered calibration mode
//!
//! While warming up the gauge sends angle messages whose magnitude is `----`.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod angle;
pub mod line;
pub mod message;

pub use angle::{normalize, AngleReading, Quadrant};
pub use line::{LineBuffer, LineError, LineStatus, LINE_CAPACITY, LINE_TERMINATOR};
pub use message::{decode, field, parse_magnitude, Decoded, Message, MessageType};

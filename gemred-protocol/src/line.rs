//! Line assembly for the gauge's serial stream
//!
//! Bytes are accumulated into a fixed-capacity printable-ASCII buffer until
//! the carriage return that closes every message. Non-printable bytes are
//! stored as a three-character `xNN` escape so the buffer stays printable
//! for diagnostics; the terminator itself is stored as `x0d`.

use core::fmt::Write;

use heapless::String;

/// Carriage return closing every message
pub const LINE_TERMINATOR: u8 = 0x0D;

/// Maximum buffered line length in characters
///
/// A full angle message is around 30 characters; anything longer than this
/// is line noise.
pub const LINE_CAPACITY: usize = 128;

/// Width of a stored `xNN` escape
const ESCAPE_WIDTH: usize = 3;

/// Room left for message content once the terminator's escape is reserved
const CONTENT_CAPACITY: usize = LINE_CAPACITY - ESCAPE_WIDTH;

/// Errors that can occur while assembling a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line content outgrew the buffer; the fragment was discarded
    Overflow,
}

/// Result of feeding one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineStatus {
    /// Byte stored, line still open
    Pending,
    /// Byte was the terminator; the buffer holds a complete message
    Complete,
}

/// Line buffer for one in-flight message
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    line: String<LINE_CAPACITY>,
}

impl LineBuffer {
    /// Create an empty line buffer
    pub fn new() -> Self {
        Self {
            line: String::new(),
        }
    }

    /// Append one byte
    ///
    /// On overflow the partial line is cleared so the next message starts
    /// from an empty buffer. Content is capped below [`LINE_CAPACITY`] so the
    /// terminator always fits and always completes the line.
    pub fn push(&mut self, byte: u8) -> Result<LineStatus, LineError> {
        let width = if is_printable(byte) { 1 } else { ESCAPE_WIDTH };
        if byte != LINE_TERMINATOR && self.line.len() + width > CONTENT_CAPACITY {
            self.line.clear();
            return Err(LineError::Overflow);
        }

        let stored = if is_printable(byte) {
            self.line.push(byte as char).is_ok()
        } else {
            write!(self.line, "x{:02x}", byte).is_ok()
        };

        if !stored {
            self.line.clear();
            return Err(LineError::Overflow);
        }

        if byte == LINE_TERMINATOR {
            Ok(LineStatus::Complete)
        } else {
            Ok(LineStatus::Pending)
        }
    }

    /// Current buffer contents
    pub fn as_str(&self) -> &str {
        self.line.as_str()
    }

    /// Discard the buffered line
    pub fn clear(&mut self) {
        self.line.clear();
    }
}

fn is_printable(byte: u8) -> bool {
    (b' '..0x7F).contains(&byte)
}

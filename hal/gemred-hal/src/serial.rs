//! Serial byte source
//!
//! The driver pulls at most one byte per poll and must never block waiting
//! for the gauge, so the source only hands out a byte when one is already
//! buffered.

/// Non-blocking byte stream
pub trait ByteSource {
    /// Error type for read operations
    type Error: core::fmt::Debug;

    /// Read the next byte if one is available
    ///
    /// Returns `Ok(None)` when nothing has arrived yet.
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}

/// Any `embedded-io` reader that can report readiness is a byte source
impl<T> ByteSource for T
where
    T: embedded_io::Read + embedded_io::ReadReady,
{
    type Error = T::Error;

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        if !self.read_ready()? {
            return Ok(None);
        }
        let mut buf = [0u8; 1];
        match self.read(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf[0])),
        }
    }
}

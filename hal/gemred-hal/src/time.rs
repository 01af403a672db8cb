//! Uptime clock

/// Monotonic millisecond clock
///
/// The count is allowed to wrap; consumers compare timestamps with
/// [`elapsed_ms`].
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Milliseconds from `since` to `now`, tolerating one wrap of the counter
pub fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}

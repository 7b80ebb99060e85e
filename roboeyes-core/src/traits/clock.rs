//! Millisecond time source

/// Monotonic millisecond clock
///
/// The counter is allowed to wrap; the engine only ever compares instants
/// with wrapping arithmetic.
pub trait Clock {
    /// Milliseconds since an arbitrary epoch
    fn now_ms(&self) -> u32;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Check whether `deadline` has been reached at `now`
///
/// Correct across counter wrap-around as long as the two instants are less
/// than ~24 days apart.
pub(crate) fn reached(now: u32, deadline: u32) -> bool {
    (now.wrapping_sub(deadline) as i32) >= 0
}

//! Random number capability

use core::num::NonZeroU32;

use rand::{Rng, RngCore};

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Return a value in `[0, limit)`
    fn below(&mut self, limit: NonZeroU32) -> u32;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn below(&mut self, limit: NonZeroU32) -> u32 {
        (**self).below(limit)
    }
}

/// Draw a value in `[0, limit)`, treating an empty range as 0
///
/// Screen constraints shrink to zero or below when the eyes are wider than
/// the display; the port is not consulted in that case.
pub(crate) fn below<R: RandomSource + ?Sized>(rng: &mut R, limit: i32) -> i32 {
    match u32::try_from(limit).ok().and_then(NonZeroU32::new) {
        // Clamp so a misbehaving source can't push geometry off range
        Some(limit) => rng.below(limit).min(limit.get() - 1) as i32,
        None => 0,
    }
}

/// Any `rand` generator as a [`RandomSource`]
///
/// Boards without an entropy peripheral typically wrap a seeded
/// `rand::rngs::SmallRng`.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn below(&mut self, limit: NonZeroU32) -> u32 {
        self.rng.gen_range(0..limit.get())
    }
}

//! Randomly repeating timer

use crate::config::AutoMotion;
use crate::traits::clock::reached;
use crate::traits::random;
use crate::traits::RandomSource;

/// Fires every `interval + random(variation)` seconds while active
///
/// Drives autoblink and idle repositioning. The first firing is scheduled
/// one interval after the timer is switched on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AutoTimer {
    active: bool,
    interval_s: u16,
    variation_s: u16,
    next_fire_ms: u32,
}

impl AutoTimer {
    /// Create a timer, armed relative to `now` if `motion` is active
    pub fn new(motion: AutoMotion, now: u32) -> Self {
        let mut timer = Self {
            active: false,
            interval_s: motion.interval_s,
            variation_s: motion.variation_s,
            next_fire_ms: now,
        };
        timer.set_active(motion.active, now);
        timer
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Scheduled time of the next firing
    pub fn next_fire_ms(&self) -> u32 {
        self.next_fire_ms
    }

    /// Current settings
    pub fn motion(&self) -> AutoMotion {
        AutoMotion::new(self.active, self.interval_s, self.variation_s)
    }

    /// Switch on or off
    ///
    /// Only the off-to-on edge arms the timer; switching on a running timer
    /// keeps its schedule.
    pub fn set_active(&mut self, active: bool, now: u32) {
        if active && !self.active {
            self.next_fire_ms = now.wrapping_add(seconds_to_ms(self.interval_s));
        }
        self.active = active;
    }

    /// Change interval and variation, then switch on or off
    pub fn configure(&mut self, motion: AutoMotion, now: u32) {
        self.interval_s = motion.interval_s;
        self.variation_s = motion.variation_s;
        self.set_active(motion.active, now);
    }

    /// Whether the timer should fire at `now`
    pub fn due(&self, now: u32) -> bool {
        self.active && reached(now, self.next_fire_ms)
    }

    /// Schedule the next firing after one at `now`
    pub fn reschedule<R: RandomSource + ?Sized>(&mut self, now: u32, rng: &mut R) {
        let extra = random::below(rng, i32::from(self.variation_s)) as u32;
        self.next_fire_ms = now
            .wrapping_add(seconds_to_ms(self.interval_s))
            .wrapping_add(extra * 1000);
    }
}

fn seconds_to_ms(seconds: u16) -> u32 {
    u32::from(seconds) * 1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::ScriptedRng;

    #[test]
    fn test_inactive_never_due() {
        let timer = AutoTimer::new(AutoMotion::new(false, 1, 0), 0);
        assert!(!timer.due(0));
        assert!(!timer.due(100_000));
    }

    #[test]
    fn test_first_firing_one_interval_after_activation() {
        let mut timer = AutoTimer::new(AutoMotion::new(false, 2, 5), 0);
        timer.set_active(true, 300);
        assert_eq!(timer.next_fire_ms(), 2300);
        assert!(!timer.due(2299));
        assert!(timer.due(2300));
    }

    #[test]
    fn test_reactivating_keeps_schedule() {
        let mut timer = AutoTimer::new(AutoMotion::new(true, 1, 0), 0);
        timer.set_active(true, 700);
        assert_eq!(timer.next_fire_ms(), 1000);
    }

    #[test]
    fn test_reschedule_adds_random_seconds() {
        let mut timer = AutoTimer::new(AutoMotion::new(true, 3, 2), 0);
        let mut rng = ScriptedRng::new(&[1]);
        timer.reschedule(3000, &mut rng);
        assert_eq!(timer.next_fire_ms(), 3000 + 3000 + 1000);
        assert_eq!(rng.calls(), 1);
    }

    #[test]
    fn test_zero_variation_skips_rng() {
        let mut timer = AutoTimer::new(AutoMotion::new(true, 1, 0), 0);
        let mut rng = ScriptedRng::new(&[7]);
        timer.reschedule(1000, &mut rng);
        assert_eq!(timer.next_fire_ms(), 2000);
        assert_eq!(rng.calls(), 0);
    }

    #[test]
    fn test_due_across_clock_wrap() {
        let start = u32::MAX - 500;
        let timer = AutoTimer::new(AutoMotion::new(true, 1, 0), start);
        assert!(!timer.due(u32::MAX));
        assert!(timer.due(start.wrapping_add(1000)));
    }
}

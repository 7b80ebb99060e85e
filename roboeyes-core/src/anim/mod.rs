//! Macro animations
//!
//! Independent state machines polled once per frame against the clock:
//!
//! - [`AutoTimer`] for autoblink and idle repositioning
//! - [`OneShot`] for the confused and laugh shakes
//! - [`Flicker`] for continuous horizontal / vertical shivering
//! - [`Sweat`] for the sweat drops
//!
//! The shakes have no motion of their own: they switch the flicker on with
//! their own amplitude when they start and switch it off with amplitude 0
//! when they finish. A flicker enabled by the caller in the meantime is
//! cancelled along with it.

pub mod flicker;
pub mod oneshot;
pub mod sweat;
pub mod timer;

pub use flicker::Flicker;
pub use oneshot::{OneShot, ShakePhase};
pub use sweat::Sweat;
pub use timer::AutoTimer;

use crate::config::{DisplayConfig, EyesConfig};
use crate::fmt::debug;
use crate::geometry::{PairLayout, Side};
use crate::traits::random;
use crate::traits::RandomSource;

/// Horizontal flicker amplitude while confused
pub const CONFUSED_AMPLITUDE: u8 = 20;

/// Vertical flicker amplitude while laughing
pub const LAUGH_AMPLITUDE: u8 = 5;

/// All macro animation state
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Animations {
    pub autoblink: AutoTimer,
    pub idle: AutoTimer,
    pub confused: OneShot,
    pub laugh: OneShot,
    pub h_flicker: Flicker,
    pub v_flicker: Flicker,
    pub sweat: Sweat,
}

impl Animations {
    pub fn new(config: &EyesConfig, now: u32) -> Self {
        Self {
            autoblink: AutoTimer::new(config.autoblink, now),
            idle: AutoTimer::new(config.idle, now),
            confused: OneShot::new(),
            laugh: OneShot::new(),
            h_flicker: Flicker::new(flicker::DEFAULT_H_AMPLITUDE),
            v_flicker: Flicker::new(flicker::DEFAULT_V_AMPLITUDE),
            sweat: Sweat::new(config.sweat),
        }
    }

    /// Run every animation except sweat for one frame
    ///
    /// Sweat is advanced separately, after the eyelids, as it only
    /// decorates the finished frame.
    pub fn advance<R: RandomSource + ?Sized>(
        &mut self,
        layout: &mut PairLayout,
        screen: &DisplayConfig,
        now: u32,
        rng: &mut R,
    ) {
        if self.autoblink.due(now) {
            layout.blink(Side::Both);
            self.autoblink.reschedule(now, rng);
            debug!("autoblink, next at {} ms", self.autoblink.next_fire_ms());
        }

        match self.laugh.poll(now) {
            Some(ShakePhase::Started) => self.v_flicker.set(true, LAUGH_AMPLITUDE),
            Some(ShakePhase::Finished) => self.v_flicker.set(false, 0),
            None => {}
        }

        match self.confused.poll(now) {
            Some(ShakePhase::Started) => self.h_flicker.set(true, CONFUSED_AMPLITUDE),
            Some(ShakePhase::Finished) => self.h_flicker.set(false, 0),
            None => {}
        }

        if self.idle.due(now) {
            let x = random::below(rng, layout.constraint_x(screen.width));
            let y = random::below(rng, layout.constraint_y(screen.height));
            layout.look_at(x, y);
            self.idle.reschedule(now, rng);
            debug!("idle gaze to ({}, {})", x, y);
        }

        if let Some(dx) = self.h_flicker.next_offset() {
            layout.shift_x(dx);
        }
        if let Some(dy) = self.v_flicker.next_offset() {
            layout.shift_y(dy);
        }
    }
}

//! One-shot shake animations (confused, laugh)

use crate::traits::clock::reached;

/// How long a shake lasts
pub const SHAKE_DURATION_MS: u32 = 500;

/// Edge reported by [`OneShot::poll`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShakePhase {
    /// The shake begins on this frame
    Started,
    /// The shake is over
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum State {
    #[default]
    Idle,
    Pending,
    Running {
        since: u32,
    },
}

/// A self-terminating animation of fixed duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OneShot {
    state: State,
}

impl OneShot {
    pub const fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Request a run; ignored while one is already in progress
    pub fn trigger(&mut self) {
        if self.state == State::Idle {
            self.state = State::Pending;
        }
    }

    /// Whether a run is pending or in progress
    pub fn is_active(&self) -> bool {
        self.state != State::Idle
    }

    /// Advance the state machine, reporting start and end edges
    pub fn poll(&mut self, now: u32) -> Option<ShakePhase> {
        match self.state {
            State::Idle => None,
            State::Pending => {
                self.state = State::Running { since: now };
                Some(ShakePhase::Started)
            }
            State::Running { since } => {
                if reached(now, since.wrapping_add(SHAKE_DURATION_MS)) {
                    self.state = State::Idle;
                    Some(ShakePhase::Finished)
                } else {
                    None
                }
            }
        }
    }
}

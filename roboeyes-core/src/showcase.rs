//! Expression showcase
//!
//! Cycles through the moods and shakes on a fixed cadence so a freshly
//! flashed display has something to show. Stays quiet for a while after a
//! host controller has taken over.

use roboeyes_protocol::EyeCommand;

use crate::traits::clock::reached;

/// Time between showcase steps
pub const STEP_MS: u32 = 5_000;

/// Quiet period after a host command
pub const HOST_HOLD_MS: u32 = 30_000;

const STEPS: [EyeCommand; 6] = [
    EyeCommand::SetMood { code: 0 },
    EyeCommand::Confused,
    EyeCommand::Laugh,
    EyeCommand::SetMood { code: 1 },
    EyeCommand::SetMood { code: 2 },
    EyeCommand::SetMood { code: 3 },
];

/// Timed sequence of expressions
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Showcase {
    step: usize,
    next_ms: u32,
    held_until: Option<u32>,
}

impl Showcase {
    /// Start with the first step due at `now`
    pub fn new(now: u32) -> Self {
        Self {
            step: 0,
            next_ms: now,
            held_until: None,
        }
    }

    /// Pause for [`HOST_HOLD_MS`] from `now`
    pub fn hold(&mut self, now: u32) {
        self.held_until = Some(now.wrapping_add(HOST_HOLD_MS));
    }

    pub fn is_held(&self) -> bool {
        self.held_until.is_some()
    }

    /// Command to apply at `now`, if a step is due
    pub fn poll(&mut self, now: u32) -> Option<EyeCommand> {
        if let Some(until) = self.held_until {
            if !reached(now, until) {
                return None;
            }
            self.held_until = None;
            self.next_ms = now;
        }
        if !reached(now, self.next_ms) {
            return None;
        }

        let command = STEPS[self.step];
        self.step = (self.step + 1) % STEPS.len();
        self.next_ms = now.wrapping_add(STEP_MS);
        Some(command)
    }
}

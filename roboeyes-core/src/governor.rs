//! Frame-rate governor
//!
//! The host polls [`FrameGovernor::ready`] as often as it likes; it returns
//! `true` at most once per frame interval.

use crate::config::types::validate_frame_rate;
use crate::config::ConfigError;

/// Throttles rendering to a maximum frame rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameGovernor {
    fps: u8,
    interval_ms: u32,
    /// Time of the last rendered frame, `None` until the first one
    last: Option<u32>,
}

impl FrameGovernor {
    /// Governor for `fps` frames per second
    pub fn from_fps(fps: u8) -> Result<Self, ConfigError> {
        validate_frame_rate(fps)?;
        Ok(Self {
            fps,
            interval_ms: interval_for(fps),
            last: None,
        })
    }

    pub fn fps(&self) -> u8 {
        self.fps
    }

    /// Minimum time between frames, `1000 / fps` rounded down
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Change the frame rate, keeping the frame timer
    pub fn set_fps(&mut self, fps: u8) -> Result<(), ConfigError> {
        validate_frame_rate(fps)?;
        self.fps = fps;
        self.interval_ms = interval_for(fps);
        Ok(())
    }

    /// Check whether a frame is due at `now`, restarting the timer if so
    pub fn ready(&mut self, now: u32) -> bool {
        let due = match self.last {
            Some(last) => now.wrapping_sub(last) >= self.interval_ms,
            None => true,
        };
        if due {
            self.last = Some(now);
        }
        due
    }
}

fn interval_for(fps: u8) -> u32 {
    1000 / u32::from(fps)
}

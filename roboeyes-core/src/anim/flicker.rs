//! Square-wave shivering

/// Default horizontal amplitude in pixels
pub const DEFAULT_H_AMPLITUDE: u8 = 2;

/// Default vertical amplitude in pixels
pub const DEFAULT_V_AMPLITUDE: u8 = 10;

/// Displaces the eyes by `±amplitude` on alternating frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Flicker {
    active: bool,
    amplitude: u8,
    positive: bool,
}

impl Flicker {
    pub const fn new(amplitude: u8) -> Self {
        Self {
            active: false,
            amplitude,
            positive: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn amplitude(&self) -> u8 {
        self.amplitude
    }

    /// Switch on or off, keeping the amplitude
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Switch on or off with a new amplitude
    pub fn set(&mut self, active: bool, amplitude: u8) {
        self.active = active;
        self.amplitude = amplitude;
    }

    /// Offset to apply this frame, if active
    pub fn next_offset(&mut self) -> Option<i32> {
        if !self.active {
            return None;
        }
        let amplitude = i32::from(self.amplitude);
        let offset = if self.positive { amplitude } else { -amplitude };
        self.positive = !self.positive;
        Some(offset)
    }
}

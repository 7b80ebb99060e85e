//! Per-frame value smoothing
//!
//! Every animated scalar (eye size, position, border radius, spacing,
//! eyelid depth) is a [`Tween`]: setters move the target, the frame step
//! moves the value halfway towards it.

/// A value easing towards a target
///
/// Each [`Tween::step`] applies `value = (value + target) / 2` with integer
/// division truncating towards zero. This converges geometrically, but may
/// settle one unit short of an odd target; that quantisation is part of the
/// look and is kept as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tween {
    value: i32,
    target: i32,
}

impl Tween {
    /// Start at `value`, heading for `target`
    pub const fn new(value: i32, target: i32) -> Self {
        Self { value, target }
    }

    /// Start at rest
    pub const fn settled(value: i32) -> Self {
        Self {
            value,
            target: value,
        }
    }

    /// Current (displayed) value
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Value being eased towards
    pub const fn target(&self) -> i32 {
        self.target
    }

    /// Change where the value is heading
    pub fn set_target(&mut self, target: i32) {
        self.target = target;
    }

    /// Advance one frame
    pub fn step(&mut self) -> i32 {
        self.step_biased(0)
    }

    /// Advance one frame towards `target + bias`
    ///
    /// Used for eye heights, where curiosity temporarily enlarges the eye
    /// without moving its configured target.
    pub fn step_biased(&mut self, bias: i32) -> i32 {
        let sum = i64::from(self.value) + i64::from(self.target) + i64::from(bias);
        self.value = (sum / 2) as i32;
        self.value
    }

    /// Displace the current value without touching the target
    ///
    /// The displacement decays again over the following frames.
    pub fn nudge(&mut self, delta: i32) {
        self.value = self.value.saturating_add(delta);
    }

    /// Overwrite the current value for this frame only
    pub fn force(&mut self, value: i32) {
        self.value = value;
    }

    /// Distance left to travel
    pub fn remaining(&self) -> u32 {
        self.target.abs_diff(self.value)
    }
}

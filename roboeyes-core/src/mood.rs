//! Mood expressions and eyelid overlays
//!
//! A mood is drawn by masking parts of the eyes in the background colour:
//! triangular top eyelids for tired and angry, a rounded bottom mask for
//! happy. The overlay depths track the left eye's current height, so they
//! follow along while the eyes blink.

use crate::tween::Tween;

/// Facial expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mood {
    #[default]
    Neutral,
    Tired,
    Angry,
    Happy,
}

impl Mood {
    /// Decode a wire code (0 default, 1 tired, 2 angry, 3 happy)
    ///
    /// Unknown codes select [`Mood::Neutral`].
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Mood::Tired,
            2 => Mood::Angry,
            3 => Mood::Happy,
            _ => Mood::Neutral,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Mood::Neutral => 0,
            Mood::Tired => 1,
            Mood::Angry => 2,
            Mood::Happy => 3,
        }
    }

    pub fn is_tired(self) -> bool {
        self == Mood::Tired
    }

    pub fn is_angry(self) -> bool {
        self == Mood::Angry
    }

    pub fn is_happy(self) -> bool {
        self == Mood::Happy
    }
}

/// Tweened eyelid overlay depths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Eyelids {
    tired: Tween,
    angry: Tween,
    happy_offset: Tween,
}

impl Eyelids {
    /// Retarget the overlays for `mood` and advance them one frame
    pub fn advance(&mut self, mood: Mood, eye_height: i32) {
        let depth = eye_height / 2;
        let (tired, angry, happy) = match mood {
            Mood::Neutral => (0, 0, 0),
            Mood::Tired => (depth, 0, 0),
            Mood::Angry => (0, depth, 0),
            Mood::Happy => (0, 0, depth),
        };

        self.tired.set_target(tired);
        self.angry.set_target(angry);
        self.happy_offset.set_target(happy);

        self.tired.step();
        self.angry.step();
        self.happy_offset.step();
    }

    /// Depth of the tired eyelid triangles
    pub fn tired(&self) -> i32 {
        self.tired.value()
    }

    /// Depth of the angry eyelid triangles
    pub fn angry(&self) -> i32 {
        self.angry.value()
    }

    /// How far the happy mask reaches into the bottom of the eye
    pub fn happy_offset(&self) -> i32 {
        self.happy_offset.value()
    }
}

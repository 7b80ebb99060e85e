//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::ColorIndex;

/// Default screen size of the reference LCD panel
pub const DEFAULT_SCREEN_WIDTH: u16 = 240;
pub const DEFAULT_SCREEN_HEIGHT: u16 = 135;

/// Default frame rate (20 ms frame interval)
pub const DEFAULT_FRAME_RATE: u8 = 50;

/// Default eye size and corner radius
pub const DEFAULT_EYE_SIZE: u16 = 36;
pub const DEFAULT_BORDER_RADIUS: u8 = 8;

/// Default gap between the eyes
pub const DEFAULT_SPACE_BETWEEN: i16 = 10;

/// Colour index used for the background and all masking overlays
pub const DEFAULT_BACKGROUND: ColorIndex = 0;

/// Colour index used for the eyes and sweat drops
pub const DEFAULT_MAIN: ColorIndex = 1;

/// Rejected configuration values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Frame rate of zero
    InvalidFrameRate,
    /// Screen width or height of zero
    InvalidScreenSize,
    /// Eye width or height of zero
    InvalidEyeSize,
    /// Persisted configuration could not be encoded or decoded
    Encoding,
}

/// Size and shape of one eye
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EyeShape {
    /// Width in pixels
    pub width: u16,
    /// Fully open height in pixels
    pub height: u16,
    /// Corner radius in pixels
    pub border_radius: u8,
}

impl Default for EyeShape {
    fn default() -> Self {
        Self {
            width: DEFAULT_EYE_SIZE,
            height: DEFAULT_EYE_SIZE,
            border_radius: DEFAULT_BORDER_RADIUS,
        }
    }
}

impl EyeShape {
    fn validate(&self) -> Result<(), ConfigError> {
        validate_eye_size(self.width, self.height)
    }
}

/// Settings for a randomly repeating animation (autoblink, idle gaze)
///
/// The animation fires every `interval_s` seconds plus a random
/// `0..variation_s` extra seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AutoMotion {
    pub active: bool,
    /// Minimum time between firings (seconds)
    pub interval_s: u16,
    /// Random extra time range (seconds), 0 for none
    pub variation_s: u16,
}

impl AutoMotion {
    pub const fn new(active: bool, interval_s: u16, variation_s: u16) -> Self {
        Self {
            active,
            interval_s,
            variation_s,
        }
    }
}

/// Screen geometry and colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Screen width in pixels
    pub width: i32,
    /// Screen height in pixels
    pub height: i32,
    /// Colour index for background and overlays
    pub background: ColorIndex,
    /// Colour index for the eyes
    pub main: ColorIndex,
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EyesConfig {
    /// Screen width in pixels
    pub screen_width: u16,
    /// Screen height in pixels
    pub screen_height: u16,
    /// Maximum frames per second
    pub frame_rate: u8,
    /// Colour index for background and overlays
    pub background: ColorIndex,
    /// Colour index for the eyes
    pub main: ColorIndex,
    pub left: EyeShape,
    pub right: EyeShape,
    /// Horizontal gap between the eyes, negative values overlap them
    pub space_between: i16,
    pub autoblink: AutoMotion,
    pub idle: AutoMotion,
    /// Enlarge the outer eye when looking sideways
    pub curious: bool,
    /// Draw a single eye
    pub cyclops: bool,
    /// Sweat drops on the forehead
    pub sweat: bool,
}

impl Default for EyesConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            frame_rate: DEFAULT_FRAME_RATE,
            background: DEFAULT_BACKGROUND,
            main: DEFAULT_MAIN,
            left: EyeShape::default(),
            right: EyeShape::default(),
            space_between: DEFAULT_SPACE_BETWEEN,
            autoblink: AutoMotion::new(false, 1, 4),
            idle: AutoMotion::new(false, 1, 3),
            curious: false,
            cyclops: false,
            sweat: false,
        }
    }
}

impl EyesConfig {
    /// Default configuration for a given screen size
    pub fn for_screen(width: u16, height: u16) -> Self {
        Self {
            screen_width: width,
            screen_height: height,
            ..Self::default()
        }
    }

    /// Check all preconditions the engine relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::InvalidScreenSize);
        }
        validate_frame_rate(self.frame_rate)?;
        self.left.validate()?;
        self.right.validate()
    }

    /// Screen geometry and colours
    pub fn display(&self) -> DisplayConfig {
        DisplayConfig {
            width: i32::from(self.screen_width),
            height: i32::from(self.screen_height),
            background: self.background,
            main: self.main,
        }
    }
}

pub(crate) fn validate_frame_rate(fps: u8) -> Result<(), ConfigError> {
    if fps == 0 {
        Err(ConfigError::InvalidFrameRate)
    } else {
        Ok(())
    }
}

pub(crate) fn validate_eye_size(width: u16, height: u16) -> Result<(), ConfigError> {
    if width == 0 || height == 0 {
        Err(ConfigError::InvalidEyeSize)
    } else {
        Ok(())
    }
}

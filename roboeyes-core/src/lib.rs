//! Board-agnostic animation engine for RoboEyes
//!
//! Draws a pair of smoothly animated robot eyes onto any pixel display by
//! recomputing their geometry every frame and issuing a handful of filled
//! rounded rectangles and triangles:
//!
//! - Capability traits for drawing, time and randomness
//! - Tweened eye geometry (size, position, border radius, spacing)
//! - Mood eyelid overlays (tired, angry, happy)
//! - Macro animations (autoblink, idle gaze, confused, laugh, flicker, sweat)
//! - Frame renderer and frame-rate governor
//! - Configuration types and command application
//!
//! # Usage
//!
//! ```ignore
//! let mut eyes = Engine::new(EyesConfig::default(), canvas, clock, rng)?;
//! eyes.set_mood(Mood::Happy);
//! eyes.blink(Side::Both);
//!
//! loop {
//!     // Cheap to call often; only renders once per frame interval
//!     if eyes.tick() {
//!         flush_display();
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod fmt;

pub mod anim;
pub mod command;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod governor;
pub mod mood;
pub mod position;
pub mod render;
pub mod showcase;
pub mod traits;
pub mod tween;

#[cfg(test)]
pub(crate) mod mock;

pub use command::EyeCommand;
pub use config::{ConfigError, EyesConfig};
pub use engine::Engine;
pub use geometry::Side;
pub use mood::Mood;
pub use position::Position;
pub use showcase::Showcase;
pub use traits::{Canvas, Clock, RandomSource};

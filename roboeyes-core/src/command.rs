//! Applying protocol commands to an engine

pub use roboeyes_protocol::{EyeCommand, Eyes, Timing};

use crate::config::ConfigError;
use crate::engine::Engine;
use crate::fmt::debug;
use crate::geometry::Side;
use crate::mood::Mood;
use crate::position::Position;
use crate::traits::Clock;

impl From<Eyes> for Side {
    fn from(eyes: Eyes) -> Self {
        match eyes {
            Eyes::Left => Side::Left,
            Eyes::Right => Side::Right,
            Eyes::Both => Side::Both,
        }
    }
}

impl<C, K: Clock, R> Engine<C, K, R> {
    /// Dispatch a command to the matching setter
    ///
    /// Rejected values leave the engine unchanged.
    pub fn apply(&mut self, command: &EyeCommand) -> Result<(), ConfigError> {
        debug!("apply {}", command);
        match *command {
            EyeCommand::SetFrameRate { fps } => self.set_frame_rate(fps)?,
            EyeCommand::SetColors { background, main } => self.set_display_colors(background, main),
            EyeCommand::SetWidth { left, right } => self.set_width(left, right)?,
            EyeCommand::SetHeight { left, right } => self.set_height(left, right)?,
            EyeCommand::SetBorderRadius { left, right } => self.set_border_radius(left, right),
            EyeCommand::SetSpaceBetween { space } => self.set_space_between(space),
            EyeCommand::SetMood { code } => self.set_mood(Mood::from_code(code)),
            EyeCommand::SetPosition { code } => self.set_position(Position::from_code(code)),
            EyeCommand::Autoblinker { active, timing } => match timing {
                Some(t) => self.configure_autoblinker(active, t.interval_s, t.variation_s),
                None => self.set_autoblinker(active),
            },
            EyeCommand::IdleMode { active, timing } => match timing {
                Some(t) => self.configure_idle_mode(active, t.interval_s, t.variation_s),
                None => self.set_idle_mode(active),
            },
            EyeCommand::Curiosity { on } => self.set_curiosity(on),
            EyeCommand::Cyclops { on } => self.set_cyclops(on),
            EyeCommand::HFlicker { active, amplitude } => match amplitude {
                Some(amplitude) => self.set_h_flicker_with(active, amplitude),
                None => self.set_h_flicker(active),
            },
            EyeCommand::VFlicker { active, amplitude } => match amplitude {
                Some(amplitude) => self.set_v_flicker_with(active, amplitude),
                None => self.set_v_flicker(active),
            },
            EyeCommand::Sweat { on } => self.set_sweat(on),
            EyeCommand::Close(eyes) => self.close(eyes.into()),
            EyeCommand::Open(eyes) => self.open(eyes.into()),
            EyeCommand::Blink(eyes) => self.blink(eyes.into()),
            EyeCommand::Confused => self.anim_confused(),
            EyeCommand::Laugh => self.anim_laugh(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AutoMotion, EyesConfig};
    use crate::geometry::CLOSED_HEIGHT;
    use crate::mock::{ManualClock, RecordingCanvas, ScriptedRng};

    fn engine(clock: &ManualClock) -> Engine<RecordingCanvas, &ManualClock, ScriptedRng> {
        Engine::new(
            EyesConfig::default(),
            RecordingCanvas::new(),
            clock,
            ScriptedRng::new(&[0]),
        )
        .unwrap()
    }

    #[test]
    fn test_unknown_mood_code_means_neutral() {
        let clock = ManualClock::new(0);
        let mut engine = engine(&clock);
        engine.apply(&EyeCommand::SetMood { code: 2 }).unwrap();
        assert_eq!(engine.mood(), Mood::Angry);
        engine.apply(&EyeCommand::SetMood { code: 77 }).unwrap();
        assert_eq!(engine.mood(), Mood::Neutral);
    }

    #[test]
    fn test_rejected_command_leaves_engine_alone() {
        let clock = ManualClock::new(0);
        let mut engine = engine(&clock);
        let before = engine.config();
        assert_eq!(
            engine.apply(&EyeCommand::SetWidth { left: 0, right: 40 }),
            Err(ConfigError::InvalidEyeSize)
        );
        assert_eq!(
            engine.apply(&EyeCommand::SetFrameRate { fps: 0 }),
            Err(ConfigError::InvalidFrameRate)
        );
        assert_eq!(engine.config(), before);
    }

    #[test]
    fn test_timing_is_optional() {
        let clock = ManualClock::new(0);
        let mut engine = engine(&clock);
        engine
            .apply(&EyeCommand::Autoblinker {
                active: true,
                timing: None,
            })
            .unwrap();
        assert_eq!(engine.config().autoblink, AutoMotion::new(true, 1, 4));

        engine
            .apply(&EyeCommand::IdleMode {
                active: true,
                timing: Some(Timing {
                    interval_s: 2,
                    variation_s: 2,
                }),
            })
            .unwrap();
        assert_eq!(engine.config().idle, AutoMotion::new(true, 2, 2));
    }

    #[test]
    fn test_flicker_amplitude_kept_when_absent() {
        let clock = ManualClock::new(0);
        let mut engine = engine(&clock);
        engine
            .apply(&EyeCommand::VFlicker {
                active: true,
                amplitude: Some(4),
            })
            .unwrap();
        engine
            .apply(&EyeCommand::VFlicker {
                active: true,
                amplitude: None,
            })
            .unwrap();
        assert_eq!(engine.animations().v_flicker.amplitude(), 4);
    }

    #[test]
    fn test_per_eye_close() {
        let clock = ManualClock::new(0);
        let mut engine = engine(&clock);
        engine.apply(&EyeCommand::Close(Eyes::Right)).unwrap();
        assert_eq!(engine.layout().right().target_height(), CLOSED_HEIGHT);
        assert_eq!(engine.layout().left().target_height(), 36);
    }

    #[test]
    fn test_decoded_frame_applies() {
        let clock = ManualClock::new(0);
        let mut engine = engine(&clock);
        let frame = EyeCommand::Cyclops { on: true }.to_frame().unwrap();
        let command = EyeCommand::from_frame(&frame).unwrap();
        engine.apply(&command).unwrap();
        assert!(engine.is_cyclops());
    }
}

//! Eye commands
//!
//! One command per engine setter. Mood and position travel as their raw
//! codes; the receiving engine maps unknown codes to neutral / center.

use crate::frame::{Frame, FrameError, MAX_PAYLOAD_SIZE};
use heapless::Vec;

// Command type IDs: display configuration
pub const CMD_FRAME_RATE: u8 = 0x01;
pub const CMD_COLORS: u8 = 0x02;
pub const CMD_WIDTH: u8 = 0x03;
pub const CMD_HEIGHT: u8 = 0x04;
pub const CMD_BORDER_RADIUS: u8 = 0x05;
pub const CMD_SPACE_BETWEEN: u8 = 0x06;
pub const CMD_MOOD: u8 = 0x07;
pub const CMD_POSITION: u8 = 0x08;

// Command type IDs: behaviour switches
pub const CMD_AUTOBLINKER: u8 = 0x10;
pub const CMD_IDLE_MODE: u8 = 0x11;
pub const CMD_CURIOSITY: u8 = 0x12;
pub const CMD_CYCLOPS: u8 = 0x13;
pub const CMD_H_FLICKER: u8 = 0x14;
pub const CMD_V_FLICKER: u8 = 0x15;
pub const CMD_SWEAT: u8 = 0x16;

// Command type IDs: eyelid actions
pub const CMD_CLOSE: u8 = 0x20;
pub const CMD_OPEN: u8 = 0x21;
pub const CMD_BLINK: u8 = 0x22;

// Command type IDs: one-shot animations
pub const CMD_CONFUSED: u8 = 0x30;
pub const CMD_LAUGH: u8 = 0x31;

/// Which eye(s) an eyelid action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Eyes {
    Left,
    Right,
    Both,
}

impl Eyes {
    /// Bit 0 selects the left eye, bit 1 the right one
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0b01 => Some(Eyes::Left),
            0b10 => Some(Eyes::Right),
            0b11 => Some(Eyes::Both),
            _ => None,
        }
    }

    pub fn to_byte(self) -> u8 {
        match self {
            Eyes::Left => 0b01,
            Eyes::Right => 0b10,
            Eyes::Both => 0b11,
        }
    }
}

/// Interval settings of a repeating animation, in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    pub interval_s: u16,
    pub variation_s: u16,
}

/// Commands from the host controller to the eye display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EyeCommand {
    SetFrameRate { fps: u8 },
    SetColors { background: u8, main: u8 },
    SetWidth { left: u16, right: u16 },
    SetHeight { left: u16, right: u16 },
    SetBorderRadius { left: u8, right: u8 },
    /// Negative values make the eyes overlap
    SetSpaceBetween { space: i16 },
    SetMood { code: u8 },
    SetPosition { code: u8 },
    /// Without timing only the on/off state changes
    Autoblinker { active: bool, timing: Option<Timing> },
    IdleMode { active: bool, timing: Option<Timing> },
    Curiosity { on: bool },
    Cyclops { on: bool },
    /// Without amplitude the previous one is kept
    HFlicker { active: bool, amplitude: Option<u8> },
    VFlicker { active: bool, amplitude: Option<u8> },
    Sweat { on: bool },
    Close(Eyes),
    Open(Eyes),
    Blink(Eyes),
    Confused,
    Laugh,
}

impl EyeCommand {
    /// Encode this command into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        let mut payload = Payload::new();
        let kind = match *self {
            EyeCommand::SetFrameRate { fps } => {
                payload.u8(fps)?;
                CMD_FRAME_RATE
            }
            EyeCommand::SetColors { background, main } => {
                payload.u8(background)?;
                payload.u8(main)?;
                CMD_COLORS
            }
            EyeCommand::SetWidth { left, right } => {
                payload.u16(left)?;
                payload.u16(right)?;
                CMD_WIDTH
            }
            EyeCommand::SetHeight { left, right } => {
                payload.u16(left)?;
                payload.u16(right)?;
                CMD_HEIGHT
            }
            EyeCommand::SetBorderRadius { left, right } => {
                payload.u8(left)?;
                payload.u8(right)?;
                CMD_BORDER_RADIUS
            }
            EyeCommand::SetSpaceBetween { space } => {
                payload.bytes(&space.to_le_bytes())?;
                CMD_SPACE_BETWEEN
            }
            EyeCommand::SetMood { code } => {
                payload.u8(code)?;
                CMD_MOOD
            }
            EyeCommand::SetPosition { code } => {
                payload.u8(code)?;
                CMD_POSITION
            }
            EyeCommand::Autoblinker { active, timing } => {
                payload.timed(active, timing)?;
                CMD_AUTOBLINKER
            }
            EyeCommand::IdleMode { active, timing } => {
                payload.timed(active, timing)?;
                CMD_IDLE_MODE
            }
            EyeCommand::Curiosity { on } => {
                payload.flag(on)?;
                CMD_CURIOSITY
            }
            EyeCommand::Cyclops { on } => {
                payload.flag(on)?;
                CMD_CYCLOPS
            }
            EyeCommand::HFlicker { active, amplitude } => {
                payload.flicker(active, amplitude)?;
                CMD_H_FLICKER
            }
            EyeCommand::VFlicker { active, amplitude } => {
                payload.flicker(active, amplitude)?;
                CMD_V_FLICKER
            }
            EyeCommand::Sweat { on } => {
                payload.flag(on)?;
                CMD_SWEAT
            }
            EyeCommand::Close(eyes) => {
                payload.u8(eyes.to_byte())?;
                CMD_CLOSE
            }
            EyeCommand::Open(eyes) => {
                payload.u8(eyes.to_byte())?;
                CMD_OPEN
            }
            EyeCommand::Blink(eyes) => {
                payload.u8(eyes.to_byte())?;
                CMD_BLINK
            }
            EyeCommand::Confused => CMD_CONFUSED,
            EyeCommand::Laugh => CMD_LAUGH,
        };
        Frame::new(kind, &payload.0)
    }

    /// Parse a command from a frame
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        let p = &frame.payload[..];
        let command = match frame.kind {
            CMD_FRAME_RATE => EyeCommand::SetFrameRate { fps: exact::<1>(p)?[0] },
            CMD_COLORS => {
                let [background, main] = exact::<2>(p)?;
                EyeCommand::SetColors { background, main }
            }
            CMD_WIDTH => {
                let (left, right) = u16_pair(p)?;
                EyeCommand::SetWidth { left, right }
            }
            CMD_HEIGHT => {
                let (left, right) = u16_pair(p)?;
                EyeCommand::SetHeight { left, right }
            }
            CMD_BORDER_RADIUS => {
                let [left, right] = exact::<2>(p)?;
                EyeCommand::SetBorderRadius { left, right }
            }
            CMD_SPACE_BETWEEN => EyeCommand::SetSpaceBetween {
                space: i16::from_le_bytes(exact::<2>(p)?),
            },
            CMD_MOOD => EyeCommand::SetMood { code: exact::<1>(p)?[0] },
            CMD_POSITION => EyeCommand::SetPosition { code: exact::<1>(p)?[0] },
            CMD_AUTOBLINKER => {
                let (active, timing) = timed(p)?;
                EyeCommand::Autoblinker { active, timing }
            }
            CMD_IDLE_MODE => {
                let (active, timing) = timed(p)?;
                EyeCommand::IdleMode { active, timing }
            }
            CMD_CURIOSITY => EyeCommand::Curiosity { on: single_flag(p)? },
            CMD_CYCLOPS => EyeCommand::Cyclops { on: single_flag(p)? },
            CMD_H_FLICKER => {
                let (active, amplitude) = flicker(p)?;
                EyeCommand::HFlicker { active, amplitude }
            }
            CMD_V_FLICKER => {
                let (active, amplitude) = flicker(p)?;
                EyeCommand::VFlicker { active, amplitude }
            }
            CMD_SWEAT => EyeCommand::Sweat { on: single_flag(p)? },
            CMD_CLOSE => EyeCommand::Close(eyes(p)?),
            CMD_OPEN => EyeCommand::Open(eyes(p)?),
            CMD_BLINK => EyeCommand::Blink(eyes(p)?),
            CMD_CONFUSED => {
                exact::<0>(p)?;
                EyeCommand::Confused
            }
            CMD_LAUGH => {
                exact::<0>(p)?;
                EyeCommand::Laugh
            }
            _ => return Err(FrameError::UnknownType),
        };
        Ok(command)
    }
}

/// Payload under construction
struct Payload(Vec<u8, MAX_PAYLOAD_SIZE>);

impl Payload {
    fn new() -> Self {
        Self(Vec::new())
    }

    fn bytes(&mut self, bytes: &[u8]) -> Result<(), FrameError> {
        self.0
            .extend_from_slice(bytes)
            .map_err(|_| FrameError::PayloadTooLarge)
    }

    fn u8(&mut self, value: u8) -> Result<(), FrameError> {
        self.bytes(&[value])
    }

    fn u16(&mut self, value: u16) -> Result<(), FrameError> {
        self.bytes(&value.to_le_bytes())
    }

    fn flag(&mut self, on: bool) -> Result<(), FrameError> {
        self.u8(u8::from(on))
    }

    fn timed(&mut self, active: bool, timing: Option<Timing>) -> Result<(), FrameError> {
        self.flag(active)?;
        if let Some(timing) = timing {
            self.u16(timing.interval_s)?;
            self.u16(timing.variation_s)?;
        }
        Ok(())
    }

    fn flicker(&mut self, active: bool, amplitude: Option<u8>) -> Result<(), FrameError> {
        self.flag(active)?;
        if let Some(amplitude) = amplitude {
            self.u8(amplitude)?;
        }
        Ok(())
    }
}

fn exact<const N: usize>(payload: &[u8]) -> Result<[u8; N], FrameError> {
    payload.try_into().map_err(|_| FrameError::InvalidFrame)
}

fn flag(byte: u8) -> Result<bool, FrameError> {
    match byte {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(FrameError::InvalidFrame),
    }
}

fn single_flag(payload: &[u8]) -> Result<bool, FrameError> {
    flag(exact::<1>(payload)?[0])
}

fn u16_pair(payload: &[u8]) -> Result<(u16, u16), FrameError> {
    let [a, b, c, d] = exact::<4>(payload)?;
    Ok((u16::from_le_bytes([a, b]), u16::from_le_bytes([c, d])))
}

fn timed(payload: &[u8]) -> Result<(bool, Option<Timing>), FrameError> {
    match payload {
        [active] => Ok((flag(*active)?, None)),
        [active, rest @ ..] => {
            let (interval_s, variation_s) = u16_pair(rest)?;
            Ok((
                flag(*active)?,
                Some(Timing {
                    interval_s,
                    variation_s,
                }),
            ))
        }
        [] => Err(FrameError::InvalidFrame),
    }
}

fn flicker(payload: &[u8]) -> Result<(bool, Option<u8>), FrameError> {
    match payload {
        [active] => Ok((flag(*active)?, None)),
        [active, amplitude] => Ok((flag(*active)?, Some(*amplitude))),
        _ => Err(FrameError::InvalidFrame),
    }
}

fn eyes(payload: &[u8]) -> Result<Eyes, FrameError> {
    Eyes::from_byte(exact::<1>(payload)?[0]).ok_or(FrameError::InvalidFrame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameParser;

    #[test]
    fn test_set_width_layout() {
        let frame = EyeCommand::SetWidth {
            left: 36,
            right: 0x0102,
        }
        .to_frame()
        .unwrap();
        assert_eq!(frame.kind, CMD_WIDTH);
        assert_eq!(&frame.payload[..], &[36, 0, 0x02, 0x01]);
    }

    #[test]
    fn test_negative_spacing() {
        let frame = EyeCommand::SetSpaceBetween { space: -4 }.to_frame().unwrap();
        assert_eq!(&frame.payload[..], &[0xFC, 0xFF]);
        assert_eq!(
            EyeCommand::from_frame(&frame),
            Ok(EyeCommand::SetSpaceBetween { space: -4 })
        );
    }

    #[test]
    fn test_autoblinker_short_and_long_form() {
        let short = Frame::new(CMD_AUTOBLINKER, &[1]).unwrap();
        assert_eq!(
            EyeCommand::from_frame(&short),
            Ok(EyeCommand::Autoblinker {
                active: true,
                timing: None
            })
        );

        let long = Frame::new(CMD_AUTOBLINKER, &[1, 3, 0, 2, 0]).unwrap();
        assert_eq!(
            EyeCommand::from_frame(&long),
            Ok(EyeCommand::Autoblinker {
                active: true,
                timing: Some(Timing {
                    interval_s: 3,
                    variation_s: 2
                }),
            })
        );
    }

    #[test]
    fn test_flicker_amplitude_optional() {
        let frame = Frame::new(CMD_V_FLICKER, &[1, 7]).unwrap();
        assert_eq!(
            EyeCommand::from_frame(&frame),
            Ok(EyeCommand::VFlicker {
                active: true,
                amplitude: Some(7)
            })
        );
        let frame = Frame::new(CMD_H_FLICKER, &[0]).unwrap();
        assert_eq!(
            EyeCommand::from_frame(&frame),
            Ok(EyeCommand::HFlicker {
                active: false,
                amplitude: None
            })
        );
    }

    #[test]
    fn test_rejects_bad_flag() {
        let frame = Frame::new(CMD_CYCLOPS, &[2]).unwrap();
        assert_eq!(EyeCommand::from_frame(&frame), Err(FrameError::InvalidFrame));
    }

    #[test]
    fn test_rejects_wrong_length() {
        let frame = Frame::new(CMD_HEIGHT, &[1, 2, 3]).unwrap();
        assert_eq!(EyeCommand::from_frame(&frame), Err(FrameError::InvalidFrame));
        let frame = Frame::new(CMD_LAUGH, &[0]).unwrap();
        assert_eq!(EyeCommand::from_frame(&frame), Err(FrameError::InvalidFrame));
    }

    #[test]
    fn test_rejects_unknown_type_and_eyes() {
        assert_eq!(
            EyeCommand::from_frame(&Frame::empty(0x7F)),
            Err(FrameError::UnknownType)
        );
        let frame = Frame::new(CMD_BLINK, &[0]).unwrap();
        assert_eq!(EyeCommand::from_frame(&frame), Err(FrameError::InvalidFrame));
    }

    #[test]
    fn test_mood_code_passed_through() {
        // Interpretation is left to the engine
        let frame = Frame::new(CMD_MOOD, &[42]).unwrap();
        assert_eq!(
            EyeCommand::from_frame(&frame),
            Ok(EyeCommand::SetMood { code: 42 })
        );
    }

    #[test]
    fn test_command_over_the_wire() {
        let commands = [
            EyeCommand::SetFrameRate { fps: 100 },
            EyeCommand::SetColors {
                background: 0,
                main: 1,
            },
            EyeCommand::SetBorderRadius { left: 8, right: 3 },
            EyeCommand::SetPosition { code: 3 },
            EyeCommand::IdleMode {
                active: true,
                timing: Some(Timing {
                    interval_s: 2,
                    variation_s: 2,
                }),
            },
            EyeCommand::Sweat { on: true },
            EyeCommand::Close(Eyes::Left),
            EyeCommand::Open(Eyes::Right),
            EyeCommand::Blink(Eyes::Both),
            EyeCommand::Confused,
        ];

        let mut parser = FrameParser::new();
        for command in commands {
            let bytes = command.to_frame().unwrap().encode_to_vec().unwrap();
            let frame = parser.feed_bytes(&bytes).unwrap().unwrap();
            assert_eq!(EyeCommand::from_frame(&frame), Ok(command));
        }
    }
}

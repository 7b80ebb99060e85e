//! RoboEyes command protocol
//!
//! A host controller drives the eye display over UART. Every setter of the
//! animation engine has a matching [`EyeCommand`], carried in a small
//! checksummed frame:
//!
//! ```text
//! ┌───────┬────────┬──────┬─────────────┬──────────┐
//! │ START │ LENGTH │ TYPE │ PAYLOAD     │ CHECKSUM │
//! │ 0xE7  │ 1B     │ 1B   │ 0–16B       │ 1B       │
//! └───────┴────────┴──────┴─────────────┴──────────┘
//! ```
//!
//! Multi-byte integers are little-endian, flags are a single 0/1 byte.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod commands;
pub mod frame;

pub use commands::{EyeCommand, Eyes, Timing};
pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_PAYLOAD_SIZE};

//! Capability traits
//!
//! These traits define the interface between the animation engine and the
//! host: something to draw on, a millisecond clock and a random source.
//! The engine never touches hardware or global state directly.

pub mod canvas;
pub mod clock;
pub mod random;

pub use canvas::{Canvas, CanvasError, ColorIndex, NullCanvas, Point, RoundRect, Triangle};
pub use clock::Clock;
pub use random::{RandomSource, RngSource};

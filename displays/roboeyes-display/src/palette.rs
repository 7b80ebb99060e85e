//! Colour palette

use embedded_graphics::pixelcolor::{BinaryColor, PixelColor};
use roboeyes_core::traits::ColorIndex;

/// Index the engine uses for the background by default
pub const BACKGROUND_INDEX: ColorIndex = 0;

/// Pixel colours for the engine's colour indices
///
/// Index 0 is the background; every other index draws in the main colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette<C> {
    pub background: C,
    pub main: C,
}

impl<C: PixelColor> Palette<C> {
    pub const fn new(background: C, main: C) -> Self {
        Self { background, main }
    }

    /// Resolve a colour index
    pub fn color(&self, index: ColorIndex) -> C {
        if index == BACKGROUND_INDEX {
            self.background
        } else {
            self.main
        }
    }
}

impl Palette<BinaryColor> {
    /// Lit eyes on a dark panel
    pub const MONOCHROME: Self = Self::new(BinaryColor::Off, BinaryColor::On);
}

impl Default for Palette<BinaryColor> {
    fn default() -> Self {
        Self::MONOCHROME
    }
}

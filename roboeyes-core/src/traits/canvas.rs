//! Drawing capability

/// Semantic colour index
///
/// The engine only ever draws in two colours, the configured background and
/// main index. What they look like is up to the canvas implementation.
pub type ColorIndex = u8;

/// Errors reported by a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CanvasError {
    /// The underlying display rejected a primitive
    Draw,
    /// The frame could not be shown
    Present,
}

/// Pixel coordinate, may lie outside the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Filled rectangle with rounded corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RoundRect {
    /// Top-left corner
    pub x: i32,
    pub y: i32,
    /// Size in pixels, never negative
    pub width: i32,
    pub height: i32,
    /// Corner radius in pixels
    pub radius: i32,
    pub color: ColorIndex,
}

impl RoundRect {
    /// Build a rectangle, clamping negative sizes to zero
    pub fn new(x: i32, y: i32, width: i32, height: i32, radius: i32, color: ColorIndex) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
            radius: radius.max(0),
            color,
        }
    }
}

/// Filled triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Triangle {
    pub vertices: [Point; 3],
    pub color: ColorIndex,
}

impl Triangle {
    pub const fn new(a: Point, b: Point, c: Point, color: ColorIndex) -> Self {
        Self {
            vertices: [a, b, c],
            color,
        }
    }
}

/// Trait for anything the eyes can be drawn on
///
/// Implementations may buffer primitives and only push pixels to the panel
/// in [`Canvas::present`]. Errors are reported but the renderer carries on
/// with the rest of the frame.
pub trait Canvas {
    /// Fill the whole screen with the background
    fn clear(&mut self) -> Result<(), CanvasError>;

    /// Draw a filled rounded rectangle
    fn fill_round_rect(&mut self, rect: RoundRect) -> Result<(), CanvasError>;

    /// Draw a filled triangle
    fn fill_triangle(&mut self, triangle: Triangle) -> Result<(), CanvasError>;

    /// Show the finished frame
    fn present(&mut self) -> Result<(), CanvasError>;
}

impl<T: Canvas + ?Sized> Canvas for &mut T {
    fn clear(&mut self) -> Result<(), CanvasError> {
        (**self).clear()
    }

    fn fill_round_rect(&mut self, rect: RoundRect) -> Result<(), CanvasError> {
        (**self).fill_round_rect(rect)
    }

    fn fill_triangle(&mut self, triangle: Triangle) -> Result<(), CanvasError> {
        (**self).fill_triangle(triangle)
    }

    fn present(&mut self) -> Result<(), CanvasError> {
        (**self).present()
    }
}

/// Canvas that draws nothing
///
/// Lets the engine run headless, e.g. for simulation or before a display
/// has been attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn clear(&mut self) -> Result<(), CanvasError> {
        Ok(())
    }

    fn fill_round_rect(&mut self, _rect: RoundRect) -> Result<(), CanvasError> {
        Ok(())
    }

    fn fill_triangle(&mut self, _triangle: Triangle) -> Result<(), CanvasError> {
        Ok(())
    }

    fn present(&mut self) -> Result<(), CanvasError> {
        Ok(())
    }
}

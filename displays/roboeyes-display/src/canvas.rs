//! `Canvas` implementation for embedded-graphics draw targets

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle, Triangle};
use roboeyes_core::traits::{Canvas, CanvasError, RoundRect};

use crate::palette::Palette;

/// Draws the engine's primitives onto a `DrawTarget`
///
/// Primitives land in the target straight away. [`Canvas::present`] only
/// marks the frame as finished; the owner picks it up with
/// [`GraphicsCanvas::take_frame`] and flushes the target to the panel.
pub struct GraphicsCanvas<D: DrawTarget> {
    target: D,
    palette: Palette<D::Color>,
    frame_ready: bool,
}

impl<D: DrawTarget> GraphicsCanvas<D> {
    pub fn new(target: D, palette: Palette<D::Color>) -> Self {
        Self {
            target,
            palette,
            frame_ready: false,
        }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Whether a finished frame is waiting, clearing the flag
    pub fn take_frame(&mut self) -> bool {
        core::mem::take(&mut self.frame_ready)
    }
}

fn drawn<T, E>(result: Result<T, E>) -> Result<(), CanvasError> {
    result.map(|_| ()).map_err(|_| CanvasError::Draw)
}

fn size(width: i32, height: i32) -> Size {
    Size::new(width.max(0) as u32, height.max(0) as u32)
}

impl<D: DrawTarget> Canvas for GraphicsCanvas<D> {
    fn clear(&mut self) -> Result<(), CanvasError> {
        let result = self.target.clear(self.palette.background);
        drawn(result)
    }

    fn fill_round_rect(&mut self, rect: RoundRect) -> Result<(), CanvasError> {
        let bounds = Rectangle::new(Point::new(rect.x, rect.y), size(rect.width, rect.height));
        let radius = size(rect.radius, rect.radius);
        let style = PrimitiveStyle::with_fill(self.palette.color(rect.color));
        let result = RoundedRectangle::with_equal_corners(bounds, radius)
            .into_styled(style)
            .draw(&mut self.target);
        drawn(result)
    }

    fn fill_triangle(&mut self, triangle: roboeyes_core::traits::Triangle) -> Result<(), CanvasError> {
        let [a, b, c] = triangle
            .vertices
            .map(|vertex| Point::new(vertex.x, vertex.y));
        let style = PrimitiveStyle::with_fill(self.palette.color(triangle.color));
        let result = Triangle::new(a, b, c).into_styled(style).draw(&mut self.target);
        drawn(result)
    }

    fn present(&mut self) -> Result<(), CanvasError> {
        self.frame_ready = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::BinaryColor;
    use roboeyes_core::config::{EyeShape, EyesConfig};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use roboeyes_core::traits::{Clock, Point as EyePoint, RngSource, Triangle as EyeTriangle};
    use roboeyes_core::Engine;

    fn canvas() -> GraphicsCanvas<MockDisplay<BinaryColor>> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        GraphicsCanvas::new(display, Palette::MONOCHROME)
    }

    #[test]
    fn test_fill_round_rect() {
        let mut canvas = canvas();
        canvas
            .fill_round_rect(RoundRect::new(2, 2, 10, 6, 0, 1))
            .unwrap();

        assert_eq!(canvas.target().get_pixel(Point::new(5, 4)), Some(BinaryColor::On));
        assert_eq!(canvas.target().get_pixel(Point::new(11, 7)), Some(BinaryColor::On));
        assert_eq!(canvas.target().get_pixel(Point::new(12, 4)), None);
    }

    #[test]
    fn test_rounded_corners_are_left_out() {
        let mut canvas = canvas();
        canvas
            .fill_round_rect(RoundRect::new(0, 0, 20, 20, 8, 1))
            .unwrap();
        assert_eq!(canvas.target().get_pixel(Point::new(0, 0)), None);
        assert_eq!(canvas.target().get_pixel(Point::new(10, 10)), Some(BinaryColor::On));
    }

    #[test]
    fn test_triangle_masks_in_background() {
        let mut canvas = canvas();
        canvas
            .fill_round_rect(RoundRect::new(0, 0, 20, 20, 0, 1))
            .unwrap();
        canvas
            .fill_triangle(EyeTriangle::new(
                EyePoint::new(0, 0),
                EyePoint::new(19, 0),
                EyePoint::new(0, 19),
                0,
            ))
            .unwrap();
        assert_eq!(canvas.target().get_pixel(Point::new(2, 2)), Some(BinaryColor::Off));
        assert_eq!(canvas.target().get_pixel(Point::new(18, 18)), Some(BinaryColor::On));
    }

    #[test]
    fn test_empty_rect_draws_nothing() {
        let mut canvas = canvas();
        canvas
            .fill_round_rect(RoundRect {
                x: 4,
                y: 4,
                width: -3,
                height: 5,
                radius: 3,
                color: 1,
            })
            .unwrap();
        assert_eq!(canvas.target().get_pixel(Point::new(4, 4)), None);
    }

    #[test]
    fn test_frame_ready_only_after_present() {
        let mut canvas = canvas();
        canvas.clear().unwrap();
        canvas
            .fill_round_rect(RoundRect::new(2, 2, 10, 6, 0, 1))
            .unwrap();
        assert!(!canvas.take_frame());
        assert_eq!(canvas.target().get_pixel(Point::new(30, 30)), Some(BinaryColor::Off));

        canvas.present().unwrap();
        assert!(canvas.take_frame());
        assert!(!canvas.take_frame());
    }

    struct FixedClock(u32);

    impl Clock for FixedClock {
        fn now_ms(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_engine_draws_open_eyes() {
        let shape = EyeShape {
            width: 20,
            height: 20,
            border_radius: 4,
        };
        let config = EyesConfig {
            left: shape,
            right: shape,
            space_between: 4,
            ..EyesConfig::for_screen(64, 64)
        };
        let rng = RngSource::new(SmallRng::seed_from_u64(1));
        let mut engine = Engine::new(config, canvas(), FixedClock(0), rng).unwrap();
        // Blank start-up frame
        assert!(engine.canvas_mut().take_frame());

        for _ in 0..10 {
            engine.draw_frame();
        }
        assert!(engine.canvas_mut().take_frame());

        // (64 - 44) / 2 = 10, eyes at x 10..30 and 34..54, y 22..42
        let display = engine.canvas().target();
        assert_eq!(display.get_pixel(Point::new(20, 32)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(44, 32)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(32, 32)), Some(BinaryColor::Off));
        assert_eq!(display.get_pixel(Point::new(20, 5)), Some(BinaryColor::Off));
    }
}

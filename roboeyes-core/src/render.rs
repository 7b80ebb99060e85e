//! Frame renderer
//!
//! Composites one frame in a fixed order, later primitives masking earlier
//! ones:
//!
//! 1. clear
//! 2. left eye, then right eye (skipped in cyclops mode)
//! 3. tired eyelids
//! 4. angry eyelids
//! 5. happy bottom masks
//! 6. sweat drops
//! 7. present
//!
//! Eyelids and masks are drawn in the background colour. Draw failures are
//! logged and skipped, the rest of the frame is still drawn.

use crate::anim::Sweat;
use crate::config::DisplayConfig;
use crate::fmt::trace;
use crate::geometry::{EyeGeometry, PairLayout};
use crate::mood::Eyelids;
use crate::traits::canvas::{ColorIndex, Point, RoundRect, Triangle};
use crate::traits::{Canvas, CanvasError};

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub layout: &'a PairLayout,
    pub eyelids: &'a Eyelids,
    pub sweat: &'a Sweat,
    pub display: &'a DisplayConfig,
    pub cyclops: bool,
}

/// Draw a complete frame and present it
pub fn draw<C: Canvas + ?Sized>(canvas: &mut C, scene: &Scene<'_>) {
    let left = scene.layout.left();
    let right = scene.layout.right();
    let main = scene.display.main;
    let bg = scene.display.background;

    check(canvas.clear());

    check(canvas.fill_round_rect(eye_rect(left, main)));
    if !scene.cyclops {
        check(canvas.fill_round_rect(eye_rect(right, main)));
    }

    for lid in tired_lids(left, right, scene.eyelids.tired(), scene.cyclops, bg) {
        check(canvas.fill_triangle(lid));
    }
    for lid in angry_lids(left, right, scene.eyelids.angry(), scene.cyclops, bg) {
        check(canvas.fill_triangle(lid));
    }

    let offset = scene.eyelids.happy_offset();
    check(canvas.fill_round_rect(happy_mask(left, offset, bg)));
    if !scene.cyclops {
        check(canvas.fill_round_rect(happy_mask(right, offset, bg)));
    }

    if scene.sweat.is_enabled() {
        for droplet in scene.sweat.droplets() {
            check(canvas.fill_round_rect(droplet.rect(main)));
        }
    }

    check(canvas.present());
}

pub(crate) fn check(result: Result<(), CanvasError>) {
    if let Err(_e) = result {
        trace!("canvas error: {}", _e);
    }
}

fn eye_rect(eye: &EyeGeometry, color: ColorIndex) -> RoundRect {
    RoundRect::new(
        eye.x(),
        eye.y(),
        eye.width(),
        eye.height(),
        eye.radius(),
        color,
    )
}

/// Top edge, one pixel above the eye so no line of it peeks through
fn lid_top(eye: &EyeGeometry) -> i32 {
    eye.y() - 1
}

/// Tired lids slope down towards the outer corners
fn tired_lids(
    left: &EyeGeometry,
    right: &EyeGeometry,
    depth: i32,
    cyclops: bool,
    color: ColorIndex,
) -> [Triangle; 2] {
    let (lx, ly) = (left.x(), lid_top(left));
    let lw = left.width();
    if cyclops {
        let mid = lx + lw / 2;
        [
            Triangle::new(
                Point::new(lx, ly),
                Point::new(mid, ly),
                Point::new(lx, ly + depth),
                color,
            ),
            Triangle::new(
                Point::new(mid, ly),
                Point::new(lx + lw, ly),
                Point::new(lx + lw, ly + depth),
                color,
            ),
        ]
    } else {
        let (rx, ry) = (right.x(), lid_top(right));
        let rw = right.width();
        [
            Triangle::new(
                Point::new(lx, ly),
                Point::new(lx + lw, ly),
                Point::new(lx, ly + depth),
                color,
            ),
            Triangle::new(
                Point::new(rx, ry),
                Point::new(rx + rw, ry),
                Point::new(rx + rw, ry + depth),
                color,
            ),
        ]
    }
}

/// Angry lids slope down towards the nose
fn angry_lids(
    left: &EyeGeometry,
    right: &EyeGeometry,
    depth: i32,
    cyclops: bool,
    color: ColorIndex,
) -> [Triangle; 2] {
    let (lx, ly) = (left.x(), lid_top(left));
    let lw = left.width();
    if cyclops {
        let mid = lx + lw / 2;
        [
            Triangle::new(
                Point::new(lx, ly),
                Point::new(mid, ly),
                Point::new(mid, ly + depth),
                color,
            ),
            Triangle::new(
                Point::new(mid, ly),
                Point::new(lx + lw, ly),
                Point::new(mid, ly + depth),
                color,
            ),
        ]
    } else {
        let (rx, ry) = (right.x(), lid_top(right));
        let rw = right.width();
        [
            Triangle::new(
                Point::new(lx, ly),
                Point::new(lx + lw, ly),
                Point::new(lx + lw, ly + depth),
                color,
            ),
            Triangle::new(
                Point::new(rx, ry),
                Point::new(rx + rw, ry),
                Point::new(rx, ry + depth),
                color,
            ),
        ]
    }
}

/// Mask covering the bottom of the eye, `offset` pixels deep
///
/// The mask is a full default height tall and one pixel wider on either
/// side so the eye's rounded corners are covered too.
fn happy_mask(eye: &EyeGeometry, offset: i32, color: ColorIndex) -> RoundRect {
    RoundRect::new(
        eye.x() - 1,
        eye.y() + eye.height() - offset + 1,
        eye.width() + 2,
        eye.default_height(),
        eye.radius(),
        color,
    )
}

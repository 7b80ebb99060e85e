//! Eye geometry and pair layout
//!
//! Every frame the current values ease towards their targets. The right
//! eye's position is never set directly: it is re-derived from the left
//! eye's target position, the left eye's current width and the current
//! spacing before it is tweened.

use crate::config::{DisplayConfig, EyeShape, EyesConfig};
use crate::tween::Tween;

/// Height of a closed eye, eyes never collapse to nothing
pub const CLOSED_HEIGHT: i32 = 1;

/// Extra height of the outer eye when looking sideways in curious mode
pub const CURIOUS_HEIGHT_BONUS: i32 = 8;

/// Distance from a travel limit at which curiosity kicks in
pub const CURIOUS_EDGE_MARGIN: i32 = 10;

/// Which eye(s) an action applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    Left,
    Right,
    Both,
}

impl Side {
    pub fn includes_left(self) -> bool {
        matches!(self, Side::Left | Side::Both)
    }

    pub fn includes_right(self) -> bool {
        matches!(self, Side::Right | Side::Both)
    }
}

/// Tweened geometry of a single eye
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EyeGeometry {
    width: Tween,
    height: Tween,
    radius: Tween,
    x: Tween,
    y: Tween,
    default_width: i32,
    default_height: i32,
    default_radius: i32,
    height_offset: i32,
    open: bool,
}

impl EyeGeometry {
    /// A closed eye at (x, y) that opens to `shape` on the first frames
    fn new(shape: &EyeShape, x: i32, y: i32) -> Self {
        let width = i32::from(shape.width);
        let height = i32::from(shape.height);
        let radius = i32::from(shape.border_radius);
        Self {
            width: Tween::settled(width),
            height: Tween::new(CLOSED_HEIGHT, height),
            radius: Tween::settled(radius),
            x: Tween::settled(x),
            y: Tween::settled(y),
            default_width: width,
            default_height: height,
            default_radius: radius,
            height_offset: 0,
            open: false,
        }
    }

    pub fn x(&self) -> i32 {
        self.x.value()
    }

    pub fn y(&self) -> i32 {
        self.y.value()
    }

    pub fn width(&self) -> i32 {
        self.width.value()
    }

    pub fn height(&self) -> i32 {
        self.height.value()
    }

    pub fn radius(&self) -> i32 {
        self.radius.value()
    }

    pub fn target_x(&self) -> i32 {
        self.x.target()
    }

    pub fn target_y(&self) -> i32 {
        self.y.target()
    }

    pub fn target_height(&self) -> i32 {
        self.height.target()
    }

    pub fn default_width(&self) -> i32 {
        self.default_width
    }

    pub fn default_height(&self) -> i32 {
        self.default_height
    }

    pub fn default_radius(&self) -> i32 {
        self.default_radius
    }

    /// Curiosity bonus applied on the last frame
    pub fn height_offset(&self) -> i32 {
        self.height_offset
    }

    /// Whether the eye reopens on its own after closing
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Configured shape, as set through the setters
    pub fn shape(&self) -> EyeShape {
        EyeShape {
            width: clamp_u16(self.default_width),
            height: clamp_u16(self.default_height),
            border_radius: self.default_radius.clamp(0, i32::from(u8::MAX)) as u8,
        }
    }

    pub(crate) fn set_width(&mut self, width: i32) {
        self.width.set_target(width);
        self.default_width = width;
    }

    pub(crate) fn set_height(&mut self, height: i32) {
        self.height.set_target(height);
        self.default_height = height;
    }

    pub(crate) fn set_radius(&mut self, radius: i32) {
        self.radius.set_target(radius);
        self.default_radius = radius;
    }

    pub(crate) fn close(&mut self) {
        self.height.set_target(CLOSED_HEIGHT);
        self.open = false;
    }

    pub(crate) fn open(&mut self) {
        self.open = true;
    }

    /// Tween the height and keep the eye vertically centred
    fn advance_height(&mut self, offset: i32) {
        self.height_offset = offset;
        let height = self.height.step_biased(offset);
        self.y.nudge((self.default_height - height) / 2);
        self.y.nudge(-(offset / 2));
    }

    /// Head back to the default height once a blink has bottomed out
    fn reopen(&mut self) {
        if self.open && self.height.value() <= CLOSED_HEIGHT + self.height_offset {
            self.height.set_target(self.default_height);
        }
    }
}

fn clamp_u16(value: i32) -> u16 {
    value.clamp(0, i32::from(u16::MAX)) as u16
}

/// Both eyes plus the gap between them
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PairLayout {
    left: EyeGeometry,
    right: EyeGeometry,
    spacing: Tween,
    default_spacing: i32,
}

impl PairLayout {
    /// Centre the eyes on the screen, both closed
    pub fn new(config: &EyesConfig) -> Self {
        let screen = config.display();
        let spacing = i32::from(config.space_between);
        let left_w = i32::from(config.left.width);
        let right_w = i32::from(config.right.width);
        let left_h = i32::from(config.left.height);

        let left_x = (screen.width - (left_w + spacing + right_w)) / 2;
        let left_y = (screen.height - left_h) / 2;
        let right_x = left_x + left_w + spacing;

        Self {
            left: EyeGeometry::new(&config.left, left_x, left_y),
            right: EyeGeometry::new(&config.right, right_x, left_y),
            spacing: Tween::settled(spacing),
            default_spacing: spacing,
        }
    }

    pub fn left(&self) -> &EyeGeometry {
        &self.left
    }

    pub fn right(&self) -> &EyeGeometry {
        &self.right
    }

    pub(crate) fn eye_mut(&mut self, side: Side) -> impl Iterator<Item = &mut EyeGeometry> + '_ {
        let (left, right) = (side.includes_left(), side.includes_right());
        [(&mut self.left, left), (&mut self.right, right)]
            .into_iter()
            .filter_map(|(eye, selected)| selected.then_some(eye))
    }

    /// Current gap between the eyes
    pub fn spacing(&self) -> i32 {
        self.spacing.value()
    }

    /// Configured gap between the eyes
    pub fn default_spacing(&self) -> i32 {
        self.default_spacing
    }

    /// Rightmost x the left eye may travel to
    pub fn constraint_x(&self, screen_width: i32) -> i32 {
        screen_width - self.left.width() - self.spacing() - self.right.width()
    }

    /// Lowest y the left eye may travel to
    ///
    /// Uses the default height, the current one varies while blinking.
    pub fn constraint_y(&self, screen_height: i32) -> i32 {
        screen_height - self.left.default_height
    }

    /// Send the left eye (and with it the right one) towards `(x, y)`
    pub(crate) fn look_at(&mut self, x: i32, y: i32) {
        self.left.x.set_target(x);
        self.left.y.set_target(y);
    }

    pub(crate) fn set_spacing(&mut self, space: i32) {
        self.spacing.set_target(space);
        self.default_spacing = space;
    }

    pub(crate) fn close(&mut self, side: Side) {
        self.eye_mut(side).for_each(EyeGeometry::close);
    }

    pub(crate) fn open(&mut self, side: Side) {
        self.eye_mut(side).for_each(EyeGeometry::open);
    }

    pub(crate) fn blink(&mut self, side: Side) {
        self.close(side);
        self.open(side);
    }

    /// Displace both eyes horizontally for this frame
    pub(crate) fn shift_x(&mut self, dx: i32) {
        self.left.x.nudge(dx);
        self.right.x.nudge(dx);
    }

    /// Displace both eyes vertically for this frame
    pub(crate) fn shift_y(&mut self, dy: i32) {
        self.left.y.nudge(dy);
        self.right.y.nudge(dy);
    }

    /// Advance every tweened value one frame
    pub(crate) fn advance(&mut self, screen: &DisplayConfig, curious: bool, cyclops: bool) {
        let (left_offset, right_offset) = if curious {
            self.curious_offsets(screen.width, cyclops)
        } else {
            (0, 0)
        };

        self.left.advance_height(left_offset);
        self.right.advance_height(right_offset);
        self.left.reopen();
        self.right.reopen();

        self.left.width.step();
        self.right.width.step();
        self.spacing.step();

        self.left.x.step();
        self.left.y.step();
        self.right
            .x
            .set_target(self.left.x.target() + self.left.width() + self.spacing());
        self.right.y.set_target(self.left.y.target());
        self.right.x.step();
        self.right.y.step();

        self.left.radius.step();
        self.right.radius.step();
    }

    /// Height bonus for the outer eye when gazing towards an edge
    ///
    /// A single cyclops eye stands in for both, so it also grows when
    /// gazing right.
    fn curious_offsets(&self, screen_width: i32, cyclops: bool) -> (i32, i32) {
        let left_x = self.left.target_x();
        let near_left = left_x <= CURIOUS_EDGE_MARGIN;
        let near_right =
            cyclops && left_x >= self.constraint_x(screen_width) - CURIOUS_EDGE_MARGIN;
        let left = if near_left || near_right {
            CURIOUS_HEIGHT_BONUS
        } else {
            0
        };

        let right_limit = screen_width - self.right.width() - CURIOUS_EDGE_MARGIN;
        let right = if self.right.target_x() >= right_limit {
            CURIOUS_HEIGHT_BONUS
        } else {
            0
        };

        (left, right)
    }

    /// Hide the right eye and collapse the gap for this frame
    pub(crate) fn apply_cyclops(&mut self) {
        self.right.width.force(0);
        self.right.height.force(0);
        self.spacing.force(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> DisplayConfig {
        EyesConfig::default().display()
    }

    fn settle(layout: &mut PairLayout, curious: bool, cyclops: bool) {
        for _ in 0..40 {
            layout.advance(&screen(), curious, cyclops);
        }
    }

    #[test]
    fn test_initial_layout_is_centred_and_closed() {
        let layout = PairLayout::new(&EyesConfig::default());
        // (240 - (36 + 10 + 36)) / 2
        assert_eq!(layout.left().x(), 79);
        assert_eq!(layout.left().y(), 49);
        assert_eq!(layout.right().x(), 79 + 36 + 10);
        assert_eq!(layout.right().y(), 49);
        assert_eq!(layout.left().height(), CLOSED_HEIGHT);
        assert_eq!(layout.right().height(), CLOSED_HEIGHT);
        assert_eq!(layout.left().target_height(), 36);
        assert!(!layout.left().is_open());
    }

    #[test]
    fn test_eyes_open_on_their_own_at_startup() {
        let mut layout = PairLayout::new(&EyesConfig::default());
        settle(&mut layout, false, false);
        assert!(layout.left().height() >= 35);
        assert!(layout.right().height() >= 35);
        assert_eq!(layout.left().y(), 49);
    }

    #[test]
    fn test_blink_reopens() {
        let mut layout = PairLayout::new(&EyesConfig::default());
        settle(&mut layout, false, false);

        layout.blink(Side::Both);
        assert_eq!(layout.left().target_height(), CLOSED_HEIGHT);

        let mut bottomed_out = false;
        for _ in 0..40 {
            layout.advance(&screen(), false, false);
            bottomed_out |= layout.left().height() <= CLOSED_HEIGHT;
        }
        assert!(bottomed_out);
        assert_eq!(layout.left().target_height(), 36);
        assert!(layout.left().height() >= 35);
        assert!(layout.right().height() >= 35);
    }

    #[test]
    fn test_close_without_open_stays_closed() {
        let mut layout = PairLayout::new(&EyesConfig::default());
        settle(&mut layout, false, false);

        layout.close(Side::Left);
        settle(&mut layout, false, false);
        assert_eq!(layout.left().height(), CLOSED_HEIGHT);
        assert!(layout.right().height() >= 35);
    }

    #[test]
    fn test_right_eye_follows_left() {
        let mut layout = PairLayout::new(&EyesConfig::default());
        layout.look_at(0, 0);
        settle(&mut layout, false, false);

        assert!(layout.left().x() <= 1);
        assert_eq!(layout.right().target_x(), 36 + 10);
        assert_eq!(layout.right().target_y(), 0);
    }

    #[test]
    fn test_constraints() {
        let mut layout = PairLayout::new(&EyesConfig::default());
        settle(&mut layout, false, false);
        assert_eq!(layout.constraint_x(240), 240 - 36 - 10 - 36);
        assert_eq!(layout.constraint_y(135), 135 - 36);
    }

    #[test]
    fn test_curious_left_edge_grows_left_eye() {
        let mut layout = PairLayout::new(&EyesConfig::default());
        layout.look_at(0, 40);
        settle(&mut layout, true, false);
        assert_eq!(layout.left().height_offset(), CURIOUS_HEIGHT_BONUS);
        assert_eq!(layout.right().height_offset(), 0);
        assert!(layout.left().height() > 36);
    }

    #[test]
    fn test_curious_growth_keeps_bottom_edge() {
        let mut layout = PairLayout::new(&EyesConfig::default());
        layout.look_at(0, 40);
        settle(&mut layout, true, false);

        let left = layout.left();
        assert_eq!(left.target_y(), 40);
        assert_eq!(left.height(), 43);
        // Centring shift (36 - 43) / 2 plus half the bonus
        let expected = left.target_y() + (left.default_height() - left.height()) / 2
            - CURIOUS_HEIGHT_BONUS / 2;
        assert_eq!(left.y(), expected);
        assert_eq!(left.y(), 33);
        assert_eq!(left.y() + left.height(), 40 + 36);

        // The right eye is not curious and sits at the plain target
        assert_eq!(layout.right().y(), 40);
    }

    #[test]
    fn test_curious_right_edge_grows_right_eye() {
        let mut layout = PairLayout::new(&EyesConfig::default());
        settle(&mut layout, false, false);
        let max_x = layout.constraint_x(240);
        layout.look_at(max_x, 40);
        settle(&mut layout, true, false);
        assert_eq!(layout.left().height_offset(), 0);
        assert_eq!(layout.right().height_offset(), CURIOUS_HEIGHT_BONUS);
    }

    #[test]
    fn test_curious_cyclops_right_edge_grows_single_eye() {
        let mut layout = PairLayout::new(&EyesConfig::default());
        layout.look_at(200, 40);
        for _ in 0..40 {
            layout.advance(&screen(), true, true);
            layout.apply_cyclops();
        }
        assert_eq!(layout.left().height_offset(), CURIOUS_HEIGHT_BONUS);
    }

    #[test]
    fn test_cyclops_zeroes_right_eye() {
        let mut layout = PairLayout::new(&EyesConfig::default());
        settle(&mut layout, false, false);
        layout.advance(&screen(), false, true);
        layout.apply_cyclops();
        assert_eq!(layout.right().width(), 0);
        assert_eq!(layout.right().height(), 0);
        assert_eq!(layout.spacing(), 0);
        assert_eq!(layout.default_spacing(), 10);
    }

    #[test]
    fn test_setters_move_targets_and_defaults() {
        let mut layout = PairLayout::new(&EyesConfig::default());
        for eye in layout.eye_mut(Side::Right) {
            eye.set_width(50);
            eye.set_radius(3);
        }
        layout.set_spacing(-4);
        assert_eq!(layout.right().default_width(), 50);
        assert_eq!(layout.left().default_width(), 36);
        assert_eq!(layout.right().width(), 36);

        settle(&mut layout, false, false);
        assert!(layout.right().width() >= 49);
        assert!(layout.right().radius() >= 2);
        assert!(layout.spacing() <= -3);
    }
}

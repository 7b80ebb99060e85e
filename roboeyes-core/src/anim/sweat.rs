//! Sweat drops
//!
//! Three droplets, one per screen column, each sliding down from the top
//! edge while swelling, then thinning out until it reaches its randomised
//! travel limit and respawns somewhere else in its column. Positions and
//! sizes use sub-pixel steps, so they are kept in 16.16 fixed point.

use fixed::types::I16F16;

use crate::traits::canvas::{ColorIndex, RoundRect};
use crate::traits::random;
use crate::traits::RandomSource;

type Fix = I16F16;

/// Corner radius of every droplet
pub const SWEAT_RADIUS: i32 = 3;

/// Width of the left and right droplet columns
const COLUMN_WIDTH: i32 = 30;

/// Travel limit is `TRAVEL_MIN + random(TRAVEL_RANGE)`
const TRAVEL_MIN: i32 = 10;
const TRAVEL_RANGE: i32 = 10;

const START_Y: Fix = Fix::const_from_int(2);
const START_WIDTH: Fix = Fix::const_from_int(1);
const START_HEIGHT: Fix = Fix::const_from_int(2);

const HALF: Fix = Fix::from_bits(0x8000);
const TENTH: Fix = Fix::from_bits(0x199A);

/// Horizontal band a droplet respawns in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Column {
    Left,
    Center,
    Right,
}

impl Column {
    fn spawn_x<R: RandomSource + ?Sized>(self, screen_width: i32, rng: &mut R) -> i32 {
        match self {
            Column::Left => random::below(rng, COLUMN_WIDTH),
            Column::Center => {
                random::below(rng, screen_width - 2 * COLUMN_WIDTH) + COLUMN_WIDTH
            }
            Column::Right => (screen_width - COLUMN_WIDTH) + random::below(rng, COLUMN_WIDTH),
        }
    }
}

/// A single sweat drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Droplet {
    column: Column,
    origin_x: i32,
    x: i32,
    y: Fix,
    y_max: i32,
    width: Fix,
    height: Fix,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Droplet {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Droplet[x={}, y={}, max={}]",
            self.x,
            self.y.to_bits(),
            self.y_max
        );
    }
}

impl Droplet {
    /// A droplet that respawns on its first frame
    pub const fn new(column: Column) -> Self {
        Self {
            column,
            origin_x: 0,
            x: 0,
            y: START_Y,
            y_max: 0,
            width: START_WIDTH,
            height: START_HEIGHT,
        }
    }

    pub fn column(&self) -> Column {
        self.column
    }

    /// Travel limit of the current run
    pub fn y_max(&self) -> i32 {
        self.y_max
    }

    /// Advance one frame
    ///
    /// Returns `true` if the droplet respawned.
    pub fn advance<R: RandomSource + ?Sized>(&mut self, screen_width: i32, rng: &mut R) -> bool {
        let y_max = Fix::saturating_from_num(self.y_max);
        let respawned = if self.y <= y_max {
            self.y += HALF;
            false
        } else {
            self.origin_x = self.column.spawn_x(screen_width, rng);
            self.y = START_Y;
            self.y_max = random::below(rng, TRAVEL_RANGE) + TRAVEL_MIN;
            self.width = START_WIDTH;
            self.height = START_HEIGHT;
            true
        };

        // Swell in the first half of the run, thin out in the second
        if self.y <= Fix::saturating_from_num(self.y_max / 2) {
            self.width += HALF;
            self.height += HALF;
        } else {
            self.width -= TENTH;
            self.height -= HALF;
        }

        let x = Fix::saturating_from_num(self.origin_x) - self.width * HALF;
        self.x = to_px(x);
        respawned
    }

    /// Shape to draw, sizes clamped at zero
    pub fn rect(&self, color: ColorIndex) -> RoundRect {
        RoundRect::new(
            self.x,
            to_px(self.y),
            to_px(self.width),
            to_px(self.height),
            SWEAT_RADIUS,
            color,
        )
    }

    #[cfg(test)]
    pub(crate) fn primed(column: Column, origin_x: i32, y_max: i32) -> Self {
        Self {
            origin_x,
            y_max,
            ..Self::new(column)
        }
    }

    #[cfg(test)]
    pub(crate) fn size(&self) -> (Fix, Fix) {
        (self.width, self.height)
    }

    #[cfg(test)]
    pub(crate) fn y(&self) -> Fix {
        self.y
    }
}

/// Truncate towards zero, the way a pixel coordinate is taken from a fraction
fn to_px(value: Fix) -> i32 {
    value.round_to_zero().to_num()
}

/// The three droplets and the on/off switch
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sweat {
    enabled: bool,
    droplets: [Droplet; 3],
}

impl Default for Sweat {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Sweat {
    pub const fn new(enabled: bool) -> Self {
        Self {
            enabled,
            droplets: [
                Droplet::new(Column::Left),
                Droplet::new(Column::Center),
                Droplet::new(Column::Right),
            ],
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Switch on or off; droplets freeze in place while off
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn droplets(&self) -> &[Droplet; 3] {
        &self.droplets
    }

    /// Advance all droplets one frame, if enabled
    pub fn advance<R: RandomSource + ?Sized>(&mut self, screen_width: i32, rng: &mut R) {
        if !self.enabled {
            return;
        }
        for droplet in &mut self.droplets {
            droplet.advance(screen_width, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::ScriptedRng;

    #[test]
    fn test_constants() {
        assert_eq!(HALF, Fix::from_num(0.5));
        assert!((TENTH.to_num::<f32>() - 0.1).abs() < 0.0001);
    }

    #[test]
    fn test_droplet_swells_then_thins_then_respawns() {
        let mut rng = ScriptedRng::new(&[5, 3]);
        let mut drop = Droplet::primed(Column::Left, 12, 15);
        let mut previous = drop.size();

        for step in 1..=27 {
            assert!(!drop.advance(240, &mut rng), "respawned early at step {}", step);
            let (width, height) = drop.size();
            if drop.y() <= Fix::from_num(7) {
                assert!(width > previous.0 && height > previous.1);
            } else {
                assert!(width < previous.0 && height < previous.1);
            }
            previous = (width, height);
        }
        assert_eq!(drop.y(), Fix::from_num(15.5));

        assert!(drop.advance(240, &mut rng));
        assert_eq!(drop.y(), START_Y);
        assert_eq!(drop.y_max(), 13);
        // Origin 5, swelling to 1.5 wide
        assert_eq!(drop.rect(1).x, 4);
    }

    #[test]
    fn test_first_frame_respawns() {
        let mut rng = ScriptedRng::new(&[0]);
        let mut drop = Droplet::new(Column::Center);
        assert!(drop.advance(240, &mut rng));
        assert_eq!(drop.y_max(), 10);
        // Swelling from 1 to 1.5 wide, centred on x = 30
        assert_eq!(drop.rect(1).x, 29);
    }

    #[test]
    fn test_columns() {
        let mut rng = ScriptedRng::new(&[29]);
        assert_eq!(Column::Left.spawn_x(240, &mut rng), 29);
        assert_eq!(Column::Center.spawn_x(240, &mut rng), 29 + 30);
        assert_eq!(Column::Right.spawn_x(240, &mut rng), 210 + 29);
    }

    #[test]
    fn test_narrow_screen_center_column() {
        let mut rng = ScriptedRng::new(&[7]);
        assert_eq!(Column::Center.spawn_x(50, &mut rng), 30);
        assert_eq!(rng.calls(), 0);
    }

    #[test]
    fn test_shrunken_droplet_draws_empty() {
        let mut drop = Droplet::primed(Column::Left, 0, 0);
        drop.height = Fix::from_num(-1.5);
        assert_eq!(drop.rect(1).height, 0);
    }

    #[test]
    fn test_disabled_sweat_freezes() {
        let mut rng = ScriptedRng::new(&[3]);
        let mut sweat = Sweat::default();
        let before = sweat.clone();
        sweat.advance(240, &mut rng);
        assert_eq!(sweat, before);
        assert_eq!(rng.calls(), 0);

        sweat.set_enabled(true);
        sweat.advance(240, &mut rng);
        assert_eq!(rng.calls(), 6);
    }
}

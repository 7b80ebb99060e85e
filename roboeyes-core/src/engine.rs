//! The eye animation engine
//!
//! [`Engine`] owns all animation state plus the three capabilities it runs
//! on. Setters only ever change targets and flags; the current geometry is
//! advanced exclusively by the frame step, which runs from [`Engine::tick`]
//! once per frame interval:
//!
//! 1. tween geometry (sizes, spacing, positions, radii)
//! 2. macro animations (autoblink, shakes, idle gaze, flicker)
//! 3. cyclops override
//! 4. eyelid overlays
//! 5. sweat
//! 6. render

use crate::anim::Animations;
use crate::config::{AutoMotion, ConfigError, DisplayConfig, EyesConfig};
use crate::fmt::debug;
use crate::geometry::{PairLayout, Side};
use crate::governor::FrameGovernor;
use crate::mood::{Eyelids, Mood};
use crate::position::Position;
use crate::render::{self, Scene};
use crate::traits::canvas::ColorIndex;
use crate::traits::{Canvas, Clock, RandomSource};

/// Animated pair of robot eyes
pub struct Engine<C, K, R> {
    canvas: C,
    clock: K,
    rng: R,
    display: DisplayConfig,
    governor: FrameGovernor,
    layout: PairLayout,
    eyelids: Eyelids,
    anims: Animations,
    mood: Mood,
    curious: bool,
    cyclops: bool,
}

impl<C: Canvas, K: Clock, R: RandomSource> Engine<C, K, R> {
    /// Build an engine and blank the screen
    ///
    /// Both eyes start closed and open up over the first frames.
    pub fn new(config: EyesConfig, mut canvas: C, clock: K, rng: R) -> Result<Self, ConfigError> {
        if let Err(e) = config.validate() {
            debug!("rejected config: {}", e);
            return Err(e);
        }
        let governor = FrameGovernor::from_fps(config.frame_rate)?;
        let now = clock.now_ms();

        render::check(canvas.clear());
        render::check(canvas.present());

        Ok(Self {
            display: config.display(),
            governor,
            layout: PairLayout::new(&config),
            eyelids: Eyelids::default(),
            anims: Animations::new(&config, now),
            mood: Mood::Neutral,
            curious: config.curious,
            cyclops: config.cyclops,
            canvas,
            clock,
            rng,
        })
    }

    /// Render a frame if one is due
    ///
    /// Meant to be called far more often than the frame rate. Returns `true`
    /// if a frame was drawn.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now_ms();
        if !self.governor.ready(now) {
            return false;
        }
        self.step(now);
        true
    }

    /// Advance and render one frame right away, ignoring the frame rate
    pub fn draw_frame(&mut self) {
        let now = self.clock.now_ms();
        self.step(now);
    }

    fn step(&mut self, now: u32) {
        self.layout.advance(&self.display, self.curious, self.cyclops);
        self.anims
            .advance(&mut self.layout, &self.display, now, &mut self.rng);
        if self.cyclops {
            self.layout.apply_cyclops();
        }
        self.eyelids.advance(self.mood, self.layout.left().height());
        self.anims.sweat.advance(self.display.width, &mut self.rng);

        let scene = Scene {
            layout: &self.layout,
            eyelids: &self.eyelids,
            sweat: &self.anims.sweat,
            display: &self.display,
            cyclops: self.cyclops,
        };
        render::draw(&mut self.canvas, &scene);
    }
}

impl<C, K: Clock, R> Engine<C, K, R> {
    /// Change the maximum frame rate
    pub fn set_frame_rate(&mut self, fps: u8) -> Result<(), ConfigError> {
        self.governor.set_fps(fps)
    }

    /// Set the colour indices for background and eyes
    pub fn set_display_colors(&mut self, background: ColorIndex, main: ColorIndex) {
        self.display.background = background;
        self.display.main = main;
    }

    /// Set the eye widths, animating towards them
    pub fn set_width(&mut self, left: u16, right: u16) -> Result<(), ConfigError> {
        nonzero_sizes(left, right)?;
        self.layout.eye_mut(Side::Left).for_each(|e| e.set_width(i32::from(left)));
        self.layout.eye_mut(Side::Right).for_each(|e| e.set_width(i32::from(right)));
        Ok(())
    }

    /// Set the open eye heights, animating towards them
    pub fn set_height(&mut self, left: u16, right: u16) -> Result<(), ConfigError> {
        nonzero_sizes(left, right)?;
        self.layout.eye_mut(Side::Left).for_each(|e| e.set_height(i32::from(left)));
        self.layout.eye_mut(Side::Right).for_each(|e| e.set_height(i32::from(right)));
        Ok(())
    }

    /// Set the corner radius of each eye
    pub fn set_border_radius(&mut self, left: u8, right: u8) {
        self.layout.eye_mut(Side::Left).for_each(|e| e.set_radius(i32::from(left)));
        self.layout.eye_mut(Side::Right).for_each(|e| e.set_radius(i32::from(right)));
    }

    /// Set the gap between the eyes; negative values overlap them
    pub fn set_space_between(&mut self, space: i16) {
        self.layout.set_spacing(i32::from(space));
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
    }

    /// Look towards one of the predefined positions
    pub fn set_position(&mut self, position: Position) {
        let (x, y) = position.resolve(self.screen_constraint_x(), self.screen_constraint_y());
        self.layout.look_at(x, y);
    }

    /// Switch automatic blinking on or off
    pub fn set_autoblinker(&mut self, active: bool) {
        let now = self.clock.now_ms();
        self.anims.autoblink.set_active(active, now);
    }

    /// Switch automatic blinking on or off, with new timing in seconds
    pub fn configure_autoblinker(&mut self, active: bool, interval_s: u16, variation_s: u16) {
        let now = self.clock.now_ms();
        self.anims
            .autoblink
            .configure(AutoMotion::new(active, interval_s, variation_s), now);
    }

    /// Switch random gaze repositioning on or off
    pub fn set_idle_mode(&mut self, active: bool) {
        let now = self.clock.now_ms();
        self.anims.idle.set_active(active, now);
    }

    /// Switch random gaze repositioning on or off, with new timing in seconds
    pub fn configure_idle_mode(&mut self, active: bool, interval_s: u16, variation_s: u16) {
        let now = self.clock.now_ms();
        self.anims
            .idle
            .configure(AutoMotion::new(active, interval_s, variation_s), now);
    }

    /// Enlarge the outer eye when looking sideways
    pub fn set_curiosity(&mut self, curious: bool) {
        self.curious = curious;
    }

    /// Show a single eye
    pub fn set_cyclops(&mut self, cyclops: bool) {
        self.cyclops = cyclops;
    }

    pub fn set_h_flicker(&mut self, active: bool) {
        self.anims.h_flicker.set_active(active);
    }

    pub fn set_h_flicker_with(&mut self, active: bool, amplitude: u8) {
        self.anims.h_flicker.set(active, amplitude);
    }

    pub fn set_v_flicker(&mut self, active: bool) {
        self.anims.v_flicker.set_active(active);
    }

    pub fn set_v_flicker_with(&mut self, active: bool, amplitude: u8) {
        self.anims.v_flicker.set(active, amplitude);
    }

    pub fn set_sweat(&mut self, sweat: bool) {
        self.anims.sweat.set_enabled(sweat);
    }

    /// Close the eye(s) and keep them closed
    pub fn close(&mut self, side: Side) {
        self.layout.close(side);
    }

    /// Let closed eye(s) open again
    pub fn open(&mut self, side: Side) {
        self.layout.open(side);
    }

    /// Close and immediately reopen
    pub fn blink(&mut self, side: Side) {
        self.layout.blink(side);
    }

    /// Shake the eyes left and right for half a second
    pub fn anim_confused(&mut self) {
        self.anims.confused.trigger();
    }

    /// Shake the eyes up and down for half a second
    pub fn anim_laugh(&mut self) {
        self.anims.laugh.trigger();
    }

    /// Rightmost x the left eye can travel to
    pub fn screen_constraint_x(&self) -> i32 {
        self.layout.constraint_x(self.display.width)
    }

    /// Lowest y the left eye can travel to
    pub fn screen_constraint_y(&self) -> i32 {
        self.layout.constraint_y(self.display.height)
    }

    pub fn layout(&self) -> &PairLayout {
        &self.layout
    }

    pub fn eyelids(&self) -> &Eyelids {
        &self.eyelids
    }

    pub fn animations(&self) -> &Animations {
        &self.anims
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn frame_interval_ms(&self) -> u32 {
        self.governor.interval_ms()
    }

    pub fn is_curious(&self) -> bool {
        self.curious
    }

    pub fn is_cyclops(&self) -> bool {
        self.cyclops
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }

    /// Snapshot of the configured (target) values
    pub fn config(&self) -> EyesConfig {
        EyesConfig {
            screen_width: u16::try_from(self.display.width).unwrap_or(u16::MAX),
            screen_height: u16::try_from(self.display.height).unwrap_or(u16::MAX),
            frame_rate: self.governor.fps(),
            background: self.display.background,
            main: self.display.main,
            left: self.layout.left().shape(),
            right: self.layout.right().shape(),
            space_between: self.layout.default_spacing() as i16,
            autoblink: self.anims.autoblink.motion(),
            idle: self.anims.idle.motion(),
            curious: self.curious,
            cyclops: self.cyclops,
            sweat: self.anims.sweat.is_enabled(),
        }
    }
}

fn nonzero_sizes(left: u16, right: u16) -> Result<(), ConfigError> {
    if left == 0 || right == 0 {
        Err(ConfigError::InvalidEyeSize)
    } else {
        Ok(())
    }
}

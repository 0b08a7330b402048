//! Bounce physics of the ball.
//!
//! The ball moves horizontally at constant speed, reversing direction at
//! the edges of the playfield, while its vertical position follows the
//! absolute value of a cosine, like a ball bouncing off the floor with no
//! loss of energy. The spin of the ball is expressed as a *phase* angle
//! in `[0°, 45°)`, the period of the checkered pattern: two tiles, one
//! light and one dark, each 22.5° wide.

use crate::math::{
    angle::{Angle, degs},
    point::{Point2, pt2},
};
use crate::render::Screen;

/// The period of the checker pattern, in degrees.
pub const PHASE_PERIOD: f32 = 45.0;

/// The angular width of a single tile, in degrees.
pub const TILE_WIDTH: f32 = PHASE_PERIOD / 2.0;

/// The direction of horizontal motion.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Heading {
    Left,
    #[default]
    Right,
}

/// The constants of the bounce motion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Physics {
    /// Horizontal distance moved per frame, in pixels.
    pub speed: f32,
    /// Phase advance per frame, in degrees.
    pub spin: f32,
    /// The x coordinates at which the ball turns back.
    pub bounds: (f32, f32),
    /// The initial x coordinate of the ball's center.
    pub start_x: f32,
    /// Advance of the bounce angle per frame.
    pub bounce_step: Angle,
    /// The y coordinate of the ball's center at the lowest point.
    pub floor: f32,
    /// The height of the bounce, in pixels.
    pub height: f32,
}

/// The state of the animation on a given frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnimationState {
    /// The rotation phase, in degrees, in `[0, 45)`.
    pub phase: f32,
    /// The x coordinate of the ball's center.
    pub x: f32,
    /// The y coordinate of the ball's center.
    pub y: f32,
    /// The current direction of horizontal motion.
    pub heading: Heading,
    /// The angle driving the vertical bounce, in `[0°, 360°)`.
    pub bounce: Angle,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            speed: 2.1,
            spin: 2.5,
            bounds: (135.0, 505.0),
            start_x: 320.0,
            bounce_step: degs(1.5),
            floor: 350.0,
            height: 200.0,
        }
    }
}

impl Physics {
    /// Returns the y coordinate of the ball's center at bounce angle `a`.
    pub fn height_at(&self, a: Angle) -> f32 {
        use crate::math::float::f32;
        self.floor - self.height * f32::abs(a.cos())
    }

    /// Returns the phase shift of a single frame when moving towards
    /// `heading`.
    ///
    /// Moving right, the ball rolls clockwise, so the phase goes *down*
    /// by `spin`; this is expressed as an advance by `period − spin` to
    /// keep the phase non-negative.
    pub fn phase_shift(&self, heading: Heading) -> f32 {
        match heading {
            Heading::Right => PHASE_PERIOD - self.spin,
            Heading::Left => self.spin,
        }
    }
}

impl AnimationState {
    /// Returns the initial state of the animation with the given physics.
    pub fn new(phys: &Physics) -> Self {
        Self {
            phase: 0.0,
            x: phys.start_x,
            y: phys.height_at(Angle::ZERO),
            heading: Heading::Right,
            bounce: Angle::ZERO,
        }
    }

    /// Advances the animation by one frame.
    ///
    /// The phase shift is determined by the heading on entry; the heading
    /// is only updated after the horizontal move, once the new position is
    /// known.
    ///
    /// # Examples
    /// ```
    /// # use boing_core::{anim::*, assert_approx_eq};
    /// let phys = Physics::default();
    /// let s = AnimationState::new(&phys).step(&phys);
    /// assert_eq!(s.phase, 42.5);
    /// assert_approx_eq!(s.x, 322.1);
    /// assert_eq!(s.heading, Heading::Right);
    /// ```
    #[must_use]
    pub fn step(self, phys: &Physics) -> Self {
        use crate::math::float::f32;

        let phase = f32::rem_euclid(
            self.phase + phys.phase_shift(self.heading),
            PHASE_PERIOD,
        );
        let x = match self.heading {
            Heading::Right => self.x + phys.speed,
            Heading::Left => self.x - phys.speed,
        };
        let (left, right) = phys.bounds;
        let heading = if x >= right {
            Heading::Left
        } else if x <= left {
            Heading::Right
        } else {
            self.heading
        };
        let bounce =
            (self.bounce + phys.bounce_step).wrap(Angle::ZERO, Angle::FULL);

        Self {
            phase,
            x,
            y: phys.height_at(bounce),
            heading,
            bounce,
        }
    }

    /// Returns the center of the ball in screen space.
    pub fn center(&self) -> Point2<Screen> {
        pt2(self.x, self.y)
    }

    /// Returns the phase within a single tile, in `[0, 22.5)`.
    ///
    /// This is the rotation the sphere lattice is generated with; the other
    /// half of the period is expressed by swapping the tile colors.
    pub fn twist(&self) -> f32 {
        use crate::math::float::f32;
        f32::rem_euclid(self.phase, TILE_WIDTH)
    }

    /// Returns whether the first tile of the ball is dark rather than light.
    pub fn is_alternate(&self) -> bool {
        self.phase >= TILE_WIDTH
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(&Physics::default())
    }
}

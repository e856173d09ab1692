//! # Background Field
//!
//! The decorative star field behind the slides, generated once per session.
//!
//! - 200 ambient stars, every parameter sampled uniformly and independently
//! - 5 shooting-star slots on a fixed stagger: delays 0, 2, 4, 6, 8 seconds
//!
//! Positions are percentages of the viewport; timings are seconds. The field
//! is immutable after generation so the background never jumps when the
//! slide changes.
//!
//! Shooting stars are the exception: only their schedule is fixed. Their
//! trajectory origin is drawn again on every render pass via
//! [`ShootingStar::origin`].

use std::ops::Range;

use rand::Rng;

pub const STAR_COUNT: usize = 200;
pub const SHOOTING_STAR_COUNT: usize = 5;
/// Seconds between consecutive shooting-star slots.
pub const SHOOTING_STAR_STAGGER: f32 = 2.0;

pub const STAR_LEFT: Range<f32> = 0.0..100.0;
pub const STAR_TOP: Range<f32> = 0.0..100.0;
pub const STAR_DELAY: Range<f32> = 0.0..3.0;
pub const STAR_DURATION: Range<f32> = 2.0..5.0;
pub const STAR_SIZE: Range<f32> = 1.0..3.0;

pub const SHOOTING_LEFT: Range<f32> = 0.0..100.0;
/// Shooting stars only start in the upper half of the sky.
pub const SHOOTING_TOP: Range<f32> = 0.0..50.0;

/// One twinkling background star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Horizontal position, percent of width.
    pub left: f32,
    /// Vertical position, percent of height.
    pub top: f32,
    /// Seconds before the twinkle cycle starts.
    pub delay: f32,
    /// Length of one twinkle cycle in seconds.
    pub duration: f32,
    pub size: f32,
}

impl Star {
    fn sample<R: Rng>(rng: &mut R) -> Self {
        Self {
            left: rng.random_range(STAR_LEFT),
            top: rng.random_range(STAR_TOP),
            delay: rng.random_range(STAR_DELAY),
            duration: rng.random_range(STAR_DURATION),
            size: rng.random_range(STAR_SIZE),
        }
    }

    /// Brightness in `[0, 1]` at `elapsed` seconds into the session.
    ///
    /// Dark until `delay` has passed, then a smooth pulse of period `duration`.
    pub fn brightness(&self, elapsed: f32) -> f32 {
        let t = elapsed - self.delay;
        if t < 0.0 {
            return 0.0;
        }
        let phase = (t % self.duration) / self.duration;
        0.5 - 0.5 * (phase * std::f32::consts::TAU).cos()
    }
}

/// Where a shooting star begins its streak, percent of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub left: f32,
    pub top: f32,
}

/// One slot in the shooting-star schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShootingStar {
    pub delay: f32,
}

impl ShootingStar {
    /// Sample a fresh trajectory origin. The adapter holds the result until
    /// the current slide changes.
    pub fn origin<R: Rng>(&self, rng: &mut R) -> Origin {
        Origin {
            left: rng.random_range(SHOOTING_LEFT),
            top: rng.random_range(SHOOTING_TOP),
        }
    }

    /// Progress through the current streak in `[0, 1)`, or `None` before the
    /// slot's first appearance.
    ///
    /// All slots share one cycle long enough to fit the whole stagger, so at
    /// most one streak is mid-flight at a time.
    pub fn progress(&self, elapsed: f32, streak_secs: f32) -> Option<f32> {
        let t = elapsed - self.delay;
        if t < 0.0 {
            return None;
        }
        let cycle = SHOOTING_STAR_STAGGER * SHOOTING_STAR_COUNT as f32;
        let within = t % cycle;
        (within < streak_secs).then(|| within / streak_secs)
    }
}

/// The session's generated decoration. Never regenerated.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundField {
    stars: Vec<Star>,
    shooting_stars: Vec<ShootingStar>,
}

impl BackgroundField {
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let stars = (0..STAR_COUNT).map(|_| Star::sample(rng)).collect();
        let shooting_stars = (0..SHOOTING_STAR_COUNT)
            .map(|i| ShootingStar {
                delay: i as f32 * SHOOTING_STAR_STAGGER,
            })
            .collect();
        Self {
            stars,
            shooting_stars,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn shooting_stars(&self) -> &[ShootingStar] {
        &self.shooting_stars
    }

    /// One fresh origin per shooting-star slot, in slot order.
    pub fn sample_origins<R: Rng>(&self, rng: &mut R) -> Vec<Origin> {
        self.shooting_stars
            .iter()
            .map(|slot| slot.origin(rng))
            .collect()
    }
}

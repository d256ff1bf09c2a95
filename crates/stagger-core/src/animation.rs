#![forbid(unsafe_code)]

//! Composable animation primitives.
//!
//! Easing curves map normalized time to normalized progress. [`Ease`] names
//! the curves so that timelines can carry them as plain data, and [`Fade`]
//! is the basic time-based progress value used for transitions that run
//! outside an engine timeline (submenu height and opacity, for example).
//!
//! The GSAP-style names map onto polynomial orders as follows:
//!
//! | name       | order     |
//! |------------|-----------|
//! | `power1`   | quadratic |
//! | `power2`   | cubic     |
//! | `power3`   | quartic   |
//! | `power4`   | quintic   |

pub mod stagger;

use std::time::Duration;

// ---------------------------------------------------------------------------
// Easing functions
// ---------------------------------------------------------------------------

/// Easing function signature: maps `t` in [0, 1] to output in [0, 1].
pub type EasingFn = fn(f32) -> f32;

/// Identity easing (constant velocity).
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in (slow start).
#[inline]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out (slow end).
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out (slow start and end).
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Cubic ease-in (slower start than quadratic).
#[inline]
pub fn ease_in_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * t
}

/// Cubic ease-out (slower end than quadratic).
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Quartic ease-in.
#[inline]
pub fn ease_in_quart(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t.powi(4)
}

/// Quartic ease-out.
#[inline]
pub fn ease_out_quart(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Quartic ease-in-out.
#[inline]
pub fn ease_in_out_quart(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        8.0 * t.powi(4)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
    }
}

/// Quintic ease-out. Very fast start, long settle.
#[inline]
pub fn ease_out_quint(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(5)
}

// ---------------------------------------------------------------------------
// Named curves
// ---------------------------------------------------------------------------

/// A named easing curve that can be stored in a timeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    /// Constant velocity.
    #[default]
    Linear,
    /// Quadratic ease-out (`power1.out`).
    Power1Out,
    /// Quadratic ease-in-out (`power1.inOut`), close to CSS `ease`.
    Power1InOut,
    /// Cubic ease-out (`power2.out`).
    Power2Out,
    /// Quartic ease-in (`power3.in`).
    Power3In,
    /// Quartic ease-out (`power3.out`).
    Power3Out,
    /// Quartic ease-in-out (`power3.inOut`).
    Power3InOut,
    /// Quintic ease-out (`power4.out`).
    Power4Out,
}

impl Ease {
    /// The easing function backing this curve.
    #[must_use]
    pub const fn function(self) -> EasingFn {
        match self {
            Self::Linear => linear,
            Self::Power1Out => ease_out,
            Self::Power1InOut => ease_in_out,
            Self::Power2Out => ease_out_cubic,
            Self::Power3In => ease_in_quart,
            Self::Power3Out => ease_out_quart,
            Self::Power3InOut => ease_in_out_quart,
            Self::Power4Out => ease_out_quint,
        }
    }

    /// Apply the curve to normalized time `t`.
    #[inline]
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        (self.function())(t)
    }

    /// GSAP-style name, used in logs and snapshots.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "none",
            Self::Power1Out => "power1.out",
            Self::Power1InOut => "power1.inOut",
            Self::Power2Out => "power2.out",
            Self::Power3In => "power3.in",
            Self::Power3Out => "power3.out",
            Self::Power3InOut => "power3.inOut",
            Self::Power4Out => "power4.out",
        }
    }
}

// ---------------------------------------------------------------------------
// Animation trait
// ---------------------------------------------------------------------------

/// A time-based animation producing values in [0.0, 1.0].
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end.
    fn is_complete(&self) -> bool;

    /// Current output value, clamped to [0.0, 1.0].
    fn value(&self) -> f32;

    /// Reset the animation to its initial state.
    fn reset(&mut self);
}

// ---------------------------------------------------------------------------
// Fade
// ---------------------------------------------------------------------------

/// Linear progression from 0.0 to 1.0 over a duration, with configurable easing.
///
/// Tracks elapsed time as [`Duration`] internally for precise accumulation
/// (no floating-point drift). A zero duration completes on the first tick.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    elapsed: Duration,
    duration: Duration,
    ease: Ease,
}

impl Fade {
    /// Create a fade with the given duration and default linear easing.
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            ease: Ease::Linear,
        }
    }

    /// Set the easing curve.
    #[must_use]
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Total duration of the fade.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Raw linear progress (before easing), in [0.0, 1.0].
    pub fn raw_progress(&self) -> f32 {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }
}

impl Animation for Fade {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        self.ease.apply(self.raw_progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

/// Linear interpolation between `from` and `to` at eased progress `t`.
#[inline]
#[must_use]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

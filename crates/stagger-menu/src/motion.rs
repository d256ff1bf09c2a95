#![forbid(unsafe_code)]

//! Reduced-motion gate.
//!
//! Motion is simplified on narrow viewports and when the user asked the
//! platform for reduced motion. A simplified menu keeps every end state but
//! plays each transition with zero duration.

use crate::config::parse_flag;
use crate::error::ConfigError;

/// Overrides the reduced-motion preference (`1`/`0`, `true`/`false`).
pub const ENV_REDUCED_MOTION: &str = "STAGGER_REDUCED_MOTION";

/// Widest viewport, in CSS pixels, treated as mobile.
pub const MOBILE_MAX_WIDTH: u32 = 767;

/// Inputs of the simplification decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionGate {
    pub is_mobile: bool,
    pub prefers_reduced_motion: bool,
}

impl MotionGate {
    /// Full motion.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            is_mobile: false,
            prefers_reduced_motion: false,
        }
    }

    /// Gate for a viewport `width` pixels wide.
    #[must_use]
    pub const fn for_width(width: u32, prefers_reduced_motion: bool) -> Self {
        Self {
            is_mobile: width <= MOBILE_MAX_WIDTH,
            prefers_reduced_motion,
        }
    }

    /// Whether motion should be simplified.
    #[must_use]
    pub const fn should_simplify(&self) -> bool {
        self.is_mobile || self.prefers_reduced_motion
    }

    /// Factor applied to every duration.
    #[must_use]
    pub const fn timing_scale(&self) -> f32 {
        if self.should_simplify() { 0.0 } else { 1.0 }
    }

    /// Apply the `STAGGER_REDUCED_MOTION` override from an arbitrary lookup.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_REDUCED_MOTION) {
            self.prefers_reduced_motion = parse_flag(ENV_REDUCED_MOTION, &val)?;
        }
        Ok(())
    }

    /// Apply the override from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|name| std::env::var(name).ok())
    }
}

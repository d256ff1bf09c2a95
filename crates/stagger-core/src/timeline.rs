#![forbid(unsafe_code)]

//! Timelines: ordered tween steps with explicit start offsets.
//!
//! A [`Timeline`] is plain data. It is built once, handed to an
//! [`AnimationEngine`](crate::engine::AnimationEngine), and never mutated
//! afterwards. Batched tweens with a [`Stagger`] are expanded into one
//! [`Step`] per target at build time so that an engine only ever deals with
//! single-property steps.
//!
//! # Invariants
//!
//! 1. Steps keep insertion order; engines apply them in that order within a
//!    frame, so later steps win on conflicting properties.
//! 2. `duration()` is the latest `start + duration` over all steps, or zero
//!    for an empty timeline.
//! 3. A staggered batch over zero targets inserts nothing.

use std::time::Duration;

use crate::animation::Ease;
use crate::animation::stagger::Stagger;
use crate::engine::{LayerId, Property};

/// One single-property tween at a fixed offset in its timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Layer being animated.
    pub target: LayerId,
    /// Property being animated.
    pub property: Property,
    /// Start value; `None` reads the current value when the step starts.
    pub from: Option<f32>,
    /// End value.
    pub to: f32,
    /// Tween length.
    pub duration: Duration,
    /// Easing curve.
    pub ease: Ease,
    /// Offset from the start of the timeline.
    pub start: Duration,
}

impl Step {
    /// When this step reaches its end value.
    #[must_use]
    pub fn end(&self) -> Duration {
        self.start.saturating_add(self.duration)
    }
}

/// Shared shape of a tween applied to one or more targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Property being animated.
    pub property: Property,
    /// Explicit start value, if any.
    pub from: Option<f32>,
    /// End value.
    pub to: f32,
    /// Tween length.
    pub duration: Duration,
    /// Easing curve.
    pub ease: Ease,
}

impl Tween {
    /// Tween from the current value to `to`.
    #[must_use]
    pub const fn to(property: Property, to: f32, duration: Duration, ease: Ease) -> Self {
        Self {
            property,
            from: None,
            to,
            duration,
            ease,
        }
    }

    /// Tween from an explicit value to `to`.
    #[must_use]
    pub const fn from_to(
        property: Property,
        from: f32,
        to: f32,
        duration: Duration,
        ease: Ease,
    ) -> Self {
        Self {
            property,
            from: Some(from),
            to,
            duration,
            ease,
        }
    }

    fn at(self, target: LayerId, start: Duration) -> Step {
        Step {
            target,
            property: self.property,
            from: self.from,
            to: self.to,
            duration: self.duration,
            ease: self.ease,
            start,
        }
    }
}

/// An ordered list of steps played against one engine clock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    steps: Vec<Step>,
}

impl Timeline {
    /// Create an empty timeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a timeline from already expanded steps.
    #[must_use]
    pub fn from_steps(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Insert `tween` on one target at `start`.
    pub fn insert(&mut self, target: LayerId, tween: Tween, start: Duration) {
        self.steps.push(tween.at(target, start));
    }

    /// Insert `tween` on every target, spread out by `stagger`.
    pub fn insert_staggered(
        &mut self,
        targets: &[LayerId],
        tween: Tween,
        start: Duration,
        stagger: Stagger,
    ) {
        for (target, offset) in targets.iter().zip(stagger.offsets(targets.len())) {
            self.steps
                .push(tween.at(*target, start.saturating_add(offset)));
        }
    }

    /// Insert `tween` on every target at the same start time.
    pub fn insert_all(&mut self, targets: &[LayerId], tween: Tween, start: Duration) {
        for target in targets {
            self.steps.push(tween.at(*target, start));
        }
    }

    /// Append another timeline's steps, keeping their offsets.
    pub fn extend(&mut self, other: Timeline) {
        self.steps.extend(other.steps);
    }

    /// Steps in insertion order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Consume the timeline, returning its steps.
    #[must_use]
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the timeline has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Time at which the last step settles.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.steps
            .iter()
            .map(Step::end)
            .max()
            .unwrap_or(Duration::ZERO)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

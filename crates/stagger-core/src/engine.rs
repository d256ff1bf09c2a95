#![forbid(unsafe_code)]

//! Animation engine contract.
//!
//! The sequencer never animates anything itself. It reads layer properties,
//! writes presets, and hands [`Timeline`]s to an engine that plays them over
//! subsequent frames. [`AnimationEngine`] is the whole capability set it
//! relies on:
//!
//! - read and write a numeric property of a layer,
//! - play a timeline and get back a handle,
//! - kill a running timeline (no completion is ever reported for it),
//! - advance the clock by one frame,
//! - report completed timelines as drained events.
//!
//! "From current value" retargeting needs nothing extra: a killed timeline
//! leaves every property where the last frame put it, and the next timeline
//! either reads those values explicitly or uses steps with `from: None`.
//!
//! # Invariants
//!
//! 1. `kill` on a finished or unknown handle is a no-op returning `false`.
//! 2. Each played timeline yields at most one [`EngineEvent::Completed`].
//! 3. A killed timeline never yields `Completed`.

use std::fmt;
use std::time::Duration;

use crate::timeline::Timeline;

/// Handle to one visual layer owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub u32);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer#{}", self.0)
    }
}

/// Handle to a timeline handed to [`AnimationEngine::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimelineId(pub u64);

impl fmt::Display for TimelineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timeline#{}", self.0)
    }
}

/// Animatable numeric property of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    /// Horizontal offset as a percentage of the layer's own width.
    XPercent,
    /// Vertical offset as a percentage of the layer's own height.
    YPercent,
    /// Vertical offset in pixels.
    Y,
    /// Rotation in degrees.
    Rotate,
    /// Opacity in [0, 1].
    Opacity,
    /// Blend factor between two configured colors, in [0, 1].
    ColorMix,
}

impl Property {
    /// Every property, in storage order.
    pub const ALL: [Property; 6] = [
        Property::XPercent,
        Property::YPercent,
        Property::Y,
        Property::Rotate,
        Property::Opacity,
        Property::ColorMix,
    ];

    /// Value a freshly mounted layer starts with.
    #[must_use]
    pub const fn initial(self) -> f32 {
        match self {
            Self::Opacity => 1.0,
            _ => 0.0,
        }
    }

    /// Dense index for array-backed storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::XPercent => 0,
            Self::YPercent => 1,
            Self::Y => 2,
            Self::Rotate => 3,
            Self::Opacity => 4,
            Self::ColorMix => 5,
        }
    }

    /// CSS/GSAP-style name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::XPercent => "xPercent",
            Self::YPercent => "yPercent",
            Self::Y => "y",
            Self::Rotate => "rotate",
            Self::Opacity => "opacity",
            Self::ColorMix => "colorMix",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Event reported by an engine after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// Every step of the timeline reached its end value.
    Completed(TimelineId),
}

/// Capability set the menu sequencer needs from an animation library.
pub trait AnimationEngine {
    /// Current value of `property` on `layer`, or `None` if the layer is
    /// not mounted.
    fn value(&self, layer: LayerId, property: Property) -> Option<f32>;

    /// Set a property immediately, outside any timeline.
    ///
    /// Setting a property of an unmounted layer is ignored.
    fn set(&mut self, layer: LayerId, property: Property, value: f32);

    /// Start playing `timeline` from time zero.
    fn play(&mut self, timeline: Timeline) -> TimelineId;

    /// Kill a running timeline, leaving properties at their current values.
    ///
    /// Returns `true` if the timeline was running.
    fn kill(&mut self, id: TimelineId) -> bool;

    /// Whether the timeline is still running.
    fn is_running(&self, id: TimelineId) -> bool;

    /// Advance every running timeline by `dt`.
    fn advance(&mut self, dt: Duration);

    /// Drain events produced since the last call.
    fn drain_events(&mut self) -> Vec<EngineEvent>;
}

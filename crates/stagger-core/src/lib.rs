#![forbid(unsafe_code)]

//! Core: easing, stagger, timelines, and the animation engine contract.
//!
//! `stagger-core` knows nothing about menus. It provides the pieces a
//! sequencer composes: named easing curves, stagger offsets, plain-data
//! [`Timeline`](timeline::Timeline)s, the [`AnimationEngine`](engine::AnimationEngine)
//! trait that abstracts the animation library, and [`SceneEngine`](scene::SceneEngine),
//! a deterministic frame-driven implementation of that trait.

pub mod animation;
pub mod engine;
pub mod logging;
pub mod scene;
pub mod timeline;

pub use engine::{AnimationEngine, EngineEvent, LayerId, Property, TimelineId};
pub use scene::SceneEngine;
pub use timeline::{Step, Timeline, Tween};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

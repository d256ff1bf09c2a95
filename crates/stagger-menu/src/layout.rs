#![forbid(unsafe_code)]

//! Responsive layout resolver.
//!
//! Resolves the resting offsets that depend on which side the panel docks
//! to, and puts every layer into its initial state at mount. Running the
//! reset twice is harmless, which keeps remounts (hot reload, route changes)
//! safe.

use stagger_core::{AnimationEngine, Property};

use crate::config::Position;
use crate::layers::LayerMap;

/// Rotation of the vertical bar of the plus mark at rest.
pub const PLUS_V_ANGLE: f32 = 90.0;

/// Side-dependent offsets of one menu instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutResolver {
    position: Position,
}

impl LayoutResolver {
    /// Resolver for a panel docked on `position`.
    #[must_use]
    pub const fn new(position: Position) -> Self {
        Self { position }
    }

    /// Docking side.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Horizontal resting offset while closed, in percent of own width.
    ///
    /// Left-docked panels hide at -100%, right-docked panels at +100%.
    #[must_use]
    pub const fn offscreen_x_percent(&self) -> f32 {
        match self.position {
            Position::Left => -100.0,
            Position::Right => 100.0,
        }
    }

    /// Put every layer into its closed, initial state.
    ///
    /// Sliding layers go offscreen; icon, cross-mark bars, label offset and
    /// button color return to their rest values.
    pub fn reset<E: AnimationEngine>(&self, engine: &mut E, layers: &LayerMap) {
        let offscreen = self.offscreen_x_percent();
        for layer in layers.sliding() {
            engine.set(layer, Property::XPercent, offscreen);
        }
        if let Some(h) = layers.plus_h {
            engine.set(h, Property::Rotate, 0.0);
        }
        if let Some(v) = layers.plus_v {
            engine.set(v, Property::Rotate, PLUS_V_ANGLE);
        }
        if let Some(icon) = layers.icon {
            engine.set(icon, Property::Rotate, 0.0);
        }
        if let Some(label) = layers.label {
            engine.set(label, Property::YPercent, 0.0);
        }
        if let Some(button) = layers.button {
            engine.set(button, Property::ColorMix, 0.0);
        }
        stagger_core::debug!(
            position = %self.position,
            offscreen,
            layers = layers.sliding().len(),
            "layout reset"
        );
    }
}

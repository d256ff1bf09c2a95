#![forbid(unsafe_code)]

//! Deterministic in-memory animation engine.
//!
//! [`SceneEngine`] owns an arena of layers, each with a fixed set of numeric
//! properties, and plays [`Timeline`]s against a clock that only moves when
//! the host calls [`advance`](AnimationEngine::advance). Nothing here reads
//! wall-clock time, so identical frame sequences always produce identical
//! scenes; tests and the headless demo rely on that.
//!
//! # Playback rules
//!
//! - A step does nothing until the timeline clock reaches its `start`.
//! - On its first active frame a step with `from: None` captures the
//!   property's current value as its start value.
//! - Within one frame steps are applied in insertion order.
//! - A timeline completes on the first frame where its clock reaches
//!   [`Timeline::duration`]; the final values are applied before the
//!   [`EngineEvent::Completed`] event is queued.

use std::time::Duration;

use crate::animation::lerp;
use crate::engine::{AnimationEngine, EngineEvent, LayerId, Property, TimelineId};
use crate::timeline::{Step, Timeline};

const PROPERTY_COUNT: usize = Property::ALL.len();

#[derive(Debug, Clone)]
struct Layer {
    name: String,
    props: [f32; PROPERTY_COUNT],
    mounted: bool,
}

impl Layer {
    fn new(name: &str) -> Self {
        let mut props = [0.0; PROPERTY_COUNT];
        for prop in Property::ALL {
            props[prop.index()] = prop.initial();
        }
        Self {
            name: name.to_string(),
            props,
            mounted: true,
        }
    }
}

#[derive(Debug, Clone)]
struct ActiveStep {
    step: Step,
    from: Option<f32>,
}

#[derive(Debug, Clone)]
struct ActiveTimeline {
    id: TimelineId,
    steps: Vec<ActiveStep>,
    elapsed: Duration,
    duration: Duration,
}

/// Frame-driven [`AnimationEngine`] backed by a layer arena.
#[derive(Debug, Default)]
pub struct SceneEngine {
    layers: Vec<Layer>,
    running: Vec<ActiveTimeline>,
    events: Vec<EngineEvent>,
    next_id: u64,
    now: Duration,
}

impl SceneEngine {
    /// Create an engine with no layers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a new layer with initial property values.
    pub fn mount(&mut self, name: &str) -> LayerId {
        let id = LayerId(self.layers.len() as u32);
        self.layers.push(Layer::new(name));
        crate::trace!(layer = id.0, name, "mounted layer");
        id
    }

    /// Unmount a layer. Reads return `None` and writes are ignored afterwards.
    pub fn unmount(&mut self, id: LayerId) {
        if let Some(layer) = self.layers.get_mut(id.0 as usize) {
            layer.mounted = false;
        }
    }

    /// Debug name of a mounted layer.
    #[must_use]
    pub fn layer_name(&self, id: LayerId) -> Option<&str> {
        self.layer(id).map(|l| l.name.as_str())
    }

    /// Mounted layers in mount order.
    pub fn layers(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.layers
            .iter()
            .enumerate()
            .filter(|(_, l)| l.mounted)
            .map(|(i, _)| LayerId(i as u32))
    }

    /// Engine clock: total time advanced so far.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timelines still playing.
    #[must_use]
    pub fn running_count(&self) -> usize {
        self.running.len()
    }

    fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(id.0 as usize).filter(|l| l.mounted)
    }

    fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.get_mut(id.0 as usize).filter(|l| l.mounted)
    }

    fn apply(layers: &mut [Layer], active: &mut ActiveStep, elapsed: Duration) {
        let step = active.step;
        if elapsed < step.start {
            return;
        }
        let Some(layer) = layers
            .get_mut(step.target.0 as usize)
            .filter(|l| l.mounted)
        else {
            return;
        };
        let slot = &mut layer.props[step.property.index()];
        let from = *active.from.get_or_insert(step.from.unwrap_or(*slot));

        let local = elapsed - step.start;
        let t = if step.duration.is_zero() {
            1.0
        } else {
            (local.as_secs_f64() / step.duration.as_secs_f64()).min(1.0) as f32
        };
        *slot = lerp(from, step.to, step.ease.apply(t));
    }
}

impl AnimationEngine for SceneEngine {
    fn value(&self, layer: LayerId, property: Property) -> Option<f32> {
        self.layer(layer).map(|l| l.props[property.index()])
    }

    fn set(&mut self, layer: LayerId, property: Property, value: f32) {
        if let Some(l) = self.layer_mut(layer) {
            l.props[property.index()] = value;
        }
    }

    fn play(&mut self, timeline: Timeline) -> TimelineId {
        let id = TimelineId(self.next_id);
        self.next_id += 1;
        let duration = timeline.duration();
        crate::trace!(
            timeline = id.0,
            steps = timeline.len(),
            duration_ms = duration.as_millis() as u64,
            "play"
        );
        self.running.push(ActiveTimeline {
            id,
            steps: timeline
                .into_steps()
                .into_iter()
                .map(|step| ActiveStep { step, from: None })
                .collect(),
            elapsed: Duration::ZERO,
            duration,
        });
        id
    }

    fn kill(&mut self, id: TimelineId) -> bool {
        let before = self.running.len();
        self.running.retain(|t| t.id != id);
        let killed = self.running.len() < before;
        if killed {
            crate::trace!(timeline = id.0, "killed");
        }
        killed
    }

    fn is_running(&self, id: TimelineId) -> bool {
        self.running.iter().any(|t| t.id == id)
    }

    fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
        let layers = &mut self.layers;
        let events = &mut self.events;
        self.running.retain_mut(|timeline| {
            timeline.elapsed = timeline.elapsed.saturating_add(dt);
            for active in &mut timeline.steps {
                Self::apply(layers, active, timeline.elapsed);
            }
            if timeline.elapsed >= timeline.duration {
                events.push(EngineEvent::Completed(timeline.id));
                false
            } else {
                true
            }
        });
    }

    fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

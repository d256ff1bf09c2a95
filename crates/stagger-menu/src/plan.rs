#![forbid(unsafe_code)]

//! Timeline builder.
//!
//! Builds the open choreography as an [`OpenPlan`]: presets that hide the
//! item labels and socials, followed by stages that play in this order on
//! one clock:
//!
//! 1. **Layers**: background layers slide from where they are now to 0,
//!    one every `layer_stagger`.
//! 2. **Panel**: starts `panel_gap` after the last background layer (or
//!    immediately when there are none) and slides to 0.
//! 3. **Items**: item labels rise and un-rotate, starting `items_lead` into
//!    the panel slide, staggered in item order.
//! 4. **SocialTitle** / **SocialLinks**: start `socials_lead` into the panel
//!    slide; links follow the title and are staggered.
//!
//! Stages whose collection is empty are omitted entirely. The close
//! choreography is a single uniform tween of every sliding layer; its
//! length does not depend on how many items or links exist.
//!
//! Plans are rebuilt on every request from the layers' *current* offsets,
//! so reversing mid-flight continues from what is on screen.

use std::time::Duration;

use stagger_core::animation::stagger::Stagger;
use stagger_core::{AnimationEngine, LayerId, Property, Step, Timeline, Tween};

use crate::layers::LayerMap;
use crate::timing::MenuTiming;

/// Hidden vertical offset of item labels, in percent of own height.
pub const ITEM_HIDDEN_Y_PERCENT: f32 = 140.0;
/// Hidden tilt of item labels, in degrees.
pub const ITEM_HIDDEN_ROTATE: f32 = 10.0;
/// Hidden vertical offset of social links, in pixels.
pub const SOCIAL_HIDDEN_Y: f32 = 25.0;

/// What a stage animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    Layers,
    Panel,
    Items,
    SocialTitle,
    SocialLinks,
}

/// Steps of one stage, already expanded per target.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub kind: StageKind,
    pub steps: Vec<Step>,
}

impl Stage {
    /// Earliest start among the stage's steps.
    #[must_use]
    pub fn start(&self) -> Duration {
        self.steps
            .iter()
            .map(|s| s.start)
            .min()
            .unwrap_or(Duration::ZERO)
    }
}

/// Immediate property write applied before a plan plays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub target: LayerId,
    pub property: Property,
    pub value: f32,
}

impl Preset {
    fn new(target: LayerId, property: Property, value: f32) -> Self {
        Self {
            target,
            property,
            value,
        }
    }

    /// Write this preset to the engine.
    pub fn apply<E: AnimationEngine>(&self, engine: &mut E) {
        engine.set(self.target, self.property, self.value);
    }
}

/// Open choreography: presets plus ordered stages.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenPlan {
    pub presets: Vec<Preset>,
    pub stages: Vec<Stage>,
}

impl OpenPlan {
    /// The stage of `kind`, if it exists.
    #[must_use]
    pub fn stage(&self, kind: StageKind) -> Option<&Stage> {
        self.stages.iter().find(|s| s.kind == kind)
    }

    /// Time at which every stage has settled.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.stages
            .iter()
            .flat_map(|s| s.steps.iter().map(Step::end))
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Flatten into one timeline, stage by stage.
    #[must_use]
    pub fn timeline(&self) -> Timeline {
        Timeline::from_steps(
            self.stages
                .iter()
                .flat_map(|s| s.steps.iter().copied())
                .collect(),
        )
    }
}

/// Presets that hide item labels and socials.
///
/// Used both before an open plays and after a close completes, so the next
/// open always starts from the same hidden state.
#[must_use]
pub fn hidden_presets(layers: &LayerMap) -> Vec<Preset> {
    let mut presets = Vec::new();
    for label in &layers.item_labels {
        presets.push(Preset::new(*label, Property::YPercent, ITEM_HIDDEN_Y_PERCENT));
        presets.push(Preset::new(*label, Property::Rotate, ITEM_HIDDEN_ROTATE));
    }
    if let Some(title) = layers.social_title {
        presets.push(Preset::new(title, Property::Opacity, 0.0));
    }
    for link in &layers.social_links {
        presets.push(Preset::new(*link, Property::Y, SOCIAL_HIDDEN_Y));
        presets.push(Preset::new(*link, Property::Opacity, 0.0));
    }
    presets
}

/// Build the open plan from the layers' current offsets.
///
/// Returns `None` when the panel is not mounted.
pub fn build_open<E: AnimationEngine>(
    engine: &E,
    layers: &LayerMap,
    timing: &MenuTiming,
) -> Option<OpenPlan> {
    let panel = layers.panel?;
    let panel_from = engine.value(panel, Property::XPercent)?;

    let mut stages = Vec::new();

    // Background layers, back to front.
    let backgrounds: Vec<(LayerId, f32)> = layers
        .backgrounds
        .iter()
        .filter_map(|l| engine.value(*l, Property::XPercent).map(|x| (*l, x)))
        .collect();
    let layer_stagger = Stagger::each(timing.layer_stagger);
    if !backgrounds.is_empty() {
        let offsets = layer_stagger.offsets(backgrounds.len());
        let mut tl = Timeline::new();
        for ((layer, from), start) in backgrounds.iter().zip(offsets) {
            tl.insert(
                *layer,
                Tween::from_to(
                    Property::XPercent,
                    *from,
                    0.0,
                    timing.layer_duration,
                    timing.slide_ease,
                ),
                start,
            );
        }
        stages.push(Stage {
            kind: StageKind::Layers,
            steps: tl.into_steps(),
        });
    }

    // Panel.
    let panel_start = if backgrounds.is_empty() {
        Duration::ZERO
    } else {
        layer_stagger
            .span(backgrounds.len())
            .saturating_add(timing.panel_gap)
    };
    let mut tl = Timeline::new();
    tl.insert(
        panel,
        Tween::from_to(
            Property::XPercent,
            panel_from,
            0.0,
            timing.panel_duration,
            timing.slide_ease,
        ),
        panel_start,
    );
    stages.push(Stage {
        kind: StageKind::Panel,
        steps: tl.into_steps(),
    });

    // Item labels.
    if !layers.item_labels.is_empty() {
        let start = panel_start.saturating_add(timing.panel_duration.mul_f32(timing.items_lead));
        let stagger = Stagger::each(timing.item_stagger);
        let mut tl = Timeline::new();
        for (property, hidden) in [
            (Property::YPercent, ITEM_HIDDEN_Y_PERCENT),
            (Property::Rotate, ITEM_HIDDEN_ROTATE),
        ] {
            tl.insert_staggered(
                &layers.item_labels,
                Tween::from_to(property, hidden, 0.0, timing.item_duration, timing.item_ease),
                start,
                stagger,
            );
        }
        stages.push(Stage {
            kind: StageKind::Items,
            steps: tl.into_steps(),
        });
    }

    // Socials.
    let socials_start =
        panel_start.saturating_add(timing.panel_duration.mul_f32(timing.socials_lead));
    if let Some(title) = layers.social_title {
        let mut tl = Timeline::new();
        tl.insert(
            title,
            Tween::from_to(
                Property::Opacity,
                0.0,
                1.0,
                timing.social_title_duration,
                timing.social_title_ease,
            ),
            socials_start,
        );
        stages.push(Stage {
            kind: StageKind::SocialTitle,
            steps: tl.into_steps(),
        });
    }
    if !layers.social_links.is_empty() {
        let start = socials_start.saturating_add(timing.social_links_delay);
        let stagger = Stagger::each(timing.social_link_stagger);
        let mut tl = Timeline::new();
        for (property, from, to) in [
            (Property::Y, SOCIAL_HIDDEN_Y, 0.0),
            (Property::Opacity, 0.0, 1.0),
        ] {
            tl.insert_staggered(
                &layers.social_links,
                Tween::from_to(
                    property,
                    from,
                    to,
                    timing.social_link_duration,
                    timing.social_link_ease,
                ),
                start,
                stagger,
            );
        }
        stages.push(Stage {
            kind: StageKind::SocialLinks,
            steps: tl.into_steps(),
        });
    }

    Some(OpenPlan {
        presets: hidden_presets(layers),
        stages,
    })
}

/// Build the uniform close tween towards `offscreen`.
///
/// Every sliding layer tweens from its current offset over the same
/// duration. Returns `None` when the panel is not mounted.
#[must_use]
pub fn build_close(layers: &LayerMap, timing: &MenuTiming, offscreen: f32) -> Option<Timeline> {
    layers.panel?;
    let mut tl = Timeline::new();
    tl.insert_all(
        &layers.sliding(),
        Tween::to(
            Property::XPercent,
            offscreen,
            timing.close_duration,
            timing.close_ease,
        ),
        Duration::ZERO,
    );
    Some(tl)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MenuConfig, MenuItem, SocialItem};
    use crate::layout::LayoutResolver;
    use pretty_assertions::assert_eq;
    use stagger_core::SceneEngine;

    const MS_70: Duration = Duration::from_millis(70);

    fn mounted(items: usize, socials: usize, backgrounds: usize) -> (SceneEngine, LayerMap) {
        let config = MenuConfig {
            items: (0..items)
                .map(|i| MenuItem::link(&format!("Item {i}"), "#x"))
                .collect(),
            social_items: (0..socials)
                .map(|i| SocialItem::new(&format!("S{i}"), "https://s.example"))
                .collect(),
            ..MenuConfig::default()
        };
        let mut engine = SceneEngine::new();
        let layers = LayerMap::mount_scene(&mut engine, &config, backgrounds);
        LayoutResolver::new(config.position).reset(&mut engine, &layers);
        (engine, layers)
    }

    fn kinds(plan: &OpenPlan) -> Vec<StageKind> {
        plan.stages.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn full_plan_has_every_stage_in_order() {
        let (engine, layers) = mounted(3, 2, 2);
        let plan = build_open(&engine, &layers, &MenuTiming::default()).unwrap();
        assert_eq!(
            kinds(&plan),
            vec![
                StageKind::Layers,
                StageKind::Panel,
                StageKind::Items,
                StageKind::SocialTitle,
                StageKind::SocialLinks,
            ]
        );
    }

    #[test]
    fn background_layers_stagger_from_current_offset() {
        let (engine, layers) = mounted(0, 0, 3);
        let plan = build_open(&engine, &layers, &MenuTiming::default()).unwrap();
        let steps = &plan.stage(StageKind::Layers).unwrap().steps;
        let starts: Vec<Duration> = steps.iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![Duration::ZERO, MS_70, Duration::from_millis(140)]);
        assert!(steps.iter().all(|s| s.from == Some(100.0) && s.to == 0.0));
    }

    #[test]
    fn panel_follows_last_layer_plus_gap() {
        let (engine, layers) = mounted(0, 0, 2);
        let plan = build_open(&engine, &layers, &MenuTiming::default()).unwrap();
        assert_eq!(
            plan.stage(StageKind::Panel).unwrap().start(),
            Duration::from_millis(150)
        );
    }

    #[test]
    fn panel_starts_immediately_without_layers() {
        let (engine, layers) = mounted(1, 0, 0);
        let plan = build_open(&engine, &layers, &MenuTiming::default()).unwrap();
        assert!(plan.stage(StageKind::Layers).is_none());
        assert_eq!(plan.stage(StageKind::Panel).unwrap().start(), Duration::ZERO);
    }

    #[test]
    fn empty_collections_have_no_stage() {
        let (engine, layers) = mounted(0, 0, 2);
        let plan = build_open(&engine, &layers, &MenuTiming::default()).unwrap();
        assert_eq!(kinds(&plan), vec![StageKind::Layers, StageKind::Panel]);
        assert!(plan.presets.is_empty());
    }

    #[test]
    fn items_start_partway_into_panel() {
        let (engine, layers) = mounted(2, 0, 2);
        let timing = MenuTiming::default();
        let plan = build_open(&engine, &layers, &timing).unwrap();
        let panel_start = plan.stage(StageKind::Panel).unwrap().start();
        let items = plan.stage(StageKind::Items).unwrap();
        assert_eq!(
            items.start(),
            panel_start + timing.panel_duration.mul_f32(timing.items_lead)
        );
        // Two properties per item, first item first.
        assert_eq!(items.steps.len(), 4);
        assert_eq!(items.steps[0].target, layers.item_labels[0]);
        assert_eq!(items.steps[1].start - items.steps[0].start, timing.item_stagger);
    }

    #[test]
    fn social_links_follow_title() {
        let (engine, layers) = mounted(0, 2, 2);
        let timing = MenuTiming::default();
        let plan = build_open(&engine, &layers, &timing).unwrap();
        let title = plan.stage(StageKind::SocialTitle).unwrap().start();
        let links = plan.stage(StageKind::SocialLinks).unwrap().start();
        assert_eq!(links - title, timing.social_links_delay);
    }

    #[test]
    fn missing_panel_builds_nothing() {
        let engine = SceneEngine::new();
        let layers = LayerMap::default();
        assert!(build_open(&engine, &layers, &MenuTiming::default()).is_none());
        assert!(build_close(&layers, &MenuTiming::default(), 100.0).is_none());
    }

    #[test]
    fn close_is_uniform_regardless_of_counts() {
        let timing = MenuTiming::default();
        let (_, small) = mounted(0, 0, 1);
        let (_, large) = mounted(8, 5, 3);
        let a = build_close(&small, &timing, 100.0).unwrap();
        let b = build_close(&large, &timing, 100.0).unwrap();
        assert_eq!(a.duration(), timing.close_duration);
        assert_eq!(b.duration(), timing.close_duration);
        assert!(b.steps().iter().all(|s| s.start.is_zero() && s.from.is_none()));
    }

    #[test]
    fn open_duration_grows_with_items() {
        let timing = MenuTiming::default();
        let (e1, l1) = mounted(1, 0, 2);
        let (e2, l2) = mounted(6, 0, 2);
        let short = build_open(&e1, &l1, &timing).unwrap().duration();
        let long = build_open(&e2, &l2, &timing).unwrap().duration();
        assert!(long > short);
    }

    #[test]
    fn timeline_flattens_stage_order() {
        let (engine, layers) = mounted(1, 1, 1);
        let plan = build_open(&engine, &layers, &MenuTiming::default()).unwrap();
        let tl = plan.timeline();
        let count: usize = plan.stages.iter().map(|s| s.steps.len()).sum();
        assert_eq!(tl.len(), count);
        assert_eq!(tl.duration(), plan.duration());
        assert_eq!(tl.steps()[0].target, layers.backgrounds[0]);
    }
}

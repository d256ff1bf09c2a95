#![forbid(unsafe_code)]

//! Icon and label micro-animator for the toggle button.
//!
//! Three independent animations start together with every accepted toggle:
//! the plus icon spins to a cross (or back), the button label scrolls
//! through a short `Menu`/`Close` flourish, and the button color blends
//! towards its open color. Each runs on its own timeline so a new toggle
//! can kill and replace it without touching the panel choreography.
//!
//! The label is a vertical strip of lines. Scrolling the inner element by
//! `-(k / len) * 100%` shows line `k`, so the label currently displayed is
//! always recoverable from the inner element's offset.

use std::fmt;
use std::time::Duration;

use stagger_core::{AnimationEngine, Property, Timeline, TimelineId, Tween};

use crate::layers::LayerMap;
use crate::timing::MenuTiming;

/// Text shown on the toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Menu,
    Close,
}

impl Label {
    /// Visible text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Menu => "Menu",
            Self::Close => "Close",
        }
    }

    /// The other label.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Menu => Self::Close,
            Self::Close => Self::Menu,
        }
    }

    /// Label shown once a transition towards `open` settles.
    #[must_use]
    pub const fn for_state(open: bool) -> Self {
        if open { Self::Close } else { Self::Menu }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accessible name of the toggle button.
#[must_use]
pub const fn aria_label(open: bool) -> &'static str {
    if open { "Close menu" } else { "Open menu" }
}

/// Lines the label scrolls through, from `current` to `target`.
///
/// Starts at `current`, alternates `cycles` times, then appends `target`
/// unless the sequence already ends there. The result always ends at
/// `target` and has `cycles + 1` entries, or `cycles + 2` when `current`
/// equals `target`.
#[must_use]
pub fn label_cycle(current: Label, target: Label, cycles: usize) -> Vec<Label> {
    let mut seq = Vec::with_capacity(cycles + 2);
    seq.push(current);
    let mut last = current;
    for _ in 0..cycles {
        last = last.flip();
        seq.push(last);
    }
    if last != target {
        seq.push(target);
    }
    seq
}

/// Inner label offset, in percent, that shows line `index` of `len`.
#[must_use]
pub fn line_offset(index: usize, len: usize) -> f32 {
    if len == 0 {
        return 0.0;
    }
    -(index as f32 / len as f32) * 100.0
}

/// Drives the icon, label and color animations of the toggle button.
#[derive(Debug, Clone)]
pub struct ToggleAnimator {
    lines: Vec<Label>,
    change_color: bool,
    spin: Option<TimelineId>,
    scroll: Option<TimelineId>,
    tint: Option<TimelineId>,
}

impl ToggleAnimator {
    /// Animator at rest, showing `Menu`.
    #[must_use]
    pub fn new(change_color: bool) -> Self {
        Self {
            lines: vec![Label::Menu],
            change_color,
            spin: None,
            scroll: None,
            tint: None,
        }
    }

    /// Lines of the current label strip.
    #[must_use]
    pub fn lines(&self) -> &[Label] {
        &self.lines
    }

    /// Whether any of the three animations is still tracked as playing.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.spin.is_some() || self.scroll.is_some() || self.tint.is_some()
    }

    /// Start all three animations for a transition towards `opening`.
    pub fn animate<E: AnimationEngine>(
        &mut self,
        engine: &mut E,
        layers: &LayerMap,
        timing: &MenuTiming,
        opening: bool,
    ) {
        self.animate_icon(engine, layers, timing, opening);
        self.animate_color(engine, layers, timing, opening);
        self.animate_text(engine, layers, timing, opening);
    }

    /// Spin the icon to the cross (opening) or back to the plus.
    pub fn animate_icon<E: AnimationEngine>(
        &mut self,
        engine: &mut E,
        layers: &LayerMap,
        timing: &MenuTiming,
        opening: bool,
    ) {
        if let Some(id) = self.spin.take() {
            engine.kill(id);
        }
        let Some(icon) = layers.icon else {
            return;
        };
        let tween = if opening {
            Tween::to(
                Property::Rotate,
                timing.icon_open_angle,
                timing.icon_open_duration,
                timing.icon_open_ease,
            )
        } else {
            Tween::to(
                Property::Rotate,
                0.0,
                timing.icon_close_duration,
                timing.icon_close_ease,
            )
        };
        let mut tl = Timeline::new();
        tl.insert(icon, tween, Duration::ZERO);
        self.spin = Some(engine.play(tl));
    }

    /// Rebuild the label strip and scroll it to the target label.
    pub fn animate_text<E: AnimationEngine>(
        &mut self,
        engine: &mut E,
        layers: &LayerMap,
        timing: &MenuTiming,
        opening: bool,
    ) {
        let current = self.displayed(engine, layers);
        if let Some(id) = self.scroll.take() {
            engine.kill(id);
        }
        let target = Label::for_state(opening);
        self.lines = label_cycle(current, target, timing.label_cycles);
        let Some(label) = layers.label else {
            return;
        };
        let len = self.lines.len();
        engine.set(label, Property::YPercent, 0.0);
        let mut tl = Timeline::new();
        tl.insert(
            label,
            Tween::to(
                Property::YPercent,
                line_offset(len - 1, len),
                timing.label_duration(len),
                timing.label_ease,
            ),
            Duration::ZERO,
        );
        self.scroll = Some(engine.play(tl));
        stagger_core::trace!(from = %current, to = %target, lines = len, "label scroll");
    }

    /// Blend the button color towards its open or closed value.
    pub fn animate_color<E: AnimationEngine>(
        &mut self,
        engine: &mut E,
        layers: &LayerMap,
        timing: &MenuTiming,
        opening: bool,
    ) {
        if let Some(id) = self.tint.take() {
            engine.kill(id);
        }
        let Some(button) = layers.button else {
            return;
        };
        if !self.change_color {
            engine.set(button, Property::ColorMix, 0.0);
            return;
        }
        let mut tl = Timeline::new();
        tl.insert(
            button,
            Tween::to(
                Property::ColorMix,
                if opening { 1.0 } else { 0.0 },
                timing.color_duration,
                timing.color_ease,
            ),
            timing.color_delay,
        );
        self.tint = Some(engine.play(tl));
    }

    /// Label currently in view, derived from the inner label offset.
    #[must_use]
    pub fn displayed<E: AnimationEngine>(&self, engine: &E, layers: &LayerMap) -> Label {
        let len = self.lines.len();
        let offset = layers
            .label
            .and_then(|l| engine.value(l, Property::YPercent))
            .unwrap_or(0.0);
        let index = (-offset / 100.0 * len as f32).round().max(0.0) as usize;
        self.lines
            .get(index.min(len.saturating_sub(1)))
            .copied()
            .unwrap_or(Label::Menu)
    }

    /// Forget a completed timeline. Returns whether it belonged to this animator.
    pub fn finish(&mut self, id: TimelineId) -> bool {
        for slot in [&mut self.spin, &mut self.scroll, &mut self.tint] {
            if *slot == Some(id) {
                *slot = None;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MenuConfig;
    use crate::layout::LayoutResolver;
    use stagger_core::SceneEngine;

    const MS_16: Duration = Duration::from_millis(16);
    const MS_100: Duration = Duration::from_millis(100);
    const SECOND: Duration = Duration::from_secs(1);

    fn scene() -> (SceneEngine, LayerMap) {
        let config = MenuConfig::default();
        let mut engine = SceneEngine::new();
        let layers = LayerMap::mount_scene(&mut engine, &config, 2);
        LayoutResolver::new(config.position).reset(&mut engine, &layers);
        (engine, layers)
    }

    #[test]
    fn cycle_from_menu_to_close() {
        use Label::{Close, Menu};
        assert_eq!(label_cycle(Menu, Close, 3), vec![Menu, Close, Menu, Close]);
        assert_eq!(label_cycle(Close, Menu, 3), vec![Close, Menu, Close, Menu]);
    }

    #[test]
    fn cycle_never_collapses_when_already_at_target() {
        use Label::{Close, Menu};
        assert_eq!(
            label_cycle(Close, Close, 3),
            vec![Close, Menu, Close, Menu, Close]
        );
        assert_eq!(label_cycle(Menu, Menu, 0), vec![Menu]);
    }

    #[test]
    fn aria_label_tracks_state() {
        assert_eq!(aria_label(false), "Open menu");
        assert_eq!(aria_label(true), "Close menu");
    }

    #[test]
    fn line_offsets_split_travel_evenly() {
        assert_eq!(line_offset(0, 4), 0.0);
        assert_eq!(line_offset(3, 4), -75.0);
        assert_eq!(line_offset(0, 0), 0.0);
    }

    #[test]
    fn icon_spins_open_then_back() {
        let (mut engine, layers) = scene();
        let timing = MenuTiming::default();
        let mut anim = ToggleAnimator::new(true);
        let icon = layers.icon.unwrap();

        anim.animate_icon(&mut engine, &layers, &timing, true);
        engine.advance(SECOND);
        assert_eq!(engine.value(icon, Property::Rotate), Some(225.0));

        anim.animate_icon(&mut engine, &layers, &timing, false);
        engine.advance(SECOND);
        assert_eq!(engine.value(icon, Property::Rotate), Some(0.0));
    }

    #[test]
    fn respin_kills_previous_spin() {
        let (mut engine, layers) = scene();
        let timing = MenuTiming::default();
        let mut anim = ToggleAnimator::new(true);

        anim.animate_icon(&mut engine, &layers, &timing, true);
        let first = anim.spin.unwrap();
        engine.advance(MS_100);
        anim.animate_icon(&mut engine, &layers, &timing, false);
        assert!(!engine.is_running(first));
        assert!(engine.is_running(anim.spin.unwrap()));
    }

    #[test]
    fn label_scrolls_to_target() {
        let (mut engine, layers) = scene();
        let timing = MenuTiming::default();
        let mut anim = ToggleAnimator::new(true);
        assert_eq!(anim.displayed(&engine, &layers), Label::Menu);

        anim.animate_text(&mut engine, &layers, &timing, true);
        assert_eq!(anim.lines().len(), 4);
        assert_eq!(anim.displayed(&engine, &layers), Label::Menu);

        engine.advance(SECOND);
        assert_eq!(anim.displayed(&engine, &layers), Label::Close);
        assert_eq!(
            engine.value(layers.label.unwrap(), Property::YPercent),
            Some(-75.0)
        );
    }

    #[test]
    fn interrupted_scroll_restarts_from_visible_label() {
        let (mut engine, layers) = scene();
        let timing = MenuTiming::default();
        let mut anim = ToggleAnimator::new(true);

        anim.animate_text(&mut engine, &layers, &timing, true);
        engine.advance(MS_16);
        let visible = anim.displayed(&engine, &layers);
        anim.animate_text(&mut engine, &layers, &timing, false);
        assert_eq!(anim.lines()[0], visible);
        assert_eq!(*anim.lines().last().unwrap(), Label::Menu);
    }

    #[test]
    fn color_waits_then_blends() {
        let (mut engine, layers) = scene();
        let timing = MenuTiming::default();
        let mut anim = ToggleAnimator::new(true);
        let button = layers.button.unwrap();

        anim.animate_color(&mut engine, &layers, &timing, true);
        engine.advance(MS_100);
        assert_eq!(engine.value(button, Property::ColorMix), Some(0.0));
        engine.advance(SECOND);
        assert_eq!(engine.value(button, Property::ColorMix), Some(1.0));
    }

    #[test]
    fn color_pinned_when_disabled() {
        let (mut engine, layers) = scene();
        let timing = MenuTiming::default();
        let mut anim = ToggleAnimator::new(false);
        let button = layers.button.unwrap();
        engine.set(button, Property::ColorMix, 0.4);

        anim.animate_color(&mut engine, &layers, &timing, true);
        assert_eq!(engine.value(button, Property::ColorMix), Some(0.0));
        assert!(!anim.is_animating());
    }

    #[test]
    fn finish_clears_only_own_timelines() {
        let (mut engine, layers) = scene();
        let timing = MenuTiming::default();
        let mut anim = ToggleAnimator::new(true);
        anim.animate(&mut engine, &layers, &timing, true);
        assert!(!anim.finish(TimelineId(999)));

        engine.advance(SECOND * 2);
        for event in engine.drain_events() {
            let stagger_core::EngineEvent::Completed(id) = event;
            assert!(anim.finish(id));
        }
        assert!(!anim.is_animating());
    }
}

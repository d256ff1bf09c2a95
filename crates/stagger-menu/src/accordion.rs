#![forbid(unsafe_code)]

//! Submenu accordion.
//!
//! At most one submenu is expanded at a time. Expanding, collapsing and
//! switching retarget two independent transitions per submenu, max height
//! and opacity, which tick on the menu frame clock. They live outside the
//! engine timelines, so they never block a panel toggle and a panel toggle
//! never blocks them.

use std::time::Duration;

use stagger_core::animation::{Animation, Ease, Fade, lerp};

use crate::timing::MenuTiming;

/// Outcome of clicking a top-level item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentAction {
    /// The submenu at this index is now the open one.
    Expanded(usize),
    /// The submenu at this index was open and is now collapsing.
    Collapsed(usize),
    /// The item has no submenu: navigate and close the menu.
    CloseMenu,
}

/// One value easing towards a target, retargetable mid-flight.
#[derive(Debug, Clone, Copy)]
struct Transition {
    from: f32,
    to: f32,
    fade: Fade,
}

impl Transition {
    fn settled(value: f32) -> Self {
        let mut fade = Fade::new(Duration::ZERO);
        fade.tick(Duration::from_nanos(1));
        Self {
            from: value,
            to: value,
            fade,
        }
    }

    fn value(&self) -> f32 {
        lerp(self.from, self.to, self.fade.value())
    }

    fn retarget(&mut self, to: f32, duration: Duration, ease: Ease) {
        if to == self.to {
            return;
        }
        self.from = self.value();
        self.to = to;
        self.fade = Fade::new(duration).ease(ease);
    }

    fn tick(&mut self, dt: Duration) {
        self.fade.tick(dt);
    }

    fn is_settled(&self) -> bool {
        self.fade.is_complete()
    }
}

#[derive(Debug, Clone, Copy)]
struct Submenu {
    height: Transition,
    opacity: Transition,
}

impl Submenu {
    fn collapsed() -> Self {
        Self {
            height: Transition::settled(0.0),
            opacity: Transition::settled(0.0),
        }
    }
}

/// Exclusive-open submenu state with per-submenu transitions.
#[derive(Debug, Clone)]
pub struct Accordion {
    open: Option<usize>,
    submenus: Vec<Submenu>,
    max_height: f32,
    height_duration: Duration,
    opacity_duration: Duration,
    ease: Ease,
}

impl Accordion {
    /// Accordion over `count` top-level items, all collapsed.
    #[must_use]
    pub fn new(count: usize, timing: &MenuTiming) -> Self {
        Self {
            open: None,
            submenus: vec![Submenu::collapsed(); count],
            max_height: timing.submenu_max_height,
            height_duration: timing.submenu_height_duration,
            opacity_duration: timing.submenu_opacity_duration,
            ease: timing.submenu_ease,
        }
    }

    /// Replace transition lengths, e.g. after reduced motion changed.
    pub fn set_timing(&mut self, timing: &MenuTiming) {
        self.max_height = timing.submenu_max_height;
        self.height_duration = timing.submenu_height_duration;
        self.opacity_duration = timing.submenu_opacity_duration;
        self.ease = timing.submenu_ease;
    }

    /// Index of the expanded submenu.
    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Handle a click on the top-level item at `index`.
    pub fn select_parent(&mut self, index: usize, has_children: bool) -> ParentAction {
        if !has_children {
            return ParentAction::CloseMenu;
        }
        if self.open == Some(index) {
            self.open = None;
            self.retarget(index, false);
            return ParentAction::Collapsed(index);
        }
        if let Some(prev) = self.open.replace(index) {
            self.retarget(prev, false);
        }
        self.retarget(index, true);
        ParentAction::Expanded(index)
    }

    /// Collapse whichever submenu is open.
    pub fn collapse_all(&mut self) {
        if let Some(prev) = self.open.take() {
            self.retarget(prev, false);
        }
    }

    /// Advance every submenu transition by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        for sub in &mut self.submenus {
            sub.height.tick(dt);
            sub.opacity.tick(dt);
        }
    }

    /// Whether no transition is in flight.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.submenus
            .iter()
            .all(|s| s.height.is_settled() && s.opacity.is_settled())
    }

    /// Current max height of submenu `index`, in pixels.
    #[must_use]
    pub fn max_height(&self, index: usize) -> f32 {
        self.submenus.get(index).map_or(0.0, |s| s.height.value())
    }

    /// Current opacity of submenu `index`.
    #[must_use]
    pub fn opacity(&self, index: usize) -> f32 {
        self.submenus.get(index).map_or(0.0, |s| s.opacity.value())
    }

    /// Whether submenu `index` is hidden from assistive technology.
    #[must_use]
    pub fn aria_hidden(&self, index: usize) -> bool {
        self.open != Some(index)
    }

    fn retarget(&mut self, index: usize, expand: bool) {
        let (height, opacity) = if expand {
            (self.max_height, 1.0)
        } else {
            (0.0, 0.0)
        };
        let Some(sub) = self.submenus.get_mut(index) else {
            return;
        };
        sub.height.retarget(height, self.height_duration, self.ease);
        sub.opacity.retarget(opacity, self.opacity_duration, self.ease);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);
    const MS_300: Duration = Duration::from_millis(300);

    fn accordion() -> Accordion {
        Accordion::new(3, &MenuTiming::default())
    }

    #[test]
    fn starts_collapsed() {
        let acc = accordion();
        assert_eq!(acc.open_index(), None);
        assert_eq!(acc.max_height(0), 0.0);
        assert!(acc.aria_hidden(0));
        assert!(acc.is_settled());
    }

    #[test]
    fn leaf_item_closes_menu() {
        let mut acc = accordion();
        assert_eq!(acc.select_parent(1, false), ParentAction::CloseMenu);
        assert_eq!(acc.open_index(), None);
    }

    #[test]
    fn expand_then_collapse_same_index() {
        let mut acc = accordion();
        assert_eq!(acc.select_parent(0, true), ParentAction::Expanded(0));
        acc.tick(MS_300);
        assert_eq!(acc.max_height(0), 280.0);
        assert_eq!(acc.opacity(0), 1.0);
        assert!(!acc.aria_hidden(0));

        assert_eq!(acc.select_parent(0, true), ParentAction::Collapsed(0));
        acc.tick(MS_300);
        assert_eq!(acc.max_height(0), 0.0);
        assert!(acc.aria_hidden(0));
    }

    #[test]
    fn switching_is_exclusive() {
        let mut acc = accordion();
        acc.select_parent(0, true);
        acc.tick(MS_300);
        assert_eq!(acc.select_parent(2, true), ParentAction::Expanded(2));
        assert_eq!(acc.open_index(), Some(2));
        acc.tick(MS_300);
        assert_eq!(acc.max_height(0), 0.0);
        assert_eq!(acc.max_height(2), 280.0);
    }

    #[test]
    fn opacity_settles_before_height() {
        let mut acc = accordion();
        acc.select_parent(1, true);
        acc.tick(Duration::from_millis(250));
        assert_eq!(acc.opacity(1), 1.0);
        assert!(acc.max_height(1) < 280.0);
        assert!(!acc.is_settled());
    }

    #[test]
    fn retarget_continues_from_current_height() {
        let mut acc = accordion();
        acc.select_parent(0, true);
        acc.tick(MS_100);
        let mid = acc.max_height(0);
        assert!(mid > 0.0 && mid < 280.0);
        acc.select_parent(0, true);
        assert_eq!(acc.max_height(0), mid);
    }

    #[test]
    fn collapse_all_closes_open_submenu() {
        let mut acc = accordion();
        acc.select_parent(1, true);
        acc.collapse_all();
        assert_eq!(acc.open_index(), None);
        acc.tick(MS_300);
        assert_eq!(acc.max_height(1), 0.0);
    }

    #[test]
    fn zero_timing_jumps_on_next_tick() {
        let mut acc = Accordion::new(2, &MenuTiming::default().scaled(0.0));
        acc.select_parent(0, true);
        acc.tick(Duration::ZERO);
        acc.tick(Duration::from_nanos(1));
        assert_eq!(acc.max_height(0), 280.0);
    }
}

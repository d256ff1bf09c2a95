#![forbid(unsafe_code)]

//! The menu facade.
//!
//! [`StaggeredMenu`] owns one engine and wires the controller, timeline
//! builder, toggle animator, accordion and bus together. Requests return
//! immediately with the controller's [`Decision`]; playback happens over
//! later calls to [`StaggeredMenu::frame`], which is the only clock.
//!
//! # Frame order
//!
//! 1. Drain bus commands and apply them in send order.
//! 2. Advance the engine and the accordion by `dt`.
//! 3. Drain engine completions. A completed panel timeline settles the
//!    controller and emits [`MenuNotice::Opened`] or [`MenuNotice::Closed`].
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use stagger_menu::{MenuConfig, MenuItem, MenuNotice, StaggeredMenu};
//!
//! let config = MenuConfig {
//!     items: vec![MenuItem::link("Home", "#home")],
//!     ..MenuConfig::default()
//! };
//! let mut menu = StaggeredMenu::headless(config).unwrap();
//! menu.toggle();
//! for _ in 0..120 {
//!     menu.frame(Duration::from_millis(16));
//! }
//! assert!(menu.state().is_open);
//! assert_eq!(menu.drain_notices(), vec![MenuNotice::Opened]);
//! ```

use std::time::Duration;

use stagger_core::{AnimationEngine, EngineEvent, Property, SceneEngine};

use crate::accordion::{Accordion, ParentAction};
use crate::bus::{Inbox, MenuCommand, MenuNotice, MenuSender};
use crate::config::{MenuConfig, Palette, Rgb};
use crate::controller::{Controller, Decision, Direction};
use crate::error::MenuError;
use crate::layers::LayerMap;
use crate::layout::LayoutResolver;
use crate::motion::MotionGate;
use crate::navigation::NavTarget;
use crate::plan::{self, Preset};
use crate::timing::MenuTiming;
use crate::toggle::{self, Label, ToggleAnimator};

/// Snapshot of the menu's logical state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    /// Open or opening.
    pub is_open: bool,
    /// An open started and no transition has completed since.
    pub is_busy: bool,
    /// Index of the expanded submenu.
    pub open_submenu: Option<usize>,
}

/// Accessibility attributes the host should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AriaState {
    /// `aria-label` of the toggle button.
    pub toggle_label: &'static str,
    /// `aria-expanded` of the toggle button.
    pub expanded: bool,
    /// `aria-hidden` of the panel.
    pub panel_hidden: bool,
    /// `aria-hidden` of each item's submenu, in item order. `None` for
    /// items without children, which render no submenu.
    pub submenus_hidden: Vec<Option<bool>>,
}

/// Staggered reveal menu driven through an [`AnimationEngine`].
#[derive(Debug)]
pub struct StaggeredMenu<E: AnimationEngine> {
    config: MenuConfig,
    palette: Palette,
    engine: E,
    layers: LayerMap,
    layout: LayoutResolver,
    base_timing: MenuTiming,
    timing: MenuTiming,
    motion: MotionGate,
    controller: Controller,
    toggle: ToggleAnimator,
    accordion: Accordion,
    inbox: Inbox,
    notices: Vec<MenuNotice>,
}

impl StaggeredMenu<SceneEngine> {
    /// Menu on a fresh [`SceneEngine`] with every layer mounted.
    pub fn headless(config: MenuConfig) -> Result<Self, MenuError> {
        let palette = config.palette()?;
        let mut engine = SceneEngine::new();
        let layers = LayerMap::mount_scene(&mut engine, &config, palette.layers.len());
        Self::mount(config, engine, layers)
    }
}

impl<E: AnimationEngine> StaggeredMenu<E> {
    /// Mount a menu on `engine` using already-mounted `layers`.
    ///
    /// Validates the configuration and puts every layer into its closed
    /// resting state.
    pub fn mount(config: MenuConfig, mut engine: E, layers: LayerMap) -> Result<Self, MenuError> {
        let palette = config.palette()?;
        let layout = LayoutResolver::new(config.position);
        layout.reset(&mut engine, &layers);
        for preset in plan::hidden_presets(&layers) {
            preset.apply(&mut engine);
        }
        let timing = MenuTiming::default();
        stagger_core::info!(
            items = config.items.len(),
            socials = layers.social_links.len(),
            backgrounds = layers.backgrounds.len(),
            position = %config.position,
            "menu mounted"
        );
        Ok(Self {
            toggle: ToggleAnimator::new(config.change_menu_color_on_open),
            accordion: Accordion::new(config.items.len(), &timing),
            config,
            palette,
            engine,
            layers,
            layout,
            base_timing: timing.clone(),
            timing,
            motion: MotionGate::full(),
            controller: Controller::new(),
            inbox: Inbox::new(),
            notices: Vec::new(),
        })
    }

    /// Replace the base timing (builder). Motion simplification still applies.
    #[must_use]
    pub fn with_timing(mut self, timing: MenuTiming) -> Self {
        self.base_timing = timing;
        self.retime();
        self
    }

    /// Change the motion gate. Takes effect for the next transition.
    pub fn set_motion(&mut self, gate: MotionGate) {
        self.motion = gate;
        self.retime();
    }

    fn retime(&mut self) {
        self.timing = self.base_timing.scaled(self.motion.timing_scale());
        self.accordion.set_timing(&self.timing);
    }

    // -- requests -----------------------------------------------------------

    /// Flip between open and closed.
    pub fn toggle(&mut self) -> Decision {
        let decision = self.controller.decide_toggle();
        self.apply(decision)
    }

    /// Open, unless already open or still settling from an earlier open.
    pub fn open(&mut self) -> Decision {
        let decision = self.controller.decide_open();
        self.apply(decision)
    }

    /// Close, unless already closed or closing.
    pub fn close(&mut self) -> Decision {
        let decision = self.controller.decide_close();
        self.apply(decision)
    }

    fn apply(&mut self, decision: Decision) -> Decision {
        match decision {
            Decision::Start(Direction::Open) => self.start_open(),
            Decision::Start(Direction::Close) => self.start_close(),
            Decision::Ignore(_reason) => {
                stagger_core::debug!(reason = ?_reason, "menu request dropped");
            }
        }
        decision
    }

    fn start_open(&mut self) {
        let Some(open) = plan::build_open(&self.engine, &self.layers, &self.timing) else {
            self.controller.abort();
            stagger_core::debug!("open aborted: panel not mounted");
            return;
        };
        for preset in &open.presets {
            preset.apply(&mut self.engine);
        }
        let id = self.engine.play(open.timeline());
        if let Some(previous) = self.controller.begin(Direction::Open, Some(id)) {
            self.engine.kill(previous);
        }
        self.toggle
            .animate(&mut self.engine, &self.layers, &self.timing, true);
        stagger_core::debug!(
            timeline = %id,
            stages = open.stages.len(),
            duration_ms = open.duration().as_millis() as u64,
            "opening"
        );
    }

    fn start_close(&mut self) {
        self.accordion.collapse_all();
        let id = plan::build_close(&self.layers, &self.timing, self.layout.offscreen_x_percent())
            .map(|tl| self.engine.play(tl));
        if let Some(previous) = self.controller.begin(Direction::Close, id) {
            self.engine.kill(previous);
        }
        self.toggle
            .animate(&mut self.engine, &self.layers, &self.timing, false);
        stagger_core::debug!(timeline = ?id, "closing");
    }

    // -- items --------------------------------------------------------------

    /// Handle a click on the top-level item at `index`.
    ///
    /// Items with children expand or collapse their submenu. Items without
    /// children navigate to their link and close the menu.
    pub fn select_parent(&mut self, index: usize) -> Result<ParentAction, MenuError> {
        let item = self
            .config
            .items
            .get(index)
            .ok_or(MenuError::UnknownItem(index))?;
        let has_children = item.has_children();
        let href = item.href().to_string();
        let action = self.accordion.select_parent(index, has_children);
        if action == ParentAction::CloseMenu {
            self.navigate(&href);
            self.close();
        }
        Ok(action)
    }

    /// Click a top-level item. Returns where it navigated, if anywhere.
    pub fn click_item(&mut self, index: usize) -> Result<Option<NavTarget>, MenuError> {
        let action = self.select_parent(index)?;
        if action != ParentAction::CloseMenu {
            return Ok(None);
        }
        let href = self.config.items[index].href();
        Ok(Some(NavTarget::parse(href)))
    }

    /// Click child `child` of the item at `parent`: navigate and close.
    pub fn click_child(&mut self, parent: usize, child: usize) -> Result<NavTarget, MenuError> {
        let link = self
            .config
            .items
            .get(parent)
            .ok_or(MenuError::UnknownItem(parent))?
            .children
            .get(child)
            .ok_or(MenuError::UnknownChild { parent, child })?
            .link
            .clone();
        let target = self.navigate(&link);
        self.close();
        Ok(target)
    }

    fn navigate(&mut self, link: &str) -> NavTarget {
        let target = NavTarget::parse(link);
        stagger_core::info!(target = %target, "navigate");
        self.notices.push(MenuNotice::Navigate(target.clone()));
        target
    }

    // -- clock --------------------------------------------------------------

    /// Advance the menu by one frame of `dt`.
    pub fn frame(&mut self, dt: Duration) {
        for command in self.inbox.drain() {
            match command {
                MenuCommand::Toggle => self.toggle(),
                MenuCommand::Open => self.open(),
                MenuCommand::Close => self.close(),
            };
        }
        self.engine.advance(dt);
        self.accordion.tick(dt);
        for event in self.engine.drain_events() {
            let EngineEvent::Completed(id) = event;
            match self.controller.finish(id) {
                Some(direction) => self.settle(direction),
                None => {
                    self.toggle.finish(id);
                }
            }
        }
    }

    fn settle(&mut self, direction: Direction) {
        match direction {
            Direction::Open => {
                self.notices.push(MenuNotice::Opened);
            }
            Direction::Close => {
                for preset in plan::hidden_presets(&self.layers) {
                    preset.apply(&mut self.engine);
                }
                self.notices.push(MenuNotice::Closed);
            }
        }
        stagger_core::debug!(%direction, "menu settled");
    }

    /// Take every notice emitted since the last drain.
    pub fn drain_notices(&mut self) -> Vec<MenuNotice> {
        std::mem::take(&mut self.notices)
    }

    /// Handle for sending commands from other components.
    #[must_use]
    pub fn sender(&self) -> MenuSender {
        self.inbox.sender()
    }

    // -- observation --------------------------------------------------------

    /// Logical state snapshot.
    #[must_use]
    pub fn state(&self) -> PanelState {
        PanelState {
            is_open: self.controller.is_open(),
            is_busy: self.controller.is_busy(),
            open_submenu: self.accordion.open_index(),
        }
    }

    /// Label currently visible on the toggle button.
    #[must_use]
    pub fn label(&self) -> Label {
        self.toggle.displayed(&self.engine, &self.layers)
    }

    /// Accessibility attributes for the current state.
    #[must_use]
    pub fn aria(&self) -> AriaState {
        let open = self.controller.is_open();
        AriaState {
            toggle_label: toggle::aria_label(open),
            expanded: open,
            panel_hidden: !open,
            submenus_hidden: self
                .config
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| item.has_children().then(|| self.accordion.aria_hidden(i)))
                .collect(),
        }
    }

    /// Current toggle button color.
    #[must_use]
    pub fn button_color(&self) -> Rgb {
        let mix = self
            .layers
            .button
            .and_then(|b| self.engine.value(b, Property::ColorMix))
            .unwrap_or(0.0);
        self.palette.button_color(mix)
    }

    /// Current horizontal offset of the panel, if mounted.
    #[must_use]
    pub fn panel_offset(&self) -> Option<f32> {
        self.layers
            .panel
            .and_then(|p| self.engine.value(p, Property::XPercent))
    }

    #[must_use]
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn layers(&self) -> &LayerMap {
        &self.layers
    }

    #[must_use]
    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    /// Effective timing after motion simplification.
    #[must_use]
    pub fn timing(&self) -> &MenuTiming {
        &self.timing
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable engine access, e.g. to unmount layers.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Presets that hide labels and socials, as applied after every close.
    #[must_use]
    pub fn hidden_presets(&self) -> Vec<Preset> {
        plan::hidden_presets(&self.layers)
    }
}

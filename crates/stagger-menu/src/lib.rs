#![forbid(unsafe_code)]

//! Staggered reveal menu sequencer.
//!
//! A slide-out navigation panel that opens as a cascade: colored background
//! layers sweep in one after another, the panel follows, then item labels
//! and social links rise into place. The toggle button spins its icon,
//! scrolls its label through a short `Menu`/`Close` flourish and blends its
//! color at the same moment. Closing is a single uniform sweep.
//!
//! Everything here is headless. Visual layers are [`LayerId`](stagger_core::LayerId)
//! handles on an [`AnimationEngine`](stagger_core::AnimationEngine), and time
//! only moves when the host calls [`StaggeredMenu::frame`].
//!
//! # Modules
//!
//! - [`controller`]: open/busy state and the request drop policy.
//! - [`plan`]: open and close timelines built from current offsets.
//! - [`toggle`]: icon spin, label cycle and button color.
//! - [`accordion`]: exclusive submenu expansion.
//! - [`layout`]: side-dependent offsets and mount reset.
//! - [`bus`]: command inbox and notice outbox.
//! - [`menu`]: the [`StaggeredMenu`] facade wiring it all together.

pub mod accordion;
pub mod bus;
pub mod config;
pub mod controller;
pub mod error;
pub mod layers;
pub mod layout;
pub mod menu;
pub mod motion;
pub mod navigation;
pub mod plan;
pub mod timing;
pub mod toggle;

pub use accordion::{Accordion, ParentAction};
pub use bus::{MenuCommand, MenuNotice, MenuSender};
pub use config::{ChildItem, MenuConfig, MenuItem, Palette, Position, Rgb, SocialItem};
pub use controller::{Decision, Direction, IgnoreReason};
pub use error::{ConfigError, MenuError};
pub use layers::LayerMap;
pub use layout::LayoutResolver;
pub use menu::{AriaState, PanelState, StaggeredMenu};
pub use motion::MotionGate;
pub use navigation::NavTarget;
pub use timing::MenuTiming;
pub use toggle::Label;

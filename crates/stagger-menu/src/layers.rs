#![forbid(unsafe_code)]

//! Layer handles indexed by role.
//!
//! The menu's visual tree is flattened into a [`LayerMap`]: a small arena of
//! engine [`LayerId`]s keyed by what each layer *is* (background layer `i`,
//! the panel, item label `i`, ...). The sequencer only ever talks to the
//! engine through these handles. Optional roles stay `None` until mounted,
//! which is how "not mounted yet" is represented.

use stagger_core::{LayerId, SceneEngine};

use crate::config::MenuConfig;

/// Handles of every layer the sequencer animates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerMap {
    /// Colored pre-layers, back to front.
    pub backgrounds: Vec<LayerId>,
    /// The sliding panel itself.
    pub panel: Option<LayerId>,
    /// Item label elements in item order.
    pub item_labels: Vec<LayerId>,
    /// Socials block title.
    pub social_title: Option<LayerId>,
    /// Social link elements in declaration order.
    pub social_links: Vec<LayerId>,
    /// Rotating icon wrapper on the toggle button.
    pub icon: Option<LayerId>,
    /// Horizontal bar of the plus/cross mark.
    pub plus_h: Option<LayerId>,
    /// Vertical bar of the plus/cross mark.
    pub plus_v: Option<LayerId>,
    /// Scrolling inner element of the toggle label.
    pub label: Option<LayerId>,
    /// Toggle button (color only).
    pub button: Option<LayerId>,
}

impl LayerMap {
    /// Mount every layer `config` calls for on a [`SceneEngine`].
    ///
    /// `background_count` comes from the derived pre-layer palette. Item
    /// labels are mounted only for real items and social layers only when
    /// socials are shown, so empty collections have no layers at all.
    pub fn mount_scene(engine: &mut SceneEngine, config: &MenuConfig, background_count: usize) -> Self {
        let backgrounds = (0..background_count)
            .map(|i| engine.mount(&format!("prelayer[{i}]")))
            .collect();
        let panel = Some(engine.mount("panel"));
        let item_labels = config
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| engine.mount(&format!("item[{i}]:{}", item.label)))
            .collect();

        let (social_title, social_links) = if config.shows_socials() {
            let title = engine.mount("socials-title");
            let links = config
                .social_items
                .iter()
                .enumerate()
                .map(|(i, s)| engine.mount(&format!("social[{i}]:{}", s.label)))
                .collect();
            (Some(title), links)
        } else {
            (None, Vec::new())
        };

        Self {
            backgrounds,
            panel,
            item_labels,
            social_title,
            social_links,
            icon: Some(engine.mount("icon")),
            plus_h: Some(engine.mount("icon-bar-h")),
            plus_v: Some(engine.mount("icon-bar-v")),
            label: Some(engine.mount("toggle-label")),
            button: Some(engine.mount("toggle-button")),
        }
    }

    /// Background layers followed by the panel: everything that slides.
    #[must_use]
    pub fn sliding(&self) -> Vec<LayerId> {
        let mut all = self.backgrounds.clone();
        all.extend(self.panel);
        all
    }
}

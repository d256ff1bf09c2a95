#![forbid(unsafe_code)]

//! Menu configuration.
//!
//! [`MenuConfig`] is the embedding surface of the menu: which side it docks
//! to, the items and socials it shows, and its branding colors. It is
//! deserialized from JSON with every field optional, validated into a
//! [`Palette`] at mount, and never mutated by the sequencer.
//!
//! # Environment overrides
//!
//! Following the `*_DEMO_*` convention of the host tooling, a few fields can
//! be overridden from the environment (see [`MenuConfig::apply_env`]):
//!
//! | variable                  | field             |
//! |---------------------------|-------------------|
//! | `STAGGER_POSITION`        | `position`        |
//! | `STAGGER_DISPLAY_SOCIALS` | `display_socials` |
//! | `STAGGER_CHANGE_COLOR`    | `change_menu_color_on_open` |

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable overriding [`MenuConfig::position`].
pub const ENV_POSITION: &str = "STAGGER_POSITION";
/// Environment variable overriding [`MenuConfig::display_socials`].
pub const ENV_DISPLAY_SOCIALS: &str = "STAGGER_DISPLAY_SOCIALS";
/// Environment variable overriding [`MenuConfig::change_menu_color_on_open`].
pub const ENV_CHANGE_COLOR: &str = "STAGGER_CHANGE_COLOR";

/// Pre-layer colors used when none are configured.
pub const DEFAULT_LAYER_COLORS: [&str; 2] = ["#1e1e22", "#35353c"];

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Side of the viewport the panel docks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Panel slides in from the left edge.
    Left,
    /// Panel slides in from the right edge.
    #[default]
    Right,
}

impl FromStr for Position {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ConfigError::InvalidPosition(s.to_string())),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb` (the leading `#` is optional).
    pub fn parse_hex(field: &'static str, value: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor {
            field,
            value: value.to_string(),
        };
        let hex = value.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let mut out = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let v = channel(&c.to_string())?;
                    out[i] = v * 16 + v;
                }
                Ok(Self::new(out[0], out[1], out[2]))
            }
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Blend towards `other` by `t` in [0, 1].
    #[must_use]
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let blend = |a: u8, b: u8| -> u8 {
            (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
        };
        Rgb::new(
            blend(self.r, other.r),
            blend(self.g, other.g),
            blend(self.b, other.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Validated colors of one menu instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Pre-layer colors, back to front, after stack derivation.
    pub layers: Vec<Rgb>,
    /// Accent color exposed to the host as a CSS variable.
    pub accent: Rgb,
    /// Toggle button color while closed.
    pub button: Rgb,
    /// Toggle button color while open.
    pub button_open: Rgb,
}

impl Palette {
    /// Toggle button color at blend factor `mix` (0 = closed, 1 = open).
    #[must_use]
    pub fn button_color(&self, mix: f32) -> Rgb {
        self.button.mix(self.button_open, mix)
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// Entry of a submenu.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildItem {
    pub label: String,
    pub link: String,
    #[serde(default)]
    pub aria_label: Option<String>,
}

impl ChildItem {
    /// Accessible name: the explicit aria label, else the visible label.
    #[must_use]
    pub fn accessible_name(&self) -> &str {
        self.aria_label.as_deref().unwrap_or(&self.label)
    }
}

/// Top-level menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub label: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub aria_label: Option<String>,
    #[serde(default)]
    pub children: Vec<ChildItem>,
}

impl MenuItem {
    /// Item linking to `link` with no submenu.
    #[must_use]
    pub fn link(label: &str, link: &str) -> Self {
        Self {
            label: label.to_string(),
            link: Some(link.to_string()),
            aria_label: None,
            children: Vec::new(),
        }
    }

    /// Set the aria label (builder).
    #[must_use]
    pub fn aria(mut self, aria_label: &str) -> Self {
        self.aria_label = Some(aria_label.to_string());
        self
    }

    /// Append a submenu entry (builder).
    #[must_use]
    pub fn child(mut self, label: &str, link: &str) -> Self {
        self.children.push(ChildItem {
            label: label.to_string(),
            link: link.to_string(),
            aria_label: None,
        });
        self
    }

    /// Whether clicking this item expands a submenu instead of navigating.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Link target; items without one point at the page top (`#`).
    #[must_use]
    pub fn href(&self) -> &str {
        self.link.as_deref().unwrap_or("#")
    }

    /// Accessible name: the explicit aria label, else the visible label.
    #[must_use]
    pub fn accessible_name(&self) -> &str {
        self.aria_label.as_deref().unwrap_or(&self.label)
    }
}

/// Link shown in the socials block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialItem {
    pub label: String,
    pub link: String,
}

impl SocialItem {
    /// Create a social link.
    #[must_use]
    pub fn new(label: &str, link: &str) -> Self {
        Self {
            label: label.to_string(),
            link: link.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// MenuConfig
// ---------------------------------------------------------------------------

/// Configuration of one staggered menu instance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuConfig {
    /// Docking side.
    pub position: Position,
    /// Pre-layer color stops, back to front.
    pub colors: Vec<String>,
    /// Top-level items in display order.
    pub items: Vec<MenuItem>,
    /// Social links in display order.
    pub social_items: Vec<SocialItem>,
    /// Whether the socials block is rendered at all.
    pub display_socials: bool,
    /// Whether items are prefixed with a two-digit ordinal.
    pub display_item_numbering: bool,
    /// Logo image URL shown in the header.
    pub logo_url: String,
    /// Toggle button color while closed.
    pub menu_button_color: String,
    /// Toggle button color while open.
    pub open_menu_button_color: String,
    /// Accent color.
    pub accent_color: String,
    /// Whether the toggle button color animates on open/close.
    pub change_menu_color_on_open: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            position: Position::Right,
            colors: vec!["#B19EEF".into(), "#5227FF".into()],
            items: Vec::new(),
            social_items: Vec::new(),
            display_socials: true,
            display_item_numbering: false,
            logo_url: "/logo.svg".into(),
            menu_button_color: "#fff".into(),
            open_menu_button_color: "#fff".into(),
            accent_color: "#5227FF".into(),
            change_menu_color_on_open: true,
        }
    }
}

impl MenuConfig {
    /// Parse a JSON configuration. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether socials layers exist: enabled and at least one link.
    #[must_use]
    pub fn shows_socials(&self) -> bool {
        self.display_socials && !self.social_items.is_empty()
    }

    /// Ordinal shown next to item `index` (`01`, `02`, ...), when enabled.
    #[must_use]
    pub fn item_number(&self, index: usize) -> Option<String> {
        self.display_item_numbering
            .then(|| format!("{:02}", index + 1))
    }

    /// Validate colors and derive the pre-layer stack.
    ///
    /// At most four configured colors are used (or the defaults when none are
    /// configured); with three or more, the middle one is dropped.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let mut stops: Vec<&str> = if self.colors.is_empty() {
            DEFAULT_LAYER_COLORS.to_vec()
        } else {
            self.colors.iter().take(4).map(String::as_str).collect()
        };
        if stops.len() >= 3 {
            stops.remove(stops.len() / 2);
        }
        let layers = stops
            .into_iter()
            .map(|c| Rgb::parse_hex("colors", c))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Palette {
            layers,
            accent: Rgb::parse_hex("accentColor", &self.accent_color)?,
            button: Rgb::parse_hex("menuButtonColor", &self.menu_button_color)?,
            button_open: Rgb::parse_hex("openMenuButtonColor", &self.open_menu_button_color)?,
        })
    }

    /// Apply `STAGGER_*` overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|name| std::env::var(name).ok())
    }

    /// Apply `STAGGER_*` overrides from an arbitrary lookup.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_POSITION) {
            self.position = val.parse()?;
        }
        if let Some(val) = lookup(ENV_DISPLAY_SOCIALS) {
            self.display_socials = parse_flag(ENV_DISPLAY_SOCIALS, &val)?;
        }
        if let Some(val) = lookup(ENV_CHANGE_COLOR) {
            self.change_menu_color_on_open = parse_flag(ENV_CHANGE_COLOR, &val)?;
        }
        Ok(())
    }
}

/// Parse a boolean environment flag.
pub fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

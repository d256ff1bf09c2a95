#![forbid(unsafe_code)]

//! Sequencer timing constants.
//!
//! Every duration, offset and curve of the open/close choreography lives in
//! [`MenuTiming`]. The defaults reproduce the reference motion; [`MenuTiming::scaled`]
//! compresses everything uniformly, which is how reduced motion is applied.

use std::time::Duration;

use stagger_core::animation::Ease;

const fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// Durations, offsets and curves of the menu choreography.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuTiming {
    /// Gap between consecutive background layers.
    pub layer_stagger: Duration,
    /// Slide-in length of one background layer.
    pub layer_duration: Duration,
    /// Extra gap between the last background layer and the panel.
    pub panel_gap: Duration,
    /// Slide-in length of the panel.
    pub panel_duration: Duration,
    /// Curve of layer and panel slide-in.
    pub slide_ease: Ease,

    /// Fraction of the panel slide after which item labels start.
    pub items_lead: f32,
    /// Rise length of one item label.
    pub item_duration: Duration,
    /// Gap between consecutive item labels.
    pub item_stagger: Duration,
    /// Curve of item label rise.
    pub item_ease: Ease,

    /// Fraction of the panel slide after which the socials block starts.
    pub socials_lead: f32,
    /// Fade length of the socials title.
    pub social_title_duration: Duration,
    /// Curve of the socials title fade.
    pub social_title_ease: Ease,
    /// Delay of the first social link after the title.
    pub social_links_delay: Duration,
    /// Rise length of one social link.
    pub social_link_duration: Duration,
    /// Gap between consecutive social links.
    pub social_link_stagger: Duration,
    /// Curve of social link rise.
    pub social_link_ease: Ease,

    /// Uniform close length for every layer.
    pub close_duration: Duration,
    /// Curve of the close slide.
    pub close_ease: Ease,

    /// Icon rotation when open, in degrees.
    pub icon_open_angle: f32,
    /// Icon spin length when opening.
    pub icon_open_duration: Duration,
    /// Curve of the opening spin.
    pub icon_open_ease: Ease,
    /// Icon spin length when closing.
    pub icon_close_duration: Duration,
    /// Curve of the closing spin.
    pub icon_close_ease: Ease,

    /// Minimum number of label alternations per toggle.
    pub label_cycles: usize,
    /// Base length of the label scroll.
    pub label_base_duration: Duration,
    /// Additional label scroll length per line.
    pub label_per_line: Duration,
    /// Curve of the label scroll.
    pub label_ease: Ease,

    /// Delay before the button color starts changing.
    pub color_delay: Duration,
    /// Length of the button color change.
    pub color_duration: Duration,
    /// Curve of the button color change.
    pub color_ease: Ease,

    /// Submenu height transition length.
    pub submenu_height_duration: Duration,
    /// Submenu opacity transition length.
    pub submenu_opacity_duration: Duration,
    /// Curve of both submenu transitions.
    pub submenu_ease: Ease,
    /// Fully expanded submenu height in pixels.
    pub submenu_max_height: f32,
}

impl Default for MenuTiming {
    fn default() -> Self {
        Self {
            layer_stagger: ms(70),
            layer_duration: ms(500),
            panel_gap: ms(80),
            panel_duration: ms(650),
            slide_ease: Ease::Power4Out,

            items_lead: 0.15,
            item_duration: ms(1000),
            item_stagger: ms(100),
            item_ease: Ease::Power4Out,

            socials_lead: 0.4,
            social_title_duration: ms(500),
            social_title_ease: Ease::Power2Out,
            social_links_delay: ms(40),
            social_link_duration: ms(550),
            social_link_stagger: ms(80),
            social_link_ease: Ease::Power3Out,

            close_duration: ms(320),
            close_ease: Ease::Power3In,

            icon_open_angle: 225.0,
            icon_open_duration: ms(800),
            icon_open_ease: Ease::Power4Out,
            icon_close_duration: ms(350),
            icon_close_ease: Ease::Power3InOut,

            label_cycles: 3,
            label_base_duration: ms(500),
            label_per_line: ms(70),
            label_ease: Ease::Power4Out,

            color_delay: ms(180),
            color_duration: ms(300),
            color_ease: Ease::Power2Out,

            submenu_height_duration: ms(280),
            submenu_opacity_duration: ms(220),
            submenu_ease: Ease::Power1InOut,
            submenu_max_height: 280.0,
        }
    }
}

impl MenuTiming {
    /// Every duration multiplied by `factor` (clamped to be non-negative).
    ///
    /// Angles, fractions, cycle counts and heights are left unchanged, so a
    /// factor of zero jumps straight to the same end states.
    #[must_use]
    pub fn scaled(&self, factor: f32) -> Self {
        let factor = if factor.is_finite() { factor.max(0.0) } else { 1.0 };
        if factor == 1.0 {
            return self.clone();
        }
        let s = |d: Duration| {
            if factor == 0.0 {
                Duration::ZERO
            } else {
                d.mul_f64(f64::from(factor))
            }
        };
        Self {
            layer_stagger: s(self.layer_stagger),
            layer_duration: s(self.layer_duration),
            panel_gap: s(self.panel_gap),
            panel_duration: s(self.panel_duration),
            item_duration: s(self.item_duration),
            item_stagger: s(self.item_stagger),
            social_title_duration: s(self.social_title_duration),
            social_links_delay: s(self.social_links_delay),
            social_link_duration: s(self.social_link_duration),
            social_link_stagger: s(self.social_link_stagger),
            close_duration: s(self.close_duration),
            icon_open_duration: s(self.icon_open_duration),
            icon_close_duration: s(self.icon_close_duration),
            label_base_duration: s(self.label_base_duration),
            label_per_line: s(self.label_per_line),
            color_delay: s(self.color_delay),
            color_duration: s(self.color_duration),
            submenu_height_duration: s(self.submenu_height_duration),
            submenu_opacity_duration: s(self.submenu_opacity_duration),
            ..self.clone()
        }
    }

    /// Label scroll length for a cycle of `lines` entries.
    #[must_use]
    pub fn label_duration(&self, lines: usize) -> Duration {
        self.label_base_duration
            .saturating_add(self.label_per_line.saturating_mul(lines as u32))
    }
}

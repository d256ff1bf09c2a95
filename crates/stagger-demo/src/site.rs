#![forbid(unsafe_code)]

//! Built-in menu of the consultancy site.

use stagger_menu::{MenuConfig, MenuItem, Position, SocialItem};

/// The landing page menu: five in-page sections and three social links.
#[must_use]
pub fn landing_menu() -> MenuConfig {
    MenuConfig {
        position: Position::Right,
        items: vec![
            MenuItem::link("Home", "#home").aria("Go to home"),
            MenuItem::link("About", "#why-us-anchor").aria("Go to about"),
            MenuItem::link("Outcomes", "#outcomes").aria("Go to outcomes"),
            MenuItem::link("Services", "#services")
                .aria("Go to services")
                .child("Overview", "#services")
                .child("Case studies", "/cases"),
            MenuItem::link("Security", "#security").aria("Go to security"),
        ],
        social_items: vec![
            SocialItem::new("TikTok", "https://tiktok.com"),
            SocialItem::new("Instagram", "https://www.instagram.com"),
            SocialItem::new("LinkedIn", "https://linkedin.com"),
        ],
        display_socials: true,
        display_item_numbering: true,
        colors: vec!["#000".into(), "#000".into(), "#000".into()],
        logo_url: "/logo.png".into(),
        menu_button_color: "#fff".into(),
        open_menu_button_color: "#fff".into(),
        accent_color: "#4f46e5".into(),
        change_menu_color_on_open: true,
    }
}

/// Index of the first item that has a submenu.
#[must_use]
pub fn first_parent(config: &MenuConfig) -> Option<usize> {
    config.items.iter().position(MenuItem::has_children)
}

//! End-to-end scenarios on the headless scene engine.

use std::time::Duration;

use pretty_assertions::assert_eq;
use stagger_core::{AnimationEngine, Property, SceneEngine};
use stagger_menu::{
    Decision, Direction, IgnoreReason, Label, MenuConfig, MenuItem, MenuNotice, NavTarget,
    ParentAction, Position, SocialItem, StaggeredMenu,
};

const FRAME: Duration = Duration::from_millis(16);

fn site(position: Position) -> MenuConfig {
    MenuConfig {
        position,
        items: vec![
            MenuItem::link("A", "#a"),
            MenuItem::link("B", "#b")
                .child("B1", "#b1")
                .child("B2", "/b2"),
            MenuItem::link("C", "#c"),
        ],
        social_items: vec![
            SocialItem::new("X", "https://x.example"),
            SocialItem::new("Y", "https://y.example"),
        ],
        ..MenuConfig::default()
    }
}

fn run_for(menu: &mut StaggeredMenu<SceneEngine>, total: Duration) {
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        menu.frame(FRAME);
        elapsed += FRAME;
    }
}

fn value(menu: &StaggeredMenu<SceneEngine>, layer: stagger_core::LayerId, p: Property) -> f32 {
    menu.engine().value(layer, p).unwrap()
}

#[test]
fn open_then_close_right_docked() {
    let mut menu = StaggeredMenu::headless(site(Position::Right)).unwrap();
    let layers = menu.layers().clone();

    assert_eq!(menu.toggle(), Decision::Start(Direction::Open));
    assert!(menu.state().is_open);
    run_for(&mut menu, Duration::from_secs(3));

    assert_eq!(value(&menu, layers.icon.unwrap(), Property::Rotate), 225.0);
    assert_eq!(menu.label(), Label::Close);
    for layer in layers.sliding() {
        assert_eq!(value(&menu, layer, Property::XPercent), 0.0);
    }
    for label in &layers.item_labels {
        assert_eq!(value(&menu, *label, Property::YPercent), 0.0);
        assert_eq!(value(&menu, *label, Property::Rotate), 0.0);
    }
    for link in &layers.social_links {
        assert_eq!(value(&menu, *link, Property::Y), 0.0);
        assert_eq!(value(&menu, *link, Property::Opacity), 1.0);
    }
    assert_eq!(menu.engine().running_count(), 0);
    assert_eq!(menu.drain_notices(), vec![MenuNotice::Opened]);

    assert_eq!(menu.toggle(), Decision::Start(Direction::Close));
    assert!(!menu.state().is_open);
    run_for(&mut menu, Duration::from_secs(1));

    for layer in layers.sliding() {
        assert_eq!(value(&menu, layer, Property::XPercent), 100.0);
    }
    assert_eq!(menu.label(), Label::Menu);
    assert_eq!(value(&menu, layers.icon.unwrap(), Property::Rotate), 0.0);
    // Labels and socials are back at their hidden presets.
    assert_eq!(value(&menu, layers.item_labels[0], Property::YPercent), 140.0);
    assert_eq!(value(&menu, layers.social_links[0], Property::Opacity), 0.0);
    assert_eq!(menu.drain_notices(), vec![MenuNotice::Closed]);
}

#[test]
fn left_docked_hides_to_the_left() {
    let mut menu = StaggeredMenu::headless(site(Position::Left)).unwrap();
    assert_eq!(menu.panel_offset(), Some(-100.0));
    menu.toggle();
    run_for(&mut menu, Duration::from_secs(3));
    menu.toggle();
    run_for(&mut menu, Duration::from_secs(1));
    assert_eq!(menu.panel_offset(), Some(-100.0));
}

#[test]
fn rapid_double_toggle_notifies_once() {
    let mut menu = StaggeredMenu::headless(site(Position::Right)).unwrap();
    menu.toggle();
    menu.toggle();
    run_for(&mut menu, Duration::from_secs(3));
    assert_eq!(menu.drain_notices(), vec![MenuNotice::Closed]);
    assert!(!menu.state().is_open);
    assert!(!menu.state().is_busy);
    assert_eq!(menu.panel_offset(), Some(100.0));
}

#[test]
fn close_reverses_from_current_offset() {
    let mut menu = StaggeredMenu::headless(site(Position::Right)).unwrap();
    menu.toggle();
    run_for(&mut menu, Duration::from_millis(400));
    let mid = menu.panel_offset().unwrap();
    assert!(mid > 0.0 && mid < 100.0);

    menu.toggle();
    menu.frame(Duration::from_millis(1));
    let after = menu.panel_offset().unwrap();
    // Power3In starts slowly: one millisecond barely moves the panel.
    assert!((after - mid).abs() < 1.0, "jumped from {mid} to {after}");
}

#[test]
fn reopen_during_settled_close_resumes_from_current_offset() {
    let mut menu = StaggeredMenu::headless(site(Position::Right)).unwrap();
    menu.toggle();
    run_for(&mut menu, Duration::from_secs(3));
    assert_eq!(menu.drain_notices(), vec![MenuNotice::Opened]);

    assert_eq!(menu.toggle(), Decision::Start(Direction::Close));
    run_for(&mut menu, Duration::from_millis(160));
    let mid = menu.panel_offset().unwrap();
    assert!(mid > 0.0 && mid < 100.0, "close not in flight: {mid}");

    // The open settled, so busy is clear and the reopen proceeds.
    assert_eq!(menu.toggle(), Decision::Start(Direction::Open));
    menu.frame(Duration::from_millis(1));
    let after = menu.panel_offset().unwrap();
    assert!((after - mid).abs() < 1.0, "jumped from {mid} to {after}");

    run_for(&mut menu, Duration::from_secs(3));
    // The killed close never reports; only the reopen does.
    assert_eq!(menu.drain_notices(), vec![MenuNotice::Opened]);
    assert!(!menu.state().is_busy);
    assert!(menu.state().is_open);
    assert_eq!(menu.panel_offset(), Some(0.0));
}

#[test]
fn drop_policy_blocks_reopen_until_close_settles() {
    let mut menu = StaggeredMenu::headless(site(Position::Right)).unwrap();
    menu.toggle();
    run_for(&mut menu, Duration::from_millis(100));
    menu.toggle();
    let label_before = menu.label();
    assert_eq!(menu.toggle(), Decision::Ignore(IgnoreReason::Busy));
    assert_eq!(menu.label(), label_before);
    assert!(!menu.state().is_open);

    run_for(&mut menu, Duration::from_secs(1));
    assert_eq!(menu.toggle(), Decision::Start(Direction::Open));
}

#[test]
fn explicit_requests_are_idempotent() {
    let mut menu = StaggeredMenu::headless(site(Position::Right)).unwrap();
    assert_eq!(menu.close(), Decision::Ignore(IgnoreReason::AlreadyClosed));
    menu.open();
    assert_eq!(menu.open(), Decision::Ignore(IgnoreReason::AlreadyOpen));
    run_for(&mut menu, Duration::from_secs(3));
    assert_eq!(menu.drain_notices(), vec![MenuNotice::Opened]);
}

#[test]
fn submenu_toggles_on_same_index() {
    let mut menu = StaggeredMenu::headless(site(Position::Right)).unwrap();
    menu.toggle();
    assert_eq!(menu.select_parent(1).unwrap(), ParentAction::Expanded(1));
    assert_eq!(menu.state().open_submenu, Some(1));
    assert_eq!(menu.aria().submenus_hidden, vec![None, Some(false), None]);

    assert_eq!(menu.select_parent(1).unwrap(), ParentAction::Collapsed(1));
    assert_eq!(menu.state().open_submenu, None);
    assert_eq!(menu.aria().submenus_hidden, vec![None, Some(true), None]);
}

#[test]
fn close_collapses_open_submenu() {
    let mut menu = StaggeredMenu::headless(site(Position::Right)).unwrap();
    menu.toggle();
    run_for(&mut menu, Duration::from_secs(3));
    menu.select_parent(1).unwrap();
    run_for(&mut menu, Duration::from_millis(300));
    assert_eq!(menu.accordion().max_height(1), 280.0);

    menu.toggle();
    assert_eq!(menu.state().open_submenu, None);
    run_for(&mut menu, Duration::from_millis(300));
    assert_eq!(menu.accordion().max_height(1), 0.0);
}

#[test]
fn top_nav_opens_through_bus() {
    let mut menu = StaggeredMenu::headless(site(Position::Right)).unwrap();
    let top_nav = menu.sender();
    top_nav.toggle();
    run_for(&mut menu, Duration::from_secs(3));
    assert!(menu.state().is_open);
    assert_eq!(menu.drain_notices(), vec![MenuNotice::Opened]);

    top_nav.close();
    run_for(&mut menu, Duration::from_secs(1));
    assert_eq!(menu.drain_notices(), vec![MenuNotice::Closed]);
}

#[test]
fn bus_and_direct_calls_agree() {
    let mut direct = StaggeredMenu::headless(site(Position::Right)).unwrap();
    let mut bused = StaggeredMenu::headless(site(Position::Right)).unwrap();
    let sender = bused.sender();

    direct.toggle();
    direct.frame(FRAME);
    sender.toggle();
    // The bus is drained at the start of the frame, before advancing.
    bused.frame(FRAME);

    assert_eq!(direct.state(), bused.state());
    assert_eq!(direct.panel_offset(), bused.panel_offset());
}

#[test]
fn child_link_navigates_and_closes() {
    let mut menu = StaggeredMenu::headless(site(Position::Right)).unwrap();
    menu.toggle();
    run_for(&mut menu, Duration::from_secs(3));
    menu.drain_notices();

    menu.select_parent(1).unwrap();
    assert_eq!(menu.click_child(1, 1).unwrap(), NavTarget::Page("/b2".into()));
    run_for(&mut menu, Duration::from_secs(1));
    assert_eq!(
        menu.drain_notices(),
        vec![
            MenuNotice::Navigate(NavTarget::Page("/b2".into())),
            MenuNotice::Closed
        ]
    );
}

#[test]
fn aria_reflects_state() {
    let mut menu = StaggeredMenu::headless(site(Position::Right)).unwrap();
    let aria = menu.aria();
    assert_eq!(aria.toggle_label, "Open menu");
    assert!(!aria.expanded);
    assert!(aria.panel_hidden);

    menu.toggle();
    let aria = menu.aria();
    assert_eq!(aria.toggle_label, "Close menu");
    assert!(aria.expanded);
    assert!(!aria.panel_hidden);
}

#[test]
fn config_from_json() {
    let json = r##"{
        "position": "left",
        "items": [
            { "label": "Home", "link": "#home", "ariaLabel": "Go home" },
            { "label": "More", "children": [ { "label": "FAQ", "link": "#faq" } ] }
        ],
        "socialItems": [ { "label": "LinkedIn", "link": "https://linkedin.example" } ],
        "colors": ["#000", "#111", "#222"],
        "accentColor": "#4f46e5",
        "changeMenuColorOnOpen": false
    }"##;
    let config = MenuConfig::from_json(json).unwrap();
    assert_eq!(config.position, Position::Left);
    assert_eq!(config.items[0].accessible_name(), "Go home");
    assert_eq!(config.items[1].href(), "#");

    let menu = StaggeredMenu::headless(config).unwrap();
    // Three colors: the middle one is dropped.
    assert_eq!(menu.layers().backgrounds.len(), 2);
    assert_eq!(menu.layers().social_links.len(), 1);
}

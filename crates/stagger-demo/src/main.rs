#![forbid(unsafe_code)]

//! Headless staggered menu runner.
//!
//! Replays a scripted scenario against a [`StaggeredMenu`] on the scene
//! engine with a fixed frame clock and prints one snapshot line per frame,
//! plus every request, decision and notice as it happens.

mod cli;
mod site;

use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::process;
use std::time::Duration;

use stagger_core::{AnimationEngine, Property, SceneEngine};
use stagger_menu::{MenuConfig, MenuError, MotionGate, StaggeredMenu};

use cli::{Command, HELP_TEXT, Opts, Scenario, VERSION};

/// Time allowed after the last scripted action for everything to settle.
const SETTLE: Duration = Duration::from_secs(3);

#[derive(Debug)]
enum DemoError {
    Read { path: String, source: io::Error },
    Menu(MenuError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => write!(f, "cannot read {path}: {source}"),
            Self::Menu(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Menu(err) => Some(err),
        }
    }
}

impl From<MenuError> for DemoError {
    fn from(err: MenuError) -> Self {
        Self::Menu(err)
    }
}

/// One scripted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Toggle,
    SelectParent(usize),
    ClickChild(usize, usize),
    BusToggle,
    BusClose,
}

fn script(scenario: Scenario, parent: Option<usize>) -> Vec<(Duration, Action)> {
    let ms = Duration::from_millis;
    match scenario {
        Scenario::OpenClose => vec![(ms(0), Action::Toggle), (ms(2000), Action::Toggle)],
        Scenario::Rapid => vec![(ms(0), Action::Toggle), (ms(0), Action::Toggle)],
        Scenario::Reopen => vec![
            (ms(0), Action::Toggle),
            (ms(200), Action::Toggle),
            (ms(250), Action::Toggle),
        ],
        Scenario::Submenu => {
            let parent = parent.unwrap_or(0);
            vec![
                (ms(0), Action::Toggle),
                (ms(1800), Action::SelectParent(parent)),
                (ms(2200), Action::ClickChild(parent, 0)),
            ]
        }
        Scenario::Bus => vec![(ms(0), Action::BusToggle), (ms(2000), Action::BusClose)],
    }
}

fn load_config(opts: &Opts) -> Result<MenuConfig, DemoError> {
    let mut config = match &opts.config {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|source| DemoError::Read {
                path: path.clone(),
                source,
            })?;
            MenuConfig::from_json(&json).map_err(MenuError::from)?
        }
        None => site::landing_menu(),
    };
    config.apply_env().map_err(MenuError::from)?;
    if let Some(position) = opts.position {
        config.position = position;
    }
    Ok(config)
}

/// One-line snapshot of the menu at `now`.
fn snapshot(menu: &StaggeredMenu<SceneEngine>, now: Duration) -> String {
    let state = menu.state();
    let icon = menu
        .layers()
        .icon
        .and_then(|l| menu.engine().value(l, Property::Rotate))
        .unwrap_or(0.0);
    let first_item = menu
        .layers()
        .item_labels
        .first()
        .and_then(|l| menu.engine().value(*l, Property::YPercent));
    format!(
        "t={:>5}ms panel={:>+7.2}% item0={:>7} label={:<5} icon={:>6.1} color={} {}{}{}",
        now.as_millis(),
        menu.panel_offset().unwrap_or(f32::NAN),
        first_item.map_or_else(|| "-".to_string(), |v| format!("{v:.1}%")),
        menu.label().as_str(),
        icon,
        menu.button_color(),
        if state.is_open { "open" } else { "closed" },
        if state.is_busy { " busy" } else { "" },
        state
            .open_submenu
            .map_or_else(String::new, |i| format!(" submenu={i}")),
    )
}

fn perform(menu: &mut StaggeredMenu<SceneEngine>, action: Action) -> Result<String, DemoError> {
    let sender = menu.sender();
    Ok(match action {
        Action::Toggle => format!("toggle -> {:?}", menu.toggle()),
        Action::SelectParent(i) => format!("select_parent({i}) -> {:?}", menu.select_parent(i)?),
        Action::ClickChild(p, c) => format!("click_child({p}, {c}) -> {}", menu.click_child(p, c)?),
        Action::BusToggle => format!("bus toggle queued: {}", sender.toggle()),
        Action::BusClose => format!("bus close queued: {}", sender.close()),
    })
}

fn run(opts: &Opts) -> Result<(), DemoError> {
    let config = load_config(opts)?;
    let mut gate = MotionGate::full();
    gate.apply_env().map_err(MenuError::from)?;
    if opts.reduced_motion {
        gate.prefers_reduced_motion = true;
    }

    let parent = site::first_parent(&config);
    for (i, item) in config.items.iter().enumerate() {
        let number = config.item_number(i).unwrap_or_default();
        println!("# item {number:>2} {} -> {}", item.accessible_name(), item.href());
    }

    let mut menu = StaggeredMenu::headless(config)?;
    menu.set_motion(gate);
    tracing::info!(
        scenario = %opts.scenario,
        fps = opts.fps,
        reduced_motion = gate.should_simplify(),
        "running scenario"
    );

    let dt = Duration::from_secs(1) / opts.fps;
    let actions = script(opts.scenario, parent);
    let end = actions
        .last()
        .map_or(Duration::ZERO, |(at, _)| *at)
        .saturating_add(SETTLE);

    let mut pending = actions.into_iter().peekable();
    let mut now = Duration::ZERO;
    println!("{}", snapshot(&menu, now));
    while now <= end {
        while let Some((_, action)) = pending.next_if(|(at, _)| *at <= now) {
            println!(">> {}", perform(&mut menu, action)?);
        }
        menu.frame(dt);
        now += dt;
        for notice in menu.drain_notices() {
            println!("<< {notice:?}");
        }
        println!("{}", snapshot(&menu, now));
        if pending.peek().is_none() && menu.engine().running_count() == 0 && menu.accordion().is_settled() {
            break;
        }
    }
    Ok(())
}

fn init_logging() {
    if env::var("STAGGER_DEMO_LOG_JSON").is_ok_and(|v| v == "1") {
        stagger_core::logging::init_json("warn");
        return;
    }
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let opts = match Opts::parse_from(&args, |name| env::var(name).ok()) {
        Ok(Command::Run(opts)) => opts,
        Ok(Command::Help) => {
            println!("{HELP_TEXT}");
            return;
        }
        Ok(Command::Version) => {
            println!("stagger-demo {VERSION}");
            return;
        }
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("Run with --help for usage information.");
            process::exit(1);
        }
    };

    init_logging();
    if let Err(err) = run(&opts) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

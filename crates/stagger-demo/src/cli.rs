#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo runner.
//!
//! Parses args by hand. Environment variables with the `STAGGER_DEMO_`
//! prefix provide defaults; explicit flags win.

use std::fmt;

use stagger_menu::Position;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
Staggered menu demo runner

USAGE:
    stagger-demo [OPTIONS]

OPTIONS:
    --config=PATH        Load the menu configuration from a JSON file
    --fps=N              Frames per second of the simulated clock (default: 60)
    --position=SIDE      Dock the panel 'left' or 'right' (overrides config)
    --reduced-motion     Play every transition with zero duration
    --scenario=NAME      Scenario to replay (default: open-close)
    --help, -h           Show this help message
    --version, -V        Show version

SCENARIOS:
    open-close   Open, wait for it to settle, close again
    rapid        Toggle twice in the same frame
    reopen       Close mid-open, then try to reopen before the close settles
    submenu      Open, expand a submenu, follow one of its links
    bus          Open and close from another component through the bus

ENVIRONMENT VARIABLES:
    STAGGER_DEMO_CONFIG       Default for --config
    STAGGER_DEMO_FPS          Default for --fps
    STAGGER_DEMO_SCENARIO     Default for --scenario
    STAGGER_POSITION          Menu side override applied to the config
    STAGGER_REDUCED_MOTION    Reduced-motion preference (1/0)
    RUST_LOG                  Log filter (e.g. stagger_menu=debug)
    STAGGER_DEMO_LOG_JSON     Emit logs as JSON lines when set to 1";

/// Scenario to replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    OpenClose,
    Rapid,
    Reopen,
    Submenu,
    Bus,
}

impl Scenario {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "open-close" => Some(Self::OpenClose),
            "rapid" => Some(Self::Rapid),
            "reopen" => Some(Self::Reopen),
            "submenu" => Some(Self::Submenu),
            "bus" => Some(Self::Bus),
            _ => None,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OpenClose => "open-close",
            Self::Rapid => "rapid",
            Self::Reopen => "reopen",
            Self::Submenu => "submenu",
            Self::Bus => "bus",
        })
    }
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    /// JSON configuration file; the built-in site menu when unset.
    pub config: Option<String>,
    /// Simulated frames per second.
    pub fps: u32,
    /// Side override.
    pub position: Option<Position>,
    /// Force reduced motion.
    pub reduced_motion: bool,
    /// Scenario to replay.
    pub scenario: Scenario,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            config: None,
            fps: 60,
            position: None,
            reduced_motion: false,
            scenario: Scenario::OpenClose,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse `args` (without the program name), taking defaults from `env`.
    pub fn parse_from<F>(args: &[String], env: F) -> Result<Command, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Environment defaults first
        if let Some(val) = env("STAGGER_DEMO_CONFIG") {
            opts.config = Some(val);
        }
        if let Some(val) = env("STAGGER_DEMO_FPS") {
            match val.parse::<u32>() {
                Ok(n) if n > 0 => opts.fps = n,
                _ => return Err(format!("Invalid STAGGER_DEMO_FPS value: {val}")),
            }
        }
        if let Some(val) = env("STAGGER_DEMO_SCENARIO")
            && let Some(s) = Scenario::parse(&val)
        {
            opts.scenario = s;
        }

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--reduced-motion" => opts.reduced_motion = true,
                other => {
                    if let Some(val) = other.strip_prefix("--config=") {
                        opts.config = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--fps=") {
                        match val.parse::<u32>() {
                            Ok(n) if n > 0 => opts.fps = n,
                            _ => return Err(format!("Invalid --fps value: {val}")),
                        }
                    } else if let Some(val) = other.strip_prefix("--position=") {
                        let pos = val
                            .parse::<Position>()
                            .map_err(|e| format!("Invalid --position value: {e}"))?;
                        opts.position = Some(pos);
                    } else if let Some(val) = other.strip_prefix("--scenario=") {
                        opts.scenario = Scenario::parse(val)
                            .ok_or_else(|| format!("Unknown scenario: {val}"))?;
                    } else {
                        return Err(format!("Unknown argument: {other}"));
                    }
                }
            }
        }

        Ok(Command::Run(opts))
    }
}

//! Run It entry point
//!
//! Headless frame driver: runs the simulation on autopilot, restarting after
//! each game over, and prints the last frame as JSON.
//!
//! ```text
//! run-it [--settings PATH] [--seed N] [--ticks N] [--runs N] [--dump-settings]
//! ```

use std::process::ExitCode;

use run_it::sim::{GameEvent, GameState, TickInput, TickStatus, tick};
use run_it::{FrameView, Settings};

/// Command line options
#[derive(Debug)]
struct Options {
    settings_path: Option<String>,
    seed: u64,
    ticks: u64,
    runs: u32,
    dump_settings: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            settings_path: None,
            seed: 0x5eed,
            ticks: 10_000,
            runs: 3,
            dump_settings: false,
        }
    }
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut options = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--settings" => options.settings_path = Some(value(&mut args, &arg)?),
                "--seed" => options.seed = number(&mut args, &arg)?,
                "--ticks" => options.ticks = number(&mut args, &arg)?,
                "--runs" => options.runs = number(&mut args, &arg)?,
                "--dump-settings" => options.dump_settings = true,
                other => return Err(format!("unknown argument: {other}")),
            }
        }
        Ok(options)
    }
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("{flag} needs a value"))
}

fn number<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<T, String> {
    let raw = value(args, flag)?;
    raw.parse()
        .map_err(|_| format!("{flag} expects a number, got {raw:?}"))
}

fn main() -> ExitCode {
    env_logger::init();

    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let settings = match &options.settings_path {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    if options.dump_settings {
        return match settings.to_json() {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                log::error!("{err}");
                ExitCode::FAILURE
            }
        };
    }

    log::info!("Run It (headless) starting...");
    let frame = run(settings, &options);

    match serde_json::to_string_pretty(&frame) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            log::error!("failed to serialize final frame: {err}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

/// Drive the simulation until the tick budget or the run budget is spent
fn run(settings: Settings, options: &Options) -> FrameView {
    let mut state = GameState::new(settings, options.seed);
    let mut input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    for _ in 0..options.ticks {
        if state.is_game_over() {
            if state.runs >= options.runs {
                input.quit_requested = true;
            } else {
                input.restart_requested = true;
            }
        }

        if tick(&mut state, &input) == TickStatus::Quit {
            break;
        }
        input.restart_requested = false;

        for event in &state.events {
            match event {
                GameEvent::Collision { .. } | GameEvent::Restarted => {
                    log::info!("{}", FrameView::capture(&state).status_line())
                }
                other => log::trace!("{other:?}"),
            }
        }
    }

    FrameView::capture(&state)
}

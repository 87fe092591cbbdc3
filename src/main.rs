//! Red Light, Green Light entry point
//!
//! Headless native runner: plays autopilot sessions on a fixed-step clock and
//! logs every transition. Set `RUST_LOG=debug` to see each signal flip.
//!
//! Usage: `red-light [--seed N] [--runs N] [--caution SECS] [--settings PATH] [--print-settings]`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use red_light::platform::FixedStepClock;
use red_light::sim::{GameEvent, Session, SessionState, tick};
use red_light::{Autopilot, Settings, SettingsError, format_timer};

/// Simulated display refresh (frames are not aligned with sim steps)
const FRAME_DT: f32 = 1.0 / 75.0;
/// Stop a run after this many frames even if unresolved
const MAX_FRAMES: u32 = 75 * 120;

/// Headless autopilot runs of Red Light, Green Light
#[derive(Parser, Debug)]
#[command(name = "red-light")]
struct Args {
    /// Seed of the first run; later runs use seed+1, seed+2, ...
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Number of runs to play
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    runs: u32,
    /// Seconds before a flip at which the autopilot lets go
    #[arg(long)]
    caution: Option<f32>,
    /// JSON settings file (missing fields take defaults)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Print the resolved settings as JSON and exit
    #[arg(long)]
    print_settings: bool,
}

fn load_settings(args: &Args) -> Result<Settings, SettingsError> {
    match &args.settings {
        Some(path) => Settings::load(path),
        None => Ok(Settings::default()),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    log::info!("Red Light, Green Light (native) starting...");

    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if args.print_settings {
        return match settings.to_json() {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        };
    }

    let mut wins = 0;
    for run in 0..args.runs {
        let seed = args.seed.wrapping_add(run as u64);
        let mut session = Session::new(&settings, seed);
        let mut pilot = match args.caution {
            Some(caution) => Autopilot::new(caution),
            None => Autopilot::default(),
        };
        let mut clock = FixedStepClock::default();

        session.restart();
        clock.reset();

        // Keep ticking after the run ends until the burst has faded
        let mut frames = 0;
        while frames < MAX_FRAMES
            && (session.state() == SessionState::Running || !session.particles().is_empty())
        {
            for _ in 0..clock.advance(FRAME_DT) {
                pilot.drive(&mut session);
                for event in tick(&mut session, clock.step()) {
                    if let GameEvent::PhaseChanged(phase) = event {
                        log::debug!(
                            "[{}] signal {} at y={:.0}",
                            format_timer(session.remaining()),
                            phase.as_str(),
                            session.position().y
                        );
                    }
                }
            }
            frames += 1;
        }

        let view = session.view();
        if view.state == SessionState::Won {
            wins += 1;
        }
        println!(
            "run {} (seed {}): {} with {} left at y={:.0}",
            run + 1,
            seed,
            view.banner().unwrap_or("UNRESOLVED"),
            view.timer_text(),
            view.position.y
        );
    }

    if args.runs > 1 {
        println!("{wins}/{} runs won", args.runs);
    }
    ExitCode::SUCCESS
}

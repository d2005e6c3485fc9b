//! Brick Breaker headless runner
//!
//! Drives a session with the autopilot for a fixed number of ticks and logs
//! what happens. Useful for soak-testing configs without a display.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use brick_breaker::autopilot::Autopilot;
use brick_breaker::render::{FrameLog, Renderer};
use brick_breaker::{
    GameConfig, GameSession, InputAdapter, InputEvent, Scoreboard, SessionState, TickInput,
};

#[derive(Parser, Debug)]
#[command(name = "brick-breaker", about = "Run a brick-breaker session headless")]
struct Args {
    /// Maximum ticks to simulate
    #[arg(long, default_value_t = 5000)]
    ticks: u64,
    /// Autopilot seed
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// JSON config file (defaults to the classic board)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Hold the paddle width override for the whole run
    #[arg(long)]
    cheat: bool,
    /// Extra plays after the first one ends
    #[arg(long, default_value_t = 0)]
    restarts: u32,
    /// Print the effective config as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    GameConfig::from_json(&json)
        .with_context(|| format!("failed to load config {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = load_config(args.config.as_ref())?;
    if args.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    log::info!("Brick Breaker (headless) starting, seed {}", args.seed);

    let mut session = GameSession::new(config);
    let mut board = Scoreboard::new();
    let mut input = InputAdapter::new();
    let mut renderer = FrameLog::new();
    let mut pilot = Autopilot::new(args.seed);
    let mut restarts_left = args.restarts;

    if args.cheat {
        input.apply(InputEvent::CheatOn);
    }

    for _ in 0..args.ticks {
        if let SessionState::Ended(_) = session.state {
            if let Some(banner) = board.banner() {
                log::info!("{}", banner.replace('\n', " "));
            }
            if restarts_left == 0 {
                break;
            }
            restarts_left -= 1;
            session.reset_with(&mut board);
        }

        pilot.drive(&session, &mut input);
        input.resolve_toggle(session.state == SessionState::Paused);
        let sample = TickInput::sample(&mut input);
        match session.tick(&sample, &mut board) {
            Some(frame) => renderer.present(&frame),
            None => renderer.present(&session.frame()),
        }
    }

    println!(
        "state={:?} score={} best={} plays={} ticks={} frames={}",
        session.state, session.score, board.best, board.plays, session.ticks, renderer.presented
    );
    Ok(())
}

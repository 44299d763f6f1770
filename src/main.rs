//! Blockfall terminal runner (default binary).
//!
//! Reads `BLOCKFALL_*` settings from the environment, then runs the frame
//! loop: poll crossterm input until the next frame is due, feed actions to
//! the game, advance it with the elapsed time, and present the board view
//! whenever it changed.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use blockfall::core::Game;
use blockfall::input::{action_for_key, should_quit};
use blockfall::term::{BoardView, TerminalRenderer, Viewport};
use blockfall::types::{GameConfig, FRAME_MS};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    config.validate().context("invalid BLOCKFALL_* configuration")?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to `BLOCKFALL_LOG_PATH` if set. The terminal is in raw mode while
/// playing, so there is no console logging.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };

    let level: tracing::Level = config
        .log_level
        .parse()
        .with_context(|| format!("unknown log level {:?}", config.log_level))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let seed = config.seed.unwrap_or_else(clock_seed);
    info!(
        seed,
        columns = config.columns,
        rows = config.rows,
        "starting game"
    );

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let view = BoardView::new(config.tile_width, Viewport::new(w, h));
    let mut game = Game::new(config, view, seed);
    game.repaint();

    let frame = Duration::from_millis(FRAME_MS);
    let start = Instant::now();
    let mut next_frame = start;

    loop {
        if game.renderer_mut().take_dirty() {
            term.draw(game.renderer().frame())?;
        }

        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = action_for_key(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(w, h) => game.renderer_mut().resize(Viewport::new(w, h)),
                _ => {}
            }
        }

        let now = Instant::now();
        if now >= next_frame {
            game.advance_time(now.duration_since(start).as_millis() as u64);
            next_frame = now + frame;

            if game.is_game_over() {
                game.renderer_mut().set_banner(Some("GAME OVER"));
            }
        }
    }
}

//! Terminal runner.
//!
//! Fixed 60 Hz loop: drain keyboard input, advance the engine one tick, draw.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use termino::cli::{self, RunConfig, USAGE};
use termino::core::GameState;
use termino::input::{handle_key_event, should_quit, InputHandler};
use termino::logging::init_file_logger;
use termino::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use termino::types::TICK_RATE_HZ;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let env_level = std::env::var(cli::LOG_ENV).ok();
    let Some(config) = cli::parse_args(&args, env_level.as_deref())? else {
        println!("{}", USAGE);
        return Ok(());
    };

    if let Some(path) = &config.log_file {
        init_file_logger(path, config.log_level)?;
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Restore the terminal even if the loop failed.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos()
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let seed = config.seed.unwrap_or_else(clock_seed);
    info!("starting session with seed {}", seed);

    let mut game = GameState::new(seed);
    let mut input = InputHandler::new();
    let view = GameView::new().with_ghost(config.ghost);
    let mut frame = FrameBuffer::new(0, 0);

    let tick = Duration::from_secs(1) / TICK_RATE_HZ;
    let mut next_tick = Instant::now() + tick;

    loop {
        // Input until the tick is due.
        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!("quit at score {}", game.score());
                        return Ok(());
                    }
                    let action = handle_key_event(key).and_then(|a| input.handle_action(a));
                    if let Some(action) = action {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        next_tick += tick;
        input.on_tick();
        game.advance(tick);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut frame);
        term.draw_swap(&mut frame)?;
    }
}

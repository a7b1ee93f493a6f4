//! Terminal runner (default binary).
//!
//! Owns the clock and the terminal: one cooperative, single-threaded tick
//! loop of input poll, state update, render, sleep. The sleep is the only
//! suspension point; its length is the world's current tick delay while
//! playing and a fixed animation cadence on the menu screens.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::terminal;

use tui_starflight::core::session::{Screen, Session};
use tui_starflight::input::poll_intents;
use tui_starflight::term::{views, RendererConfig, TerminalRenderer, Viewport};
use tui_starflight::types::MENU_TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new(RendererConfig::detect());
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state before saying goodbye.
    let _ = term.exit();
    println!("\nThanks for playing!");
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = Session::new(session_seed());
    let started = Instant::now();

    loop {
        // Input: drain whatever is pending; an empty tick is the common case.
        for intent in poll_intents()? {
            let before = session.screen();
            session.handle(intent);
            bind_field_on_entry(&mut session, before);
        }

        if session.screen() == Screen::Exited {
            return Ok(());
        }

        // No-op outside Playing; a collision flips the screen to GameOver.
        session.advance_world();

        let (cols, rows) = terminal::size().unwrap_or((80, 24));
        let mut fb = views::render(
            &session,
            Viewport::new(cols, rows),
            started.elapsed().as_millis() as u64,
        );
        term.draw_swap(&mut fb)?;

        thread::sleep(tick_delay(&session));
    }
}

/// The logical field is clamped to the live terminal once when a play
/// session starts (fresh from the menu or via restart) and then held fixed.
fn bind_field_on_entry(session: &mut Session, before: Screen) {
    if before != Screen::Playing && session.screen() == Screen::Playing {
        let (cols, rows) = terminal::size().unwrap_or((80, 24));
        if let Some(world) = session.world_mut() {
            world.bind_field(cols, rows);
        }
    }
}

fn tick_delay(session: &Session) -> Duration {
    match session.screen() {
        Screen::Playing => session
            .world()
            .map(|world| world.tick_delay())
            .unwrap_or(Duration::from_millis(MENU_TICK_MS)),
        _ => Duration::from_millis(MENU_TICK_MS),
    }
}

/// Seed gameplay randomness from wall clock, the way a fresh arcade run
/// should differ from the last one. Decorative effects seed themselves.
fn session_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}

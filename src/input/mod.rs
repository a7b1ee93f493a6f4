//! Input module - keyboard handling for menu and flight controls
//!
//! Input is polled non-blockingly once per tick; an empty tick is the
//! common case, not an error. Unrecognized keys are no-ops.

use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::Intent;

/// Map a key event to an intent.
///
/// Release and repeat events are ignored; repeats come from holding a key
/// and would otherwise double-apply on terminals that report them.
pub fn map_key(key: KeyEvent) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C arrives as a plain key event in raw mode; route it through the
    // ordinary quit path so shutdown stays cooperative.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Intent::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Intent::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Intent::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::Confirm),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Intent::Quit),
        _ => None,
    }
}

/// Drain all pending terminal events without blocking and decode them.
///
/// Bounded so a burst of auto-repeat cannot back the loop up; anything past
/// the cap is dropped for this tick.
pub fn poll_intents() -> Result<ArrayVec<Intent, 16>> {
    let mut intents = ArrayVec::new();
    while event::poll(Duration::from_secs(0))? {
        if let Event::Key(key) = event::read()? {
            if let Some(intent) = map_key(key) {
                let _ = intents.try_push(intent);
            }
        }
    }
    Ok(intents)
}

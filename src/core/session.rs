//! Session module - the Menu / Playing / GameOver / Exited state machine
//!
//! Pure and synchronous: intents go in, screen transitions come out. The
//! runner in `main` owns the clock and the terminal; everything here can be
//! driven from tests.
//!
//! Legal transitions:
//!   Menu -> Playing (confirm a difficulty) | Exited (confirm quit, or quit)
//!   Playing -> GameOver (collision) | Exited (quit)
//!   GameOver -> Playing (restart, same profile) | Exited (quit)
//! Menu is never re-entered.

use crate::core::world::{Steer, TickOutcome, World};
use crate::types::{Difficulty, Intent};

/// One row of the start menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Difficulty(Difficulty),
    Quit,
}

impl MenuEntry {
    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::Difficulty(difficulty) => difficulty.label(),
            MenuEntry::Quit => "Quit",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MenuEntry::Difficulty(difficulty) => difficulty.description(),
            MenuEntry::Quit => "Exit the game",
        }
    }
}

/// Menu rows in display order.
pub const MENU_ENTRIES: [MenuEntry; 4] = [
    MenuEntry::Difficulty(Difficulty::Easy),
    MenuEntry::Difficulty(Difficulty::Medium),
    MenuEntry::Difficulty(Difficulty::Hard),
    MenuEntry::Quit,
];

/// Wrapping selection cursor over [`MENU_ENTRIES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    selected: usize,
}

impl MenuState {
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> MenuEntry {
        MENU_ENTRIES[self.selected]
    }

    pub fn move_up(&mut self) {
        self.selected = (self.selected + MENU_ENTRIES.len() - 1) % MENU_ENTRIES.len();
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1) % MENU_ENTRIES.len();
    }
}

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    GameOver,
    Exited,
}

/// A full program session, from menu to exit.
#[derive(Debug, Clone)]
pub struct Session {
    screen: Screen,
    menu: MenuState,
    world: Option<World>,
    seed: u32,
}

impl Session {
    pub fn new(seed: u32) -> Self {
        Self {
            screen: Screen::Menu,
            menu: MenuState::default(),
            world: None,
            seed,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    pub fn world_mut(&mut self) -> Option<&mut World> {
        self.world.as_mut()
    }

    /// Apply one decoded input intent to the current screen. Intents that
    /// mean nothing on the current screen are no-ops.
    pub fn handle(&mut self, intent: Intent) {
        match self.screen {
            Screen::Menu => self.handle_menu(intent),
            Screen::Playing => self.handle_playing(intent),
            Screen::GameOver => self.handle_game_over(intent),
            Screen::Exited => {}
        }
    }

    fn handle_menu(&mut self, intent: Intent) {
        match intent {
            Intent::Up => self.menu.move_up(),
            Intent::Down => self.menu.move_down(),
            Intent::Confirm => match self.menu.selected() {
                MenuEntry::Difficulty(difficulty) => {
                    self.world = Some(World::new(difficulty, self.seed));
                    self.screen = Screen::Playing;
                }
                MenuEntry::Quit => self.screen = Screen::Exited,
            },
            Intent::Quit => self.screen = Screen::Exited,
            Intent::Restart => {}
        }
    }

    fn handle_playing(&mut self, intent: Intent) {
        match intent {
            Intent::Up => {
                if let Some(world) = self.world.as_mut() {
                    world.steer(Steer::Up);
                }
            }
            Intent::Down => {
                if let Some(world) = self.world.as_mut() {
                    world.steer(Steer::Down);
                }
            }
            Intent::Quit => self.screen = Screen::Exited,
            Intent::Confirm | Intent::Restart => {}
        }
    }

    fn handle_game_over(&mut self, intent: Intent) {
        match intent {
            Intent::Restart => {
                if let Some(world) = self.world.as_mut() {
                    world.reset();
                    self.screen = Screen::Playing;
                }
            }
            Intent::Quit => self.screen = Screen::Exited,
            Intent::Up | Intent::Down | Intent::Confirm => {}
        }
    }

    /// Run one simulation tick while playing. A collision moves the
    /// session to the game-over screen.
    pub fn advance_world(&mut self) -> TickOutcome {
        if self.screen != Screen::Playing {
            return TickOutcome::default();
        }
        let Some(world) = self.world.as_mut() else {
            return TickOutcome::default();
        };

        let outcome = world.tick();
        if outcome.collided {
            self.screen = Screen::GameOver;
        }
        outcome
    }
}

//! Core types shared across the application
//! This module contains pure data types and tuning constants with no
//! external dependencies.

/// Logical field design maxima (grid cells). The live field is clamped to
/// the terminal once per play session (see `World::bind_field`).
pub const FIELD_MAX_WIDTH: i32 = 80;
pub const FIELD_MAX_HEIGHT: i32 = 20;
/// Cells left free around the field when clamping to the terminal.
pub const FIELD_MARGIN: i32 = 2;
/// Smallest field the simulation will run on, whatever the terminal says.
pub const FIELD_MIN_WIDTH: i32 = 12;
pub const FIELD_MIN_HEIGHT: i32 = 8;

/// Fixed player column; only the row is player-controlled.
pub const PLAYER_X: i32 = 5;
pub const PLAYER_GLYPH: char = 'D';

pub const OBSTACLE_GLYPHS: [char; 4] = ['#', '^', '%', '@'];
pub const COLLECTIBLE_GLYPHS: [char; 3] = ['$', '&', 'O'];
pub const SKY_GLYPHS: [char; 3] = ['*', '.', '+'];

/// Points for scrolling past an obstacle without hitting it.
pub const PASS_SCORE: u32 = 10;
/// Level rises (with a speed burst) every this many passed obstacles.
pub const PASSES_PER_LEVEL: u32 = 5;

/// Entities are destroyed once `x` drops below this column.
pub const DESPAWN_X: i32 = -2;

// Spawner tuning. These are balance values, named here rather than inlined
// so tuning stays in one place.
pub const BOOTSTRAP_OBSTACLES: usize = 10;
pub const BOOTSTRAP_LEAD_GAP: i32 = 30;
pub const GAP_MIN: i32 = 15;
pub const GAP_MAX: i32 = 30;
pub const GAP_LEVEL_NARROWING_CAP: i32 = 10;
pub const BOOTSTRAP_COLLECTIBLE_CHANCE: f32 = 0.4;
pub const BOOTSTRAP_COLLECTIBLE_SETBACK_MIN: i32 = 5;
pub const BOOTSTRAP_COLLECTIBLE_SETBACK_MAX: i32 = 10;
/// Steady state: no new obstacle until the trailing one has scrolled this
/// far in from the right edge.
pub const SPAWN_MARGIN: i32 = 15;
pub const SPAWN_OFFSET: i32 = 10;
pub const STEADY_COLLECTIBLE_CHANCE: f32 = 0.3;
pub const STEADY_COLLECTIBLE_OFFSET_MIN: i32 = 5;
pub const STEADY_COLLECTIBLE_OFFSET_MAX: i32 = 15;

/// Vertical spawn band margins: the HUD row at the top and the help row at
/// the bottom are never used for entity placement.
pub const SPAWN_BAND_TOP: i32 = 2;
pub const SPAWN_BAND_BOTTOM: i32 = 3;

/// Menu and game-over screens animate at a fixed cadence (milliseconds).
pub const MENU_TICK_MS: u64 = 100;
/// The decorative starfield re-seeds every half second.
pub const SKY_RESEED_MS: u64 = 500;

/// Logical field dimensions bound for one play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSize {
    pub width: i32,
    pub height: i32,
}

impl FieldSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Inclusive row range eligible for entity placement.
    pub fn spawn_band(&self) -> (i32, i32) {
        let top = SPAWN_BAND_TOP;
        let bottom = (self.height - SPAWN_BAND_BOTTOM).max(top);
        (top, bottom)
    }
}

/// Difficulty tiers selectable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The immutable speed/density bundle bound at session start.
    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                initial_delay_us: 100_000,
                speed_increase_us: 1_000,
                min_delay_us: 50_000,
                spawn_chance: 0.3,
            },
            Difficulty::Medium => DifficultyProfile {
                initial_delay_us: 80_000,
                speed_increase_us: 1_500,
                min_delay_us: 40_000,
                spawn_chance: 0.5,
            },
            Difficulty::Hard => DifficultyProfile {
                initial_delay_us: 60_000,
                speed_increase_us: 2_000,
                min_delay_us: 30_000,
                spawn_chance: 0.7,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Difficulty::Easy => "Beginner friendly with fewer obstacles",
            Difficulty::Medium => "Balanced challenge with moderate obstacles",
            Difficulty::Hard => "Intense challenge with many obstacles",
        }
    }
}

/// Immutable per-difficulty tuning, selected once at game start.
///
/// Delay values are in microseconds; the medium tier's 1.5 ms decrement is
/// why these are not plain milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Sleep between ticks at session start.
    pub initial_delay_us: u64,
    /// Delay decrement unit: applied once per tick, and five-fold on each
    /// level-up.
    pub speed_increase_us: u64,
    /// Delay floor (top speed).
    pub min_delay_us: u64,
    /// Chance to append an obstacle on an eligible steady-state tick.
    pub spawn_chance: f32,
}

/// Player/menu intents decoded from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Up,
    Down,
    Confirm,
    Restart,
    Quit,
}

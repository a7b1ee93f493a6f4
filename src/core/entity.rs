//! Entity model - plain value records for everything that scrolls past
//!
//! Obstacles and collectibles carry position, a display glyph, and a
//! one-shot latch (`passed` / `collected`). All movement and flag updates
//! happen in `World::tick`; nothing here has behavior beyond bounds and
//! value lookups.

use crate::core::collision::Rect;

/// Space debris. Scrolls left one column per tick; `passed` latches true
/// the first time it crosses behind the player column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
    pub glyph: char,
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: i32, y: i32, glyph: char) -> Self {
        Self {
            x,
            y,
            glyph,
            passed: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::cell(self.x, self.y)
    }
}

/// Floating pickup worth a fixed tier value derived from its glyph.
/// `collected` latches true on first contact so the value is scored once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collectible {
    pub x: i32,
    pub y: i32,
    pub glyph: char,
    pub collected: bool,
}

impl Collectible {
    pub fn new(x: i32, y: i32, glyph: char) -> Self {
        Self {
            x,
            y,
            glyph,
            collected: false,
        }
    }

    pub fn value(&self) -> u32 {
        collectible_value(self.glyph)
    }

    pub fn bounds(&self) -> Rect {
        Rect::cell(self.x, self.y)
    }
}

/// Fixed three-tier value mapping: coin, star, diamond.
///
/// Unknown glyphs score zero; the spawner only ever draws from
/// `COLLECTIBLE_GLYPHS`, so that arm is unreachable in practice.
pub fn collectible_value(glyph: char) -> u32 {
    match glyph {
        '$' => 5,
        '&' => 15,
        'O' => 30,
        _ => 0,
    }
}

//! Views: map session state into a terminal framebuffer.
//!
//! Pure (no I/O), so every screen can be rendered and asserted in tests.
//! Paint order on the play screen is back to front: sky, collectibles,
//! player, obstacles, HUD.

use crate::core::rng::SimpleRng;
use crate::core::session::{MenuState, Screen, Session, MENU_ENTRIES};
use crate::core::world::World;
use crate::term::fb::{FrameBuffer, Tone};
use crate::types::{PLAYER_GLYPH, SKY_GLYPHS, SKY_RESEED_MS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Sky decoration density differs between gameplay and the menu screens.
const SKY_STARS_PLAYING: u32 = 8;
const SKY_STRIDE_PLAYING: u32 = 10;
const SKY_STARS_MENU: u32 = 15;
const SKY_STRIDE_MENU: u32 = 7;

const HELP_LINE: &str = "w:up s:down q:quit";
const TITLE: &str = "S T A R F L I G H T";
const SUBTITLE: &str = "Navigate the cosmos and dodge the debris!";

/// Render the current screen into a fresh framebuffer sized to the
/// viewport. `elapsed_ms` drives the decorative starfield only.
pub fn render(session: &Session, viewport: Viewport, elapsed_ms: u64) -> FrameBuffer {
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    match session.screen() {
        Screen::Menu => draw_menu(&mut fb, session.menu(), elapsed_ms),
        Screen::Playing => {
            if let Some(world) = session.world() {
                draw_world(&mut fb, world, elapsed_ms);
            }
        }
        Screen::GameOver => {
            if let Some(world) = session.world() {
                draw_game_over(&mut fb, world, elapsed_ms);
            }
        }
        Screen::Exited => {}
    }
    fb
}

/// Drifting starfield. The generator is re-seeded per frame from elapsed
/// time (half-second cadence), so decoration is isolated from gameplay
/// randomness while still animating steadily.
fn draw_sky(fb: &mut FrameBuffer, elapsed_ms: u64, stars: u32, stride: u32) {
    if fb.height() <= 3 || fb.width() == 0 {
        return;
    }

    let sky_time = (elapsed_ms / SKY_RESEED_MS) as u32;
    let mut rng = SimpleRng::new(sky_time);

    for i in 0..stars {
        let x = (sky_time.wrapping_add(i * stride)) % fb.width() as u32;
        let y = rng.range_inclusive(1, fb.height() as i32 - 2);
        fb.put_char(x as u16, y as u16, rng.pick(&SKY_GLYPHS), Tone::Sky);
    }
}

fn put_entity(fb: &mut FrameBuffer, x: i32, y: i32, glyph: char, tone: Tone) {
    // Entities left of the field are mid-despawn; the framebuffer clips the
    // far side on its own.
    if x >= 0 && y >= 0 {
        fb.put_char(x as u16, y as u16, glyph, tone);
    }
}

fn draw_world(fb: &mut FrameBuffer, world: &World, elapsed_ms: u64) {
    draw_sky(fb, elapsed_ms, SKY_STARS_PLAYING, SKY_STRIDE_PLAYING);

    for collectible in world.collectibles() {
        put_entity(
            fb,
            collectible.x,
            collectible.y,
            collectible.glyph,
            Tone::Collectible,
        );
    }

    put_entity(
        fb,
        world.player_x(),
        world.player_y(),
        PLAYER_GLYPH,
        Tone::Player,
    );

    for obstacle in world.obstacles() {
        put_entity(fb, obstacle.x, obstacle.y, obstacle.glyph, Tone::Obstacle);
    }

    draw_hud(fb, world);

    if fb.height() > 4 {
        let help_y = (world.field().height - 1).max(0) as u16;
        fb.put_str(2, help_y, HELP_LINE, Tone::Dim);
    }
}

/// Score line at the top of the field, painted only when there is room.
fn draw_hud(fb: &mut FrameBuffer, world: &World) {
    if fb.height() <= 2 {
        return;
    }
    let hud = format!(
        "Score: {}   Level: {}   Speed: {}   Items: {}",
        world.score(),
        world.level(),
        world.speed_display(),
        world.collected_items()
    );
    fb.put_str(2, 1, &hud, Tone::Text);
}

fn draw_menu(fb: &mut FrameBuffer, menu: &MenuState, elapsed_ms: u64) {
    draw_sky(fb, elapsed_ms, SKY_STARS_MENU, SKY_STRIDE_MENU);

    let title_y = fb.height() / 4;
    fb.put_str_centered(title_y, TITLE, Tone::Title);
    fb.put_str_centered(title_y.saturating_add(2), SUBTITLE, Tone::Text);
    fb.put_str_centered(
        title_y.saturating_add(5),
        "Use arrow keys or w/s to navigate",
        Tone::Text,
    );
    fb.put_str_centered(
        title_y.saturating_add(6),
        "Press Enter to select",
        Tone::Text,
    );

    let list_y = title_y.saturating_add(9);
    for (i, entry) in MENU_ENTRIES.iter().enumerate() {
        let y = list_y.saturating_add(i as u16);
        if i == menu.selected_index() {
            fb.put_str_centered(y, &format!("> {} <", entry.label()), Tone::Selected);
        } else {
            fb.put_str_centered(y, &format!("  {}  ", entry.label()), Tone::Title);
        }
    }

    let desc_y = list_y.saturating_add(MENU_ENTRIES.len() as u16 + 2);
    fb.put_str_centered(desc_y, menu.selected().description(), Tone::Text);
}

fn draw_game_over(fb: &mut FrameBuffer, world: &World, elapsed_ms: u64) {
    draw_sky(fb, elapsed_ms, SKY_STARS_MENU, SKY_STRIDE_MENU);

    let mid = fb.height() / 2;
    fb.put_str_centered(mid.saturating_sub(4), "GAME OVER", Tone::Obstacle);
    fb.put_str_centered(
        mid.saturating_sub(3),
        &format!("Difficulty: {}", world.difficulty().label()),
        Tone::Text,
    );
    fb.put_str_centered(
        mid.saturating_sub(1),
        &format!("Your score: {}", world.score()),
        Tone::Text,
    );
    fb.put_str_centered(
        mid.saturating_add(1),
        &format!("Level reached: {}", world.level()),
        Tone::Text,
    );
    fb.put_str_centered(
        mid.saturating_add(3),
        &format!("Items collected: {}", world.collected_items()),
        Tone::Text,
    );
    fb.put_str_centered(
        mid.saturating_add(5),
        "Press 'r' to restart or 'q' to quit",
        Tone::Accent,
    );
}

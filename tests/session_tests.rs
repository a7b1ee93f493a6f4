//! Session tests - the Menu / Playing / GameOver / Exited state machine

use tui_starflight::core::{Obstacle, Screen, Session};
use tui_starflight::types::{Difficulty, Intent, PLAYER_X};

/// Drive a fresh session into Playing on the given difficulty.
fn start_playing(difficulty: Difficulty) -> Session {
    let mut session = Session::new(1);
    let downs = match difficulty {
        Difficulty::Easy => 0,
        Difficulty::Medium => 1,
        Difficulty::Hard => 2,
    };
    for _ in 0..downs {
        session.handle(Intent::Down);
    }
    session.handle(Intent::Confirm);
    assert_eq!(session.screen(), Screen::Playing);
    session
}

/// Park an obstacle one column ahead of the player so the next tick
/// collides.
fn arm_collision(session: &mut Session) {
    let world = session.world_mut().unwrap();
    world.obstacles_mut().clear();
    world.collectibles_mut().clear();
    let y = world.player_y();
    world.obstacles_mut().push(Obstacle::new(PLAYER_X + 1, y, '#'));
}

#[test]
fn test_menu_quit_exits_without_entering_playing() {
    let mut session = Session::new(1);
    for _ in 0..3 {
        session.handle(Intent::Down);
    }
    session.handle(Intent::Confirm);

    assert_eq!(session.screen(), Screen::Exited);
    assert!(session.world().is_none(), "no world may ever have existed");
}

#[test]
fn test_menu_binds_selected_difficulty() {
    let session = start_playing(Difficulty::Hard);
    assert_eq!(session.world().unwrap().difficulty(), Difficulty::Hard);
}

#[test]
fn test_collision_moves_to_game_over() {
    let mut session = start_playing(Difficulty::Easy);
    arm_collision(&mut session);

    let outcome = session.advance_world();
    assert!(outcome.collided);
    assert_eq!(session.screen(), Screen::GameOver);
}

#[test]
fn test_game_over_restart_resets_world_with_same_difficulty() {
    let mut session = start_playing(Difficulty::Medium);

    // Score something before dying.
    {
        let world = session.world_mut().unwrap();
        world.obstacles_mut().clear();
        world.collectibles_mut().clear();
        world.obstacles_mut().push(Obstacle::new(PLAYER_X, 2, '#'));
    }
    session.advance_world();
    assert!(session.world().unwrap().score() > 0);

    arm_collision(&mut session);
    session.advance_world();
    assert_eq!(session.screen(), Screen::GameOver);

    session.handle(Intent::Restart);
    assert_eq!(session.screen(), Screen::Playing);
    let world = session.world().unwrap();
    assert_eq!(world.difficulty(), Difficulty::Medium);
    assert_eq!(world.score(), 0);
    assert_eq!(world.level(), 1);
    assert_eq!(
        world.tick_delay_us(),
        Difficulty::Medium.profile().initial_delay_us
    );
}

#[test]
fn test_game_over_quit_exits() {
    let mut session = start_playing(Difficulty::Easy);
    arm_collision(&mut session);
    session.advance_world();
    assert_eq!(session.screen(), Screen::GameOver);

    session.handle(Intent::Quit);
    assert_eq!(session.screen(), Screen::Exited);
}

#[test]
fn test_playing_quit_exits_directly() {
    let mut session = start_playing(Difficulty::Easy);
    session.handle(Intent::Quit);
    assert_eq!(session.screen(), Screen::Exited);
}

#[test]
fn test_playing_ignores_confirm_and_restart() {
    let mut session = start_playing(Difficulty::Easy);
    session.handle(Intent::Confirm);
    assert_eq!(session.screen(), Screen::Playing);
    session.handle(Intent::Restart);
    assert_eq!(session.screen(), Screen::Playing);
}

#[test]
fn test_steering_moves_player_within_band() {
    let mut session = start_playing(Difficulty::Easy);
    let start_y = session.world().unwrap().player_y();

    session.handle(Intent::Up);
    assert_eq!(session.world().unwrap().player_y(), start_y - 1);

    let height = session.world().unwrap().field().height;
    for _ in 0..(height * 2) {
        session.handle(Intent::Down);
    }
    assert_eq!(session.world().unwrap().player_y(), height - 2);
}

#[test]
fn test_game_over_ignores_steering() {
    let mut session = start_playing(Difficulty::Easy);
    arm_collision(&mut session);
    session.advance_world();

    let y = session.world().unwrap().player_y();
    session.handle(Intent::Up);
    session.handle(Intent::Down);
    assert_eq!(session.world().unwrap().player_y(), y);
    assert_eq!(session.screen(), Screen::GameOver);
}

#[test]
fn test_ticking_stops_outside_playing() {
    let mut session = start_playing(Difficulty::Easy);
    arm_collision(&mut session);
    session.advance_world();
    assert_eq!(session.screen(), Screen::GameOver);

    let delay = session.world().unwrap().tick_delay_us();
    for _ in 0..10 {
        session.advance_world();
    }
    // GameOver ticks are no-ops: the world is frozen until restart.
    assert_eq!(session.world().unwrap().tick_delay_us(), delay);
    assert_eq!(session.screen(), Screen::GameOver);
}

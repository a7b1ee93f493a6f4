//! Core module - pure game logic with no external dependencies
//!
//! This module contains the entity model, spawning, collision, speed
//! progression, and the session state machine. It has zero dependencies on
//! UI or terminal I/O.

pub mod collision;
pub mod entity;
pub mod rng;
pub mod session;
pub mod spawner;
pub mod world;

// Re-export commonly used types
pub use collision::Rect;
pub use entity::{collectible_value, Collectible, Obstacle};
pub use rng::SimpleRng;
pub use session::{MenuEntry, MenuState, Screen, Session};
pub use spawner::Spawner;
pub use world::{Steer, TickOutcome, World};

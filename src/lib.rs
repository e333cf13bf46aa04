//! Shape Scramble - a 2D shape-shooting arcade game
//!
//! Core modules:
//! - `math`: hand-rolled vector/matrix library with homogeneous transforms
//! - `sim`: deterministic simulation (shapes, collisions, game state)
//!
//! Rendering, audio, text and asset handling live outside this crate. The
//! shell feeds [`sim::tick`] an input snapshot and a play area each frame
//! and maps the returned [`sim::GameEvent`]s to SFX and UI.

pub mod math;
pub mod sim;

pub use sim::{GameState, PlayArea, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Player collision radius
    pub const PLAYER_RADIUS: f64 = 10.0;
    /// Player movement speed (pixels/sec)
    pub const PLAYER_SPEED: f64 = 150.0;
    /// Starting score; it doubles as the player's health
    pub const PLAYER_START_SCORE: i32 = 5;

    /// Cooldown after each shot (seconds)
    pub const SHOT_COOLDOWN: f64 = 0.25;
    /// Shorter cooldown granted on game start and unpause
    pub const SHOT_COOLDOWN_INITIAL: f64 = 0.1;
    /// Projectile speed (pixels/sec)
    pub const SHOT_SPEED: f64 = 200.0;
    /// Projectile collision radius
    pub const SHOT_RADIUS: f64 = 5.0;

    /// Enemy starting speed (pixels/sec)
    pub const ENEMY_START_SPEED: f64 = 70.0;
    /// Speed gained at every acceleration interval
    pub const ENEMY_ACCEL: f64 = 25.0;
    /// Seconds between enemy speed-ups
    pub const ENEMY_ACCEL_INTERVAL: f64 = 10.0;
    /// Seconds between re-targeting passes
    pub const ENEMY_SEEK_INTERVAL: f64 = 1.0;
    /// Seconds between scheduled enemy spawns
    pub const ENEMY_SPAWN_INTERVAL: f64 = 30.0;
    /// Enemy radius range (inclusive)
    pub const ENEMY_MIN_RADIUS: u32 = 15;
    pub const ENEMY_MAX_RADIUS: u32 = 30;
    /// Enemy polygon vertex count range (inclusive)
    pub const ENEMY_MIN_SIDES: u32 = 3;
    pub const ENEMY_MAX_SIDES: u32 = 10;
    /// Open space required around the player when placing an enemy
    pub const ENEMY_SPAWN_CLEARANCE: f64 = 100.0;

    /// Pickup triangle radius
    pub const PICKUP_RADIUS: f64 = 15.0;
    /// Pickup spawn delay range (seconds)
    pub const PICKUP_SPAWN_MIN: f64 = 0.5;
    pub const PICKUP_SPAWN_MAX: f64 = 2.0;
    /// Open space required around the player when placing a pickup
    pub const PICKUP_SPAWN_CLEARANCE: f64 = 10.0;
    /// Seconds spent at the full and half score tiers
    pub const PICKUP_TIER_DURATION: f64 = 5.0;
    /// Seconds spent at the worthless tier before removal
    pub const PICKUP_FINAL_DURATION: f64 = 2.0;
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Externally supplied, possibly non-uniform frame deltas
//! - Seeded RNG only
//! - Single-threaded; the state owns every entity collection exclusively
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod shape;
pub mod state;
pub mod tick;

pub use collision::{circle_circle, circle_hits_polygon, circle_polygon, triangle_area};
pub use shape::{Aabb, Circle, Polygon, Shape};
pub use state::{
    Enemy, GameEvent, GamePhase, GameState, Pickup, PlayArea, Player, RunStats, Shot,
};
pub use tick::{TickInput, tick};

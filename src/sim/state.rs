//! Game state and core simulation types.
//!
//! Everything the simulation owns lives here: the player and their live
//! projectiles, enemies, pickups, the run RNG and the per-frame event list.
//! Same seed + same inputs = identical runs.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::circle_circle;
use super::shape::{Circle, Polygon, Shape};
use crate::consts::*;
use crate::math::{MathResult, Vector2};

/// Where the opening enemy appears at the start of every run.
const FIRST_ENEMY_POSITION: Vector2 = Vector2 { x: 500.0, y: 200.0 };

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting on the title screen for a start input
    Title,
    /// Active gameplay
    Playing,
    /// Paused mid-run
    Paused,
    /// Run ended (score reached zero)
    GameOver,
}

/// The rectangle the game is played in, supplied by the shell every frame.
///
/// `ui_height` is the band reserved for UI across the top of the window;
/// moving entities are kept out of its upper half.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f64,
    pub height: f64,
    pub ui_height: f64,
}

impl PlayArea {
    /// The impassable band at the top of the play area.
    pub fn top_margin(&self) -> f64 {
        self.ui_height / 2.0
    }
}

/// Scorable things that happened during one tick, for the shell to map to
/// SFX and UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    ShotFired { shot_id: u32 },
    EnemySpawned { enemy_id: u32 },
    EnemyShot { enemy_id: u32, shot_id: u32 },
    PlayerHit { enemy_id: u32 },
    PickupSpawned { pickup_id: u32 },
    PickupCollected { pickup_id: u32, score: f64 },
    PickupSpoiled { pickup_id: u32 },
    PickupExpired { pickup_id: u32 },
    PointsBanked,
    GameOver,
}

/// Running totals shown on the game-over screen.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RunStats {
    pub pickups_collected: u32,
    pub enemies_shot: u32,
    pub time_survived: f64,
}

/// The player: a circle that fires projectiles toward the cursor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub shape: Circle,
    /// Movement intent, each component in [-1, 1]
    pub movement: Vector2,
    pub speed: f64,
    /// Score doubles as health; the run ends at zero
    pub score: i32,
    /// Seconds until the next shot is allowed
    pub shot_timer: f64,
    /// Live projectiles, owned by the player
    pub shots: Vec<Shot>,
}

impl Player {
    pub fn new(center: Vector2) -> Self {
        Self {
            shape: Circle::new(center, PLAYER_RADIUS),
            movement: Vector2::ZERO,
            speed: PLAYER_SPEED,
            score: PLAYER_START_SCORE,
            shot_timer: SHOT_COOLDOWN_INITIAL,
            shots: Vec::new(),
        }
    }
}

/// A projectile with constant velocity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shot {
    pub id: u32,
    pub shape: Circle,
    pub velocity: Vector2,
}

impl Shot {
    /// Spawn a shot at `center` moving along `angle_radians` (screen
    /// convention, y inverted).
    pub fn new(id: u32, center: Vector2, angle_radians: f64) -> Self {
        Self {
            id,
            shape: Circle::new(center, SHOT_RADIUS),
            velocity: Vector2::from_polar(SHOT_SPEED, angle_radians.to_degrees(), true),
        }
    }

    pub fn advance(&mut self, dt: f64) {
        self.shape.center += self.velocity * dt;
    }
}

/// A roaming enemy that periodically re-targets the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub shape: Shape,
    /// Current velocity (speed baked in)
    pub movement: Vector2,
    pub speed: f64,
    /// Seconds until the next speed-up
    pub accel_timer: f64,
    /// Seconds until the next re-targeting pass
    pub seek_timer: f64,
    pub color: (u8, u8, u8),
}

impl Enemy {
    /// Roll a fresh enemy at `center`: radius 15-30, a 1-in-9 chance of a
    /// circle, otherwise a 3-10 sided polygon, and a bright random color.
    pub fn spawn(id: u32, center: Vector2, rng: &mut Pcg32) -> MathResult<Self> {
        let radius = f64::from(rng.random_range(ENEMY_MIN_RADIUS..=ENEMY_MAX_RADIUS));
        let shape = if rng.random_range(0..=8) == 0 {
            Shape::Circle(Circle::new(center, radius))
        } else {
            let sides = rng.random_range(ENEMY_MIN_SIDES..=ENEMY_MAX_SIDES);
            Shape::Polygon(Polygon::regular(center, sides, radius)?)
        };
        Ok(Self {
            id,
            shape,
            movement: Vector2::ZERO,
            speed: ENEMY_START_SPEED,
            accel_timer: ENEMY_ACCEL_INTERVAL,
            // Zero so the first update immediately targets the player
            seek_timer: 0.0,
            color: random_color(rng),
        })
    }

    pub fn center(&self) -> Vector2 {
        self.shape.center()
    }

    pub fn radius(&self) -> f64 {
        self.shape.radius()
    }

    /// Point the velocity at `target` with the current speed.
    pub fn seek(&mut self, target: Vector2) {
        let diff = target - self.center();
        let angle = (-diff.y).atan2(diff.x);
        self.movement = Vector2::from_polar(self.speed, angle.to_degrees(), true);
    }

    /// Hit reaction: move to `center` and re-roll size, shape and color.
    /// A polygon stays a polygon (with fresh vertices); a circle has a
    /// 1-in-3 chance of becoming one.
    pub fn scramble(&mut self, center: Vector2, rng: &mut Pcg32) -> MathResult<()> {
        let radius = f64::from(rng.random_range(ENEMY_MIN_RADIUS..=ENEMY_MAX_RADIUS));
        let becomes_polygon =
            matches!(self.shape, Shape::Polygon(_)) || rng.random_range(1..=3) == 1;
        self.shape = if becomes_polygon {
            let sides = rng.random_range(ENEMY_MIN_SIDES..=ENEMY_MAX_SIDES);
            Shape::Polygon(Polygon::regular(center, sides, radius)?)
        } else {
            Shape::Circle(Circle::new(center, radius))
        };
        self.color = random_color(rng);
        Ok(())
    }
}

/// A decaying triangular pickup. Its score ticks down through three tiers
/// before it disappears.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub id: u32,
    pub shape: Polygon,
    /// Current score tier: 0.5, 0.25 or 0
    pub score: f64,
    /// Score at the moment of collection, refunded if it decays unbanked
    pub score_at_collection: Option<f64>,
    pub decay_timer: f64,
    pub collected: bool,
}

impl Pickup {
    pub fn new(id: u32, center: Vector2) -> MathResult<Self> {
        Ok(Self {
            id,
            shape: Polygon::regular(center, 3, PICKUP_RADIUS)?,
            score: 0.5,
            score_at_collection: None,
            decay_timer: PICKUP_TIER_DURATION,
            collected: false,
        })
    }

    /// Tier index for the shell's sprite lookup: 0 fresh, 1 half, 2 spoiled.
    pub fn tier(&self) -> usize {
        if self.score == 0.5 {
            0
        } else if self.score == 0.25 {
            1
        } else {
            2
        }
    }

    /// Count the decay timer down, stepping through the score tiers.
    /// Returns true once the pickup is fully decayed and should be removed.
    pub fn decay(&mut self, dt: f64) -> bool {
        self.decay_timer -= dt;
        if self.decay_timer <= 0.0 && self.score == 0.5 {
            self.decay_timer = PICKUP_TIER_DURATION;
            self.score = 0.25;
        }
        if self.decay_timer <= 0.0 && self.score == 0.25 {
            self.decay_timer = PICKUP_FINAL_DURATION;
            self.score = 0.0;
        }
        self.decay_timer <= 0.0 && self.score == 0.0
    }
}

/// Complete game state (deterministic, serializable).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub pickups: Vec<Pickup>,
    /// Seconds until the next scheduled enemy spawn
    pub enemy_spawn_timer: f64,
    /// Seconds until the next pickup spawn
    pub pickup_spawn_timer: f64,
    /// Pickup score stashed toward the next banked point
    pub stash: f64,
    pub stats: RunStats,
    /// Events from the most recent tick (cleared at the start of each)
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a fresh run: player centered in the play area and one enemy
    /// already roaming.
    pub fn new(seed: u64, area: &PlayArea) -> MathResult<Self> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let pickup_spawn_timer = rng.random_range(PICKUP_SPAWN_MIN..PICKUP_SPAWN_MAX);
        let mut state = Self {
            seed,
            rng,
            phase: GamePhase::Title,
            player: Player::new(Vector2::new(area.width / 2.0, area.height / 2.0)),
            enemies: Vec::new(),
            pickups: Vec::new(),
            enemy_spawn_timer: ENEMY_SPAWN_INTERVAL,
            pickup_spawn_timer,
            stash: 0.0,
            stats: RunStats::default(),
            events: Vec::new(),
            next_id: 1,
        };
        let id = state.next_entity_id();
        let first = Enemy::spawn(id, FIRST_ENEMY_POSITION, &mut state.rng)?;
        state.enemies.push(first);
        Ok(state)
    }

    /// Reset everything for a new run after game over. The RNG stream
    /// continues; the run seed stays the same.
    pub fn reset(&mut self, area: &PlayArea) -> MathResult<()> {
        self.player = Player::new(Vector2::new(area.width / 2.0, area.height / 2.0));
        self.enemies.clear();
        self.pickups.clear();
        self.enemy_spawn_timer = ENEMY_SPAWN_INTERVAL;
        self.pickup_spawn_timer = self.rng.random_range(PICKUP_SPAWN_MIN..PICKUP_SPAWN_MAX);
        self.stash = 0.0;
        self.stats = RunStats::default();
        let id = self.next_entity_id();
        let first = Enemy::spawn(id, FIRST_ENEMY_POSITION, &mut self.rng)?;
        self.enemies.push(first);
        log::info!("game reset");
        Ok(())
    }

    /// Allocate a new entity ID.
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Read-only view of the events produced by the most recent tick.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Rejection-sample a spawn position inside the play area with at least
    /// `clearance` of open space around the player circle.
    pub fn choose_clear_position(&mut self, radius: f64, clearance: f64, area: &PlayArea) -> Vector2 {
        let player_center = self.player.shape.center;
        let player_radius = self.player.shape.radius;
        loop {
            let pos = Vector2::new(
                self.rng.random_range(radius..=area.width - radius),
                self.rng.random_range(area.ui_height + radius..=area.height - radius),
            );
            if !circle_circle(pos, radius, player_center, player_radius + clearance) {
                return pos;
            }
        }
    }

    /// Register a spawned enemy: log it and record the event.
    pub(crate) fn add_enemy(&mut self, enemy: Enemy) {
        let center = enemy.center();
        log::info!("enemy {} spawned at ({:.0}, {:.0})", enemy.id, center.x, center.y);
        self.events.push(GameEvent::EnemySpawned { enemy_id: enemy.id });
        self.enemies.push(enemy);
    }

    /// Spawn an enemy at a random clear position.
    pub fn spawn_enemy(&mut self, area: &PlayArea) -> MathResult<()> {
        let id = self.next_entity_id();
        let mut enemy = Enemy::spawn(id, Vector2::ZERO, &mut self.rng)?;
        let pos = self.choose_clear_position(enemy.radius(), ENEMY_SPAWN_CLEARANCE, area);
        let delta = pos - enemy.center();
        enemy.shape.translate(delta)?;
        self.add_enemy(enemy);
        Ok(())
    }

    /// Spawn a pickup at a random clear position.
    pub fn spawn_pickup(&mut self, area: &PlayArea) -> MathResult<()> {
        let id = self.next_entity_id();
        let pos = self.choose_clear_position(PICKUP_RADIUS, PICKUP_SPAWN_CLEARANCE, area);
        let pickup = Pickup::new(id, pos)?;
        self.events.push(GameEvent::PickupSpawned { pickup_id: id });
        self.pickups.push(pickup);
        Ok(())
    }
}

fn random_color(rng: &mut Pcg32) -> (u8, u8, u8) {
    (
        rng.random_range(100..=255),
        rng.random_range(100..=255),
        rng.random_range(100..=255),
    )
}

//! Per-frame simulation update.
//!
//! One tick = one frame: sample the input snapshot, advance every owned
//! entity by the externally supplied delta, resolve collisions and run the
//! scoring state machine. The delta is opaque and may vary from frame to
//! frame; nothing here assumes a fixed timestep.

use rand::Rng;

use super::collision::{circle_circle, circle_hits_polygon};
use super::shape::Shape;
use super::state::{Enemy, GameEvent, GamePhase, GameState, PlayArea, Shot};
use crate::consts::*;
use crate::math::{MathResult, Vector2};

/// Input snapshot for a single tick (deterministic).
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Movement intent; each component is clamped to [-1, 1]
    pub movement: Vector2,
    /// Fire button held
    pub fire: bool,
    /// Cursor position in play-area coordinates
    pub cursor: Vector2,
    /// Start / resume / retry
    pub start: bool,
    /// Pause request
    pub pause: bool,
}

/// Advance the game state by one frame.
pub fn tick(state: &mut GameState, input: &TickInput, area: &PlayArea, dt: f64) -> MathResult<()> {
    state.events.clear();

    match state.phase {
        GamePhase::Title if input.start => {
            state.phase = GamePhase::Playing;
            state.player.shot_timer = SHOT_COOLDOWN_INITIAL;
            log::info!("game started (seed {})", state.seed);
        }
        GamePhase::GameOver if input.start => {
            state.reset(area)?;
            state.phase = GamePhase::Playing;
            log::info!("new run started (seed {})", state.seed);
        }
        GamePhase::Paused if input.start => {
            state.phase = GamePhase::Playing;
        }
        GamePhase::Playing if input.pause => {
            state.phase = GamePhase::Paused;
            state.player.shot_timer = SHOT_COOLDOWN_INITIAL;
        }
        _ => {}
    }

    if state.phase != GamePhase::Playing {
        return Ok(());
    }

    state.stats.time_survived += dt;

    // Scheduled spawns; a timer at exactly zero fires and resets
    state.enemy_spawn_timer -= dt;
    if state.enemy_spawn_timer <= 0.0 {
        state.spawn_enemy(area)?;
        state.enemy_spawn_timer = ENEMY_SPAWN_INTERVAL;
    }
    state.pickup_spawn_timer -= dt;
    if state.pickup_spawn_timer <= 0.0 {
        state.spawn_pickup(area)?;
        state.pickup_spawn_timer = state.rng.random_range(PICKUP_SPAWN_MIN..PICKUP_SPAWN_MAX);
    }

    update_player(state, input, area, dt);
    update_shots(state, area, dt)?;
    update_enemies(state, area, dt)?;
    update_pickups(state, dt);

    if state.player.score <= 0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
        log::info!(
            "game over: {} pickups collected, {} enemies shot, {:.0}s survived",
            state.stats.pickups_collected,
            state.stats.enemies_shot,
            state.stats.time_survived
        );
    }
    Ok(())
}

/// Move the player, clamp them to the play area and handle firing.
fn update_player(state: &mut GameState, input: &TickInput, area: &PlayArea, dt: f64) {
    let player = &mut state.player;
    player.shot_timer -= dt;
    player.movement = Vector2::new(
        input.movement.x.clamp(-1.0, 1.0),
        input.movement.y.clamp(-1.0, 1.0),
    );
    player.shape.center += player.movement * player.speed * dt;

    let r = player.shape.radius;
    let c = &mut player.shape.center;
    if c.x - r < 0.0 {
        c.x = r;
    } else if c.x + r > area.width {
        c.x = area.width - r;
    }
    let top = area.top_margin();
    if c.y - r < top {
        c.y = top + r;
    } else if c.y + r > area.height {
        c.y = area.height - r;
    }

    if input.fire && state.player.shot_timer <= 0.0 {
        let id = state.next_entity_id();
        let player = &mut state.player;
        let diff = input.cursor - player.shape.center;
        let angle = (-diff.y).atan2(diff.x);
        // The shot appears just outside the player circle along the aim line
        let spawn = player.shape.center
            + Vector2::from_polar(player.shape.radius + 1.0, angle.to_degrees(), true);
        player.shots.push(Shot::new(id, spawn, angle));
        player.shot_timer = SHOT_COOLDOWN;
        state.events.push(GameEvent::ShotFired { shot_id: id });
    }
}

/// Advance projectiles, resolve their hits and handle boundary exits.
fn update_shots(state: &mut GameState, area: &PlayArea, dt: f64) -> MathResult<()> {
    for shot in &mut state.player.shots {
        shot.advance(dt);
    }

    // Each shot stops at its first hit, and an enemy already claimed by an
    // earlier shot this frame cannot be hit again
    let mut kills: Vec<(u32, u32)> = Vec::new();
    {
        let (shots, enemies) = (&state.player.shots, &mut state.enemies);
        for shot in shots {
            for enemy in enemies.iter_mut() {
                if kills.iter().any(|(_, eid)| *eid == enemy.id) {
                    continue;
                }
                let hit = match &mut enemy.shape {
                    Shape::Circle(circle) => circle_circle(
                        shot.shape.center,
                        shot.shape.radius,
                        circle.center,
                        circle.radius,
                    ),
                    Shape::Polygon(polygon) => circle_hits_polygon(&shot.shape, polygon),
                };
                if hit {
                    kills.push((shot.id, enemy.id));
                    break;
                }
            }
        }
    }
    if !kills.is_empty() {
        state.player.shots.retain(|s| !kills.iter().any(|(sid, _)| *sid == s.id));
        state.enemies.retain(|e| !kills.iter().any(|(_, eid)| *eid == e.id));
        for (shot_id, enemy_id) in kills {
            state.events.push(GameEvent::EnemyShot { enemy_id, shot_id });
            state.player.score += 1;
            state.stats.enemies_shot += 1;
            // The population is kept up: every kill spawns a fresh enemy
            state.spawn_enemy(area)?;
        }
    }

    // A shot that leaves the play area is lost, costs a point, and an enemy
    // appears just inside the exit point
    let mut exits: Vec<(u32, Vector2, f64)> = Vec::new();
    for shot in &state.player.shots {
        let c = shot.shape.center;
        let r = shot.shape.radius;
        let in_bounds = r < c.x
            && c.x < area.width - r
            && area.top_margin() + r < c.y
            && c.y < area.height - r;
        if !in_bounds {
            exits.push((shot.id, c, r));
        }
    }
    for (shot_id, exit, shot_radius) in exits {
        state.player.shots.retain(|s| s.id != shot_id);
        state.player.score -= 1;
        spawn_enemy_at_exit(state, area, exit, shot_radius)?;
    }
    Ok(())
}

/// Spawn a replacement enemy where a projectile left the screen, nudged
/// back inside away from the crossed boundary.
fn spawn_enemy_at_exit(
    state: &mut GameState,
    area: &PlayArea,
    exit: Vector2,
    shot_radius: f64,
) -> MathResult<()> {
    let id = state.next_entity_id();
    let mut enemy = Enemy::spawn(id, exit, &mut state.rng)?;
    let r = enemy.radius();
    let mut nudge = Vector2::ZERO;
    if exit.x < shot_radius {
        nudge.x += r;
    } else if exit.x > area.width - shot_radius {
        nudge.x -= r;
    }
    if exit.y < area.ui_height + shot_radius {
        nudge.y += r;
    } else {
        nudge.y -= r;
    }
    enemy.shape.translate(nudge)?;
    state.add_enemy(enemy);
    Ok(())
}

/// Drive enemy AI timers, movement, wall bounces and player collisions.
fn update_enemies(state: &mut GameState, area: &PlayArea, dt: f64) -> MathResult<()> {
    let player_shape = state.player.shape;
    let mut hits: Vec<u32> = Vec::new();

    for enemy in &mut state.enemies {
        enemy.accel_timer -= dt;
        if enemy.accel_timer <= 0.0 {
            enemy.speed += ENEMY_ACCEL;
            enemy.accel_timer = ENEMY_ACCEL_INTERVAL;
        }
        enemy.seek_timer -= dt;
        if enemy.seek_timer <= 0.0 {
            enemy.seek(player_shape.center);
            enemy.seek_timer = ENEMY_SEEK_INTERVAL;
        }
        enemy.shape.translate(enemy.movement * dt)?;

        // Bounce: clamp back inside and swap the velocity for its
        // perpendicular, once per crossed boundary
        let r = enemy.radius();
        let c = enemy.center();
        let top = area.top_margin();
        let mut correction = Vector2::ZERO;
        let mut x_bounce = false;
        let mut y_bounce = false;
        if c.x - r < 0.0 {
            correction.x = r - c.x;
            x_bounce = true;
        } else if c.x + r > area.width {
            correction.x = area.width - r - c.x;
            x_bounce = true;
        }
        if c.y - r < top {
            correction.y = top + r - c.y;
            y_bounce = true;
        } else if c.y + r > area.height {
            correction.y = area.height - r - c.y;
            y_bounce = true;
        }
        if x_bounce || y_bounce {
            enemy.shape.translate(correction)?;
        }
        if x_bounce {
            enemy.movement = enemy.movement.perpendicular();
        }
        if y_bounce {
            enemy.movement = enemy.movement.perpendicular();
        }

        let hit = match &mut enemy.shape {
            Shape::Circle(circle) => circle_circle(
                circle.center,
                circle.radius,
                player_shape.center,
                player_shape.radius,
            ),
            Shape::Polygon(polygon) => circle_hits_polygon(&player_shape, polygon),
        };
        if hit {
            hits.push(enemy.id);
        }
    }

    for enemy_id in hits {
        state.player.score -= 1;
        state.events.push(GameEvent::PlayerHit { enemy_id });
        // The enemy that landed the hit is re-scrambled away from the player
        let Some(idx) = state.enemies.iter().position(|e| e.id == enemy_id) else {
            continue;
        };
        let old_radius = state.enemies[idx].radius();
        let pos = state.choose_clear_position(old_radius, ENEMY_SPAWN_CLEARANCE, area);
        let enemy = &mut state.enemies[idx];
        enemy.scramble(pos, &mut state.rng)?;
    }
    Ok(())
}

/// Decay pickups and run the collection / spoil / banking state machine.
fn update_pickups(state: &mut GameState, dt: f64) {
    let player_shape = state.player.shape;
    let mut removed: Vec<u32> = Vec::new();
    let mut spoiled = false;

    for i in 0..state.pickups.len() {
        let expired = state.pickups[i].decay(dt);
        let id = state.pickups[i].id;
        if expired {
            // A collected pickup that rots away takes its stashed score
            // back with it
            if state.pickups[i].collected {
                if let Some(score) = state.pickups[i].score_at_collection {
                    state.stash -= score;
                }
            }
            state.events.push(GameEvent::PickupExpired { pickup_id: id });
            removed.push(id);
            continue;
        }
        if state.pickups[i].collected {
            continue;
        }
        if !circle_hits_polygon(&player_shape, &mut state.pickups[i].shape) {
            continue;
        }
        let pickup = &mut state.pickups[i];
        pickup.collected = true;
        if pickup.score == 0.0 {
            // Touching a spoiled pickup dumps the whole stash
            state.events.push(GameEvent::PickupSpoiled { pickup_id: id });
            spoiled = true;
        } else {
            pickup.score_at_collection = Some(pickup.score);
            state.stash += pickup.score;
            state.stats.pickups_collected += 1;
            state
                .events
                .push(GameEvent::PickupCollected { pickup_id: id, score: pickup.score });
        }
    }

    if spoiled {
        clear_collected(state, &mut removed);
    }

    if state.stash >= 1.0 {
        state.player.score += 1;
        state.events.push(GameEvent::PointsBanked);
        log::info!("point banked (score {})", state.player.score);
        clear_collected(state, &mut removed);
    }

    if !removed.is_empty() {
        state.pickups.retain(|p| !removed.contains(&p.id));
    }
}

/// Drop every collected pickup and reset the stash.
fn clear_collected(state: &mut GameState, removed: &mut Vec<u32>) {
    for pickup in &state.pickups {
        if pickup.collected {
            removed.push(pickup.id);
        }
    }
    state.stash = 0.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector2;
    use crate::sim::shape::Circle;
    use crate::sim::state::Pickup;

    const DT: f64 = 1.0 / 60.0;

    fn area() -> PlayArea {
        PlayArea { width: 800.0, height: 700.0, ui_height: 100.0 }
    }

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed, &area()).unwrap();
        state.phase = GamePhase::Playing;
        // Park timers so scheduled spawns stay out of the way
        state.enemy_spawn_timer = 1000.0;
        state.pickup_spawn_timer = 1000.0;
        state
    }

    fn still_circle_enemy(id: u32, center: Vector2, radius: f64) -> Enemy {
        Enemy {
            id,
            shape: Shape::Circle(Circle::new(center, radius)),
            movement: Vector2::ZERO,
            speed: 70.0,
            accel_timer: 1000.0,
            seek_timer: 1000.0,
            color: (255, 255, 255),
        }
    }

    #[test]
    fn test_title_waits_for_start() {
        let area = area();
        let mut state = GameState::new(1, &area).unwrap();
        tick(&mut state, &TickInput::default(), &area, DT).unwrap();
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.stats.time_survived, 0.0);

        let start = TickInput { start: true, ..Default::default() };
        tick(&mut state, &start, &area, DT).unwrap();
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_pause_freezes_simulation() {
        let area = area();
        let mut state = playing_state(2);
        let pause = TickInput { pause: true, ..Default::default() };
        tick(&mut state, &pause, &area, DT).unwrap();
        assert_eq!(state.phase, GamePhase::Paused);

        let survived = state.stats.time_survived;
        let positions: Vec<Vector2> = state.enemies.iter().map(|e| e.center()).collect();
        tick(&mut state, &TickInput::default(), &area, DT).unwrap();
        assert_eq!(state.stats.time_survived, survived);
        let after: Vec<Vector2> = state.enemies.iter().map(|e| e.center()).collect();
        assert_eq!(positions, after);

        let resume = TickInput { start: true, ..Default::default() };
        tick(&mut state, &resume, &area, DT).unwrap();
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_player_movement_and_clamping() {
        let area = area();
        let mut state = playing_state(3);
        state.enemies.clear();

        let input = TickInput { movement: Vector2::new(1.0, 0.0), ..Default::default() };
        let before = state.player.shape.center;
        tick(&mut state, &input, &area, DT).unwrap();
        let moved = state.player.shape.center - before;
        assert!((moved.x - state.player.speed * DT).abs() < 1e-9);
        assert_eq!(moved.y, 0.0);

        // Driving into the top UI band stops at the margin
        state.player.shape.center = Vector2::new(400.0, 61.0);
        let up = TickInput { movement: Vector2::new(0.0, -1.0), ..Default::default() };
        tick(&mut state, &up, &area, DT).unwrap();
        assert_eq!(
            state.player.shape.center.y,
            area.top_margin() + state.player.shape.radius
        );
    }

    #[test]
    fn test_shot_hits_enemy() {
        // Player at (400, 350) fires toward (500, 350); after 0.1s at speed
        // 200 the shot sits around x=420, where an enemy circle is waiting
        let area = area();
        let mut state = playing_state(5);
        state.enemies.clear();
        let id = state.next_entity_id();
        state.enemies.push(still_circle_enemy(id, Vector2::new(420.0, 350.0), 15.0));

        let input = TickInput {
            fire: true,
            cursor: Vector2::new(500.0, 350.0),
            ..Default::default()
        };
        tick(&mut state, &input, &area, 0.1).unwrap();

        assert_eq!(state.player.score, 6);
        assert_eq!(state.stats.enemies_shot, 1);
        assert!(state.player.shots.is_empty());
        assert!(state.enemies.iter().all(|e| e.id != id));
        // A replacement enemy was spawned for the one destroyed
        assert_eq!(state.enemies.len(), 1);
        assert!(state
            .events()
            .iter()
            .any(|e| matches!(e, GameEvent::EnemyShot { enemy_id, .. } if *enemy_id == id)));
    }

    #[test]
    fn test_shot_misses_distant_enemy() {
        let area = area();
        let mut state = playing_state(6);
        state.enemies.clear();
        state.player.shot_timer = 0.0;
        let id = state.next_entity_id();
        state.enemies.push(still_circle_enemy(id, Vector2::new(400.0, 100.0), 15.0));

        let input = TickInput {
            fire: true,
            cursor: Vector2::new(500.0, 350.0),
            ..Default::default()
        };
        tick(&mut state, &input, &area, 0.05).unwrap();
        assert_eq!(state.player.score, 5);
        assert_eq!(state.player.shots.len(), 1);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_shot_exit_spawns_enemy_and_costs_a_point() {
        let area = area();
        let mut state = playing_state(7);
        state.enemies.clear();

        // Fire toward the right edge from mid-field and let the shot fly out
        let input = TickInput {
            fire: true,
            cursor: Vector2::new(800.0, 350.0),
            ..Default::default()
        };
        tick(&mut state, &input, &area, 0.1).unwrap();
        assert_eq!(state.player.shots.len(), 1);
        let mut frames = 0;
        while !state.player.shots.is_empty() && frames < 40 {
            tick(&mut state, &TickInput::default(), &area, 0.1).unwrap();
            frames += 1;
        }

        assert_eq!(state.player.score, 4);
        assert!(state.player.shots.is_empty());
        assert_eq!(state.enemies.len(), 1);
        // The replacement spawned at the right edge, well away from the
        // player in the middle (a square's center can sit a hair past it)
        let spawned = &state.enemies[0];
        assert!(spawned.center().x < area.width + spawned.radius());
        assert!(spawned.center().x > area.width - 2.0 * spawned.radius() - 30.0);
    }

    #[test]
    fn test_enemy_bounce_swaps_velocity_for_perpendicular() {
        let area = area();
        let mut state = playing_state(8);
        state.enemies.clear();
        let mut enemy = still_circle_enemy(1, Vector2::new(16.0, 400.0), 15.0);
        enemy.movement = Vector2::new(-70.0, 0.0);
        state.enemies.push(enemy);

        tick(&mut state, &TickInput::default(), &area, 0.1).unwrap();

        let enemy = &state.enemies[0];
        // Clamped back inside and turned: horizontal motion became vertical
        assert_eq!(enemy.center().x, 15.0);
        assert_eq!(enemy.movement, Vector2::new(0.0, -70.0));
    }

    #[test]
    fn test_polygon_enemy_geometry_stays_in_sync_after_bounce() {
        let area = area();
        let mut state = playing_state(9);
        state.enemies.clear();
        let id = state.next_entity_id();
        let polygon = crate::sim::shape::Polygon::regular(Vector2::new(20.0, 400.0), 6, 18.0).unwrap();
        state.enemies.push(Enemy {
            id,
            shape: Shape::Polygon(polygon),
            movement: Vector2::new(-70.0, 0.0),
            speed: 70.0,
            accel_timer: 1000.0,
            seek_timer: 1000.0,
            color: (200, 200, 200),
        });

        tick(&mut state, &TickInput::default(), &area, 0.1).unwrap();

        let enemy = &state.enemies[0];
        assert_eq!(enemy.center().x, 18.0);
        // Vertices still sit exactly on the circumradius around the center
        if let Shape::Polygon(p) = &enemy.shape {
            for v in p.vertices() {
                assert!(((v - p.center()).magnitude() - 18.0).abs() < 1e-9);
            }
        } else {
            panic!("enemy should still be a polygon");
        }
    }

    #[test]
    fn test_player_hit_costs_point_and_scrambles_enemy() {
        let area = area();
        let mut state = playing_state(10);
        state.enemies.clear();
        let id = state.next_entity_id();
        state.enemies.push(still_circle_enemy(id, state.player.shape.center, 15.0));

        tick(&mut state, &TickInput::default(), &area, DT).unwrap();

        assert_eq!(state.player.score, 4);
        assert!(state
            .events()
            .iter()
            .any(|e| matches!(e, GameEvent::PlayerHit { enemy_id } if *enemy_id == id)));
        // The enemy was thrown clear of the player
        let enemy = &state.enemies[0];
        let gap = (enemy.center() - state.player.shape.center).magnitude();
        assert!(gap > state.player.shape.radius + ENEMY_SPAWN_CLEARANCE - enemy.radius());
    }

    #[test]
    fn test_collecting_pickups_banks_a_point() {
        let area = area();
        let mut state = playing_state(11);
        state.enemies.clear();
        let center = state.player.shape.center;
        for _ in 0..2 {
            let id = state.next_entity_id();
            state.pickups.push(Pickup::new(id, center).unwrap());
        }

        tick(&mut state, &TickInput::default(), &area, DT).unwrap();

        // Two halves make a whole: banked immediately
        assert_eq!(state.player.score, 6);
        assert_eq!(state.stash, 0.0);
        assert!(state.pickups.is_empty());
        assert_eq!(state.stats.pickups_collected, 2);
        assert!(state.events().iter().any(|e| matches!(e, GameEvent::PointsBanked)));
    }

    #[test]
    fn test_partial_stash_is_kept() {
        let area = area();
        let mut state = playing_state(12);
        state.enemies.clear();
        let id = state.next_entity_id();
        state.pickups.push(Pickup::new(id, state.player.shape.center).unwrap());

        tick(&mut state, &TickInput::default(), &area, DT).unwrap();

        assert_eq!(state.stash, 0.5);
        assert_eq!(state.player.score, 5);
        assert_eq!(state.pickups.len(), 1);
        assert!(state.pickups[0].collected);
    }

    #[test]
    fn test_spoiled_pickup_dumps_the_stash() {
        let area = area();
        let mut state = playing_state(13);
        state.enemies.clear();
        let center = state.player.shape.center;

        let good = state.next_entity_id();
        state.pickups.push(Pickup::new(good, center).unwrap());
        let bad = state.next_entity_id();
        let mut spoiled = Pickup::new(bad, center).unwrap();
        spoiled.score = 0.0;
        state.pickups.push(spoiled);

        tick(&mut state, &TickInput::default(), &area, DT).unwrap();

        assert_eq!(state.stash, 0.0);
        assert_eq!(state.player.score, 5);
        assert!(state.pickups.is_empty());
        assert!(state
            .events()
            .iter()
            .any(|e| matches!(e, GameEvent::PickupSpoiled { pickup_id } if *pickup_id == bad)));
    }

    #[test]
    fn test_expired_collected_pickup_refunds_its_stash() {
        let area = area();
        let mut state = playing_state(14);
        state.enemies.clear();
        let id = state.next_entity_id();
        state.pickups.push(Pickup::new(id, state.player.shape.center).unwrap());

        tick(&mut state, &TickInput::default(), &area, DT).unwrap();
        assert_eq!(state.stash, 0.5);

        // Park the player away from the pickup, then let it rot out
        state.player.shape.center = Vector2::new(700.0, 650.0);
        for _ in 0..13 {
            tick(&mut state, &TickInput::default(), &area, 1.0).unwrap();
        }
        assert!(state.pickups.is_empty());
        assert_eq!(state.stash, 0.0);
    }

    #[test]
    fn test_game_over_and_restart() {
        let area = area();
        let mut state = playing_state(15);
        state.enemies.clear();
        state.player.score = 1;
        let id = state.next_entity_id();
        state.enemies.push(still_circle_enemy(id, state.player.shape.center, 15.0));

        tick(&mut state, &TickInput::default(), &area, DT).unwrap();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events().iter().any(|e| matches!(e, GameEvent::GameOver)));

        // Further ticks without a start input change nothing
        tick(&mut state, &TickInput::default(), &area, DT).unwrap();
        assert_eq!(state.phase, GamePhase::GameOver);

        let retry = TickInput { start: true, ..Default::default() };
        tick(&mut state, &retry, &area, DT).unwrap();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.score, PLAYER_START_SCORE);
        assert_eq!(state.stats.enemies_shot, 0);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_scheduled_spawns_fire_and_reset() {
        let area = area();
        let mut state = playing_state(16);
        state.enemies.clear();
        state.enemy_spawn_timer = 0.05;
        state.pickup_spawn_timer = 0.05;

        tick(&mut state, &TickInput::default(), &area, 0.1).unwrap();

        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.pickups.len(), 1);
        assert_eq!(state.enemy_spawn_timer, ENEMY_SPAWN_INTERVAL);
        assert!(state.pickup_spawn_timer >= PICKUP_SPAWN_MIN);
        assert!(state.pickup_spawn_timer < PICKUP_SPAWN_MAX);
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed and input script stay identical,
        // even with non-uniform deltas
        let area = area();
        let mut a = GameState::new(424242, &area).unwrap();
        let mut b = GameState::new(424242, &area).unwrap();

        let script = |frame: usize| TickInput {
            start: frame == 0,
            movement: Vector2::new(if frame % 3 == 0 { 1.0 } else { -0.5 }, 0.7),
            fire: frame % 7 == 0,
            cursor: Vector2::new(600.0, 300.0),
            ..Default::default()
        };
        for frame in 0..300 {
            let dt = if frame % 2 == 0 { 1.0 / 60.0 } else { 1.0 / 45.0 };
            let input = script(frame);
            tick(&mut a, &input, &area, dt).unwrap();
            tick(&mut b, &input, &area, dt).unwrap();
        }

        assert_eq!(a.player.shape.center, b.player.shape.center);
        assert_eq!(a.player.score, b.player.score);
        assert_eq!(a.enemies.len(), b.enemies.len());
        for (x, y) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(x.center(), y.center());
        }
        assert_eq!(a.stash, b.stash);
    }
}

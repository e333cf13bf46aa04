//! Shape Scramble entry point
//!
//! Headless demo driver: runs a scripted pilot against the simulation core
//! and prints the run summary. A graphical shell supplies its own loop,
//! input sampling and rendering; this binary exercises the core end to end
//! without any of that.

use shape_scramble::math::{MathError, Vector2};
use shape_scramble::sim::{GameEvent, GamePhase, GameState, PlayArea, TickInput, tick};

const FRAME_DT: f64 = 1.0 / 60.0;
const RUN_SECONDS: f64 = 120.0;

fn main() -> Result<(), MathError> {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0x5EED);
    let area = PlayArea { width: 800.0, height: 700.0, ui_height: 100.0 };
    let mut state = GameState::new(seed, &area)?;
    log::info!("demo run starting (seed {})", seed);

    let frames = (RUN_SECONDS / FRAME_DT) as usize;
    let mut shots_fired = 0u32;
    let mut points_banked = 0u32;
    for frame in 0..frames {
        let input = scripted_input(frame, &state);
        tick(&mut state, &input, &area, FRAME_DT)?;
        for event in state.events() {
            match event {
                GameEvent::ShotFired { .. } => shots_fired += 1,
                GameEvent::PointsBanked => points_banked += 1,
                _ => {}
            }
        }
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    let stats = state.stats;
    println!("seed:              {seed}");
    println!("final score:       {}", state.player.score);
    println!("shots fired:       {shots_fired}");
    println!("enemies shot:      {}", stats.enemies_shot);
    println!("pickups collected: {}", stats.pickups_collected);
    println!("points banked:     {points_banked}");
    println!("time survived:     {:.1}s", stats.time_survived);
    Ok(())
}

/// A simple canned pilot: start immediately, drift in a slow figure, and
/// take a shot at the nearest enemy a few times a second.
fn scripted_input(frame: usize, state: &GameState) -> TickInput {
    let t = frame as f64 * FRAME_DT;
    let movement = Vector2::new((t * 0.6).cos(), (t * 0.9).sin());
    let player = state.player.shape.center;
    let cursor = state
        .enemies
        .iter()
        .map(|e| e.center())
        .min_by(|a, b| {
            let da = (*a - player).magnitude();
            let db = (*b - player).magnitude();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or(Vector2::new(400.0, 200.0));
    TickInput {
        start: frame == 0,
        movement,
        fire: frame % 10 == 0,
        cursor,
        pause: false,
    }
}

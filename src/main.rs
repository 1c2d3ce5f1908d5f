//! Orbit Hop entry point
//!
//! Headless demo: runs a scripted session at the fixed timestep and
//! prints the result. Rendering/input shells drive the same API.

use orbit_hop::Tuning;
use orbit_hop::consts::{SIM_DT, WORLD_HEIGHT, WORLD_WIDTH};
use orbit_hop::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let tuning = Tuning::default();
    let mut state = GameState::new(seed);
    state.init(WORLD_WIDTH, WORLD_HEIGHT, &tuning);

    log::info!("demo session starting (seed {seed})");

    // Scripted session: jump every 2.5 seconds with a strong pullback,
    // dash half a second into each flight.
    let total_ticks = (30.0 / SIM_DT) as u64;
    for t in 0..total_ticks {
        let input = TickInput {
            jump: t % 300 == 0,
            pullback: 0.6,
            dash: t % 300 == 60,
        };
        tick(&mut state, &input, &tuning, SIM_DT);

        for event in &state.events {
            match event {
                GameEvent::Landed { planet } => log::debug!("landed on planet {planet}"),
                GameEvent::RingCollected { value, .. } => log::debug!("ring +{value}"),
                GameEvent::LevelCleared { bonus } => log::info!("level clear +{bonus}"),
                GameEvent::GameOver => log::info!("game over at tick {t}"),
                GameEvent::Dashed => {}
            }
        }

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    println!(
        "seed {} -> score {} (round {}, combo {}, {} ticks)",
        seed, state.score, state.round, state.combo.count, state.time_ticks
    );
}

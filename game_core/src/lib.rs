pub mod components;
pub mod config;
pub mod resources;
pub mod road;
pub mod systems;

pub use components::*;
pub use config::*;
pub use resources::*;
pub use road::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one tick of the driving simulation.
///
/// Only meaningful while the game is in its playing state; the caller is
/// responsible for not ticking otherwise. `events` reports what happened
/// this frame; a crash leaves the world untouched for the rest of the tick.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    road: &Road,
    config: &Config,
    settings: &Settings,
    input: &InputState,
    score: &mut Score,
    events: &mut Events,
    scroll: &mut RoadScroll,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT);

    // Events describe the whole frame
    events.clear();

    // Fixed micro-steps for stable integration
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 && !events.crashed {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Steer and throttle the player
        steer_player(world, &step_time, road, config, input);
        throttle_player(world, &step_time, config, settings, input);

        // 2. Advance traffic, coupled to the player's speed
        advance_traffic(world, &step_time, config);

        // 3. Retire cars that scrolled past the bottom edge
        retire_passed(world, road, config, score, events);

        // 4. Crash check; a crash ends this frame's simulation
        check_collisions(world, events);
    }

    // The road scrolls once per tick, crash or not
    advance_scroll(world, road, config, scroll);

    // Update time
    time.now += clamped_dt;
}

/// Helper to create the player car at its start position
pub fn create_player_car(world: &mut World, road: &Road, config: &Config) -> hecs::Entity {
    let size = Vec2::new(config.player_width, config.player_height);
    let pos = road.player_spawn(size, config.player_bottom_margin);
    world.spawn((PlayerCar::new(pos, size),))
}

/// Helper to create a traffic car at an explicit position
pub fn create_traffic_car(
    world: &mut World,
    pos: Vec2,
    base_speed: f32,
    variant: CarVariant,
    config: &Config,
) -> hecs::Entity {
    let size = Vec2::new(config.traffic_width, config.traffic_height);
    world.spawn((TrafficCar::new(pos, size, base_speed, variant),))
}

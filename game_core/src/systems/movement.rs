use hecs::World;

use crate::components::PlayerCar;
use crate::config::{Config, Settings};
use crate::resources::{InputState, Time};
use crate::road::Road;

/// Slide the player sideways while the steering keys are held
pub fn steer_player(
    world: &mut World,
    time: &Time,
    road: &Road,
    config: &Config,
    input: &InputState,
) {
    for (_entity, player) in world.query_mut::<&mut PlayerCar>() {
        if input.left {
            player.pos.x -= config.lateral_speed * time.dt;
        }
        if input.right {
            player.pos.x += config.lateral_speed * time.dt;
        }
        player.pos.x = road.clamp_player_x(player.pos.x, player.size.x);
    }
}

/// Integrate forward speed from throttle input or auto-acceleration.
///
/// Under auto-acceleration the manual throttle keys are ignored and speed
/// ramps at half the manual rate. Speed stays in [0, max] either way.
pub fn throttle_player(
    world: &mut World,
    time: &Time,
    config: &Config,
    settings: &Settings,
    input: &InputState,
) {
    for (_entity, player) in world.query_mut::<&mut PlayerCar>() {
        if settings.auto_acceleration {
            player.speed += config.speed_increment * time.dt * 30.0;
        } else {
            if input.throttle {
                player.speed += config.speed_increment * time.dt * 60.0;
            }
            if input.brake {
                player.speed -= config.speed_increment * time.dt * 60.0;
            }
        }
        player.speed = player.speed.clamp(0.0, config.max_player_speed);
    }
}

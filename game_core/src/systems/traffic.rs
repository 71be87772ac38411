use hecs::World;

use crate::components::{PlayerCar, TrafficCar};
use crate::config::Config;
use crate::resources::Time;

/// Move every traffic car down the screen, coupled to the player's speed
pub fn advance_traffic(world: &mut World, time: &Time, config: &Config) {
    let player_speed = {
        let mut query = world.query::<&PlayerCar>();
        query
            .iter()
            .next()
            .map(|(_e, player)| player.speed)
            .unwrap_or(0.0)
    };

    for (_entity, car) in world.query_mut::<&mut TrafficCar>() {
        let speed = car.effective_speed(player_speed, config.traffic_coupling);
        car.pos.y += speed * time.dt * 60.0;
    }
}

use hecs::World;

use crate::components::{PlayerCar, TrafficCar};
use crate::resources::Events;

/// Check the player's box against every live traffic car
pub fn check_collisions(world: &World, events: &mut Events) {
    let player_box = {
        let mut query = world.query::<&PlayerCar>();
        query.iter().next().map(|(_e, player)| player.aabb())
    };

    let Some(player_box) = player_box else {
        return;
    };

    for (_entity, car) in world.query::<&TrafficCar>().iter() {
        if player_box.intersects(&car.aabb()) {
            events.crashed = true;
            return;
        }
    }
}

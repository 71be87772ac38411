use hecs::World;

use crate::components::TrafficCar;
use crate::config::Config;
use crate::resources::{Events, Score};
use crate::road::Road;

/// Retire traffic that scrolled past the bottom edge and score it
pub fn retire_passed(
    world: &mut World,
    road: &Road,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    let mut to_remove = Vec::new();

    for (entity, car) in world.query::<&TrafficCar>().iter() {
        if car.pos.y > road.height {
            to_remove.push(entity);
        }
    }

    for entity in to_remove {
        let _ = world.despawn(entity);
        score.award(config.points_per_car);
        events.cars_passed += 1;
    }
}

use hecs::World;

use crate::components::PlayerCar;
use crate::config::Config;
use crate::resources::RoadScroll;
use crate::road::Road;

/// Advance the scrolling-road offset, wrapped to the screen height.
///
/// Purely visual state: the offset feeds the background illusion and plays
/// no part in collision or scoring.
pub fn advance_scroll(world: &World, road: &Road, config: &Config, scroll: &mut RoadScroll) {
    let player_speed = {
        let mut query = world.query::<&PlayerCar>();
        query
            .iter()
            .next()
            .map(|(_e, player)| player.speed)
            .unwrap_or(0.0)
    };

    let advance = (config.road_speed_base + player_speed) * config.road_scroll_scale;
    scroll.offset = (scroll.offset + advance) % road.height;
}

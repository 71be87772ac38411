use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::components::{CarVariant, TrafficCar};
use crate::config::{Config, Settings};
use crate::resources::GameRng;
use crate::road::Road;

/// Try to add one traffic car in a random lane.
///
/// Samples lane, then variant, then base speed. The spawn is dropped when
/// another car still sits near the top of the target lane's band, so two
/// cars can never stack into an unavoidable wall.
pub fn spawn_traffic(
    world: &mut World,
    road: &Road,
    config: &Config,
    settings: &Settings,
    rng: &mut GameRng,
) -> bool {
    let lane = rng.0.gen_range(0..road.lanes);
    let variant = CarVariant::from_index(rng.0.gen_range(0..CarVariant::COUNT));
    let (lo, hi) = settings.difficulty.speed_range(config);
    let base_speed = rng.0.gen_range(lo..=hi) * variant.speed_factor();

    let size = Vec2::new(config.traffic_width, config.traffic_height);
    let x = road.spawn_x(lane, size.x);

    let blocked = {
        let mut query = world.query::<&TrafficCar>();
        query.iter().any(|(_e, car)| {
            (car.pos.x - x).abs() < config.spawn_min_gap && car.pos.y < config.spawn_guard_y
        })
    };
    if blocked {
        return false;
    }

    world.spawn((TrafficCar::new(
        Vec2::new(x, config.traffic_spawn_y),
        size,
        base_speed,
        variant,
    ),));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Difficulty;

    fn setup() -> (World, Road, Config, Settings, GameRng) {
        let config = Config::new();
        let road = Road::from_config(&config);
        (
            World::new(),
            road,
            config,
            Settings::new(),
            GameRng::new(12345),
        )
    }

    fn single_car(world: &World) -> TrafficCar {
        let mut query = world.query::<&TrafficCar>();
        let (_entity, car) = query.iter().next().expect("one car spawned");
        *car
    }

    #[test]
    fn test_spawned_car_is_lane_centered() {
        let (mut world, road, config, settings, mut rng) = setup();

        assert!(spawn_traffic(&mut world, &road, &config, &settings, &mut rng));

        let car = single_car(&world);
        let lane_xs: Vec<f32> = (0..road.lanes)
            .map(|lane| road.spawn_x(lane, config.traffic_width))
            .collect();
        assert!(
            lane_xs.contains(&car.pos.x),
            "Spawn x {} must be one of the lane positions {:?}",
            car.pos.x,
            lane_xs
        );
        assert_eq!(car.pos.y, config.traffic_spawn_y);
    }

    #[test]
    fn test_spawned_speed_within_variant_scaled_range() {
        let (mut world, road, config, settings, mut rng) = setup();
        let (lo, hi) = settings.difficulty.speed_range(&config);

        for _ in 0..50 {
            spawn_traffic(&mut world, &road, &config, &settings, &mut rng);
        }

        for (_entity, car) in world.query::<&TrafficCar>().iter() {
            let factor = car.variant.speed_factor();
            assert!(
                car.base_speed >= lo * factor && car.base_speed <= hi * factor,
                "Base speed {} outside {:?} scaled by {}",
                car.base_speed,
                (lo, hi),
                factor
            );
        }
    }

    #[test]
    fn test_hard_traffic_sampled_from_raised_range() {
        let (mut world, road, config, mut settings, mut rng) = setup();
        settings.difficulty = Difficulty::Hard;
        let (lo, _) = Difficulty::Hard.speed_range(&config);

        for _ in 0..50 {
            spawn_traffic(&mut world, &road, &config, &settings, &mut rng);
        }

        for (_entity, car) in world.query::<&TrafficCar>().iter() {
            assert!(car.base_speed >= lo * car.variant.speed_factor());
        }
    }

    #[test]
    fn test_four_lane_road_spawns_on_lane_centers() {
        let mut config = Config::new();
        config.num_lanes = 4;
        let road = Road::from_config(&config);
        let mut world = World::new();
        let settings = Settings::new();
        let mut rng = GameRng::new(99);
        let (lo, hi) = settings.difficulty.speed_range(&config);

        assert!(spawn_traffic(&mut world, &road, &config, &settings, &mut rng));

        let car = single_car(&world);
        let lane_xs: Vec<f32> = (0..4)
            .map(|lane| road.lane_center(lane) - config.traffic_width / 2.0)
            .collect();
        assert!(lane_xs.contains(&car.pos.x));
        let factor = car.variant.speed_factor();
        assert!(car.base_speed >= lo * factor && car.base_speed <= hi * factor);
    }

    #[test]
    fn test_guard_rejects_spawn_into_occupied_band() {
        let (mut world, road, config, settings, mut rng) = setup();

        // Park a car near the top of every lane
        for lane in 0..road.lanes {
            world.spawn((TrafficCar::new(
                Vec2::new(road.spawn_x(lane, config.traffic_width), 50.0),
                Vec2::new(config.traffic_width, config.traffic_height),
                4.0,
                CarVariant::Standard,
            ),));
        }
        let before = world.query::<&TrafficCar>().iter().count();

        assert!(!spawn_traffic(&mut world, &road, &config, &settings, &mut rng));
        assert_eq!(world.query::<&TrafficCar>().iter().count(), before);
    }

    #[test]
    fn test_guard_ignores_cars_past_the_band() {
        let (mut world, road, config, settings, mut rng) = setup();

        // Same lanes occupied, but all cars are well past the guard band
        for lane in 0..road.lanes {
            world.spawn((TrafficCar::new(
                Vec2::new(road.spawn_x(lane, config.traffic_width), 300.0),
                Vec2::new(config.traffic_width, config.traffic_height),
                4.0,
                CarVariant::Standard,
            ),));
        }

        assert!(spawn_traffic(&mut world, &road, &config, &settings, &mut rng));
    }

    #[test]
    fn test_no_two_fresh_spawns_share_a_band() {
        let (mut world, road, config, settings, mut rng) = setup();

        for _ in 0..100 {
            spawn_traffic(&mut world, &road, &config, &settings, &mut rng);
        }

        let cars: Vec<TrafficCar> = world
            .query::<&TrafficCar>()
            .iter()
            .map(|(_e, car)| *car)
            .collect();
        for (i, a) in cars.iter().enumerate() {
            for b in cars.iter().skip(i + 1) {
                let both_fresh = a.pos.y < config.spawn_guard_y && b.pos.y < config.spawn_guard_y;
                assert!(
                    !(both_fresh && (a.pos.x - b.pos.x).abs() < config.spawn_min_gap),
                    "Two cars spawned into the same guard band"
                );
            }
        }
    }
}

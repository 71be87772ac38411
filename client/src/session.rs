//! Local game session: owns the simulation world and drives it

use game_core::systems::spawn_traffic;
use game_core::{
    create_player_car, step, Config, Events, GameRng, InputState, PlayerCar, Road, RoadScroll,
    Score, Settings, SpawnTimer, Time, TrafficCar,
};
use glam::Vec2;
use hecs::World;

/// One traffic car as the renderer sees it
#[derive(Debug, Clone, Copy)]
pub struct TrafficView {
    pub pos: Vec2,
    pub size: Vec2,
    pub variant: u32,
}

/// Read-only view of one frame, for the renderer
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub player_pos: Vec2,
    pub player_size: Vec2,
    pub player_speed: f32,
    pub traffic: Vec<TrafficView>,
    pub road_offset: f32,
    pub score: u32,
}

/// A single run of the game, from start until crash or abandonment.
///
/// The session is only ticked while the shell is on the playing screen, so
/// simulation and spawning stop together at that boundary; the spawn
/// interval is an accumulator here, not an OS timer, and cannot fire late.
pub struct GameSession {
    pub world: World,
    pub time: Time,
    pub road: Road,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub input: InputState,
    pub scroll: RoadScroll,
    pub spawn_timer: SpawnTimer,
    pub rng: GameRng,
}

impl GameSession {
    pub fn new(config: Config, seed: u64) -> Self {
        let road = Road::from_config(&config);
        let mut world = World::new();
        create_player_car(&mut world, &road, &config);
        Self {
            world,
            time: Time::new(0.0, 0.0),
            spawn_timer: SpawnTimer::new(config.spawn_interval),
            road,
            config,
            score: Score::new(),
            events: Events::new(),
            input: InputState::new(),
            scroll: RoadScroll::new(),
            rng: GameRng::new(seed),
        }
    }

    /// Fresh run: score 0, new player car, no traffic, scroll and clock reset
    pub fn reset(&mut self) {
        self.world.clear();
        create_player_car(&mut self.world, &self.road, &self.config);
        self.score = Score::new();
        self.events = Events::new();
        self.input.clear();
        self.scroll = RoadScroll::new();
        self.spawn_timer.reset();
        self.time = Time::new(0.0, 0.0);
    }

    /// Advance one tick; while still alive, also run the spawn interval
    pub fn tick(&mut self, dt: f32, settings: &Settings) -> Events {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.road,
            &self.config,
            settings,
            &self.input,
            &mut self.score,
            &mut self.events,
            &mut self.scroll,
        );

        if !self.events.crashed && self.spawn_timer.tick(dt) {
            spawn_traffic(
                &mut self.world,
                &self.road,
                &self.config,
                settings,
                &mut self.rng,
            );
        }

        self.events
    }

    /// Extract the frame's render data; never hands out the world itself
    pub fn snapshot(&self) -> SessionSnapshot {
        let (player_pos, player_size, player_speed) = {
            let mut query = self.world.query::<&PlayerCar>();
            query
                .iter()
                .next()
                .map(|(_e, player)| (player.pos, player.size, player.speed))
                .unwrap_or((Vec2::ZERO, Vec2::ZERO, 0.0))
        };

        let traffic = self
            .world
            .query::<&TrafficCar>()
            .iter()
            .map(|(_e, car)| TrafficView {
                pos: car.pos,
                size: car.size,
                variant: car.variant.index(),
            })
            .collect();

        SessionSnapshot {
            player_pos,
            player_size,
            player_speed,
            traffic,
            road_offset: self.scroll.offset,
            score: self.score.points,
        }
    }

    pub fn traffic_count(&self) -> usize {
        self.world.query::<&TrafficCar>().iter().count()
    }
}

/// Game tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 600.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    pub const NUM_LANES: u32 = 3;

    // Player car
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 96.0;
    pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;
    pub const MAX_PLAYER_SPEED: f32 = 10.0;
    pub const SPEED_INCREMENT: f32 = 0.5;
    pub const LATERAL_SPEED: f32 = 300.0;

    // Traffic
    pub const TRAFFIC_WIDTH: f32 = 60.0;
    pub const TRAFFIC_HEIGHT: f32 = 98.0;
    pub const TRAFFIC_SPEED_MIN: f32 = 3.0;
    pub const TRAFFIC_SPEED_MAX: f32 = 7.0;
    pub const TRAFFIC_COUPLING: f32 = 1.5;
    pub const TRAFFIC_SPAWN_Y: f32 = -80.0;

    // Spawner
    pub const SPAWN_INTERVAL: f32 = 2.0;
    pub const SPAWN_MIN_GAP: f32 = 50.0;
    pub const SPAWN_GUARD_Y: f32 = 150.0;

    // Road scroll
    pub const ROAD_SPEED_BASE: f32 = 5.0;
    pub const ROAD_SCROLL_SCALE: f32 = 0.06;

    // Scoring
    pub const POINTS_PER_CAR: u32 = 10;

    // Physics
    pub const FIXED_DT: f32 = 0.0166;
    pub const MAX_DT: f32 = 0.1;
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub num_lanes: u32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_bottom_margin: f32,
    pub max_player_speed: f32,
    pub speed_increment: f32,
    pub lateral_speed: f32,
    pub traffic_width: f32,
    pub traffic_height: f32,
    pub traffic_speed_min: f32,
    pub traffic_speed_max: f32,
    pub traffic_coupling: f32,
    pub traffic_spawn_y: f32,
    pub spawn_interval: f32,
    pub spawn_min_gap: f32,
    pub spawn_guard_y: f32,
    pub road_speed_base: f32,
    pub road_scroll_scale: f32,
    pub points_per_car: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            num_lanes: Params::NUM_LANES,
            player_width: Params::PLAYER_WIDTH,
            player_height: Params::PLAYER_HEIGHT,
            player_bottom_margin: Params::PLAYER_BOTTOM_MARGIN,
            max_player_speed: Params::MAX_PLAYER_SPEED,
            speed_increment: Params::SPEED_INCREMENT,
            lateral_speed: Params::LATERAL_SPEED,
            traffic_width: Params::TRAFFIC_WIDTH,
            traffic_height: Params::TRAFFIC_HEIGHT,
            traffic_speed_min: Params::TRAFFIC_SPEED_MIN,
            traffic_speed_max: Params::TRAFFIC_SPEED_MAX,
            traffic_coupling: Params::TRAFFIC_COUPLING,
            traffic_spawn_y: Params::TRAFFIC_SPAWN_Y,
            spawn_interval: Params::SPAWN_INTERVAL,
            spawn_min_gap: Params::SPAWN_MIN_GAP,
            spawn_guard_y: Params::SPAWN_GUARD_Y,
            road_speed_base: Params::ROAD_SPEED_BASE,
            road_scroll_scale: Params::ROAD_SCROLL_SCALE,
            points_per_car: Params::POINTS_PER_CAR,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Traffic difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Map a settings-screen index (0-2) to a level
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Easy,
            1 => Self::Medium,
            _ => Self::Hard,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }

    /// Base-speed sampling range for newly spawned traffic.
    ///
    /// The three ranges overlap; Hard extends past the nominal maximum.
    pub fn speed_range(self, config: &Config) -> (f32, f32) {
        let lo = config.traffic_speed_min;
        let hi = config.traffic_speed_max;
        let mid = lo + (hi - lo) * 0.5;
        match self {
            Self::Easy => (lo, mid),
            Self::Medium => (lo, hi),
            Self::Hard => (mid, hi + 2.0),
        }
    }
}

/// Player-facing settings, mutated directly by the settings screens
#[derive(Debug, Clone)]
pub struct Settings {
    pub music_volume: u8,
    pub sound_volume: u8,
    pub difficulty: Difficulty,
    pub graphics_quality: u8,
    pub auto_acceleration: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_volume: 50,
            sound_volume: 70,
            difficulty: Difficulty::Medium,
            graphics_quality: 2,
            auto_acceleration: true,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_music_volume(&mut self, volume: u8) {
        self.music_volume = volume.min(100);
    }

    pub fn set_sound_volume(&mut self, volume: u8) {
        self.sound_volume = volume.min(100);
    }

    pub fn set_graphics_quality(&mut self, quality: u8) {
        self.graphics_quality = quality.min(2);
    }
}

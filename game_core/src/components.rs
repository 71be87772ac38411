use glam::Vec2;

use crate::road::Aabb;

/// Visual kind of a traffic car; also scales its sampled base speed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarVariant {
    Slow,
    Standard,
    Fast,
}

impl CarVariant {
    pub const COUNT: u32 = 3;

    /// Map a sampled index (0-2) to a variant
    pub fn from_index(index: u32) -> Self {
        match index % Self::COUNT {
            0 => Self::Slow,
            1 => Self::Standard,
            _ => Self::Fast,
        }
    }

    /// Sprite slot for the renderer
    pub fn index(self) -> u32 {
        match self {
            Self::Slow => 0,
            Self::Standard => 1,
            Self::Fast => 2,
        }
    }

    /// Multiplier applied to the sampled base speed
    pub fn speed_factor(self) -> f32 {
        match self {
            Self::Slow => 0.9,
            Self::Standard => 1.0,
            Self::Fast => 1.1,
        }
    }
}

/// The player's car. `pos` is the top-left corner; y stays fixed near the
/// bottom of the screen while x and forward speed respond to input.
#[derive(Debug, Clone, Copy)]
pub struct PlayerCar {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl PlayerCar {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            speed: 0.0,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_top_left(self.pos, self.size)
    }
}

/// An oncoming traffic car, moving down the screen
#[derive(Debug, Clone, Copy)]
pub struct TrafficCar {
    pub pos: Vec2,
    pub size: Vec2,
    pub base_speed: f32,
    pub variant: CarVariant,
}

impl TrafficCar {
    pub fn new(pos: Vec2, size: Vec2, base_speed: f32, variant: CarVariant) -> Self {
        Self {
            pos,
            size,
            base_speed,
            variant,
        }
    }

    /// On-screen downward speed, coupled to the player's forward speed
    pub fn effective_speed(&self, player_speed: f32, coupling: f32) -> f32 {
        self.base_speed + player_speed * coupling
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_top_left(self.pos, self.size)
    }
}

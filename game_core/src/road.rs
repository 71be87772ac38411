use glam::Vec2;

use crate::config::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            max: top_left + size,
        }
    }

    /// Strict overlap check; boxes that merely touch do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The road strip: the screen divided into equal vertical lanes
#[derive(Debug, Clone)]
pub struct Road {
    pub width: f32,
    pub height: f32,
    pub lanes: u32,
}

impl Road {
    pub fn new(width: f32, height: f32, lanes: u32) -> Self {
        Self {
            width,
            height,
            lanes,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.screen_width, config.screen_height, config.num_lanes)
    }

    /// Center x of a lane
    pub fn lane_center(&self, lane: u32) -> f32 {
        (self.width / self.lanes as f32) * (lane as f32 + 0.5)
    }

    /// Left edge of a car of the given width centered in a lane
    pub fn spawn_x(&self, lane: u32, car_width: f32) -> f32 {
        self.lane_center(lane) - car_width / 2.0
    }

    /// Keep a car of the given width fully on screen
    pub fn clamp_player_x(&self, x: f32, car_width: f32) -> f32 {
        x.clamp(0.0, self.width - car_width)
    }

    /// Player start position: centered, near the bottom edge
    pub fn player_spawn(&self, size: Vec2, bottom_margin: f32) -> Vec2 {
        Vec2::new(
            self.width / 2.0 - size.x / 2.0,
            self.height - size.y - bottom_margin,
        )
    }
}

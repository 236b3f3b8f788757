use glam::Vec2;

use crate::components::Side;
use crate::config::Config;
use crate::params::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Static scene geometry the rendering side draws from
#[derive(Debug, Clone)]
pub struct Arena {
    pub bounds: Aabb,
    pub paddle_size: Vec2,
    pub ball_size: Vec2,
    player_paddle_x: f32,
    enemy_paddle_x: f32,
}

impl Arena {
    pub fn new(config: &Config) -> Self {
        Self {
            bounds: Aabb::new(
                Vec2::ZERO,
                Vec2::new(config.arena_width, config.arena_height),
            ),
            paddle_size: Vec2::new(config.paddle_width, config.paddle_height),
            ball_size: Vec2::splat(config.ball_size),
            player_paddle_x: config.paddle_x(Side::Player),
            enemy_paddle_x: config.paddle_x(Side::Enemy),
        }
    }

    pub fn width(&self) -> f32 {
        self.bounds.size().x
    }

    pub fn height(&self) -> f32 {
        self.bounds.size().y
    }

    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }

    /// Where both paddles start a game
    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        let x = match side {
            Side::Player => self.player_paddle_x,
            Side::Enemy => self.enemy_paddle_x,
        };
        Vec2::new(x, self.center().y)
    }

    pub fn paddle_box(&self, side: Side, y: f32) -> Aabb {
        let x = self.paddle_spawn(side).x;
        Aabb::from_center_size(Vec2::new(x, y), self.paddle_size)
    }

    pub fn ball_box(&self, pos: Vec2) -> Aabb {
        Aabb::from_center_size(pos, self.ball_size)
    }

    pub fn score_label_position(&self, side: Side) -> Vec2 {
        let x = match side {
            Side::Player => self.center().x - Params::SCORE_LABEL_OFFSET_X,
            Side::Enemy => self.center().x + Params::SCORE_LABEL_OFFSET_X,
        };
        Vec2::new(x, self.bounds.max.y - Params::SCORE_LABEL_INSET_Y)
    }

    pub fn banner_anchor(&self) -> Vec2 {
        self.center()
    }

    /// Dashed center line, bottom to top
    pub fn separator_segments(&self) -> Vec<Aabb> {
        let stride = Params::SEPARATOR_SEGMENT_HEIGHT + Params::SEPARATOR_GAP;
        let count = (self.height() / stride) as usize;
        let size = Vec2::new(
            Params::SEPARATOR_SEGMENT_WIDTH,
            Params::SEPARATOR_SEGMENT_HEIGHT,
        );

        (0..count)
            .map(|i| {
                let y = i as f32 * stride + Params::SEPARATOR_SEGMENT_HEIGHT / 2.0;
                Aabb::from_center_size(Vec2::new(self.center().x, y), size)
            })
            .collect()
    }
}

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which paddle a component or event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player, // human, left
    Enemy,  // AI, right
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Y position (clamped to arena)
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Timed move of a paddle toward a target Y
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleMove {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub elapsed: f32,
}

impl PaddleMove {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` and return the interpolated Y
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = self.elapsed / self.duration;
        self.from + (self.to - self.from) * t
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// In-flight paddle motion. A new move replaces the current one.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleMotion {
    pub current: Option<PaddleMove>,
}

impl PaddleMotion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, from: f32, to: f32, duration: f32) {
        self.current = Some(PaddleMove::new(from, to, duration));
    }

    pub fn cancel(&mut self) {
        self.current = None;
    }
}

/// Operations the rules need from whatever body simulates the ball
pub trait BallBody {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn set_position(&mut self, pos: Vec2);
    fn set_velocity(&mut self, vel: Vec2);
    fn apply_impulse(&mut self, impulse: Vec2);
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub mass: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, mass: f32) -> Self {
        Self { pos, vel, mass }
    }
}

impl BallBody for Ball {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    fn set_velocity(&mut self, vel: Vec2) {
        self.vel = vel;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.vel += impulse / self.mass;
    }
}

/// Physics category bits
#[derive(Debug, Clone, Copy)]
pub struct Category;

impl Category {
    pub const NONE: u32 = 0;
    pub const BALL: u32 = 0b1;
    pub const PADDLE: u32 = 0b10;
    pub const EDGE: u32 = 0b100;
}

/// Category, contact and collision masks for one kind of body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyMasks {
    pub category: u32,
    pub contact_test: u32,
    pub collision: u32,
}

impl BodyMasks {
    pub const BALL: Self = Self {
        category: Category::BALL,
        contact_test: Category::PADDLE | Category::EDGE,
        collision: Category::PADDLE | Category::EDGE,
    };

    pub const PADDLE: Self = Self {
        category: Category::PADDLE,
        contact_test: Category::BALL,
        collision: Category::BALL,
    };

    pub const EDGE: Self = Self {
        category: Category::EDGE,
        contact_test: Category::NONE,
        collision: Category::BALL,
    };

    pub fn collides_with(&self, other: &BodyMasks) -> bool {
        self.collision & other.category != 0
    }

    pub fn reports_contact_with(&self, other: &BodyMasks) -> bool {
        self.contact_test & other.category != 0 || other.contact_test & self.category != 0
    }
}

/// Surface properties handed to the physics engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMaterial {
    pub dynamic: bool,
    pub restitution: f32,
    pub friction: f32,
    pub linear_damping: f32,
    pub allows_rotation: bool,
    pub precise_collision: bool,
}

impl BodyMaterial {
    pub const BALL: Self = Self {
        dynamic: true,
        restitution: 1.0,
        friction: 0.0,
        linear_damping: 0.0,
        allows_rotation: false,
        precise_collision: true,
    };

    pub const PADDLE: Self = Self {
        dynamic: false,
        restitution: 1.0,
        friction: 0.0,
        linear_damping: 0.0,
        allows_rotation: false,
        precise_collision: false,
    };
}

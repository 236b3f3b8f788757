/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (scene points)
    pub const ARENA_WIDTH: f32 = 1334.0;
    pub const ARENA_HEIGHT: f32 = 750.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PLAYER_PADDLE_X: f32 = 75.0;
    pub const ENEMY_PADDLE_INSET: f32 = 50.0; // distance from the right edge

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_MASS: f32 = 400.0 / 22_500.0; // 20x20 body at 150 points per metre
    pub const SERVE_IMPULSE_X: f32 = 10.0;
    pub const SERVE_IMPULSE_Y: f32 = 10.0;

    // Rally
    pub const GOAL_LINE_MARGIN: f32 = 20.0;

    // Difficulty ladder (consecutive player points)
    pub const MEDIUM_STREAK: u64 = 1;
    pub const HIGH_STREAK: u64 = 5;

    // Enemy paddle move durations in seconds, lower tracks faster
    pub const LOW_MOVE_DURATION: f32 = 0.12;
    pub const MEDIUM_MOVE_DURATION: f32 = 0.085;
    pub const HIGH_MOVE_DURATION: f32 = 0.08;

    // Low tier wobble
    pub const LOW_TRACKING_DEADZONE: f32 = 55.0;
    pub const LOW_TRACKING_JITTER: f32 = 40.0;

    // Difficulty banner
    pub const BANNER_FADE_IN: f32 = 0.5;
    pub const BANNER_HOLD: f32 = 2.0;
    pub const BANNER_FADE_OUT: f32 = 0.5;

    // Layout
    pub const SCORE_LABEL_OFFSET_X: f32 = 100.0;
    pub const SCORE_LABEL_INSET_Y: f32 = 75.0;
    pub const SEPARATOR_SEGMENT_WIDTH: f32 = 5.0;
    pub const SEPARATOR_SEGMENT_HEIGHT: f32 = 20.0;
    pub const SEPARATOR_GAP: f32 = 10.0;

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1;
}

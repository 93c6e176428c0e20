//! Brick Crusher - a descending-rows brick breaker
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (state machine, spawning, descent, collisions)
//! - `effects`: One-way cosmetic hooks consumed by a presentation layer
//! - `tuning`: Data-driven game balance
//! - `scene`: Host-facing entry points (frame tick, touches, contacts, resize)

pub mod effects;
pub mod scene;
pub mod sim;
pub mod tuning;

pub use effects::{Effects, GameEvent, NoEffects};
pub use scene::Scene;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Bricks per row
    pub const COLUMNS: u32 = 8;
    /// Brick height (width is derived from playfield width / columns)
    pub const BRICK_HEIGHT: f32 = 40.0;
    /// Brick descent speed (units/s)
    pub const BRICK_SPEED: f32 = 120.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 320.0;
    /// Below this speed the ball is relaunched straight up
    pub const BALL_MIN_SPEED: f32 = 10.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Lowest the paddle ever sits, and its share of playfield height
    pub const PADDLE_MIN_Y: f32 = 60.0;
    pub const PADDLE_Y_FRACTION: f32 = 0.12;
    /// Ball rests this far above the paddle on reset
    pub const BALL_RESET_OFFSET: f32 = 60.0;

    /// Max paddle deflection from vertical (45°)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Score awarded per destroyed brick
    pub const POINTS_PER_BRICK: u64 = 10;

    /// Impact hook strengths
    pub const PADDLE_IMPACT: f32 = 0.5;
    pub const BRICK_IMPACT: f32 = 0.8;

    /// Number of tints a renderer is expected to provide
    pub const TINT_COUNT: u8 = 6;

    /// HUD label margin
    pub const LABEL_MARGIN: f32 = 20.0;
}

/// Clamp a paddle center so the paddle stays fully inside the playfield
#[inline]
pub fn clamp_paddle_x(x: f32, half_width: f32, playfield_width: f32) -> f32 {
    // min/max rather than clamp: a playfield narrower than the paddle must not panic
    x.max(half_width).min(playfield_width - half_width)
}

/// Map a normalized paddle hit offset (-1 = left edge, +1 = right edge) to a
/// deflection angle from vertical
#[inline]
pub fn bounce_angle(offset: f32) -> f32 {
    offset.clamp(-1.0, 1.0) * consts::MAX_BOUNCE_ANGLE
}

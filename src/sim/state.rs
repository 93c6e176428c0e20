//! Game state and core simulation types
//!
//! `GameState` is the entity registry: it exclusively owns the paddle, the
//! ball and the ordered brick list. Everything else borrows it per call.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for a tap
    Splash,
    /// Active gameplay
    Playing,
    /// A brick reached the paddle line
    GameOver,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// The player's paddle. Kinematic: only input moves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Center point
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.size.x / 2.0
    }

    /// Y of the paddle's top edge (the loss line for bricks)
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Move horizontally, staying inside a playfield of the given width
    pub fn move_to(&mut self, x: f32, playfield_width: f32) {
        self.pos.x = crate::clamp_paddle_x(x, self.half_width(), playfield_width);
    }
}

/// Stable brick identity, used by physics bodies to refer back to a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BrickId(pub u32);

/// A brick entity (axis-aligned box, center position)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub id: BrickId,
    pub pos: Vec2,
    pub size: Vec2,
    /// Opaque palette index for the renderer
    pub tint: u8,
}

impl Brick {
    /// Y of the bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    /// Y of the top edge
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }
}

/// Positions derived from the playfield size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub paddle_y: f32,
    pub ball_reset_y: f32,
    /// Score label anchor (top-left, fixed margin)
    pub score_label: Vec2,
    /// Splash / game-over title anchor
    pub title_label: Vec2,
    /// Splash / game-over prompt anchor
    pub prompt_label: Vec2,
}

impl Layout {
    pub fn for_size(size: Vec2) -> Self {
        let paddle_y = PADDLE_MIN_Y.max(size.y * PADDLE_Y_FRACTION);
        Self {
            paddle_y,
            ball_reset_y: paddle_y + BALL_RESET_OFFSET,
            score_label: Vec2::new(LABEL_MARGIN, size.y - LABEL_MARGIN),
            title_label: Vec2::new(size.x / 2.0, size.y * 0.65),
            prompt_label: Vec2::new(size.x / 2.0, size.y * 0.45),
        }
    }

    /// Default paddle center for a playfield
    pub fn paddle_home(&self, size: Vec2) -> Vec2 {
        Vec2::new(size.x / 2.0, self.paddle_y)
    }

    /// Default ball position for a playfield
    pub fn ball_home(&self, size: Vec2) -> Vec2 {
        Vec2::new(size.x / 2.0, self.ball_reset_y)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Playfield size (origin bottom-left, y up)
    pub playfield: Vec2,
    pub layout: Layout,
    pub phase: GamePhase,
    pub score: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Live bricks, oldest row first
    pub bricks: Vec<Brick>,
    /// Timestamp of the previous Playing frame (None = next frame has zero delta)
    pub last_update_time: Option<f64>,
    /// Timestamp of the last row spawn (None = spawn on the next Playing frame)
    pub last_brick_time: Option<f64>,
    /// Tint source
    rng: Pcg32,
    /// Next brick ID
    next_id: u32,
}

impl GameState {
    /// Create a new game on the splash screen
    pub fn new(tuning: Tuning, playfield: Vec2) -> Self {
        let layout = Layout::for_size(playfield);
        let mut state = Self {
            rng: Pcg32::seed_from_u64(tuning.rng_seed),
            paddle: Paddle::new(tuning.paddle_width, tuning.paddle_height),
            ball: Ball::new(tuning.ball_radius),
            tuning,
            playfield,
            layout,
            phase: GamePhase::Splash,
            score: 0,
            bricks: Vec::new(),
            last_update_time: None,
            last_brick_time: None,
            next_id: 1,
        };
        state.reset_objects();
        state
    }

    /// Allocate a new brick ID
    pub fn next_brick_id(&mut self) -> BrickId {
        let id = BrickId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Draw a tint for a new brick
    pub fn next_tint(&mut self) -> u8 {
        self.rng.random_range(0..TINT_COUNT)
    }

    /// Current brick width for this playfield
    pub fn brick_width(&self) -> f32 {
        self.tuning.brick_width(self.playfield.x)
    }

    pub fn brick(&self, id: BrickId) -> Option<&Brick> {
        self.bricks.iter().find(|b| b.id == id)
    }

    /// Remove a brick, keeping the order of the survivors
    pub fn remove_brick(&mut self, id: BrickId) -> Option<Brick> {
        let idx = self.bricks.iter().position(|b| b.id == id)?;
        Some(self.bricks.remove(idx))
    }

    /// Clear bricks, timers and score; put paddle and ball at their defaults
    pub fn reset_objects(&mut self) {
        self.bricks.clear();
        self.last_update_time = None;
        self.last_brick_time = None;
        self.score = 0;

        self.paddle.pos = self.layout.paddle_home(self.playfield);
        self.ball.pos = self.layout.ball_home(self.playfield);
        self.ball.vel = Vec2::ZERO;
    }

    /// Adopt a new playfield size
    ///
    /// Outside of play the paddle and ball go back to their default spots.
    /// During play the paddle keeps its x (re-clamped) and only its height
    /// above the floor changes.
    pub fn resize(&mut self, size: Vec2) {
        self.playfield = size;
        self.layout = Layout::for_size(size);

        if self.phase == GamePhase::Playing {
            self.paddle.pos.y = self.layout.paddle_y;
            self.paddle.move_to(self.paddle.pos.x, size.x);
        } else {
            self.paddle.pos = self.layout.paddle_home(size);
            self.ball.pos = self.layout.ball_home(size);
        }
        log::debug!("Playfield resized to {}x{}", size.x, size.y);
    }
}

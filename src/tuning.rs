//! Data-driven game balance
//!
//! Loaded from an optional JSON file. Missing fields fall back to the
//! built-in defaults, and a broken file never stops the game.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Bricks per spawned row
    pub columns: u32,
    /// Brick height
    pub brick_height: f32,
    /// Brick descent speed (units/s)
    pub brick_speed: f32,
    /// Ball target speed (units/s)
    pub ball_speed: f32,
    pub ball_radius: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Score per destroyed brick
    pub points_per_brick: u64,
    /// Ball speed under which the ball is relaunched straight up
    pub min_ball_speed: f32,
    /// Seed for brick tints
    pub rng_seed: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            columns: COLUMNS,
            brick_height: BRICK_HEIGHT,
            brick_speed: BRICK_SPEED,
            ball_speed: BALL_SPEED,
            ball_radius: BALL_RADIUS,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            points_per_brick: POINTS_PER_BRICK,
            min_ball_speed: BALL_MIN_SPEED,
            rng_seed: 0,
        }
    }
}

impl Tuning {
    /// Parse tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(json).map(Tuning::validated)
    }

    /// Load tuning from a file, falling back to defaults on any problem
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid tuning file {}: {}; using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read tuning file {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace unusable values with defaults
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        if self.columns == 0 {
            log::warn!("columns must be at least 1, using {}", defaults.columns);
            self.columns = defaults.columns;
        }
        fix_positive("brick_height", &mut self.brick_height, defaults.brick_height);
        fix_positive("brick_speed", &mut self.brick_speed, defaults.brick_speed);
        fix_positive("ball_speed", &mut self.ball_speed, defaults.ball_speed);
        fix_positive("ball_radius", &mut self.ball_radius, defaults.ball_radius);
        fix_positive("paddle_width", &mut self.paddle_width, defaults.paddle_width);
        fix_positive("paddle_height", &mut self.paddle_height, defaults.paddle_height);
        fix_positive("min_ball_speed", &mut self.min_ball_speed, defaults.min_ball_speed);

        self
    }

    /// Brick width for a playfield of the given width
    pub fn brick_width(&self, playfield_width: f32) -> f32 {
        playfield_width / self.columns as f32
    }

    /// Seconds between rows: the time a brick takes to descend twice its height
    pub fn spawn_interval(&self) -> f64 {
        (2.0 * self.brick_height as f64) / self.brick_speed as f64
    }
}

fn fix_positive(name: &str, value: &mut f32, default: f32) {
    if !(value.is_finite() && *value > 0.0) {
        log::warn!("{} must be positive (got {}), using {}", name, value, default);
        *value = default;
    }
}

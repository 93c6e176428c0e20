//! Frame-driven simulation module
//!
//! All gameplay logic lives here. Single-threaded, one `update` per frame:
//! - Brick order is insertion order (oldest row first)
//! - Tints come from a seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod descent;
pub mod input;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Body, BodyKind, ContactOutcome, circle_overlaps_box, resolve_contact};
pub use descent::{DescentOutcome, descend_bricks, normalize_ball_speed};
pub use input::{touch_down, touch_move};
pub use physics::PhysicsWorld;
pub use spawn::{add_row, spawn_if_due};
pub use state::{Ball, Brick, BrickId, GamePhase, GameState, Layout, Paddle};
pub use tick::{end_game, return_to_splash, start_game, update};

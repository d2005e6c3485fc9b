//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame step only
//! - Stable iteration order (grid order for bricks)
//! - No rendering or platform dependencies (draw-intents are plain data)

pub mod collision;
pub mod field;
pub mod session;
pub mod state;
pub mod tick;

pub use collision::{Axis, Rect, ball_overlaps_paddle, circle_intersects_rect, reflect};
pub use field::{BrickField, BrickLayout};
pub use session::GameSession;
pub use state::{Ball, Brick, BrickStatus, GameEvent, Outcome, Paddle, SessionState};
pub use tick::TickInput;

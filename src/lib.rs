//! Brick Breaker - a deterministic brick-breaker game engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, brick field, session loop)
//! - `input`: Decoded input events buffered into per-tick samples
//! - `hud`: Score and game-over notifications
//! - `render`: Renderer-agnostic draw-intents
//! - `config`: Data-driven field, entity and scoring parameters
//! - `autopilot`: Idle/demo paddle controller

pub mod autopilot;
pub mod config;
pub mod hud;
pub mod input;
pub mod render;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use hud::{NullSink, ScoreSink, Scoreboard};
pub use input::{InputAdapter, InputEvent, InputSource};
pub use render::{Color, DrawIntent, Frame, Renderer};
pub use sim::{GameSession, Outcome, SessionState, TickInput};

/// Game configuration constants
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 320.0;

    /// Ball defaults
    pub const BALL_START_X: f32 = 200.0;
    pub const BALL_START_Y: f32 = 200.0;
    pub const BALL_RADIUS: f32 = 7.0;
    pub const BALL_START_SPEED_X: f32 = 2.0;
    pub const BALL_START_SPEED_Y: f32 = 2.0;

    /// Paddle defaults
    pub const PADDLE_START_X: f32 = 175.0;
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 7.0;
    /// Distance from the bottom edge of the field to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 20.0;

    /// Brick wall layout
    pub const BRICK_ROWS: u32 = 4;
    pub const BRICK_COLS: u32 = 8;
    pub const BRICK_WIDTH: f32 = 50.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_TOP_OFFSET: f32 = 30.0;

    /// Points awarded per destroyed brick
    pub const SCORE_PER_BRICK: u32 = 10;
}

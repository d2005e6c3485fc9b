//! Game configuration
//!
//! Field size, entity start values, brick layout and scoring. Defaults
//! reproduce the classic 480x320 board; a JSON file can override any subset.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::BrickLayout;

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    /// Not valid JSON for a `GameConfig`
    Parse(serde_json::Error),
    /// Parsed, but the values cannot describe a playable board
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config parse error: {}", e),
            ConfigError::Invalid(reason) => write!(f, "invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Play field size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

/// Ball start values (also restored on reset)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed_x: f32,
    pub speed_y: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            x: BALL_START_X,
            y: BALL_START_Y,
            radius: BALL_RADIUS,
            speed_x: BALL_START_SPEED_X,
            speed_y: BALL_START_SPEED_Y,
        }
    }
}

impl BallConfig {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.speed_x, self.speed_y)
    }
}

/// Paddle start values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Gap between the paddle's top edge and the bottom of the field
    pub bottom_offset: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            x: PADDLE_START_X,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            bottom_offset: PADDLE_BOTTOM_OFFSET,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field: FieldConfig,
    pub ball: BallConfig,
    pub paddle: PaddleConfig,
    pub bricks: BrickLayout,
    /// Points per destroyed brick
    pub score_per_brick: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            ball: BallConfig::default(),
            paddle: PaddleConfig::default(),
            bricks: BrickLayout::default(),
            score_per_brick: SCORE_PER_BRICK,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that cannot describe a playable board
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field.width > 0.0 && self.field.height > 0.0) {
            return Err(ConfigError::Invalid("field dimensions must be positive"));
        }
        if !(self.ball.radius > 0.0) {
            return Err(ConfigError::Invalid("ball radius must be positive"));
        }
        if !(self.paddle.width > 0.0 && self.paddle.height > 0.0) {
            return Err(ConfigError::Invalid("paddle dimensions must be positive"));
        }
        if self.paddle.speed < 0.0 {
            return Err(ConfigError::Invalid("paddle speed must not be negative"));
        }
        if self.paddle.bottom_offset < 0.0 || self.paddle.bottom_offset > self.field.height {
            return Err(ConfigError::Invalid("paddle must sit inside the field"));
        }
        if self.bricks.rows == 0 || self.bricks.cols == 0 {
            return Err(ConfigError::Invalid("brick grid must have at least one row and column"));
        }
        if !(self.bricks.cell_width > 0.0 && self.bricks.cell_height > 0.0) {
            return Err(ConfigError::Invalid("brick dimensions must be positive"));
        }
        if self.bricks.padding < 0.0 {
            return Err(ConfigError::Invalid("brick padding must not be negative"));
        }
        Ok(())
    }

    /// Top edge of the paddle
    pub fn paddle_y(&self) -> f32 {
        self.field.height - self.paddle.bottom_offset
    }
}

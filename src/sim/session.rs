//! Game session: one playthrough's full mutable state
//!
//! The session owns the ball, paddle, brick field, score and state machine.
//! Lifecycle: `new` -> (`tick` | `pause` | `resume`)* -> `reset` -> ...

use log::{debug, info};

use super::field::BrickField;
use super::state::{Ball, GameEvent, Paddle, SessionState};
use crate::config::GameConfig;
use crate::hud::ScoreSink;
use crate::render::Frame;

/// Complete session state
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    config: GameConfig,
    pub ball: Ball,
    pub paddle: Paddle,
    pub field: BrickField,
    pub score: u32,
    pub state: SessionState,
    /// Running ticks since creation or the last reset
    pub ticks: u64,
    /// Events from the most recent simulated tick
    pub events: Vec<GameEvent>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameSession {
    /// Create a running session from a config
    pub fn new(config: GameConfig) -> Self {
        let session = Self {
            ball: initial_ball(&config),
            paddle: initial_paddle(&config),
            field: BrickField::build(config.bricks.clone()),
            score: 0,
            state: SessionState::Running,
            ticks: 0,
            events: Vec::new(),
            config,
        };
        info!(
            "Session created: field {}x{}, {} bricks",
            session.config.field.width,
            session.config.field.height,
            session.field.len()
        );
        session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn field_width(&self) -> f32 {
        self.config.field.width
    }

    pub fn field_height(&self) -> f32 {
        self.config.field.height
    }

    /// Running -> Paused. Returns whether the state changed.
    pub fn pause(&mut self) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        self.state = SessionState::Paused;
        debug!("Paused at tick {}", self.ticks);
        true
    }

    /// Paused -> Running. Returns whether the state changed.
    pub fn resume(&mut self) -> bool {
        if self.state != SessionState::Paused {
            return false;
        }
        self.state = SessionState::Running;
        debug!("Resumed at tick {}", self.ticks);
        true
    }

    /// Any state -> Running with every entity back at its start values
    ///
    /// No sink is notified; hosts showing a score use `reset_with`.
    pub fn reset(&mut self) {
        self.ball = initial_ball(&self.config);
        self.paddle = initial_paddle(&self.config);
        self.field.reset();
        self.score = 0;
        self.ticks = 0;
        self.events.clear();
        self.state = SessionState::Running;
        info!("Session reset");
    }

    /// `reset`, then tell the sink the score is back to zero
    pub fn reset_with(&mut self, sink: &mut dyn ScoreSink) {
        self.reset();
        sink.on_session_reset();
    }

    /// Draw-intents for the current state; does not mutate
    ///
    /// Hosts call this to repaint while paused or after the play ended.
    pub fn frame(&self) -> Frame {
        Frame {
            ball: self.ball.draw_intent(),
            paddle: self.paddle.draw_intent(),
            bricks: self.field.live().map(|b| b.draw_intent()).collect(),
        }
    }
}

fn initial_ball(config: &GameConfig) -> Ball {
    Ball::new(
        config.ball.position(),
        config.ball.velocity(),
        config.ball.radius,
    )
}

fn initial_paddle(config: &GameConfig) -> Paddle {
    Paddle::new(
        config.paddle.x,
        config.paddle_y(),
        config.paddle.width,
        config.paddle.height,
        config.paddle.speed,
    )
}

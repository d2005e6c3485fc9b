//! Entities and session state types
//!
//! Plain data plus per-entity update and draw-intent operations. Nothing here
//! knows about the tick order; that lives in `tick`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Axis, Rect};
use crate::render::{Color, DrawIntent};

/// How a play ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every brick destroyed
    Won,
    /// Ball fell past the bottom edge
    Lost,
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Active gameplay; ticks advance the simulation
    Running,
    /// Frozen; ticks do nothing until resumed
    Paused,
    /// Play finished; only `reset` leaves this state
    Ended(Outcome),
}

impl SessionState {
    pub fn is_running(&self) -> bool {
        matches!(self, SessionState::Running)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            SessionState::Ended(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

/// Things that happened during the last tick, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallBounce(Axis),
    PaddleBounce,
    /// Grid index of the destroyed brick
    BrickDestroyed { index: usize },
    Ended(Outcome),
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Per-tick velocity (speedX, speedY)
    pub vel: Vec2,
    /// Constant for the ball's lifetime
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Move by one fixed step. No sub-stepping, so a fast ball can tunnel
    /// through a brick thinner than its per-tick travel.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn draw_intent(&self) -> DrawIntent {
        DrawIntent::Circle {
            center: self.pos,
            radius: self.radius,
            color: Color::Red,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed near the bottom of the field)
    pub y: f32,
    /// Current width (nominal, or the full field while the override is held)
    pub width: f32,
    pub height: f32,
    /// Horizontal distance moved per tick
    pub speed: f32,
    nominal_width: f32,
    width_override: bool,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, speed: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            speed,
            nominal_width: width,
            width_override: false,
        }
    }

    pub fn nominal_width(&self) -> f32 {
        self.nominal_width
    }

    pub fn width_override(&self) -> bool {
        self.width_override
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Move one step in `direction` and clamp inside the field
    ///
    /// Anything other than -1 or 1 is treated as standing still.
    pub fn move_by(&mut self, direction: i8, field_width: f32) {
        let dir = match direction {
            -1 => -1.0,
            1 => 1.0,
            _ => 0.0,
        };
        self.x += dir * self.speed;
        self.clamp_to(field_width);
    }

    /// Stretch the paddle over the whole field while `active`
    pub fn set_width_override(&mut self, active: bool, field_width: f32) {
        self.width_override = active;
        self.width = if active { field_width } else { self.nominal_width };
        self.clamp_to(field_width);
    }

    fn clamp_to(&mut self, field_width: f32) {
        let max_x = (field_width - self.width).max(0.0);
        self.x = self.x.clamp(0.0, max_x);
    }

    pub fn draw_intent(&self) -> DrawIntent {
        DrawIntent::Rect {
            rect: self.rect(),
            color: Color::Orange,
        }
    }
}

/// Brick lifecycle: Intact -> Destroyed, back only on a field reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickStatus {
    #[default]
    Intact,
    Destroyed,
}

/// A brick in the wall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    rect: Rect,
    status: BrickStatus,
}

impl Brick {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            status: BrickStatus::Intact,
        }
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn status(&self) -> BrickStatus {
        self.status
    }

    pub fn is_live(&self) -> bool {
        self.status == BrickStatus::Intact
    }

    /// Mark destroyed. Returns false if it already was.
    pub fn destroy(&mut self) -> bool {
        if self.status == BrickStatus::Destroyed {
            return false;
        }
        self.status = BrickStatus::Destroyed;
        true
    }

    pub(super) fn restore(&mut self) {
        self.status = BrickStatus::Intact;
    }

    pub fn draw_intent(&self) -> DrawIntent {
        DrawIntent::Rect {
            rect: self.rect,
            color: Color::Green,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn paddle() -> Paddle {
        Paddle::new(175.0, 300.0, 100.0, 10.0, 7.0)
    }

    #[test]
    fn test_ball_advance() {
        let mut ball = Ball::new(Vec2::new(200.0, 200.0), Vec2::new(2.0, -3.0), 7.0);
        ball.advance();
        assert_eq!(ball.pos, Vec2::new(202.0, 197.0));
        assert_eq!(ball.bottom(), 204.0);
        assert_eq!(ball.left(), 195.0);
    }

    #[test]
    fn test_ball_draw_intent_is_pure() {
        let ball = Ball::new(Vec2::new(10.0, 20.0), Vec2::new(1.0, 1.0), 7.0);
        let before = ball.clone();
        let intent = ball.draw_intent();
        assert_eq!(ball, before);
        assert_eq!(
            intent,
            DrawIntent::Circle {
                center: Vec2::new(10.0, 20.0),
                radius: 7.0,
                color: Color::Red
            }
        );
    }

    #[test]
    fn test_paddle_move_and_clamp() {
        let mut p = paddle();
        p.move_by(-1, 480.0);
        assert_eq!(p.x, 168.0);
        p.move_by(1, 480.0);
        p.move_by(1, 480.0);
        assert_eq!(p.x, 182.0);

        p.x = 3.0;
        p.move_by(-1, 480.0);
        assert_eq!(p.x, 0.0);

        p.x = 378.0;
        p.move_by(1, 480.0);
        assert_eq!(p.x, 380.0);
    }

    #[test]
    fn test_paddle_invalid_direction_is_still() {
        let mut p = paddle();
        p.move_by(5, 480.0);
        p.move_by(-2, 480.0);
        assert_eq!(p.x, 175.0);
    }

    #[test]
    fn test_paddle_width_override() {
        let mut p = paddle();
        p.set_width_override(true, 480.0);
        assert_eq!(p.width, 480.0);
        assert_eq!(p.x, 0.0);
        assert!(p.width_override());

        // Moving while stretched stays pinned
        p.move_by(1, 480.0);
        assert_eq!(p.x, 0.0);

        p.set_width_override(false, 480.0);
        assert_eq!(p.width, 100.0);
        assert_eq!(p.nominal_width(), 100.0);
    }

    #[test]
    fn test_brick_destroy_is_idempotent() {
        let mut brick = Brick::new(Rect::new(0.0, 30.0, 50.0, 20.0));
        assert!(brick.is_live());
        assert!(brick.destroy());
        assert!(!brick.destroy());
        assert_eq!(brick.status(), BrickStatus::Destroyed);
        brick.restore();
        assert!(brick.is_live());
    }

    #[test]
    fn test_session_state_helpers() {
        assert!(SessionState::Running.is_running());
        assert!(!SessionState::Paused.is_running());
        assert_eq!(SessionState::Ended(Outcome::Won).outcome(), Some(Outcome::Won));
        assert_eq!(SessionState::Paused.outcome(), None);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_field(
            moves in proptest::collection::vec(-3i8..=3, 0..200),
            field_width in 50.0f32..800.0,
        ) {
            let mut p = paddle();
            for dir in moves {
                p.move_by(dir, field_width);
                prop_assert!(p.x >= 0.0);
                prop_assert!(p.x <= (field_width - p.width).max(0.0));
            }
        }
    }
}

//! Fixed-step simulation tick
//!
//! Core game loop that advances a session by exactly one frame. The step
//! order below decides collision priority and must not be rearranged.

use log::{debug, info, trace};

use super::collision::{Axis, ball_overlaps_paddle, circle_intersects_rect, reflect};
use super::session::GameSession;
use super::state::{GameEvent, Outcome, SessionState};
use crate::hud::ScoreSink;
use crate::render::Frame;

/// Input commands for a single tick, sampled once before the tick runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Paddle direction: -1 left, 0 still, +1 right (anything else is still)
    pub direction: i8,
    /// Pause request (edge)
    pub pause: bool,
    /// Resume request (edge)
    pub resume: bool,
    /// Paddle width override held
    pub cheat: bool,
}

impl GameSession {
    /// Advance the session by one fixed step
    ///
    /// Pause and resume requests are applied first, pause before resume.
    /// Returns the frame to present, or `None` when nothing was simulated
    /// (paused or ended).
    pub fn tick(&mut self, input: &TickInput, sink: &mut dyn ScoreSink) -> Option<Frame> {
        if input.pause {
            self.pause();
        }
        if input.resume {
            self.resume();
        }

        if self.state != SessionState::Running {
            return None;
        }

        self.events.clear();
        self.ticks += 1;

        let width = self.field_width();
        let height = self.field_height();

        // 1. Move
        self.ball.advance();

        // 2. Side walls. Reflection points the ball back inside, so a second
        //    out-of-bounds tick can't flip it outward again.
        if (self.ball.left() < 0.0 && self.ball.vel.x < 0.0)
            || (self.ball.right() > width && self.ball.vel.x > 0.0)
        {
            self.bounce_wall(Axis::Vertical);
        }

        // 3. Ceiling
        if self.ball.top() < 0.0 && self.ball.vel.y < 0.0 {
            self.bounce_wall(Axis::Horizontal);
        }

        // 4. Paddle (box proxy, always sends the ball up)
        if ball_overlaps_paddle(self.ball.pos, self.ball.radius, &self.paddle.rect())
            && self.ball.vel.y > 0.0
        {
            self.ball.vel = reflect(self.ball.vel, Axis::Horizontal);
            self.events.push(GameEvent::PaddleBounce);
            trace!("Paddle bounce at x={:.1}", self.ball.pos.x);
        }

        // 5. Loss
        if self.ball.bottom() > height {
            self.end(Outcome::Lost, sink);
            return Some(self.frame());
        }

        // 6. Win
        if self.field.all_destroyed() {
            self.end(Outcome::Won, sink);
            return Some(self.frame());
        }

        // 7. Paddle movement
        if input.cheat != self.paddle.width_override() {
            self.paddle.set_width_override(input.cheat, width);
        }
        self.paddle.move_by(input.direction, width);

        // 8. Bricks, grid order, every live brick is tested against the
        //    current (possibly already reflected) velocity
        let points = self.config().score_per_brick;
        let ball = &mut self.ball;
        let score = &mut self.score;
        let events = &mut self.events;
        self.field.for_each_live_mut(|index, brick| {
            if circle_intersects_rect(ball.pos, ball.radius, brick.rect()) && brick.destroy() {
                ball.vel = reflect(ball.vel, Axis::Horizontal);
                *score += points;
                events.push(GameEvent::BrickDestroyed { index });
                debug!("Brick {} destroyed, score {}", index, *score);
                sink.on_score_changed(*score);
            }
        });

        // 9. Present
        Some(self.frame())
    }

    fn bounce_wall(&mut self, axis: Axis) {
        self.ball.vel = reflect(self.ball.vel, axis);
        self.events.push(GameEvent::WallBounce(axis));
        trace!("Wall bounce {:?} at {:?}", axis, self.ball.pos);
    }

    fn end(&mut self, outcome: Outcome, sink: &mut dyn ScoreSink) {
        self.state = SessionState::Ended(outcome);
        self.events.push(GameEvent::Ended(outcome));
        info!(
            "Session ended: {:?} with score {} after {} ticks",
            outcome, self.score, self.ticks
        );
        sink.on_session_ended(outcome, self.score);
    }
}

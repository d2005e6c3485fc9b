//! Idle/demo mode paddle controller
//!
//! Tracks the ball with a seeded random aim offset so runs vary between seeds
//! but replay identically for the same seed. It drives the paddle through the
//! same `InputAdapter` a human host would.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::input::{InputAdapter, InputEvent, InputSource};
use crate::sim::GameSession;

/// Fraction of the paddle width the aim point may wander from its center
const AIM_SPREAD: f32 = 0.35;

pub struct Autopilot {
    rng: Pcg32,
    /// Offset from the paddle center that should meet the ball
    aim_offset: f32,
    /// Ball was falling on the previous call
    was_falling: bool,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            aim_offset: 0.0,
            was_falling: false,
        }
    }

    /// Current aim offset (pixels from paddle center)
    pub fn aim_offset(&self) -> f32 {
        self.aim_offset
    }

    /// Pick a direction for this tick and push the matching event
    pub fn drive(&mut self, session: &GameSession, input: &mut InputAdapter) {
        let ball = &session.ball;
        let paddle = &session.paddle;

        let falling = ball.vel.y > 0.0;
        if falling && !self.was_falling {
            // New approach: pick a new spot on the paddle to hit with
            let spread = paddle.nominal_width() * AIM_SPREAD;
            self.aim_offset = self.rng.random_range(-spread..=spread);
        }
        self.was_falling = falling;

        let target = paddle.x + paddle.width / 2.0 + self.aim_offset;
        let dead_zone = paddle.speed / 2.0;
        let wanted: i8 = if ball.pos.x < target - dead_zone {
            -1
        } else if ball.pos.x > target + dead_zone {
            1
        } else {
            0
        };

        if wanted != input.current_direction() {
            input.apply(match wanted {
                -1 => InputEvent::MoveLeft,
                1 => InputEvent::MoveRight,
                _ => InputEvent::Stop,
            });
        }
    }
}

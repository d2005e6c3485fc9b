//! Score and game-over notifications
//!
//! The session reports through `ScoreSink`; `Scoreboard` is the stock
//! implementation that keeps the HUD text and the best score across plays.

use log::info;
use serde::{Deserialize, Serialize};

use crate::sim::Outcome;

/// Receiver of score and end-of-play notifications
pub trait ScoreSink {
    fn on_score_changed(&mut self, score: u32);
    fn on_session_ended(&mut self, outcome: Outcome, final_score: u32);

    /// The session was reset; the score is back to zero
    fn on_session_reset(&mut self) {
        self.on_score_changed(0);
    }
}

/// Sink that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ScoreSink for NullSink {
    fn on_score_changed(&mut self, _score: u32) {}
    fn on_session_ended(&mut self, _outcome: Outcome, _final_score: u32) {}
}

/// HUD state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Score shown in the HUD
    pub score: u32,
    /// Best final score across finished plays
    pub best: u32,
    /// How the last play ended (cleared on reset)
    pub last_outcome: Option<Outcome>,
    /// Finished plays
    pub plays: u32,
    /// Number of score notifications received
    pub score_events: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-play fields after the session is reset
    pub fn reset(&mut self) {
        self.score = 0;
        self.last_outcome = None;
    }

    /// Score line
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// End-of-play banner, if the last play has ended
    pub fn banner(&self) -> Option<String> {
        self.last_outcome.map(|outcome| match outcome {
            Outcome::Lost => "Game Over! You Lose!".to_string(),
            Outcome::Won => format!("Congratulations! You are legend!\nScore: {}", self.score),
        })
    }
}

impl ScoreSink for Scoreboard {
    fn on_score_changed(&mut self, score: u32) {
        self.score = score;
        self.score_events += 1;
    }

    fn on_session_reset(&mut self) {
        self.reset();
    }

    fn on_session_ended(&mut self, outcome: Outcome, final_score: u32) {
        self.score = final_score;
        self.last_outcome = Some(outcome);
        self.plays += 1;
        if final_score > self.best {
            info!("New best score: {}", final_score);
            self.best = final_score;
        }
    }
}

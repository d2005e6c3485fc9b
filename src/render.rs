//! Renderer-agnostic draw-intents
//!
//! The simulation never paints anything. Each completed tick yields a `Frame`
//! describing what to draw, and whatever owns the display turns that into
//! pixels (canvas, terminal, GPU...).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// Fixed palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    /// Ball
    Red,
    /// Paddle
    Orange,
    /// Bricks
    Green,
}

impl Color {
    /// sRGB components, 0-255
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Color::Red => [255, 0, 0],
            Color::Orange => [255, 165, 0],
            Color::Green => [0, 128, 0],
        }
    }
}

/// A single shape to paint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawIntent {
    Circle { center: Vec2, radius: f32, color: Color },
    Rect { rect: Rect, color: Color },
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub ball: DrawIntent,
    pub paddle: DrawIntent,
    /// Live bricks in grid order
    pub bricks: Vec<DrawIntent>,
}

/// Consumer of frames
pub trait Renderer {
    fn present(&mut self, frame: &Frame);
}

/// Renderer that keeps the most recent frame (headless runs, tests)
#[derive(Debug, Default)]
pub struct FrameLog {
    pub presented: u64,
    pub last: Option<Frame>,
}

impl FrameLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for FrameLog {
    fn present(&mut self, frame: &Frame) {
        self.presented += 1;
        self.last = Some(frame.clone());
    }
}

//! Input adapter
//!
//! Hosts feed already-decoded events in whenever they arrive. The session
//! samples the adapter exactly once per tick, so nothing an event handler does
//! can be observed halfway through a tick.

use log::debug;

use crate::sim::TickInput;

/// Decoded input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    /// Movement key released
    Stop,
    Pause,
    Resume,
    /// Pause if running, resume if paused
    TogglePause,
    /// Stretch the paddle across the field
    CheatOn,
    CheatOff,
}

impl InputEvent {
    /// Map a browser-style key name and press/release to an event
    pub fn from_key(key: &str, pressed: bool) -> Option<Self> {
        match (key, pressed) {
            ("ArrowLeft", true) => Some(InputEvent::MoveLeft),
            ("ArrowRight", true) => Some(InputEvent::MoveRight),
            // Releasing either arrow stops the paddle
            ("ArrowLeft" | "ArrowRight", false) => Some(InputEvent::Stop),
            ("ArrowDown", true) => Some(InputEvent::CheatOn),
            ("ArrowDown", false) => Some(InputEvent::CheatOff),
            ("p" | "P" | "Escape", true) => Some(InputEvent::TogglePause),
            _ => None,
        }
    }
}

/// Per-tick view of the player's intent
pub trait InputSource {
    /// -1 (left), 0, or +1 (right)
    fn current_direction(&self) -> i8;
    /// True once per pause request; reading clears it
    fn pause_edge(&mut self) -> bool;
    /// True once per resume request; reading clears it
    fn resume_edge(&mut self) -> bool;
    fn cheat_active(&self) -> bool;
}

/// Buffers events between ticks
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    direction: i8,
    pause_pending: bool,
    resume_pending: bool,
    toggle_pending: bool,
    cheat: bool,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: InputEvent) {
        debug!("Input event: {:?}", event);
        match event {
            InputEvent::MoveLeft => self.direction = -1,
            InputEvent::MoveRight => self.direction = 1,
            InputEvent::Stop => self.direction = 0,
            InputEvent::Pause => self.pause_pending = true,
            InputEvent::Resume => self.resume_pending = true,
            InputEvent::TogglePause => self.toggle_pending = !self.toggle_pending,
            InputEvent::CheatOn => self.cheat = true,
            InputEvent::CheatOff => self.cheat = false,
        }
    }

    /// Take the pending toggle, resolving it against whether the game is paused
    ///
    /// Hosts that use `TogglePause` call this before sampling; it turns the
    /// toggle into the matching pause or resume edge.
    pub fn resolve_toggle(&mut self, paused: bool) {
        if std::mem::take(&mut self.toggle_pending) {
            if paused {
                self.resume_pending = true;
            } else {
                self.pause_pending = true;
            }
        }
    }
}

impl InputSource for InputAdapter {
    fn current_direction(&self) -> i8 {
        self.direction
    }

    fn pause_edge(&mut self) -> bool {
        std::mem::take(&mut self.pause_pending)
    }

    fn resume_edge(&mut self) -> bool {
        std::mem::take(&mut self.resume_pending)
    }

    fn cheat_active(&self) -> bool {
        self.cheat
    }
}

impl TickInput {
    /// Read a source once, consuming its edges
    pub fn sample<S: InputSource + ?Sized>(source: &mut S) -> Self {
        Self {
            direction: source.current_direction(),
            pause: source.pause_edge(),
            resume: source.resume_edge(),
            cheat: source.cheat_active(),
        }
    }
}

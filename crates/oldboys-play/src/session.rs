use serde::{Deserialize, Serialize};

/// Lifecycle of one play session. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Menu,
    Playing,
    Finished,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Menu => write!(f, "Menu"),
            Self::Playing => write!(f, "Playing"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

/// Session state plus the finish threshold fixed at load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    state: SessionState,
    finish_tick: f64,
}

impl Session {
    /// `finish_tick` is the last scheduled tick plus the grace period.
    pub fn new(max_tick: f64, grace_ticks: f64) -> Self {
        Self {
            state: SessionState::Menu,
            finish_tick: max_tick + grace_ticks,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn finish_tick(&self) -> f64 {
        self.finish_tick
    }

    /// Menu -> Playing. Returns false from any other state.
    pub fn start(&mut self) -> bool {
        if self.state != SessionState::Menu {
            return false;
        }
        self.state = SessionState::Playing;
        true
    }

    /// Playing -> Finished once `tick` is strictly past the threshold.
    /// Returns true on the frame the transition happens.
    pub fn check_finish(&mut self, tick: f64) -> bool {
        if self.state == SessionState::Playing && tick > self.finish_tick {
            self.state = SessionState::Finished;
            return true;
        }
        false
    }
}

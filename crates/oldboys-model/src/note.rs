use serde::{Deserialize, Serialize};

use crate::lane::Lane;

/// Stable identifier of a note: its position in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NoteId(pub usize);

impl NoteId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single scheduled note in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Lane the note falls in
    pub lane: Lane,
    /// Scheduled time in ticks
    pub tick: f64,
}

impl Note {
    pub fn new(lane: Lane, tick: f64) -> Self {
        Self { lane, tick }
    }
}

use crate::error::ChartError;
use crate::lane::{LANE_COUNT, Lane};
use crate::note::{Note, NoteId};

/// An immutable, validated chart.
///
/// Notes keep their load order; that order is the `NoteId` of each note and
/// the iteration order used everywhere a deterministic walk is needed.
#[derive(Debug, Clone)]
pub struct Chart {
    notes: Vec<Note>,
    lane_index: [Vec<NoteId>; LANE_COUNT],
    max_tick: f64,
}

impl Chart {
    /// Build a chart, rejecting empty note lists and non-finite or negative ticks.
    pub fn new(notes: Vec<Note>) -> Result<Self, ChartError> {
        if notes.is_empty() {
            return Err(ChartError::Empty);
        }

        let mut lane_index: [Vec<NoteId>; LANE_COUNT] = Default::default();
        let mut max_tick = 0.0_f64;
        for (index, note) in notes.iter().enumerate() {
            if !note.tick.is_finite() || note.tick < 0.0 {
                return Err(ChartError::InvalidTick {
                    index,
                    tick: note.tick,
                });
            }
            lane_index[note.lane.index()].push(NoteId(index));
            max_tick = max_tick.max(note.tick);
        }

        Ok(Self {
            notes,
            lane_index,
            max_tick,
        })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn note(&self, id: NoteId) -> &Note {
        &self.notes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Always false: empty charts are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Note ids in the given lane, in chart order.
    pub fn lane_notes(&self, lane: Lane) -> &[NoteId] {
        &self.lane_index[lane.index()]
    }

    /// Highest scheduled tick in the chart.
    pub fn max_tick(&self) -> f64 {
        self.max_tick
    }

    /// Iterate `(id, note)` pairs in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (NoteId, &Note)> {
        self.notes
            .iter()
            .enumerate()
            .map(|(i, note)| (NoteId(i), note))
    }
}

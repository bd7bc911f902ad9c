use oldboys_model::NoteId;

use crate::judgment::Judgment;

/// Mutable runtime state of one note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteState {
    /// Still waiting to be hit or missed
    pub active: bool,
    /// Screen Y from the last position update
    pub screen_y: f64,
    /// How the note was resolved, once inactive
    pub resolution: Option<Judgment>,
}

impl NoteState {
    fn pending() -> Self {
        Self {
            active: true,
            screen_y: 0.0,
            resolution: None,
        }
    }
}

/// Runtime state for every chart note, indexed by `NoteId`.
///
/// Deactivation is terminal: a resolved note never becomes active again.
#[derive(Debug, Clone)]
pub struct NoteArena {
    states: Vec<NoteState>,
    active_count: usize,
}

impl NoteArena {
    pub fn new(note_count: usize) -> Self {
        Self {
            states: vec![NoteState::pending(); note_count],
            active_count: note_count,
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, id: NoteId) -> &NoteState {
        &self.states[id.index()]
    }

    pub fn is_active(&self, id: NoteId) -> bool {
        self.states[id.index()].active
    }

    pub fn screen_y(&self, id: NoteId) -> f64 {
        self.states[id.index()].screen_y
    }

    pub fn set_screen_y(&mut self, id: NoteId, y: f64) {
        self.states[id.index()].screen_y = y;
    }

    /// Number of notes not yet resolved.
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// Resolve a note. Resolving an already inactive note is a programmer error.
    pub fn deactivate(&mut self, id: NoteId, judgment: Judgment) {
        let state = &mut self.states[id.index()];
        debug_assert!(state.active, "note {} resolved twice", id.index());
        if !state.active {
            return;
        }
        state.active = false;
        state.resolution = Some(judgment);
        self.active_count -= 1;
    }

    pub fn iter(&self) -> impl Iterator<Item = (NoteId, &NoteState)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, state)| (NoteId(i), state))
    }
}

//! Judge manager.
//!
//! Owns the note arena and the score. Presses are matched against the active
//! notes of one lane and classified by tick distance; misses come in from the
//! position update once a note has scrolled past the judgment band.

use log::debug;
use oldboys_model::{Chart, Lane, NoteId};
use serde::{Deserialize, Serialize};

use crate::judge_property::JudgeProperty;
use crate::judgment::Judgment;
use crate::note_state::NoteArena;
use crate::score_data::ScoreData;

/// A resolved note.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JudgeEvent {
    pub lane: Lane,
    pub note: NoteId,
    pub judgment: Judgment,
    /// `current_tick - scheduled_tick`: positive when late
    pub tick_diff: f64,
}

/// Manages judgment logic for gameplay.
#[derive(Debug, Clone)]
pub struct JudgeManager {
    property: JudgeProperty,
    arena: NoteArena,
    score: ScoreData,
}

impl JudgeManager {
    pub fn new(chart: &Chart, property: JudgeProperty) -> Self {
        Self {
            property,
            arena: NoteArena::new(chart.len()),
            score: ScoreData::new(),
        }
    }

    pub fn property(&self) -> &JudgeProperty {
        &self.property
    }

    pub fn arena(&self) -> &NoteArena {
        &self.arena
    }

    /// Mutable arena access for the position update. Resolution must go
    /// through `press` or `miss` so the score stays in step.
    pub fn arena_mut(&mut self) -> &mut NoteArena {
        &mut self.arena
    }

    pub fn score(&self) -> &ScoreData {
        &self.score
    }

    /// The active note in `lane` a press at `current_tick` would be judged against.
    pub fn find_candidate(&self, chart: &Chart, lane: Lane, current_tick: f64) -> Option<NoteId> {
        let algorithm = self.property.algorithm;
        let mut best: Option<NoteId> = None;
        for &id in chart.lane_notes(lane) {
            if !self.arena.is_active(id) {
                continue;
            }
            best = match best {
                None => Some(id),
                Some(current) => {
                    let t1 = chart.note(current).tick;
                    let t2 = chart.note(id).tick;
                    if algorithm.compare(t1, t2, current_tick) {
                        Some(id)
                    } else {
                        Some(current)
                    }
                }
            };
        }
        best
    }

    /// Judge a press edge in `lane` at `current_tick`.
    ///
    /// Returns `None` when the lane has no active note or the chosen note is
    /// outside the good window; neither case changes any state.
    pub fn press(&mut self, chart: &Chart, lane: Lane, current_tick: f64) -> Option<JudgeEvent> {
        let id = self.find_candidate(chart, lane, current_tick)?;
        let tick_diff = current_tick - chart.note(id).tick;
        let Some(judgment) = self.property.judge(tick_diff.abs()) else {
            debug!("{lane}: press out of window ({tick_diff:+.3} ticks), ignored");
            return None;
        };

        self.resolve(lane, id, judgment);
        debug!("{lane}: {judgment} ({tick_diff:+.3} ticks)");
        Some(JudgeEvent {
            lane,
            note: id,
            judgment,
            tick_diff,
        })
    }

    /// Resolve an unplayed note as a miss.
    pub fn miss(&mut self, chart: &Chart, id: NoteId, current_tick: f64) -> JudgeEvent {
        let note = chart.note(id);
        self.resolve(note.lane, id, Judgment::Miss);
        debug!("{}: MISS note {} at tick {:.3}", note.lane, id.index(), current_tick);
        JudgeEvent {
            lane: note.lane,
            note: id,
            judgment: Judgment::Miss,
            tick_diff: current_tick - note.tick,
        }
    }

    fn resolve(&mut self, lane: Lane, id: NoteId, judgment: Judgment) {
        debug_assert!(self.arena.is_active(id), "note {} judged twice", id.index());
        self.arena.deactivate(id, judgment);
        self.score.add(lane, judgment, &self.property);
        debug_assert!(
            self.score.is_consistent(&self.property),
            "score {} does not match counters",
            self.score.score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judge_algorithm::JudgeAlgorithm;
    use oldboys_model::Note;

    fn chart(notes: &[(Lane, f64)]) -> Chart {
        Chart::new(notes.iter().map(|&(l, t)| Note::new(l, t)).collect()).unwrap()
    }

    #[test]
    fn press_picks_nearest_active_note() {
        let c = chart(&[(Lane::Guitar, 100.0), (Lane::Guitar, 130.0)]);
        let mut jm = JudgeManager::new(&c, JudgeProperty::default());

        let ev = jm.press(&c, Lane::Guitar, 128.0).unwrap();
        assert_eq!(ev.note, NoteId(1));
        assert_eq!(ev.judgment, Judgment::Perfect);
        assert!(jm.arena().is_active(NoteId(0)));
    }

    #[test]
    fn empty_lane_press_is_free() {
        let c = chart(&[(Lane::Guitar, 100.0)]);
        let mut jm = JudgeManager::new(&c, JudgeProperty::default());

        assert!(jm.press(&c, Lane::Drums, 100.0).is_none());
        assert_eq!(jm.score().score, 0);
        assert_eq!(jm.score().judged(), 0);
        assert_eq!(jm.arena().active_count(), 1);
    }

    #[test]
    fn out_of_window_press_leaves_note_active() {
        let c = chart(&[(Lane::Bass, 100.0)]);
        let mut jm = JudgeManager::new(&c, JudgeProperty::default());

        assert!(jm.press(&c, Lane::Bass, 50.0).is_none());
        assert!(jm.arena().is_active(NoteId(0)));
        assert_eq!(jm.score().lane(Lane::Bass).miss, 0);

        // The same note is still hittable later
        let ev = jm.press(&c, Lane::Bass, 95.0).unwrap();
        assert_eq!(ev.judgment, Judgment::Perfect);
    }

    #[test]
    fn good_press_scores_fifty() {
        let c = chart(&[(Lane::Drums, 100.0)]);
        let mut jm = JudgeManager::new(&c, JudgeProperty::default());

        let ev = jm.press(&c, Lane::Drums, 85.0).unwrap();
        assert_eq!(ev.judgment, Judgment::Good);
        assert!((ev.tick_diff + 15.0).abs() < 1e-9);
        assert_eq!(jm.score().score, 50);
        assert_eq!(jm.score().lane(Lane::Drums).good, 1);
    }

    #[test]
    fn equidistant_notes_earliest_tick_wins() {
        // Chart order puts the later note first
        let c = chart(&[(Lane::Guitar, 110.0), (Lane::Guitar, 90.0)]);
        let jm = JudgeManager::new(&c, JudgeProperty::default());

        assert_eq!(jm.find_candidate(&c, Lane::Guitar, 100.0), Some(NoteId(1)));
    }

    #[test]
    fn lowest_algorithm_takes_first_in_chart_order() {
        let c = chart(&[(Lane::Guitar, 10.0), (Lane::Guitar, 100.0)]);
        let prop = JudgeProperty {
            algorithm: JudgeAlgorithm::Lowest,
            ..Default::default()
        };
        let mut jm = JudgeManager::new(&c, prop);

        // The first note is far away, so the press is wasted even though
        // the second note is exactly on time.
        assert_eq!(jm.find_candidate(&c, Lane::Guitar, 100.0), Some(NoteId(0)));
        assert!(jm.press(&c, Lane::Guitar, 100.0).is_none());
    }

    #[test]
    fn miss_resolves_and_counts() {
        let c = chart(&[(Lane::Bass, 100.0)]);
        let mut jm = JudgeManager::new(&c, JudgeProperty::default());

        let ev = jm.miss(&c, NoteId(0), 111.0);
        assert_eq!(ev.judgment, Judgment::Miss);
        assert_eq!(ev.lane, Lane::Bass);
        assert!(!jm.arena().is_active(NoteId(0)));
        assert_eq!(jm.score().lane(Lane::Bass).miss, 1);
        assert_eq!(jm.score().score, 0);

        // Nothing left to press
        assert!(jm.press(&c, Lane::Bass, 100.0).is_none());
    }

    #[test]
    fn resolved_note_is_never_picked_again() {
        let c = chart(&[(Lane::Drums, 100.0), (Lane::Drums, 140.0)]);
        let mut jm = JudgeManager::new(&c, JudgeProperty::default());

        jm.press(&c, Lane::Drums, 100.0).unwrap();
        assert_eq!(jm.find_candidate(&c, Lane::Drums, 100.0), Some(NoteId(1)));
        assert!(jm.press(&c, Lane::Drums, 100.0).is_none());
        assert_eq!(jm.score().judged(), 1);
    }
}

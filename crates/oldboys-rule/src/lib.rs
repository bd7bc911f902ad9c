// Judge windows, note selection, per-note state and score data

mod judge_algorithm;
pub mod judge_manager;
mod judge_property;
mod judgment;
mod note_state;
mod score_data;

pub use judge_algorithm::JudgeAlgorithm;
pub use judge_manager::{JudgeEvent, JudgeManager};
pub use judge_property::{JudgeProperty, JudgeWindow};
pub use judgment::Judgment;
pub use note_state::{NoteArena, NoteState};
pub use score_data::{LaneScore, ScoreData};

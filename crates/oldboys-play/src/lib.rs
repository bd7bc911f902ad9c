// Play session: virtual clock, playfield, lane marks and the frame-driven engine

mod audio_cue;
mod autoplay;
mod clock;
mod engine;
mod lane_mark;
mod playfield;
mod session;
mod statistics;

pub use audio_cue::{LaneAudioCue, NullAudioCue};
pub use autoplay::Autoplay;
pub use clock::{FrameTimer, TickClock};
pub use engine::{FrameResult, NotePosition, PlayEngine};
pub use lane_mark::LaneMarks;
pub use playfield::Playfield;
pub use session::{Session, SessionState};
pub use statistics::{LaneStatistics, Statistics};

//! Frame-driven play engine.
//!
//! One `advance` call per host frame. Within a frame the order is fixed:
//! clock, note positions and auto-miss, input edges, judgment, finish check.
//!
//! Calling `advance` twice for the same frame advances the clock twice; not
//! calling it is a pause. Deltas must be non-negative.

use std::path::Path;
use std::time::Instant;

use log::info;
use oldboys_config::EngineConfig;
use oldboys_input::{InputBackend, InputMapper, LaneInput};
use oldboys_model::{Chart, ChartDecoder, ChartError, LANE_COUNT, Lane, NoteId};
use oldboys_rule::{JudgeEvent, JudgeManager, LaneScore};

use crate::audio_cue::{LaneAudioCue, NullAudioCue};
use crate::clock::{FrameTimer, TickClock};
use crate::lane_mark::LaneMarks;
use crate::playfield::Playfield;
use crate::session::{Session, SessionState};
use crate::statistics::Statistics;

/// Screen position of an active note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotePosition {
    pub id: NoteId,
    pub lane: Lane,
    pub y: f64,
    /// Inside or below the judgment band
    pub visible: bool,
}

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    pub tick: f64,
    /// Active notes in chart order
    pub notes: Vec<NotePosition>,
    pub lane_held: [bool; LANE_COUNT],
    pub lane_marks: [bool; LANE_COUNT],
    pub score: u64,
    pub lanes: [LaneScore; LANE_COUNT],
    pub session: SessionState,
    /// Notes resolved during this frame, misses first
    pub judgments: Vec<JudgeEvent>,
}

pub struct PlayEngine {
    chart: Chart,
    config: EngineConfig,
    clock: TickClock,
    timer: FrameTimer,
    playfield: Playfield,
    judge: JudgeManager,
    mapper: InputMapper,
    marks: LaneMarks,
    session: Session,
    audio: Box<dyn LaneAudioCue>,
}

impl PlayEngine {
    /// Set up a session in the Menu state. The config is validated first.
    pub fn load(chart: Chart, mut config: EngineConfig) -> Self {
        config.validate();
        let playfield = Playfield::from_config(&config);
        let mut judge = JudgeManager::new(&chart, config.judge);
        playfield.layout(&chart, judge.arena_mut(), 0.0);
        let session = Session::new(chart.max_tick(), config.finish_grace_ticks);
        info!(
            "Session loaded: {} notes, finish after tick {:.1}",
            chart.len(),
            session.finish_tick()
        );
        Self {
            clock: TickClock::new(config.ticks_per_second),
            timer: FrameTimer::new(),
            playfield,
            judge,
            mapper: InputMapper::new(config.lane_bindings()),
            marks: LaneMarks::new(config.mark_duration_frames),
            session,
            audio: Box::new(NullAudioCue),
            chart,
            config,
        }
    }

    /// Decode a chart file and load it.
    pub fn open(path: &Path, config: EngineConfig) -> Result<Self, ChartError> {
        let chart = ChartDecoder::decode(path)?;
        Ok(Self::load(chart, config))
    }

    pub fn with_audio_cue(mut self, audio: Box<dyn LaneAudioCue>) -> Self {
        self.audio = audio;
        self
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn judge(&self) -> &JudgeManager {
        &self.judge
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn tick(&self) -> f64 {
        self.clock.tick()
    }

    /// Tick the next frame would be judged at, were it Playing.
    pub fn next_tick(&self, delta_seconds: f64) -> f64 {
        self.clock.peek(delta_seconds)
    }

    /// Wall-clock delta for the frame stamped `now`. 0 on the first frame after `start`.
    pub fn frame_delta(&mut self, now: Instant) -> f64 {
        self.timer.delta(now)
    }

    /// Menu -> Playing. Returns false if the session was not in the Menu.
    ///
    /// Input edge state carries over from the Menu frames, so a key or touch
    /// already down (such as the confirm tap) is not a press.
    pub fn start(&mut self) -> bool {
        if !self.session.start() {
            return false;
        }
        self.timer.reset();
        self.audio.start();
        info!("Session state: {} -> {}", SessionState::Menu, SessionState::Playing);
        true
    }

    /// Run one frame.
    pub fn advance(&mut self, delta_seconds: f64, input: &dyn InputBackend) -> FrameResult {
        let (lane_input, judgments) = match self.session.state() {
            SessionState::Menu => self.advance_idle(input),
            SessionState::Playing => self.advance_playing(delta_seconds, input),
            SessionState::Finished => self.advance_idle(input),
        };
        self.frame_result(lane_input, judgments)
    }

    /// Menu and Finished: the clock stands still and nothing is judged.
    fn advance_idle(&mut self, input: &dyn InputBackend) -> (LaneInput, Vec<JudgeEvent>) {
        (self.mapper.update(input), Vec::new())
    }

    fn advance_playing(
        &mut self,
        delta_seconds: f64,
        input: &dyn InputBackend,
    ) -> (LaneInput, Vec<JudgeEvent>) {
        let tick = self.clock.advance(delta_seconds);
        self.marks.tick();

        let mut judgments = self
            .playfield
            .update_positions(&self.chart, &mut self.judge, tick);
        for miss in &judgments {
            self.audio.mute(miss.lane);
        }

        let lane_input = self.mapper.update(input);
        for lane in lane_input.pressed_lanes() {
            if let Some(hit) = self.judge.press(&self.chart, lane, tick) {
                self.audio.unmute(lane);
                self.marks.trigger(lane);
                judgments.push(hit);
            }
        }

        if self.session.check_finish(tick) {
            self.audio.stop();
            self.marks.clear();
            info!(
                "Session state: {} -> {} at tick {tick:.1}, score {}",
                SessionState::Playing,
                SessionState::Finished,
                self.judge.score().score
            );
        }

        (lane_input, judgments)
    }

    fn frame_result(&self, lane_input: LaneInput, judgments: Vec<JudgeEvent>) -> FrameResult {
        let arena = self.judge.arena();
        let notes = self
            .chart
            .iter()
            .filter(|(id, _)| arena.is_active(*id))
            .map(|(id, note)| {
                let y = arena.screen_y(id);
                NotePosition {
                    id,
                    lane: note.lane,
                    y,
                    visible: self.playfield.is_visible(y),
                }
            })
            .collect();
        let score = self.judge.score();
        FrameResult {
            tick: self.clock.tick(),
            notes,
            lane_held: lane_input.held,
            lane_marks: self.marks.active(),
            score: score.score,
            lanes: score.lanes,
            session: self.session.state(),
            judgments,
        }
    }

    /// Score snapshot. Safe to call in any state.
    pub fn export_statistics(&self) -> Statistics {
        Statistics::from_score(self.judge.score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oldboys_input::{Key, Point, VirtualInput};
    use oldboys_model::Note;
    use oldboys_rule::Judgment;
    use std::time::Duration;

    fn engine(notes: &[(Lane, f64)]) -> PlayEngine {
        let chart = Chart::new(notes.iter().map(|&(l, t)| Note::new(l, t)).collect()).unwrap();
        PlayEngine::load(chart, EngineConfig::default())
    }

    #[test]
    fn loads_into_menu_with_initial_layout() {
        let e = engine(&[(Lane::Guitar, 100.0)]);
        assert_eq!(e.state(), SessionState::Menu);
        assert_eq!(e.tick(), 0.0);
        assert!((e.judge().arena().screen_y(NoteId(0)) - 268.0).abs() < 1e-9);
    }

    #[test]
    fn start_only_from_menu() {
        let mut e = engine(&[(Lane::Guitar, 100.0)]);
        assert!(e.start());
        assert!(!e.start());
        assert_eq!(e.state(), SessionState::Playing);
    }

    #[test]
    fn menu_frames_do_not_move_the_clock() {
        let mut e = engine(&[(Lane::Guitar, 0.0)]);
        let mut input = VirtualInput::new();
        input.press(Key::Left);

        let frame = e.advance(1.0, &input);
        assert_eq!(frame.tick, 0.0);
        assert_eq!(frame.session, SessionState::Menu);
        assert!(frame.lane_held[Lane::Guitar.index()]);
        assert!(frame.judgments.is_empty());
        assert_eq!(frame.score, 0);
    }

    #[test]
    fn key_held_through_start_is_not_a_press() {
        let mut e = engine(&[(Lane::Bass, 0.0), (Lane::Bass, 1000.0)]);
        let mut input = VirtualInput::new();
        input.press(Key::Right);
        e.advance(0.0, &input);

        e.start();
        let frame = e.advance(0.0, &input);
        assert!(frame.judgments.is_empty());
        assert!(frame.lane_held[Lane::Bass.index()]);
        assert!(e.judge().arena().is_active(NoteId(0)));

        // Release and press again: now it is an edge
        input.release(Key::Right);
        e.advance(0.0, &input);
        input.press(Key::Right);
        let frame = e.advance(0.0, &input);
        assert_eq!(frame.judgments.len(), 1);
        assert_eq!(frame.judgments[0].judgment, Judgment::Perfect);
    }

    #[test]
    fn confirm_touch_held_through_start_is_not_judged() {
        let mut e = engine(&[(Lane::Guitar, 0.0), (Lane::Guitar, 1000.0)]);
        let mut input = VirtualInput::new();
        input.touch(Point::new(510, 355));
        e.advance(0.0, &input);

        e.start();
        let frame = e.advance(0.0, &input);
        assert!(frame.judgments.is_empty());
        assert!(frame.lane_held[Lane::Guitar.index()]);
        assert_eq!(e.export_statistics().judged(), 0);
    }

    #[test]
    fn frame_delta_restarts_at_zero_on_start() {
        let t0 = Instant::now();
        let mut e = engine(&[(Lane::Drums, 100.0)]);
        e.frame_delta(t0);
        // Long stall in the Menu is not carried into the first Playing frame
        e.start();
        assert_eq!(e.frame_delta(t0 + Duration::from_secs(10)), 0.0);

        let dt = e.frame_delta(t0 + Duration::from_millis(10_250));
        assert!((dt - 0.25).abs() < 1e-9);
        let frame = e.advance(dt, &VirtualInput::new());
        assert!((frame.tick - 25.0).abs() < 1e-6);
    }

    #[test]
    fn hit_lights_lane_mark() {
        let mut e = engine(&[(Lane::Drums, 0.0), (Lane::Drums, 1000.0)]);
        e.start();
        let mut input = VirtualInput::new();
        input.press(Key::Down);
        let frame = e.advance(0.0, &input);
        assert!(frame.lane_marks[Lane::Drums.index()]);
        assert!(!frame.lane_marks[Lane::Guitar.index()]);

        input.release(Key::Down);
        for _ in 0..19 {
            assert!(e.advance(0.0, &input).lane_marks[Lane::Drums.index()]);
        }
        assert!(!e.advance(0.0, &input).lane_marks[Lane::Drums.index()]);
    }

    #[test]
    fn touch_press_judges_lane() {
        let mut e = engine(&[(Lane::Bass, 50.0)]);
        e.start();
        let mut input = VirtualInput::new();
        input.touch(Point::new(600, 360));

        let frame = e.advance(0.5, &input);
        assert_eq!(frame.judgments.len(), 1);
        assert_eq!(frame.judgments[0].lane, Lane::Bass);
        assert_eq!(frame.lanes[Lane::Bass.index()].perfect, 1);
        assert!(frame.notes.is_empty());
    }

    #[test]
    fn positions_report_visibility() {
        let mut e = engine(&[(Lane::Guitar, 100.0), (Lane::Guitar, 1000.0)]);
        e.start();
        let frame = e.advance(1.0, &VirtualInput::new());

        assert_eq!(frame.notes.len(), 2);
        assert_eq!(frame.notes[0].y, 338.0);
        assert!(frame.notes[0].visible);
        assert!(!frame.notes[1].visible);
    }
}

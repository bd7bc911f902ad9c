// Fixed-rate frame loop driving a PlayEngine without a window.

use log::{debug, info};
use oldboys_play::{Autoplay, PlayEngine, SessionState};

/// Outcome of a headless run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub finished: bool,
}

/// Frames needed to reach the finish threshold at `fps`, plus one second of slack.
pub fn frame_cap(engine: &PlayEngine, fps: u32) -> u64 {
    let config = engine.config();
    let finish_tick = engine.chart().max_tick() + config.finish_grace_ticks;
    let seconds = finish_tick / config.ticks_per_second;
    (seconds * f64::from(fps)).ceil() as u64 + u64::from(fps)
}

/// Start the session and step it at `1 / fps` seconds per frame until it
/// finishes or `max_frames` frames have run.
pub fn run(
    engine: &mut PlayEngine,
    driver: &mut Autoplay,
    fps: u32,
    max_frames: u64,
) -> RunSummary {
    let dt = 1.0 / f64::from(fps);
    engine.start();

    let mut frames = 0;
    while engine.state() == SessionState::Playing && frames < max_frames {
        let input = driver.input_for(engine.next_tick(dt));
        let frame = engine.advance(dt, input);
        for j in &frame.judgments {
            debug!("frame {frames}: {} {} ({:+.2})", j.lane, j.judgment, j.tick_diff);
        }
        frames += 1;
    }

    let finished = engine.state() == SessionState::Finished;
    info!("Ran {frames} frames at {fps} fps, finished: {finished}");
    RunSummary { frames, finished }
}

use oldboys_model::Lane;

/// Per-lane audio feedback owned by the host.
///
/// Each lane has its own stem: a miss mutes the lane, the next hit brings it
/// back. Playback itself stays outside the engine.
pub trait LaneAudioCue {
    fn mute(&mut self, lane: Lane);

    fn unmute(&mut self, lane: Lane);

    /// Playing began: every lane starts audible.
    fn start(&mut self) {}

    /// The session finished.
    fn stop(&mut self) {}
}

/// Silent cue for headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudioCue;

impl LaneAudioCue for NullAudioCue {
    fn mute(&mut self, _lane: Lane) {}

    fn unmute(&mut self, _lane: Lane) {}
}

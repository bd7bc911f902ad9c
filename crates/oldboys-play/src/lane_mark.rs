use oldboys_model::{LANE_COUNT, Lane};

/// Hit indicators: each lane's mark stays lit for a fixed number of frames.
#[derive(Debug, Clone)]
pub struct LaneMarks {
    remaining: [u32; LANE_COUNT],
    duration: u32,
}

impl LaneMarks {
    pub fn new(duration_frames: u32) -> Self {
        Self {
            remaining: [0; LANE_COUNT],
            duration: duration_frames,
        }
    }

    /// Light the lane's mark, restarting its countdown.
    pub fn trigger(&mut self, lane: Lane) {
        self.remaining[lane.index()] = self.duration;
    }

    /// Count down one frame.
    pub fn tick(&mut self) {
        for r in &mut self.remaining {
            *r = r.saturating_sub(1);
        }
    }

    pub fn is_active(&self, lane: Lane) -> bool {
        self.remaining[lane.index()] > 0
    }

    pub fn active(&self) -> [bool; LANE_COUNT] {
        self.remaining.map(|r| r > 0)
    }

    pub fn clear(&mut self) {
        self.remaining = [0; LANE_COUNT];
    }
}

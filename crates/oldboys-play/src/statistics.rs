use oldboys_model::{LANE_COUNT, Lane};
use oldboys_rule::ScoreData;
use serde::{Deserialize, Serialize};

/// Judgment counters of one lane, tagged with the lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneStatistics {
    pub lane: Lane,
    pub perfect: u32,
    pub good: u32,
    pub miss: u32,
}

/// Read-only score snapshot handed to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub score: u64,
    pub lanes: [LaneStatistics; LANE_COUNT],
}

impl Statistics {
    pub fn from_score(score: &ScoreData) -> Self {
        Self {
            score: score.score,
            lanes: Lane::ALL.map(|lane| {
                let s = score.lane(lane);
                LaneStatistics {
                    lane,
                    perfect: s.perfect,
                    good: s.good,
                    miss: s.miss,
                }
            }),
        }
    }

    pub fn lane(&self, lane: Lane) -> &LaneStatistics {
        &self.lanes[lane.index()]
    }

    /// Notes resolved so far.
    pub fn judged(&self) -> u32 {
        self.lanes.iter().map(|l| l.perfect + l.good + l.miss).sum()
    }
}

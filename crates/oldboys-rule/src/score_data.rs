use oldboys_model::{LANE_COUNT, Lane};
use serde::{Deserialize, Serialize};

use crate::judge_property::JudgeProperty;
use crate::judgment::Judgment;

/// Judgment counters for one lane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneScore {
    pub perfect: u32,
    pub good: u32,
    pub miss: u32,
}

impl LaneScore {
    pub fn count(&self, judgment: Judgment) -> u32 {
        match judgment {
            Judgment::Perfect => self.perfect,
            Judgment::Good => self.good,
            Judgment::Miss => self.miss,
        }
    }

    pub fn total(&self) -> u32 {
        self.perfect + self.good + self.miss
    }
}

/// Running score and per-lane counters for a play session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreData {
    pub score: u64,
    pub lanes: [LaneScore; LANE_COUNT],
}

impl ScoreData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a judgment in a lane and add its value to the score.
    pub fn add(&mut self, lane: Lane, judgment: Judgment, property: &JudgeProperty) {
        let counters = &mut self.lanes[lane.index()];
        match judgment {
            Judgment::Perfect => counters.perfect += 1,
            Judgment::Good => counters.good += 1,
            Judgment::Miss => counters.miss += 1,
        }
        self.score += u64::from(property.value(judgment));
    }

    pub fn lane(&self, lane: Lane) -> &LaneScore {
        &self.lanes[lane.index()]
    }

    /// Total count of a judgment across all lanes.
    pub fn judge_count(&self, judgment: Judgment) -> u32 {
        self.lanes.iter().map(|l| l.count(judgment)).sum()
    }

    /// Number of notes resolved so far.
    pub fn judged(&self) -> u32 {
        self.lanes.iter().map(LaneScore::total).sum()
    }

    /// Score implied by the counters alone.
    pub fn expected_score(&self, property: &JudgeProperty) -> u64 {
        self.lanes
            .iter()
            .map(|l| {
                u64::from(l.perfect) * u64::from(property.perfect_value)
                    + u64::from(l.good) * u64::from(property.good_value)
                    + u64::from(l.miss) * u64::from(property.miss_value)
            })
            .sum()
    }

    /// True while the running score equals the counter-derived score.
    pub fn is_consistent(&self, property: &JudgeProperty) -> bool {
        self.score == self.expected_score(property)
    }
}

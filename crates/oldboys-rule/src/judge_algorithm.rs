use serde::{Deserialize, Serialize};

/// Rule for choosing which active note in a lane a press is judged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JudgeAlgorithm {
    /// Nearest-first: the note closest in time to the press. Equal distance
    /// goes to the earlier scheduled tick, then to chart order.
    #[default]
    Nearest,
    /// Lowest-first: the first active note in chart order, however far away.
    Lowest,
}

impl JudgeAlgorithm {
    /// Decide whether candidate t2 replaces the current pick t1.
    ///
    /// Candidates are offered in chart order, so keeping t1 on a full tie
    /// keeps the lower chart index.
    pub fn compare(self, t1_tick: f64, t2_tick: f64, press_tick: f64) -> bool {
        match self {
            Self::Nearest => {
                let d1 = (t1_tick - press_tick).abs();
                let d2 = (t2_tick - press_tick).abs();
                d2 < d1 || (d2 == d1 && t2_tick < t1_tick)
            }
            Self::Lowest => false,
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::judge_algorithm::JudgeAlgorithm;
use crate::judgment::Judgment;

/// Judge timing windows in ticks, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeWindow {
    pub perfect: f64,
    pub good: f64,
}

impl JudgeWindow {
    /// Determine the judgment for an absolute tick difference.
    ///
    /// Returns `None` outside the good window: such a press resolves nothing.
    pub fn judge(&self, diff_abs: f64) -> Option<Judgment> {
        if diff_abs <= self.perfect {
            Some(Judgment::Perfect)
        } else if diff_abs <= self.good {
            Some(Judgment::Good)
        } else {
            None
        }
    }
}

impl Default for JudgeWindow {
    fn default() -> Self {
        Self {
            perfect: 10.0,
            good: 20.0,
        }
    }
}

/// Judge windows, score values and note selection rule for one session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct JudgeProperty {
    pub perfect_window: f64,
    pub good_window: f64,
    pub perfect_value: u32,
    pub good_value: u32,
    pub miss_value: u32,
    pub algorithm: JudgeAlgorithm,
}

impl Default for JudgeProperty {
    fn default() -> Self {
        let window = JudgeWindow::default();
        Self {
            perfect_window: window.perfect,
            good_window: window.good,
            perfect_value: 100,
            good_value: 50,
            miss_value: 0,
            algorithm: JudgeAlgorithm::default(),
        }
    }
}

impl JudgeProperty {
    pub fn window(&self) -> JudgeWindow {
        JudgeWindow {
            perfect: self.perfect_window,
            good: self.good_window,
        }
    }

    pub fn judge(&self, diff_abs: f64) -> Option<Judgment> {
        self.window().judge(diff_abs)
    }

    /// Score added for a judgment.
    pub fn value(&self, judgment: Judgment) -> u32 {
        match judgment {
            Judgment::Perfect => self.perfect_value,
            Judgment::Good => self.good_value,
            Judgment::Miss => self.miss_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_windows() {
        let prop = JudgeProperty::default();
        assert!((prop.perfect_window - 10.0).abs() < f64::EPSILON);
        assert!((prop.good_window - 20.0).abs() < f64::EPSILON);
        assert_eq!(prop.value(Judgment::Perfect), 100);
        assert_eq!(prop.value(Judgment::Good), 50);
        assert_eq!(prop.value(Judgment::Miss), 0);
    }

    #[test]
    fn windows_are_inclusive() {
        let window = JudgeWindow::default();
        assert_eq!(window.judge(0.0), Some(Judgment::Perfect));
        assert_eq!(window.judge(10.0), Some(Judgment::Perfect));
        assert_eq!(window.judge(10.0001), Some(Judgment::Good));
        assert_eq!(window.judge(20.0), Some(Judgment::Good));
        assert_eq!(window.judge(20.0001), None);
        assert_eq!(window.judge(500.0), None);
    }

    #[test]
    fn serde_camel_case_with_defaults() {
        let prop: JudgeProperty =
            serde_json::from_str(r#"{"perfectWindow": 5.0, "algorithm": "lowest"}"#).unwrap();
        assert!((prop.perfect_window - 5.0).abs() < f64::EPSILON);
        assert!((prop.good_window - 20.0).abs() < f64::EPSILON);
        assert_eq!(prop.algorithm, JudgeAlgorithm::Lowest);
    }
}

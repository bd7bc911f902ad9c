use std::path::Path;

use anyhow::Result;
use log::warn;
use oldboys_input::{LaneBinding, default_bindings};
use oldboys_model::{LANE_COUNT, Lane};
use oldboys_rule::JudgeProperty;
use serde::{Deserialize, Serialize};

/// Engine configuration (engine.json).
///
/// Ticks are the engine's virtual time unit; screen values are pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct EngineConfig {
    /// Virtual clock rate.
    pub ticks_per_second: f64,
    /// Pixels a note falls per tick.
    pub note_speed: f64,
    /// Y of the hit line: a note sits here when its tick is the current tick.
    pub hit_zone_y: f64,
    /// Top of the judgment band.
    pub judgment_zone_top: f64,
    /// Height of the judgment band. A note below its bottom edge is missed.
    pub judgment_zone_height: f64,
    /// Ticks after the last note before the session finishes.
    pub finish_grace_ticks: f64,
    /// Frames a lane's hit mark stays visible.
    pub mark_duration_frames: u32,
    pub judge: JudgeProperty,
    pub lanes: Vec<LaneBinding>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 100.0,
            note_speed: 0.7,
            hit_zone_y: 338.0,
            judgment_zone_top: 200.0,
            judgment_zone_height: 145.0,
            finish_grace_ticks: 300.0,
            mark_duration_frames: 20,
            judge: JudgeProperty::default(),
            lanes: default_bindings().to_vec(),
        }
    }
}

fn positive_or(value: f64, default: f64, name: &str) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        warn!("{name} = {value} is invalid, using {default}");
        default
    }
}

fn non_negative_or(value: f64, default: f64, name: &str) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!("{name} = {value} is invalid, using {default}");
        default
    }
}

fn finite_or(value: f64, default: f64, name: &str) -> f64 {
    if value.is_finite() {
        value
    } else {
        warn!("{name} = {value} is invalid, using {default}");
        default
    }
}

impl EngineConfig {
    /// Bottom edge of the judgment band.
    pub fn judgment_zone_bottom(&self) -> f64 {
        self.judgment_zone_top + self.judgment_zone_height
    }

    /// Clamp all values to valid ranges, falling back to defaults.
    pub fn validate(&mut self) {
        let d = Self::default();

        self.ticks_per_second =
            positive_or(self.ticks_per_second, d.ticks_per_second, "ticksPerSecond");
        self.note_speed = positive_or(self.note_speed, d.note_speed, "noteSpeed");
        self.hit_zone_y = finite_or(self.hit_zone_y, d.hit_zone_y, "hitZoneY");
        self.judgment_zone_top =
            finite_or(self.judgment_zone_top, d.judgment_zone_top, "judgmentZoneTop");
        self.judgment_zone_height = non_negative_or(
            self.judgment_zone_height,
            d.judgment_zone_height,
            "judgmentZoneHeight",
        );
        self.finish_grace_ticks =
            non_negative_or(self.finish_grace_ticks, d.finish_grace_ticks, "finishGraceTicks");
        self.mark_duration_frames = self.mark_duration_frames.clamp(1, 600);

        self.judge.perfect_window = non_negative_or(
            self.judge.perfect_window,
            d.judge.perfect_window,
            "judge.perfectWindow",
        );
        self.judge.good_window =
            non_negative_or(self.judge.good_window, d.judge.good_window, "judge.goodWindow");
        if self.judge.good_window < self.judge.perfect_window {
            warn!(
                "judge.goodWindow {} is narrower than judge.perfectWindow {}, widening",
                self.judge.good_window, self.judge.perfect_window
            );
            self.judge.good_window = self.judge.perfect_window;
        }

        // Exactly one binding per lane, stored in lane order
        let mut bound: [Option<LaneBinding>; LANE_COUNT] = [None; LANE_COUNT];
        let mut duplicate = false;
        for binding in &self.lanes {
            let slot = &mut bound[binding.lane.index()];
            duplicate |= slot.is_some();
            *slot = Some(*binding);
        }
        if duplicate || bound.iter().any(Option::is_none) {
            warn!("lane bindings must cover each lane exactly once, using defaults");
            self.lanes = d.lanes;
        } else {
            self.lanes = bound.into_iter().flatten().collect();
        }
    }

    /// Lane bindings indexed by lane.
    pub fn lane_bindings(&self) -> [LaneBinding; LANE_COUNT] {
        let mut out = default_bindings();
        for lane in Lane::ALL {
            if let Some(b) = self.lanes.iter().find(|b| b.lane == lane) {
                out[lane.index()] = *b;
            }
        }
        out
    }

    /// Read config from a JSON file, then validate.
    pub fn read(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let mut config: EngineConfig = serde_json::from_str(&data)?;
        config.validate();
        Ok(config)
    }

    /// Write config to a JSON file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oldboys_input::Key;
    use oldboys_rule::JudgeAlgorithm;

    #[test]
    fn test_defaults() {
        let c = EngineConfig::default();
        assert!((c.ticks_per_second - 100.0).abs() < f64::EPSILON);
        assert!((c.note_speed - 0.7).abs() < f64::EPSILON);
        assert!((c.hit_zone_y - 338.0).abs() < f64::EPSILON);
        assert!((c.judgment_zone_bottom() - 345.0).abs() < f64::EPSILON);
        assert!((c.finish_grace_ticks - 300.0).abs() < f64::EPSILON);
        assert_eq!(c.judge.perfect_value, 100);
        assert_eq!(c.judge.algorithm, JudgeAlgorithm::Nearest);
        assert_eq!(c.lanes.len(), LANE_COUNT);
    }

    #[test]
    fn test_validate_keeps_defaults_intact() {
        let mut c = EngineConfig::default();
        c.validate();
        assert_eq!(c, EngineConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_rates() {
        let mut c = EngineConfig {
            ticks_per_second: 0.0,
            note_speed: f64::NAN,
            judgment_zone_height: -1.0,
            finish_grace_ticks: f64::INFINITY,
            mark_duration_frames: 0,
            ..Default::default()
        };
        c.validate();
        assert!((c.ticks_per_second - 100.0).abs() < f64::EPSILON);
        assert!((c.note_speed - 0.7).abs() < f64::EPSILON);
        assert!((c.judgment_zone_height - 145.0).abs() < f64::EPSILON);
        assert!((c.finish_grace_ticks - 300.0).abs() < f64::EPSILON);
        assert_eq!(c.mark_duration_frames, 1);
    }

    #[test]
    fn test_validate_widens_good_window() {
        let mut c = EngineConfig::default();
        c.judge.perfect_window = 15.0;
        c.judge.good_window = 12.0;
        c.validate();
        assert!((c.judge.good_window - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_sorts_bindings_by_lane() {
        let mut c = EngineConfig::default();
        c.lanes.reverse();
        c.validate();
        let lanes: Vec<Lane> = c.lanes.iter().map(|b| b.lane).collect();
        assert_eq!(lanes, Lane::ALL.to_vec());
    }

    #[test]
    fn test_validate_replaces_incomplete_bindings() {
        let mut c = EngineConfig::default();
        c.lanes.pop();
        c.validate();
        assert_eq!(c.lanes, default_bindings().to_vec());

        let mut c = EngineConfig::default();
        c.lanes[2] = c.lanes[0];
        c.validate();
        assert_eq!(c.lanes, default_bindings().to_vec());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{"ticksPerSecond": 120.0, "judge": {"goodWindow": 25.0}}"#;
        let c: EngineConfig = serde_json::from_str(json).unwrap();
        assert!((c.ticks_per_second - 120.0).abs() < f64::EPSILON);
        assert!((c.judge.good_window - 25.0).abs() < f64::EPSILON);
        assert!((c.judge.perfect_window - 10.0).abs() < f64::EPSILON);
        assert_eq!(c.lane_bindings(), default_bindings());
    }

    #[test]
    fn test_custom_key_binding() {
        let mut c = EngineConfig::default();
        c.lanes[1].key = Key::F;
        c.validate();
        assert_eq!(c.lane_bindings()[Lane::Drums.index()].key, Key::F);
    }

    #[test]
    fn test_read_write_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.json");

        let mut config = EngineConfig::default();
        config.note_speed = 1.25;
        config.judge.algorithm = JudgeAlgorithm::Lowest;
        config.write(&path).unwrap();

        let loaded = EngineConfig::read(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(EngineConfig::read(&dir.path().join("nope.json")).is_err());
    }
}

// Scripted input: a JSON list of lane presses at given ticks.

use std::path::Path;

use anyhow::{Context, Result, bail};
use oldboys_model::Lane;
use serde::{Deserialize, Serialize};

/// One key press, issued on the first frame at or past `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptedPress {
    pub tick: f64,
    pub lane: Lane,
}

pub fn parse_script(data: &str) -> Result<Vec<ScriptedPress>> {
    let presses: Vec<ScriptedPress> = serde_json::from_str(data)?;
    for (i, p) in presses.iter().enumerate() {
        if !p.tick.is_finite() || p.tick < 0.0 {
            bail!("press {i}: tick {} is not a non-negative number", p.tick);
        }
    }
    Ok(presses)
}

pub fn read_script(path: &Path) -> Result<Vec<ScriptedPress>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading input script {}", path.display()))?;
    parse_script(&data).with_context(|| format!("parsing input script {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lane_names() {
        let presses =
            parse_script(r#"[{"tick": 100, "lane": "guitar"}, {"tick": 150.5, "lane": "bass"}]"#)
                .unwrap();
        assert_eq!(presses.len(), 2);
        assert_eq!(presses[0].lane, Lane::Guitar);
        assert_eq!(presses[1].tick, 150.5);
    }

    #[test]
    fn rejects_negative_tick() {
        assert!(parse_script(r#"[{"tick": -1, "lane": "drums"}]"#).is_err());
    }

    #[test]
    fn rejects_unknown_lane() {
        assert!(parse_script(r#"[{"tick": 1, "lane": "keys"}]"#).is_err());
    }

    #[test]
    fn read_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inputs.json");
        std::fs::write(&path, "not json").unwrap();
        let err = read_script(&path).unwrap_err();
        assert!(format!("{err:#}").contains("inputs.json"));
    }
}

//! Note positions on screen and the time-based miss rule.
//!
//! Notes fall towards the hit line: a note sits exactly on `hit_zone_y` when
//! its scheduled tick equals the current tick, above it while early and below
//! it while late. Once a note has scrolled past the bottom of the judgment
//! band unplayed it is missed. This is the only path that produces a miss.

use log::debug;
use oldboys_config::EngineConfig;
use oldboys_model::Chart;
use oldboys_rule::{JudgeEvent, JudgeManager, NoteArena};

/// Screen geometry of the note field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub hit_zone_y: f64,
    pub note_speed: f64,
    pub zone_top: f64,
    pub zone_bottom: f64,
}

impl Playfield {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            hit_zone_y: config.hit_zone_y,
            note_speed: config.note_speed,
            zone_top: config.judgment_zone_top,
            zone_bottom: config.judgment_zone_bottom(),
        }
    }

    pub fn screen_y(&self, note_tick: f64, current_tick: f64) -> f64 {
        self.hit_zone_y - (note_tick - current_tick) * self.note_speed
    }

    /// Strictly below the bottom edge of the judgment band.
    pub fn is_past_zone(&self, y: f64) -> bool {
        y > self.zone_bottom
    }

    /// Inside or below the judgment band, i.e. drawn.
    pub fn is_visible(&self, y: f64) -> bool {
        y >= self.zone_top
    }

    /// Recompute positions of active notes without judging anything.
    pub fn layout(&self, chart: &Chart, arena: &mut NoteArena, current_tick: f64) {
        for (id, note) in chart.iter() {
            if arena.is_active(id) {
                arena.set_screen_y(id, self.screen_y(note.tick, current_tick));
            }
        }
    }

    /// Recompute positions of active notes and miss those past the band.
    pub fn update_positions(
        &self,
        chart: &Chart,
        judge: &mut JudgeManager,
        current_tick: f64,
    ) -> Vec<JudgeEvent> {
        let mut misses = Vec::new();
        for (id, note) in chart.iter() {
            if !judge.arena().is_active(id) {
                continue;
            }
            let y = self.screen_y(note.tick, current_tick);
            judge.arena_mut().set_screen_y(id, y);
            if self.is_past_zone(y) {
                debug!("note {} left the judgment zone at y={y:.1}", id.index());
                misses.push(judge.miss(chart, id, current_tick));
            }
        }
        misses
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

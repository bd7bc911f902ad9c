// InputMapper: maps raw keyboard/pointer state to per-lane levels and edges.
//
// The held level feeds lane visuals only. Judgment is driven by the edge,
// so a key held across many frames is judged once.

use oldboys_model::{LANE_COUNT, Lane};

use crate::backend::InputBackend;
use crate::binding::{LaneBinding, default_bindings};
use crate::geometry::Rect;

/// Result of a single frame's input mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaneInput {
    /// Key held or pointer inside the lane region this frame
    pub held: [bool; LANE_COUNT],
    /// Key went down, or the pointer entered the lane region, this frame
    pub just_pressed: [bool; LANE_COUNT],
}

impl LaneInput {
    pub fn is_held(&self, lane: Lane) -> bool {
        self.held[lane.index()]
    }

    pub fn is_just_pressed(&self, lane: Lane) -> bool {
        self.just_pressed[lane.index()]
    }

    /// Lanes with a press edge this frame, in lane order.
    pub fn pressed_lanes(&self) -> impl Iterator<Item = Lane> + '_ {
        Lane::ALL
            .into_iter()
            .filter(|lane| self.just_pressed[lane.index()])
    }
}

/// State tracker for detecting press edges (down this frame, not last frame).
#[derive(Debug, Clone)]
pub struct InputMapper {
    bindings: [LaneBinding; LANE_COUNT],
    prev_key: [bool; LANE_COUNT],
    prev_pointer: [bool; LANE_COUNT],
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new(default_bindings())
    }
}

impl InputMapper {
    pub fn new(bindings: [LaneBinding; LANE_COUNT]) -> Self {
        Self {
            bindings,
            prev_key: [false; LANE_COUNT],
            prev_pointer: [false; LANE_COUNT],
        }
    }

    /// Poll the backend once for this frame.
    pub fn update(&mut self, backend: &dyn InputBackend) -> LaneInput {
        let probe = backend.pointer().map(Rect::probe);
        let mut out = LaneInput::default();

        for binding in &self.bindings {
            let i = binding.lane.index();
            let key_down = backend.is_key_pressed(binding.key);
            let pointer_inside = probe.is_some_and(|p| p.is_inside(&binding.touch));

            out.held[i] = key_down || pointer_inside;
            out.just_pressed[i] =
                (key_down && !self.prev_key[i]) || (pointer_inside && !self.prev_pointer[i]);

            self.prev_key[i] = key_down;
            self.prev_pointer[i] = pointer_inside;
        }

        out
    }
}

use oldboys_model::{LANE_COUNT, Lane};
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::key::Key;

/// Input controls and display color bound to one lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneBinding {
    pub lane: Lane,
    pub key: Key,
    /// On-screen region that counts as this lane's button
    pub touch: Rect,
    /// RGBA
    pub color: [u8; 4],
}

/// The stock bindings: arrow keys and the three buttons under the note field.
pub fn default_bindings() -> [LaneBinding; LANE_COUNT] {
    [
        LaneBinding {
            lane: Lane::Guitar,
            key: Key::Left,
            touch: Rect::new(500, 348, 536, 374),
            color: [150, 75, 0, 255],
        },
        LaneBinding {
            lane: Lane::Drums,
            key: Key::Down,
            touch: Rect::new(547, 348, 581, 374),
            color: [255, 255, 255, 255],
        },
        LaneBinding {
            lane: Lane::Bass,
            key: Key::Right,
            touch: Rect::new(586, 348, 621, 374),
            color: [100, 255, 100, 255],
        },
    ]
}

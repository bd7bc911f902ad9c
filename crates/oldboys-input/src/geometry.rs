use serde::{Deserialize, Serialize};

/// Side length of the square probe placed at a pointer position.
pub const POINTER_PROBE_SIZE: i32 = 5;

/// Screen position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, `min` inclusive and `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Build a rectangle from two corners in any order.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// The probe rectangle tested against lane regions for a pointer at `p`.
    ///
    /// Always `POINTER_PROBE_SIZE` square: at the coordinate limit the probe
    /// is pulled back so its far edge sits on `i32::MAX`.
    pub fn probe(p: Point) -> Self {
        let x = p.x.min(i32::MAX - POINTER_PROBE_SIZE);
        let y = p.y.min(i32::MAX - POINTER_PROBE_SIZE);
        Self::new(x, y, x + POINTER_PROBE_SIZE, y + POINTER_PROBE_SIZE)
    }

    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// True when every point of `self` lies inside `outer`. An empty
    /// rectangle is inside everything.
    pub fn is_inside(&self, outer: &Rect) -> bool {
        if self.is_empty() {
            return true;
        }
        outer.min.x <= self.min.x
            && self.max.x <= outer.max.x
            && outer.min.y <= self.min.y
            && self.max.y <= outer.max.y
    }
}

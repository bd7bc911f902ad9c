use std::collections::HashSet;

use crate::geometry::Point;
use crate::key::Key;

/// Platform abstraction for one frame's raw input.
pub trait InputBackend {
    /// Returns `true` if the key is currently held down.
    fn is_key_pressed(&self, key: Key) -> bool;

    /// Position of the first reported touch point, if any.
    fn first_touch(&self) -> Option<Point>;

    /// Cursor position if the primary mouse button went down this frame.
    fn mouse_click(&self) -> Option<Point>;

    /// The single pointer evaluated this frame: the first touch wins over a click.
    ///
    /// Further touch points are not evaluated, so two fingers on two lanes
    /// only register the first one.
    fn pointer(&self) -> Option<Point> {
        self.first_touch().or_else(|| self.mouse_click())
    }
}

/// Virtual input backend for testing, autoplay and scripted replays.
#[derive(Debug, Clone, Default)]
pub struct VirtualInput {
    pressed: HashSet<Key>,
    touches: Vec<Point>,
    click: Option<Point>,
}

impl VirtualInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.pressed.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    /// Add a touch point. Points are reported in insertion order.
    pub fn touch(&mut self, p: Point) {
        self.touches.push(p);
    }

    pub fn clear_touches(&mut self) {
        self.touches.clear();
    }

    pub fn click(&mut self, p: Point) {
        self.click = Some(p);
    }

    pub fn clear_click(&mut self) {
        self.click = None;
    }
}

impl InputBackend for VirtualInput {
    fn is_key_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    fn first_touch(&self) -> Option<Point> {
        self.touches.first().copied()
    }

    fn mouse_click(&self) -> Option<Point> {
        self.click
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        let mut input = VirtualInput::new();
        input.press(Key::Left);
        assert!(input.is_key_pressed(Key::Left));
        assert!(!input.is_key_pressed(Key::Right));
        input.release(Key::Left);
        assert!(!input.is_key_pressed(Key::Left));
    }

    #[test]
    fn first_touch_overrides_click() {
        let mut input = VirtualInput::new();
        input.click(Point::new(1, 1));
        assert_eq!(input.pointer(), Some(Point::new(1, 1)));

        input.touch(Point::new(10, 10));
        input.touch(Point::new(20, 20));
        assert_eq!(input.pointer(), Some(Point::new(10, 10)));

        input.clear_touches();
        input.clear_click();
        assert_eq!(input.pointer(), None);
    }
}

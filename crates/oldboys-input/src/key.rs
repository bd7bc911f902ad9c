use serde::{Deserialize, Serialize};

/// Physical keys a lane can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Left,
    Down,
    Up,
    Right,
    Enter,
    Space,
    Escape,
    A,
    S,
    D,
    F,
    J,
    K,
    L,
}

use serde::{Deserialize, Serialize};

/// Number of playable lanes.
pub const LANE_COUNT: usize = 3;

/// A playable lane. Each lane carries one instrument stem of the song.
///
/// The discriminants are the lane values used by chart files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Guitar = 0,
    Drums = 1,
    Bass = 2,
}

impl Lane {
    /// All lanes in index order.
    pub const ALL: [Lane; LANE_COUNT] = [Lane::Guitar, Lane::Drums, Lane::Bass];

    /// Returns the index for this lane (for array indexing).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Convert a raw chart lane value. Returns `None` for values outside the lane set.
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Guitar),
            1 => Some(Self::Drums),
            2 => Some(Self::Bass),
            _ => None,
        }
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Guitar => write!(f, "Guitar"),
            Self::Drums => write!(f, "Drums"),
            Self::Bass => write!(f, "Bass"),
        }
    }
}

use serde::{Deserialize, Serialize};

/// Outcome of resolving a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Judgment {
    Perfect,
    Good,
    Miss,
}

impl std::fmt::Display for Judgment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Perfect => write!(f, "PERFECT"),
            Self::Good => write!(f, "GOOD"),
            Self::Miss => write!(f, "MISS"),
        }
    }
}

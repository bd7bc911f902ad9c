// Keyboard and pointer input: lane bindings and per-frame edge detection

mod backend;
mod binding;
mod geometry;
mod key;
mod mapper;

pub use backend::{InputBackend, VirtualInput};
pub use binding::{LaneBinding, default_bindings};
pub use geometry::{POINTER_PROBE_SIZE, Point, Rect};
pub use key::Key;
pub use mapper::{InputMapper, LaneInput};

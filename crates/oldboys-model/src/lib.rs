// Chart data model: lanes, notes, chart validation and decoding

mod chart;
mod decode;
mod error;
mod lane;
mod note;

pub use chart::Chart;
pub use decode::{ChartDecoder, NoteRecord};
pub use error::ChartError;
pub use lane::{LANE_COUNT, Lane};
pub use note::{Note, NoteId};

// Chart payload decoder.
//
// The payload is a JSON array of `{lane, tick}` records. The capitalised
// `{Lane, Tick}` spelling written by older chart exporters is accepted
// too; any other fields (runtime state dumped alongside) are ignored.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::error::ChartError;
use crate::lane::Lane;
use crate::note::Note;

/// One raw chart entry before validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteRecord {
    #[serde(alias = "Lane")]
    pub lane: i64,
    #[serde(alias = "Tick")]
    pub tick: f64,
}

/// Chart file decoder
pub struct ChartDecoder;

impl ChartDecoder {
    pub fn decode(path: &Path) -> Result<Chart, ChartError> {
        let data = std::fs::read_to_string(path).map_err(|source| ChartError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let chart = Self::decode_str(&data)?;
        info!(
            "Loaded chart {}: {} notes, max tick {}",
            path.display(),
            chart.len(),
            chart.max_tick()
        );
        Ok(chart)
    }

    pub fn decode_str(data: &str) -> Result<Chart, ChartError> {
        let records: Vec<NoteRecord> = serde_json::from_str(data)?;
        Self::from_records(&records)
    }

    /// Validate raw records into a chart. Fails on the first bad record.
    pub fn from_records(records: &[NoteRecord]) -> Result<Chart, ChartError> {
        let notes = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let lane = Lane::from_index(record.lane).ok_or(ChartError::InvalidLane {
                    index,
                    lane: record.lane,
                })?;
                Ok(Note::new(lane, record.tick))
            })
            .collect::<Result<Vec<_>, ChartError>>()?;
        Chart::new(notes)
    }
}

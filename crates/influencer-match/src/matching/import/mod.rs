//! Loading campaign profiles, weight tables and candidate exports from disk or memory.

mod parser;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::candidate::Candidate;
use super::profile::CampaignProfile;
use super::weights::WeightTable;

#[derive(Debug, thiserror::Error)]
pub enum CandidateImportError {
    #[error("failed to read matching input: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON matching input: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid candidate CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Candidate exports either arrive as a bare array or wrapped in the data store's envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum CandidatePayload {
    Records(Vec<Value>),
    Envelope { data: Vec<Value> },
}

impl CandidatePayload {
    fn into_records(self) -> Vec<Value> {
        match self {
            CandidatePayload::Records(records) => records,
            CandidatePayload::Envelope { data } => data,
        }
    }
}

pub struct CandidateImporter;

impl CandidateImporter {
    /// Reads a `.csv` export as CSV and anything else as JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Candidate>, CandidateImportError> {
        let path = path.as_ref();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            Self::from_csv_path(path)
        } else {
            Self::from_json_path(path)
        }
    }

    pub fn from_json_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<Candidate>, CandidateImportError> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<Candidate>, CandidateImportError> {
        let payload: CandidatePayload = serde_json::from_reader(reader)?;
        Ok(Self::from_values(payload.into_records()))
    }

    /// Converts loose records; entries that are not JSON objects are skipped.
    pub fn from_values(records: Vec<Value>) -> Vec<Candidate> {
        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| {
                if !record.is_object() {
                    warn!(index, "skipping candidate record that is not an object");
                    return None;
                }
                match serde_json::from_value::<Candidate>(record) {
                    Ok(candidate) => Some(candidate),
                    Err(err) => {
                        warn!(index, error = %err, "skipping unreadable candidate record");
                        None
                    }
                }
            })
            .collect()
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Vec<Candidate>, CandidateImportError> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<Candidate>, CandidateImportError> {
        Ok(parser::parse_csv(reader)?)
    }
}

pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<CampaignProfile, CandidateImportError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

pub fn load_weight_table<P: AsRef<Path>>(path: P) -> Result<WeightTable, CandidateImportError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

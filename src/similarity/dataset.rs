//! Word-pair datasets
//!
//! CSV files with a header row. Two shapes are used: human-rated pairs
//! (WordSim353 style) and pairs rated by two annotators.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::{LexSenseError, Result};

/// A word pair with a human similarity judgement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedPair {
    #[serde(rename = "Word 1", alias = "Word1")]
    pub word1: String,
    #[serde(rename = "Word 2", alias = "Word2")]
    pub word2: String,
    #[serde(rename = "Human", alias = "Human (mean)")]
    pub human: f64,
}

/// A word pair rated independently by two annotators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedPair {
    #[serde(rename = "Word1")]
    pub word1: String,
    #[serde(rename = "Word2")]
    pub word2: String,
    #[serde(rename = "Val1")]
    pub first: f64,
    #[serde(rename = "Val2")]
    pub second: f64,
}

/// Deserialize every record of a CSV file with headers
pub fn read_records<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LexSenseError::ResourceRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);
    parse_records(reader)
}

/// Deserialize every record from CSV text with headers
pub fn parse_records_str<T: DeserializeOwned>(text: &str) -> Result<Vec<T>> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    parse_records(reader)
}

fn parse_records<T: DeserializeOwned, R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<T>> {
    let mut records = Vec::new();
    for (i, record) in reader.deserialize().enumerate() {
        // Line 1 is the header.
        let record = record.map_err(|err| LexSenseError::malformed_dataset(i + 2, err.to_string()))?;
        records.push(record);
    }
    Ok(records)
}

/// Write serializable rows as CSV with a header
pub fn write_records<T: Serialize>(path: impl AsRef<Path>, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

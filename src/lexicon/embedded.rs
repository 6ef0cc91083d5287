//! Dense sense embeddings
//!
//! One vector per line, keyed by sense id:
//!
//! ```text
//! bn:00000001n__Banca\t0.0123\t-0.4410\t...
//! ```

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::errors::{LexSenseError, Result};

/// A sense vector
#[derive(Debug, Clone, PartialEq)]
pub struct SenseVector {
    pub synset_id: String,
    pub lemma: String,
    pub values: Vec<f64>,
}

/// Sense vectors indexed by sense id
#[derive(Debug, Clone, Default)]
pub struct SenseEmbeddings {
    vectors: Vec<SenseVector>,
    by_id: FxHashMap<String, usize>,
}

impl SenseEmbeddings {
    pub fn from_vectors(vectors: Vec<SenseVector>) -> Self {
        let mut by_id = FxHashMap::default();
        for (i, v) in vectors.iter().enumerate() {
            // The first vector for an id wins.
            by_id.entry(v.synset_id.clone()).or_insert(i);
        }
        Self { vectors, by_id }
    }

    /// Parse embedding text; blank lines are skipped
    pub fn parse(text: &str) -> Result<Self> {
        let vectors = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| parse_vector_line(line, i + 1))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_vectors(vectors))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LexSenseError::ResourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        let embeddings = Self::parse(&text)?;
        tracing::info!(path = %path.display(), vectors = embeddings.len(), "loaded sense embeddings");
        Ok(embeddings)
    }

    /// Vector of a sense id
    pub fn get(&self, synset_id: &str) -> Option<&SenseVector> {
        self.by_id.get(synset_id).map(|&i| &self.vectors[i])
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

fn parse_vector_line(line: &str, line_no: usize) -> Result<SenseVector> {
    let (synset_id, rest) = line
        .trim_end_matches('\r')
        .split_once("__")
        .ok_or_else(|| LexSenseError::malformed_resource(line_no, "missing '__' after sense id"))?;

    let mut columns = rest.split('\t');
    let lemma = columns.next().unwrap_or_default().to_string();
    let values = columns
        .filter(|c| !c.trim().is_empty())
        .map(|c| {
            c.trim().parse::<f64>().map_err(|_| {
                LexSenseError::malformed_resource(line_no, format!("invalid component '{c}'"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SenseVector {
        synset_id: synset_id.to_string(),
        lemma,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_embeddings() {
        let text = "bn:1n__Banca\t0.5\t0.5\nbn:2n__Riva\t1\t0\n";
        let embeddings = SenseEmbeddings::parse(text).unwrap();
        assert_eq!(embeddings.len(), 2);

        let banca = embeddings.get("bn:1n").unwrap();
        assert_eq!(banca.lemma, "Banca");
        assert_eq!(banca.values, vec![0.5, 0.5]);
        assert!(embeddings.get("bn:3n").is_none());
    }

    #[test]
    fn test_first_vector_wins() {
        let embeddings = SenseEmbeddings::parse("bn:1n__a\t1\nbn:1n__b\t2\n").unwrap();
        assert_eq!(embeddings.get("bn:1n").unwrap().lemma, "a");
    }

    #[test]
    fn test_malformed_lines() {
        assert!(matches!(
            SenseEmbeddings::parse("bn:1n Banca 0.5").unwrap_err(),
            LexSenseError::MalformedResource { line: 1, .. }
        ));
        assert!(matches!(
            SenseEmbeddings::parse("bn:1n__a\t1\nbn:2n__b\tx").unwrap_err(),
            LexSenseError::MalformedResource { line: 2, .. }
        ));
    }
}

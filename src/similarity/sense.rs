//! Cross-lingual sense similarity
//!
//! Each word of an annotated pair is mapped to its candidate senses through
//! a [`SenseInventory`]; the pair of senses whose embedded vectors have the
//! highest cosine similarity is taken as the intended reading, and its
//! glosses are reported for manual checking.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::correlation::{self, Correlation};
use super::dataset::AnnotatedPair;
use crate::errors::{LexSenseError, Result};
use crate::lexicon::{SenseEmbeddings, SenseInventory};

/// Cosine of the angle between two vectors
///
/// Zero when the lengths differ or either vector has zero norm.
pub fn cosine_similarity(v1: &[f64], v2: &[f64]) -> f64 {
    if v1.len() != v2.len() {
        return 0.0;
    }
    let dot: f64 = v1.iter().zip(v2).map(|(a, b)| a * b).sum();
    let norm1 = v1.iter().map(|a| a * a).sum::<f64>().sqrt();
    let norm2 = v2.iter().map(|b| b * b).sum::<f64>().sqrt();
    if norm1 == 0.0 || norm2 == 0.0 {
        return 0.0;
    }
    dot / (norm1 * norm2)
}

/// Senses of two words that maximise cosine similarity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensePair {
    pub first: String,
    pub second: String,
    pub similarity: f64,
}

/// Best-scoring pair over all senses that have an embedded vector
///
/// Earlier pairs win ties.
pub fn best_sense_pair(
    embeddings: &SenseEmbeddings,
    w1_senses: &[String],
    w2_senses: &[String],
) -> Option<SensePair> {
    let mut best: Option<SensePair> = None;
    let mut best_score = -1.0;
    for s1 in w1_senses {
        let Some(v1) = embeddings.get(s1) else {
            continue;
        };
        for s2 in w2_senses {
            let Some(v2) = embeddings.get(s2) else {
                continue;
            };
            let score = cosine_similarity(&v1.values, &v2.values);
            if score > best_score {
                best_score = score;
                best = Some(SensePair {
                    first: s1.clone(),
                    second: s2.clone(),
                    similarity: score,
                });
            }
        }
    }
    best
}

/// Looks up the gloss of a sense id
pub trait GlossSource {
    /// The gloss, or an empty string when the sense has none
    fn gloss(&self, sense_id: &str) -> String;
}

/// Glosses read from `id<TAB>gloss` lines
#[derive(Debug, Clone, Default)]
pub struct GlossTable {
    glosses: FxHashMap<String, String>,
}

impl GlossTable {
    pub fn parse(text: &str) -> Self {
        let mut glosses = FxHashMap::default();
        for line in text.lines() {
            let Some((id, gloss)) = line.split_once('\t') else {
                continue;
            };
            glosses
                .entry(id.trim().to_string())
                .or_insert_with(|| gloss.trim().to_string());
        }
        Self { glosses }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LexSenseError::ResourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    pub fn len(&self) -> usize {
        self.glosses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glosses.is_empty()
    }
}

impl GlossSource for GlossTable {
    fn gloss(&self, sense_id: &str) -> String {
        self.glosses.get(sense_id).cloned().unwrap_or_default()
    }
}

/// A dataset word with the gloss of its best sense
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermGloss {
    pub term: String,
    pub sense_id: String,
    pub gloss: String,
}

/// Glosses of the best sense pair of every annotated pair, two per pair
///
/// Pairs where either word is missing from the inventory, or no sense
/// combination has vectors, contribute nothing.
pub fn best_sense_glosses(
    pairs: &[AnnotatedPair],
    embeddings: &SenseEmbeddings,
    inventory: &SenseInventory,
    glosses: &dyn GlossSource,
) -> Vec<TermGloss> {
    let mut out = Vec::with_capacity(pairs.len() * 2);
    for pair in pairs {
        let (Some(s1), Some(s2)) = (inventory.senses(&pair.word1), inventory.senses(&pair.word2))
        else {
            tracing::debug!(word1 = %pair.word1, word2 = %pair.word2, "pair not in inventory");
            continue;
        };
        let Some(best) = best_sense_pair(embeddings, s1, s2) else {
            continue;
        };
        out.push(TermGloss {
            term: pair.word1.clone(),
            gloss: glosses.gloss(&best.first),
            sense_id: best.first,
        });
        out.push(TermGloss {
            term: pair.word2.clone(),
            gloss: glosses.gloss(&best.second),
            sense_id: best.second,
        });
    }
    out
}

pub fn write_glosses<W: Write>(writer: W, glosses: &[TermGloss]) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for entry in glosses {
        writeln!(writer, "Term: {}; Gloss: {}", entry.term, entry.gloss)?;
    }
    writer.flush()?;
    Ok(())
}

/// Fraction of judgement lines marked correct (first character `1`)
pub fn annotation_accuracy(text: &str) -> Result<f64> {
    let mut total = 0usize;
    let mut correct = 0usize;
    for line in text.lines() {
        total += 1;
        if line.starts_with('1') {
            correct += 1;
        }
    }
    if total == 0 {
        return Err(LexSenseError::empty_dataset("no judgement lines"));
    }
    Ok(correct as f64 / total as f64)
}

pub fn annotation_accuracy_file(path: impl AsRef<Path>) -> Result<f64> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LexSenseError::DocumentRead {
        path: path.to_path_buf(),
        source,
    })?;
    annotation_accuracy(&text)
}

/// How closely two annotators agree on a rated dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgreementReport {
    pub first_mean: f64,
    pub second_mean: f64,
    pub correlation: Correlation,
}

pub fn annotator_agreement(pairs: &[AnnotatedPair]) -> Result<AgreementReport> {
    let first: Vec<f64> = pairs.iter().map(|p| p.first).collect();
    let second: Vec<f64> = pairs.iter().map(|p| p.second).collect();
    let (Some(first_mean), Some(second_mean)) =
        (correlation::mean(&first), correlation::mean(&second))
    else {
        return Err(LexSenseError::empty_dataset("no annotated pairs"));
    };
    Ok(AgreementReport {
        first_mean,
        second_mean,
        correlation: Correlation::between(&first, &second),
    })
}

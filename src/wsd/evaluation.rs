//! Lesk accuracy against sense-annotated sentences
//!
//! Cases are read from tab-separated lines without a header:
//!
//! ```text
//! The group met in the hall	group	group.n.01.group
//! ```
//!
//! A prediction is correct when its synset id occurs in the gold key.

use std::fs::File;
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::lesk::lesk;
use crate::errors::{LexSenseError, Result};
use crate::lexicon::Taxonomy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeskCase {
    pub sentence: String,
    pub word: String,
    pub gold: String,
}

impl LeskCase {
    pub fn parse_tsv(text: &str) -> Result<Vec<Self>> {
        read_cases(text.as_bytes())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LexSenseError::ResourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        read_cases(file)
    }
}

fn read_cases<R: std::io::Read>(reader: R) -> Result<Vec<LeskCase>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .quoting(false)
        .from_reader(reader);
    let mut cases = Vec::new();
    for (i, record) in reader.deserialize().enumerate() {
        let case = record.map_err(|err| LexSenseError::malformed_dataset(i + 1, err.to_string()))?;
        cases.push(case);
    }
    Ok(cases)
}

/// A case Lesk got wrong
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeskMiss {
    pub sentence: String,
    pub word: String,
    pub predicted: Option<String>,
    pub gold: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeskEvaluation {
    pub correct: usize,
    pub total: usize,
    pub accuracy: f64,
    pub misses: Vec<LeskMiss>,
}

/// Run Lesk on every case
pub fn evaluate(taxonomy: &Taxonomy, cases: &[LeskCase]) -> Result<LeskEvaluation> {
    if cases.is_empty() {
        return Err(LexSenseError::empty_dataset("no disambiguation cases"));
    }

    let predictions: Vec<Option<String>> = cases
        .par_iter()
        .map(|case| lesk(taxonomy, &case.sentence, &case.word).map(|s| s.id.clone()))
        .collect();

    let mut misses = Vec::new();
    for (case, predicted) in cases.iter().zip(predictions) {
        let hit = predicted
            .as_deref()
            .is_some_and(|id| case.gold.contains(id));
        if !hit {
            misses.push(LeskMiss {
                sentence: case.sentence.clone(),
                word: case.word.clone(),
                predicted,
                gold: case.gold.clone(),
            });
        }
    }

    let total = cases.len();
    let correct = total - misses.len();
    tracing::info!(correct, total, "lesk evaluation finished");
    Ok(LeskEvaluation {
        correct,
        total,
        accuracy: correct as f64 / total as f64,
        misses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::wordnet::fixtures::animals;

    const CASES: &str = "The bank accepts deposits of money\tbank\tbank.n.01.bank\n\
                         Reeds grow along the river bank\tbank\tbank.n.01.bank\n\
                         The dog barked\tdog\tdog.n.01.dog\n\
                         A unicorn appeared\tunicorn\tunicorn.n.01.unicorn\n";

    #[test]
    fn test_parse_cases() {
        let cases = LeskCase::parse_tsv(CASES).unwrap();
        assert_eq!(cases.len(), 4);
        assert_eq!(cases[2].word, "dog");
        assert_eq!(cases[2].gold, "dog.n.01.dog");

        let err = LeskCase::parse_tsv("only\ttwo\n").unwrap_err();
        assert!(matches!(err, LexSenseError::MalformedDataset { line: 1, .. }));
    }

    #[test]
    fn test_evaluate() {
        let taxonomy = animals();
        let cases = LeskCase::parse_tsv(CASES).unwrap();
        let report = evaluate(&taxonomy, &cases).unwrap();

        assert_eq!(report.total, 4);
        assert_eq!(report.correct, 2);
        assert!((report.accuracy - 0.5).abs() < 1e-12);
        assert_eq!(report.misses.len(), 2);
        assert_eq!(report.misses[0].predicted.as_deref(), Some("bank.n.02"));
        assert_eq!(report.misses[1].predicted, None);
    }

    #[test]
    fn test_evaluate_empty() {
        assert!(evaluate(&animals(), &[]).is_err());
    }
}

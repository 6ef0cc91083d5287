//! Taxonomy-based concept similarity
//!
//! Depth and least common subsumer follow the first hypernym of each
//! synset only. Three measures are derived from them:
//!
//! - Wu-Palmer: `2 * depth(lcs) / (depth(a) + depth(b))`
//! - shortest path: `2 * max_depth - path`
//! - Leacock-Chodorow: `-log2((path + 1) / (2 * max_depth + 1))`
//!
//! where `path` counts edges through the subsumer and `max_depth` is the
//! longest hypernym path (in nodes) over the words being compared.

use std::path::Path;

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::Serialize;

use super::correlation::Correlation;
use super::dataset::{self, RatedPair};
use crate::errors::{LexSenseError, Result};
use crate::lexicon::{Synset, Taxonomy};

/// Value reported when no synset pair of two words shares a subsumer
pub const NO_SIMILARITY: f64 = -1.0;

/// `synset` followed by its first-hypernym ancestors, nearest first
fn first_hypernym_chain<'a>(taxonomy: &'a Taxonomy, synset: &'a Synset) -> Vec<&'a Synset> {
    let mut chain = vec![synset];
    let mut seen = FxHashSet::default();
    seen.insert(synset.id.as_str());
    let mut current = synset;
    while let Some(parent) = taxonomy.first_hypernym(current) {
        if !seen.insert(parent.id.as_str()) {
            break;
        }
        chain.push(parent);
        current = parent;
    }
    chain
}

/// Number of first-hypernym steps from `synset` to its root
pub fn depth(taxonomy: &Taxonomy, synset: &Synset) -> usize {
    first_hypernym_chain(taxonomy, synset).len() - 1
}

/// Least common subsumer of two synsets and the edge count between them
///
/// The deeper synset climbs to the other's depth first, then both climb
/// together until they meet.
pub fn lcs_path<'a>(
    taxonomy: &'a Taxonomy,
    a: &'a Synset,
    b: &'a Synset,
) -> Option<(&'a Synset, usize)> {
    let chain_a = first_hypernym_chain(taxonomy, a);
    let chain_b = first_hypernym_chain(taxonomy, b);

    let (mut i, mut j) = if chain_a.len() > chain_b.len() {
        (chain_a.len() - chain_b.len(), 0)
    } else {
        (0, chain_b.len() - chain_a.len())
    };

    while i < chain_a.len() && j < chain_b.len() {
        if chain_a[i].id == chain_b[j].id {
            return Some((chain_a[i], i + j));
        }
        i += 1;
        j += 1;
    }
    None
}

pub fn wu_palmer(taxonomy: &Taxonomy, a: &Synset, b: &Synset, lcs: &Synset) -> f64 {
    let denominator = depth(taxonomy, a) + depth(taxonomy, b);
    if denominator == 0 {
        return 1.0;
    }
    2.0 * depth(taxonomy, lcs) as f64 / denominator as f64
}

pub fn shortest_path_similarity(path: usize, max_depth: usize) -> f64 {
    2.0 * max_depth as f64 - path as f64
}

pub fn leacock_chodorow(path: usize, max_depth: usize) -> f64 {
    -((path as f64 + 1.0) / (2.0 * max_depth as f64 + 1.0)).log2()
}

/// Longest hypernym path, counted in nodes, over every synset of `words`
pub fn max_taxonomy_depth<'w>(
    taxonomy: &Taxonomy,
    words: impl IntoIterator<Item = &'w str>,
) -> usize {
    let mut seen = FxHashSet::default();
    let mut max_depth = 0;
    for word in words {
        for synset in taxonomy.synsets(word) {
            if !seen.insert(synset.id.as_str()) {
                continue;
            }
            for path in taxonomy.hypernym_paths(synset) {
                max_depth = max_depth.max(path.len());
            }
        }
    }
    max_depth
}

/// The three measures for one word pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConceptSimilarity {
    pub wu_palmer: f64,
    pub shortest_path: f64,
    pub leacock_chodorow: f64,
}

impl Default for ConceptSimilarity {
    fn default() -> Self {
        Self {
            wu_palmer: NO_SIMILARITY,
            shortest_path: NO_SIMILARITY,
            leacock_chodorow: NO_SIMILARITY,
        }
    }
}

/// Best score of each measure over all synset pairs of two words
///
/// Pairs without a common subsumer are skipped; a measure stays at
/// [`NO_SIMILARITY`] when every pair was skipped.
pub fn max_term_similarity(
    taxonomy: &Taxonomy,
    w1: &str,
    w2: &str,
    max_depth: usize,
) -> ConceptSimilarity {
    let mut best = ConceptSimilarity::default();
    let senses2 = taxonomy.synsets(w2);
    for s1 in taxonomy.synsets(w1) {
        for &s2 in &senses2 {
            let Some((lcs, path)) = lcs_path(taxonomy, s1, s2) else {
                continue;
            };
            best.wu_palmer = best.wu_palmer.max(wu_palmer(taxonomy, s1, s2, lcs));
            best.shortest_path = best
                .shortest_path
                .max(shortest_path_similarity(path, max_depth));
            best.leacock_chodorow = best
                .leacock_chodorow
                .max(leacock_chodorow(path, max_depth));
        }
    }
    best
}

/// A dataset row with every measure attached
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPair {
    #[serde(rename = "Word 1")]
    pub word1: String,
    #[serde(rename = "Word 2")]
    pub word2: String,
    #[serde(rename = "Human")]
    pub human: f64,
    #[serde(rename = "Wu-Palmer")]
    pub wu_palmer: f64,
    #[serde(rename = "Shortest Path")]
    pub shortest_path: f64,
    #[serde(rename = "Leacock-Chodorow")]
    pub leacock_chodorow: f64,
}

/// Scored dataset and the correlation of each measure with human ratings
#[derive(Debug, Clone, Serialize)]
pub struct ConceptReport {
    pub max_depth: usize,
    pub rows: Vec<ScoredPair>,
    pub wu_palmer: Correlation,
    pub shortest_path: Correlation,
    pub leacock_chodorow: Correlation,
}

impl ConceptReport {
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        dataset::write_records(path, &self.rows)
    }
}

/// Score every pair of a rated dataset against the taxonomy
pub fn score_dataset(taxonomy: &Taxonomy, pairs: &[RatedPair]) -> Result<ConceptReport> {
    if pairs.is_empty() {
        return Err(LexSenseError::empty_dataset("no word pairs to score"));
    }

    let max_depth = max_taxonomy_depth(
        taxonomy,
        pairs
            .iter()
            .flat_map(|p| [p.word1.as_str(), p.word2.as_str()]),
    );
    tracing::debug!(pairs = pairs.len(), max_depth, "scoring concept similarity");

    let rows: Vec<ScoredPair> = pairs
        .par_iter()
        .map(|pair| {
            let scores = max_term_similarity(taxonomy, &pair.word1, &pair.word2, max_depth);
            ScoredPair {
                word1: pair.word1.clone(),
                word2: pair.word2.clone(),
                human: pair.human,
                wu_palmer: scores.wu_palmer,
                shortest_path: scores.shortest_path,
                leacock_chodorow: scores.leacock_chodorow,
            }
        })
        .collect();

    let human: Vec<f64> = rows.iter().map(|r| r.human).collect();
    let column = |f: fn(&ScoredPair) -> f64| rows.iter().map(f).collect::<Vec<_>>();

    Ok(ConceptReport {
        max_depth,
        wu_palmer: Correlation::between(&human, &column(|r| r.wu_palmer)),
        shortest_path: Correlation::between(&human, &column(|r| r.shortest_path)),
        leacock_chodorow: Correlation::between(&human, &column(|r| r.leacock_chodorow)),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::wordnet::fixtures::animals;

    fn pair(w1: &str, w2: &str, human: f64) -> RatedPair {
        RatedPair {
            word1: w1.to_string(),
            word2: w2.to_string(),
            human,
        }
    }

    #[test]
    fn test_depth() {
        let taxonomy = animals();
        assert_eq!(depth(&taxonomy, taxonomy.synset("entity.n.01").unwrap()), 0);
        assert_eq!(depth(&taxonomy, taxonomy.synset("dog.n.01").unwrap()), 4);
    }

    #[test]
    fn test_lcs_of_siblings() {
        let taxonomy = animals();
        let dog = taxonomy.synset("dog.n.01").unwrap();
        let cat = taxonomy.synset("cat.n.01").unwrap();
        let (lcs, path) = lcs_path(&taxonomy, dog, cat).unwrap();
        assert_eq!(lcs.id, "animal.n.01");
        assert_eq!(path, 4);
        assert!((wu_palmer(&taxonomy, dog, cat, lcs) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_lcs_different_depths() {
        let taxonomy = animals();
        let financial = taxonomy.synset("bank.n.01").unwrap();
        let river = taxonomy.synset("bank.n.02").unwrap();
        let (lcs, path) = lcs_path(&taxonomy, financial, river).unwrap();
        assert_eq!(lcs.id, "entity.n.01");
        assert_eq!(path, 3);

        let animal = taxonomy.synset("animal.n.01").unwrap();
        let dog = taxonomy.synset("dog.n.01").unwrap();
        let (lcs, path) = lcs_path(&taxonomy, dog, animal).unwrap();
        assert_eq!(lcs.id, "animal.n.01");
        assert_eq!(path, 2);
    }

    #[test]
    fn test_identical_synsets() {
        let taxonomy = animals();
        let dog = taxonomy.synset("dog.n.01").unwrap();
        let (lcs, path) = lcs_path(&taxonomy, dog, dog).unwrap();
        assert_eq!(lcs.id, "dog.n.01");
        assert_eq!(path, 0);
        assert!((wu_palmer(&taxonomy, dog, dog, lcs) - 1.0).abs() < 1e-12);

        let root = taxonomy.synset("entity.n.01").unwrap();
        assert!((wu_palmer(&taxonomy, root, root, root) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_roots_never_meet() {
        let taxonomy = Taxonomy::from_json(
            r#"[{"id": "a", "lemmas": ["a"]}, {"id": "b", "lemmas": ["b"]}]"#,
        )
        .unwrap();
        let a = taxonomy.synset("a").unwrap();
        let b = taxonomy.synset("b").unwrap();
        assert!(lcs_path(&taxonomy, a, b).is_none());
        assert_eq!(max_term_similarity(&taxonomy, "a", "b", 1), ConceptSimilarity::default());
    }

    #[test]
    fn test_path_measures() {
        assert!((shortest_path_similarity(4, 5) - 6.0).abs() < 1e-12);
        assert!((leacock_chodorow(0, 5) - 11f64.log2()).abs() < 1e-12);
        assert!((leacock_chodorow(4, 5) + (5.0f64 / 11.0).log2()).abs() < 1e-12);
    }

    #[test]
    fn test_max_taxonomy_depth() {
        let taxonomy = animals();
        assert_eq!(max_taxonomy_depth(&taxonomy, ["dog", "bank"]), 5);
        assert_eq!(max_taxonomy_depth(&taxonomy, ["bank"]), 3);
        assert_eq!(max_taxonomy_depth(&taxonomy, ["unicorn"]), 0);
    }

    #[test]
    fn test_max_term_similarity_takes_best_pair() {
        let taxonomy = animals();
        // bank.n.01 vs bank.n.01 is an identical pair.
        let scores = max_term_similarity(&taxonomy, "bank", "depository financial institution", 3);
        assert!((scores.wu_palmer - 1.0).abs() < 1e-12);
        assert!((scores.shortest_path - 6.0).abs() < 1e-12);

        let missing = max_term_similarity(&taxonomy, "dog", "unicorn", 5);
        assert_eq!(missing.wu_palmer, NO_SIMILARITY);
    }

    #[test]
    fn test_score_dataset() {
        let taxonomy = animals();
        let pairs = vec![
            pair("dog", "dog", 10.0),
            pair("dog", "cat", 7.0),
            pair("dog", "bank", 1.0),
        ];
        let report = score_dataset(&taxonomy, &pairs).unwrap();
        assert_eq!(report.max_depth, 5);
        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.rows[1].word2, "cat");
        assert!((report.rows[1].shortest_path - 6.0).abs() < 1e-12);
        assert!((report.wu_palmer.spearman.unwrap() - 1.0).abs() < 1e-12);
        assert!((report.shortest_path.spearman.unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_score_dataset_empty() {
        let taxonomy = animals();
        assert!(matches!(
            score_dataset(&taxonomy, &[]),
            Err(LexSenseError::EmptyDataset(_))
        ));
    }

    #[test]
    fn test_report_csv() {
        let taxonomy = animals();
        let report = score_dataset(&taxonomy, &[pair("dog", "cat", 7.0)]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scored.csv");
        report.write_csv(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Word 1,Word 2,Human,Wu-Palmer,Shortest Path,Leacock-Chodorow\n"));
        assert!(written.contains("dog,cat,7.0,0.5,6.0,"));
    }
}

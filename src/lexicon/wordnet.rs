//! WordNet-shaped taxonomy
//!
//! The taxonomy is read from a JSON array of synsets in sense order:
//!
//! ```json
//! [
//!   {"id": "dog.n.01", "lemmas": ["dog", "domestic_dog"],
//!    "parents": ["canine.n.02"], "defn": "a member of the genus Canis"}
//! ]
//! ```
//!
//! `parents` lists hypernyms; the first one is used for depth and
//! least-common-subsumer computations. Lemma lookup is case-insensitive
//! and treats spaces as underscores.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::errors::{LexSenseError, Result};

/// One synset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synset {
    pub id: String,
    #[serde(default)]
    pub lemmas: Vec<String>,
    #[serde(default)]
    pub parents: Vec<String>,
    #[serde(default, alias = "definition")]
    pub defn: String,
    #[serde(default)]
    pub is_instance: bool,
}

/// Read-only synset store with id and lemma indexes
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    synsets: Vec<Synset>,
    by_id: FxHashMap<String, usize>,
    by_lemma: FxHashMap<String, Vec<usize>>,
}

impl Taxonomy {
    pub fn from_synsets(synsets: Vec<Synset>) -> Self {
        let mut by_id = FxHashMap::default();
        let mut by_lemma: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (i, synset) in synsets.iter().enumerate() {
            by_id.insert(synset.id.clone(), i);
            for lemma in &synset.lemmas {
                let senses = by_lemma.entry(normalize_lemma(lemma)).or_default();
                if !senses.contains(&i) {
                    senses.push(i);
                }
            }
        }
        Self {
            synsets,
            by_id,
            by_lemma,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let synsets: Vec<Synset> = serde_json::from_str(json)?;
        Ok(Self::from_synsets(synsets))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| LexSenseError::ResourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        let taxonomy = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), synsets = taxonomy.len(), "loaded taxonomy");
        Ok(taxonomy)
    }

    /// Synsets containing `word`, in sense order
    pub fn synsets(&self, word: &str) -> Vec<&Synset> {
        self.by_lemma
            .get(&normalize_lemma(word))
            .map(|ids| ids.iter().map(|&i| &self.synsets[i]).collect())
            .unwrap_or_default()
    }

    pub fn synset(&self, id: &str) -> Option<&Synset> {
        self.by_id.get(id).map(|&i| &self.synsets[i])
    }

    /// First listed hypernym that exists in the taxonomy
    pub fn first_hypernym(&self, synset: &Synset) -> Option<&Synset> {
        synset.parents.first().and_then(|id| self.synset(id))
    }

    /// Every hypernym path from a root down to `synset`, both ends included
    pub fn hypernym_paths<'a>(&'a self, synset: &'a Synset) -> Vec<Vec<&'a Synset>> {
        let mut paths = Vec::new();
        let mut trail = vec![synset];
        self.collect_paths(&mut trail, &mut paths);
        paths
    }

    fn collect_paths<'a>(&'a self, trail: &mut Vec<&'a Synset>, paths: &mut Vec<Vec<&'a Synset>>) {
        let Some(current) = trail.last().copied() else {
            return;
        };
        let parents: Vec<&Synset> = current
            .parents
            .iter()
            .filter_map(|id| self.synset(id))
            // A parent already on the trail would close a cycle.
            .filter(|p| !trail.iter().any(|t| t.id == p.id))
            .collect();

        if parents.is_empty() {
            paths.push(trail.iter().rev().copied().collect());
            return;
        }
        for parent in parents {
            trail.push(parent);
            self.collect_paths(trail, paths);
            trail.pop();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Synset> {
        self.synsets.iter()
    }

    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }
}

fn normalize_lemma(word: &str) -> String {
    word.trim().to_lowercase().replace(' ', "_")
}

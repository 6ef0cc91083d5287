//! Feature-vector lexical resource
//!
//! Each line describes one sense:
//!
//! ```text
//! bn:00015267n;Cat;cat_128.3;feline_64.1;pet_12.0
//! ```
//!
//! The first field is the sense id, the second the lemma (lowercased on
//! load). Every remaining field holds `name_weight` pairs separated by `_`;
//! a name without a weight gets weight 0. Lemmas may repeat across senses.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::errors::{LexSenseError, Result};
use crate::types::{FeatureVector, LexicalEntry};

/// All senses of a resource, indexed by lemma
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<LexicalEntry>,
    by_lemma: FxHashMap<String, Vec<usize>>,
}

impl Lexicon {
    /// Build a lexicon from already parsed entries
    pub fn from_entries(entries: Vec<LexicalEntry>) -> Self {
        let mut by_lemma: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (i, entry) in entries.iter().enumerate() {
            by_lemma.entry(entry.lemma.clone()).or_default().push(i);
        }
        Self { entries, by_lemma }
    }

    /// Parse resource text; blank lines are skipped
    pub fn parse(text: &str) -> Result<Self> {
        let entries = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| parse_line(line, i + 1))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_entries(entries))
    }

    /// Read and parse a whole resource file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LexSenseError::ResourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::parse(&text)?;
        tracing::info!(
            path = %path.display(),
            senses = lexicon.len(),
            lemmas = lexicon.num_lemmas(),
            "loaded feature lexicon"
        );
        Ok(lexicon)
    }

    /// Feature vectors of every sense of `lemma`, in file order
    pub fn senses<'a>(&'a self, lemma: &str) -> impl Iterator<Item = &'a FeatureVector> + 'a {
        self.by_lemma
            .get(lemma)
            .into_iter()
            .flatten()
            .map(move |&i| &self.entries[i].features)
    }

    pub fn contains(&self, lemma: &str) -> bool {
        self.by_lemma.contains_key(lemma)
    }

    pub fn entries(&self) -> &[LexicalEntry] {
        &self.entries
    }

    pub fn lemmas(&self) -> impl Iterator<Item = &str> {
        self.by_lemma.keys().map(String::as_str)
    }

    /// Number of senses
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn num_lemmas(&self) -> usize {
        self.by_lemma.len()
    }
}

/// Parse one resource line (`line_no` is 1-based, used in errors)
pub fn parse_line(line: &str, line_no: usize) -> Result<LexicalEntry> {
    let mut fields = line.trim_end_matches('\r').split(';');
    let (synset_id, lemma) = match (fields.next(), fields.next()) {
        (Some(id), Some(lemma)) => (id, lemma),
        _ => {
            return Err(LexSenseError::malformed_resource(
                line_no,
                "expected at least 2 ';'-separated fields",
            ))
        }
    };

    let mut features = FeatureVector::default();
    for field in fields.filter(|f| !f.is_empty()) {
        let mut parts = field.split('_');
        while let Some(name) = parts.next() {
            let weight = match parts.next() {
                Some(raw) => raw.trim().parse::<f64>().map_err(|_| {
                    LexSenseError::malformed_resource(
                        line_no,
                        format!("invalid weight '{raw}' for feature '{name}'"),
                    )
                })?,
                None => 0.0,
            };
            features.insert(name.to_string(), weight);
        }
    }

    Ok(LexicalEntry::new(synset_id, lemma, features))
}

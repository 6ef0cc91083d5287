//! Word to candidate-senses inventory
//!
//! Blocks are introduced by `#`. The first line of a block is the word and
//! each following non-empty line one of its sense ids:
//!
//! ```text
//! #banca
//! bn:00008364n
//! bn:00008363n
//! #riva
//! bn:00013390n
//! ```
//!
//! Blocks without any sense are ignored.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::errors::{LexSenseError, Result};

/// Candidate senses per word
#[derive(Debug, Clone, Default)]
pub struct SenseInventory {
    senses: FxHashMap<String, Vec<String>>,
}

impl SenseInventory {
    pub fn parse(text: &str) -> Self {
        let mut senses = FxHashMap::default();
        for block in text.split('#') {
            let mut lines = block.trim().lines().map(str::trim).filter(|l| !l.is_empty());
            let Some(word) = lines.next() else {
                continue;
            };
            let ids: Vec<String> = lines.map(str::to_string).collect();
            if !ids.is_empty() {
                // Later blocks for the same word replace earlier ones.
                senses.insert(word.to_string(), ids);
            }
        }
        Self { senses }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LexSenseError::ResourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        let inventory = Self::parse(&text);
        tracing::info!(path = %path.display(), words = inventory.len(), "loaded sense inventory");
        Ok(inventory)
    }

    /// Candidate sense ids of a word
    pub fn senses(&self, word: &str) -> Option<&[String]> {
        self.senses.get(word).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.senses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blocks() {
        let inventory =
            SenseInventory::parse("#banca\nbn:1n\n\nbn:2n\n#riva\nbn:3n\n#vuoto\n#\n");
        assert_eq!(inventory.len(), 2);
        assert_eq!(
            inventory.senses("banca").unwrap(),
            &["bn:1n".to_string(), "bn:2n".to_string()]
        );
        assert_eq!(inventory.senses("riva").unwrap().len(), 1);
        assert!(inventory.senses("vuoto").is_none());
    }
}

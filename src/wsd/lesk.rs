//! Simplified Lesk
//!
//! Sentences mark the word to disambiguate with double asterisks:
//!
//! ```text
//! The **bank** can guarantee deposits will eventually cover future tuition costs.
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::errors::{LexSenseError, Result};
use crate::lexicon::{Synset, Taxonomy};
use crate::nlp::inflect;
use crate::nlp::tokenizer::strip_punctuation;

fn marker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("marker pattern is valid"))
}

/// Unwrap the first `**word**` marker
///
/// Every occurrence of that same marker is unwrapped. Without a marker the
/// sentence is returned unchanged with no word.
pub fn find_ambiguous_word(sentence: &str) -> (String, Option<String>) {
    let Some(captures) = marker_pattern().captures(sentence) else {
        return (sentence.to_string(), None);
    };
    let marker = &captures[0];
    let word = &captures[1];
    (sentence.replace(marker, word), Some(word.to_string()))
}

fn context_words(sentence: &str) -> FxHashSet<String> {
    strip_punctuation(sentence)
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn overlap(context: &FxHashSet<String>, definition: &str) -> usize {
    let stripped = strip_punctuation(definition);
    let definition: FxHashSet<&str> = stripped.split_whitespace().collect();
    definition
        .into_iter()
        .filter(|w| context.contains(*w))
        .count()
}

/// Sense of `word` whose definition overlaps the sentence the most
///
/// Equal overlaps go to the greatest synset id.
pub fn lesk<'t>(taxonomy: &'t Taxonomy, sentence: &str, word: &str) -> Option<&'t Synset> {
    let context = context_words(sentence);
    taxonomy
        .synsets(word)
        .into_iter()
        .map(|synset| (overlap(&context, &synset.defn), synset))
        .max_by(|(a, sa), (b, sb)| a.cmp(b).then_with(|| sa.id.cmp(&sb.id)))
        .map(|(_, synset)| synset)
}

/// The sentence with `word` replaced by each synonym from `synset`
///
/// Synonyms keep the capitalisation and number of the original word; lemmas
/// that are only another form of the word itself are skipped.
pub fn alternative_sentences(sentence: &str, word: &str, synset: &Synset) -> Vec<String> {
    let capitalized = word == inflect::capitalize(word);
    let mut base = word.to_lowercase();
    let plural = match inflect::singular_noun(&base) {
        Some(singular) => {
            base = singular;
            true
        }
        None => false,
    };
    let base_plural = inflect::plural(&base);
    let versions = [
        inflect::capitalize(&base),
        inflect::capitalize(&base_plural),
        base,
        base_plural,
    ];

    let mut synonyms: Vec<&str> = synset
        .lemmas
        .iter()
        .map(String::as_str)
        .filter(|lemma| !versions.iter().any(|v| v == lemma))
        .collect();
    synonyms.sort_unstable();
    synonyms.dedup();

    synonyms
        .into_iter()
        .map(|lemma| {
            let mut replacement = lemma.replace('_', " ");
            if capitalized {
                replacement = inflect::capitalize(&replacement);
            }
            if plural {
                replacement = inflect::plural(&replacement);
            }
            sentence.replace(word, &replacement)
        })
        .collect()
}

/// Result of disambiguating one marked sentence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Disambiguation {
    pub sentence: String,
    pub word: Option<String>,
    pub synset_id: Option<String>,
    pub definition: Option<String>,
    pub alternatives: Vec<String>,
}

impl Disambiguation {
    pub fn from_sentence(taxonomy: &Taxonomy, marked: &str) -> Self {
        let (sentence, word) = find_ambiguous_word(marked);
        let synset = word.as_deref().and_then(|w| lesk(taxonomy, &sentence, w));
        let alternatives = match (word.as_deref(), synset) {
            (Some(w), Some(s)) => alternative_sentences(&sentence, w, s),
            _ => Vec::new(),
        };
        Self {
            synset_id: synset.map(|s| s.id.clone()),
            definition: synset.map(|s| s.defn.clone()),
            sentence,
            word,
            alternatives,
        }
    }
}

impl fmt::Display for Disambiguation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sentence: {}", self.sentence)?;
        writeln!(f, "Synset: {}", self.synset_id.as_deref().unwrap_or("-"))?;
        writeln!(f, "Definition: {}", self.definition.as_deref().unwrap_or("-"))?;
        write!(f, "Alternative sentences:")?;
        for alternative in &self.alternatives {
            write!(f, "\n{alternative}")?;
        }
        Ok(())
    }
}

/// Disambiguate every non-blank line of a sentences file
pub fn disambiguate_file(taxonomy: &Taxonomy, path: impl AsRef<Path>) -> Result<Vec<Disambiguation>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LexSenseError::DocumentRead {
        path: path.to_path_buf(),
        source,
    })?;
    let results: Vec<Disambiguation> = text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(|line| Disambiguation::from_sentence(taxonomy, line))
        .collect();

    let unmarked = results.iter().filter(|d| d.word.is_none()).count();
    if unmarked > 0 {
        tracing::warn!(unmarked, "sentences without a **word** marker");
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::wordnet::fixtures::animals;

    #[test]
    fn test_find_ambiguous_word() {
        let (sentence, word) = find_ambiguous_word("The **bank** near the **bank**, and the **river**.");
        assert_eq!(sentence, "The bank near the bank, and the **river**.");
        assert_eq!(word.as_deref(), Some("bank"));

        let (sentence, word) = find_ambiguous_word("Nothing marked here.");
        assert_eq!(sentence, "Nothing marked here.");
        assert!(word.is_none());
    }

    #[test]
    fn test_lesk_picks_overlapping_definition() {
        let taxonomy = animals();
        let sentence = "The bank accepts deposits and lends the money.";
        assert_eq!(lesk(&taxonomy, sentence, "bank").unwrap().id, "bank.n.01");

        let sentence = "We sat on the bank of the river, watching the water.";
        assert_eq!(lesk(&taxonomy, sentence, "bank").unwrap().id, "bank.n.02");
    }

    #[test]
    fn test_lesk_ties_go_to_greatest_id() {
        let taxonomy = animals();
        assert_eq!(lesk(&taxonomy, "zzz", "bank").unwrap().id, "bank.n.02");
        assert!(lesk(&taxonomy, "anything", "unicorn").is_none());
    }

    #[test]
    fn test_definition_tokens_keep_case() {
        let taxonomy = animals();
        // "Canis" only matches a context word after lowercasing the definition.
        let dog = lesk(&taxonomy, "canis", "dog").unwrap();
        assert_eq!(dog.id, "dog.n.01");
        let context = context_words("canis");
        assert_eq!(overlap(&context, &dog.defn), 0);
    }

    #[test]
    fn test_alternative_sentences() {
        let taxonomy = animals();
        let bank = taxonomy.synset("bank.n.01").unwrap();
        let alternatives = alternative_sentences("The bank is closed.", "bank", bank);
        assert_eq!(
            alternatives,
            vec![
                "The banking company is closed.",
                "The depository financial institution is closed.",
            ]
        );
    }

    #[test]
    fn test_alternatives_follow_number_and_case() {
        let taxonomy = animals();
        let dog = taxonomy.synset("dog.n.01").unwrap();
        let alternatives = alternative_sentences("Dogs bark.", "Dogs", dog);
        assert_eq!(alternatives, vec!["Domestic dogs bark."]);
    }

    #[test]
    fn test_disambiguation_display() {
        let taxonomy = animals();
        let result = Disambiguation::from_sentence(&taxonomy, "The **cat** slept.");
        assert_eq!(result.synset_id.as_deref(), Some("cat.n.01"));
        assert_eq!(
            result.to_string(),
            "Sentence: The cat slept.\nSynset: cat.n.01\n\
             Definition: feline mammal usually having thick soft fur\n\
             Alternative sentences:\nThe true cat slept."
        );
    }

    #[test]
    fn test_disambiguate_file() {
        let taxonomy = animals();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sentences.txt");
        fs::write(&path, "The **dog** barked.\n\nNo marker.\r\n").unwrap();

        let results = disambiguate_file(&taxonomy, &path).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].synset_id.as_deref(), Some("dog.n.01"));
        assert_eq!(results[1].sentence, "No marker.");
        assert!(results[1].synset_id.is_none());
        assert!(results[1].alternatives.is_empty());

        assert!(matches!(
            disambiguate_file(&taxonomy, dir.path().join("missing.txt")),
            Err(LexSenseError::DocumentRead { .. })
        ));
    }
}

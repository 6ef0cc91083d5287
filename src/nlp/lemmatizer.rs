//! Rule-based lemmatization
//!
//! Suffix detachment in the style of WordNet's morphy: each word class has
//! an ordered list of `(suffix, replacement)` rules and a small irregular
//! form table. When a vocabulary of known lemmas is supplied, a candidate
//! is only accepted if it is in the vocabulary. Without one, the most
//! specific rule that leaves a plausible stem is applied.

use rustc_hash::{FxHashMap, FxHashSet};

/// Coarse word class used to pick detachment rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WordClass {
    #[default]
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl WordClass {
    /// Map a Penn Treebank tag to a word class
    ///
    /// `JJ*` -> adjective, `VB*` -> verb, `NN*` -> noun, `RB*` -> adverb.
    pub fn from_treebank(tag: &str) -> Option<Self> {
        match tag.chars().next() {
            Some('J') => Some(WordClass::Adjective),
            Some('V') => Some(WordClass::Verb),
            Some('N') => Some(WordClass::Noun),
            Some('R') => Some(WordClass::Adverb),
            _ => None,
        }
    }

    fn rules(self) -> &'static [(&'static str, &'static str)] {
        match self {
            WordClass::Noun => NOUN_RULES,
            WordClass::Verb => VERB_RULES,
            WordClass::Adjective => ADJECTIVE_RULES,
            WordClass::Adverb => &[],
        }
    }
}

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

// Rules applied without a vocabulary, most specific first.
const NOUN_GUESSES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("zes", "z"),
    ("men", "man"),
    ("s", ""),
];

const VERB_GUESSES: &[(&str, &str)] = &[("ies", "y"), ("ing", ""), ("ed", ""), ("s", "")];

const ADJECTIVE_GUESSES: &[(&str, &str)] = &[("est", ""), ("er", "")];

const NOUN_IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("people", "person"),
    ("teeth", "tooth"),
    ("oxen", "ox"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
];

const VERB_IRREGULAR: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("is", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("has", "have"),
    ("had", "have"),
    ("did", "do"),
    ("done", "do"),
    ("went", "go"),
    ("gone", "go"),
    ("sat", "sit"),
    ("ran", "run"),
    ("saw", "see"),
    ("seen", "see"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("gave", "give"),
    ("given", "give"),
];

const ADJECTIVE_IRREGULAR: &[(&str, &str)] = &[
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
];

/// Morphy-style lemmatizer
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    /// Known lemmas; when empty, rules are applied heuristically
    vocabulary: FxHashSet<String>,
    exceptions: FxHashMap<(WordClass, String), String>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer {
    /// Create a lemmatizer without a vocabulary
    pub fn new() -> Self {
        let mut exceptions = FxHashMap::default();
        for (class, table) in [
            (WordClass::Noun, NOUN_IRREGULAR),
            (WordClass::Verb, VERB_IRREGULAR),
            (WordClass::Adjective, ADJECTIVE_IRREGULAR),
        ] {
            for (form, lemma) in table {
                exceptions.insert((class, form.to_string()), lemma.to_string());
            }
        }
        Self {
            vocabulary: FxHashSet::default(),
            exceptions,
        }
    }

    /// Restrict rule candidates to a known vocabulary
    pub fn with_vocabulary<I, S>(mut self, lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.vocabulary = lemmas
            .into_iter()
            .map(|l| l.as_ref().to_lowercase())
            .collect();
        self
    }

    pub fn has_vocabulary(&self) -> bool {
        !self.vocabulary.is_empty()
    }

    /// Lemmatize a noun (the behavior when no part of speech is known)
    pub fn lemmatize(&self, word: &str) -> String {
        self.lemmatize_as(word, WordClass::Noun)
    }

    /// Lemmatize with an optional Penn Treebank tag
    pub fn lemmatize_tagged(&self, word: &str, treebank_tag: &str) -> String {
        match WordClass::from_treebank(treebank_tag) {
            Some(class) => self.lemmatize_as(word, class),
            None => self.lemmatize(word),
        }
    }

    /// Lemmatize a word as the given class
    pub fn lemmatize_as(&self, word: &str, class: WordClass) -> String {
        if let Some(lemma) = self.exceptions.get(&(class, word.to_string())) {
            return lemma.clone();
        }

        if self.has_vocabulary() {
            if self.vocabulary.contains(word) {
                return word.to_string();
            }
            return class
                .rules()
                .iter()
                .filter_map(|(suffix, replacement)| detach(word, suffix, replacement))
                .find(|candidate| self.vocabulary.contains(candidate))
                .unwrap_or_else(|| word.to_string());
        }

        guess(word, class).unwrap_or_else(|| word.to_string())
    }
}

fn detach(word: &str, suffix: &str, replacement: &str) -> Option<String> {
    word.strip_suffix(suffix)
        .filter(|stem| !stem.is_empty())
        .map(|stem| format!("{stem}{replacement}"))
}

fn guess(word: &str, class: WordClass) -> Option<String> {
    let guesses = match class {
        WordClass::Noun => {
            if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
                return None;
            }
            NOUN_GUESSES
        }
        WordClass::Verb => {
            if word.ends_with("ss") {
                return None;
            }
            VERB_GUESSES
        }
        WordClass::Adjective => ADJECTIVE_GUESSES,
        WordClass::Adverb => return None,
    };

    guesses.iter().find_map(|(suffix, replacement)| {
        let lemma = format!("{}{replacement}", word.strip_suffix(suffix)?);
        // Lemmas shorter than three characters are not trusted.
        (lemma.chars().count() >= 3).then_some(lemma)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noun_guesses() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("cats"), "cat");
        assert_eq!(lemmatizer.lemmatize("churches"), "church");
        assert_eq!(lemmatizer.lemmatize("stories"), "story");
        assert_eq!(lemmatizer.lemmatize("boxes"), "box");
        assert_eq!(lemmatizer.lemmatize("houses"), "house");
    }

    #[test]
    fn test_short_and_protected_words_survive() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("cat"), "cat");
        assert_eq!(lemmatizer.lemmatize("glass"), "glass");
        assert_eq!(lemmatizer.lemmatize("bus"), "bus");
        assert_eq!(lemmatizer.lemmatize("analysis"), "analysis");
        assert_eq!(lemmatizer.lemmatize("its"), "its");
    }

    #[test]
    fn test_irregular_forms() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("children"), "child");
        assert_eq!(lemmatizer.lemmatize_as("was", WordClass::Verb), "be");
        assert_eq!(lemmatizer.lemmatize_as("better", WordClass::Adjective), "good");
    }

    #[test]
    fn test_vocabulary_restricts_candidates() {
        let lemmatizer = Lemmatizer::new().with_vocabulary(["bus", "house", "run"]);
        assert_eq!(lemmatizer.lemmatize("buses"), "bus");
        assert_eq!(lemmatizer.lemmatize("houses"), "house");
        // Unknown candidates leave the word unchanged.
        assert_eq!(lemmatizer.lemmatize("dogs"), "dogs");
        assert_eq!(lemmatizer.lemmatize_as("running", WordClass::Verb), "running");
    }

    #[test]
    fn test_treebank_tags() {
        assert_eq!(WordClass::from_treebank("JJR"), Some(WordClass::Adjective));
        assert_eq!(WordClass::from_treebank("VBD"), Some(WordClass::Verb));
        assert_eq!(WordClass::from_treebank("NNS"), Some(WordClass::Noun));
        assert_eq!(WordClass::from_treebank("RB"), Some(WordClass::Adverb));
        assert_eq!(WordClass::from_treebank("DT"), None);

        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize_tagged("walked", "VBD"), "walk");
        assert_eq!(lemmatizer.lemmatize_tagged("quickly", "RB"), "quickly");
        assert_eq!(lemmatizer.lemmatize_tagged("cats", "DT"), "cat");
    }
}

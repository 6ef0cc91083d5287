//! Stopword filtering
//!
//! Lists come from the `stop-words` crate, selected by ISO 639-1 code or
//! English language name. Tokens reach the filter already lemmatized and
//! lowercased, so the set is stored lowercase and matched exactly.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// `stop-words` list for a language code, `None` when unsupported
pub fn stopword_language(code: &str) -> Option<LANGUAGE> {
    let language = match code.trim().to_lowercase().as_str() {
        "en" | "english" => LANGUAGE::English,
        "it" | "italian" => LANGUAGE::Italian,
        "de" | "german" => LANGUAGE::German,
        "fr" | "french" => LANGUAGE::French,
        "es" | "spanish" => LANGUAGE::Spanish,
        "pt" | "portuguese" => LANGUAGE::Portuguese,
        "nl" | "dutch" => LANGUAGE::Dutch,
        "ru" | "russian" => LANGUAGE::Russian,
        "sv" | "swedish" => LANGUAGE::Swedish,
        "no" | "norwegian" => LANGUAGE::Norwegian,
        "da" | "danish" => LANGUAGE::Danish,
        "fi" | "finnish" => LANGUAGE::Finnish,
        "hu" | "hungarian" => LANGUAGE::Hungarian,
        _ => return None,
    };
    Some(language)
}

/// Lemmas excluded from cohesion scoring
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Built-in list for `language`; unsupported codes use English
    pub fn new(language: &str) -> Self {
        let language = stopword_language(language).unwrap_or_else(|| {
            tracing::warn!(language, "no stopword list for language, using English");
            LANGUAGE::English
        });
        Self {
            words: get(language).iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Built-in list for `language` plus `extra`
    pub fn with_extra(language: &str, extra: &[String]) -> Self {
        let mut filter = Self::new(language);
        filter.extend(extra.iter().map(String::as_str));
        filter
    }

    /// Exactly the given words
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut filter = Self {
            words: FxHashSet::default(),
        };
        filter.extend(words);
        filter
    }

    pub fn extend<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        self.words
            .extend(words.into_iter().map(|w| w.trim().to_lowercase()));
    }

    pub fn is_stopword(&self, lemma: &str) -> bool {
        self.words.contains(lemma)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_list() {
        let filter = StopwordFilter::default();
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("of"));
        assert!(!filter.is_stopword("cat"));
        assert!(!filter.is_stopword("feline"));
    }

    #[test]
    fn test_language_codes() {
        assert!(stopword_language("IT").is_some());
        assert!(stopword_language("italian").is_some());
        assert!(stopword_language("tlh").is_none());

        let italian = StopwordFilter::new("it");
        assert!(italian.is_stopword("il"));
        assert!(!italian.is_stopword("gatto"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let filter = StopwordFilter::new("tlh");
        assert!(filter.is_stopword("the"));
        assert_eq!(filter.len(), StopwordFilter::new("en").len());
    }

    #[test]
    fn test_extra_words_are_normalized() {
        let filter = StopwordFilter::with_extra("en", &[" Purred ".to_string()]);
        assert!(filter.is_stopword("purred"));
        assert!(filter.is_stopword("the"));
    }

    #[test]
    fn test_from_words() {
        let mut filter = StopwordFilter::from_words(["Cat"]);
        assert!(filter.is_stopword("cat"));
        assert!(!filter.is_stopword("the"));
        filter.extend(["dog"]);
        assert_eq!(filter.len(), 2);
        assert!(!StopwordFilter::from_words(Vec::<&str>::new()).is_stopword("the"));
    }
}

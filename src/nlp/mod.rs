//! Natural Language Processing components
//!
//! This module provides document splitting, tokenization, stopword
//! filtering, lemmatization and noun inflection.

pub mod inflect;
pub mod lemmatizer;
pub mod stopwords;
pub mod tokenizer;

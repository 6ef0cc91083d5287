//! Lexical resources
//!
//! Loaders for the external lexical-semantic resources the jobs query:
//! feature-vector senses, dense sense embeddings, a word-to-senses
//! inventory and a WordNet-shaped taxonomy. All are immutable after load.

pub mod embedded;
pub mod nasari;
pub mod semeval;
pub mod wordnet;

pub use embedded::{SenseEmbeddings, SenseVector};
pub use nasari::Lexicon;
pub use semeval::SenseInventory;
pub use wordnet::{Synset, Taxonomy};

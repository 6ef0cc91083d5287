//! Word-level similarity over feature vectors
//!
//! The similarity of two lemmas is the best feature overlap among all
//! combinations of their senses. Results are memoized per unordered lemma
//! pair for the lifetime of the scorer, since they depend only on the
//! (immutable) lexicon.

use rustc_hash::FxHashMap;

use crate::lexicon::Lexicon;
use crate::types::FeatureVector;

/// Sum of `w1 + w2` over the features both vectors share
pub fn feature_overlap(v1: &FeatureVector, v2: &FeatureVector) -> f64 {
    let mut overlap = 0.0;
    for (name, w1) in v1 {
        if let Some(w2) = v2.get(name) {
            overlap += w1 + w2;
        }
    }
    overlap
}

/// Memoizing lemma-pair similarity scorer
#[derive(Debug, Clone, Default)]
pub struct WordSimilarity {
    lexicon: Lexicon,
    cache: FxHashMap<(String, String), f64>,
}

impl WordSimilarity {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            cache: FxHashMap::default(),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Similarity of two lemmas, 0 when either has no senses
    pub fn similarity(&mut self, w1: &str, w2: &str) -> f64 {
        let (a, b) = if w1 <= w2 { (w1, w2) } else { (w2, w1) };
        if let Some(&score) = self.cache.get(&(a.to_string(), b.to_string())) {
            return score;
        }
        let score = self.compute(a, b);
        self.cache.insert((a.to_string(), b.to_string()), score);
        score
    }

    /// Uncached similarity; arguments are taken in the given order
    pub fn compute(&self, w1: &str, w2: &str) -> f64 {
        let senses2: Vec<&FeatureVector> = self.lexicon.senses(w2).collect();
        if senses2.is_empty() {
            return 0.0;
        }
        self.lexicon
            .senses(w1)
            .flat_map(|s1| senses2.iter().map(move |s2| feature_overlap(s1, s2)))
            .fold(None, |best: Option<f64>, o| Some(best.map_or(o, |b| b.max(o))))
            .unwrap_or(0.0)
    }

    /// Number of memoized pairs
    pub fn cached_pairs(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> WordSimilarity {
        let lexicon = Lexicon::parse(
            "bn:001;cat;color_1.0_size_2.0\n\
             bn:002;feline;color_0.5_fur_3.0\n\
             bn:003;bank;money_2.0;loan_1.0\n\
             bn:004;bank;river_1.5;water_1.0\n\
             bn:005;shore;river_0.5;water_0.5;sand_1.0\n",
        )
        .unwrap();
        WordSimilarity::new(lexicon)
    }

    #[test]
    fn test_overlap_of_shared_features() {
        let mut scorer = scorer();
        assert!((scorer.similarity("cat", "feline") - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_symmetry_and_memoization() {
        let mut scorer = scorer();
        let ab = scorer.similarity("bank", "shore");
        let ba = scorer.similarity("shore", "bank");
        assert_eq!(ab, ba);
        assert_eq!(scorer.cached_pairs(), 1);
    }

    #[test]
    fn test_best_sense_wins() {
        let mut scorer = scorer();
        // bank#2 vs shore: river 1.5 + 0.5, water 1.0 + 0.5
        assert!((scorer.similarity("bank", "shore") - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_lemma_is_zero() {
        let mut scorer = scorer();
        assert_eq!(scorer.similarity("cat", "unicorn"), 0.0);
        assert_eq!(scorer.similarity("unicorn", "cat"), 0.0);
        assert_eq!(scorer.similarity("unicorn", "dragon"), 0.0);
    }

    #[test]
    fn test_disjoint_features_are_zero() {
        let mut scorer = scorer();
        assert_eq!(scorer.similarity("cat", "bank"), 0.0);
    }

    #[test]
    fn test_clear_cache() {
        let mut scorer = scorer();
        scorer.similarity("cat", "feline");
        scorer.clear_cache();
        assert_eq!(scorer.cached_pairs(), 0);
    }
}

//! Unit-pair cohesion
//!
//! The cohesion of two units is the count-weighted sum of the similarity of
//! every lemma pair across them. Values are memoized per unordered pair of
//! unit indices. Since keys are positions, not contents, the cache must be
//! cleared before scoring a different document.

use rustc_hash::FxHashMap;

use super::similarity::WordSimilarity;
use crate::types::TextUnit;

/// Weight applied to contributions involving the title unit
pub const TITLE_WEIGHT: f64 = 1.5;

/// Per-document cohesion scorer
#[derive(Debug, Clone, Default)]
pub struct CohesionScorer {
    cache: FxHashMap<(usize, usize), f64>,
}

impl CohesionScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all unit pairs; call before each document
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn cached_pairs(&self) -> usize {
        self.cache.len()
    }

    /// Cohesion between two units, computed once per unordered pair
    pub fn cohesion(&mut self, words: &mut WordSimilarity, u1: &TextUnit, u2: &TextUnit) -> f64 {
        let (first, second) = if u1.index <= u2.index { (u1, u2) } else { (u2, u1) };
        let key = (first.index, second.index);
        if let Some(&score) = self.cache.get(&key) {
            return score;
        }

        let mut score = 0.0;
        for (w1, &c1) in &first.tokens {
            for (w2, &c2) in &second.tokens {
                score += words.similarity(w1, w2) * f64::from(c1) * f64::from(c2);
            }
        }
        self.cache.insert(key, score);
        score
    }

    /// Total cohesion of every unit with all others, with title weighting
    ///
    /// Terms against the title are multiplied by [`TITLE_WEIGHT`], and the
    /// title's own total is multiplied by it once more.
    pub fn totals(&mut self, words: &mut WordSimilarity, units: &[TextUnit]) -> Vec<f64> {
        units
            .iter()
            .map(|u| {
                let mut total = 0.0;
                for v in units.iter().filter(|v| v.index != u.index) {
                    let c = self.cohesion(words, u, v);
                    total += if v.is_title() { c * TITLE_WEIGHT } else { c };
                }
                if u.is_title() {
                    total * TITLE_WEIGHT
                } else {
                    total
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::types::TokenCounts;

    fn words() -> WordSimilarity {
        WordSimilarity::new(
            Lexicon::parse(
                "bn:001;cat;color_1.0_size_2.0\n\
                 bn:002;feline;color_0.5_fur_3.0\n\
                 bn:003;title;color_1.0\n",
            )
            .unwrap(),
        )
    }

    fn unit(index: usize, tokens: &[(&str, u32)]) -> TextUnit {
        let counts: TokenCounts = tokens.iter().map(|(w, c)| (w.to_string(), *c)).collect();
        TextUnit::new(index, "", counts)
    }

    #[test]
    fn test_cohesion_weights_counts() {
        let mut words = words();
        let mut scorer = CohesionScorer::new();
        let a = unit(1, &[("cat", 2)]);
        let b = unit(2, &[("feline", 3)]);
        // 1.5 * 2 * 3
        assert!((scorer.cohesion(&mut words, &a, &b) - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_cohesion_is_symmetric_and_cached_once() {
        let mut words = words();
        let mut scorer = CohesionScorer::new();
        let a = unit(1, &[("cat", 1), ("feline", 1)]);
        let b = unit(2, &[("feline", 2), ("cat", 1)]);
        let ab = scorer.cohesion(&mut words, &a, &b);
        let ba = scorer.cohesion(&mut words, &b, &a);
        assert_eq!(ab, ba);
        assert_eq!(scorer.cached_pairs(), 1);
    }

    #[test]
    fn test_empty_unit_has_zero_cohesion() {
        let mut words = words();
        let mut scorer = CohesionScorer::new();
        let empty = unit(1, &[]);
        let other = unit(2, &[("cat", 4)]);
        assert_eq!(scorer.cohesion(&mut words, &empty, &other), 0.0);
    }

    #[test]
    fn test_title_weighting_composes() {
        let mut words = words();
        let mut scorer = CohesionScorer::new();
        let units = vec![
            unit(0, &[("title", 1)]),
            unit(1, &[("cat", 1)]),
            unit(2, &[("feline", 1)]),
        ];
        let totals = scorer.totals(&mut words, &units);

        // title-cat = 2.0, title-feline = 1.5, cat-feline = 1.5
        assert!((totals[0] - (2.0 + 1.5) * 1.5).abs() < 1e-12);
        assert!((totals[1] - (2.0 * 1.5 + 1.5)).abs() < 1e-12);
        assert!((totals[2] - (1.5 * 1.5 + 1.5)).abs() < 1e-12);
        assert_eq!(scorer.cached_pairs(), 3);
    }

    #[test]
    fn test_clear_forgets_pairs() {
        let mut words = words();
        let mut scorer = CohesionScorer::new();
        scorer.cohesion(&mut words, &unit(0, &[("cat", 1)]), &unit(1, &[("cat", 1)]));
        scorer.clear();
        assert_eq!(scorer.cached_pairs(), 0);
        // Word similarities outlive the document.
        assert_eq!(words.cached_pairs(), 1);
    }
}

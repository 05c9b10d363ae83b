//! Monge-Elkan combinator — word-wise aggregation of an inner similarity.

use crate::base::{fold_pairs, Kind, TextMetric};
use crate::edit::DamerauLevenshtein;
use crate::tokenize;
use crate::Result;

/// For each token of the first input, take the best inner similarity
/// against any token of the second; the score is the mean of those maxima.
/// Asymmetric unless [`symmetric`](MongeElkan::symmetric) averages both
/// directions. The inner metric defaults to normalized Damerau-Levenshtein
/// similarity and is pluggable.
#[derive(Debug, Clone)]
pub struct MongeElkan<A = DamerauLevenshtein> {
    inner: A,
    symmetric: bool,
    qval: Option<usize>,
}

impl MongeElkan {
    pub fn new() -> Self {
        Self { inner: DamerauLevenshtein::new(), symmetric: false, qval: None }
    }
}

impl Default for MongeElkan {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> MongeElkan<A> {
    /// Swap the inner similarity algorithm.
    pub fn with_algorithm<T: TextMetric>(self, inner: T) -> MongeElkan<T> {
        MongeElkan { inner, symmetric: self.symmetric, qval: self.qval }
    }

    /// Average both directions.
    pub fn symmetric(mut self) -> Self {
        self.symmetric = true;
        self
    }

    pub fn with_qval(mut self, qval: Option<usize>) -> Self {
        self.qval = qval;
        self
    }

    fn tokens<'a>(&self, s: &'a str) -> Vec<&'a str> {
        match self.qval {
            None => tokenize::words(s),
            Some(q) => tokenize::str_grams(s, q),
        }
    }
}

impl<A: TextMetric> MongeElkan<A> {
    fn directed(&self, seq: &[&str], other: &[&str]) -> Result<f64> {
        if seq.is_empty() || other.is_empty() {
            return Ok(0.0);
        }
        let mut sum = 0.0;
        for left in seq {
            let mut best = f64::NEG_INFINITY;
            for right in other {
                best = best.max(self.inner.str_normalized_similarity(&[left, right])?);
            }
            sum += best;
        }
        Ok(sum / seq.len() as f64)
    }
}

impl<A: TextMetric> TextMetric for MongeElkan<A> {
    fn str_kind(&self) -> Kind {
        Kind::Similarity
    }

    fn str_maximum(&self, _seqs: &[&str]) -> f64 {
        1.0
    }

    fn str_call(&self, seqs: &[&str]) -> Result<f64> {
        if seqs.len() > 2 {
            return fold_pairs(seqs.len(), Kind::Similarity, |i, j| {
                self.str_call(&[seqs[i], seqs[j]])
            });
        }
        let &[a, b] = seqs else { return Ok(0.0) };
        let (ta, tb) = (self.tokens(a), self.tokens(b));
        let forward = self.directed(&ta, &tb)?;
        if self.symmetric {
            Ok((forward + self.directed(&tb, &ta)?) / 2.0)
        } else {
            Ok(forward)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn single_words_reduce_to_the_inner_metric() {
        let me = MongeElkan::new();
        // normalized Damerau-Levenshtein similarity of Niall/Neal is 1 - 2/5
        close(me.str_similarity(&["Niall", "Neal"]).unwrap(), 0.6);
    }

    #[test]
    fn word_order_does_not_matter_for_exact_tokens() {
        let me = MongeElkan::new();
        close(me.str_similarity(&["spam eggs", "eggs spam"]).unwrap(), 1.0);
    }

    #[test]
    fn asymmetric_by_default() {
        let me = MongeElkan::new();
        let forward = me.str_similarity(&["test one", "test"]).unwrap();
        let backward = me.str_similarity(&["test", "test one"]).unwrap();
        close(forward, 0.5);
        close(backward, 1.0);
    }

    #[test]
    fn symmetric_variant_averages() {
        let me = MongeElkan::new().symmetric();
        close(me.str_similarity(&["test one", "test"]).unwrap(), 0.75);
        close(
            me.str_similarity(&["test one", "test"]).unwrap(),
            me.str_similarity(&["test", "test one"]).unwrap(),
        );
    }

    #[test]
    fn pluggable_inner_algorithm() {
        use crate::edit::JaroWinkler;
        let me = MongeElkan::new().with_algorithm(JaroWinkler::new().without_external());
        let v = me.str_similarity(&["MARTHA", "MARHTA"]).unwrap();
        assert!(v > 0.9);
    }
}

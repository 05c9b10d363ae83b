//! Tversky index — the parameterized superset of Jaccard and Sorensen.

use crate::base::{Configured, Element, Kind, Metric};
use crate::multiset::Multiset;
use crate::token::counters;
use crate::Result;

/// `|A ∩ B| / (|A ∩ B| + α |A \ B| + β |B \ A|)`.
///
/// With `α = β = 1` this is Jaccard; with `α = β = 0.5`, Sorensen-Dice.
/// The optional `bias` switches two-input calls to the symmetric variant.
#[derive(Debug, Clone)]
pub struct Tversky {
    qval: Option<usize>,
    as_set: bool,
    ks: Vec<f64>,
    bias: Option<f64>,
}

impl Tversky {
    pub fn new() -> Self {
        Self { qval: Some(1), as_set: false, ks: Vec::new(), bias: None }
    }

    /// Per-input weights; missing entries default to 1.
    pub fn with_ks(mut self, ks: Vec<f64>) -> Self {
        self.ks = ks;
        self
    }

    pub fn with_bias(mut self, bias: f64) -> Self {
        self.bias = Some(bias);
        self
    }

    pub fn with_qval(mut self, qval: Option<usize>) -> Self {
        self.qval = qval;
        self
    }

    pub fn as_set(mut self) -> Self {
        self.as_set = true;
        self
    }

    fn k(&self, idx: usize) -> f64 {
        self.ks.get(idx).copied().unwrap_or(1.0)
    }
}

impl Default for Tversky {
    fn default() -> Self {
        Self::new()
    }
}

impl Configured for Tversky {
    fn qval(&self) -> Option<usize> {
        self.qval
    }
}

impl<E: Element> Metric<E> for Tversky {
    fn kind(&self) -> Kind {
        Kind::Similarity
    }

    fn maximum(&self, _seqs: &[&[E]]) -> f64 {
        1.0
    }

    fn nary(&self) -> bool {
        true
    }

    fn call(&self, seqs: &[&[E]]) -> Result<f64> {
        let sets = counters(seqs);
        let intersection = Multiset::intersect_all(&sets).size(self.as_set) as f64;
        let sizes: Vec<f64> = sets.iter().map(|s| s.size(self.as_set) as f64).collect();

        match self.bias {
            Some(bias) if seqs.len() == 2 => {
                // symmetric variant
                let (alpha, beta) = (self.k(0), self.k(1));
                let a_val = sizes
                    .iter()
                    .map(|s| s - intersection)
                    .fold(f64::INFINITY, f64::min);
                let b_val = sizes
                    .iter()
                    .map(|s| s - intersection)
                    .fold(f64::NEG_INFINITY, f64::max);
                let c_val = intersection + bias;
                let denom = alpha * beta * (a_val - b_val) + b_val * beta + c_val;
                if denom == 0.0 {
                    return Ok(0.0);
                }
                Ok(c_val / denom)
            }
            _ => {
                let mut denom = intersection;
                for (idx, size) in sizes.iter().enumerate() {
                    denom += self.k(idx) * (size - intersection);
                }
                if denom == 0.0 {
                    return Ok(0.0);
                }
                Ok(intersection / denom)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::TextMetric;
    use crate::token::{Jaccard, Sorensen};

    fn close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn unit_weights_reduce_to_jaccard() {
        let t = Tversky::new();
        let j = Jaccard::new();
        for pair in [["decide", "resize"], ["test", "text"], ["nelson", "neilsen"]] {
            close(
                t.str_similarity(&pair).unwrap(),
                j.str_similarity(&pair).unwrap(),
            );
        }
    }

    #[test]
    fn half_weights_reduce_to_sorensen() {
        let t = Tversky::new().with_ks(vec![0.5, 0.5]);
        let s = Sorensen::new();
        for pair in [["decide", "resize"], ["test", "text"]] {
            close(
                t.str_similarity(&pair).unwrap(),
                s.str_similarity(&pair).unwrap(),
            );
        }
    }

    #[test]
    fn asymmetric_weights_favor_one_side() {
        let forward = Tversky::new().with_ks(vec![0.2, 0.8]);
        let s1 = forward.str_similarity(&["test", "testsuite"]).unwrap();
        let s2 = forward.str_similarity(&["testsuite", "test"]).unwrap();
        assert!(s1 != s2);
    }

    #[test]
    fn biased_variant_stays_in_unit_range() {
        let t = Tversky::new().with_ks(vec![0.5, 0.5]).with_bias(0.5);
        let v = t.str_similarity(&["test", "text"]).unwrap();
        assert!((0.0..=1.0).contains(&v));
    }
}

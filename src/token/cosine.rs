//! Cosine similarity (Ochiai coefficient) over token counts.

use crate::base::{Configured, Element, Kind, Metric};
use crate::multiset::Multiset;
use crate::token::counters;
use crate::Result;

/// `|A ∩ B| / (|A| · |B| · ...)^(1/n)` — the n-th root generalizes the
/// two-input `√(|A| · |B|)` denominator.
#[derive(Debug, Clone)]
pub struct Cosine {
    qval: Option<usize>,
    as_set: bool,
}

impl Cosine {
    pub fn new() -> Self {
        Self { qval: Some(1), as_set: false }
    }

    pub fn with_qval(mut self, qval: Option<usize>) -> Self {
        self.qval = qval;
        self
    }

    pub fn as_set(mut self) -> Self {
        self.as_set = true;
        self
    }
}

impl Default for Cosine {
    fn default() -> Self {
        Self::new()
    }
}

impl Configured for Cosine {
    fn qval(&self) -> Option<usize> {
        self.qval
    }
}

impl<E: Element> Metric<E> for Cosine {
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
        let product: f64 = sets.iter().map(|s| s.size(self.as_set) as f64).product();
        if product == 0.0 {
            return Ok(0.0);
        }
        Ok(intersection / product.powf(1.0 / seqs.len() as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::TextMetric;

    fn close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn ochiai_coefficient() {
        let c = Cosine::new();
        close(
            c.str_similarity(&["nelson", "neilsen"]).unwrap(),
            5.0 / 42.0f64.sqrt(),
        );
    }

    #[test]
    fn disjoint_and_identical() {
        let c = Cosine::new();
        close(c.str_similarity(&["abc", "xyz"]).unwrap(), 0.0);
        close(c.str_similarity(&["same", "same"]).unwrap(), 1.0);
    }
}

//! Sorensen-Dice coefficient.

use crate::base::{Configured, Element, Kind, Metric};
use crate::multiset::Multiset;
use crate::token::counters;
use crate::Result;

/// `2 |A ∩ B| / (|A| + |B|)` over token multisets.
#[derive(Debug, Clone)]
pub struct Sorensen {
    qval: Option<usize>,
    as_set: bool,
}

impl Sorensen {
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

impl Default for Sorensen {
    fn default() -> Self {
        Self::new()
    }
}

impl Configured for Sorensen {
    fn qval(&self) -> Option<usize> {
        self.qval
    }
}

impl<E: Element> Metric<E> for Sorensen {
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
        let total: usize = sets.iter().map(|s| s.size(self.as_set)).sum();
        if total == 0 {
            return Ok(0.0);
        }
        Ok(2.0 * intersection / total as f64)
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
    fn dice_coefficient() {
        let s = Sorensen::new();
        close(s.str_similarity(&["decide", "resize"]).unwrap(), 2.0 * 3.0 / 12.0);
        close(s.str_similarity(&["test", "text"]).unwrap(), 0.75);
    }

    #[test]
    fn bounds() {
        let s = Sorensen::new();
        close(s.str_similarity(&["abc", "xyz"]).unwrap(), 0.0);
        close(s.str_normalized_similarity(&["same", "same"]).unwrap(), 1.0);
    }
}

//! Overlap (Szymkiewicz-Simpson) coefficient.

use crate::base::{Configured, Element, Kind, Metric};
use crate::multiset::Multiset;
use crate::token::counters;
use crate::Result;

/// `|A ∩ B| / min(|A|, |B|)` — full containment scores 1.
#[derive(Debug, Clone)]
pub struct Overlap {
    qval: Option<usize>,
    as_set: bool,
}

impl Overlap {
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

impl Default for Overlap {
    fn default() -> Self {
        Self::new()
    }
}

impl Configured for Overlap {
    fn qval(&self) -> Option<usize> {
        self.qval
    }
}

impl<E: Element> Metric<E> for Overlap {
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
        let smallest = sets.iter().map(|s| s.size(self.as_set)).min().unwrap_or(0);
        if smallest == 0 {
            return Ok(0.0);
        }
        Ok(intersection / smallest as f64)
    }
}

//! Jaccard index and its logarithm, the Tanimoto distance.

use crate::base::{Configured, Element, Kind, Metric};
use crate::multiset::Multiset;
use crate::token::counters;
use crate::Result;

/// `|A ∩ B| / |A ∪ B|` over token multisets.
#[derive(Debug, Clone)]
pub struct Jaccard {
    qval: Option<usize>,
    as_set: bool,
}

impl Jaccard {
    pub fn new() -> Self {
        Self { qval: Some(1), as_set: false }
    }

    pub fn with_qval(mut self, qval: Option<usize>) -> Self {
        self.qval = qval;
        self
    }

    /// Count distinct tokens instead of occurrences.
    pub fn as_set(mut self) -> Self {
        self.as_set = true;
        self
    }

    pub(crate) fn index<E: Element>(&self, seqs: &[&[E]]) -> f64 {
        let sets = counters(seqs);
        let intersection = Multiset::intersect_all(&sets).size(self.as_set) as f64;
        let union = Multiset::union_all(&sets).size(self.as_set) as f64;
        if union == 0.0 {
            return 0.0;
        }
        intersection / union
    }
}

impl Default for Jaccard {
    fn default() -> Self {
        Self::new()
    }
}

impl Configured for Jaccard {
    fn qval(&self) -> Option<usize> {
        self.qval
    }
}

impl<E: Element> Metric<E> for Jaccard {
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
        Ok(self.index(seqs))
    }
}

/// `log2` of the Jaccard index; negative infinity when the inputs share
/// nothing.
#[derive(Debug, Clone, Default)]
pub struct Tanimoto {
    jaccard: Jaccard,
}

impl Tanimoto {
    pub fn new() -> Self {
        Self { jaccard: Jaccard::new() }
    }

    pub fn with_qval(mut self, qval: Option<usize>) -> Self {
        self.jaccard = self.jaccard.with_qval(qval);
        self
    }

    pub fn as_set(mut self) -> Self {
        self.jaccard = self.jaccard.as_set();
        self
    }
}

impl Configured for Tanimoto {
    fn qval(&self) -> Option<usize> {
        Configured::qval(&self.jaccard)
    }
}

impl<E: Element> Metric<E> for Tanimoto {
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
        let index = self.jaccard.index(seqs);
        if index == 0.0 {
            Ok(f64::NEG_INFINITY)
        } else {
            Ok(index.log2())
        }
    }
}

//! Bag distance — a cheap Levenshtein lower bound.

use crate::base::{Configured, Element, Kind, Metric};
use crate::multiset::Multiset;
use crate::token::counters;
use crate::Result;

/// `max(|A \ B|, |B \ A|)` over token multisets.
///
/// The raw value is computed per input against the common intersection, so
/// it is not symmetric position-wise, but the maximum over inputs is.
#[derive(Debug, Clone)]
pub struct Bag {
    qval: Option<usize>,
    as_set: bool,
}

impl Bag {
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

impl Default for Bag {
    fn default() -> Self {
        Self::new()
    }
}

impl Configured for Bag {
    fn qval(&self) -> Option<usize> {
        self.qval
    }
}

impl<E: Element> Metric<E> for Bag {
    fn kind(&self) -> Kind {
        Kind::Distance
    }

    fn nary(&self) -> bool {
        true
    }

    fn call(&self, seqs: &[&[E]]) -> Result<f64> {
        let sets = counters(seqs);
        let intersection = Multiset::intersect_all(&sets).size(self.as_set);
        let worst = sets
            .iter()
            .map(|s| s.size(self.as_set) - intersection.min(s.size(self.as_set)))
            .max()
            .unwrap_or(0);
        Ok(worst as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::TextMetric;

    #[test]
    fn counts_unmatched_tokens() {
        let bag = Bag::new();
        assert_eq!(bag.str_distance(&["qwe", "qwe"]).unwrap(), 0.0);
        assert_eq!(bag.str_distance(&["qwe", "erty"]).unwrap(), 3.0);
        assert_eq!(bag.str_distance(&["qwe", "ewq"]).unwrap(), 0.0);
        assert_eq!(bag.str_distance(&["qwe", "rtys"]).unwrap(), 4.0);
    }

    #[test]
    fn lower_bound_of_levenshtein() {
        use crate::edit::Levenshtein;
        let bag = Bag::new();
        let lev = Levenshtein::new().without_external();
        for pair in [["hannah", "banana"], ["test", "text"], ["ab", "bca"]] {
            assert!(bag.str_distance(&pair).unwrap() <= lev.str_distance(&pair).unwrap());
        }
    }
}

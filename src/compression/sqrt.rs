//! Square-root "compressor": size is the sum of root counts, so repeated
//! tokens compress and rare ones do not.

use crate::base::{Configured, Element, Kind, Metric};
use crate::compression::ncd;
use crate::multiset::Multiset;
use crate::Result;

#[derive(Debug, Clone)]
pub struct SqrtNcd {
    qval: Option<usize>,
}

impl SqrtNcd {
    pub fn new() -> Self {
        Self { qval: Some(1) }
    }

    pub fn with_qval(mut self, qval: Option<usize>) -> Self {
        self.qval = qval;
        self
    }
}

impl Default for SqrtNcd {
    fn default() -> Self {
        Self::new()
    }
}

fn sqrt_size<E: Element>(seq: &[E]) -> f64 {
    Multiset::from_elements(seq)
        .iter()
        .map(|(_, count)| (count as f64).sqrt())
        .sum()
}

impl Configured for SqrtNcd {
    fn qval(&self) -> Option<usize> {
        self.qval
    }
}

impl<E: Element> Metric<E> for SqrtNcd {
    fn kind(&self) -> Kind {
        Kind::Distance
    }

    fn maximum(&self, _seqs: &[&[E]]) -> f64 {
        1.0
    }

    fn nary(&self) -> bool {
        true
    }

    fn call(&self, seqs: &[&[E]]) -> Result<f64> {
        ncd(seqs, |s| Ok(sqrt_size(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::TextMetric;

    #[test]
    fn repeated_symbols_compress() {
        // four distinct letters cost 4, four equal letters cost 2
        let a: Vec<char> = "abcd".chars().collect();
        let b: Vec<char> = "aaaa".chars().collect();
        assert_eq!(sqrt_size(&a), 4.0);
        assert_eq!(sqrt_size(&b), 2.0);
    }

    #[test]
    fn monotone_over_similarity() {
        let alg = SqrtNcd::new();
        let same = alg.str_distance(&["test", "test"]).unwrap();
        let similar = alg.str_distance(&["test", "text"]).unwrap();
        let different = alg.str_distance(&["test", "nani"]).unwrap();
        assert!(same <= similar);
        assert!(similar <= different);
    }

    #[test]
    fn quick_answer_for_identical() {
        let alg = SqrtNcd::new();
        assert_eq!(alg.str_distance(&["test", "test"]).unwrap(), 0.0);
        assert_eq!(alg.str_normalized_similarity(&["test", "test"]).unwrap(), 1.0);
    }
}

//! Entropy "compressor": size is a constant plus the Shannon entropy of
//! the token distribution.

use crate::base::{Configured, Element, Kind, Metric};
use crate::compression::ncd;
use crate::multiset::Multiset;
use crate::Result;

#[derive(Debug, Clone)]
pub struct EntropyNcd {
    qval: Option<usize>,
    coef: f64,
    base: f64,
}

impl EntropyNcd {
    pub fn new() -> Self {
        Self { qval: Some(1), coef: 1.0, base: 2.0 }
    }

    pub fn with_coef(mut self, coef: f64) -> Self {
        self.coef = coef;
        self
    }

    pub fn with_base(mut self, base: f64) -> Self {
        self.base = base;
        self
    }

    pub fn with_qval(mut self, qval: Option<usize>) -> Self {
        self.qval = qval;
        self
    }

    fn size<E: Element>(&self, seq: &[E]) -> f64 {
        let total = seq.len() as f64;
        if total == 0.0 {
            return self.coef;
        }
        let mut entropy = 0.0;
        for (_, count) in Multiset::from_elements(seq).iter() {
            let p = count as f64 / total;
            entropy -= p * p.log(self.base);
        }
        self.coef + entropy
    }
}

impl Default for EntropyNcd {
    fn default() -> Self {
        Self::new()
    }
}

impl Configured for EntropyNcd {
    fn qval(&self) -> Option<usize> {
        self.qval
    }
}

impl<E: Element> Metric<E> for EntropyNcd {
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
        ncd(seqs, |s| Ok(self.size(s)))
    }
}

//! MLIPNS — Modified Language-Independent Product Name Search.
//!
//! A binary matcher: peel mismatches one at a time and succeed (similarity
//! 1) as soon as the remaining mismatch ratio falls under the threshold,
//! fail (similarity 0) once the mismatch budget is spent.

use crate::base::{Configured, Element, Kind, Metric};
use crate::edit::Hamming;
use crate::Result;

#[derive(Debug, Clone)]
pub struct Mlipns {
    threshold: f64,
    maxmismatches: usize,
    qval: Option<usize>,
}

impl Mlipns {
    pub fn new() -> Self {
        Self { threshold: 0.25, maxmismatches: 2, qval: Some(1) }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_maxmismatches(mut self, maxmismatches: usize) -> Self {
        self.maxmismatches = maxmismatches;
        self
    }
}

impl Default for Mlipns {
    fn default() -> Self {
        Self::new()
    }
}

impl Configured for Mlipns {
    fn qval(&self) -> Option<usize> {
        self.qval
    }
}

impl<E: Element> Metric<E> for Mlipns {
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
        let hamming = Hamming::new().without_external();
        let mut ham = hamming.call(seqs)?;
        let mut maxlen = seqs.iter().map(|s| s.len()).max().unwrap_or(0) as f64;
        if maxlen == 0.0 {
            return Ok(1.0);
        }
        let mut mismatches = 0usize;
        while mismatches <= self.maxmismatches {
            if maxlen <= 0.0 {
                return Ok(1.0);
            }
            if 1.0 - (maxlen - ham) / maxlen <= self.threshold {
                return Ok(1.0);
            }
            mismatches += 1;
            ham -= 1.0;
            maxlen -= 1.0;
        }
        Ok(if maxlen <= 0.0 { 1.0 } else { 0.0 })
    }
}

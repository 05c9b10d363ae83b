//! Levenshtein distance — insertions, deletions and substitutions.

use crate::base::{BackendSlot, Configured, Element, Kind, Metric};
use crate::Result;

/// Minimum number of single-element edits between two sequences.
///
/// Two-row dynamic program: only the previous and current rows are kept,
/// with the shorter input along the row, so space is O(min(len)).
#[derive(Debug, Clone)]
pub struct Levenshtein {
    qval: Option<usize>,
    external: bool,
    backends: BackendSlot,
}

impl Levenshtein {
    pub fn new() -> Self {
        Self { qval: Some(1), external: true, backends: BackendSlot::new() }
    }

    pub fn with_qval(mut self, qval: Option<usize>) -> Self {
        self.qval = qval;
        self
    }

    pub fn without_external(mut self) -> Self {
        self.external = false;
        self
    }
}

impl Default for Levenshtein {
    fn default() -> Self {
        Self::new()
    }
}

impl Configured for Levenshtein {
    fn qval(&self) -> Option<usize> {
        self.qval
    }

    fn external_enabled(&self) -> bool {
        self.external
    }

    fn backend(&self) -> Option<(&'static str, &BackendSlot)> {
        Some(("Levenshtein", &self.backends))
    }
}

impl<E: Element> Metric<E> for Levenshtein {
    fn kind(&self) -> Kind {
        Kind::Distance
    }

    fn call(&self, seqs: &[&[E]]) -> Result<f64> {
        let &[s1, s2] = seqs else { return Ok(0.0) };
        // row runs along the shorter input
        let (row_seq, col_seq) = if s1.len() <= s2.len() { (s1, s2) } else { (s2, s1) };

        let mut prev: Vec<usize> = (0..=row_seq.len()).collect();
        let mut curr: Vec<usize> = vec![0; row_seq.len() + 1];

        for (i, ce) in col_seq.iter().enumerate() {
            curr[0] = i + 1;
            for (j, re) in row_seq.iter().enumerate() {
                let cost = usize::from(re != ce);
                curr[j + 1] = (prev[j] + cost)
                    .min(prev[j + 1] + 1)
                    .min(curr[j] + 1);
            }
            std::mem::swap(&mut prev, &mut curr);
        }
        Ok(prev[row_seq.len()] as f64)
    }
}

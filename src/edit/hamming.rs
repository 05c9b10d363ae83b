//! Hamming distance — the number of differing positions.

use crate::base::{BackendSlot, Configured, Element, Kind, Metric};
use crate::Result;

/// Positional mismatch count across two or more sequences.
///
/// By default the longer tail counts one mismatch per extra position;
/// with [`truncated`](Hamming::truncated) only the first `min(len)`
/// positions are compared.
#[derive(Debug, Clone)]
pub struct Hamming {
    qval: Option<usize>,
    truncate: bool,
    external: bool,
    backends: BackendSlot,
}

impl Hamming {
    pub fn new() -> Self {
        Self { qval: Some(1), truncate: false, external: true, backends: BackendSlot::new() }
    }

    /// Compare only up to the shorter input's length.
    pub fn truncated(mut self) -> Self {
        self.truncate = true;
        self
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

impl Default for Hamming {
    fn default() -> Self {
        Self::new()
    }
}

impl Configured for Hamming {
    fn qval(&self) -> Option<usize> {
        self.qval
    }

    fn external_enabled(&self) -> bool {
        self.external
    }

    fn backend(&self) -> Option<(&'static str, &BackendSlot)> {
        Some(("Hamming", &self.backends))
    }
}

impl<E: Element> Metric<E> for Hamming {
    fn kind(&self) -> Kind {
        Kind::Distance
    }

    fn nary(&self) -> bool {
        true
    }

    fn call(&self, seqs: &[&[E]]) -> Result<f64> {
        let max_len = seqs.iter().map(|s| s.len()).max().unwrap_or(0);
        let min_len = seqs.iter().map(|s| s.len()).min().unwrap_or(0);
        let limit = if self.truncate { min_len } else { max_len };

        let mut differing = 0usize;
        for i in 0..limit {
            if seqs.iter().any(|s| s.len() <= i) {
                // a missing tail position always disagrees
                differing += 1;
                continue;
            }
            let first = &seqs[0][i];
            if seqs[1..].iter().any(|s| &s[i] != first) {
                differing += 1;
            }
        }
        Ok(differing as f64)
    }
}

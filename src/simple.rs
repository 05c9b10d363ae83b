//! # Simple Kernels
//!
//! Prefix/postfix runs, the length gap, exact identity, and the
//! table-driven [`Matrix`] scorer that also plugs into the alignment
//! kernels as a substitution matrix.

use hashbrown::HashMap;

use crate::base::{Configured, Element, Kind, Metric, TextMetric};
use crate::edit::SimScorer;
use crate::Result;

// ============================================================================
// Prefix / Postfix
// ============================================================================

/// Longest shared prefix; the similarity is its length.
#[derive(Debug, Clone)]
pub struct Prefix {
    qval: Option<usize>,
}

impl Prefix {
    pub fn new() -> Self {
        Self { qval: Some(1) }
    }

    pub fn with_qval(mut self, qval: Option<usize>) -> Self {
        self.qval = qval;
        self
    }

    /// The shared run under a custom per-position equality predicate.
    pub fn common_with<E: Element>(
        &self,
        seqs: &[&[E]],
        test: impl Fn(&E, &E) -> bool,
    ) -> Vec<E> {
        if seqs.is_empty() {
            return Vec::new();
        }
        let min_len = seqs.iter().map(|s| s.len()).min().unwrap_or(0);
        let mut out = Vec::new();
        'columns: for i in 0..min_len {
            let first = &seqs[0][i];
            for s in &seqs[1..] {
                if !test(first, &s[i]) {
                    break 'columns;
                }
            }
            out.push(first.clone());
        }
        out
    }

    /// The shared run under structural equality.
    pub fn common<E: Element>(&self, seqs: &[&[E]]) -> Vec<E> {
        self.common_with(seqs, |a, b| a == b)
    }
}

impl Default for Prefix {
    fn default() -> Self {
        Self::new()
    }
}

impl Configured for Prefix {
    fn qval(&self) -> Option<usize> {
        self.qval
    }
}

impl<E: Element> Metric<E> for Prefix {
    fn kind(&self) -> Kind {
        Kind::Similarity
    }

    fn nary(&self) -> bool {
        true
    }

    fn call(&self, seqs: &[&[E]]) -> Result<f64> {
        Ok(self.common(seqs).len() as f64)
    }
}

/// Longest shared suffix; the similarity is its length.
#[derive(Debug, Clone)]
pub struct Postfix {
    qval: Option<usize>,
}

impl Postfix {
    pub fn new() -> Self {
        Self { qval: Some(1) }
    }

    pub fn with_qval(mut self, qval: Option<usize>) -> Self {
        self.qval = qval;
        self
    }

    /// The shared trailing run.
    pub fn common<E: Element>(&self, seqs: &[&[E]]) -> Vec<E> {
        let reversed: Vec<Vec<E>> = seqs
            .iter()
            .map(|s| s.iter().rev().cloned().collect())
            .collect();
        let views: Vec<&[E]> = reversed.iter().map(|v| v.as_slice()).collect();
        let mut run = Prefix::new().common(&views);
        run.reverse();
        run
    }
}

impl Default for Postfix {
    fn default() -> Self {
        Self::new()
    }
}

impl Configured for Postfix {
    fn qval(&self) -> Option<usize> {
        self.qval
    }
}

impl<E: Element> Metric<E> for Postfix {
    fn kind(&self) -> Kind {
        Kind::Similarity
    }

    fn nary(&self) -> bool {
        true
    }

    fn call(&self, seqs: &[&[E]]) -> Result<f64> {
        Ok(self.common(seqs).len() as f64)
    }
}

// ============================================================================
// Length / Identity
// ============================================================================

/// Distance between the longest and shortest input lengths.
#[derive(Debug, Clone, Default)]
pub struct Length;

impl Length {
    pub fn new() -> Self {
        Self
    }
}

impl Configured for Length {}

impl<E: Element> Metric<E> for Length {
    fn kind(&self) -> Kind {
        Kind::Distance
    }

    fn nary(&self) -> bool {
        true
    }

    fn call(&self, seqs: &[&[E]]) -> Result<f64> {
        let max = seqs.iter().map(|s| s.len()).max().unwrap_or(0);
        let min = seqs.iter().map(|s| s.len()).min().unwrap_or(0);
        Ok((max - min) as f64)
    }
}

/// 1 when every input is equal, else 0.
#[derive(Debug, Clone, Default)]
pub struct Identity;

impl Identity {
    pub fn new() -> Self {
        Self
    }
}

impl Configured for Identity {}

impl<E: Element> Metric<E> for Identity {
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
        let identical = seqs.windows(2).all(|w| w[0] == w[1]);
        Ok(if identical { 1.0 } else { 0.0 })
    }
}

// ============================================================================
// Matrix
// ============================================================================

/// Lookup-based scorer over element pairs.
///
/// A missing pair falls back to `match_cost`/`mismatch_cost` by equality —
/// it is never an error. With `symmetric` (the default) the reversed pair
/// is consulted before falling back.
#[derive(Debug, Clone)]
pub struct Matrix<E: Element> {
    table: HashMap<(E, E), f64>,
    symmetric: bool,
    match_cost: f64,
    mismatch_cost: f64,
}

impl<E: Element> Matrix<E> {
    pub fn new() -> Self {
        Self { table: HashMap::new(), symmetric: true, match_cost: 1.0, mismatch_cost: 0.0 }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = ((E, E), f64)>) -> Self {
        let mut matrix = Self::new();
        matrix.table = entries.into_iter().collect();
        matrix
    }

    /// Only consult pairs in the exact order given.
    pub fn asymmetric(mut self) -> Self {
        self.symmetric = false;
        self
    }

    pub fn with_costs(mut self, match_cost: f64, mismatch_cost: f64) -> Self {
        self.match_cost = match_cost;
        self.mismatch_cost = mismatch_cost;
        self
    }

    /// Score one element pair.
    pub fn sim(&self, a: &E, b: &E) -> f64 {
        if !self.table.is_empty() {
            if let Some(&v) = self.table.get(&(a.clone(), b.clone())) {
                return v;
            }
            if self.symmetric {
                if let Some(&v) = self.table.get(&(b.clone(), a.clone())) {
                    return v;
                }
            }
        }
        if a == b { self.match_cost } else { self.mismatch_cost }
    }
}

impl<E: Element> Default for Matrix<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> SimScorer<E> for Matrix<E> {
    fn score(&self, a: &E, b: &E) -> f64 {
        self.sim(a, b)
    }
}

/// Standalone scoring of two strings: single-character inputs go through
/// the table, anything else scores by whole-string identity. Quick-answer
/// shortcuts are bypassed so table entries for identical pairs apply.
impl TextMetric for Matrix<char> {
    fn str_kind(&self) -> Kind {
        Kind::Similarity
    }

    fn str_maximum(&self, _seqs: &[&str]) -> f64 {
        self.match_cost
    }

    fn str_call(&self, seqs: &[&str]) -> Result<f64> {
        if seqs.iter().any(|s| s.is_empty()) {
            return Ok(self.mismatch_cost);
        }
        if let &[a, b] = seqs {
            let mut ca = a.chars();
            let mut cb = b.chars();
            if let (Some(x), None, Some(y), None) = (ca.next(), ca.next(), cb.next(), cb.next()) {
                return Ok(self.sim(&x, &y));
            }
        }
        let identical = seqs.windows(2).all(|w| w[0] == w[1]);
        Ok(if identical { self.match_cost } else { self.mismatch_cost })
    }

    fn str_similarity(&self, seqs: &[&str]) -> Result<f64> {
        self.str_call(seqs)
    }

    fn str_distance(&self, seqs: &[&str]) -> Result<f64> {
        Ok(self.str_maximum(seqs) - self.str_call(seqs)?)
    }
}

//! Ratcliff-Obershelp gestalt pattern matching.

use crate::base::{Configured, Element, Kind, Metric};
use crate::sequence::LcsStr;
use crate::Result;

/// Find the longest common substring, recurse on what lies left and right
/// of it in every input, and relate the total matched length to the total
/// input length.
#[derive(Debug, Clone)]
pub struct RatcliffObershelp {
    qval: Option<usize>,
}

impl RatcliffObershelp {
    pub fn new() -> Self {
        Self { qval: Some(1) }
    }
}

impl Default for RatcliffObershelp {
    fn default() -> Self {
        Self::new()
    }
}

fn matched_total<E: Element>(seqs: &[Vec<E>]) -> usize {
    let views: Vec<&[E]> = seqs.iter().map(|v| v.as_slice()).collect();
    let sub = LcsStr::new().common(&views);
    if sub.is_empty() {
        return 0;
    }
    let len = sub.len();
    let mut before = Vec::with_capacity(seqs.len());
    let mut after = Vec::with_capacity(seqs.len());
    for s in seqs {
        let pos = s
            .windows(len)
            .position(|w| w == &sub[..])
            .unwrap_or(0);
        before.push(s[..pos].to_vec());
        after.push(s[pos + len..].to_vec());
    }
    len + matched_total(&before) + matched_total(&after)
}

impl Configured for RatcliffObershelp {
    fn qval(&self) -> Option<usize> {
        self.qval
    }
}

impl<E: Element> Metric<E> for RatcliffObershelp {
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
        let total_len: usize = seqs.iter().map(|s| s.len()).sum();
        if total_len == 0 {
            return Ok(0.0);
        }
        let owned: Vec<Vec<E>> = seqs.iter().map(|s| s.to_vec()).collect();
        let matched = matched_total(&owned);
        Ok((seqs.len() * matched) as f64 / total_len as f64)
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
    fn classic_pairs() {
        let ro = RatcliffObershelp::new();
        close(ro.str_similarity(&["test", "text"]).unwrap(), 0.75);
        close(
            ro.str_similarity(&["mathematics", "matematica"]).unwrap(),
            2.0 * 9.0 / 21.0,
        );
    }

    #[test]
    fn bounds() {
        let ro = RatcliffObershelp::new();
        close(ro.str_similarity(&["spam", "qwer"]).unwrap(), 0.0);
        close(ro.str_similarity(&["same", "same"]).unwrap(), 1.0);
        close(ro.str_normalized_similarity(&["same", "same"]).unwrap(), 1.0);
    }
}

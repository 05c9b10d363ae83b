//! Jaro and Jaro-Winkler similarity.

use smallvec::SmallVec;

use crate::base::{BackendSlot, Configured, Element, Kind, Metric};
use crate::external::CallFlags;
use crate::Result;

const PREFIX_WEIGHT: f64 = 0.1;
const BOOST_THRESHOLD: f64 = 0.7;
const MAX_PREFIX: usize = 4;

/// Matched pairs are searched inside a window of
/// `max(len) / 2 - 1` positions; transpositions are half the flagged pairs
/// that disagree. Weight is the mean of three match ratios.
fn jaro_weight<E: Element>(
    s1: &[E],
    s2: &[E],
    winklerize: bool,
    long_tolerance: bool,
    prefix_weight: f64,
) -> f64 {
    let (len1, len2) = (s1.len(), s2.len());
    if len1 == 0 || len2 == 0 {
        return 0.0;
    }
    let min_len = len1.min(len2);
    let search_range = (len1.max(len2) / 2).saturating_sub(1);

    let mut flags1: SmallVec<[bool; 64]> = SmallVec::from_elem(false, len1);
    let mut flags2: SmallVec<[bool; 64]> = SmallVec::from_elem(false, len2);

    // flag matched pairs; each position is consumed at most once
    let mut common = 0usize;
    for (i, e1) in s1.iter().enumerate() {
        let low = i.saturating_sub(search_range);
        let high = (i + search_range).min(len2 - 1);
        for j in low..=high {
            if !flags2[j] && &s2[j] == e1 {
                flags1[i] = true;
                flags2[j] = true;
                common += 1;
                break;
            }
        }
    }
    if common == 0 {
        return 0.0;
    }

    // transpositions: flagged elements, in order, that disagree
    let a: SmallVec<[&E; 64]> =
        s1.iter().zip(&flags1).filter(|&(_, &f)| f).map(|(e, _)| e).collect();
    let b: SmallVec<[&E; 64]> =
        s2.iter().zip(&flags2).filter(|&(_, &f)| f).map(|(e, _)| e).collect();
    let transpositions = a.iter().zip(&b).filter(|(x, y)| x != y).count() / 2;

    let m = common as f64;
    let t = transpositions as f64;
    let mut weight = (m / len1 as f64 + m / len2 as f64 + (m - t) / m) / 3.0;

    if winklerize && weight > BOOST_THRESHOLD {
        // boost for up to four leading elements in common
        let cap = min_len.min(MAX_PREFIX);
        let mut prefix = 0usize;
        while prefix < cap && s1[prefix] == s2[prefix] {
            prefix += 1;
        }
        if prefix > 0 {
            weight += prefix as f64 * prefix_weight * (1.0 - weight);
        }
        // long-string adjustment: agreed elements must dominate the tail
        if long_tolerance
            && min_len > 4
            && common > prefix + 1
            && 2 * common >= min_len + prefix
        {
            weight += (1.0 - weight) * (m - prefix as f64 - 1.0)
                / ((len1 + len2 - 2 * prefix + 2) as f64);
        }
    }
    weight
}

/// Jaro similarity in [0, 1].
#[derive(Debug, Clone)]
pub struct Jaro {
    long_tolerance: bool,
    qval: Option<usize>,
    external: bool,
    backends: BackendSlot,
}

impl Jaro {
    pub fn new() -> Self {
        Self { long_tolerance: false, qval: Some(1), external: true, backends: BackendSlot::new() }
    }

    pub fn with_long_tolerance(mut self) -> Self {
        self.long_tolerance = true;
        self
    }

    pub fn without_external(mut self) -> Self {
        self.external = false;
        self
    }
}

impl Default for Jaro {
    fn default() -> Self {
        Self::new()
    }
}

impl Configured for Jaro {
    fn external_enabled(&self) -> bool {
        self.external
    }

    fn qval(&self) -> Option<usize> {
        self.qval
    }

    fn backend(&self) -> Option<(&'static str, &BackendSlot)> {
        Some(("Jaro", &self.backends))
    }

    fn call_flags(&self) -> CallFlags {
        CallFlags {
            winklerize: Some(false),
            long_tolerance: Some(self.long_tolerance),
            ..CallFlags::default()
        }
    }
}

impl<E: Element> Metric<E> for Jaro {
    fn kind(&self) -> Kind {
        Kind::Similarity
    }

    fn maximum(&self, _seqs: &[&[E]]) -> f64 {
        1.0
    }

    fn call(&self, seqs: &[&[E]]) -> Result<f64> {
        let &[s1, s2] = seqs else { return Ok(0.0) };
        Ok(jaro_weight(s1, s2, false, self.long_tolerance, PREFIX_WEIGHT))
    }
}

/// Jaro-Winkler similarity: Jaro plus a common-prefix boost once the base
/// weight clears 0.7.
#[derive(Debug, Clone)]
pub struct JaroWinkler {
    winklerize: bool,
    long_tolerance: bool,
    prefix_weight: f64,
    qval: Option<usize>,
    external: bool,
    backends: BackendSlot,
}

impl JaroWinkler {
    pub fn new() -> Self {
        Self {
            winklerize: true,
            long_tolerance: false,
            prefix_weight: PREFIX_WEIGHT,
            qval: Some(1),
            external: true,
            backends: BackendSlot::new(),
        }
    }

    /// Disable the prefix boost, reducing to plain Jaro.
    pub fn without_winklerize(mut self) -> Self {
        self.winklerize = false;
        self
    }

    pub fn with_long_tolerance(mut self) -> Self {
        self.long_tolerance = true;
        self
    }

    pub fn with_prefix_weight(mut self, weight: f64) -> Self {
        self.prefix_weight = weight;
        self
    }

    pub fn without_external(mut self) -> Self {
        self.external = false;
        self
    }
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self::new()
    }
}

impl Configured for JaroWinkler {
    fn external_enabled(&self) -> bool {
        self.external
    }

    fn qval(&self) -> Option<usize> {
        self.qval
    }

    fn backend(&self) -> Option<(&'static str, &BackendSlot)> {
        Some(("JaroWinkler", &self.backends))
    }

    fn call_flags(&self) -> CallFlags {
        CallFlags {
            winklerize: Some(self.winklerize),
            long_tolerance: Some(self.long_tolerance),
            ..CallFlags::default()
        }
    }
}

impl<E: Element> Metric<E> for JaroWinkler {
    fn kind(&self) -> Kind {
        Kind::Similarity
    }

    fn maximum(&self, _seqs: &[&[E]]) -> f64 {
        1.0
    }

    fn call(&self, seqs: &[&[E]]) -> Result<f64> {
        let &[s1, s2] = seqs else { return Ok(0.0) };
        Ok(jaro_weight(s1, s2, self.winklerize, self.long_tolerance, self.prefix_weight))
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
    fn jaro_martha() {
        let jaro = Jaro::new().without_external();
        close(jaro.str_similarity(&["MARTHA", "MARHTA"]).unwrap(), 17.0 / 18.0);
    }

    #[test]
    fn jaro_winkler_martha() {
        let jw = JaroWinkler::new().without_external();
        close(jw.str_similarity(&["MARTHA", "MARHTA"]).unwrap(), 0.9611111111111111);
    }

    #[test]
    fn without_winklerize_matches_jaro() {
        let jw = JaroWinkler::new().without_winklerize().without_external();
        let jaro = Jaro::new().without_external();
        for pair in [["MARTHA", "MARHTA"], ["DWAYNE", "DUANE"], ["spam", "qwer"]] {
            close(
                jw.str_similarity(&pair).unwrap(),
                jaro.str_similarity(&pair).unwrap(),
            );
        }
    }

    #[test]
    fn disjoint_inputs_score_zero() {
        let jw = JaroWinkler::new().without_external();
        close(jw.str_similarity(&["spam", "qwer"]).unwrap(), 0.0);
    }

    #[test]
    fn symmetric() {
        let jw = JaroWinkler::new().without_external();
        close(
            jw.str_similarity(&["DWAYNE", "DUANE"]).unwrap(),
            jw.str_similarity(&["DUANE", "DWAYNE"]).unwrap(),
        );
    }
}

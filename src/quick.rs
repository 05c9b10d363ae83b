//! One-shot helpers over default-configured algorithms.
//!
//! Mirrors the library's prebuilt-instance style of use: each function
//! constructs the algorithm with defaults and runs a single two-string
//! comparison. For repeated comparisons, build the algorithm once and
//! reuse it — construction is cheap but not free.

use crate::base::TextMetric;
use crate::compression::EntropyNcd;
use crate::edit::{DamerauLevenshtein, Hamming, JaroWinkler, Levenshtein};
use crate::sequence::{LcsSeq, LcsStr, RatcliffObershelp};
use crate::token::{Cosine, Jaccard, Sorensen};
use crate::Result;

/// Hamming distance (tails count as mismatches).
pub fn hamming(a: &str, b: &str) -> Result<f64> {
    Hamming::new().str_distance(&[a, b])
}

/// Levenshtein edit distance.
pub fn levenshtein(a: &str, b: &str) -> Result<f64> {
    Levenshtein::new().str_distance(&[a, b])
}

/// Damerau-Levenshtein distance (restricted, optimal string alignment).
pub fn damerau_levenshtein(a: &str, b: &str) -> Result<f64> {
    DamerauLevenshtein::new().str_distance(&[a, b])
}

/// Jaro-Winkler similarity.
pub fn jaro_winkler(a: &str, b: &str) -> Result<f64> {
    JaroWinkler::new().str_similarity(&[a, b])
}

/// Jaccard similarity over characters.
pub fn jaccard(a: &str, b: &str) -> Result<f64> {
    Jaccard::new().str_similarity(&[a, b])
}

/// Sorensen-Dice similarity over characters.
pub fn sorensen(a: &str, b: &str) -> Result<f64> {
    Sorensen::new().str_similarity(&[a, b])
}

/// Cosine (Ochiai) similarity over characters.
pub fn cosine(a: &str, b: &str) -> Result<f64> {
    Cosine::new().str_similarity(&[a, b])
}

/// Length of the longest common subsequence.
pub fn lcsseq(a: &str, b: &str) -> Result<f64> {
    LcsSeq::new().str_similarity(&[a, b])
}

/// Length of the longest common substring.
pub fn lcsstr(a: &str, b: &str) -> Result<f64> {
    LcsStr::new().str_similarity(&[a, b])
}

/// Ratcliff-Obershelp similarity.
pub fn ratcliff_obershelp(a: &str, b: &str) -> Result<f64> {
    RatcliffObershelp::new().str_similarity(&[a, b])
}

/// Entropy-NCD normalized distance.
pub fn entropy_ncd(a: &str, b: &str) -> Result<f64> {
    EntropyNcd::new().str_normalized_distance(&[a, b])
}

/// The candidate closest to `needle` by an algorithm's distance, with its
/// distance. `None` when `haystack` is empty.
pub fn closest<'a, M, I>(alg: &M, needle: &str, haystack: I) -> Result<Option<(&'a str, f64)>>
where
    M: TextMetric,
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, f64)> = None;
    for candidate in haystack {
        let d = alg.str_distance(&[needle, candidate])?;
        match best {
            Some((_, best_d)) if best_d <= d => {}
            _ => best = Some((candidate, d)),
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::Levenshtein;

    #[test]
    fn helpers_use_default_configuration() {
        assert_eq!(levenshtein("test", "text").unwrap(), 1.0);
        assert_eq!(hamming("test", "testit").unwrap(), 2.0);
        assert_eq!(damerau_levenshtein("ab", "bca").unwrap(), 3.0);
        assert_eq!(lcsstr("MYTESTMYTEST", "TEST").unwrap(), 4.0);
    }

    #[test]
    fn closest_picks_the_minimum_distance() {
        let alg = Levenshtein::new().without_external();
        let found = closest(&alg, "test", ["text", "toast", "test1"]).unwrap();
        let (word, d) = found.unwrap();
        assert_eq!(d, 1.0);
        assert!(word == "text" || word == "test1");
        assert_eq!(closest(&alg, "x", std::iter::empty()).unwrap(), None);
    }
}

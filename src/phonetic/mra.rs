//! Match Rating Approach — the Western Airlines surname comparator.

use smallvec::SmallVec;

use crate::base::{Kind, TextMetric};
use crate::Result;

/// MRA encodes each word, then repeatedly strikes matching columns;
/// the similarity is how much of the longest code survives comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mra;

impl Mra {
    pub fn new() -> Self {
        Self
    }

    /// Encode one word: keep the first letter, drop non-initial vowels,
    /// collapse runs, and squeeze codes longer than six to first 3 + last 3.
    pub fn encode(word: &str) -> Vec<char> {
        if word.is_empty() {
            return Vec::new();
        }
        let upper: Vec<char> = word.to_uppercase().chars().collect();
        let mut code: SmallVec<[char; 16]> = SmallVec::new();
        for (i, &c) in upper.iter().enumerate() {
            if i == 0 || !"AEIOU".contains(c) {
                code.push(c);
            }
        }
        code.dedup();
        if code.len() > 6 {
            let mut squeezed: Vec<char> = code[..3].to_vec();
            squeezed.extend_from_slice(&code[code.len() - 3..]);
            return squeezed;
        }
        code.to_vec()
    }

    fn rating(codes: Vec<Vec<char>>) -> f64 {
        let count = codes.len();
        let mut seqs = codes;
        let mut lengths: Vec<usize> = seqs.iter().map(|s| s.len()).collect();
        let max_length = lengths.iter().copied().max().unwrap_or(0);
        let min_length = lengths.iter().copied().min().unwrap_or(0);
        if max_length - min_length > count {
            return 0.0;
        }

        for _ in 0..count {
            let minlen = lengths.iter().copied().min().unwrap_or(0);
            // keep only the columns where the codes disagree
            let mut kept: Vec<Vec<char>> = vec![Vec::new(); seqs.len()];
            for col in 0..minlen {
                let first = seqs[0][col];
                if !seqs.iter().all(|s| s[col] == first) {
                    for (k, s) in seqs.iter().enumerate() {
                        kept[k].push(s[col]);
                    }
                }
            }
            for (k, s) in seqs.iter_mut().enumerate() {
                let tail: Vec<char> = s[minlen..].to_vec();
                let mut next = std::mem::take(&mut kept[k]);
                next.extend(tail);
                *s = next;
            }
            lengths = seqs.iter().map(|s| s.len()).collect();
        }

        (max_length - lengths.iter().copied().max().unwrap_or(0)) as f64
    }
}

impl TextMetric for Mra {
    fn str_kind(&self) -> Kind {
        Kind::Similarity
    }

    fn str_maximum(&self, seqs: &[&str]) -> f64 {
        seqs.iter().map(|s| Self::encode(s).len()).max().unwrap_or(0) as f64
    }

    fn str_call(&self, seqs: &[&str]) -> Result<f64> {
        Ok(Self::rating(seqs.iter().map(|s| Self::encode(s)).collect()))
    }
}

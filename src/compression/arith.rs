//! Arithmetic-coding "compressor".
//!
//! Characters are mapped to probability intervals built from the input's
//! own frequency table (plus a terminator of count 1); coding narrows
//! `[start, start + width)` per character, and the compressed size is the
//! bit length of the smallest dyadic fraction inside the final interval.
//! Exact big-rational arithmetic keeps long inputs correct.

use hashbrown::HashMap;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::base::{Kind, TextMetric};
use crate::compression::ncd;
use crate::multiset::Multiset;
use crate::Result;

#[derive(Debug, Clone)]
pub struct ArithNcd {
    base: u32,
    terminator: char,
}

impl ArithNcd {
    pub fn new() -> Self {
        Self { base: 2, terminator: '\0' }
    }

    pub fn with_base(mut self, base: u32) -> Self {
        self.base = base.max(2);
        self
    }

    pub fn with_terminator(mut self, terminator: char) -> Self {
        self.terminator = terminator;
        self
    }

    /// Interval table: `char -> (cumulative start, width)`, most frequent
    /// first, terminator counted once.
    fn probs(&self, seq: &[char]) -> HashMap<char, (BigRational, BigRational)> {
        let counts = Multiset::from_elements(seq);
        let mut items: Vec<(char, usize)> =
            counts.iter().map(|(&c, n)| (c, n)).collect();
        match items.iter_mut().find(|(c, _)| *c == self.terminator) {
            Some(entry) => entry.1 += 1,
            None => items.push((self.terminator, 1)),
        }
        // most frequent first; ties broken by character, descending
        items.sort_by(|a, b| (b.1, b.0).cmp(&(a.1, a.0)));

        let total: usize = items.iter().map(|(_, n)| n).sum();
        let total = BigInt::from(total);
        let mut table = HashMap::with_capacity(items.len());
        let mut cumulative = BigInt::zero();
        for (c, count) in items {
            let count = BigInt::from(count);
            table.insert(
                c,
                (
                    BigRational::new(cumulative.clone(), total.clone()),
                    BigRational::new(count.clone(), total.clone()),
                ),
            );
            cumulative += count;
        }
        table
    }

    /// Numerator of the smallest dyadic fraction inside the coded interval.
    pub(crate) fn compress(&self, seq: &[char]) -> BigInt {
        let probs = self.probs(seq);
        let mut start = BigRational::zero();
        let mut width = BigRational::one();
        let coded = seq
            .iter()
            .copied()
            .filter(|&c| c != self.terminator)
            .chain(std::iter::once(self.terminator));
        for c in coded {
            let (prob_start, prob_width) = &probs[&c];
            start += prob_start * &width;
            width *= prob_width;
        }
        let end = &start + &width;

        let mut output = BigRational::zero();
        let mut denominator = BigInt::one();
        let mut numerator = BigInt::zero();
        while !(start <= output && output < end) {
            numerator = BigInt::one() + (start.numer() * &denominator) / start.denom();
            output = BigRational::new(numerator.clone(), denominator.clone());
            denominator *= 2;
        }
        numerator
    }

    fn size(&self, seq: &[char]) -> f64 {
        let numerator = self.compress(seq);
        if numerator <= BigInt::zero() {
            return 0.0;
        }
        // smallest k with base^k >= numerator, i.e. ceil(log_base numerator)
        let mut k = 0u64;
        let mut power = BigInt::one();
        while power < numerator {
            power *= self.base;
            k += 1;
        }
        k as f64
    }
}

impl Default for ArithNcd {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMetric for ArithNcd {
    fn str_kind(&self) -> Kind {
        Kind::Distance
    }

    fn str_maximum(&self, _seqs: &[&str]) -> f64 {
        1.0
    }

    fn str_call(&self, seqs: &[&str]) -> Result<f64> {
        let owned: Vec<Vec<char>> = seqs.iter().map(|s| s.chars().collect()).collect();
        let views: Vec<&[char]> = owned.iter().map(|v| v.as_slice()).collect();
        ncd(&views, |s| Ok(self.size(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn banana_compresses_to_1525() {
        let arith = ArithNcd::new();
        assert_eq!(arith.compress(&chars("BANANA")), BigInt::from(1525));
    }

    #[test]
    fn size_is_ceil_log2_of_the_numerator() {
        let arith = ArithNcd::new();
        // ceil(log2(1525)) = 11
        assert_eq!(arith.size(&chars("BANANA")), 11.0);
    }

    #[test]
    fn monotone_over_similarity() {
        let arith = ArithNcd::new();
        let same = arith.str_distance(&["test", "test"]).unwrap();
        let similar = arith.str_distance(&["test", "text"]).unwrap();
        let different = arith.str_distance(&["test", "nani"]).unwrap();
        assert!(same <= similar);
        assert!(similar <= different);
    }

    #[test]
    fn identical_inputs_are_zero() {
        let arith = ArithNcd::new();
        assert_eq!(arith.str_distance(&["test", "test"]).unwrap(), 0.0);
    }

    #[test]
    fn three_inputs_use_the_permutation_formula() {
        let arith = ArithNcd::new();
        // sizes are 7 each, the best three-way concatenation codes to 25:
        // (25 - 2 * 7) / 7
        let d = arith.str_distance(&["test", "text", "tent"]).unwrap();
        assert!((d - 11.0 / 7.0).abs() < 1e-9, "{d}");
    }

    #[test]
    fn input_order_does_not_matter() {
        let arith = ArithNcd::new();
        let orderings = [
            ["test", "text", "tent"],
            ["tent", "test", "text"],
            ["text", "tent", "test"],
        ];
        let first = arith.str_distance(&orderings[0]).unwrap();
        for ordering in &orderings[1..] {
            assert_eq!(arith.str_distance(ordering).unwrap(), first);
        }
    }
}

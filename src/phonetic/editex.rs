//! Editex — edit distance with phonetic letter groups.

use crate::base::{fold_pairs, Kind, TextMetric};
use crate::{Error, Result};

/// Letters inside one group substitute at `group_cost` instead of
/// `mismatch_cost`.
const GROUPS: &[&str] = &[
    "AEIOUY", "BP", "CKQ", "DT", "LR", "MN", "GJ", "FPV", "SXZ", "CSZ",
];

/// Silent letters: deleting one costs `group_cost`, not `mismatch_cost`.
const UNGROUPED: &str = "HW";

/// Phonetic edit distance over uppercased input with three costs,
/// constrained `match <= group <= mismatch`.
#[derive(Debug, Clone)]
pub struct Editex {
    local: bool,
    match_cost: usize,
    group_cost: usize,
    mismatch_cost: usize,
    groups: Vec<Vec<char>>,
    ungrouped: Vec<char>,
}

impl Editex {
    pub fn new() -> Self {
        Self {
            local: false,
            match_cost: 0,
            group_cost: 1,
            mismatch_cost: 2,
            groups: GROUPS.iter().map(|g| g.chars().collect()).collect(),
            ungrouped: UNGROUPED.chars().collect(),
        }
    }

    /// Local variant: the first row of the table stays zero, so a common
    /// suffix alignment is not charged for the leading prefix.
    pub fn local(mut self) -> Self {
        self.local = true;
        self
    }

    /// Costs are clamped so `match <= group <= mismatch` always holds.
    pub fn with_costs(mut self, match_cost: usize, group_cost: usize, mismatch_cost: usize) -> Self {
        self.match_cost = match_cost;
        self.group_cost = group_cost.max(match_cost);
        self.mismatch_cost = mismatch_cost.max(self.group_cost);
        self
    }

    /// Replace the phonetic tables. A custom `groups` set requires the
    /// matching `ungrouped` set; omitting it is an error.
    pub fn with_tables(
        groups: Vec<Vec<char>>,
        ungrouped: Option<Vec<char>>,
    ) -> Result<Self> {
        let Some(ungrouped) = ungrouped else {
            return Err(Error::InvalidOption(
                "`ungrouped` required with `groups`".into(),
            ));
        };
        let mut editex = Self::new();
        editex.groups = groups;
        editex.ungrouped = ungrouped;
        Ok(editex)
    }

    fn grouped(&self, c: char) -> bool {
        self.groups.iter().any(|g| g.contains(&c))
    }

    fn r_cost(&self, a: char, b: char) -> usize {
        if a == b {
            return self.match_cost;
        }
        if !self.grouped(a) || !self.grouped(b) {
            return self.mismatch_cost;
        }
        if self.groups.iter().any(|g| g.contains(&a) && g.contains(&b)) {
            return self.group_cost;
        }
        self.mismatch_cost
    }

    fn d_cost(&self, prev: char, curr: char) -> usize {
        if prev != curr && self.ungrouped.contains(&prev) {
            return self.group_cost;
        }
        self.r_cost(prev, curr)
    }

    fn compute(&self, a: &str, b: &str) -> f64 {
        // max length is taken before uppercasing: some lowercase glyphs
        // uppercase to more than one character
        let max_length = self.str_maximum(&[a, b]);

        let s1: Vec<char> = std::iter::once(' ').chain(a.to_uppercase().chars()).collect();
        let s2: Vec<char> = std::iter::once(' ').chain(b.to_uppercase().chars()).collect();
        let n = s1.len() - 1;
        let m = s2.len() - 1;

        let mut d = vec![vec![0usize; m + 1]; n + 1];
        if !self.local {
            for i in 1..=n {
                d[i][0] = d[i - 1][0] + self.d_cost(s1[i - 1], s1[i]);
            }
        }
        for j in 1..=m {
            d[0][j] = d[0][j - 1] + self.d_cost(s2[j - 1], s2[j]);
        }

        for i in 1..=n {
            for j in 1..=m {
                d[i][j] = (d[i - 1][j] + self.d_cost(s1[i - 1], s1[i]))
                    .min(d[i][j - 1] + self.d_cost(s2[j - 1], s2[j]))
                    .min(d[i - 1][j - 1] + self.r_cost(s1[i], s2[j]));
            }
        }
        (d[n][m] as f64).min(max_length)
    }
}

impl Default for Editex {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMetric for Editex {
    fn str_kind(&self) -> Kind {
        Kind::Distance
    }

    fn str_maximum(&self, seqs: &[&str]) -> f64 {
        let max_len = seqs.iter().map(|s| s.chars().count()).max().unwrap_or(0);
        (max_len * self.mismatch_cost) as f64
    }

    fn str_call(&self, seqs: &[&str]) -> Result<f64> {
        if seqs.len() > 2 {
            return fold_pairs(seqs.len(), Kind::Distance, |i, j| {
                self.str_call(&[seqs[i], seqs[j]])
            });
        }
        let &[a, b] = seqs else { return Ok(0.0) };
        Ok(self.compute(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phonetic_neighbors_are_cheap() {
        let e = Editex::new();
        assert_eq!(e.str_distance(&["nelson", "neilsen"]).unwrap(), 2.0);
        assert_eq!(e.str_distance(&["ATCG", "TAGC"]).unwrap(), 6.0);
    }

    #[test]
    fn empty_against_word_is_the_maximum() {
        let e = Editex::new();
        assert_eq!(e.str_distance(&["", "MARTHA"]).unwrap(), 12.0);
        assert_eq!(e.str_distance(&["", ""]).unwrap(), 0.0);
    }

    #[test]
    fn case_insensitive() {
        let e = Editex::new();
        assert_eq!(e.str_distance(&["MARTHA", "martha"]).unwrap(), 0.0);
    }

    #[test]
    fn custom_groups_require_ungrouped() {
        let err = Editex::with_tables(vec![vec!['A', 'B']], None);
        assert!(matches!(err, Err(crate::Error::InvalidOption(_))));
        assert!(Editex::with_tables(vec![vec!['A', 'B']], Some(vec!['H'])).is_ok());
    }

    #[test]
    fn costs_stay_monotone() {
        // group below match gets clamped up, mismatch below group likewise
        let e = Editex::new().with_costs(2, 1, 0);
        assert_eq!(e.str_distance(&["AB", "AB"]).unwrap(), 0.0);
        let d = e.str_distance(&["AB", "AC"]).unwrap();
        assert!(d >= 0.0);
    }

    #[test]
    fn local_mode_skips_leading_prefix_charge() {
        let global = Editex::new();
        let local = Editex::new().local();
        let g = global.str_distance(&["nelson", "neilsen"]).unwrap();
        let l = local.str_distance(&["nelson", "neilsen"]).unwrap();
        assert!(l <= g);
    }
}

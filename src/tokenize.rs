//! Tokenization — q-gram windows, word splitting, element iteration.
//!
//! An algorithm's `qval` picks the granularity of the string surface:
//! `None` splits on Unicode whitespace into word tokens, `Some(1)` compares
//! code points, `Some(q)` with `q >= 2` compares overlapping q-grams.

use smallvec::SmallVec;

/// Consecutive length-`q` windows over a sequence.
///
/// Yields `max(0, len - q + 1)` windows. For `q == 1` the windows borrow the
/// input element-by-element — nothing is allocated.
pub fn ngrams<T>(seq: &[T], q: usize) -> impl Iterator<Item = &[T]> {
    seq.windows(q.max(1))
}

/// Code points of a string.
pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Whitespace-separated word tokens, borrowed from the input.
pub fn words(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

/// Overlapping q-grams of a string as zero-copy substrings.
///
/// Boundaries are code-point boundaries, so each gram holds exactly `q`
/// characters regardless of their UTF-8 width.
pub fn str_grams(s: &str, q: usize) -> Vec<&str> {
    let q = q.max(1);
    let bounds: SmallVec<[usize; 64]> = s
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .collect();
    if bounds.len() <= q {
        return Vec::new();
    }
    (0..bounds.len() - q)
        .map(|i| &s[bounds[i]..bounds[i + q]])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ngrams_counts() {
        let seq: Vec<char> = "abcd".chars().collect();
        assert_eq!(ngrams(&seq, 2).count(), 3);
        assert_eq!(ngrams(&seq, 4).count(), 1);
        assert_eq!(ngrams(&seq, 5).count(), 0);
        assert_eq!(ngrams(&seq, 1).count(), 4);
    }

    #[test]
    fn ngrams_windows_are_contiguous() {
        let seq: Vec<char> = "abcd".chars().collect();
        let grams: Vec<&[char]> = ngrams(&seq, 2).collect();
        assert_eq!(grams[0], &['a', 'b']);
        assert_eq!(grams[2], &['c', 'd']);
    }

    #[test]
    fn words_split_on_any_whitespace() {
        assert_eq!(words("a  b\tc\n"), vec!["a", "b", "c"]);
        assert!(words("   ").is_empty());
    }

    #[test]
    fn str_grams_respect_char_boundaries() {
        assert_eq!(str_grams("naïve", 2), vec!["na", "aï", "ïv", "ve"]);
        assert!(str_grams("ab", 3).is_empty());
    }
}

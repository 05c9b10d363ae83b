//! External-backend dispatch: kernel and backend must agree wherever a
//! backend's preconditions hold.

#![cfg(feature = "ext-strsim")]

use textdist::{DamerauLevenshtein, Hamming, Jaro, JaroWinkler, Levenshtein, TextMetric};

fn close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn external_and_internal_agree() {
    let pairs = [
        ["test", "text"],
        ["MARTHA", "MARHTA"],
        ["ab", "bca"],
        ["kitten", "sitting"],
        ["", "spam"],
        ["same", "same"],
    ];
    for pair in pairs {
        close(
            Levenshtein::new().str_distance(&pair).unwrap(),
            Levenshtein::new().without_external().str_distance(&pair).unwrap(),
        );
        close(
            DamerauLevenshtein::new().str_distance(&pair).unwrap(),
            DamerauLevenshtein::new().without_external().str_distance(&pair).unwrap(),
        );
        close(
            Jaro::new().str_similarity(&pair).unwrap(),
            Jaro::new().without_external().str_similarity(&pair).unwrap(),
        );
        close(
            JaroWinkler::new().str_similarity(&pair).unwrap(),
            JaroWinkler::new().without_external().str_similarity(&pair).unwrap(),
        );
    }
}

#[test]
fn each_damerau_variant_picks_its_matching_backend() {
    // the restricted default resolves to osa_distance
    let osa = DamerauLevenshtein::new();
    close(osa.str_distance(&["ab", "bca"]).unwrap(), 3.0);

    // the unrestricted variant resolves to damerau_levenshtein
    let unrestricted = DamerauLevenshtein::new().unrestricted();
    let internal = DamerauLevenshtein::new().unrestricted().without_external();
    close(unrestricted.str_distance(&["ab", "bca"]).unwrap(), 2.0);
    close(
        unrestricted.str_distance(&["abcd", "bdac"]).unwrap(),
        internal.str_distance(&["abcd", "bdac"]).unwrap(),
    );
}

#[test]
fn hamming_backend_requires_equal_lengths() {
    // unequal lengths fail the precondition: the internal kernel answers
    let h = Hamming::new();
    assert_eq!(h.str_distance(&["test", "testit"]).unwrap(), 2.0);
    assert_eq!(h.str_distance(&["test", "text"]).unwrap(), 1.0);
}

#[test]
fn word_granularity_skips_external_dispatch() {
    let lev = Levenshtein::new().with_qval(None);
    assert_eq!(lev.str_distance(&["spam and eggs", "spam or eggs"]).unwrap(), 1.0);
}

#[test]
fn normalized_forms_flow_through_dispatch() {
    let lev = Levenshtein::new();
    let nd = lev.str_normalized_distance(&["kitten", "sitting"]).unwrap();
    close(nd, 3.0 / 7.0);
    close(lev.str_normalized_similarity(&["kitten", "sitting"]).unwrap(), 4.0 / 7.0);
}

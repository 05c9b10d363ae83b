//! End-to-end scenarios for the edit-based family.

use pretty_assertions::assert_eq;
use textdist::{
    DamerauLevenshtein, Gotoh, Hamming, Jaro, JaroWinkler, Levenshtein, Matrix, Metric,
    Mlipns, NeedlemanWunsch, SmithWaterman, StrCmp95, TextMetric,
};

fn close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

// ============================================================================
// 1. Hamming
// ============================================================================

#[test]
fn hamming_scenarios() {
    let h = Hamming::new().without_external();
    assert_eq!(h.str_distance(&["test", "text"]).unwrap(), 1.0);
    assert_eq!(h.str_distance(&["test", "tset"]).unwrap(), 2.0);
    assert_eq!(h.str_distance(&["test", "testit"]).unwrap(), 2.0);
    assert_eq!(h.str_distance(&["test", "qwe"]).unwrap(), 4.0);
}

// ============================================================================
// 2. Levenshtein
// ============================================================================

#[test]
fn levenshtein_scenarios() {
    let lev = Levenshtein::new().without_external();
    assert_eq!(lev.str_distance(&["test", "tesst"]).unwrap(), 1.0);
    assert_eq!(lev.str_distance(&["test", "tet"]).unwrap(), 1.0);
    assert_eq!(lev.str_distance(&["test", "qwe"]).unwrap(), 4.0);
}

// ============================================================================
// 3. Damerau-Levenshtein, both variants
// ============================================================================

#[test]
fn damerau_scenarios() {
    // the default is the restricted (optimal string alignment) form
    let restricted = DamerauLevenshtein::new().without_external();
    assert_eq!(restricted.str_distance(&["ab", "bca"]).unwrap(), 3.0);
    assert_eq!(restricted.str_distance(&["abcd", "bdac"]).unwrap(), 4.0);

    let unrestricted = DamerauLevenshtein::new().unrestricted().without_external();
    assert_eq!(unrestricted.str_distance(&["ab", "bca"]).unwrap(), 2.0);
    assert_eq!(unrestricted.str_distance(&["abcd", "bdac"]).unwrap(), 3.0);
}

// ============================================================================
// 4. Jaro family
// ============================================================================

#[test]
fn jaro_scenarios() {
    let jaro = Jaro::new().without_external();
    close(jaro.str_similarity(&["MARTHA", "MARHTA"]).unwrap(), 0.944444444444444444);

    let jw = JaroWinkler::new().without_external();
    close(jw.str_similarity(&["MARTHA", "MARHTA"]).unwrap(), 0.961111111111111111);

    let sc = StrCmp95::new();
    close(sc.str_similarity(&["MARTHA", "MARHTA"]).unwrap(), 0.961111111111111111);
}

#[test]
fn mlipns_scenarios() {
    let m = Mlipns::new();
    assert_eq!(m.str_similarity(&["cat", "hat"]).unwrap(), 1.0);
    assert_eq!(m.str_similarity(&["Niall", "Neil"]).unwrap(), 0.0);
}

// ============================================================================
// 5. Alignment scorers with a substitution matrix
// ============================================================================

fn dna_matrix() -> Matrix<char> {
    Matrix::from_entries([
        (('A', 'A'), 10.0), (('G', 'G'), 7.0), (('C', 'C'), 9.0), (('T', 'T'), 8.0),
        (('A', 'G'), -1.0), (('A', 'C'), -3.0), (('A', 'T'), -4.0),
        (('G', 'C'), -5.0), (('G', 'T'), -3.0), (('C', 'T'), 0.0),
    ])
}

#[test]
fn needleman_wunsch_with_matrix() {
    let nw = NeedlemanWunsch::new().with_gap_cost(5.0).with_scorer(dna_matrix());
    let (a, b) = (chars("AGACTAGTTAC"), chars("CGAGACGT"));
    close(nw.similarity(&[&a[..], &b[..]]).unwrap(), 16.0);
}

#[test]
fn smith_waterman_with_matrix() {
    let sw = SmithWaterman::new().with_gap_cost(5.0).with_scorer(dna_matrix());
    let (a, b) = (chars("AGACTAGTTAC"), chars("CGAGACGT"));
    close(sw.similarity(&[&a[..], &b[..]]).unwrap(), 26.0);
}

#[test]
fn gotoh_affine_gaps() {
    let gotoh = Gotoh::new().with_gaps(1.0, 0.5);
    let (a, b) = (chars("AGACTAGTTAC"), chars("TGACGSTGC"));
    close(gotoh.similarity(&[&a[..], &b[..]]).unwrap(), 1.5);
}

#[test]
fn custom_sim_function() {
    // a closure is a scorer too
    let nw = NeedlemanWunsch::new().with_scorer(|a: &char, b: &char| {
        if a.eq_ignore_ascii_case(b) { 2.0 } else { -2.0 }
    });
    let (a, b) = (chars("Spam"), chars("SPAM"));
    close(nw.similarity(&[&a[..], &b[..]]).unwrap(), 8.0);
}

#[test]
fn signed_scores_stay_normalizable() {
    let nw = NeedlemanWunsch::new().with_gap_cost(3.0);
    for pair in [["spam", "qwer"], ["aaaa", "bbbb"], ["ab", "abcdef"]] {
        let nd = nw.str_normalized_distance(&pair).unwrap();
        let ns = nw.str_normalized_similarity(&pair).unwrap();
        assert!((0.0..=1.0).contains(&nd), "nd {nd} for {pair:?}");
        close(nd + ns, 1.0);
    }
}

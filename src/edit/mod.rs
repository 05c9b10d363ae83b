//! # Edit-Based Kernels
//!
//! Measures counting (or scoring) the element-level operations needed to
//! turn one sequence into another. Positional kernels (Hamming), classic
//! edit distances (Levenshtein, Damerau-Levenshtein), matching-window
//! similarities (Jaro, Jaro-Winkler, StrCmp95, MLIPNS) and alignment
//! scorers (Needleman-Wunsch, Smith-Waterman, Gotoh).

pub mod align;
pub mod damerau;
pub mod hamming;
pub mod jaro;
pub mod levenshtein;
pub mod mlipns;
pub mod strcmp95;

pub use align::{Gotoh, Ident, NeedlemanWunsch, SimScorer, SmithWaterman};
pub use damerau::DamerauLevenshtein;
pub use hamming::Hamming;
pub use jaro::{Jaro, JaroWinkler};
pub use levenshtein::Levenshtein;
pub use mlipns::Mlipns;
pub use strcmp95::StrCmp95;

//! # textdist — String & Sequence Distance Algorithms
//!
//! A library of ~30 string- and sequence-distance measures in five families,
//! all behind one uniform contract.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: [`Metric`] is the contract between callers and every kernel
//! 2. **Two kinds only**: a kernel natively computes a distance *or* a similarity;
//!    everything else (normalization, the opposite form) is derived
//! 3. **Kernels own nothing**: tokenization is applied before a kernel runs,
//!    and DP tables never outlive a call
//! 4. **External backends are guests**: optional faster implementations are
//!    consulted first and silently skipped on any failure
//!
//! ## Quick Start
//!
//! ```rust
//! use textdist::{Levenshtein, JaroWinkler, TextMetric};
//!
//! # fn example() -> textdist::Result<()> {
//! let lev = Levenshtein::new();
//! assert_eq!(lev.str_distance(&["test", "text"])?, 1.0);
//!
//! let jw = JaroWinkler::new();
//! let sim = jw.str_similarity(&["MARTHA", "MARHTA"])?;
//! assert!(sim > 0.96);
//! # Ok(())
//! # }
//! ```
//!
//! ## Families
//!
//! | Family | Module | Measures |
//! |--------|--------|----------|
//! | Edit-based | `edit` | Hamming, Levenshtein, Damerau-Levenshtein, Jaro(-Winkler), StrCmp95, MLIPNS, Needleman-Wunsch, Smith-Waterman, Gotoh |
//! | Phonetic | `phonetic` | MRA, Editex |
//! | Sequence-based | `sequence` | LCSSeq, LCSStr, Ratcliff-Obershelp |
//! | Token-based | `token` | Jaccard, Sorensen-Dice, Tversky, Overlap, Cosine, Tanimoto, Monge-Elkan, Bag |
//! | Simple | `simple` | Prefix, Postfix, Length, Identity, Matrix |
//! | Compression | `compression` | Arith, RLE, BWT+RLE, Sqrt, Entropy, BZ2, LZMA, ZLIB (NCD) |

// ============================================================================
// Modules
// ============================================================================

pub mod base;
pub mod tokenize;
pub mod multiset;
pub mod external;
pub mod edit;
pub mod phonetic;
pub mod sequence;
pub mod token;
pub mod simple;
pub mod compression;
pub mod quick;

// ============================================================================
// Re-exports: the contract
// ============================================================================

pub use base::{Configured, Element, Kind, Metric, TextMetric};
pub use multiset::Multiset;
pub use tokenize::ngrams;

// ============================================================================
// Re-exports: algorithms
// ============================================================================

pub use edit::{
    DamerauLevenshtein, Gotoh, Hamming, Ident, Jaro, JaroWinkler, Levenshtein,
    Mlipns, NeedlemanWunsch, SimScorer, SmithWaterman, StrCmp95,
};
pub use phonetic::{Editex, Mra};
pub use sequence::{LcsSeq, LcsStr, RatcliffObershelp};
pub use token::{
    Bag, Cosine, Jaccard, MongeElkan, Overlap, Sorensen, Tanimoto, Tversky,
};
pub use simple::{Identity, Length, Matrix, Postfix, Prefix};
pub use compression::{
    ArithNcd, Bz2Ncd, BwtRleNcd, EntropyNcd, LzmaNcd, RleNcd, SqrtNcd, ZlibNcd,
};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An NCD variant was invoked whose codec is not compiled in.
    /// Constructing the algorithm never fails for this reason; only calls do.
    #[error("unsupported compressor: {0} (enable the `{0}` cargo feature)")]
    UnsupportedCompressor(&'static str),

    /// An algorithm was constructed with an inconsistent option set.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

//! # Sequence Kernels
//!
//! Longest-common-subsequence and longest-common-substring measures, plus
//! the Ratcliff-Obershelp gestalt similarity built on top of them. The LCS
//! kernels return the common run itself; its length is the similarity.

pub mod lcs;
pub mod ratcliff;

pub use lcs::{LcsSeq, LcsStr};
pub use ratcliff::RatcliffObershelp;

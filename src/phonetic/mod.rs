//! # Phonetic Kernels
//!
//! Measures that compare how words *sound*: the Western Airlines match
//! rating approach (MRA) and the Editex phonetic edit distance.

pub mod editex;
pub mod mra;

pub use editex::Editex;
pub use mra::Mra;

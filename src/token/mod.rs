//! # Token Kernels
//!
//! Measures over the multisets of tokens two or more sequences produce:
//! set-overlap ratios (Jaccard, Sorensen-Dice, Tversky, Overlap, Cosine,
//! Tanimoto), the bag distance, and the Monge-Elkan word-wise combinator.
//!
//! Every kernel here honors `as_set` (distinct keys instead of summed
//! counts) and generalizes to any number of inputs through the counter
//! algebra rather than a pairwise wrapper.

pub mod bag;
pub mod cosine;
pub mod jaccard;
pub mod monge_elkan;
pub mod overlap;
pub mod sorensen;
pub mod tversky;

pub use bag::Bag;
pub use cosine::Cosine;
pub use jaccard::{Jaccard, Tanimoto};
pub use monge_elkan::MongeElkan;
pub use overlap::Overlap;
pub use sorensen::Sorensen;
pub use tversky::Tversky;

use crate::base::Element;
use crate::multiset::Multiset;

pub(crate) fn counters<E: Element>(seqs: &[&[E]]) -> Vec<Multiset<E>> {
    seqs.iter().map(|s| Multiset::from_elements(s)).collect()
}

//! # Compression-Based Distances (NCD)
//!
//! The normalized compression distance approximates information distance
//! through a real (or simulated) compressor `C`:
//!
//! ```text
//! NCD(S) = (min over orderings of C(concat) - (n - 1) * min C(s))
//!          / max C(s)
//! ```
//!
//! Two sub-families share that formula. *Symbolic* compressors operate on
//! the tokenized sequence (arithmetic coding, RLE, BWT+RLE, square-root,
//! entropy); *binary* codecs compress the UTF-8 bytes (bz2, lzma, zlib)
//! and strip their constant codec header.

pub mod arith;
pub mod codecs;
pub mod entropy;
pub mod rle;
pub mod sqrt;

pub use arith::ArithNcd;
pub use codecs::{Bz2Ncd, LzmaNcd, ZlibNcd};
pub use entropy::EntropyNcd;
pub use rle::{BwtRleNcd, RleNcd};
pub use sqrt::SqrtNcd;

use crate::Result;

/// Index permutations of `0..n`, in lexicographic order.
///
/// The order count is `n!`; callers pass the handful of inputs a distance
/// call compares, not arbitrary collections.
pub(crate) fn permutations(n: usize) -> Vec<Vec<usize>> {
    fn expand(current: &mut Vec<usize>, used: &mut [bool], out: &mut Vec<Vec<usize>>) {
        if current.len() == used.len() {
            out.push(current.clone());
            return;
        }
        for i in 0..used.len() {
            if !used[i] {
                used[i] = true;
                current.push(i);
                expand(current, used, out);
                current.pop();
                used[i] = false;
            }
        }
    }
    let mut out = Vec::new();
    expand(&mut Vec::new(), &mut vec![false; n], &mut out);
    out
}

/// The permutation-minimized NCD formula over a compressed-size oracle.
pub(crate) fn ncd<E: Clone, F>(seqs: &[&[E]], size: F) -> Result<f64>
where
    F: Fn(&[E]) -> Result<f64>,
{
    if seqs.is_empty() {
        return Ok(0.0);
    }
    let sizes: Vec<f64> = seqs.iter().map(|s| size(s)).collect::<Result<_>>()?;
    let min_size = sizes.iter().copied().fold(f64::INFINITY, f64::min);
    let max_size = sizes.iter().copied().fold(0.0f64, f64::max);
    if max_size == 0.0 {
        return Ok(0.0);
    }

    let mut concat_size = f64::INFINITY;
    for perm in permutations(seqs.len()) {
        let joined: Vec<E> = perm
            .iter()
            .flat_map(|&i| seqs[i].iter().cloned())
            .collect();
        concat_size = concat_size.min(size(&joined)?);
    }
    Ok((concat_size - min_size * (seqs.len() as f64 - 1.0)) / max_size)
}

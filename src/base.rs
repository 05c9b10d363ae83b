//! # Algorithm Base Contract
//!
//! This is THE contract between callers and every kernel in the library.
//!
//! A kernel natively computes either a distance or a similarity ([`Kind`]);
//! [`Metric`] derives the opposite form and both normalized forms from it,
//! applies the quick-answer shortcuts before any kernel runs, and folds
//! pairwise kernels over more than two inputs. [`TextMetric`] is the string
//! surface on top: it tokenizes per the algorithm's `qval`, and on the
//! character path may hand the call to a registered external backend.

use std::hash::Hash;

use once_cell::sync::OnceCell;

use crate::external::{self, BackendSpec, CallFlags};
use crate::tokenize;
use crate::Result;

/// Anything a sequence can be made of: cheap to clone, comparable, hashable.
///
/// Characters, words (`&str`), q-gram windows (`&[E]`), bytes and opaque
/// integer tokens all qualify.
pub trait Element: Clone + Eq + Hash {}
impl<T: Clone + Eq + Hash> Element for T {}

/// Which measure a kernel natively computes. The other is always derived
/// as `maximum - native`, never the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Kind {
    Distance,
    Similarity,
}

// ============================================================================
// Quick answers
// ============================================================================

/// Shortcuts applied before any kernel runs:
///
/// 1. zero or one input — distance 0, similarity `maximum`;
/// 2. all inputs equal — same;
/// 3. some input empty while another is not — distance `maximum`, similarity 0.
///
/// Returns the answer in the *requested* form, or `None` when the kernel
/// must run.
fn quick<T, L, M>(seqs: &[T], want: Kind, is_empty: L, maximum: M) -> Option<f64>
where
    T: PartialEq,
    L: Fn(&T) -> bool,
    M: FnOnce() -> f64,
{
    if seqs.len() < 2 || seqs.windows(2).all(|w| w[0] == w[1]) {
        return Some(match want {
            Kind::Distance => 0.0,
            Kind::Similarity => maximum(),
        });
    }
    if seqs.iter().any(is_empty) {
        return Some(match want {
            Kind::Distance => maximum(),
            Kind::Similarity => 0.0,
        });
    }
    None
}

pub(crate) fn quick_seq<E: Element>(
    seqs: &[&[E]],
    want: Kind,
    maximum: impl FnOnce() -> f64,
) -> Option<f64> {
    quick(seqs, want, |s| s.is_empty(), maximum)
}

pub(crate) fn quick_str(
    seqs: &[&str],
    want: Kind,
    maximum: impl FnOnce() -> f64,
) -> Option<f64> {
    quick(seqs, want, |s| s.is_empty(), maximum)
}

/// Fold a pairwise kernel over every ordered pair of `n` inputs, keeping the
/// minimum for distance-kind kernels and the maximum for similarity-kind.
pub(crate) fn fold_pairs(
    n: usize,
    kind: Kind,
    mut eval: impl FnMut(usize, usize) -> Result<f64>,
) -> Result<f64> {
    let mut best: Option<f64> = None;
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let v = eval(i, j)?;
            best = Some(match (best, kind) {
                (None, _) => v,
                (Some(b), Kind::Distance) => b.min(v),
                (Some(b), Kind::Similarity) => b.max(v),
            });
        }
    }
    Ok(best.unwrap_or(0.0))
}

// ============================================================================
// Metric — the element-level contract
// ============================================================================

/// The universal measure contract over element sequences.
///
/// Implementors provide [`kind`](Metric::kind), [`call`](Metric::call) (the
/// raw kernel, invoked with at least two sequences) and, where the default
/// `max(len)` is wrong, [`maximum`](Metric::maximum). Everything else is
/// derived here.
pub trait Metric<E: Element> {
    /// Which measure [`call`](Metric::call) natively computes.
    fn kind(&self) -> Kind;

    /// The raw kernel. Quick answers and pairwise aggregation are applied
    /// by the derived methods, not here.
    fn call(&self, seqs: &[&[E]]) -> Result<f64>;

    /// Upper bound used for normalization.
    fn maximum(&self, seqs: &[&[E]]) -> f64 {
        seqs.iter().map(|s| s.len()).max().unwrap_or(0) as f64
    }

    /// Lower bound of the native measure. Non-zero only for signed-score
    /// alignment kernels; normalization rescales over `[minimum, maximum]`.
    fn minimum(&self, _seqs: &[&[E]]) -> f64 {
        0.0
    }

    /// Whether the kernel takes any number of inputs directly. Pairwise
    /// kernels (`false`) are folded over ordered pairs for three or more.
    fn nary(&self) -> bool {
        false
    }

    /// Kernel with aggregation applied: still the native measure.
    #[doc(hidden)]
    fn invoke(&self, seqs: &[&[E]]) -> Result<f64> {
        if seqs.len() > 2 && !self.nary() {
            fold_pairs(seqs.len(), self.kind(), |i, j| self.call(&[seqs[i], seqs[j]]))
        } else {
            self.call(seqs)
        }
    }

    /// Non-negative dissimilarity (signed for score-based alignment kernels).
    fn distance(&self, seqs: &[&[E]]) -> Result<f64> {
        if let Some(v) = quick_seq(seqs, Kind::Distance, || self.maximum(seqs)) {
            return Ok(v);
        }
        match self.kind() {
            Kind::Distance => self.invoke(seqs),
            Kind::Similarity => Ok(self.maximum(seqs) - self.invoke(seqs)?),
        }
    }

    /// `maximum - distance`, or the native value for similarity kernels.
    fn similarity(&self, seqs: &[&[E]]) -> Result<f64> {
        if let Some(v) = quick_seq(seqs, Kind::Similarity, || self.maximum(seqs)) {
            return Ok(v);
        }
        match self.kind() {
            Kind::Similarity => self.invoke(seqs),
            Kind::Distance => Ok(self.maximum(seqs) - self.invoke(seqs)?),
        }
    }

    /// Distance rescaled into [0, 1]. Defined as 0 when `maximum` is 0.
    fn normalized_distance(&self, seqs: &[&[E]]) -> Result<f64> {
        let span = self.maximum(seqs) - self.minimum(seqs);
        if span <= 0.0 {
            return Ok(0.0);
        }
        Ok(self.distance(seqs)? / span)
    }

    /// Exactly `1 - normalized_distance`.
    fn normalized_similarity(&self, seqs: &[&[E]]) -> Result<f64> {
        Ok(1.0 - self.normalized_distance(seqs)?)
    }
}

// ============================================================================
// Configured — per-instance options the string surface needs
// ============================================================================

/// Resolved external-backend candidates, memoized per instance.
pub type BackendSlot = OnceCell<Vec<&'static BackendSpec>>;

/// Construction-time options shared by the string surface: tokenization
/// granularity, external dispatch and the registry identity of the instance.
pub trait Configured {
    /// `None` splits into words, `Some(1)` compares characters,
    /// `Some(q)` compares overlapping q-grams.
    fn qval(&self) -> Option<usize> {
        Some(1)
    }

    /// Whether dispatch to registered faster backends is allowed.
    fn external_enabled(&self) -> bool {
        false
    }

    /// Registry name and memoization slot, for algorithms with backends.
    fn backend(&self) -> Option<(&'static str, &BackendSlot)> {
        None
    }

    /// Option flags backends may demand (winklerize, restricted, ...).
    fn call_flags(&self) -> CallFlags {
        CallFlags::default()
    }
}

// ============================================================================
// TextMetric — the string surface
// ============================================================================

/// The uniform contract over `&str` inputs.
///
/// Implemented once (blanket) for every algorithm that is generic over
/// elements; implemented by hand for kernels bound to characters or bytes
/// (phonetic coders, the compression codecs, Monge-Elkan).
pub trait TextMetric {
    /// Which measure the kernel natively computes.
    fn str_kind(&self) -> Kind;

    /// Upper bound used for normalization, after tokenization.
    fn str_maximum(&self, seqs: &[&str]) -> f64;

    /// Lower bound of the native measure (signed alignment kernels only).
    fn str_minimum(&self, _seqs: &[&str]) -> f64 {
        0.0
    }

    /// Native kernel measure with tokenization and aggregation applied.
    fn str_call(&self, seqs: &[&str]) -> Result<f64>;

    /// Consult the external-backend registry. `None` means "use the kernel";
    /// any backend failure has already been swallowed by then.
    fn str_external(&self, _seqs: &[&str]) -> Option<f64> {
        None
    }

    fn str_distance(&self, seqs: &[&str]) -> Result<f64> {
        if let Some(v) = quick_str(seqs, Kind::Distance, || self.str_maximum(seqs)) {
            return Ok(v);
        }
        let native = match self.str_external(seqs) {
            Some(v) => v,
            None => self.str_call(seqs)?,
        };
        Ok(match self.str_kind() {
            Kind::Distance => native,
            Kind::Similarity => self.str_maximum(seqs) - native,
        })
    }

    fn str_similarity(&self, seqs: &[&str]) -> Result<f64> {
        if let Some(v) = quick_str(seqs, Kind::Similarity, || self.str_maximum(seqs)) {
            return Ok(v);
        }
        let native = match self.str_external(seqs) {
            Some(v) => v,
            None => self.str_call(seqs)?,
        };
        Ok(match self.str_kind() {
            Kind::Similarity => native,
            Kind::Distance => self.str_maximum(seqs) - native,
        })
    }

    fn str_normalized_distance(&self, seqs: &[&str]) -> Result<f64> {
        let span = self.str_maximum(seqs) - self.str_minimum(seqs);
        if span <= 0.0 {
            return Ok(0.0);
        }
        Ok(self.str_distance(seqs)? / span)
    }

    fn str_normalized_similarity(&self, seqs: &[&str]) -> Result<f64> {
        Ok(1.0 - self.str_normalized_distance(seqs)?)
    }
}

// ============================================================================
// Blanket string surface for element-generic algorithms
// ============================================================================

/// Tokenize `seqs` at the blanket implementor's granularity and apply one of
/// the element-level operations. Each arm owns its token storage for the
/// duration of the call; nothing escapes.
macro_rules! tokenized {
    ($self:ident, $seqs:ident, $op:ident) => {
        match $self.qval() {
            None => {
                let owned: Vec<Vec<&str>> = $seqs.iter().map(|s| tokenize::words(s)).collect();
                let views: Vec<&[&str]> = owned.iter().map(|v| v.as_slice()).collect();
                Metric::<&str>::$op($self, &views)
            }
            Some(1) => {
                let owned: Vec<Vec<char>> = $seqs.iter().map(|s| tokenize::chars(s)).collect();
                let views: Vec<&[char]> = owned.iter().map(|v| v.as_slice()).collect();
                Metric::<char>::$op($self, &views)
            }
            Some(q) => {
                let owned: Vec<Vec<char>> = $seqs.iter().map(|s| tokenize::chars(s)).collect();
                let grams: Vec<Vec<&[char]>> =
                    owned.iter().map(|v| tokenize::ngrams(v, q).collect()).collect();
                let views: Vec<&[&[char]]> = grams.iter().map(|v| v.as_slice()).collect();
                Metric::<&[char]>::$op($self, &views)
            }
        }
    };
}

impl<M> TextMetric for M
where
    M: Configured + Metric<char> + for<'a> Metric<&'a str> + for<'a> Metric<&'a [char]>,
{
    fn str_kind(&self) -> Kind {
        Metric::<char>::kind(self)
    }

    fn str_maximum(&self, seqs: &[&str]) -> f64 {
        tokenized!(self, seqs, maximum)
    }

    fn str_minimum(&self, seqs: &[&str]) -> f64 {
        tokenized!(self, seqs, minimum)
    }

    fn str_call(&self, seqs: &[&str]) -> Result<f64> {
        tokenized!(self, seqs, invoke)
    }

    fn str_external(&self, seqs: &[&str]) -> Option<f64> {
        if seqs.len() != 2 || !self.external_enabled() || self.qval() != Some(1) {
            return None;
        }
        let (name, slot) = self.backend()?;
        let candidates = slot.get_or_init(|| external::resolve(name));
        external::dispatch(candidates, self.call_flags(), seqs[0], seqs[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_answers_in_both_forms() {
        let seqs: Vec<&[char]> = vec![];
        assert_eq!(quick_seq(&seqs, Kind::Distance, || 5.0), Some(0.0));
        assert_eq!(quick_seq(&seqs, Kind::Similarity, || 5.0), Some(5.0));

        let a: Vec<char> = "ab".chars().collect();
        let same: Vec<&[char]> = vec![&a, &a];
        assert_eq!(quick_seq(&same, Kind::Distance, || 2.0), Some(0.0));

        let empty: Vec<char> = vec![];
        let uneven: Vec<&[char]> = vec![&a, &empty];
        assert_eq!(quick_seq(&uneven, Kind::Distance, || 2.0), Some(2.0));
        assert_eq!(quick_seq(&uneven, Kind::Similarity, || 2.0), Some(0.0));
    }

    #[test]
    fn quick_answers_defer_to_kernel_otherwise() {
        let a: Vec<char> = "ab".chars().collect();
        let b: Vec<char> = "cd".chars().collect();
        let seqs: Vec<&[char]> = vec![&a, &b];
        assert_eq!(quick_seq(&seqs, Kind::Distance, || 2.0), None);
    }

    #[test]
    fn fold_pairs_takes_min_for_distances() {
        let v = fold_pairs(3, Kind::Distance, |i, j| Ok((i * 10 + j) as f64)).unwrap();
        assert_eq!(v, 1.0); // pair (0, 1)
        let v = fold_pairs(3, Kind::Similarity, |i, j| Ok((i * 10 + j) as f64)).unwrap();
        assert_eq!(v, 21.0); // pair (2, 1)
    }
}

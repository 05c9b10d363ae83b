//! # External-Backend Registry
//!
//! Some measures have faster implementations in other crates. When an
//! algorithm is constructed with `external` enabled, its string surface
//! consults this registry first: candidates are tried in ranking order, the
//! first one whose preconditions hold and that produces a value wins, and
//! any backend failure is swallowed silently before falling back to the
//! internal kernel.
//!
//! Python-style import probing becomes Cargo features here: a backend exists
//! only when its feature (`ext-strsim`, `ext-accel`) is compiled in. The
//! persisted ranking file — best-first `{"Algorithm": [["module","func"]]}`
//! — prunes and orders the registered candidates once at startup.

use hashbrown::HashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::Deserialize;
use tracing::{debug, trace};

// ============================================================================
// Backend description
// ============================================================================

/// One candidate implementation of an algorithm.
pub struct BackendSpec {
    /// Crate the implementation lives in (ranking-file identity).
    pub module: &'static str,
    /// Function within that crate (ranking-file identity).
    pub func: &'static str,
    /// Preconditions beyond the implicit "exactly two string inputs,
    /// character granularity".
    pub conditions: &'static [Condition],
    /// Adapter returning the algorithm's *native* measure, or `None` on any
    /// failure (which is silently swallowed).
    pub adapter: fn(&str, &str) -> Option<f64>,
}

impl std::fmt::Debug for BackendSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BackendSpec({}.{})", self.module, self.func)
    }
}

/// Precondition a backend demands of the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Both inputs have the same number of characters.
    SameLength,
    /// Both inputs are pure ASCII (byte-oriented backends).
    Ascii,
    /// The instance's `winklerize` flag must have this value.
    Winklerize(bool),
    /// The instance's `long_tolerance` flag must have this value.
    LongTolerance(bool),
    /// The instance's `restricted` flag must have this value.
    Restricted(bool),
}

/// Option flags an algorithm instance exposes for condition checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallFlags {
    pub winklerize: Option<bool>,
    pub long_tolerance: Option<bool>,
    pub restricted: Option<bool>,
}

fn holds(cond: &Condition, flags: CallFlags, s1: &str, s2: &str) -> bool {
    match cond {
        Condition::SameLength => s1.chars().count() == s2.chars().count(),
        Condition::Ascii => s1.is_ascii() && s2.is_ascii(),
        Condition::Winklerize(v) => flags.winklerize == Some(*v),
        Condition::LongTolerance(v) => flags.long_tolerance == Some(*v),
        Condition::Restricted(v) => flags.restricted == Some(*v),
    }
}

/// Try candidates in order; first match that produces a value wins.
pub fn dispatch(
    candidates: &[&'static BackendSpec],
    flags: CallFlags,
    s1: &str,
    s2: &str,
) -> Option<f64> {
    for spec in candidates {
        if !spec.conditions.iter().all(|c| holds(c, flags, s1, s2)) {
            continue;
        }
        match (spec.adapter)(s1, s2) {
            Some(v) => {
                trace!(module = spec.module, func = spec.func, "external backend answered");
                return Some(v);
            }
            None => {
                debug!(module = spec.module, func = spec.func, "backend failed, trying next");
            }
        }
    }
    None
}

// ============================================================================
// Registry
// ============================================================================

/// Ordered backend candidates per algorithm name.
pub struct Registry {
    libs: RwLock<HashMap<String, Vec<&'static BackendSpec>>>,
}

impl Registry {
    fn new() -> Self {
        Self { libs: RwLock::new(HashMap::new()) }
    }

    /// Append a candidate for an algorithm.
    pub fn register(&self, alg: &str, spec: &'static BackendSpec) {
        self.libs.write().entry(alg.to_owned()).or_default().push(spec);
    }

    /// Candidates for an algorithm, best-first. Empty when none compiled in.
    pub fn resolve(&self, alg: &str) -> Vec<&'static BackendSpec> {
        self.libs.read().get(alg).cloned().unwrap_or_default()
    }

    /// Algorithms with at least one registered backend.
    pub fn algorithms(&self) -> Vec<String> {
        self.libs.read().keys().cloned().collect()
    }

    /// Prune and order candidates per the persisted ranking.
    fn optimize(&self, ranking: &Ranking) {
        let mut libs = self.libs.write();
        for (alg, ordered) in &ranking.0 {
            let Some(specs) = libs.get_mut(alg.as_str()) else { continue };
            let rank = |s: &BackendSpec| {
                ordered.iter().position(|(m, f)| m == s.module && f == s.func)
            };
            specs.retain(|s| rank(*s).is_some());
            specs.sort_by_key(|s| rank(*s).unwrap_or(usize::MAX));
        }
    }
}

// ============================================================================
// Ranking file
// ============================================================================

/// `{"Algorithm": [["module", "function"], ...]}`, best-first.
#[derive(Debug, Default, Deserialize)]
struct Ranking(HashMap<String, Vec<(String, String)>>);

/// Compiled-in ranking; `TEXTDIST_LIBRARIES` may point at a replacement.
const DEFAULT_RANKING: &str = include_str!("libraries.json");

fn parse_ranking(text: &str) -> Ranking {
    serde_json::from_str(text).unwrap_or_else(|err| {
        trace!(%err, "malformed ranking file, using empty ranking");
        Ranking::default()
    })
}

fn load_ranking() -> Ranking {
    match std::env::var("TEXTDIST_LIBRARIES") {
        Ok(path) => match std::fs::read_to_string(&path) {
            Ok(text) => parse_ranking(&text),
            Err(err) => {
                trace!(%err, %path, "ranking file unreadable, falling back to built-in");
                parse_ranking(DEFAULT_RANKING)
            }
        },
        Err(_) => parse_ranking(DEFAULT_RANKING),
    }
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_builtins(&registry);
    registry.optimize(&load_ranking());
    registry
});

/// The process-wide registry, initialized on first use.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Resolve candidates for an algorithm name against the global registry.
pub fn resolve(alg: &str) -> Vec<&'static BackendSpec> {
    registry().resolve(alg)
}

// ============================================================================
// Built-in backends (feature-gated)
// ============================================================================

#[allow(unused_variables)]
fn register_builtins(registry: &Registry) {
    #[cfg(feature = "ext-strsim")]
    for (alg, spec) in via_strsim::SPECS {
        registry.register(alg, spec);
    }
    #[cfg(feature = "ext-accel")]
    for (alg, spec) in via_accel::SPECS {
        registry.register(alg, spec);
    }
}

#[cfg(feature = "ext-strsim")]
mod via_strsim {
    use super::{BackendSpec, Condition};

    fn levenshtein(a: &str, b: &str) -> Option<f64> {
        Some(strsim::levenshtein(a, b) as f64)
    }

    fn damerau(a: &str, b: &str) -> Option<f64> {
        Some(strsim::damerau_levenshtein(a, b) as f64)
    }

    fn osa(a: &str, b: &str) -> Option<f64> {
        Some(strsim::osa_distance(a, b) as f64)
    }

    fn jaro(a: &str, b: &str) -> Option<f64> {
        Some(strsim::jaro(a, b))
    }

    fn jaro_winkler(a: &str, b: &str) -> Option<f64> {
        Some(strsim::jaro_winkler(a, b))
    }

    fn hamming(a: &str, b: &str) -> Option<f64> {
        strsim::hamming(a, b).ok().map(|d| d as f64)
    }

    pub(super) static SPECS: &[(&str, BackendSpec)] = &[
        ("Levenshtein", BackendSpec {
            module: "strsim",
            func: "levenshtein",
            conditions: &[],
            adapter: levenshtein,
        }),
        ("DamerauLevenshtein", BackendSpec {
            module: "strsim",
            func: "damerau_levenshtein",
            conditions: &[Condition::Restricted(false)],
            adapter: damerau,
        }),
        ("DamerauLevenshtein", BackendSpec {
            module: "strsim",
            func: "osa_distance",
            conditions: &[Condition::Restricted(true)],
            adapter: osa,
        }),
        ("Jaro", BackendSpec {
            module: "strsim",
            func: "jaro",
            conditions: &[Condition::LongTolerance(false)],
            adapter: jaro,
        }),
        ("JaroWinkler", BackendSpec {
            module: "strsim",
            func: "jaro_winkler",
            conditions: &[Condition::Winklerize(true), Condition::LongTolerance(false)],
            adapter: jaro_winkler,
        }),
        ("Hamming", BackendSpec {
            module: "strsim",
            func: "hamming",
            conditions: &[Condition::SameLength],
            adapter: hamming,
        }),
    ];
}

#[cfg(feature = "ext-accel")]
mod via_accel {
    use super::{BackendSpec, Condition};

    fn hamming(a: &str, b: &str) -> Option<f64> {
        if a.len() != b.len() {
            return None;
        }
        Some(triple_accel::hamming(a.as_bytes(), b.as_bytes()) as f64)
    }

    fn levenshtein(a: &str, b: &str) -> Option<f64> {
        Some(triple_accel::levenshtein_exp(a.as_bytes(), b.as_bytes()) as f64)
    }

    pub(super) static SPECS: &[(&str, BackendSpec)] = &[
        ("Hamming", BackendSpec {
            module: "triple_accel",
            func: "hamming",
            conditions: &[Condition::SameLength, Condition::Ascii],
            adapter: hamming,
        }),
        ("Levenshtein", BackendSpec {
            module: "triple_accel",
            func: "levenshtein_exp",
            conditions: &[Condition::Ascii],
            adapter: levenshtein,
        }),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_ranking_is_tolerated() {
        let r = parse_ranking("{not json");
        assert!(r.0.is_empty());
        let r = parse_ranking(r#"{"Levenshtein": [["strsim", "levenshtein"]]}"#);
        assert_eq!(r.0["Levenshtein"].len(), 1);
    }

    #[test]
    fn dispatch_on_empty_candidates_falls_through() {
        assert_eq!(dispatch(&[], CallFlags::default(), "a", "b"), None);
    }

    #[test]
    fn conditions_gate_flags_and_shapes() {
        let flags = CallFlags { winklerize: Some(true), ..CallFlags::default() };
        assert!(holds(&Condition::Winklerize(true), flags, "a", "b"));
        assert!(!holds(&Condition::Winklerize(false), flags, "a", "b"));
        assert!(holds(&Condition::SameLength, flags, "ab", "cd"));
        assert!(!holds(&Condition::SameLength, flags, "ab", "c"));
        assert!(holds(&Condition::Ascii, flags, "ab", "cd"));
        assert!(!holds(&Condition::Ascii, flags, "naïve", "cd"));
    }

    #[cfg(feature = "ext-strsim")]
    #[test]
    fn strsim_backends_registered() {
        assert!(!resolve("Levenshtein").is_empty());
        assert!(!resolve("JaroWinkler").is_empty());
    }

    #[test]
    fn unknown_algorithm_resolves_empty() {
        assert!(resolve("NoSuchAlgorithm").is_empty());
    }
}

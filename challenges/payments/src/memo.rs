use cached::{Cached, UnboundCache};

use crate::amount::Amount;

/// The result of searching one sub-problem: the payments found, or `None`
/// when the sub-problem was searched and has no solution.
pub type Outcome = Option<Vec<Amount>>;

/// Identifies one node of the search tree.
///
/// Equality and hashing are over the remaining target and the candidate
/// values in order, so sequences built in different ways but holding the
/// same values land on the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    target: Amount,
    candidates: Box<[Amount]>,
}

impl Signature {
    pub fn new(target: Amount, candidates: &[Amount]) -> Signature {
        Signature {
            target,
            candidates: candidates.into(),
        }
    }
}

/// Outcomes of already searched sub-problems. One table lives for exactly
/// one top-level search.
pub struct MemoTable {
    cache: UnboundCache<Signature, Outcome>,
}

impl MemoTable {
    pub fn new() -> MemoTable {
        MemoTable {
            cache: UnboundCache::new(),
        }
    }

    /// `None` when the signature was never searched; `Some(None)` when it was
    /// searched without a solution.
    pub fn get(&mut self, signature: &Signature) -> Option<Outcome> {
        self.cache.cache_get(signature).cloned()
    }

    pub fn insert(&mut self, signature: Signature, outcome: Outcome) {
        self.cache.cache_set(signature, outcome);
    }

    pub fn len(&self) -> usize {
        self.cache.cache_size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> u64 {
        self.cache.cache_hits().unwrap_or(0)
    }

    pub fn misses(&self) -> u64 {
        self.cache.cache_misses().unwrap_or(0)
    }
}

impl Default for MemoTable {
    fn default() -> Self {
        Self::new()
    }
}

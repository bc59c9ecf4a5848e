use std::time::Instant;

use log::debug;

use crate::amount::Amount;
use crate::error::PaymentError;
use crate::memo::{MemoTable, Outcome, Signature};

/// Finds due payments summing exactly to `target`.
///
/// Returns `None` when no subset of `candidates` works. `Some(vec![])` is a
/// valid answer and only happens for a zero target. Duplicated values are
/// distinct payments, each usable once. The payments come back in the order
/// the search unwinds (last picked first), not in input order.
pub fn find_subset(target: Amount, candidates: &[Amount]) -> Outcome {
    Search::new().run(target, candidates)
}

/// [`find_subset`] for callers that may not have a bank transfer or a list of
/// due payments at all. An empty list is not the same as a missing one.
pub fn try_find_subset(
    target: Option<Amount>,
    candidates: Option<&[Amount]>,
) -> Result<Outcome, PaymentError> {
    let target = target.ok_or(PaymentError::InvalidInput("no bank transfer"))?;
    let candidates = candidates.ok_or(PaymentError::InvalidInput("no due payments"))?;
    Ok(find_subset(target, candidates))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Nodes expanded, i.e. not answered from the memo table.
    pub visited: u64,
    pub memo_hits: u64,
    pub memo_entries: usize,
}

/// One top-level search. Owns the memo table, so every session starts cold and
/// independent sessions can run on different threads.
pub struct Search {
    memo: MemoTable,
    visited: u64,
}

impl Search {
    pub fn new() -> Search {
        Search {
            memo: MemoTable::new(),
            visited: 0,
        }
    }

    pub fn run(&mut self, target: Amount, candidates: &[Amount]) -> Outcome {
        let start = Instant::now();

        // Stable: equal values keep their input order.
        let mut sorted = candidates.to_vec();
        sorted.sort();

        let outcome = self.search(target, &sorted);

        let stats = self.stats();
        debug!(
            "searched {} for {} candidates in {:?}: found={} visited={} memo_hits={} memo_entries={}",
            target,
            sorted.len(),
            start.elapsed(),
            outcome.is_some(),
            stats.visited,
            stats.memo_hits,
            stats.memo_entries,
        );
        outcome
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            visited: self.visited,
            memo_hits: self.memo.hits(),
            memo_entries: self.memo.len(),
        }
    }

    // `candidates` must be sorted ascending.
    fn search(&mut self, target: Amount, candidates: &[Amount]) -> Outcome {
        let signature = Signature::new(target, candidates);
        if let Some(outcome) = self.memo.get(&signature) {
            return outcome;
        }
        self.visited += 1;

        // Anything above the remaining target would overshoot it. Scan from the
        // back for the last candidate that still fits and cut the tail there.
        let fits = candidates
            .iter()
            .rposition(|&c| c <= target)
            .map_or(0, |last| last + 1);
        let candidates = &candidates[..fits];

        let outcome = if candidates.is_empty() {
            target.is_zero().then(Vec::new)
        } else {
            self.first_fit(target, candidates)
        };

        self.memo.insert(signature, outcome.clone());
        outcome
    }

    // Try each candidate, smallest first, as one of the payments; the first
    // one whose remainder can be paid by the others wins.
    fn first_fit(&mut self, target: Amount, candidates: &[Amount]) -> Outcome {
        let mut rest = Vec::with_capacity(candidates.len() - 1);
        for (i, &payment) in candidates.iter().enumerate() {
            rest.clear();
            rest.extend_from_slice(&candidates[..i]);
            rest.extend_from_slice(&candidates[i + 1..]);

            if let Some(mut found) = self.search(target - payment, &rest) {
                found.push(payment);
                return Some(found);
            }
        }
        None
    }
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}

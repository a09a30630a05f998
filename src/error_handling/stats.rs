//! Outcome statistics tracking.
//!
//! Thread-safe counters for every outcome kind, shared across concurrent
//! lookups through `Arc`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use crate::spf::{Outcome, OutcomeKind};

/// Thread-safe per-outcome counters.
///
/// All kinds are initialized to zero on creation.
pub struct OutcomeStats {
    counts: HashMap<OutcomeKind, AtomicUsize>,
}

impl OutcomeStats {
    /// Creates counters for every kind, all at zero.
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for kind in OutcomeKind::iter() {
            counts.insert(kind, AtomicUsize::new(0));
        }
        OutcomeStats { counts }
    }

    /// Counts one outcome.
    pub fn record(&self, outcome: &Outcome) {
        let kind = outcome.kind();
        if let Some(counter) = self.counts.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to count outcome {:?} which is not in the map. \
                 This indicates a bug in OutcomeStats initialization.",
                kind
            );
        }
    }

    /// Returns the count for one outcome kind.
    pub fn get_count(&self, kind: OutcomeKind) -> usize {
        self.counts
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total outcomes recorded.
    pub fn total(&self) -> usize {
        OutcomeKind::iter().map(|k| self.get_count(k)).sum()
    }

    /// Total outcomes that represent a failed lookup.
    pub fn total_errors(&self) -> usize {
        OutcomeKind::iter()
            .filter(|k| k.is_error())
            .map(|k| self.get_count(k))
            .sum()
    }
}

impl Default for OutcomeStats {
    fn default() -> Self {
        Self::new()
    }
}

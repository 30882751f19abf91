//! Counters for free-text searches and batch tokens, behind the
//! "popular genes" panel.
//!
//! The map is unbounded; the top-N cap is display-only. Entries keep their
//! insertion order so that ties in [`UsageCounters::top_n`] break
//! deterministically (first-recorded wins).

use crate::normalize::normalize_text;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsageEntry {
    pub query: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsageCounters {
    entries: Vec<UsageEntry>,
}

impl UsageCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and count one query. Queries that normalize to the empty
    /// string are ignored.
    pub fn record(&mut self, query: &str) {
        let query = normalize_text(query);
        if query.is_empty() {
            return;
        }
        match self.entries.iter_mut().find(|e| e.query == query) {
            Some(entry) => entry.count += 1,
            None => self.entries.push(UsageEntry { query, count: 1 }),
        }
    }

    /// Up to `n` entries by count descending; ties keep insertion order.
    pub fn top_n(&self, n: usize) -> Vec<UsageEntry> {
        let mut ranked = self.entries.clone();
        // Stable sort, so equal counts stay in first-recorded order.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }

    pub fn count_of(&self, query: &str) -> u64 {
        let query = normalize_text(query);
        self.entries
            .iter()
            .find(|e| e.query == query)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_normalizes_and_increments() {
        let mut counters = UsageCounters::new();
        counters.record("BBS1");
        counters.record("  bbs1 ");
        counters.record("ift88");
        assert_eq!(counters.count_of("bbs1"), 2);
        assert_eq!(counters.count_of("IFT88"), 1);
        assert_eq!(counters.count_of("missing"), 0);
    }

    #[test]
    fn blank_queries_are_ignored() {
        let mut counters = UsageCounters::new();
        counters.record("   ");
        assert!(counters.is_empty());
    }

    #[test]
    fn top_n_orders_by_count_then_insertion() {
        let mut counters = UsageCounters::new();
        counters.record("first");
        counters.record("second");
        counters.record("third");
        counters.record("third");

        let top = counters.top_n(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].query, "third");
        assert_eq!(top[0].count, 2);
        // "first" and "second" tie at 1; first-recorded wins.
        assert_eq!(top[1].query, "first");
    }

    #[test]
    fn reset_clears_everything() {
        let mut counters = UsageCounters::new();
        counters.record("bbs1");
        counters.reset();
        assert!(counters.is_empty());
        assert!(counters.top_n(5).is_empty());
    }

    #[test]
    fn serialization_roundtrip_preserves_order() {
        let mut counters = UsageCounters::new();
        counters.record("bbs1");
        counters.record("ift88");
        counters.record("bbs1");

        let json = serde_json::to_string(&counters).unwrap();
        let restored: UsageCounters = serde_json::from_str(&json).unwrap();
        assert_eq!(counters, restored);
    }
}

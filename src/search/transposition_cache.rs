//! Board-keyed value cache shared across the branches of a search.
//!
//! Keys are boards only. Remaining depth, the alpha/beta window and the
//! searching color are not part of the key, so a value stored by a shallow
//! or heavily pruned pass is reused as-is by later, deeper queries. This is a
//! known approximation. The table is unbounded and never evicts; call
//! `clear` to start over.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Clone)]
pub struct TranspositionCache<B> {
    entries: HashMap<B, i32>,
    stats: CacheStats,
}

impl<B: Eq + Hash> TranspositionCache<B> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn probe(&mut self, board: &B) -> Option<i32> {
        self.stats.probes += 1;
        let hit = self.entries.get(board).copied();
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    /// Insert or overwrite the value for `board`.
    pub fn store(&mut self, board: B, value: i32) {
        self.stats.stores += 1;
        self.entries.insert(board, value);
    }
}

impl<B: Eq + Hash> Default for TranspositionCache<B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::TranspositionCache;
    use crate::board::othello_board::Board;

    #[test]
    fn store_and_probe_by_structural_board_key() {
        let mut cache = TranspositionCache::new();
        cache.store(Board::standard(), 3);

        // A separately built but equal board hits the same entry.
        let same = Board::new_game(8).expect("valid");
        assert_eq!(cache.probe(&same), Some(3));
        assert_eq!(cache.probe(&Board::new_game(6).expect("valid")), None);

        let stats = cache.stats();
        assert_eq!(stats.probes, 2);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.stores, 1);
    }

    #[test]
    fn later_store_overwrites_and_clear_resets() {
        let mut cache = TranspositionCache::new();
        cache.store(7u32, 1);
        cache.store(7u32, -4);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.probe(&7), Some(-4));

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().stores, 0);
        assert_eq!(cache.probe(&7), None);
    }
}

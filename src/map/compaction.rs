use std::collections::BTreeSet;
use std::hash::Hash;

use super::InjectiveMap;

impl<D, R> InjectiveMap<D, R>
where
    D: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    /// Reclaims garbage slots once at least `garbage_threshold` of them have
    /// accumulated, leaving `store_count() == len()`.
    ///
    /// Live pairs sitting at the end of the store are moved into garbage slots
    /// and the tail is truncated, so the work done is proportional to the
    /// garbage count rather than to the number of live pairs. Associations
    /// are never changed, so the map compares equal to its pre-compaction self.
    ///
    /// `shrink_storage` additionally releases unused capacity, whether or not
    /// the threshold was reached.
    pub fn compact(&mut self, garbage_threshold: usize, shrink_storage: bool) {
        let garbage_count = self.garbage_count();
        if garbage_count > 0 && garbage_count >= garbage_threshold {
            self.reclaim_garbage();
        }
        if shrink_storage {
            self.store.shrink_to_fit();
            self.domain_index.shrink_to_fit();
            self.range_index.shrink_to_fit();
        }
    }

    /// Compacts according to the map's own [`CompactionConfig`](crate::CompactionConfig).
    pub fn compact_with_config(&mut self) {
        let config = self.config;
        self.compact(config.garbage_threshold, config.shrink_storage);
    }

    fn reclaim_garbage(&mut self) {
        let store_len = self.store.len();
        let mut live = vec![false; store_len];
        for &slot in self.domain_index.values() {
            live[slot] = true;
        }
        let mut garbage: BTreeSet<usize> = (0..store_len).filter(|&slot| !live[slot]).collect();
        let reclaimed = garbage.len();
        let mut relocated = 0usize;

        while let Some(&end) = garbage.last() {
            let last = self.store.len() - 1;
            if end == last {
                garbage.pop_last();
                self.store.pop();
                continue;
            }

            // The tail is live: swap it into the lowest garbage hole, then drop the hole.
            assert!(live[last], "slot {} is neither live nor garbage", last);
            let hole = garbage
                .pop_first()
                .expect("garbage set was checked to be non-empty");
            self.store.swap_remove(hole);
            live[hole] = true;
            live[last] = false;

            let (domain, range) = &self.store[hole];
            *self
                .domain_index
                .get_mut(domain)
                .expect("relocated pair missing from the domain index") = hole;
            *self
                .range_index
                .get_mut(range)
                .expect("relocated pair missing from the range index") = hole;
            relocated += 1;
            log::trace!("relocated slot {} into slot {}", last, hole);
        }

        assert_eq!(self.store.len(), self.len(), "garbage left behind after compaction");
        log::debug!(
            "Compacted injective map: reclaimed {} slots, relocated {} pairs, {} live",
            reclaimed,
            relocated,
            self.store.len()
        );
    }
}

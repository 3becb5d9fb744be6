#![allow(dead_code)]

use std::collections::HashMap;

use injective_map::InjectiveMap;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `count` pairs `i -> "v{i}"`, with every `stride`-th one removed again so
/// the store carries garbage.
pub fn map_with_garbage(count: u32, stride: u32) -> InjectiveMap<u32, String> {
    let mut map = InjectiveMap::new();
    for i in 0..count {
        map.set_by_domain(i, format!("v{}", i));
    }
    for i in (0..count).step_by(stride as usize) {
        map.remove_by_domain(&i);
    }
    map
}

/// Every size view of the map agrees with `len()`.
pub fn assert_counts_agree<D, R>(map: &InjectiveMap<D, R>)
where
    D: Eq + std::hash::Hash + Clone,
    R: Eq + std::hash::Hash + Clone,
{
    let count = map.len();
    assert_eq!(map.domain_view().len(), count);
    assert_eq!(map.range_view().len(), count);
    assert_eq!(map.domain_dictionary().len(), count);
    assert_eq!(map.range_dictionary().len(), count);
    assert_eq!(map.iter().len(), count);
    assert_eq!(map.store_count(), count + map.garbage_count());
}

pub fn dict<D, R, const N: usize>(pairs: [(D, R); N]) -> HashMap<D, R>
where
    D: Eq + std::hash::Hash,
{
    pairs.into_iter().collect()
}

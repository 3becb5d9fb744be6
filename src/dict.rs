//! Helpers for plain `HashMap`s that are about to become (or came from) an
//! [`InjectiveMap`](crate::InjectiveMap).
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Returns `true` when no two keys of `map` share a value.
pub fn has_unique_values<K, V>(map: &HashMap<K, V>) -> bool
where
    V: Eq + Hash,
{
    distinct_values(map) == map.len()
}

/// Number of distinct values held by `map`.
pub fn distinct_values<K, V>(map: &HashMap<K, V>) -> usize
where
    V: Eq + Hash,
{
    map.values().collect::<HashSet<&V>>().len()
}

/// Swaps keys and values, or returns `None` if a value repeats.
pub fn invert<K, V>(map: &HashMap<K, V>) -> Option<HashMap<V, K>>
where
    K: Clone,
    V: Eq + Hash + Clone,
{
    let mut inverted = HashMap::with_capacity(map.len());
    for (k, v) in map {
        if inverted.insert(v.clone(), k.clone()).is_some() {
            return None;
        }
    }
    Some(inverted)
}

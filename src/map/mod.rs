//! The injective map itself.
//!
//! Pairs live in a single backing store (`Vec<(D, R)>`) and are reached through
//! two hash indices, one per side, that both hold the pair's slot. Removing a
//! pair only drops its index entries; the slot stays behind as garbage until
//! [`InjectiveMap::compact`] reclaims it.
mod compaction;
mod views;

use std::collections::HashMap;
use std::hash::Hash;

use crate::config::CompactionConfig;
use crate::dict;
use crate::error::InjectiveMapError;

pub use views::Iter;

/// A one-to-one association between domain values `D` and range values `R`.
///
/// Every domain value maps to at most one range value and every range value
/// maps back to at most one domain value. Insertions that would break this are
/// rejected without touching the map; see [`InjectiveMap::set_by_domain`].
///
/// Cloning performs a full copy, so a clone never observes mutations made to
/// the original (or vice versa).
#[derive(Clone)]
pub struct InjectiveMap<D, R> {
    store: Vec<(D, R)>,
    domain_index: HashMap<D, usize>,
    range_index: HashMap<R, usize>,
    config: CompactionConfig,
}

impl<D, R> InjectiveMap<D, R>
where
    D: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::with_config(CompactionConfig::default())
    }

    pub fn with_config(config: CompactionConfig) -> Self {
        Self {
            store: Vec::new(),
            domain_index: HashMap::new(),
            range_index: HashMap::new(),
            config,
        }
    }

    /// Builds a map from a forward mapping.
    ///
    /// Fails when two keys of `map` share a value, since no injective map can
    /// hold both associations.
    pub fn from_map(map: HashMap<D, R>) -> Result<Self, InjectiveMapError> {
        if !dict::has_unique_values(&map) {
            return Err(InjectiveMapError::NonInjective {
                pairs: map.len(),
                distinct_ranges: dict::distinct_values(&map),
            });
        }

        let mut injective = Self::new();
        injective.store.reserve(map.len());
        for (d, r) in map {
            injective.push_pair(d, r);
        }
        Ok(injective)
    }

    /// Builds a map from a sequence of pairs, failing on the first pair that
    /// repeats a domain or a range value.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, InjectiveMapError>
    where
        I: IntoIterator<Item = (D, R)>,
    {
        let mut injective = Self::new();
        for (position, (d, r)) in pairs.into_iter().enumerate() {
            if injective.domain_index.contains_key(&d) {
                return Err(InjectiveMapError::DuplicateDomain { position });
            }
            if injective.range_index.contains_key(&r) {
                return Err(InjectiveMapError::DuplicateRange { position });
            }
            injective.push_pair(d, r);
        }
        Ok(injective)
    }

    pub fn config(&self) -> &CompactionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CompactionConfig) {
        self.config = config;
    }

    /// Number of live associations.
    pub fn len(&self) -> usize {
        assert_eq!(
            self.domain_index.len(),
            self.range_index.len(),
            "domain and range indices disagree on the number of live pairs"
        );
        self.domain_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slots still held by the backing store but no longer referenced.
    pub fn garbage_count(&self) -> usize {
        self.store.len() - self.len()
    }

    /// Total slots in the backing store, live and garbage.
    pub fn store_count(&self) -> usize {
        self.store.len()
    }

    pub fn get_by_domain(&self, domain: &D) -> Option<&R> {
        let slot = *self.domain_index.get(domain)?;
        Some(&self.pair(slot).1)
    }

    pub fn get_by_range(&self, range: &R) -> Option<&D> {
        let slot = *self.range_index.get(range)?;
        Some(&self.pair(slot).0)
    }

    pub fn contains_domain(&self, domain: &D) -> bool {
        self.domain_index.contains_key(domain)
    }

    pub fn contains_range(&self, range: &R) -> bool {
        self.range_index.contains_key(range)
    }

    /// True only if `domain` and `range` are associated with each other.
    pub fn contains(&self, domain: &D, range: &R) -> bool {
        match (self.domain_index.get(domain), self.range_index.get(range)) {
            (Some(d_slot), Some(r_slot)) => d_slot == r_slot,
            _ => false,
        }
    }

    pub fn contains_pair(&self, pair: &(D, R)) -> bool {
        self.contains(&pair.0, &pair.1)
    }

    /// Associates `domain` with `range`.
    ///
    /// - If the pair already exists nothing happens.
    /// - If neither value is present the pair is appended to the store.
    /// - If `domain` is present and `range` is not, the existing slot is
    ///   rewritten in place and the old range value is released.
    /// - If `range` already belongs to another domain value the call is
    ///   rejected and the map is left untouched. No error is reported; use
    ///   [`contains`](Self::contains) to check whether the association stuck.
    pub fn set_by_domain(&mut self, domain: D, range: R) {
        let d_slot = self.domain_index.get(&domain).copied();
        let r_slot = self.range_index.get(&range).copied();

        match (d_slot, r_slot) {
            (Some(d_slot), Some(r_slot)) if d_slot == r_slot => {}
            (None, None) => self.push_pair(domain, range),
            (Some(slot), None) => {
                let stale = std::mem::replace(&mut self.store[slot].1, range.clone());
                self.range_index.remove(&stale);
                self.range_index.insert(range, slot);
            }
            _ => log::trace!(
                "rejected association: range value is paired with another domain value"
            ),
        }
    }

    /// Mirror of [`set_by_domain`](Self::set_by_domain) keyed by the range value.
    pub fn set_by_range(&mut self, range: R, domain: D) {
        let d_slot = self.domain_index.get(&domain).copied();
        let r_slot = self.range_index.get(&range).copied();

        match (r_slot, d_slot) {
            (Some(r_slot), Some(d_slot)) if r_slot == d_slot => {}
            (None, None) => self.push_pair(domain, range),
            (Some(slot), None) => {
                let stale = std::mem::replace(&mut self.store[slot].0, domain.clone());
                self.domain_index.remove(&stale);
                self.domain_index.insert(domain, slot);
            }
            _ => log::trace!(
                "rejected association: domain value is paired with another range value"
            ),
        }
    }

    /// Setter accepting an absent value: `None` is exactly
    /// [`remove_by_domain`](Self::remove_by_domain), `Some(r)` is
    /// [`set_by_domain`](Self::set_by_domain).
    pub fn assign_by_domain(&mut self, domain: D, range: Option<R>) {
        match range {
            Some(range) => self.set_by_domain(domain, range),
            None => {
                self.remove_by_domain(&domain);
            }
        }
    }

    /// Setter accepting an absent value: `None` is exactly
    /// [`remove_by_range`](Self::remove_by_range), `Some(d)` is
    /// [`set_by_range`](Self::set_by_range).
    pub fn assign_by_range(&mut self, range: R, domain: Option<D>) {
        match domain {
            Some(domain) => self.set_by_range(range, domain),
            None => {
                self.remove_by_range(&range);
            }
        }
    }

    /// Removes the association of `domain`, returning its former partner.
    ///
    /// The pair stays in the backing store as garbage.
    pub fn remove_by_domain(&mut self, domain: &D) -> Option<R> {
        let slot = self.domain_index.remove(domain)?;
        let range = self.pair(slot).1.clone();
        let removed = self.range_index.remove(&range);
        assert_eq!(removed, Some(slot), "range index out of step with domain index");
        self.after_remove();
        Some(range)
    }

    /// Removes the association of `range`, returning its former partner.
    pub fn remove_by_range(&mut self, range: &R) -> Option<D> {
        let slot = self.range_index.remove(range)?;
        let domain = self.pair(slot).0.clone();
        let removed = self.domain_index.remove(&domain);
        assert_eq!(removed, Some(slot), "domain index out of step with range index");
        self.after_remove();
        Some(domain)
    }

    /// Drops every pair, garbage included.
    pub fn clear(&mut self) {
        self.store.clear();
        self.domain_index.clear();
        self.range_index.clear();
    }

    fn push_pair(&mut self, domain: D, range: R) {
        let slot = self.store.len();
        self.store.push((domain.clone(), range.clone()));
        self.domain_index.insert(domain, slot);
        self.range_index.insert(range, slot);
    }

    #[inline]
    fn pair(&self, slot: usize) -> &(D, R) {
        assert!(
            slot < self.store.len(),
            "slot {} outside of a store of {} pairs",
            slot,
            self.store.len()
        );
        &self.store[slot]
    }

    fn after_remove(&mut self) {
        if self.config.is_automatic() {
            let CompactionConfig {
                garbage_threshold,
                shrink_storage,
                ..
            } = self.config;
            self.compact(garbage_threshold, shrink_storage);
        }
    }
}

impl<D, R> Default for InjectiveMap<D, R>
where
    D: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<D, R> TryFrom<HashMap<D, R>> for InjectiveMap<D, R>
where
    D: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    type Error = InjectiveMapError;

    fn try_from(map: HashMap<D, R>) -> Result<Self, Self::Error> {
        Self::from_map(map)
    }
}

/// Pairs are applied with [`InjectiveMap::set_by_domain`], so a pair whose range
/// value already belongs to another domain value is skipped.
impl<D, R> Extend<(D, R)> for InjectiveMap<D, R>
where
    D: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = (D, R)>>(&mut self, iter: I) {
        for (d, r) in iter {
            self.set_by_domain(d, r);
        }
    }
}

impl<D, R> FromIterator<(D, R)> for InjectiveMap<D, R>
where
    D: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (D, R)>>(iter: I) -> Self {
        let mut injective = Self::new();
        injective.extend(iter);
        injective
    }
}

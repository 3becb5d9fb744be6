use std::collections::hash_map;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::InjectiveMap;

/// Iterator over the live `(domain, range)` pairs of an [`InjectiveMap`], in
/// no particular order. Garbage slots are never visited.
pub struct Iter<'a, D, R> {
    slots: hash_map::Values<'a, D, usize>,
    store: &'a [(D, R)],
}

impl<'a, D, R> Iterator for Iter<'a, D, R> {
    type Item = (&'a D, &'a R);

    fn next(&mut self) -> Option<Self::Item> {
        let &slot = self.slots.next()?;
        let store = self.store;
        let (d, r) = &store[slot];
        Some((d, r))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<D, R> ExactSizeIterator for Iter<'_, D, R> {}

impl<D, R> InjectiveMap<D, R>
where
    D: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    pub fn iter(&self) -> Iter<'_, D, R> {
        Iter {
            slots: self.domain_index.values(),
            store: &self.store,
        }
    }

    /// All live domain values.
    pub fn domain_view(&self) -> HashSet<&D> {
        self.domain_index.keys().collect()
    }

    /// All live range values.
    pub fn range_view(&self) -> HashSet<&R> {
        self.range_index.keys().collect()
    }

    /// The forward mapping `domain -> range` over live pairs.
    pub fn domain_dictionary(&self) -> HashMap<D, R> {
        self.iter().map(|(d, r)| (d.clone(), r.clone())).collect()
    }

    /// The backward mapping `range -> domain` over live pairs.
    pub fn range_dictionary(&self) -> HashMap<R, D> {
        self.iter().map(|(d, r)| (r.clone(), d.clone())).collect()
    }
}

impl<'a, D, R> IntoIterator for &'a InjectiveMap<D, R>
where
    D: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    type Item = (&'a D, &'a R);
    type IntoIter = Iter<'a, D, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two maps are equal when they hold the same live associations. Garbage,
/// slot layout and compaction settings are not compared.
impl<D, R> PartialEq for InjectiveMap<D, R>
where
    D: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(d, r)| other.get_by_domain(d) == Some(r))
    }
}

impl<D, R> Eq for InjectiveMap<D, R>
where
    D: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
}

impl<D, R> fmt::Debug for InjectiveMap<D, R>
where
    D: Eq + Hash + Clone + fmt::Debug,
    R: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<D, R> Serialize for InjectiveMap<D, R>
where
    D: Eq + Hash + Clone + Serialize,
    R: Eq + Hash + Clone + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for pair in self.iter() {
            seq.serialize_element(&pair)?;
        }
        seq.end()
    }
}

struct PairsVisitor<D, R>(PhantomData<(D, R)>);

impl<'de, D, R> Visitor<'de> for PairsVisitor<D, R>
where
    D: Eq + Hash + Clone + Deserialize<'de>,
    R: Eq + Hash + Clone + Deserialize<'de>,
{
    type Value = InjectiveMap<D, R>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of (domain, range) pairs with no repeated values")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut pairs = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(pair) = seq.next_element::<(D, R)>()? {
            pairs.push(pair);
        }
        InjectiveMap::from_pairs(pairs).map_err(serde::de::Error::custom)
    }
}

impl<'de, D, R> Deserialize<'de> for InjectiveMap<D, R>
where
    D: Eq + Hash + Clone + Deserialize<'de>,
    R: Eq + Hash + Clone + Deserialize<'de>,
{
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        deserializer.deserialize_seq(PairsVisitor(PhantomData))
    }
}

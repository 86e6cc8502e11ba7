use std::collections::HashMap;

use indexmap::IndexMap;

use crate::Tortoise;

mod hash_map;
mod linked_hash_map;

/// The unordered variant: a [`HashMap`] from tortoise to owner name.
pub type TortoiseHashMap = HashMap<Tortoise, String>;

/// The insertion-ordered variant: an [`IndexMap`] from tortoise to owner name.
pub type TortoiseLinkedHashMap = IndexMap<Tortoise, String>;

/// What a map promises about the order in which [`OwnerMap::iter`] yields entries.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum IterationOrder {
    /// No promise at all; even a freshly rebuilt map may iterate in any order.
    Unspecified,
    /// Entries come back in the order they were inserted, until the map is
    /// rebuilt in a different order.
    Insertion,
}

/// The operations a hash-based map must support to take part in the
/// find/add/remove/sort operations in [`crate::operations`].
///
/// Both implementations look keys up through [`Hash`] and [`Eq`]; neither keeps
/// its entries sorted. Sorting is done by draining the map with
/// [`take_entries`](OwnerMap::take_entries), ordering the entries, and handing
/// them back to [`rebuild_from`](OwnerMap::rebuild_from).
///
/// # Examples
///
/// ```
/// use tortoise_maps::{IterationOrder, OwnerMap, TortoiseLinkedHashMap, Tortoise};
///
/// let mut map = TortoiseLinkedHashMap::default();
/// map.insert(Tortoise::new("Жук"), "Віталій".to_owned());
/// map.insert(Tortoise::new("Еон"), "Софія".to_owned());
///
/// assert_eq!(<TortoiseLinkedHashMap as OwnerMap<_, _>>::ITERATION_ORDER, IterationOrder::Insertion);
/// let nicknames: Vec<_> = OwnerMap::iter(&map).map(|(k, _)| k.nickname().unwrap()).collect();
/// assert_eq!(nicknames, ["Жук", "Еон"]);
/// ```
///
/// [`Hash`]: core::hash::Hash
pub trait OwnerMap<K, V> {
    /// A short name for the variant, used in logs and reports.
    const NAME: &'static str;

    /// The iteration-order contract of the variant.
    const ITERATION_ORDER: IterationOrder;

    /// An iterator over the entries of the map.
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the map holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value stored under `key`.
    fn get(&self, key: &K) -> Option<&V>;

    /// Returns `true` if an entry equal to `key` is present.
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Stores `value` under `key`, returning the value it replaced.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Removes the entry for `key`, returning its value.
    ///
    /// An insertion-ordered map keeps the relative order of the remaining
    /// entries.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Iterates over the entries in the variant's iteration order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Removes every entry and returns them in iteration order.
    fn take_entries(&mut self) -> Vec<(K, V)>;

    /// Refills the map by inserting `entries` in the given order.
    ///
    /// Any entries already present are dropped first.
    fn rebuild_from<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>;
}

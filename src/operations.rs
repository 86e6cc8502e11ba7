//! Find, add, remove and sort operations written once against [`OwnerMap`].
//!
//! Every function takes the map explicitly, so the same code runs over the
//! unordered [`TortoiseHashMap`](crate::TortoiseHashMap) and the
//! insertion-ordered [`TortoiseLinkedHashMap`](crate::TortoiseLinkedHashMap).
//! Misses are reported as `None` (or an empty result), never as errors.

use core::fmt;

use crate::owner_map::OwnerMap;
use crate::value_order::{cmp_by_value, cmp_value_to};

/// The outcome of [`add`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Insertion<V> {
    /// The key was not present before.
    Inserted,
    /// The key was present; its previous value was overwritten.
    Replaced(V),
}

impl<V> Insertion<V> {
    /// Returns the value that was overwritten, if any.
    #[must_use]
    pub fn replaced(self) -> Option<V> {
        match self {
            Insertion::Inserted => None,
            Insertion::Replaced(previous) => Some(previous),
        }
    }
}

/// Looks up the value stored under `key`.
///
/// # Complexity
///
/// O(1) expected.
///
/// # Examples
///
/// ```
/// use tortoise_maps::{operations, Tortoise, TortoiseHashMap};
///
/// let mut map = TortoiseHashMap::new();
/// map.insert(Tortoise::with_shell_thickness("Броня", 3.1), "Олеся".to_owned());
///
/// let key = Tortoise::with_shell_thickness("Броня", 3.1);
/// assert_eq!(operations::find_by_key(&map, &key).map(String::as_str), Some("Олеся"));
/// assert_eq!(operations::find_by_key(&map, &Tortoise::new("Броня")), None);
/// ```
pub fn find_by_key<'m, M, K, V>(map: &'m M, key: &K) -> Option<&'m V>
where
    M: OwnerMap<K, V>,
    K: fmt::Display,
{
    let found = map.get(key);
    tracing::debug!(variant = M::NAME, %key, found = found.is_some(), "find by key");
    found
}

/// Finds a key whose value equals `value`.
///
/// The entries are collected, sorted by value, and binary searched. When
/// several entries share the value, which of their keys is returned is
/// unspecified.
///
/// # Complexity
///
/// O(n log n) per call.
///
/// # Examples
///
/// ```
/// use tortoise_maps::{operations, Tortoise, TortoiseLinkedHashMap};
///
/// let mut map = TortoiseLinkedHashMap::new();
/// map.insert(Tortoise::new("Вічність"), "Микола".to_owned());
/// map.insert(Tortoise::new("Гном"), "Аліна".to_owned());
///
/// let key = operations::find_by_value(&map, &"Аліна".to_owned());
/// assert_eq!(key, Some(&Tortoise::new("Гном")));
/// assert_eq!(operations::find_by_value(&map, &"Софія".to_owned()), None);
/// ```
pub fn find_by_value<'m, M, K, V>(map: &'m M, value: &V) -> Option<&'m K>
where
    M: OwnerMap<K, V>,
    V: Ord + fmt::Debug + 'm,
{
    let mut entries: Vec<(&K, &V)> = map.iter().collect();
    entries.sort_by(cmp_by_value);
    let position = entries.binary_search_by(cmp_value_to(value));
    tracing::debug!(variant = M::NAME, ?value, ?position, "find by value");
    position.ok().map(|position| entries[position].0)
}

/// Returns the entries in the map's iteration order.
#[must_use]
pub fn entries<M, K, V>(map: &M) -> Vec<(&K, &V)>
where
    M: OwnerMap<K, V>,
{
    map.iter().collect()
}

/// Stores `value` under `key`, silently overwriting any previous value.
///
/// # Examples
///
/// ```
/// use tortoise_maps::{operations, operations::Insertion, Tortoise, TortoiseHashMap};
///
/// let mut map = TortoiseHashMap::new();
/// let kazka = Tortoise::with_shell_thickness("Казка", 3.3);
///
/// assert_eq!(operations::add(&mut map, kazka.clone(), "Аркадій".to_owned()), Insertion::Inserted);
/// assert_eq!(
///     operations::add(&mut map, kazka, "Руслан".to_owned()),
///     Insertion::Replaced("Аркадій".to_owned())
/// );
/// assert_eq!(map.len(), 1);
/// ```
pub fn add<M, K, V>(map: &mut M, key: K, value: V) -> Insertion<V>
where
    M: OwnerMap<K, V>,
    K: fmt::Display,
{
    tracing::debug!(variant = M::NAME, %key, "add");
    match map.insert(key, value) {
        Some(previous) => Insertion::Replaced(previous),
        None => Insertion::Inserted,
    }
}

/// Removes the entry for `key` and returns its value, or `None` if absent.
pub fn remove_by_key<M, K, V>(map: &mut M, key: &K) -> Option<V>
where
    M: OwnerMap<K, V>,
    K: fmt::Display,
{
    let removed = map.remove(key);
    tracing::debug!(variant = M::NAME, %key, removed = removed.is_some(), "remove by key");
    removed
}

/// Removes every entry whose value equals `value` and returns their keys.
///
/// The returned keys are in the map's iteration order at the time of the call;
/// their count is the number of entries removed.
///
/// # Examples
///
/// ```
/// use tortoise_maps::{operations, Tortoise, TortoiseHashMap};
///
/// let mut map = TortoiseHashMap::new();
/// map.insert(Tortoise::new("Вічність"), "Микола".to_owned());
/// map.insert(Tortoise::new("Дзвін"), "Микола".to_owned());
/// map.insert(Tortoise::new("Еон"), "Софія".to_owned());
///
/// let removed = operations::remove_by_value(&mut map, &"Микола".to_owned());
/// assert_eq!(removed.len(), 2);
/// assert_eq!(map.len(), 1);
/// ```
pub fn remove_by_value<M, K, V>(map: &mut M, value: &V) -> Vec<K>
where
    M: OwnerMap<K, V>,
    K: Clone,
    V: PartialEq + fmt::Debug,
{
    let doomed: Vec<K> = map
        .iter()
        .filter(|(_, candidate)| *candidate == value)
        .map(|(key, _)| key.clone())
        .collect();
    for key in &doomed {
        map.remove(key);
    }
    tracing::debug!(variant = M::NAME, ?value, removed = doomed.len(), "remove by value");
    doomed
}

/// Rebuilds the map with its entries inserted in ascending key order.
///
/// For an insertion-ordered map this makes iteration follow the key order;
/// for an unordered map it has no observable effect on iteration. The order
/// is not maintained: later additions go to the end and removals leave gaps
/// closed without re-sorting.
///
/// # Examples
///
/// ```
/// use tortoise_maps::{operations, Tortoise, TortoiseLinkedHashMap};
///
/// let mut map = TortoiseLinkedHashMap::new();
/// map.insert(Tortoise::with_shell_thickness("Броня", 3.1), "Олеся".to_owned());
/// map.insert(Tortoise::with_shell_thickness("Атлант", 2.5), "Руслан".to_owned());
/// map.insert(Tortoise::with_shell_thickness("Броня", 2.9), "Тимур".to_owned());
///
/// operations::sort_by_key(&mut map);
/// let owners: Vec<_> = map.values().map(String::as_str).collect();
/// assert_eq!(owners, ["Руслан", "Тимур", "Олеся"]);
/// ```
pub fn sort_by_key<M, K, V>(map: &mut M)
where
    M: OwnerMap<K, V>,
    K: Ord,
{
    let mut entries = map.take_entries();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    tracing::trace!(variant = M::NAME, len = entries.len(), "sort by key");
    map.rebuild_from(entries);
}

/// Rebuilds the map with its entries inserted in ascending value order.
///
/// Entries with equal values are ordered by key, so the result does not
/// depend on the map's previous iteration order.
pub fn sort_by_value<M, K, V>(map: &mut M)
where
    M: OwnerMap<K, V>,
    K: Ord,
    V: Ord,
{
    let mut entries = map.take_entries();
    entries.sort_by(|a, b| cmp_by_value(a, b).then_with(|| a.0.cmp(&b.0)));
    tracing::trace!(variant = M::NAME, len = entries.len(), "sort by value");
    map.rebuild_from(entries);
}

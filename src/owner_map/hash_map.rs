use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;
use std::collections::hash_map::Iter as HashMapIter;

use super::{IterationOrder, OwnerMap};

impl<K, V, S> OwnerMap<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    const NAME: &'static str = "HashMap";
    const ITERATION_ORDER: IterationOrder = IterationOrder::Unspecified;

    type Iter<'a>
        = HashMapIter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashMap::iter(self)
    }

    fn take_entries(&mut self) -> Vec<(K, V)> {
        self.drain().collect()
    }

    fn rebuild_from<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.clear();
        self.extend(entries);
    }
}

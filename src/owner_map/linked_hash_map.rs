use core::hash::{BuildHasher, Hash};

use indexmap::IndexMap;
use indexmap::map::Iter as IndexMapIter;

use super::{IterationOrder, OwnerMap};

/// [`IndexMap`] keeps insertion order as long as removals shift the tail down
/// instead of swapping the last entry into the hole, so `remove` goes through
/// [`IndexMap::shift_remove`].
impl<K, V, S> OwnerMap<K, V> for IndexMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    const NAME: &'static str = "LinkedHashMap";
    const ITERATION_ORDER: IterationOrder = IterationOrder::Insertion;

    type Iter<'a>
        = IndexMapIter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        IndexMap::get(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        IndexMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.shift_remove(key)
    }

    fn iter(&self) -> Self::Iter<'_> {
        IndexMap::iter(self)
    }

    fn take_entries(&mut self) -> Vec<(K, V)> {
        self.drain(..).collect()
    }

    fn rebuild_from<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.clear();
        self.extend(entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tortoise;
    use pretty_assertions::assert_eq;

    fn nicknames(map: &IndexMap<Tortoise, u32>) -> Vec<&str> {
        OwnerMap::iter(map).filter_map(|(k, _)| k.nickname()).collect()
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut map = IndexMap::new();
        for (i, nickname) in ["Дзвін", "Атлант", "Зевс", "Броня"].into_iter().enumerate() {
            OwnerMap::insert(&mut map, Tortoise::new(nickname), u32::try_from(i).unwrap());
        }

        assert_eq!(OwnerMap::remove(&mut map, &Tortoise::new("Атлант")), Some(1));
        assert_eq!(nicknames(&map), ["Дзвін", "Зевс", "Броня"]);
    }

    #[test]
    fn overwrite_keeps_original_position() {
        let mut map = IndexMap::new();
        OwnerMap::insert(&mut map, Tortoise::new("Еон"), 1);
        OwnerMap::insert(&mut map, Tortoise::new("Жук"), 2);
        assert_eq!(OwnerMap::insert(&mut map, Tortoise::new("Еон"), 3), Some(1));
        assert_eq!(nicknames(&map), ["Еон", "Жук"]);
    }

    #[test]
    fn rebuild_follows_given_order() {
        let mut map = IndexMap::new();
        OwnerMap::insert(&mut map, Tortoise::new("Гном"), 1);
        OwnerMap::insert(&mut map, Tortoise::new("Вічність"), 2);

        let mut entries = map.take_entries();
        assert_eq!(entries.len(), 2);
        entries.reverse();
        map.rebuild_from(entries);
        assert_eq!(nicknames(&map), ["Вічність", "Гном"]);
    }
}

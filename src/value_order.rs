//! Ordering of map entries by their value.
//!
//! Values are compared with their own [`Ord`]. For optional values this puts
//! an absent value (`None`) before every present one and treats two absent
//! values as equal, which is the order used when owners may be unknown.

use core::cmp::Ordering;

/// Compares two entries by value, ignoring the keys.
///
/// Works for owned `(K, V)` pairs as well as borrowed `(&K, &V)` pairs, since
/// `&V` is [`Ord`] whenever `V` is.
///
/// # Examples
///
/// ```
/// use tortoise_maps::value_order::cmp_by_value;
///
/// let mut entries = vec![(1, Some("Руслан")), (2, None), (3, Some("Аліна"))];
/// entries.sort_by(cmp_by_value);
/// assert_eq!(entries, vec![(2, None), (3, Some("Аліна")), (1, Some("Руслан"))]);
/// ```
pub fn cmp_by_value<K, V: Ord>(a: &(K, V), b: &(K, V)) -> Ordering {
    a.1.cmp(&b.1)
}

/// Returns a probe that orders a borrowed entry against `target`.
///
/// The probe has the shape [`slice::binary_search_by`] expects, so a slice
/// sorted with [`cmp_by_value`] can be searched for a value without building
/// a stand-in entry.
///
/// # Examples
///
/// ```
/// use tortoise_maps::value_order::{cmp_by_value, cmp_value_to};
///
/// let owners = [("Атлант", "Руслан"), ("Гном", "Аліна"), ("Еон", "Софія")];
/// let mut entries: Vec<(&&str, &&str)> = owners.iter().map(|(k, v)| (k, v)).collect();
/// entries.sort_by(cmp_by_value);
///
/// let position = entries.binary_search_by(cmp_value_to(&"Софія")).unwrap();
/// assert_eq!(*entries[position].0, "Еон");
/// assert!(entries.binary_search_by(cmp_value_to(&"Микола")).is_err());
/// ```
pub fn cmp_value_to<K, V: Ord + ?Sized>(target: &V) -> impl Fn(&(K, &V)) -> Ordering {
    move |(_, value)| Ord::cmp(*value, target)
}

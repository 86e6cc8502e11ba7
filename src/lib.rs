//! Find, add, remove and sort operations over hash maps keyed by a composite
//! [`Tortoise`].
//!
//! The same logical data lives in two map variants with different iteration
//! contracts:
//!
//! - [`TortoiseHashMap`] - a `std` [`HashMap`](std::collections::HashMap), no
//!   iteration order at all
//! - [`TortoiseLinkedHashMap`] - an [`IndexMap`](indexmap::IndexMap), iteration
//!   in insertion order until the map is rebuilt
//!
//! Both implement [`OwnerMap`], and every operation in [`operations`] is
//! written once against that trait.
//!
//! # Example
//!
//! ```
//! use tortoise_maps::{operations, Tortoise, TortoiseLinkedHashMap};
//!
//! let mut owners = TortoiseLinkedHashMap::new();
//! owners.insert(Tortoise::with_shell_thickness("Броня", 3.1), "Олеся".to_owned());
//! owners.insert(Tortoise::with_shell_thickness("Атлант", 2.5), "Руслан".to_owned());
//! owners.insert(Tortoise::with_shell_thickness("Броня", 2.9), "Тимур".to_owned());
//!
//! // Lookup by key goes through `Hash` and `Eq`.
//! let key = Tortoise::with_shell_thickness("Броня", 3.1);
//! assert_eq!(operations::find_by_key(&owners, &key).map(String::as_str), Some("Олеся"));
//!
//! // Lookup by value sorts the entries by owner and binary searches them.
//! let found = operations::find_by_value(&owners, &"Тимур".to_owned());
//! assert_eq!(found, Some(&Tortoise::with_shell_thickness("Броня", 2.9)));
//!
//! // Sorting rebuilds the map in key order: nickname, then shell thickness.
//! operations::sort_by_key(&mut owners);
//! let order: Vec<_> = owners.values().map(String::as_str).collect();
//! assert_eq!(order, ["Руслан", "Тимур", "Олеся"]);
//! ```
//!
//! # Ordering
//!
//! Nicknames compare by Unicode scalar value, the same order `str` uses. In
//! the Ukrainian alphabet this puts `І` (U+0406) before `А` (U+0410).

#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

mod owner_map;
mod tortoise;

pub mod demo;
pub mod operations;
pub mod timing;
pub mod value_order;

pub use owner_map::{IterationOrder, OwnerMap, TortoiseHashMap, TortoiseLinkedHashMap};
pub use tortoise::{DescriptorError, MIN_SHELL_THICKNESS, SHELL_THICKNESS_KEY, Tortoise};

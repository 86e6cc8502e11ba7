//! The demonstration run: seed a map, then find, list, sort, add and remove.
//!
//! [`run`] performs the fixed sequence against any [`OwnerMap`] and records
//! every outcome as a [`Step`] in a [`Report`], so callers (and tests) see
//! what was found, added and removed without parsing console output.

use core::fmt;

use crate::operations;
use crate::owner_map::OwnerMap;
use crate::timing::measure;
use crate::{Tortoise, TortoiseHashMap, TortoiseLinkedHashMap};

/// The ten sample tortoises as `(nickname, shell thickness, owner)`, in
/// insertion order.
///
/// Two tortoises share the nickname "Броня", and "Микола" owns two tortoises.
pub const SAMPLE: [(&str, f64, &str); 10] = [
    ("Атлант", 2.5, "Руслан"),
    ("Броня", 3.1, "Олеся"),
    ("Вічність", 4.2, "Микола"),
    ("Гном", 1.8, "Аліна"),
    ("Броня", 2.9, "Тимур"),
    ("Дзвін", 3.7, "Микола"),
    ("Еон", 4.5, "Софія"),
    ("Жук", 2.2, "Віталій"),
    ("Зевс", 3.9, "Олеся"),
    ("Ікар", 2.7, "Надія"),
];

/// Returns the [`SAMPLE`] entries as map entries, in insertion order.
#[must_use]
pub fn sample_entries() -> Vec<(Tortoise, String)> {
    SAMPLE
        .iter()
        .map(|&(nickname, thickness, owner)| (Tortoise::with_shell_thickness(nickname, thickness), owner.to_owned()))
        .collect()
}

/// Builds a map of either variant holding the [`SAMPLE`] entries.
///
/// # Examples
///
/// ```
/// use tortoise_maps::demo::seeded;
/// use tortoise_maps::{TortoiseHashMap, TortoiseLinkedHashMap};
///
/// let hash: TortoiseHashMap = seeded();
/// let linked: TortoiseLinkedHashMap = seeded();
/// assert_eq!((hash.len(), linked.len()), (10, 10));
/// ```
#[must_use]
pub fn seeded<M>() -> M
where
    M: FromIterator<(Tortoise, String)>,
{
    sample_entries().into_iter().collect()
}

/// The keys and values a demonstration run searches for, adds and removes.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    /// Looked up by key, then removed by key.
    pub key_to_search_and_delete: Tortoise,
    /// Added with [`Scenario::value_to_add`].
    pub key_to_add: Tortoise,
    /// Looked up by value, then removed by value.
    pub value_to_search_and_delete: String,
    /// Owner stored under [`Scenario::key_to_add`].
    pub value_to_add: String,
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            key_to_search_and_delete: Tortoise::with_shell_thickness("Броня", 3.1),
            key_to_add: Tortoise::with_shell_thickness("Казка", 3.3),
            value_to_search_and_delete: "Микола".to_owned(),
            value_to_add: "Аркадій".to_owned(),
        }
    }
}

/// One recorded outcome of a demonstration run.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// The number of entries before any operation.
    InitialSize(usize),
    /// A lookup by key and the owner found, if any.
    FoundByKey { key: Tortoise, owner: Option<String> },
    /// A lookup by value and one matching key, if any.
    FoundByValue { owner: String, key: Option<Tortoise> },
    /// The entries rendered one per line, in iteration order.
    Listing(Vec<String>),
    /// The map was rebuilt in key order.
    SortedByKey,
    /// An entry was stored; `replaced` holds the overwritten owner.
    Added {
        key: Tortoise,
        owner: String,
        replaced: Option<String>,
    },
    /// A removal by key and the owner it removed, if any.
    RemovedByKey { key: Tortoise, owner: Option<String> },
    /// A removal by value and every key it removed.
    RemovedByValue { owner: String, keys: Vec<Tortoise> },
    /// The number of entries after the last operation.
    FinalSize(usize),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::InitialSize(len) => write!(f, "Initial size: {len}"),
            Step::FoundByKey { key, owner: Some(owner) } => write!(f, "Entry with key '{key}' found. Owner: {owner}"),
            Step::FoundByKey { key, owner: None } => write!(f, "Entry with key '{key}' is absent."),
            Step::FoundByValue { owner, key: Some(key) } => write!(f, "Owner '{owner}' found. Tortoise: {key}"),
            Step::FoundByValue { owner, key: None } => write!(f, "Owner '{owner}' is absent."),
            Step::Listing(lines) => {
                f.write_str("=== Key-value pairs ===")?;
                for line in lines {
                    write!(f, "\n  {line}")?;
                }
                Ok(())
            }
            Step::SortedByKey => f.write_str("Sorted by key."),
            Step::Added { key, owner, replaced } => {
                write!(f, "Added entry: tortoise='{key}', owner='{owner}'")?;
                if let Some(previous) = replaced {
                    write!(f, " (replaced owner '{previous}')")?;
                }
                Ok(())
            }
            Step::RemovedByKey { key, owner: Some(owner) } => {
                write!(f, "Removed entry with key '{key}'. Owner was: {owner}")
            }
            Step::RemovedByKey { key, owner: None } => write!(f, "Key '{key}' not found for removal."),
            Step::RemovedByValue { owner, keys } => {
                write!(f, "Removed {} entries with owner '{owner}'", keys.len())
            }
            Step::FinalSize(len) => write!(f, "Final size: {len}"),
        }
    }
}

/// Everything a demonstration run did to one map variant.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// The [`OwnerMap::NAME`] of the variant.
    pub variant: &'static str,
    /// The steps in the order they ran.
    pub steps: Vec<Step>,
}

impl Report {
    /// Returns the size recorded before any operation.
    #[must_use]
    pub fn initial_size(&self) -> Option<usize> {
        self.steps.iter().find_map(|step| match step {
            Step::InitialSize(len) => Some(*len),
            _ => None,
        })
    }

    /// Returns the size recorded after the last operation.
    #[must_use]
    pub fn final_size(&self) -> Option<usize> {
        self.steps.iter().rev().find_map(|step| match step {
            Step::FinalSize(len) => Some(*len),
            _ => None,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "========= Operations on {} =========", self.variant)?;
        for step in &self.steps {
            write!(f, "\n{step}")?;
        }
        Ok(())
    }
}

/// Renders the entries in iteration order, one `key -> owner` line each.
#[must_use]
pub fn listing<M>(map: &M) -> Vec<String>
where
    M: OwnerMap<Tortoise, String>,
{
    operations::entries(map)
        .into_iter()
        .map(|(key, owner)| format!("{key} -> {owner}"))
        .collect()
}

/// Runs the demonstration sequence against `map` and records each outcome.
///
/// The sequence is: find by key, find by value, list, sort by key, list,
/// find by key, find by value, add, remove by key, remove by value. Each
/// operation is timed through [`measure`].
///
/// # Examples
///
/// ```
/// use tortoise_maps::demo::{run, seeded, Scenario};
/// use tortoise_maps::TortoiseLinkedHashMap;
///
/// let mut map: TortoiseLinkedHashMap = seeded();
/// let report = run(&mut map, &Scenario::default());
/// assert_eq!(report.initial_size(), Some(10));
/// assert_eq!(report.final_size(), Some(map.len()));
/// ```
pub fn run<M>(map: &mut M, scenario: &Scenario) -> Report
where
    M: OwnerMap<Tortoise, String>,
{
    let _span = tracing::info_span!("run", variant = M::NAME).entered();
    let mut steps = vec![Step::InitialSize(map.len())];

    find_both(map, scenario, &mut steps);

    steps.push(Step::Listing(measure(&label("listing", M::NAME), || listing(map))));
    measure(&label("sort by key", M::NAME), || operations::sort_by_key(map));
    steps.push(Step::SortedByKey);
    steps.push(Step::Listing(measure(&label("listing", M::NAME), || listing(map))));

    find_both(map, scenario, &mut steps);

    let key = scenario.key_to_add.clone();
    let owner = scenario.value_to_add.clone();
    let insertion = measure(&label("add", M::NAME), || {
        operations::add(map, key.clone(), owner.clone())
    });
    steps.push(Step::Added {
        key,
        owner,
        replaced: insertion.replaced(),
    });

    let key = &scenario.key_to_search_and_delete;
    let owner = measure(&label("remove by key", M::NAME), || operations::remove_by_key(map, key));
    steps.push(Step::RemovedByKey { key: key.clone(), owner });

    let owner = &scenario.value_to_search_and_delete;
    let keys = measure(&label("remove by value", M::NAME), || operations::remove_by_value(map, owner));
    steps.push(Step::RemovedByValue {
        owner: owner.clone(),
        keys,
    });

    steps.push(Step::FinalSize(map.len()));
    tracing::info!(steps = steps.len(), len = map.len(), "run finished");
    Report {
        variant: M::NAME,
        steps,
    }
}

fn find_both<M>(map: &M, scenario: &Scenario, steps: &mut Vec<Step>)
where
    M: OwnerMap<Tortoise, String>,
{
    let key = &scenario.key_to_search_and_delete;
    let owner = measure(&label("find by key", M::NAME), || operations::find_by_key(map, key));
    steps.push(Step::FoundByKey {
        key: key.clone(),
        owner: owner.cloned(),
    });

    let owner = &scenario.value_to_search_and_delete;
    let key = measure(&label("binary search by value", M::NAME), || {
        operations::find_by_value(map, owner)
    });
    steps.push(Step::FoundByValue {
        owner: owner.clone(),
        key: key.cloned(),
    });
}

fn label(operation: &str, variant: &str) -> String {
    format!("{operation} in {variant}")
}

/// Which map variants a demonstration covers.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Variants {
    /// Only the unordered [`TortoiseHashMap`].
    Hash,
    /// Only the insertion-ordered [`TortoiseLinkedHashMap`].
    Linked,
    /// The unordered map first, then the insertion-ordered one.
    #[default]
    Both,
}

/// Seeds a fresh map of each selected variant and runs `scenario` on it.
#[must_use]
pub fn run_all(scenario: &Scenario, variants: Variants) -> Vec<Report> {
    let mut reports = Vec::with_capacity(2);
    if matches!(variants, Variants::Hash | Variants::Both) {
        let mut map: TortoiseHashMap = seeded();
        reports.push(run(&mut map, scenario));
    }
    if matches!(variants, Variants::Linked | Variants::Both) {
        let mut map: TortoiseLinkedHashMap = seeded();
        reports.push(run(&mut map, scenario));
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sample_has_one_nickname_collision() {
        let mut nicknames: Vec<_> = SAMPLE.iter().map(|(nickname, _, _)| *nickname).collect();
        nicknames.sort_unstable();
        nicknames.dedup();
        assert_eq!(nicknames.len(), SAMPLE.len() - 1);
    }

    #[test]
    fn step_lines_carry_the_outcome() {
        let key = Tortoise::with_shell_thickness("Броня", 3.1);
        let found = Step::FoundByKey {
            key: key.clone(),
            owner: Some("Олеся".to_owned()),
        };
        assert_eq!(
            found.to_string(),
            "Entry with key 'Tortoise{nickname='Броня', descriptor='shellThickness=3.1'}' found. Owner: Олеся"
        );
        let removed = Step::RemovedByValue {
            owner: "Микола".to_owned(),
            keys: vec![key.clone(), key],
        };
        assert_eq!(removed.to_string(), "Removed 2 entries with owner 'Микола'");
    }

    #[test]
    fn run_all_respects_selection() {
        let scenario = Scenario::default();
        let names = |variants| -> Vec<&'static str> {
            run_all(&scenario, variants).iter().map(|r| r.variant).collect()
        };
        assert_eq!(names(Variants::Hash), ["HashMap"]);
        assert_eq!(names(Variants::Linked), ["LinkedHashMap"]);
        assert_eq!(names(Variants::Both), ["HashMap", "LinkedHashMap"]);
    }

    #[test]
    fn report_renders_header_and_steps() {
        let report = Report {
            variant: "HashMap",
            steps: vec![Step::InitialSize(10), Step::SortedByKey, Step::FinalSize(8)],
        };
        assert_eq!(
            report.to_string(),
            "========= Operations on HashMap =========\nInitial size: 10\nSorted by key.\nFinal size: 8"
        );
        assert_eq!(report.initial_size(), Some(10));
        assert_eq!(report.final_size(), Some(8));
    }
}

//! Exercise catalogs: the immutable items and targets of one exercise.
//!
//! A catalog is authored once, validated at construction, and never
//! mutated afterwards. Every item and target id a session touches is
//! expected to come from its catalog (closed-world assumption); the
//! engine does not validate ids at runtime.

use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DropslotError, Result};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            /// Creates a new id from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id! {
    /// Identifier of a draggable item.
    ItemId
}

string_id! {
    /// Identifier of a drop target.
    TargetId
}

string_id! {
    /// Category tag drawn from an exercise's fixed, closed set.
    ///
    /// Matching is exact and case-sensitive: an item belongs on a target
    /// iff their categories compare equal.
    Category
}

/// A draggable item.
///
/// Items are immutable: they are created from the authored catalog at
/// session start and only ever move between targets and the unplaced
/// pool. The `label` is display metadata and carries no semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    id: ItemId,
    category: Category,
    label: String,
}

impl Item {
    /// Creates an item with the given id and category.
    pub fn new(id: impl Into<ItemId>, category: impl Into<Category>) -> Self {
        Item {
            id: id.into(),
            category: category.into(),
            label: String::new(),
        }
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Returns the item id.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the item's category.
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Returns the display label (possibly empty).
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A drop target.
///
/// A target accepts up to `capacity` occupants and expects every one of
/// them to carry `expected_category`. Single-slot puzzles use the
/// default capacity of 1; the team-position variant uses larger values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Target {
    id: TargetId,
    expected_category: Category,
    capacity: usize,
    label: String,
}

impl Target {
    /// Creates a single-slot target with the given id and expected category.
    pub fn new(id: impl Into<TargetId>, expected_category: impl Into<Category>) -> Self {
        Target {
            id: id.into(),
            expected_category: expected_category.into(),
            capacity: 1,
            label: String::new(),
        }
    }

    /// Sets the occupant capacity. Must be at least 1; `Catalog::new`
    /// rejects zero-capacity targets.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Returns the target id.
    pub fn id(&self) -> &TargetId {
        &self.id
    }

    /// Returns the category every occupant is expected to carry.
    pub fn expected_category(&self) -> &Category {
        &self.expected_category
    }

    /// Returns the occupant capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the display label (possibly empty).
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The static catalog of one exercise: its items and targets.
///
/// # Examples
///
/// ```
/// use dropslot_core::{Catalog, Item, Target};
///
/// let catalog = Catalog::new(
///     vec![Item::new("tx-1", "transaction")],
///     vec![Target::new("bucket-tx", "transaction")],
/// )
/// .unwrap();
///
/// assert_eq!(catalog.item_count(), 1);
/// assert!(catalog.contains_target(&"bucket-tx".into()));
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    targets: Vec<Target>,
    item_index: HashMap<ItemId, usize>,
    target_index: HashMap<TargetId, usize>,
}

impl Catalog {
    /// Builds a catalog, validating the authored data.
    ///
    /// Fails on duplicate item ids, duplicate target ids, or a target
    /// with zero capacity. After construction the catalog is immutable
    /// and the closed-world assumption holds.
    pub fn new(items: Vec<Item>, targets: Vec<Target>) -> Result<Self> {
        let mut item_index = HashMap::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            if item_index.insert(item.id.clone(), idx).is_some() {
                return Err(DropslotError::Catalog(format!(
                    "duplicate item id '{}'",
                    item.id
                )));
            }
        }

        let mut target_index = HashMap::with_capacity(targets.len());
        for (idx, target) in targets.iter().enumerate() {
            if target.capacity == 0 {
                return Err(DropslotError::Catalog(format!(
                    "target '{}' has zero capacity",
                    target.id
                )));
            }
            if target_index.insert(target.id.clone(), idx).is_some() {
                return Err(DropslotError::Catalog(format!(
                    "duplicate target id '{}'",
                    target.id
                )));
            }
        }

        Ok(Catalog {
            items,
            targets,
            item_index,
            target_index,
        })
    }

    /// Looks up an item by id.
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.item_index.get(id).map(|&idx| &self.items[idx])
    }

    /// Looks up a target by id.
    pub fn target(&self, id: &TargetId) -> Option<&Target> {
        self.target_index.get(id).map(|&idx| &self.targets[idx])
    }

    /// Returns true if the catalog contains an item with this id.
    pub fn contains_item(&self, id: &ItemId) -> bool {
        self.item_index.contains_key(id)
    }

    /// Returns true if the catalog contains a target with this id.
    pub fn contains_target(&self, id: &TargetId) -> bool {
        self.target_index.contains_key(id)
    }

    /// Iterates the items in authored order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Iterates the targets in authored order.
    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }

    /// Returns the number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of targets.
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Returns the sum of all target capacities.
    pub fn total_capacity(&self) -> usize {
        self.targets.iter().map(|t| t.capacity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> Catalog {
        Catalog::new(
            vec![
                Item::new("a", "x").with_label("Item A"),
                Item::new("b", "y"),
            ],
            vec![
                Target::new("t1", "x"),
                Target::new("t2", "y").with_capacity(3),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_lookup() {
        let catalog = small_catalog();

        let item = catalog.item(&"a".into()).unwrap();
        assert_eq!(item.category(), &Category::new("x"));
        assert_eq!(item.label(), "Item A");

        let target = catalog.target(&"t2".into()).unwrap();
        assert_eq!(target.capacity(), 3);

        assert!(catalog.item(&"missing".into()).is_none());
        assert!(!catalog.contains_target(&"missing".into()));
    }

    #[test]
    fn test_counts() {
        let catalog = small_catalog();
        assert_eq!(catalog.item_count(), 2);
        assert_eq!(catalog.target_count(), 2);
        assert_eq!(catalog.total_capacity(), 4);
    }

    #[test]
    fn test_duplicate_item_id_rejected() {
        let result = Catalog::new(
            vec![Item::new("a", "x"), Item::new("a", "y")],
            vec![Target::new("t1", "x")],
        );
        assert!(matches!(result, Err(DropslotError::Catalog(_))));
    }

    #[test]
    fn test_duplicate_target_id_rejected() {
        let result = Catalog::new(
            vec![Item::new("a", "x")],
            vec![Target::new("t1", "x"), Target::new("t1", "y")],
        );
        assert!(matches!(result, Err(DropslotError::Catalog(_))));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result = Catalog::new(
            vec![Item::new("a", "x")],
            vec![Target::new("t1", "x").with_capacity(0)],
        );
        assert!(matches!(result, Err(DropslotError::Catalog(_))));
    }

    #[test]
    fn test_authored_order_preserved() {
        let catalog = small_catalog();
        let ids: Vec<&str> = catalog.items().map(|i| i.id().as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}

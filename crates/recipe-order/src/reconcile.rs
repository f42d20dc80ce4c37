//! Reconciliation Engine
//!
//! Merges a previously saved order with the current catalog.

use std::collections::{HashMap, HashSet};

use crate::entity::Entity;

/// Build the display order for one scope.
///
/// Saved ids come first in their saved order, skipping ids that no longer
/// exist (stale) and repeated ids. Items the saved order never mentioned are
/// appended in catalog order, so new entries are never hidden.
/// The result always holds every item of `all_items` exactly once.
pub fn reconcile<T: Entity>(all_items: &[T], saved_order: Option<&[String]>) -> Vec<T> {
    let Some(saved_order) = saved_order else {
        return all_items.to_vec();
    };

    let (result, skipped) = merge(all_items, saved_order);
    log::debug!(
        "reconcile: {} restored, {} stale dropped, {} repeated dropped, {} appended",
        skipped.restored,
        skipped.stale,
        skipped.repeated,
        result.len() - skipped.restored
    );
    result
}

/// What happened to the saved ids during a merge
#[derive(Debug, Default, PartialEq, Eq)]
struct MergeCounts {
    restored: usize,
    stale: usize,
    repeated: usize,
}

fn merge<T: Entity>(all_items: &[T], saved_order: &[String]) -> (Vec<T>, MergeCounts) {
    let by_id: HashMap<&str, &T> = all_items.iter().map(|item| (item.id(), item)).collect();
    let mut placed: HashSet<&str> = HashSet::with_capacity(all_items.len());
    let mut result = Vec::with_capacity(all_items.len());
    let mut counts = MergeCounts::default();

    for id in saved_order {
        match by_id.get(id.as_str()) {
            Some(&item) if placed.insert(item.id()) => result.push(item.clone()),
            Some(_) => counts.repeated += 1,
            None => counts.stale += 1,
        }
    }
    counts.restored = result.len();

    for item in all_items {
        if placed.insert(item.id()) {
            result.push(item.clone());
        }
    }
    (result, counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Card(&'static str);

    impl Entity for Card {
        fn id(&self) -> &str {
            self.0
        }
    }

    fn cards(ids: &[&'static str]) -> Vec<Card> {
        ids.iter().map(|&id| Card(id)).collect()
    }

    fn saved(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn ids(items: &[Card]) -> Vec<&'static str> {
        items.iter().map(|c| c.0).collect()
    }

    #[test]
    fn test_absent_keeps_catalog_order() {
        let items = cards(&["A", "B", "C"]);
        assert_eq!(reconcile(&items, None), items);
    }

    #[test]
    fn test_new_items_appended() {
        let items = cards(&["A", "B", "C"]);
        let order = saved(&["B", "A"]);
        assert_eq!(ids(&reconcile(&items, Some(order.as_slice()))), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_stale_ids_dropped() {
        let items = cards(&["A", "B"]);
        let order = saved(&["X", "A", "Y", "B"]);
        assert_eq!(ids(&reconcile(&items, Some(order.as_slice()))), vec!["A", "B"]);
    }

    #[test]
    fn test_valid_permutation_is_restored() {
        let items = cards(&["A", "B", "C", "D"]);
        let order = saved(&["D", "B", "A", "C"]);
        assert_eq!(ids(&reconcile(&items, Some(order.as_slice()))), vec!["D", "B", "A", "C"]);
    }

    #[test]
    fn test_only_stale_ids_behaves_as_absent() {
        let items = cards(&["A", "B", "C"]);
        let order = saved(&["X", "Y"]);
        assert_eq!(reconcile(&items, Some(order.as_slice())), items);
    }

    #[test]
    fn test_empty_saved_order_behaves_as_absent() {
        let items = cards(&["A", "B"]);
        assert_eq!(reconcile(&items, Some(&[][..])), items);
    }

    #[test]
    fn test_empty_catalog() {
        let order = saved(&["A", "B"]);
        assert!(reconcile::<Card>(&[], Some(order.as_slice())).is_empty());
        assert!(reconcile::<Card>(&[], None).is_empty());
    }

    #[test]
    fn test_duplicate_saved_ids_placed_once() {
        let items = cards(&["A", "B", "C"]);
        let order = saved(&["C", "A", "C", "A"]);
        assert_eq!(ids(&reconcile(&items, Some(order.as_slice()))), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_repeated_ids_not_counted_as_stale() {
        let items = cards(&["A", "B", "C"]);
        let order = saved(&["C", "X", "A", "C", "A"]);
        let (result, counts) = merge(&items, &order);
        assert_eq!(ids(&result), vec!["C", "A", "B"]);
        assert_eq!(counts, MergeCounts { restored: 2, stale: 1, repeated: 2 });
    }

    #[test]
    fn test_every_item_exactly_once() {
        let items = cards(&["A", "B", "C", "D", "E"]);
        let orders = [
            saved(&[]),
            saved(&["Z"]),
            saved(&["E", "Q", "A"]),
            saved(&["B", "B", "D", "X", "A", "C", "E"]),
        ];
        for order in &orders {
            let mut result = ids(&reconcile(&items, Some(order.as_slice())));
            result.sort();
            assert_eq!(result, vec!["A", "B", "C", "D", "E"], "saved order {:?}", order);
        }
    }
}

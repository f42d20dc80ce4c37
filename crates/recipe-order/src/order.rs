//! Order Helpers
//!
//! Single-element relocation and id extraction.

use crate::entity::Entity;

/// Relocate the element at `from` to `to`, returning a fresh sequence.
///
/// Elements strictly between the two positions shift by one slot; everything
/// else keeps its place. Out-of-range indices return an unchanged copy.
pub fn move_element<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut result = items.to_vec();
    if from >= result.len() || to >= result.len() || from == to {
        return result;
    }
    let moved = result.remove(from);
    result.insert(to, moved);
    result
}

/// Identifiers in display order
pub fn ids_of<T: Entity>(items: &[T]) -> Vec<String> {
    items.iter().map(|item| item.id().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_forward() {
        let order = vec!["A", "B", "C", "D"];
        assert_eq!(move_element(&order, 0, 2), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn test_move_backward() {
        let order = vec!["A", "B", "C", "D"];
        assert_eq!(move_element(&order, 3, 1), vec!["A", "D", "B", "C"]);
    }

    #[test]
    fn test_move_to_ends() {
        let order = vec!["A", "B", "C", "D"];
        assert_eq!(move_element(&order, 1, 3), vec!["A", "C", "D", "B"]);
        assert_eq!(move_element(&order, 2, 0), vec!["C", "A", "B", "D"]);
    }

    #[test]
    fn test_same_index_is_noop() {
        let order = vec!["A", "B", "C"];
        assert_eq!(move_element(&order, 1, 1), order);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let order = vec!["A", "B", "C"];
        assert_eq!(move_element(&order, 5, 0), order);
        assert_eq!(move_element(&order, 0, 3), order);
        assert!(move_element::<&str>(&[], 0, 0).is_empty());
    }
}

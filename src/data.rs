//! Recipe Catalog
//!
//! The static identity store, bundled into the binary as JSON.

use crate::models::Recipe;

const CATALOG_JSON: &str = include_str!("../assets/recipes.json");

/// Parse the bundled catalog. A broken bundle yields an empty catalog.
pub fn load_catalog() -> Vec<Recipe> {
    parse_catalog(CATALOG_JSON)
}

fn parse_catalog(raw: &str) -> Vec<Recipe> {
    match serde_json::from_str::<Vec<Recipe>>(raw) {
        Ok(recipes) => {
            log::info!("[CATALOG] Loaded {} recipes", recipes.len());
            recipes
        }
        Err(e) => {
            log::error!("[CATALOG] Failed to parse recipe catalog: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;
    use std::collections::HashSet;

    #[test]
    fn test_bundled_catalog_parses() {
        let recipes = load_catalog();
        assert!(!recipes.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let recipes = load_catalog();
        let ids: HashSet<_> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), recipes.len());
    }

    #[test]
    fn test_every_meal_type_has_recipes() {
        let recipes = load_catalog();
        for meal in MealType::ALL {
            assert!(recipes.iter().any(|r| r.meal_type == meal), "no {:?} recipes", meal);
        }
    }

    #[test]
    fn test_broken_catalog_is_empty() {
        assert!(parse_catalog("[{\"id\": 1}]").is_empty());
    }
}

//! Frontend Models
//!
//! Recipe catalog data structures.

use serde::{Deserialize, Serialize};

use recipe_order::{Entity, OrderScope, Scoped};

/// Meal type; every recipe belongs to exactly one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MealType {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner, MealType::Snack];

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

impl OrderScope for MealType {
    fn key_segment(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
}

/// Recipe data structure (matches the bundled catalog JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: u32,
    pub cost_per_serving: f64,
    pub macros: Macros,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
    pub meal_type: MealType,
}

impl Recipe {
    /// Cost chip text, e.g. `₹45.00`
    pub fn cost_label(&self) -> String {
        format!("₹{:.2}", self.cost_per_serving)
    }
}

impl Entity for Recipe {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Scoped for Recipe {
    type Scope = MealType;

    fn scope(&self) -> MealType {
        self.meal_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_segments_unique() {
        let mut segments: Vec<_> = MealType::ALL.iter().map(|m| m.key_segment()).collect();
        segments.sort();
        segments.dedup();
        assert_eq!(segments.len(), MealType::ALL.len());
    }

    #[test]
    fn test_recipe_from_catalog_json() {
        let raw = r#"{
            "id": "oats",
            "title": "Overnight Oats",
            "description": "Creamy oats",
            "image": "/images/oats.jpg",
            "prepTime": "5 min",
            "cookTime": "0 min",
            "servings": 1,
            "costPerServing": 45,
            "macros": { "calories": 320, "protein": 14, "carbs": 48, "fat": 9 },
            "ingredients": [{ "name": "Rolled oats", "amount": "1/2 cup" }],
            "instructions": ["Mix", "Chill overnight"],
            "tags": ["vegetarian"],
            "mealType": "Breakfast"
        }"#;
        let recipe: Recipe = serde_json::from_str(raw).unwrap();
        assert_eq!(recipe.id(), "oats");
        assert_eq!(recipe.scope(), MealType::Breakfast);
        assert_eq!(recipe.cost_label(), "₹45.00");
        assert_eq!(recipe.ingredients[0].amount, "1/2 cup");
    }
}

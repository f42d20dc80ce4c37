//! UI Components
//!
//! Reusable Leptos components.

mod recipe_card;
mod sortable_recipe_card;
mod recipe_grid;
mod category_tabs;
mod recipe_detail_modal;
mod view_toggle;

pub use recipe_card::RecipeCard;
pub use sortable_recipe_card::SortableRecipeCard;
pub use recipe_grid::RecipeGrid;
pub use category_tabs::CategoryTabs;
pub use recipe_detail_modal::RecipeDetailModal;
pub use view_toggle::ViewToggle;

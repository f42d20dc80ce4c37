//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use recipe_order::{OrderView, Selection, ViewMode};

use crate::models::{MealType, Recipe};

/// View state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Flat grid or tabs by meal type
    pub view_mode: ViewMode,
    /// Meal type shown in tabs mode
    pub active_tab: MealType,
    /// Detail view selection (not persisted)
    pub selection: Selection<Recipe>,
}

impl AppState {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Order rendered by the current layout; gestures are routed to it
pub fn current_order(store: &AppStore) -> OrderView<MealType> {
    match store.view_mode().get_untracked() {
        ViewMode::Grid => OrderView::Global,
        ViewMode::Tabs => OrderView::Scope(store.active_tab().get_untracked()),
    }
}

/// Open the detail view
pub fn store_select_recipe(store: &AppStore, recipe: Recipe) {
    store.selection().update(|selection| selection.select(recipe));
}

//! Catalog Context
//!
//! Shared ordering state provided via Leptos Context API.
//! The scoped catalog is not `Send` (controller observers, browser storage),
//! so it lives in local arena storage behind a `Copy` handle.

use leptos::prelude::*;

use recipe_order::{CatalogConfig, DragState, GestureInput, OrderView, ScopedCatalog, ViewMode};

use crate::models::{MealType, Recipe};
use crate::storage::BrowserStorage;

pub type RecipeCatalog = ScopedCatalog<Recipe, BrowserStorage>;

#[derive(Clone, Copy)]
pub struct CatalogContext {
    catalog: StoredValue<RecipeCatalog, LocalStorage>,
    storage: StoredValue<BrowserStorage, LocalStorage>,
    config: StoredValue<CatalogConfig>,
    /// Bumped by the controllers' observers after every committed reorder
    pub order_version: ReadSignal<u32>,
}

impl CatalogContext {
    pub fn new(
        catalog: RecipeCatalog,
        storage: BrowserStorage,
        config: CatalogConfig,
        order_version: ReadSignal<u32>,
    ) -> Self {
        Self {
            catalog: StoredValue::new_local(catalog),
            storage: StoredValue::new_local(storage),
            config: StoredValue::new(config),
            order_version,
        }
    }

    /// Recipes of `order` in display order; re-runs after each reorder
    pub fn items(&self, order: OrderView<MealType>) -> Vec<Recipe> {
        let _ = self.order_version.get();
        self.catalog.with_value(|catalog| catalog.items(order).to_vec())
    }

    pub fn count(&self, order: OrderView<MealType>) -> usize {
        self.catalog.with_value(|catalog| catalog.items(order).len())
    }

    /// Route one gesture input to the controller of `order`
    pub fn handle(&self, order: OrderView<MealType>, input: GestureInput) -> DragState {
        self.catalog
            .try_update_value(|catalog| match catalog.controller_mut(order) {
                Some(controller) => {
                    controller.handle(input);
                    controller.state().clone()
                }
                None => DragState::Idle,
            })
            .unwrap_or_default()
    }

    pub fn selection_clear_delay_ms(&self) -> u32 {
        self.config.with_value(|config| config.selection_clear_delay_ms)
    }

    /// Remember the chosen layout for the next visit
    pub fn save_view_mode(&self, mode: ViewMode) {
        let storage = self.storage;
        self.config.update_value(|config| {
            config.view_mode = mode;
            storage.with_value(|s| config.save(s));
        });
    }
}

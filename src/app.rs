//! Meal Planner App
//!
//! Main application component: header, grid or tabbed catalog, detail modal.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use leptos_dragdrop::{bind_global_listeners, create_dnd_signals, DragState, GestureInput};
use recipe_order::{CatalogConfig, OrderView, ScopedCatalog, ViewMode};

use crate::components::{CategoryTabs, RecipeDetailModal, RecipeGrid, ViewToggle};
use crate::context::CatalogContext;
use crate::data;
use crate::models::Recipe;
use crate::storage::BrowserStorage;
use crate::store::{current_order, store_select_recipe, AppState, AppStateStoreFields};

/// Footer text, singular for exactly one recipe
pub fn recipe_count_label(count: usize) -> String {
    format!("{} {} Available", count, if count == 1 { "Recipe" } else { "Recipes" })
}

#[component]
pub fn App() -> impl IntoView {
    let storage = BrowserStorage::open();
    let config = CatalogConfig::load(&storage);
    let recipes = data::load_catalog();

    // Controllers notify the renderer through this counter
    let (order_version, set_order_version) = signal(0u32);
    let mut catalog = ScopedCatalog::load(&recipes, storage.clone(), &config);
    let orders: Vec<_> = std::iter::once(OrderView::Global)
        .chain(catalog.scopes().map(OrderView::Scope))
        .collect();
    for order in orders {
        if let Some(controller) = catalog.controller_mut(order) {
            controller.subscribe(move |change| {
                log::info!("[ORDER] {:?} reordered ({} recipes)", order, change.ids.len());
                set_order_version.update(|v| *v += 1);
            });
        }
    }

    let store = Store::new(AppState::new(config.view_mode));
    provide_context(store);

    let ctx = CatalogContext::new(catalog, storage, config, order_version);
    provide_context(ctx);

    // Gesture inputs go to whichever order is on screen
    let dnd = create_dnd_signals(Callback::new(move |input: GestureInput| -> DragState {
        ctx.handle(current_order(&store), input)
    }));
    bind_global_listeners(dnd);
    provide_context(dnd);

    let on_activate = Callback::new(move |recipe: Recipe| {
        log::debug!("[APP] Open recipe {}", recipe.id);
        store_select_recipe(&store, recipe);
    });

    let on_close = Callback::new(move |_: ()| {
        let Some(ticket) = store.selection().try_update(|selection| selection.close()) else {
            return;
        };
        let delay = ctx.selection_clear_delay_ms();
        // Clear after animation
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            store.selection().update(|selection| {
                selection.finish_close(ticket);
            });
        });
    });

    let _escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && !ev.default_prevented() && store.selection().with_untracked(|s| s.is_open()) {
            on_close.run(());
        }
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1 class="app-title">"Meal Planner"</h1>
                <p class="app-subtitle">"Delicious recipes with complete nutritional information"</p>
                <p class="app-hint">"💡 Drag and drop to reorder • Click to view details"</p>
                <ViewToggle />
            </header>

            <main class="main-content">
                {move || match store.view_mode().get() {
                    ViewMode::Grid => view! { <RecipeGrid order=OrderView::Global on_activate=on_activate /> }.into_any(),
                    ViewMode::Tabs => view! { <CategoryTabs on_activate=on_activate /> }.into_any(),
                }}
            </main>

            <footer class="app-footer">{recipe_count_label(ctx.count(OrderView::Global))}</footer>

            <RecipeDetailModal on_close=on_close />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_count_label() {
        assert_eq!(recipe_count_label(0), "0 Recipes Available");
        assert_eq!(recipe_count_label(1), "1 Recipe Available");
        assert_eq!(recipe_count_label(8), "8 Recipes Available");
    }
}

//! Category Tabs Component
//!
//! One tab per meal type; each tab renders its own independently ordered grid.

use leptos::prelude::*;

use leptos_dragdrop::{DndSignals, GestureInput};
use recipe_order::OrderView;

use crate::components::RecipeGrid;
use crate::context::CatalogContext;
use crate::models::{MealType, Recipe};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryTabs(on_activate: Callback<Recipe>) -> impl IntoView {
    let store = use_app_store();
    let ctx = expect_context::<CatalogContext>();
    let dnd = expect_context::<DndSignals>();

    let select_tab = move |meal: MealType| {
        if store.active_tab().get_untracked() != meal {
            // Drags never cross categories
            dnd.apply(GestureInput::Cancel);
            store.active_tab().set(meal);
        }
    };

    view! {
        <div class="category-tabs">
            <div class="tab-bar" role="tablist">
                {MealType::ALL
                    .into_iter()
                    .map(|meal| {
                        let is_active = move || store.active_tab().get() == meal;
                        view! {
                            <button
                                class=move || if is_active() { "tab active" } else { "tab" }
                                role="tab"
                                aria-selected=move || is_active().to_string()
                                on:click=move |_| select_tab(meal)
                            >
                                {meal.label()}
                                <span class="tab-count">{ctx.count(OrderView::Scope(meal))}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                let meal = store.active_tab().get();
                view! { <RecipeGrid order=OrderView::Scope(meal) on_activate=on_activate /> }
            }}
        </div>
    }
}

//! Recipe Grid Component
//!
//! Renders one order (global or a single meal type) as a card grid.

use leptos::prelude::*;

use recipe_order::OrderView;

use crate::components::SortableRecipeCard;
use crate::context::CatalogContext;
use crate::models::{MealType, Recipe};

#[component]
pub fn RecipeGrid(order: OrderView<MealType>, on_activate: Callback<Recipe>) -> impl IntoView {
    let ctx = expect_context::<CatalogContext>();
    let recipes = move || ctx.items(order);

    view! {
        <Show
            when=move || !recipes().is_empty()
            fallback=|| view! { <div class="empty-message">"No recipes yet"</div> }
        >
            <div class="recipe-grid">
                <For
                    each=recipes
                    key=|recipe| recipe.id.clone()
                    children=move |recipe| {
                        view! { <SortableRecipeCard recipe=recipe on_activate=on_activate /> }
                    }
                />
            </div>
        </Show>
    }
}

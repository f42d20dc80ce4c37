//! Recipe Detail Modal
//!
//! Full recipe view. Stays mounted with the last recipe while closing so the
//! exit animation has something to show.

use leptos::prelude::*;

use crate::models::Recipe;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn MacroCard(label: &'static str, value: u32, unit: &'static str, tone: &'static str) -> impl IntoView {
    view! {
        <div class=format!("macro-card {}", tone)>
            <div class="macro-card-value">{format!("{}{}", value, unit)}</div>
            <div class="macro-card-label">{label}</div>
        </div>
    }
}

#[component]
fn InfoItem(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="info-item">
            <span class="info-label">{label}</span>
            <span class="info-value">{value}</span>
        </div>
    }
}

fn detail_body(recipe: Recipe) -> impl IntoView {
    let macros = recipe.macros.clone();
    let cost = recipe.cost_label();

    view! {
        <img class="detail-image" src=recipe.image.clone() alt=recipe.title.clone() />
        <p class="detail-description">{recipe.description.clone()}</p>

        <div class="detail-info">
            <InfoItem label="Prep Time" value=recipe.prep_time.clone() />
            <InfoItem label="Cook Time" value=recipe.cook_time.clone() />
            <InfoItem label="Servings" value=recipe.servings.to_string() />
            <InfoItem label="Cost/Serving" value=cost />
        </div>

        <h3 class="detail-section">"Nutritional Information (per serving)"</h3>
        <div class="macro-cards">
            <MacroCard label="Calories" value=macros.calories unit="" tone="calories" />
            <MacroCard label="Protein" value=macros.protein unit="g" tone="protein" />
            <MacroCard label="Carbs" value=macros.carbs unit="g" tone="carbs" />
            <MacroCard label="Fat" value=macros.fat unit="g" tone="fat" />
        </div>

        <h3 class="detail-section">"Ingredients"</h3>
        <ul class="ingredient-list">
            {recipe.ingredients.into_iter().map(|ingredient| view! {
                <li>
                    <span class="ingredient-name">{ingredient.name}</span>
                    <span class="ingredient-amount">{ingredient.amount}</span>
                </li>
            }).collect_view()}
        </ul>

        <h3 class="detail-section">"Instructions"</h3>
        <ol class="instruction-list">
            {recipe.instructions.into_iter().map(|step| view! { <li>{step}</li> }).collect_view()}
        </ol>

        <div class="tag-chips">
            {recipe.tags.into_iter().map(|tag| view! { <span class="tag-chip">{tag}</span> }).collect_view()}
        </div>
    }
}

#[component]
pub fn RecipeDetailModal(on_close: Callback<()>) -> impl IntoView {
    let store = use_app_store();

    let is_open = move || store.selection().with(|selection| selection.is_open());
    let recipe = move || store.selection().with(|selection| selection.item().cloned());

    move || {
        recipe().map(|recipe| {
            let title = recipe.title.clone();
            view! {
                <div
                    class=move || if is_open() { "modal-backdrop open" } else { "modal-backdrop closing" }
                    on:click=move |_| on_close.run(())
                >
                    <div class="modal" role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
                        <div class="modal-header">
                            <h2 class="modal-title">{title}</h2>
                            <button class="close-btn" aria-label="Close" on:click=move |_| on_close.run(())>"×"</button>
                        </div>
                        <div class="modal-content">{detail_body(recipe)}</div>
                    </div>
                </div>
            }
        })
    }
}

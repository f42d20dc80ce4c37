//! Recipe Card Component
//!
//! Summary card: image, title, cost, timing and macro strip.

use leptos::prelude::*;

use crate::models::Recipe;

#[component]
fn MacroBox(label: &'static str, value: u32, unit: &'static str, tone: &'static str) -> impl IntoView {
    view! {
        <div class="macro-box">
            <span class="macro-label">{label}</span>
            <span class=format!("macro-value {}", tone)>{format!("{}{}", value, unit)}</span>
        </div>
    }
}

#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let macros = recipe.macros.clone();

    view! {
        <div class="recipe-card">
            <img class="recipe-card-image" src=recipe.image.clone() alt=recipe.title.clone() draggable="false" />
            <div class="recipe-card-content">
                <div class="recipe-card-header">
                    <h3 class="recipe-card-title">{recipe.title.clone()}</h3>
                    <span class="cost-chip">{recipe.cost_label()}</span>
                </div>

                <p class="recipe-card-description">{recipe.description.clone()}</p>

                <div class="recipe-card-meta">
                    <span class="meta-item">"⏱ "{format!("{} prep", recipe.prep_time)}</span>
                    <span class="meta-item">"🍽 "{format!("{} servings", recipe.servings)}</span>
                </div>

                <div class="macro-strip">
                    <MacroBox label="Cals" value=macros.calories unit="" tone="calories" />
                    <MacroBox label="Protein" value=macros.protein unit="g" tone="protein" />
                    <MacroBox label="Carbs" value=macros.carbs unit="g" tone="carbs" />
                    <MacroBox label="Fat" value=macros.fat unit="g" tone="fat" />
                </div>
            </div>
        </div>
    }
}

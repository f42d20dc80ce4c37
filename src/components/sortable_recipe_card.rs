//! Sortable Recipe Card Component
//!
//! Wraps a recipe card with drag-and-drop handlers and a keyboard drag handle.
//! Pressing anywhere on the card can start a drag; a press that never crosses
//! the activation distance stays a click and opens the detail view.

use leptos::prelude::*;

use leptos_dragdrop::{make_on_handle_keydown, make_on_mousedown, DndSignals};

use crate::components::RecipeCard;
use crate::models::Recipe;

#[component]
pub fn SortableRecipeCard(
    recipe: Recipe,
    /// Called with the recipe when the card is clicked (not dragged)
    on_activate: Callback<Recipe>,
) -> impl IntoView {
    let dnd = expect_context::<DndSignals>();

    let id = recipe.id.clone();
    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let on_keydown = make_on_handle_keydown(dnd, id.clone());

    // Visual state
    let wrapper_class = {
        let id = id.clone();
        move || {
            let dragging = dnd.dragging_id_read.get();
            let over = dnd.over_id_read.get();
            let mut c = String::from("sortable-card");
            if dragging.as_deref() == Some(id.as_str()) {
                c.push_str(" dragging");
            } else if dragging.is_some() && over.as_deref() == Some(id.as_str()) {
                c.push_str(" drop-target");
            }
            c
        }
    };

    let handle_label = format!("Reorder {}", recipe.title);
    let clicked = recipe.clone();
    let on_click = move |_: leptos::ev::MouseEvent| {
        if !dnd.suppress_click() {
            on_activate.run(clicked.clone());
        }
    };

    view! {
        <div
            class=wrapper_class
            data-sortable-id=id
            on:mousedown=on_mousedown
        >
            <span
                class="drag-handle"
                role="button"
                tabindex="0"
                title="Drag to reorder"
                aria-label=handle_label
                on:keydown=on_keydown
            >
                "⠿"
            </span>
            <div class="card-body" on:click=on_click>
                <RecipeCard recipe=recipe />
            </div>
        </div>
    }
}

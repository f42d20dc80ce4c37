//! View Toggle Component
//!
//! Switches between the flat grid and the tabbed layout.

use leptos::prelude::*;

use leptos_dragdrop::{DndSignals, GestureInput};
use recipe_order::ViewMode;

use crate::context::CatalogContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ViewToggle() -> impl IntoView {
    let store = use_app_store();
    let ctx = expect_context::<CatalogContext>();
    let dnd = expect_context::<DndSignals>();

    let switch_to = move |mode: ViewMode| {
        if store.view_mode().get_untracked() == mode {
            return;
        }
        dnd.apply(GestureInput::Cancel);
        store.view_mode().set(mode);
        ctx.save_view_mode(mode);
    };

    let button_class = move |mode: ViewMode| {
        if store.view_mode().get() == mode { "toggle-btn active" } else { "toggle-btn" }
    };

    view! {
        <div class="view-toggle">
            <button class=move || button_class(ViewMode::Grid) on:click=move |_| switch_to(ViewMode::Grid)>
                "All recipes"
            </button>
            <button class=move || button_class(ViewMode::Tabs) on:click=move |_| switch_to(ViewMode::Tabs)>
                "By meal"
            </button>
        </div>
    }
}

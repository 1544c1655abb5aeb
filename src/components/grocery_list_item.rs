//! Grocery List Item Component
//!
//! A single row. Owns its done/hover state; nothing else reads or writes it.
//! Binds `mouseenter`/`mouseleave` rather than `mouseover`/`mouseout`: they
//! don't bubble, so moving across child nodes never re-fires them.

use leptos::prelude::*;

use crate::models::{ItemEvent, ItemState};

/// A single grocery row
///
/// `index` is the row's position in the list and identifies it in the DOM
/// (`data-index`), so rows with the same label stay distinct.
#[component]
pub fn GroceryListItem(index: usize, #[prop(into)] label: String) -> impl IntoView {
    let (state, set_state) = signal(ItemState::default());

    let dispatch = move |event: ItemEvent| set_state.update(|s| *s = s.apply(event));

    view! {
        <li
            class="grocery-item"
            data-index=index.to_string()
            style=move || state.get().style().to_css()
            data-done=move || state.get().done.to_string()
            on:click=move |_| dispatch(ItemEvent::Click)
            on:mouseenter=move |_| dispatch(ItemEvent::PointerEnter)
            on:mouseleave=move |_| dispatch(ItemEvent::PointerLeave)
        >
            {label}
        </li>
    }
}

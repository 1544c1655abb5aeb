//! Grocery List Component
//!
//! Stateless container: one `GroceryListItem` per label, in order.

use leptos::prelude::*;

use crate::components::GroceryListItem;
use crate::list::rows;

#[component]
pub fn GroceryList(labels: Vec<String>) -> impl IntoView {
    view! {
        <ul class="grocery-list">
            {rows(&labels).into_iter().map(|row| {
                view! { <GroceryListItem index={row.index} label={row.label} /> }
            }).collect_view()}
        </ul>
    }
}

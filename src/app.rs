//! Grocery List App
//!
//! Page wrapper: title, heading and the list.

use leptos::prelude::*;

use crate::components::GroceryList;
use crate::config::ListConfig;

#[component]
pub fn App(config: ListConfig) -> impl IntoView {
    let ListConfig { title, heading, labels, .. } = config;

    view! {
        <div class="grocery-app">
            <h1>{title}</h1>
            <h2>{heading}</h2>
            <GroceryList labels=labels />
        </div>
    }
}

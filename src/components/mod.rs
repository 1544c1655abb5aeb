//! UI Components
//!
//! Leptos components for the grocery list.

mod grocery_list;
mod grocery_list_item;

pub use grocery_list::GroceryList;
pub use grocery_list_item::GroceryListItem;

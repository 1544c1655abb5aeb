//! Grocery List Frontend Entry Point

fn main() {
    grocery_list_ui::run();
}

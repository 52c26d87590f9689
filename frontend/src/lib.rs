#![recursion_limit = "256"]

//! WASM entry point of the storefront.
//!
//! Hydrates the server-rendered page so the slider, menus and theme toggle
//! become interactive.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Installs browser logging and the panic hook, then hydrates
/// [`app::component`] over the server-rendered body.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(component);
}

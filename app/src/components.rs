//! Storefront UI components.
//!
//! Each sub-module exposes one `component` function; shared view-state logic
//! lives in the crate-level modules so it can be tested without a DOM.

pub mod error_template;
pub mod header;
pub mod icons;
pub mod image_slider;
pub mod loader;
pub mod product_card;
pub mod user_data;

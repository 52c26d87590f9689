//! Inline SVG icons from `icondata`.

use icondata::Icon;
use leptos::{prelude::*, svg::svg};

/// Renders `icon` as an inline SVG sized and coloured by `class`. Icons are
/// decorative; the surrounding control carries the accessible label.
pub fn component(icon: Icon, class: &'static str) -> impl IntoView {
    svg()
        .attr("viewBox", icon.view_box)
        .attr("fill", "currentColor")
        .attr("stroke", icon.stroke)
        .attr("aria-hidden", "true")
        .class(class)
        .inner_html(icon.data)
}

//! Landing page: a gallery of the storefront components over demo data.

use core::time::Duration;

use leptos::prelude::*;
use leptos_meta::{Title, TitleProps};

use crate::{
    components::{
        image_slider,
        loader::{self, LoaderColor, LoaderOptions, LoaderVariant},
        product_card,
    },
    product::ProductView,
    slider::SliderOptions,
};

const SLIDE_INTERVAL: Duration = Duration::from_millis(4000);

fn slides() -> Vec<String> {
    (1..=4).map(|i| format!("/images/slide-{i}.svg")).collect()
}

/// Demo catalogue covering the card's badge and stock states.
pub fn demo_products() -> Vec<ProductView> {
    vec![
        ProductView {
            product_id: "LMP-001".to_owned(),
            name: "Arc Floor Lamp".to_owned(),
            price: 129.0,
            labeled_price: Some(169.0),
            images: vec!["/images/lamp.svg".to_owned(), "/images/lamp-alt.svg".to_owned()],
            ratings: Some(vec![5.0, 4.0, 5.0]),
            stock: 12,
            is_new: true,
            category: Some("Lighting".to_owned()),
            review_count: Some(48),
            brand: Some("Lumen".to_owned()),
            shipping: Some("Free shipping".to_owned()),
            ..Default::default()
        },
        ProductView {
            product_id: "CHR-014".to_owned(),
            name: "Walnut Lounge Chair".to_owned(),
            price: 1249.5,
            images: vec!["/images/chair.svg".to_owned()],
            ratings: Some(vec![4.0, 5.0, 3.0]),
            stock: 3,
            is_featured: true,
            category: Some("Furniture".to_owned()),
            review_count: Some(9),
            brand: Some("Oakline".to_owned()),
            ..Default::default()
        },
        ProductView {
            product_id: "VAS-203".to_owned(),
            name: "Stoneware Vase".to_owned(),
            price: 39.0,
            labeled_price: Some(39.0),
            images: vec!["/images/vase.svg".to_owned()],
            stock: 0,
            ..Default::default()
        },
    ]
}

/// Loader variants shown side by side.
pub fn demo_loaders() -> Vec<LoaderOptions> {
    vec![
        LoaderOptions::default(),
        LoaderOptions::default()
            .variant(LoaderVariant::Dots)
            .color(LoaderColor::Secondary)
            .text(None::<String>),
        LoaderOptions::default()
            .variant(LoaderVariant::Ring)
            .color(LoaderColor::Accent)
            .text(Some("Syncing cart")),
        LoaderOptions::default()
            .variant(LoaderVariant::Progress)
            .color(LoaderColor::Success)
            .text(Some("Uploading")),
        LoaderOptions::default()
            .variant(LoaderVariant::Pulse)
            .color(LoaderColor::Warning)
            .text(None::<String>),
        LoaderOptions::default().variant(LoaderVariant::Wave),
    ]
}

pub fn component() -> impl IntoView {
    let products = demo_products()
        .into_iter()
        .map(|product| product_card::component(product, true))
        .collect_view();
    let loaders = demo_loaders()
        .into_iter()
        .map(|options| {
            view! { <div class="flex justify-center items-center p-6 h-48 bg-white rounded-2xl shadow dark:bg-gray-800">{loader::component(options)}</div> }
        })
        .collect_view();

    view! {
        {Title(TitleProps::builder().text("Storefront").build())}
        <section class="flex flex-col gap-6">
            <h1 class="text-3xl font-bold text-gray-800 dark:text-white">"New this season"</h1>
            {image_slider::component(slides(), Signal::stored(SliderOptions::autoplay(SLIDE_INTERVAL)))}
        </section>
        <section class="flex flex-col gap-6">
            <h2 class="text-2xl font-bold text-gray-800 dark:text-white">"Featured products"</h2>
            <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3">{products}</div>
        </section>
        <section class="flex flex-col gap-6">
            <h2 class="text-2xl font-bold text-gray-800 dark:text-white">"Loading states"</h2>
            <div class="grid grid-cols-2 gap-4 md:grid-cols-3">{loaders}</div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_products_cover_card_states() {
        let products = demo_products();
        assert!(products.iter().any(ProductView::has_discount));
        assert!(products.iter().any(|p| !p.in_stock()));
        assert!(products.iter().any(|p| p.hover_image().is_some()));
        assert!(products.iter().any(|p| p.ratings.is_none()));
    }

    #[test]
    fn demo_loaders_cover_every_variant() {
        let loaders = demo_loaders();
        for variant in [
            LoaderVariant::Spinner,
            LoaderVariant::Pulse,
            LoaderVariant::Dots,
            LoaderVariant::Ring,
            LoaderVariant::Progress,
            LoaderVariant::Wave,
        ] {
            assert!(loaders.iter().any(|options| options.variant == variant), "{variant:?}");
        }
    }

    #[test]
    fn slides_are_not_empty() {
        assert_eq!(slides().len(), 4);
    }
}

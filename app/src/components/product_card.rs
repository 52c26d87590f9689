//! Product summary card with badges, rating, price, wishlist toggle and a
//! quick-view modal.
//!
//! The wishlist and add-to-cart controls only change local view state.

use icondata::{BsCart4, BsEye, BsFire, BsHeart, BsHeartFill, BsStarFill, BsTag};
use leptos::{ev, prelude::*};
use leptos_router::components::A;

use crate::{
    components::icons,
    product::{MAX_STARS, ProductView},
};

const BADGE: &str = "flex gap-1 items-center py-1 px-3 text-sm font-bold text-white rounded-full shadow-lg";

/// Renders one product. `show_quick_view` enables the hover overlay that
/// opens the quick-view modal.
pub fn component(product: ProductView, show_quick_view: bool) -> impl IntoView {
    let is_hovered = RwSignal::new(false);
    let is_liked = RwSignal::new(false);
    let quick_view_open = RwSignal::new(false);

    let href = product.overview_href();
    let discount = product.discount_percentage();
    let filled_stars = product.filled_stars();
    let name = product.name.clone();
    let primary_image = product.primary_image().unwrap_or_default().to_owned();
    let hover_image = product.hover_image().map(str::to_owned);
    let in_stock = product.in_stock();

    let badges = view! {
        <div class="flex absolute top-3 left-3 z-10 flex-col gap-2">
            {(discount > 0)
                .then(|| {
                    view! {
                        <div class=format!("bg-gradient-to-r from-red-500 to-pink-500 {BADGE}")>
                            {icons::component(BsTag, "size-3.5 text-white")}
                            <span>{format!("-{discount}%")}</span>
                        </div>
                    }
                })}
            {product
                .is_new
                .then(|| {
                    view! {
                        <div class=format!("bg-gradient-to-r from-blue-500 to-cyan-500 {BADGE}")>
                            {icons::component(BsFire, "size-3.5 text-white")}
                            <span>"NEW"</span>
                        </div>
                    }
                })}
            {product
                .is_featured
                .then(|| {
                    view! {
                        <div class=format!("bg-gradient-to-r from-purple-500 to-indigo-500 {BADGE}")>
                            {icons::component(BsStarFill, "size-3.5 text-white")}
                            <span>"FEATURED"</span>
                        </div>
                    }
                })}
        </div>
    };

    let wishlist = view! {
        <button
            on:click=move |event: ev::MouseEvent| {
                event.prevent_default();
                is_liked.update(|liked| *liked = !*liked);
            }
            class="flex absolute top-3 right-3 z-10 justify-center items-center w-10 h-10 rounded-full shadow-lg transition-all duration-200 hover:scale-110 backdrop-blur-sm bg-white/90 dark:bg-gray-800/90"
            aria-label=move || {
                if is_liked.get() { "Remove from wishlist" } else { "Add to wishlist" }
            }
            aria-pressed=move || is_liked.get().to_string()
        >
            {move || {
                if is_liked.get() {
                    icons::component(BsHeartFill, "size-5 text-red-500")
                } else {
                    icons::component(BsHeart, "size-5 text-gray-600 dark:text-gray-300 hover:text-red-500")
                }
            }}
        </button>
    };

    let image_alt = name.clone();
    let alternate_name = name.clone();
    let title = name.clone();
    let modal_title = format!("Quick View: {name}");
    let image = view! {
        <div class="overflow-hidden relative h-64">
            <A href=href.clone()>
                <img
                    src=primary_image
                    alt=image_alt
                    class="object-cover w-full h-full transition-transform duration-500 group-hover:scale-110"
                />
                {move || {
                    hover_image
                        .clone()
                        .filter(|_| is_hovered.get())
                        .map(|src| {
                            view! {
                                <img
                                    src=src
                                    alt=format!("{alternate_name} - alternate view")
                                    class="object-cover absolute top-0 left-0 w-full h-full opacity-100 transition-opacity duration-500"
                                />
                            }
                        })
                }}
                {move || {
                    (show_quick_view && is_hovered.get())
                        .then(|| {
                            view! {
                                <div class="flex absolute inset-0 justify-center items-center transition-opacity duration-300 bg-black/40 backdrop-blur-sm">
                                    <button
                                        on:click=move |event: ev::MouseEvent| {
                                            event.prevent_default();
                                            quick_view_open.set(true);
                                        }
                                        class="flex gap-2 items-center py-3 px-6 font-semibold text-gray-800 bg-white rounded-full shadow-lg transition-transform duration-200 dark:text-white dark:bg-gray-800 hover:scale-105"
                                    >
                                        {icons::component(BsEye, "size-4")}
                                        "Quick View"
                                    </button>
                                </div>
                            }
                        })
                }}
                <div class="absolute bottom-3 left-3">
                    {if in_stock {
                        view! {
                            <span class="py-1 px-3 text-xs font-semibold text-white rounded-full backdrop-blur-sm bg-emerald-500/90">
                                "In Stock"
                            </span>
                        }
                            .into_any()
                    } else {
                        view! {
                            <span class="py-1 px-3 text-xs font-semibold text-white rounded-full backdrop-blur-sm bg-red-500/90">
                                "Out of Stock"
                            </span>
                        }
                            .into_any()
                    }}
                </div>
            </A>
        </div>
    };

    let stars = (1..=MAX_STARS)
        .map(|star| {
            let class = if star <= filled_stars {
                "size-3.5 text-amber-500"
            } else {
                "size-3.5 text-gray-300 dark:text-gray-600"
            };
            icons::component(BsStarFill, class)
        })
        .collect_view();

    let details = view! {
        <div class="p-4">
            <p class="mb-1 text-sm text-gray-500 dark:text-gray-400">{product.category_label().to_owned()}</p>
            <A href=href>
                <h3 class="mb-2 text-lg font-bold text-gray-800 transition-colors dark:text-white hover:text-purple-600 line-clamp-1 dark:hover:text-purple-400">
                    {title}
                </h3>
            </A>
            <div class="flex gap-2 items-center mb-3">
                <div class="flex items-center" aria-label=format!("Rated {} out of {MAX_STARS}", product.average_rating_label())>
                    {stars}
                </div>
                <span class="text-sm text-gray-600 dark:text-gray-400">
                    {format!("({} \u{2022} {} reviews)", product.average_rating_label(), product.review_count())}
                </span>
            </div>
            <div class="flex justify-between items-center mb-4">
                <div class="flex gap-2 items-center">
                    <span class="text-2xl font-bold text-gray-800 dark:text-white">{product.formatted_price()}</span>
                    {product
                        .formatted_labeled_price()
                        .filter(|_| discount > 0)
                        .map(|labeled| view! { <span class="text-lg text-gray-400 line-through">{labeled}</span> })}
                </div>
                <button
                    on:click=|event: ev::MouseEvent| event.prevent_default()
                    class="p-3 text-white bg-gradient-to-r from-purple-600 to-pink-600 rounded-full shadow-md transition-all duration-200 hover:from-purple-700 hover:to-pink-700 hover:scale-110 hover:shadow-lg disabled:opacity-50 disabled:cursor-not-allowed"
                    aria-label="Add to cart"
                    disabled=!in_stock
                >
                    {icons::component(BsCart4, "size-4")}
                </button>
            </div>
            <div class="flex justify-between items-center pt-3 text-sm text-gray-500 border-t border-gray-100 dark:text-gray-400 dark:border-gray-700">
                {product.brand.clone().map(|brand| view! { <span class="font-medium">{brand}</span> })}
                {product
                    .shipping
                    .clone()
                    .map(|shipping| {
                        view! { <span class="font-medium text-emerald-600 dark:text-emerald-400">{shipping}</span> }
                    })}
            </div>
        </div>
    };

    let modal = move || {
        quick_view_open.get().then(|| {
            view! {
                <div
                    class="flex fixed inset-0 z-50 justify-center items-center p-4 bg-black/50 backdrop-blur-sm"
                    role="dialog"
                    aria-modal="true"
                >
                    <div class="overflow-auto relative w-full max-w-2xl bg-white rounded-2xl dark:bg-gray-800 max-h-[90vh]">
                        <div class="p-6">
                            <button
                                on:click=move |_| quick_view_open.set(false)
                                class="absolute top-4 right-4 text-gray-500 dark:text-gray-400 hover:text-gray-700 dark:hover:text-white"
                            >
                                "Close"
                            </button>
                            <h3 class="mb-4 text-xl font-bold">{modal_title.clone()}</h3>
                        </div>
                    </div>
                </div>
            }
        })
    };

    view! {
        <div
            class="overflow-hidden relative w-full max-w-sm bg-white rounded-2xl shadow-lg transition-all duration-300 transform dark:bg-gray-800 hover:shadow-2xl hover:-translate-y-1 group"
            on:mouseenter=move |_| is_hovered.set(true)
            on:mouseleave=move |_| is_hovered.set(false)
        >
            {badges}
            {wishlist}
            {image}
            {details}
            <div class="absolute inset-0 rounded-2xl border-2 border-transparent transition-all duration-300 pointer-events-none group-hover:border-purple-500/30"></div>
        </div>
        {modal}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_signature() {
        let _component: fn(ProductView, bool) -> _ = component;
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn renders_name_in_image_and_title() {
        use leptos_router::{components::Router, location::RequestUrl};

        Owner::new().with(|| {
            provide_context(RequestUrl::new("/"));
            let product = ProductView {
                product_id: "LMP-001".to_owned(),
                name: "Arc Floor Lamp".to_owned(),
                price: 129.0,
                labeled_price: Some(169.0),
                images: vec!["/images/lamp.svg".to_owned()],
                stock: 0,
                ..Default::default()
            };

            let html = view! { <Router>{component(product, true)}</Router> }.to_html();

            assert!(html.contains(r#"alt="Arc Floor Lamp""#), "{html}");
            assert!(html.matches("Arc Floor Lamp").count() >= 2, "{html}");
            assert!(html.contains(r#"href="/overview/LMP-001""#), "{html}");
            assert!(html.contains("-24%"), "{html}");
            assert!(html.contains("Out of Stock"), "{html}");
        });
    }
}

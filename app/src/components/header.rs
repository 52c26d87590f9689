use icondata::{BsCart4, BsList, BsMoon, BsSun, BsX};
use leptos::{ev, prelude::*};
use leptos_router::components::A;

use crate::{
    components::{icons, user_data},
    theme::{ThemeState, use_theme_state},
};

/// Stub until the cart has shared state.
const CART_COUNT: u32 = 3;

struct NavLink {
    href: &'static str,
    label: &'static str,
    mobile_label: &'static str,
}

const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        href: "/",
        label: "Home",
        mobile_label: "Home",
    },
    NavLink {
        href: "/products",
        label: "Products",
        mobile_label: "Products",
    },
    NavLink {
        href: "/contact",
        label: "Contact",
        mobile_label: "Contact Us",
    },
    NavLink {
        href: "/reviews",
        label: "Reviews",
        mobile_label: "Reviews",
    },
];

const MOBILE_LINK: &str = "flex items-center p-3 text-lg font-medium text-gray-700 rounded-lg transition-colors duration-200 dark:text-gray-200 hover:bg-purple-50 group dark:hover:bg-purple-900/30";

fn theme_toggle(theme: ThemeState) -> impl IntoView {
    view! {
        <button
            on:click=move |_| theme.toggle()
            class="p-2 bg-gray-200 rounded-full transition-colors duration-200 dark:bg-gray-700 hover:bg-gray-300 dark:hover:bg-gray-600"
            aria-label="Toggle theme"
        >
            {move || {
                if theme.is_dark() {
                    icons::component(BsSun, "size-5 text-yellow-500")
                } else {
                    icons::component(BsMoon, "size-5 text-gray-700")
                }
            }}
        </button>
    }
}

fn mobile_menu(theme: ThemeState, is_open: RwSignal<bool>) -> impl IntoView {
    let close = move |_: ev::MouseEvent| is_open.set(false);
    let links = NAV_LINKS
        .iter()
        .map(|link| {
            view! {
                <a href=link.href class=MOBILE_LINK on:click=close>
                    <span class="mr-3 w-2 h-2 bg-purple-600 rounded-full opacity-0 transition-opacity dark:bg-purple-400 group-hover:opacity-100"></span>
                    {link.mobile_label}
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="fixed top-0 left-0 w-full h-screen lg:hidden z-[9999]">
            <div class="absolute inset-0 bg-black bg-opacity-50 backdrop-blur-sm" on:click=close></div>
            <div
                class="absolute top-0 left-0 w-4/5 max-w-sm h-full bg-white shadow-2xl transition-transform duration-300 transform dark:bg-gray-900"
                role="dialog"
                aria-modal="true"
                aria-label="Menu"
            >
                <div class="p-6">
                    <div class="flex justify-between items-center mb-8">
                        <h2 class="text-2xl font-bold text-gray-800 dark:text-white">"Menu"</h2>
                        <button
                            on:click=close
                            class="text-gray-600 transition-transform cursor-pointer dark:text-gray-300 hover:scale-110"
                            aria-label="Close menu"
                        >
                            {icons::component(BsX, "size-8")}
                        </button>
                    </div>
                    <nav class="space-y-4">
                        {links}
                        <a href="/cart" class=MOBILE_LINK on:click=close>
                            <span class="mr-3 w-2 h-2 bg-purple-600 rounded-full opacity-0 transition-opacity dark:bg-purple-400 group-hover:opacity-100"></span>
                            "Cart"
                            <span class="py-1 px-2 ml-auto text-xs text-white bg-red-500 rounded-full">{CART_COUNT}</span>
                        </a>
                    </nav>
                    <div class="pt-8 mt-8 border-t border-gray-200 dark:border-gray-700">
                        <div class="flex justify-between items-center mb-6">
                            <span class="text-gray-600 dark:text-gray-400">"Theme"</span>
                            {theme_toggle(theme)}
                        </div>
                        <div class="pt-4 border-t border-gray-200 dark:border-gray-700">{user_data::component()}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}

pub fn component() -> impl IntoView {
    let theme = use_theme_state();
    let is_open = RwSignal::new(false);

    let desktop_links = NAV_LINKS
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.href
                    class="relative text-lg font-medium text-gray-700 transition-colors duration-200 dark:text-gray-200 hover:text-purple-600 group dark:hover:text-purple-400"
                >
                    {link.label}
                    <span class="absolute bottom-0 left-0 w-0 h-0.5 bg-purple-600 transition-all duration-300 dark:bg-purple-400 group-hover:w-full"></span>
                </a>
            }
        })
        .collect_view();

    view! {
        <header class="flex relative items-center w-full bg-gradient-to-r from-gray-100 to-gray-50 shadow-lg transition-colors duration-300 h-[80px] dark:from-gray-900 dark:to-gray-800">
            <div class="ml-4 lg:ml-8">
                <A href="/">
                    <span class="text-2xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-purple-600 to-pink-600 dark:from-purple-400 dark:to-pink-400">
                        "Storefront"
                    </span>
                </A>
            </div>

            <button
                on:click=move |_| is_open.set(true)
                class="mx-4 ml-auto text-3xl transition-transform duration-200 cursor-pointer lg:hidden hover:scale-110 text-accent"
                aria-label="Open menu"
                aria-expanded=move || is_open.get().to_string()
            >
                {icons::component(BsList, "size-8")}
            </button>

            <nav class="hidden flex-1 justify-center items-center h-full lg:flex">
                <div class="flex justify-evenly items-center h-full w-[600px]">{desktop_links}</div>
            </nav>

            <div class="hidden items-center mr-8 space-x-6 lg:flex">
                {theme_toggle(theme)}
                <div class="relative">{user_data::component()}</div>
                <a href="/cart" class="relative" aria-label="Cart">
                    {icons::component(
                        BsCart4,
                        "size-6 text-gray-700 dark:text-gray-200 hover:text-purple-600 dark:hover:text-purple-400 transition-colors duration-200",
                    )}
                    <span class="flex absolute -top-2 -right-2 justify-center items-center w-5 h-5 text-xs text-white bg-red-500 rounded-full">
                        {CART_COUNT}
                    </span>
                </a>
            </div>

            {move || is_open.get().then(|| mobile_menu(theme, is_open))}
        </header>
    }
}

// Storefront application: shell, root component and shared client state.
use crate::components::{error_template, header};
use chrono::{Datelike as _, Utc};
use leptos::{
    html::{body, div, footer, head, html, meta, p},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    SsrMode, StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod components;
pub mod config;
pub mod dismiss;
pub mod fullscreen;
mod home;
pub mod interval;
pub mod product;
pub mod session;
pub mod slider;
pub mod storage;
pub mod theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/storefront.css")
                    .build(),
            ),
            Title(TitleProps::builder().text("Storefront").build()),
        )),
        body()
            .class("bg-gray-50 transition-colors duration-300 dark:bg-gray-900")
            .child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

/// Root component. Shared state is provided here, before any component that
/// reads it is created.
#[must_use]
pub fn component() -> impl IntoView {
    storage::provide_client_state();
    config::provide_config();
    theme::provide_theme_state();
    dismiss::provide_dismiss_registry();

    view! {
        <Router>
            <div class="flex flex-col min-h-screen font-poppins">
                {header::component}
                <main class="container flex flex-col flex-1 gap-12 py-10 px-4 mx-auto max-w-6xl">
                    <FlatRoutes fallback=|| {
                        let mut outside_errors = Errors::default();
                        outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                        error_template::component(Some(outside_errors), None)
                    }>
                        <Route path=StaticSegment("") view=home::component ssr=SsrMode::InOrder/>
                    </FlatRoutes>
                </main>
                {footer_component()}
            </div>
        </Router>
    }
}

fn footer_component() -> impl IntoView {
    footer()
        .class("py-6 text-center border-t border-gray-200 dark:border-gray-800")
        .child(
            div().class("flex flex-col gap-1 justify-center items-center").child(
                p().class("text-sm text-gray-500 dark:text-gray-400")
                    .child(format!("Storefront \u{a9} {}", Utc::now().year())),
            ),
        )
}

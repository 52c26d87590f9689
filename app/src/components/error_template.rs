//! Error page rendered by the router fallback and by error boundaries.
//!
//! On the server the first [`AppError`] also sets the HTTP status of the
//! response.

use http::status::StatusCode;
use icondata::BsArrowLeft;
use leptos::{
    html::{a, div, h1},
    prelude::*,
};
use thiserror::Error;

use crate::components::icons;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// The [`AppError`]s among `errors`, in insertion order.
pub fn app_errors(errors: Errors) -> Vec<AppError> {
    errors
        .into_iter()
        .filter_map(|(_key, error)| error.downcast_ref::<AppError>().cloned())
        .collect()
}

/// Renders the errors passed from outside the router, or those collected by
/// an error boundary when `outside_errors` is `None`.
pub fn component(
    outside_errors: Option<Errors>,
    errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = outside_errors
        .or_else(|| errors.map(|errors| errors.get_untracked()))
        .map(app_errors)
        .unwrap_or_default();

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(first.status_code());
        }
    }

    let heading = if errors.len() > 1 { "Errors" } else { "Error" };

    div()
        .class("grid place-content-center px-4 h-full antialiased min-h-[50vh]")
        .child((
            h1().class("mb-6 text-2xl font-bold text-center text-gray-800 dark:text-white")
                .child(heading),
            errors
                .into_iter()
                .map(|error| {
                    div().class("flex flex-col gap-1 justify-center items-center").child((
                        h1().class("text-xl tracking-widest text-gray-400 uppercase")
                            .child(format!("{}| {error}", error.status_code().as_u16())),
                        a().href("/")
                            .class("flex gap-1 justify-center items-center mt-6 text-center text-gray-700 duration-200 dark:text-gray-200 hover:text-purple-600")
                            .child((icons::component(BsArrowLeft, "size-4"), "Go back home")),
                    ))
                })
                .collect_view(),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound.to_string(), "Not Found");
    }

    #[test]
    fn collects_only_app_errors() {
        let mut errors = Errors::default();
        errors.insert_with_default_key(AppError::NotFound);
        assert_eq!(app_errors(errors), vec![AppError::NotFound]);
        assert!(app_errors(Errors::default()).is_empty());
    }
}

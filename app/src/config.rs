//! Client configuration: where the account backend lives.

use leptos::prelude::*;

pub const CURRENT_USER_PATH: &str = "/api/user/current";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
/// Destination after logout.
pub const HOME_ROUTE: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StorefrontConfig {
    backend_url: String,
}

impl StorefrontConfig {
    /// An empty base URL targets the origin that served the page.
    #[must_use]
    pub fn new(backend_url: impl Into<String>) -> Self {
        let backend_url = backend_url.into();
        Self {
            backend_url: backend_url.trim().trim_end_matches('/').to_owned(),
        }
    }

    /// Reads `STOREFRONT_BACKEND_URL` at compile time, so the WASM bundle and
    /// the server agree on it without a runtime lookup.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("STOREFRONT_BACKEND_URL").unwrap_or_default())
    }

    #[must_use]
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.backend_url)
    }
}

pub fn provide_config() -> StorefrontConfig {
    let config = StorefrontConfig::from_build_env();
    provide_context(config.clone());
    config
}

pub fn use_config() -> StorefrontConfig {
    use_context::<StorefrontConfig>().unwrap_or_else(StorefrontConfig::from_build_env)
}

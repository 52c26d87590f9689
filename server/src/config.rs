//! Server settings read from the environment (after `.env` is loaded).

use axum::http::Uri;
use thiserror::Error;

pub const BACKEND_URL_VAR: &str = "STOREFRONT_BACKEND_URL";
pub const SITE_ROOT_VAR: &str = "STOREFRONT_SITE_ROOT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{BACKEND_URL_VAR} must be an absolute http(s) URL, got {0:?}")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// `scheme://authority` of the account backend; `None` when it is served
    /// from the same origin.
    pub backend_origin: Option<String>,
    /// Overrides the site root from the Leptos configuration.
    pub site_root: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key| lookup(key).filter(|value| !value.trim().is_empty());
        let backend_origin = non_empty(BACKEND_URL_VAR)
            .map(|value| parse_origin(value.trim()))
            .transpose()?;
        Ok(Self {
            backend_origin,
            site_root: non_empty(SITE_ROOT_VAR),
        })
    }

    /// Sources for the CSP `connect-src` directive.
    pub fn connect_src(&self) -> String {
        match &self.backend_origin {
            Some(origin) => format!("'self' {origin}"),
            None => "'self'".to_owned(),
        }
    }
}

fn parse_origin(value: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::InvalidBackendUrl(value.to_owned());
    let uri: Uri = value.parse().map_err(|_| invalid())?;
    let scheme = uri.scheme_str().filter(|scheme| matches!(*scheme, "http" | "https"));
    match (scheme, uri.authority()) {
        (Some(scheme), Some(authority)) => Ok(format!("{scheme}://{authority}")),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_same_origin() {
        let config = config(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.connect_src(), "'self'");
    }

    #[test]
    fn backend_origin_drops_path() {
        let config = config(&[(BACKEND_URL_VAR, "https://api.example.com:8443/v1/")]).unwrap();
        assert_eq!(config.backend_origin.as_deref(), Some("https://api.example.com:8443"));
        assert_eq!(config.connect_src(), "'self' https://api.example.com:8443");
    }

    #[test]
    fn blank_values_are_unset() {
        let config = config(&[(BACKEND_URL_VAR, "  "), (SITE_ROOT_VAR, "")]).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn rejects_relative_or_foreign_urls() {
        assert_matches!(
            config(&[(BACKEND_URL_VAR, "/api")]),
            Err(ConfigError::InvalidBackendUrl(value)) if value == "/api"
        );
        assert_matches!(
            config(&[(BACKEND_URL_VAR, "ftp://files.example.com")]),
            Err(ConfigError::InvalidBackendUrl(_))
        );
    }

    #[test]
    fn site_root_override() {
        let config = config(&[(SITE_ROOT_VAR, "/srv/storefront")]).unwrap();
        assert_eq!(config.site_root.as_deref(), Some("/srv/storefront"));
    }
}

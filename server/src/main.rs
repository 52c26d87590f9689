#![recursion_limit = "256"]

mod config;
mod headers;
mod redirect;

use std::sync::Arc;

use app::{component, shell};
use axum::{Router, http::StatusCode, response::Json, routing::get};
use config::ServerConfig;
use dotenvy::dotenv;
use headers::{SecurityHeaders, provide_request_nonce, security_headers};
use leptos::logging;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use redirect::redirect_www;
use serde_json::json;

use tower_http::compression::predicate::{NotForContentType, SizeAbove};
use tower_http::compression::{CompressionLayer, Predicate as _};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

async fn health_handler() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "storefront",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

const fn tracing_level() -> tracing::Level {
    if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level())
        .init();

    let env_result = dotenv();
    if env_result.is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    let server_config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            logging::error!("Invalid server configuration: {}", err);
            return;
        }
    };

    let Ok(conf) = get_configuration(Some("Cargo.toml")) else {
        logging::error!("Failed to get configuration");
        return;
    };

    let mut leptos_options = conf.leptos_options;
    if let Some(site_root) = &server_config.site_root {
        leptos_options.site_root = Arc::from(site_root.as_str());
    }
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(component);

    let pkg_dir = std::path::Path::new(&*leptos_options.site_root)
        .join(&*leptos_options.site_pkg_dir);
    let policy = SecurityHeaders::new(&server_config.connect_src());

    let app = Router::new()
        .leptos_routes_with_context(&leptos_options, routes, provide_request_nonce, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .route("/health", get(health_handler))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback(leptos_axum::file_and_error_handler_with_context::<LeptosOptions, _>(
            provide_request_nonce,
            shell,
        ))
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(redirect_www))
                .layer(axum::middleware::from_fn_with_state(policy, security_headers)),
        )
        .layer(CompressionLayer::new().compress_when(
            NotForContentType::new("image/svg+xml").and(SizeAbove::new(1024)),
        ))
        .with_state(leptos_options);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    match axum::serve(listener, app.into_make_service()).await {
        Ok(()) => {
            logging::log!("Server shutdown gracefully");
        }
        Err(err) => {
            logging::error!("Failed to serve app: {}", err);
        }
    }
}

pub(crate) mod api;
pub(crate) mod error;

use anyhow::Result;
use axum::{routing::get, Router};
use easy_privacy_app::{shell, App};
use easy_privacy_types::paths;
use leptos::{config::get_configuration, prelude::*};
use leptos_axum::{file_and_error_handler, generate_route_list, LeptosRoutes};
use tokio::net::TcpListener;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Leptos pages, the static bundle produced by cargo-leptos and the Markdown export.
pub(crate) fn router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    tracing::debug!("registering {} leptos routes", routes.len());

    Router::new()
        .route(paths::MARKDOWN_EXPORT, get(api::policy_markdown))
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(file_and_error_handler(shell))
        .with_state(leptos_options)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

pub(crate) async fn start_web() -> Result<()> {
    // Cargo.toml metadata, overridable with LEPTOS_SITE_ADDR and friends
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let app = router(leptos_options);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {addr}");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

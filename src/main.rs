#![recursion_limit = "4096"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), fluent_landing::core::error::ServerError> {
    use axum::Router;
    use axum::http::{HeaderValue, header};
    use fluent_landing::app::*;
    use fluent_landing::core::config::Config;
    use fluent_landing::core::error::ServerError;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower::ServiceBuilder;
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use tower_http::set_header::SetResponseHeaderLayer;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::EnvFilter;

    async fn healthz() -> &'static str {
        "ok"
    }

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Load server config from environment variables
    let config = Config::from_env()?;

    // RUST_LOG takes precedence over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        compression = config.compression,
        asset_cache_max_age = config.asset_cache_max_age,
        "Config loaded"
    );

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf =
        get_configuration(None).map_err(|e| ServerError::LeptosOptions(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let cache_control = match config.asset_cache_control() {
        Some(value) => Some(
            HeaderValue::from_str(&value)
                .map_err(|_| ServerError::InvalidHeader {
                    name: "cache-control",
                    value,
                })?,
        ),
        None => None,
    };

    // Serve pre-compressed .br/.gz bundles from /pkg with a cache header
    let pkg_service = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            cache_control,
        ))
        .service(
            ServeDir::new(format!("{}/pkg", leptos_options.site_root))
                .precompressed_br()
                .precompressed_gzip(),
        );

    // Build the Leptos router
    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        // Public assets (logo, screenshot, demo video, icons) and 404s
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let mut app = Router::new()
        .route("/healthz", axum::routing::get(healthz))
        .merge(leptos_router)
        .layer(TraceLayer::new_for_http());

    if config.compression {
        // Brotli first, gzip as fallback; already compressed formats are skipped
        app = app.layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );
    }

    tracing::info!("listening on http://{}", &addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}

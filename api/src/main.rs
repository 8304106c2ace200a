//! ShelfScan API Server
//!
//! Resolves scanned barcodes and product photos into displayable product
//! records by walking an ordered cascade of external product databases.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use reqwest::Client;
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as CorsAny, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    build_http_client, BarcodeLookupClient, GoogleSearchClient, HttpImageValidator,
    NoopImageSearch, NoopVisionModel, OpenAiVisionClient, OpenFactsClient, UpcItemDbClient,
};
use app::ProductService;
use config::Config;
use domain::ports::{ImageSearch, ProductLookup, VisionModel};
use error::ErrorResponse;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<ProductService>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    providers: Vec<&'static str>,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        providers: state.product_service.provider_names(),
    })
}

/// Turn a handler panic into a 500 with the panic message
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unexpected error".to_string()
    };
    tracing::error!("Handler panicked: {}", message);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message,
            details: None,
        }),
    )
        .into_response()
}

/// Build the router with all routes and middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Product lookup (root path kept for clients posting to the bare function URL)
        .route("/", post(handlers::lookup).options(handlers::preflight))
        .route("/lookup", post(handlers::lookup).options(handlers::preflight))
        // Middleware (the panic layer sits inside CORS so 500s keep CORS headers)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            CorsLayer::new()
                .allow_origin(CorsAny)
                .allow_methods(CorsAny)
                .allow_headers(CorsAny),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wire the provider cascade from configuration.
///
/// Cascade order: UPCitemdb, Open Food Facts, Open Products Facts, Google
/// keyword search, Barcode Lookup. Keyed providers are left out when their
/// keys are missing.
fn build_product_service(config: &Config, http: Client) -> ProductService {
    let mut providers: Vec<Arc<dyn ProductLookup>> = vec![
        Arc::new(UpcItemDbClient::new(
            http.clone(),
            config.upcitemdb_url.clone(),
        )),
        Arc::new(OpenFactsClient::food(
            http.clone(),
            config.openfoodfacts_url.clone(),
        )),
        Arc::new(OpenFactsClient::products(
            http.clone(),
            config.openproductsfacts_url.clone(),
        )),
    ];

    let image_search: Arc<dyn ImageSearch> = match config.google_credentials() {
        Some((api_key, cx)) => {
            let google = Arc::new(GoogleSearchClient::new(
                http.clone(),
                config.google_search_url.clone(),
                api_key,
                cx,
            ));
            providers.push(google.clone());
            google as Arc<dyn ImageSearch>
        }
        None => {
            tracing::warn!("GOOGLE_API_KEY/GOOGLE_CX not set, keyword and image search disabled");
            Arc::new(NoopImageSearch)
        }
    };

    match &config.barcode_lookup_api_key {
        Some(api_key) => providers.push(Arc::new(BarcodeLookupClient::new(
            http.clone(),
            config.barcode_lookup_url.clone(),
            api_key.clone(),
        ))),
        None => tracing::warn!("BARCODE_LOOKUP_API_KEY not set, paid lookup disabled"),
    }

    let vision: Arc<dyn VisionModel> = match &config.openai_api_key {
        Some(api_key) => Arc::new(OpenAiVisionClient::new(
            http.clone(),
            config.openai_url.clone(),
            api_key.clone(),
            config.openai_model.clone(),
        )),
        None => {
            tracing::warn!("OPENAI_API_KEY not set, AI fallback and photo analysis disabled");
            Arc::new(NoopVisionModel)
        }
    };

    ProductService::new(
        providers,
        image_search,
        Arc::new(HttpImageValidator::new(http)),
        vision,
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,shelfscan_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ShelfScan API...");

    // Load configuration
    let config = Config::from_env();

    let http = build_http_client().context("Failed to build HTTP client")?;
    let product_service = Arc::new(build_product_service(&config, http));
    tracing::info!(providers = ?product_service.provider_names(), "Provider cascade ready");

    let state = AppState { product_service };
    let app = router(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

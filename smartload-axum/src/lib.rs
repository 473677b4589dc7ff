#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod optimize_routes;

use aide::{
    axum::{ApiRouter, routing::get},
    openapi::OpenApi,
};
use axum::{Extension, Json, extract::DefaultBodyLimit};
use schemars::JsonSchema;
use serde::Serialize;
use smartload_core::ports::Application;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

mod openapi;
use openapi::{api_docs, docs_routes};

pub mod config;
use config::AxumConfig;

/// Response for the health check endpoints
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct HealthResponse {
    status: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
    })
}

/// Construct a full API router with the given state and config, along with
/// the OpenAPI specification generated for it
pub fn router<T: ApiApplication>(state: T, config: AxumConfig) -> (axum::Router, Arc<OpenApi>) {
    let mut api = OpenApi::default();
    let body_limit = config.body_limit;

    let router = ApiRouter::new()
        .api_route_with("/healthz", get(health_check), |route| route.tag("health"))
        .api_route_with("/actuator/health", get(health_check), |route| {
            route.tag("health")
        })
        .nest("/api/v1/load-optimizer", optimize_routes::router())
        .nest_api_service("/docs", docs_routes())
        .finish_api_with(&mut api, api_docs);

    let api = Arc::new(api);
    let router = router
        .layer(Extension(api.clone())) // Arc is very important here or you will face massive memory and performance issues
        .layer(Extension(Arc::new(config)))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    (router, api)
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: ApiApplication>(
    config: AxumConfig,
    app: T,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening for requests on {}", listener.local_addr()?);

    let (service, _) = router(app, config);
    axum::serve(listener, service).await
}

/// Axum imposes all sorts of constraints on what can pass for state. This
/// trait, coupled with a blanket implementation, specifies it all upfront and
/// in one place. If a function takes a generic `T: ApiApplication`, then
/// everything one might reasonably want to do should work.
///
/// The optimizer must additionally be `Send + 'static`, as each optimization
/// runs on a blocking worker thread.
pub trait ApiApplication:
    Clone + Send + Sync + 'static + Application<Optimizer: Send + 'static>
{
}

// this is the blanket implementation
impl<T> ApiApplication for T where
    T: Clone + Send + Sync + 'static + Application<Optimizer: Send + 'static>
{
}

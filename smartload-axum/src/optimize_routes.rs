//! REST API endpoint for load optimization.
//!
//! The optimizer itself runs synchronously and can take a while on large
//! partitions, so it is moved onto a blocking worker and raced against the
//! configured timeout. It has no way to be interrupted: a request that times
//! out is answered immediately while the abandoned search runs to completion
//! in the background.

use std::sync::Arc;

use aide::axum::{ApiRouter, routing::post};
use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use smartload_core::{
    models::{ExcludedOrder, OptimizationRequest, OptimizationResponse},
    ports::{Optimization, Optimizer as _},
};
use tracing::{Level, event};

use crate::{ApiApplication, config::AxumConfig};

/// Creates a router with optimization endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new().api_route_with("/optimize", post(optimize::<T>), |route| {
        route.tag("optimizer")
    })
}

/// Select the best load for a truck.
///
/// Orders with unparseable dates, a pickup after their delivery, or that do
/// not fit in the truck on their own are skipped rather than rejected. An
/// empty list of orders is valid and yields an empty selection.
///
/// # Returns
///
/// - `200 OK`: The selected load
/// - `400 Bad Request`: The payload could not be decoded, or the truck id is empty
/// - `413 Payload Too Large`: The body exceeds the configured limit
/// - `422 Unprocessable Entity`: More orders than the configured limit
/// - `503 Service Unavailable`: The optimization exceeded the configured timeout
/// - `500 Internal Server Error`: The optimization failed unexpectedly
async fn optimize<T: ApiApplication>(
    State(app): State<T>,
    Extension(config): Extension<Arc<AxumConfig>>,
    payload: Result<Json<OptimizationRequest>, JsonRejection>,
) -> Result<Json<OptimizationResponse>, (StatusCode, String)> {
    let Json(request) = payload.map_err(|rejection| {
        event!(Level::DEBUG, err = rejection.body_text());
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            (
                StatusCode::PAYLOAD_TOO_LARGE,
                "request body too large".to_string(),
            )
        } else {
            (
                StatusCode::BAD_REQUEST,
                "invalid request payload".to_string(),
            )
        }
    })?;

    if request.truck.id.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "truck id is required".to_string()));
    }

    if request.orders.len() > config.max_orders {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            format!(
                "too many orders: {} submitted, at most {} allowed",
                request.orders.len(),
                config.max_orders
            ),
        ));
    }

    let optimizer = app.optimizer();
    let task = tokio::task::spawn_blocking(move || optimizer.optimize(&request));

    let Optimization { response, excluded } = tokio::time::timeout(config.solve_timeout, task)
        .await
        .map_err(|_| {
            event!(
                Level::WARN,
                timeout = ?config.solve_timeout,
                "optimization timed out"
            );
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "optimization timed out".to_string(),
            )
        })?
        .map_err(|err| {
            event!(Level::ERROR, err = err.to_string());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "optimization failed".to_string(),
            )
        })?;

    for ExcludedOrder { id, reason } in &excluded {
        event!(Level::DEBUG, order = %id, %reason, "excluded order");
    }

    Ok(Json(response))
}

//! Configuration types for the Axum HTTP server.
//!
//! This module provides configuration options for the REST API server,
//! including network binding and the limits placed on each request.

use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, time::Duration};

/// Configuration for the Axum HTTP server.
///
/// # Examples
///
/// ```
/// use smartload_axum::config::AxumConfig;
/// use std::time::Duration;
///
/// // Use default configuration
/// let config = AxumConfig::default();
///
/// // Custom configuration
/// let config = AxumConfig {
///     bind_address: "127.0.0.1:3000".parse().unwrap(),
///     max_orders: 30,
///     solve_timeout: Duration::from_secs(2),
///     ..AxumConfig::default()
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AxumConfig {
    /// The address to bind the server to
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// The largest request body accepted, in bytes
    #[serde(default = "default_body_limit")]
    pub body_limit: usize,

    /// The most orders a single request may carry. The search is exponential
    /// in the size of a partition, so this is what keeps a request bounded.
    #[serde(default = "default_max_orders")]
    pub max_orders: usize,

    /// How long a single optimization may run before the request is abandoned
    #[serde(default = "default_solve_timeout", with = "humantime_serde")]
    pub solve_timeout: Duration,
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_body_limit() -> usize {
    1 << 20
}

fn default_max_orders() -> usize {
    22
}

fn default_solve_timeout() -> Duration {
    Duration::from_secs(10)
}

impl Default for AxumConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            body_limit: default_body_limit(),
            max_orders: default_max_orders(),
            solve_timeout: default_solve_timeout(),
        }
    }
}

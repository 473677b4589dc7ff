#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

/// Core domain models for load optimization.
///
/// These are plain data structures: the truck, the candidate orders, the
/// request and response of an optimization call, and the reasons an order
/// can be excluded before the search runs.
pub mod models;

/// Interface traits for load optimization.
///
/// These are the "ports" between the optimization logic and its adapters
/// (an HTTP server, a command-line tool), so either side can be swapped
/// without touching the other.
pub mod ports;

//! The concrete application served over HTTP.

use smartload_core::ports::Application;
use smartload_solver::BranchAndBound;

/// The server's application state. The optimizer is stateless, so there is
/// nothing to hold; each request gets its own optimizer handle.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerApp;

impl Application for ServerApp {
    type Optimizer = BranchAndBound;

    fn optimizer(&self) -> Self::Optimizer {
        BranchAndBound::new()
    }
}

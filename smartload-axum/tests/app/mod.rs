use smartload_core::{
    models::OptimizationRequest,
    ports::{Application, Optimization, Optimizer},
};
use smartload_solver::BranchAndBound;
use std::time::Duration;

/// The application as deployed: the exact optimizer.
#[derive(Clone)]
pub struct TestApp;

impl Application for TestApp {
    type Optimizer = BranchAndBound;

    fn optimizer(&self) -> Self::Optimizer {
        BranchAndBound::new()
    }
}

/// An application whose optimizer takes a fixed, long time to answer.
#[derive(Clone)]
pub struct SlowApp(pub Duration);

#[derive(Clone, Copy)]
pub struct Sleeper(Duration);

impl Optimizer for Sleeper {
    fn optimize(&self, request: &OptimizationRequest) -> Optimization {
        std::thread::sleep(self.0);
        BranchAndBound.optimize(request)
    }
}

impl Application for SlowApp {
    type Optimizer = Sleeper;

    fn optimizer(&self) -> Self::Optimizer {
        Sleeper(self.0)
    }
}

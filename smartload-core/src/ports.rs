mod application;
mod optimizer;

pub use application::Application;
pub use optimizer::{Optimization, Optimizer};

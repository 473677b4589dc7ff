use clap::{Parser, Subcommand};
use smartload_core::{
    models::{ExcludedOrder, OptimizationRequest},
    ports::{Optimization, Optimizer as _},
};
use smartload_solver::{BranchAndBound, filter};

mod io;
pub use io::*;

// The top-level arguments -- presently just which subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Select the best load and report it
    Solve {
        #[command(flatten)]
        io: IOArgs,

        /// Also report the orders that were excluded before the search, and why
        #[arg(short, long)]
        explain: bool,
    },

    /// Report only the orders that would be excluded before the search
    Screen {
        #[command(flatten)]
        io: IOArgs,
    },
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Solve { io, explain } => {
                let optimization = solve(&io.request()?);
                if explain {
                    io.report(&optimization)?;
                } else {
                    io.report(&optimization.response)?;
                }
            }
            Commands::Screen { io } => {
                io.report(&screen(&io.request()?))?;
            }
        }

        Ok(())
    }
}

/// Optimize `request` with the exact optimizer.
pub fn solve(request: &OptimizationRequest) -> Optimization {
    BranchAndBound::new().optimize(request)
}

/// The orders `request` would lose to screening, in input order.
pub fn screen(request: &OptimizationRequest) -> Vec<ExcludedOrder> {
    filter::screen(&request.orders, &request.truck).excluded
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("The request does not name a truck, please provide truck.id")]
    MissingTruckId,
}

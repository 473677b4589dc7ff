use crate::{
    filter::{Screening, screen},
    knapsack::{self, Capacity, Selection},
    partition::partition,
    report,
};
use smartload_core::{
    models::{Order, OptimizationRequest},
    ports::{Optimization, Optimizer},
};
use tracing::{Level, event, span};

/// The exact optimizer.
///
/// Orders are screened, split into (route, hazmat class) partitions, and each
/// partition is solved with an exact branch-and-bound search. The single best
/// partition result wins; a later partition only replaces the incumbent when
/// it pays strictly more.
///
/// The optimizer holds no state and may be shared freely between threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct BranchAndBound;

impl BranchAndBound {
    /// Create a new optimizer
    pub fn new() -> Self {
        Self
    }
}

impl Optimizer for BranchAndBound {
    fn optimize(&self, request: &OptimizationRequest) -> Optimization {
        let truck = &request.truck;
        let span = span!(Level::DEBUG, "optimize", truck = %truck.id);
        let _guard = span.enter();

        let capacity = Capacity::from(truck);
        let Screening { eligible, excluded } = screen(&request.orders, truck);

        let mut best = Selection::default();
        let mut chosen = Vec::<&Order>::new();

        for partition in partition(eligible) {
            let selection = knapsack::solve(&partition.orders, capacity);
            event!(
                Level::DEBUG,
                origin = partition.origin,
                destination = partition.destination,
                hazmat = partition.hazmat,
                orders = partition.orders.len(),
                payout = selection.payout,
                "solved partition"
            );

            if selection.payout > best.payout {
                chosen = selection
                    .pick(&partition.orders)
                    .into_iter()
                    .copied()
                    .collect();
                best = selection;
            }
        }

        event!(
            Level::INFO,
            orders = request.orders.len(),
            excluded = excluded.len(),
            selected = chosen.len(),
            payout = best.payout,
            "optimized load"
        );

        Optimization {
            response: report::assemble(truck, &best, &chosen),
            excluded,
        }
    }
}

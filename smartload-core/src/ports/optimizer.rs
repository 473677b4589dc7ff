use crate::models::{ExcludedOrder, OptimizationRequest, OptimizationResponse};

/// The full result of an optimization call.
///
/// The response is what callers are promised; the exclusions explain which
/// orders never made it into the search, and why.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Optimization {
    /// The chosen load
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub response: OptimizationResponse,
    /// Orders dropped before the search, in input order
    pub excluded: Vec<ExcludedOrder>,
}

/// Interface for load optimizers.
///
/// An optimizer takes one truck and a list of candidate orders and picks the
/// payout-maximizing subset that the truck can legally carry in one run.
///
/// Implementations must be deterministic and must not fail: orders that cannot
/// be considered are reported as exclusions, and an empty or entirely
/// infeasible request yields the empty selection. Implementations hold no
/// per-request state, so a single instance may serve concurrent callers.
pub trait Optimizer {
    /// Select the best load for the request's truck.
    fn optimize(&self, request: &OptimizationRequest) -> Optimization;
}

impl<T: Optimizer + ?Sized> Optimizer for &T {
    fn optimize(&self, request: &OptimizationRequest) -> Optimization {
        (**self).optimize(request)
    }
}

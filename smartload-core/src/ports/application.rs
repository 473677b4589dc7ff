use super::Optimizer;

/// The collection of implementations a hosting application provides.
///
/// The transport is generic over this trait, which keeps it free of any
/// knowledge of how loads are actually optimized.
pub trait Application {
    /// The optimizer serving requests
    type Optimizer: Optimizer;

    /// Get an optimizer instance for a request
    fn optimizer(&self) -> Self::Optimizer;
}

/**
 * Screening of individual orders before any search takes place.
 */
pub mod filter;

/**
 * Splitting of eligible orders into independently solvable partitions.
 */
pub mod partition;

/**
 * The exact two-dimensional 0/1 knapsack search.
 */
pub mod knapsack;

/**
 * Derivation of the response from the winning selection.
 */
pub mod report;

mod optimizer;
pub use optimizer::BranchAndBound;

// We use non-std collections here for their ordering semantics and performance
pub(crate) type Map<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;

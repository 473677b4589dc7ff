/// The chosen load for a truck.
///
/// An empty selection, with every total and utilization at zero, is a valid
/// answer: it is what an empty or entirely infeasible request produces.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationResponse {
    /// Identifier of the truck the load was built for
    pub truck_id: String,
    /// The selected orders, sorted lexicographically
    pub selected_order_ids: Vec<String>,
    /// Summed payout of the selection, in cents
    pub total_payout_cents: u64,
    /// Summed weight of the selection, in pounds
    pub total_weight_lbs: u64,
    /// Summed volume of the selection, in cubic feet
    pub total_volume_cuft: u64,
    /// Share of the weight capacity used, as a percentage with two decimals
    pub utilization_weight_percent: f64,
    /// Share of the volume capacity used, as a percentage with two decimals
    pub utilization_volume_percent: f64,
}

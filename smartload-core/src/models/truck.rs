/// The vehicle a load is being built for.
///
/// Both capacities are hard limits on the summed weight and volume of the
/// selected orders. A capacity of zero admits only weightless (or volumeless)
/// orders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema), schemars(inline))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Truck {
    /// The carrier's identifier for the truck. Required by the transport.
    pub id: String,
    /// Maximum total weight, in pounds
    pub max_weight_lbs: u64,
    /// Maximum total volume, in cubic feet
    pub max_volume_cuft: u64,
}

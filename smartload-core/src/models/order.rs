/// A candidate shipment order.
///
/// Dates are carried as the raw strings supplied by the caller; they are
/// parsed (and possibly rejected) when the order is screened, so that one
/// malformed order never fails a whole request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema), schemars(inline))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Order {
    /// Unique identifier of the order
    pub id: String,
    /// What the shipper pays for the order, in cents
    pub payout_cents: u64,
    /// Weight of the freight, in pounds
    pub weight_lbs: u64,
    /// Volume of the freight, in cubic feet
    pub volume_cuft: u64,
    /// Where the freight is picked up
    pub origin: String,
    /// Where the freight is delivered
    pub destination: String,
    /// Pickup date, formatted `YYYY-MM-DD`
    pub pickup_date: String,
    /// Delivery date, formatted `YYYY-MM-DD`
    pub delivery_date: String,
    /// Whether the freight is hazardous material
    pub is_hazmat: bool,
}

impl Order {
    /// The (origin, destination) pair orders must share to travel together.
    pub fn route(&self) -> (&str, &str) {
        (&self.origin, &self.destination)
    }
}

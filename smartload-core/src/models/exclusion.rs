use thiserror::Error;

/// The reason an order was dropped before the search.
///
/// Checks run in declaration order and the first failure is reported.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Exclusion {
    /// The pickup date is not a `YYYY-MM-DD` calendar date
    #[error("pickup date is not a valid YYYY-MM-DD date")]
    InvalidPickupDate,
    /// The delivery date is not a `YYYY-MM-DD` calendar date
    #[error("delivery date is not a valid YYYY-MM-DD date")]
    InvalidDeliveryDate,
    /// The pickup date falls after the delivery date
    #[error("pickup date is after delivery date")]
    PickupAfterDelivery,
    /// The order alone is heavier than the truck allows
    #[error("order weight exceeds truck capacity")]
    ExceedsWeight,
    /// The order alone is bulkier than the truck allows
    #[error("order volume exceeds truck capacity")]
    ExceedsVolume,
}

/// An order that was excluded, together with why.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExcludedOrder {
    /// Identifier of the excluded order
    pub id: String,
    /// The first check the order failed
    pub reason: Exclusion,
}

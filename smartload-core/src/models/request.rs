use super::{Order, Truck};

/// The input to a single optimization call: one truck and its candidate orders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct OptimizationRequest {
    /// The truck to load
    pub truck: Truck,
    /// The candidate orders. May be empty; `null` reads as empty.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_empty"))]
    #[cfg_attr(feature = "schemars", schemars(with = "Option<Vec<Order>>"))]
    pub orders: Vec<Order>,
}

#[cfg(feature = "serde")]
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Order>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize as _;
    Ok(Option::<Vec<Order>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_zero_values() {
        let request: OptimizationRequest = serde_json::from_str(
            r#"{ "truck": { "id": "t1" }, "orders": [ { "id": "o1", "payout_cents": 5 } ] }"#,
        )
        .unwrap();

        assert_eq!(request.truck.max_weight_lbs, 0);
        assert_eq!(request.orders.len(), 1);
        assert_eq!(request.orders[0].payout_cents, 5);
        assert_eq!(request.orders[0].origin, "");
        assert!(!request.orders[0].is_hazmat);

        let empty: OptimizationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, OptimizationRequest::default());
    }

    #[test]
    fn null_orders_read_as_empty() {
        let request: OptimizationRequest =
            serde_json::from_str(r#"{ "truck": { "id": "t1" }, "orders": null }"#).unwrap();
        assert_eq!(request.truck.id, "t1");
        assert!(request.orders.is_empty());
    }

    #[test]
    fn negative_quantities_are_rejected() {
        let result = serde_json::from_str::<OptimizationRequest>(
            r#"{ "truck": { "id": "t1", "max_weight_lbs": -1 } }"#,
        );
        assert!(result.is_err());

        let result = serde_json::from_str::<OptimizationRequest>(
            r#"{ "truck": { "id": "t1" }, "orders": [ { "id": "o1", "payout_cents": -10 } ] }"#,
        );
        assert!(result.is_err());
    }
}

use crate::knapsack::Selection;
use smartload_core::models::{Order, OptimizationResponse, Truck};

/// Build the response for `truck` from the winning selection and the orders it
/// resolves to.
///
/// Identifiers are sorted so the output does not depend on search order.
pub fn assemble(truck: &Truck, selection: &Selection, orders: &[&Order]) -> OptimizationResponse {
    let mut selected_order_ids = orders
        .iter()
        .map(|order| order.id.clone())
        .collect::<Vec<_>>();
    selected_order_ids.sort_unstable();

    OptimizationResponse {
        truck_id: truck.id.clone(),
        selected_order_ids,
        total_payout_cents: selection.payout,
        total_weight_lbs: selection.weight,
        total_volume_cuft: selection.volume,
        utilization_weight_percent: utilization(selection.weight, truck.max_weight_lbs),
        utilization_volume_percent: utilization(selection.volume, truck.max_volume_cuft),
    }
}

/// `used` as a percentage of `available`, rounded half away from zero to two
/// decimal places. Zero when nothing is available.
pub fn utilization(used: u64, available: u64) -> f64 {
    if available == 0 {
        return 0.0;
    }
    let percent = used as f64 / available as f64 * 100.0;
    (percent * 100.0).round() / 100.0
}

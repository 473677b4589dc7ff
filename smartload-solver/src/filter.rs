use smartload_core::models::{ExcludedOrder, Exclusion, Order, Truck};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// Pickup and delivery dates are plain calendar dates, e.g. `2025-12-05`.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// The outcome of screening a request's orders.
#[derive(Debug, Default)]
pub struct Screening<'a> {
    /// Orders that may take part in the search, in input order
    pub eligible: Vec<&'a Order>,
    /// Orders that may not, with the first check each one failed
    pub excluded: Vec<ExcludedOrder>,
}

/// Screen every order against the truck, keeping those that could be part of
/// some feasible load.
///
/// Screening never fails: an order that cannot be considered is recorded as
/// excluded and the rest carry on. An empty input gives an empty screening.
pub fn screen<'a>(orders: &'a [Order], truck: &Truck) -> Screening<'a> {
    let mut screening = Screening::default();
    for order in orders {
        match check(order, truck) {
            Ok(()) => screening.eligible.push(order),
            Err(reason) => screening.excluded.push(ExcludedOrder {
                id: order.id.clone(),
                reason,
            }),
        }
    }
    screening
}

/// Check a single order against the truck.
///
/// An order is eligible when both of its dates parse, it is picked up no later
/// than it is delivered, and it fits in the empty truck on its own. An order
/// too large to travel alone can never be part of a feasible load.
pub fn check(order: &Order, truck: &Truck) -> Result<(), Exclusion> {
    let pickup = parse_date(&order.pickup_date).ok_or(Exclusion::InvalidPickupDate)?;
    let delivery = parse_date(&order.delivery_date).ok_or(Exclusion::InvalidDeliveryDate)?;

    if pickup > delivery {
        Err(Exclusion::PickupAfterDelivery)
    } else if order.weight_lbs > truck.max_weight_lbs {
        Err(Exclusion::ExceedsWeight)
    } else if order.volume_cuft > truck.max_volume_cuft {
        Err(Exclusion::ExceedsVolume)
    } else {
        Ok(())
    }
}

/// Parse a `YYYY-MM-DD` date. The year must be exactly four digits; `time`
/// would otherwise accept a leading sign.
fn parse_date(value: &str) -> Option<Date> {
    if value.len() != 10 || !value.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Date::parse(value, DATE_FORMAT).ok()
}

use crate::Map;
use smartload_core::models::Order;

/// A set of orders that may legally share one truck run: same origin, same
/// destination, and the same hazardous-material class.
///
/// Partitions are solved independently; nothing from one may be combined with
/// anything from another.
#[derive(Debug, PartialEq, Eq)]
pub struct Partition<'a> {
    /// Shared pickup location
    pub origin: &'a str,
    /// Shared delivery location
    pub destination: &'a str,
    /// Whether every order in the partition is hazardous
    pub hazmat: bool,
    /// The orders, in input order
    pub orders: Vec<&'a Order>,
}

/// Group orders by exact (origin, destination) and split each group by
/// hazardous-material class.
///
/// Partitions come out in a fixed order: routes sorted by origin and then
/// destination, and within a route the hazardous partition before the
/// non-hazardous one. Ties between partitions are broken by this order, so it
/// is what makes repeated runs agree. Empty partitions are omitted.
pub fn partition<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Vec<Partition<'a>> {
    let mut routes = Map::<(&'a str, &'a str), Vec<&'a Order>>::default();
    for order in orders {
        routes.entry(order.route()).or_default().push(order);
    }
    routes.sort_keys();

    let mut partitions = Vec::with_capacity(routes.len() * 2);
    for ((origin, destination), orders) in routes {
        // Hazardous and general freight may never be co-loaded
        let (hazardous, general): (Vec<_>, Vec<_>) =
            orders.into_iter().partition(|order| order.is_hazmat);

        for (hazmat, orders) in [(true, hazardous), (false, general)] {
            if !orders.is_empty() {
                partitions.push(Partition {
                    origin,
                    destination,
                    hazmat,
                    orders,
                });
            }
        }
    }
    partitions
}

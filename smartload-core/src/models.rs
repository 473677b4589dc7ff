mod exclusion;
mod order;
mod request;
mod response;
mod truck;

pub use exclusion::{ExcludedOrder, Exclusion};
pub use order::Order;
pub use request::OptimizationRequest;
pub use response::OptimizationResponse;
pub use truck::Truck;

pub mod endpoints;
pub mod fingerprint;
pub mod licensing;
pub mod router;

pub use crate::domain::model::{ActivationOutcome, Pagination, ProductType};
pub use crate::domain::ports::HardwareProbe;
pub use crate::utils::error::Result;

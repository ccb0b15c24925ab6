pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "hardware")]
pub use adapters::hardware::SystemProbe;
pub use adapters::http::{HttpClient, RequestOptions};
pub use config::ClientConfig;
pub use crate::core::endpoints::Api;
pub use crate::core::licensing::LicenseActivator;
pub use crate::core::router::{Access, Authorizer, RouteTable, RoutingMode, SessionAuthorizer};
pub use domain::model::{ActivationOutcome, Pagination, ProductType};
pub use utils::error::{ClientError, Result};

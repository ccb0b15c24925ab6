//! Endpoint map: one thin function per backend REST operation, grouped by domain.
//!
//! Paths are interpolated verbatim. Nothing is validated before the call; the
//! backend decides what a malformed code or id means.

pub mod activation;
pub mod admin;
pub mod auth;
pub mod hardware;
pub mod payment;
pub mod products;

use crate::adapters::http::{HttpClient, RequestOptions};
use crate::config::ClientConfig;
use crate::domain::model::Pagination;
use crate::utils::error::Result;

pub use activation::ActivationApi;
pub use admin::AdminApi;
pub use auth::AuthApi;
pub use hardware::HardwareApi;
pub use payment::PaymentApi;
pub use products::ProductsApi;

pub const API_PREFIX: &str = "/api/v1";

/// Entry point to the endpoint map.
#[derive(Debug, Clone)]
pub struct Api {
    client: HttpClient,
    options: RequestOptions,
}

impl Api {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
        }
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::new(HttpClient::new(config)?))
    }

    /// Applies `options` to every call made through the returned map.
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    pub fn activation(&self) -> ActivationApi<'_> {
        ActivationApi::new(&self.client, &self.options)
    }

    pub fn hardware(&self) -> HardwareApi<'_> {
        HardwareApi::new(&self.client, &self.options)
    }

    pub fn payment(&self) -> PaymentApi<'_> {
        PaymentApi::new(&self.client, &self.options)
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(&self.client, &self.options)
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.client, &self.options)
    }

    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(&self.client, &self.options)
    }
}

pub(crate) fn paged(path: &str, page: Pagination) -> String {
    format!("{}?skip={}&limit={}", path, page.skip, page.limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_appends_skip_and_limit() {
        assert_eq!(
            paged("/api/v1/admin/payments", Pagination::default()),
            "/api/v1/admin/payments?skip=0&limit=100"
        );
        assert_eq!(paged("/x", Pagination::new(20, 5)), "/x?skip=20&limit=5");
    }
}

use super::{paged, API_PREFIX};
use crate::adapters::http::{HttpClient, RequestOptions};
use crate::domain::model::Pagination;
use crate::utils::error::Result;
use serde_json::Value;

/// 管理後台
pub struct AdminApi<'a> {
    client: &'a HttpClient,
    options: &'a RequestOptions,
}

impl<'a> AdminApi<'a> {
    pub(crate) fn new(client: &'a HttpClient, options: &'a RequestOptions) -> Self {
        Self { client, options }
    }

    pub async fn get_all_codes(&self, page: Pagination) -> Result<Value> {
        let path = paged(&format!("{}/admin/activation-codes", API_PREFIX), page);
        self.client.get(&path, self.options).await
    }

    pub async fn get_all_payments(&self, page: Pagination) -> Result<Value> {
        let path = paged(&format!("{}/admin/payments", API_PREFIX), page);
        self.client.get(&path, self.options).await
    }

    pub async fn get_system_stats(&self) -> Result<Value> {
        self.client
            .get(&format!("{}/admin/stats", API_PREFIX), self.options)
            .await
    }
}

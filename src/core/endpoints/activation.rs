use super::{paged, API_PREFIX};
use crate::adapters::http::{HttpClient, RequestOptions};
use crate::domain::model::{Pagination, UseCodeBody};
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

/// 啟用碼相關
pub struct ActivationApi<'a> {
    client: &'a HttpClient,
    options: &'a RequestOptions,
}

impl<'a> ActivationApi<'a> {
    pub(crate) fn new(client: &'a HttpClient, options: &'a RequestOptions) -> Self {
        Self { client, options }
    }

    /// 產生啟用碼
    pub async fn generate_codes<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        self.client
            .post(&format!("{}/activation/generate", API_PREFIX), data, self.options)
            .await
    }

    /// 驗證啟用碼
    pub async fn verify_code(&self, code: &str, user_id: Option<&str>) -> Result<Value> {
        self.client.get(&verify_path(code, user_id), self.options).await
    }

    /// 使用啟用碼
    pub async fn use_code(&self, code: &str, user_id: Option<&str>) -> Result<Value> {
        self.client
            .post(
                &format!("{}/activation/use/{}", API_PREFIX, code),
                &UseCodeBody { user_id },
                self.options,
            )
            .await
    }

    /// Redeems with device details; `data` carries `code`, `user_id`, `device_info`, `ip_address`.
    pub async fn use_code_with_details<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        self.client
            .post(&format!("{}/activation/use", API_PREFIX), data, self.options)
            .await
    }

    /// 取得產品啟用碼列表
    pub async fn get_codes_by_product(
        &self,
        product_id: impl Display,
        page: Pagination,
    ) -> Result<Value> {
        let path = paged(&format!("{}/activation/product/{}", API_PREFIX, product_id), page);
        self.client.get(&path, self.options).await
    }

    /// 取得啟用碼統計
    pub async fn get_stats(&self, product_id: Option<&str>) -> Result<Value> {
        self.client.get(&stats_path(product_id), self.options).await
    }

    pub async fn get_records(&self, code: &str) -> Result<Value> {
        self.client
            .get(&format!("{}/activation/records/{}", API_PREFIX, code), self.options)
            .await
    }

    /// Product catalogue as configured for activation (includes hardware binding flag).
    pub async fn get_products(&self) -> Result<Value> {
        self.client
            .get(&format!("{}/activation/products", API_PREFIX), self.options)
            .await
    }

    pub async fn get_security_info(&self) -> Result<Value> {
        self.client
            .get(&format!("{}/activation/security-info", API_PREFIX), self.options)
            .await
    }
}

pub(crate) fn verify_path(code: &str, user_id: Option<&str>) -> String {
    format!(
        "{}/activation/verify/{}?user_id={}",
        API_PREFIX,
        code,
        user_id.unwrap_or("")
    )
}

pub(crate) fn stats_path(product_id: Option<&str>) -> String {
    match product_id.filter(|id| !id.is_empty()) {
        Some(id) => format!("{}/activation/stats/{}", API_PREFIX, id),
        None => format!("{}/activation/stats", API_PREFIX),
    }
}

use super::API_PREFIX;
use crate::adapters::http::{HttpClient, RequestOptions};
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

/// 產品相關
pub struct ProductsApi<'a> {
    client: &'a HttpClient,
    options: &'a RequestOptions,
}

impl<'a> ProductsApi<'a> {
    pub(crate) fn new(client: &'a HttpClient, options: &'a RequestOptions) -> Self {
        Self { client, options }
    }

    pub async fn get_products(&self) -> Result<Value> {
        self.client
            .get(&format!("{}/products", API_PREFIX), self.options)
            .await
    }

    pub async fn create_product<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        self.client
            .post(&format!("{}/products", API_PREFIX), data, self.options)
            .await
    }

    pub async fn update_product<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        data: &B,
    ) -> Result<Value> {
        self.client
            .put(&format!("{}/products/{}", API_PREFIX, id), data, self.options)
            .await
    }

    pub async fn delete_product(&self, id: impl Display) -> Result<Value> {
        self.client
            .delete(&format!("{}/products/{}", API_PREFIX, id), self.options)
            .await
    }
}

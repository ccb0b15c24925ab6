use super::API_PREFIX;
use crate::adapters::http::{HttpClient, RequestOptions};
use crate::domain::model::{Pagination, RefundBody};
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use url::form_urlencoded;

/// 支付相關
pub struct PaymentApi<'a> {
    client: &'a HttpClient,
    options: &'a RequestOptions,
}

impl<'a> PaymentApi<'a> {
    pub(crate) fn new(client: &'a HttpClient, options: &'a RequestOptions) -> Self {
        Self { client, options }
    }

    /// 建立支付訂單
    pub async fn create_payment<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        self.client
            .post(&format!("{}/payment/create", API_PREFIX), data, self.options)
            .await
    }

    /// 建立支付並產生啟用碼
    pub async fn create_payment_with_product<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<Value> {
        self.client
            .post(
                &format!("{}/payment/create-with-product", API_PREFIX),
                data,
                self.options,
            )
            .await
    }

    /// 取得支付狀態
    pub async fn get_payment_status(&self, payment_id: impl Display) -> Result<Value> {
        self.client
            .get(&format!("{}/payment/status/{}", API_PREFIX, payment_id), self.options)
            .await
    }

    /// 取得支付成功資訊
    pub async fn get_payment_success_info(&self, payment_id: impl Display) -> Result<Value> {
        self.client
            .get(&format!("{}/payment/success/{}", API_PREFIX, payment_id), self.options)
            .await
    }

    /// 退款處理
    pub async fn refund_payment(&self, payment_id: impl Display, reason: &str) -> Result<Value> {
        let body = RefundBody {
            payment_id: payment_id.to_string(),
            reason,
        };
        self.client
            .post(&format!("{}/payment/refund", API_PREFIX), &body, self.options)
            .await
    }

    /// 取得支付統計
    pub async fn get_payment_statistics(&self) -> Result<Value> {
        self.client
            .get(&format!("{}/payment/statistics", API_PREFIX), self.options)
            .await
    }

    /// 取得支付列表; `status` is only sent when given.
    pub async fn get_payment_list(&self, page: Pagination, status: Option<&str>) -> Result<Value> {
        self.client.get(&list_path(page, status), self.options).await
    }

    pub async fn get_payment_methods(&self) -> Result<Value> {
        self.client
            .get(&format!("{}/payment/methods", API_PREFIX), self.options)
            .await
    }
}

pub(crate) fn list_path(page: Pagination, status: Option<&str>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("skip", &page.skip.to_string())
        .append_pair("limit", &page.limit.to_string());
    if let Some(status) = status.filter(|s| !s.is_empty()) {
        query.append_pair("status", status);
    }
    format!("{}/payment/list?{}", API_PREFIX, query.finish())
}

use super::API_PREFIX;
use crate::adapters::http::{HttpClient, RequestOptions};
use crate::domain::model::LoginBody;
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::Value;

/// 使用者認證
pub struct AuthApi<'a> {
    client: &'a HttpClient,
    options: &'a RequestOptions,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a HttpClient, options: &'a RequestOptions) -> Self {
        Self { client, options }
    }

    /// Returns the backend token payload (`access_token`, `token_type`) untouched.
    pub async fn login(&self, username: &str, password: &str) -> Result<Value> {
        self.client
            .post(
                &format!("{}/auth/login", API_PREFIX),
                &LoginBody { username, password },
                self.options,
            )
            .await
    }

    pub async fn register<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        self.client
            .post(&format!("{}/auth/register", API_PREFIX), data, self.options)
            .await
    }

    pub async fn get_current_user(&self) -> Result<Value> {
        self.client
            .get(&format!("{}/auth/me", API_PREFIX), self.options)
            .await
    }
}

use super::API_PREFIX;
use crate::adapters::http::{HttpClient, RequestOptions};
use crate::domain::model::{
    HardwareBindRequest, HardwareUnbindRequest, HardwareVerifyRequest, UnifiedActivationRequest,
};
use crate::utils::error::Result;
use serde_json::{json, Value};

/// Hardware-bound activation codes and the unified activation entry points.
pub struct HardwareApi<'a> {
    client: &'a HttpClient,
    options: &'a RequestOptions,
}

impl<'a> HardwareApi<'a> {
    pub(crate) fn new(client: &'a HttpClient, options: &'a RequestOptions) -> Self {
        Self { client, options }
    }

    /// Asks the backend to fingerprint the machine it runs on.
    pub async fn generate_fingerprint(&self) -> Result<Value> {
        self.client
            .post(
                &format!("{}/activation/hardware/generate-fingerprint", API_PREFIX),
                &json!({}),
                self.options,
            )
            .await
    }

    pub async fn bind(&self, request: &HardwareBindRequest) -> Result<Value> {
        self.client
            .post(&format!("{}/activation/hardware/bind", API_PREFIX), request, self.options)
            .await
    }

    pub async fn verify(&self, request: &HardwareVerifyRequest) -> Result<Value> {
        self.client
            .post(&format!("{}/activation/hardware/verify", API_PREFIX), request, self.options)
            .await
    }

    pub async fn get_binding_info(&self, code: &str) -> Result<Value> {
        self.client
            .get(
                &format!("{}/activation/hardware/binding-info/{}", API_PREFIX, code),
                self.options,
            )
            .await
    }

    /// Admin only; the backend checks `admin_key`.
    pub async fn unbind(&self, request: &HardwareUnbindRequest) -> Result<Value> {
        self.client
            .post(&format!("{}/activation/hardware/unbind", API_PREFIX), request, self.options)
            .await
    }

    pub async fn unified_activate(&self, request: &UnifiedActivationRequest) -> Result<Value> {
        self.client
            .post(&format!("{}/activation/unified/activate", API_PREFIX), request, self.options)
            .await
    }

    pub async fn unified_bind(&self, request: &UnifiedActivationRequest) -> Result<Value> {
        self.client
            .post(&format!("{}/activation/unified/bind", API_PREFIX), request, self.options)
            .await
    }
}

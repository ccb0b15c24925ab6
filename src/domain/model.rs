use serde::{Deserialize, Serialize};
use std::fmt;

/// `skip`/`limit` pair used by every listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub skip: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { skip: 0, limit: 100 }
    }
}

impl Pagination {
    pub fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ProductType {
    Software,
    HardwareBound,
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductType::Software => f.write_str("software"),
            ProductType::HardwareBound => f.write_str("hardware_bound"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UseCodeBody<'a> {
    pub user_id: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefundBody<'a> {
    pub payment_id: String,
    pub reason: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginBody<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareBindRequest {
    pub activation_code: String,
    pub hardware_fingerprint: String,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareVerifyRequest {
    pub activation_code: String,
    pub hardware_fingerprint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareUnbindRequest {
    pub activation_code: String,
    pub admin_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedActivationRequest {
    pub activation_code: String,
    pub product_type: ProductType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_fingerprint: Option<String>,
    pub user_id: Option<String>,
}

/// Facts about the host that feed the hardware fingerprint.
///
/// Fields are declared in alphabetical order so the JSON rendering has sorted keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareInfo {
    pub cpu_count: usize,
    pub cpu_freq: u64,
    pub hostname: String,
    pub machine: String,
    pub memory_total: u64,
    pub platform: String,
    pub processor: String,
}

/// What a license activation flow reports back to its caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivationOutcome {
    pub success: bool,
    pub message: String,
    pub activation_type: Option<ProductType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_code: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding_info: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_fingerprint: Option<String>,
}

impl ActivationOutcome {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            activation_type: None,
            activation_code: None,
            binding_info: None,
            hardware_fingerprint: None,
        }
    }
}

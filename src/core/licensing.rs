use crate::core::endpoints::Api;
use crate::core::fingerprint::fingerprint;
use crate::domain::model::{
    ActivationOutcome, HardwareBindRequest, HardwareVerifyRequest, ProductType,
    UnifiedActivationRequest,
};
use crate::domain::ports::HardwareProbe;
use crate::utils::error::Result;
use serde_json::Value;

/// Multi-call activation sequences on top of the endpoint map.
///
/// A backend answer of `valid: false` or `success: false` becomes a failed
/// [`ActivationOutcome`]; HTTP and transport errors are returned as `Err`.
pub struct LicenseActivator<'a, P: HardwareProbe + ?Sized> {
    api: &'a Api,
    probe: &'a P,
}

impl<'a, P: HardwareProbe + ?Sized> LicenseActivator<'a, P> {
    pub fn new(api: &'a Api, probe: &'a P) -> Self {
        Self { api, probe }
    }

    pub fn fingerprint(&self) -> Result<String> {
        fingerprint(self.probe)
    }

    /// Verify, then redeem.
    pub async fn activate_software(
        &self,
        code: &str,
        user_id: Option<&str>,
    ) -> Result<ActivationOutcome> {
        let verified = self.api.activation().verify_code(code, user_id).await?;
        if !flag(&verified, "valid") {
            tracing::info!("Activation code {} rejected at verification", code);
            return Ok(ActivationOutcome {
                activation_type: Some(ProductType::Software),
                ..ActivationOutcome::failed(message_or(&verified, "Activation code is invalid"))
            });
        }

        let used = self.api.activation().use_code(code, user_id).await?;
        let success = flag(&used, "success");
        tracing::info!("Software activation of {}: success={}", code, success);

        Ok(ActivationOutcome {
            success,
            message: message_or(&used, "Activation completed"),
            activation_type: Some(ProductType::Software),
            activation_code: field(&verified, "activation_code"),
            binding_info: None,
            hardware_fingerprint: None,
        })
    }

    /// Fingerprint this machine and bind the code to it.
    pub async fn activate_hardware_bound(
        &self,
        code: &str,
        user_id: Option<&str>,
    ) -> Result<ActivationOutcome> {
        let hardware_fingerprint = self.fingerprint()?;
        let request = HardwareBindRequest {
            activation_code: code.to_string(),
            hardware_fingerprint: hardware_fingerprint.clone(),
            user_id: user_id.map(str::to_string),
        };

        let bound = self.api.hardware().bind(&request).await?;
        if !flag(&bound, "success") {
            tracing::info!("Hardware binding of {} rejected", code);
            return Ok(ActivationOutcome {
                activation_type: Some(ProductType::HardwareBound),
                ..ActivationOutcome::failed(message_or(&bound, "Hardware binding failed"))
            });
        }

        tracing::info!("Activation code {} bound to this machine", code);
        Ok(ActivationOutcome {
            success: true,
            message: "Hardware-bound activation succeeded".to_string(),
            activation_type: Some(ProductType::HardwareBound),
            activation_code: None,
            binding_info: field(&bound, "binding_info"),
            hardware_fingerprint: Some(hardware_fingerprint),
        })
    }

    /// Check that `code` is bound to this machine.
    pub async fn verify_hardware_bound(&self, code: &str) -> Result<ActivationOutcome> {
        let hardware_fingerprint = self.fingerprint()?;
        let request = HardwareVerifyRequest {
            activation_code: code.to_string(),
            hardware_fingerprint: hardware_fingerprint.clone(),
        };

        let verified = self.api.hardware().verify(&request).await?;
        Ok(ActivationOutcome {
            success: flag(&verified, "valid"),
            message: message_or(&verified, "Verification failed"),
            activation_type: Some(ProductType::HardwareBound),
            activation_code: None,
            binding_info: field(&verified, "binding_info"),
            hardware_fingerprint: Some(hardware_fingerprint),
        })
    }

    /// Single entry point; a fingerprint is only computed and sent for hardware-bound products.
    pub async fn unified_activation(
        &self,
        code: &str,
        product_type: ProductType,
        user_id: Option<&str>,
    ) -> Result<ActivationOutcome> {
        self.unified(code, product_type, user_id, false).await
    }

    /// Like [`unified_activation`](Self::unified_activation) but redeems or binds instead of only checking.
    pub async fn unified_bind(
        &self,
        code: &str,
        product_type: ProductType,
        user_id: Option<&str>,
    ) -> Result<ActivationOutcome> {
        self.unified(code, product_type, user_id, true).await
    }

    async fn unified(
        &self,
        code: &str,
        product_type: ProductType,
        user_id: Option<&str>,
        bind: bool,
    ) -> Result<ActivationOutcome> {
        let hardware_fingerprint = match product_type {
            ProductType::HardwareBound => Some(self.fingerprint()?),
            ProductType::Software => None,
        };

        let request = UnifiedActivationRequest {
            activation_code: code.to_string(),
            product_type,
            hardware_fingerprint: hardware_fingerprint.clone(),
            user_id: user_id.map(str::to_string),
        };

        let result = if bind {
            self.api.hardware().unified_bind(&request).await?
        } else {
            self.api.hardware().unified_activate(&request).await?
        };
        let activation_type = result
            .get("activation_type")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or(product_type);

        Ok(ActivationOutcome {
            success: flag(&result, "success"),
            message: message_or(&result, "Activation failed"),
            activation_type: Some(activation_type),
            activation_code: field(&result, "activation_code"),
            binding_info: field(&result, "binding_info"),
            hardware_fingerprint,
        })
    }
}

fn flag(value: &Value, key: &str) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn message_or(value: &Value, default: &str) -> String {
    value
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn field(value: &Value, key: &str) -> Option<Value> {
    value.get(key).filter(|v| !v.is_null()).cloned()
}

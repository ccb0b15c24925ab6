use crate::domain::model::HardwareInfo;
use crate::utils::error::Result;

/// Source of host hardware facts for fingerprinting.
pub trait HardwareProbe: Send + Sync {
    fn probe(&self) -> Result<HardwareInfo>;

    /// Host name used when a full probe fails.
    fn host_name(&self) -> String;
}

use crate::domain::model::HardwareInfo;
use crate::domain::ports::HardwareProbe;
use crate::utils::error::{ClientError, Result};
use sysinfo::System;

/// Reads hardware facts of the current machine through `sysinfo`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl SystemProbe {
    pub fn new() -> Self {
        Self
    }
}

impl HardwareProbe for SystemProbe {
    fn probe(&self) -> Result<HardwareInfo> {
        let mut system = System::new_all();
        system.refresh_all();

        let cpus = system.cpus();
        if cpus.is_empty() {
            return Err(ClientError::Fingerprint {
                message: "no CPU information available".to_string(),
            });
        }

        let platform = match (System::name(), System::long_os_version()) {
            (Some(name), Some(version)) => format!("{}-{}", name, version),
            (Some(name), None) => name,
            _ => std::env::consts::OS.to_string(),
        };

        Ok(HardwareInfo {
            cpu_count: cpus.len(),
            cpu_freq: cpus[0].frequency(),
            hostname: self.host_name(),
            machine: std::env::consts::ARCH.to_string(),
            memory_total: system.total_memory(),
            platform,
            processor: cpus[0].brand().to_string(),
        })
    }

    fn host_name(&self) -> String {
        System::host_name().unwrap_or_default()
    }
}

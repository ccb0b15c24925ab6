use crate::domain::ports::HardwareProbe;
use crate::utils::error::{ClientError, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Serialize)]
struct FallbackInfo<'a> {
    hostname: &'a str,
    platform: &'a str,
    timestamp: String,
}

/// Lowercase hex SHA-256 of the probe's hardware info rendered as sorted-key JSON.
///
/// When the probe fails the digest is taken over host name, OS and the current
/// unix timestamp instead, so the value is no longer stable across calls.
pub fn fingerprint<P: HardwareProbe + ?Sized>(probe: &P) -> Result<String> {
    let payload = match probe.probe() {
        Ok(info) => serde_json::to_string(&info).map_err(ClientError::Encode)?,
        Err(e) => {
            tracing::warn!("Hardware probe failed, using fallback fingerprint: {}", e);
            let hostname = probe.host_name();
            serde_json::to_string(&FallbackInfo {
                hostname: &hostname,
                platform: std::env::consts::OS,
                timestamp: chrono::Utc::now().timestamp().to_string(),
            })
            .map_err(ClientError::Encode)?
        }
    };

    Ok(digest(&payload))
}

fn digest(payload: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::model::HardwareInfo;

    pub(crate) struct FixedProbe(pub Option<HardwareInfo>);

    impl HardwareProbe for FixedProbe {
        fn probe(&self) -> Result<HardwareInfo> {
            self.0.clone().ok_or_else(|| ClientError::Fingerprint {
                message: "probe disabled".to_string(),
            })
        }

        fn host_name(&self) -> String {
            "test-host".to_string()
        }
    }

    pub(crate) fn sample_info() -> HardwareInfo {
        HardwareInfo {
            cpu_count: 4,
            cpu_freq: 2400,
            hostname: "test-host".to_string(),
            machine: "x86_64".to_string(),
            memory_total: 8 * 1024 * 1024 * 1024,
            platform: "Linux-6.1".to_string(),
            processor: "Test CPU".to_string(),
        }
    }

    #[test]
    fn test_fingerprint_is_stable_sha256_hex() {
        let probe = FixedProbe(Some(sample_info()));
        let first = fingerprint(&probe).unwrap();
        let second = fingerprint(&probe).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_fingerprint_matches_digest_of_sorted_json() {
        let info = sample_info();
        let expected = digest(&serde_json::to_string(&info).unwrap());
        assert_eq!(fingerprint(&FixedProbe(Some(info))).unwrap(), expected);
    }

    #[test]
    fn test_different_hardware_gives_different_fingerprint() {
        let mut other = sample_info();
        other.cpu_count = 16;
        assert_ne!(
            fingerprint(&FixedProbe(Some(sample_info()))).unwrap(),
            fingerprint(&FixedProbe(Some(other))).unwrap()
        );
    }

    #[test]
    fn test_probe_failure_falls_back() {
        let value = fingerprint(&FixedProbe(None)).unwrap();
        assert_eq!(value.len(), 64);
        assert_ne!(value, fingerprint(&FixedProbe(Some(sample_info()))).unwrap());
    }

    #[test]
    fn test_known_digest() {
        assert_eq!(
            digest("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}

//! Session configuration, generalizing the teacher's `config.rs`
//! (`Config`/`ReaderConfig`/`ROSpecConfig` loaded via `serde_json::from_str`)
//! into the host/port/timeout/default-ROSpec settings `Session` and the
//! demonstration binary need.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    #[serde(default = "default_transact_timeout_ms")]
    pub transact_timeout_ms: u64,
    /// Frames whose declared `Length` exceeds this are rejected with
    /// `FramingError` and the connection is dropped (spec.md §4.6).
    #[serde(default = "default_max_frame_len")]
    pub max_frame_len: usize,
    #[serde(default)]
    pub default_rospec: Option<DefaultROSpecConfig>,
}

fn default_connect_timeout_ms() -> u64 {
    5_000
}

fn default_transact_timeout_ms() -> u64 {
    2_500
}

/// 10 MiB — generous for any LLRP frame seen in practice (a `RO_ACCESS_REPORT`
/// with thousands of `TagReportData` entries is still a few hundred KB), but
/// small enough to abort on a corrupt/adversarial length field quickly.
fn default_max_frame_len() -> usize {
    10 * 1024 * 1024
}

impl SessionConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn transact_timeout(&self) -> Duration {
        Duration::from_millis(self.transact_timeout_ms)
    }

    pub fn load(json: &str) -> Result<SessionConfig> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Minimal inventory ROSpec the demonstration binary uses when no richer
/// configuration is supplied, mirroring the teacher's `ROSpecConfig`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultROSpecConfig {
    pub rospec_id: u32,
    pub antenna_ids: Vec<u16>,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u32,
}

fn default_duration_ms() -> u32 {
    5_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_config_with_default_timeouts() {
        let json = r#"{"host": "192.168.1.50", "port": 5084}"#;
        let cfg = SessionConfig::load(json).unwrap();
        assert_eq!(cfg.connect_timeout_ms, 5_000);
        assert_eq!(cfg.transact_timeout_ms, 2_500);
        assert_eq!(cfg.max_frame_len, 10 * 1024 * 1024);
        assert!(cfg.default_rospec.is_none());
    }

    #[test]
    fn loads_config_with_default_rospec() {
        let json = r#"{
            "host": "192.168.1.50",
            "port": 5084,
            "default_rospec": {"rospec_id": 1, "antenna_ids": [1, 2]}
        }"#;
        let cfg = SessionConfig::load(json).unwrap();
        let rospec = cfg.default_rospec.unwrap();
        assert_eq!(rospec.rospec_id, 1);
        assert_eq!(rospec.duration_ms, 5_000);
    }
}

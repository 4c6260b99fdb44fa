#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: &str = "80";

/// SWS 服務位置。host 不含 scheme，port 為空字串時使用 HTTP 預設埠。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostOptions {
    pub host: String,
    #[serde(default)]
    pub port: String,
}

impl HostOptions {
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
        }
    }

    /// `http://{host}[:{port}]`
    pub fn base_url(&self) -> String {
        if self.port.is_empty() {
            format!("http://{}", self.host)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }
}

impl Default for HostOptions {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        assert_eq!(
            HostOptions::new("sws.example.com", "8080").base_url(),
            "http://sws.example.com:8080"
        );
        assert_eq!(
            HostOptions::new("sws.example.com", "").base_url(),
            "http://sws.example.com"
        );
        assert_eq!(HostOptions::default().base_url(), "http://localhost:80");
    }
}

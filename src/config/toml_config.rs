use crate::config::HostOptions;
use crate::utils::error::{Result, SwsError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwsConfig {
    pub service: Option<ServiceConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub host: Option<String>,
    /// 允許寫成字串或數字：`port = "8080"` 或 `port = 8080`
    #[serde(default, deserialize_with = "deserialize_port")]
    pub port: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

fn deserialize_port<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Text(String),
        Number(u64),
    }

    Ok(Option::<Port>::deserialize(deserializer)?.map(|port| match port {
        Port::Text(text) => text,
        Port::Number(number) => number.to_string(),
    }))
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl SwsConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SwsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SwsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SWS_HOST})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 以預設值補齊缺少的欄位
    pub fn host_options(&self) -> HostOptions {
        let defaults = HostOptions::default();
        let service = self.service.clone().unwrap_or_default();
        HostOptions {
            host: service.host.unwrap_or(defaults.host),
            port: service.port.unwrap_or(defaults.port),
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for SwsConfig {
    fn validate(&self) -> Result<()> {
        let options = self.host_options();
        validation::validate_host("service.host", &options.host)?;
        validation::validate_port("service.port", &options.port)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[service]
host = "sws.example.com"
port = "8080"

[logging]
level = "debug"
"#;

        let config = SwsConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.host_options(),
            HostOptions::new("sws.example.com", "8080")
        );
        assert_eq!(config.log_level(), Some("debug"));
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_numeric_port_and_defaults() {
        let config = SwsConfig::from_toml_str("[service]\nport = 9000\n").unwrap();
        assert_eq!(config.host_options(), HostOptions::new("localhost", "9000"));

        let empty = SwsConfig::from_toml_str("").unwrap();
        assert_eq!(empty.host_options(), HostOptions::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SWS_TEST_CONFIG_HOST", "geo.internal");

        let toml_content = r#"
[service]
host = "${SWS_TEST_CONFIG_HOST}"
port = "${SWS_TEST_CONFIG_UNSET_PORT}"
"#;

        let config = SwsConfig::from_toml_str(toml_content).unwrap();
        let options = config.host_options();
        assert_eq!(options.host, "geo.internal");
        assert_eq!(options.port, "${SWS_TEST_CONFIG_UNSET_PORT}");
        assert!(config.validate().is_err());

        std::env::remove_var("SWS_TEST_CONFIG_HOST");
    }

    #[test]
    fn test_config_validation() {
        let config = SwsConfig::from_toml_str("[service]\nhost = \"http://sws.example.com\"\n")
            .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = SwsConfig::from_toml_str("[service\nhost = 1").unwrap_err();
        assert!(matches!(err, SwsError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[service]\nhost = \"file.example.com\"\nport = \"81\"\n")
            .unwrap();

        let config = SwsConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.host_options().host, "file.example.com");

        assert!(matches!(
            SwsConfig::from_file("/nonexistent/sws.toml"),
            Err(SwsError::IoError(_))
        ));
    }
}

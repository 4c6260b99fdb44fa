use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwsError {
    /// 回應可解析，但缺少 `authKey`（或為空值）。原始回應一併保留。
    #[error("Authentication request failed.")]
    AuthenticationFailed { response: serde_json::Value },

    #[error("Geocode request failed.")]
    GeocodeFailed { response: serde_json::Value },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid JSON response (HTTP {status}): {source}")]
    InvalidResponse {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    Geocode,
    Transport,
    Configuration,
}

impl SwsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SwsError::AuthenticationFailed { .. } => ErrorCategory::Authentication,
            SwsError::GeocodeFailed { .. } => ErrorCategory::Geocode,
            SwsError::Transport(_) | SwsError::InvalidResponse { .. } => ErrorCategory::Transport,
            SwsError::IoError(_)
            | SwsError::ConfigError { .. }
            | SwsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 失敗時服務端回傳的 JSON（若有）
    pub fn response(&self) -> Option<&serde_json::Value> {
        match self {
            SwsError::AuthenticationFailed { response } | SwsError::GeocodeFailed { response } => {
                Some(response)
            }
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SwsError::AuthenticationFailed { .. } => {
                "SWS rejected the credentials (no authKey in response)".to_string()
            }
            SwsError::GeocodeFailed { .. } => "SWS returned an empty geocode result".to_string(),
            SwsError::Transport(e) => format!("Could not reach SWS: {}", e),
            SwsError::InvalidResponse { status, .. } => {
                format!("SWS answered with a non-JSON body (HTTP {})", status)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Authentication => "Check the username and password",
            ErrorCategory::Geocode => "Check the address/city lines and that the authKey is still valid",
            ErrorCategory::Transport => "Check --host/--port and that the service is reachable",
            ErrorCategory::Configuration => "Check the command line flags and the config file",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Authentication => 2,
            ErrorCategory::Geocode => 3,
            ErrorCategory::Transport => 4,
            ErrorCategory::Configuration => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SwsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_variants_keep_response() {
        let err = SwsError::AuthenticationFailed {
            response: serde_json::json!({}),
        };
        assert_eq!(err.to_string(), "Authentication request failed.");
        assert_eq!(err.response(), Some(&serde_json::json!({})));
        assert_eq!(err.category(), ErrorCategory::Authentication);

        let err = SwsError::GeocodeFailed {
            response: serde_json::Value::Null,
        };
        assert_eq!(err.to_string(), "Geocode request failed.");
        assert_eq!(err.response(), Some(&serde_json::Value::Null));
    }

    #[test]
    fn test_invalid_json_is_transport_category() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = SwsError::InvalidResponse {
            status: 502,
            source,
        };
        assert_eq!(err.category(), ErrorCategory::Transport);
        assert!(err.response().is_none());
        assert_eq!(err.exit_code(), 4);
    }
}

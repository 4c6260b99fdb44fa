use crate::utils::error::{Result, SwsError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// host 只能是主機名稱或 IP，不能帶 scheme、帳密、port 或路徑
pub fn validate_host(field_name: &str, host: &str) -> Result<()> {
    validate_non_empty_string(field_name, host)?;

    if host.contains("://") {
        return Err(SwsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: host.to_string(),
            reason: "Host must not include a scheme (e.g. use 'example.com', not 'http://example.com')"
                .to_string(),
        });
    }

    // Url::port() 對預設埠 (:80) 也回傳 None，所以直接看字串；IPv6 需帶中括號
    let has_port = match host.strip_prefix('[') {
        Some(rest) => !rest.ends_with(']'),
        None => host.contains(':'),
    };

    match Url::parse(&format!("http://{}", host)) {
        Ok(url)
            if !has_port
                && url.username().is_empty()
                && url.password().is_none()
                && url.path() == "/"
                && url.query().is_none()
                && url.fragment().is_none() =>
        {
            Ok(())
        }
        Ok(_) => Err(SwsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: host.to_string(),
            reason: "Host must not include user info, a port, path or query".to_string(),
        }),
        Err(e) => Err(SwsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: host.to_string(),
            reason: format!("Invalid host: {}", e),
        }),
    }
}

/// 空字串代表使用 HTTP 預設埠
pub fn validate_port(field_name: &str, port: &str) -> Result<()> {
    if port.is_empty() {
        return Ok(());
    }

    match port.parse::<u16>() {
        Ok(0) => Err(SwsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: port.to_string(),
            reason: "Port must be between 1 and 65535".to_string(),
        }),
        Ok(_) => Ok(()),
        Err(_) => Err(SwsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: port.to_string(),
            reason: "Port must be numeric".to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SwsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SwsError::ConfigError {
        message: format!("Missing required value: {}", field_name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_host() {
        assert!(validate_host("host", "sws.example.com").is_ok());
        assert!(validate_host("host", "127.0.0.1").is_ok());
        assert!(validate_host("host", "").is_err());
        assert!(validate_host("host", "http://sws.example.com").is_err());
        assert!(validate_host("host", "sws.example.com:8080").is_err());
        assert!(validate_host("host", "sws.example.com/api").is_err());
        assert!(validate_host("host", "[::1]").is_ok());
    }

    #[test]
    fn test_validate_host_rejects_default_port_and_user_info() {
        assert!(validate_host("host", "sws.example.com:80").is_err());
        assert!(validate_host("host", "h:80").is_err());
        assert!(validate_host("host", "[::1]:80").is_err());
        assert!(validate_host("host", "u@h").is_err());
        assert!(validate_host("host", "user:pw@sws.example.com").is_err());
        assert!(validate_host("host", "sws.example.com#frag").is_err());
    }

    #[test]
    fn test_validate_port() {
        assert!(validate_port("port", "8080").is_ok());
        assert!(validate_port("port", "").is_ok());
        assert!(validate_port("port", "0").is_err());
        assert!(validate_port("port", "http").is_err());
        assert!(validate_port("port", "70000").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("u".to_string());
        let missing: Option<String> = None;
        assert_eq!(validate_required_field("username", &present).unwrap(), "u");
        assert!(validate_required_field("username", &missing).is_err());
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// 認證請求的 body，只存在於單次呼叫期間
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// 成功認證的回應。`auth_key` 取自 body 的 `authKey` 欄位。
#[derive(Debug, Clone, PartialEq)]
pub struct AuthResult {
    pub auth_key: String,
    pub body: Value,
}

impl AuthResult {
    /// `authKey` 缺少或為 falsy 時把原始 body 退回
    pub fn from_body(body: Value) -> Result<Self, Value> {
        if !is_truthy(&body) {
            return Err(body);
        }

        let auth_key = match body.get("authKey") {
            Some(Value::String(key)) if !key.is_empty() => key.clone(),
            Some(other) if is_truthy(other) => other.to_string(),
            _ => return Err(body),
        };

        Ok(Self { auth_key, body })
    }
}

/// 服務端回傳的任意 JSON，不做 schema 驗證
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GeocodeResult {
    pub body: Value,
}

impl GeocodeResult {
    pub fn from_body(body: Value) -> Result<Self, Value> {
        if is_truthy(&body) {
            Ok(Self { body })
        } else {
            Err(body)
        }
    }
}

/// null、false、0、"" 視為 falsy；空物件與空陣列仍為 truthy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

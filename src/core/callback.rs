use crate::core::client::SwsClient;
use crate::domain::model::{AuthResult, GeocodeResult};
use crate::utils::error::Result;
use tokio::task::JoinHandle;

/// Callback 形式的呼叫介面。
///
/// 每個方法都會把請求丟到 tokio runtime 上執行並立即返回，
/// callback 在請求完成後於背景 task 中被呼叫且只呼叫一次。
///
/// # Panics
///
/// 必須在 tokio runtime 內呼叫（與 `tokio::spawn` 相同）。
impl SwsClient {
    pub fn authenticate_with<F>(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<AuthResult>) + Send + 'static,
    {
        let client = self.clone();
        let username = username.into();
        let password = password.into();

        tokio::spawn(async move {
            let result = client.authenticate(&username, &password).await;
            callback(result);
        })
    }

    pub fn geocode_with<F>(
        &self,
        auth_key: impl Into<String>,
        address_line: impl Into<String>,
        city_line: impl Into<String>,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<GeocodeResult>) + Send + 'static,
    {
        let client = self.clone();
        let auth_key = auth_key.into();
        let address_line = address_line.into();
        let city_line = city_line.into();

        tokio::spawn(async move {
            let result = client.geocode(&auth_key, &address_line, &city_line).await;
            callback(result);
        })
    }
}

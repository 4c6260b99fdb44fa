use crate::domain::model::{AuthResult, GeocodeResult};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SwsApi: Send + Sync {
    async fn authenticate(&self, username: &str, password: &str) -> Result<AuthResult>;
    async fn geocode(&self, auth_key: &str, address_line: &str, city_line: &str)
        -> Result<GeocodeResult>;
}

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{toml_config::SwsConfig, HostOptions};
pub use crate::core::client::{RequestOptions, SwsClient};
pub use crate::domain::model::{AuthResult, Credentials, GeocodeResult};
pub use crate::domain::ports::SwsApi;
pub use crate::utils::error::{ErrorCategory, Result, SwsError};

pub mod callback;
pub mod client;

pub use crate::domain::model::{AuthResult, Credentials, GeocodeResult};
pub use crate::domain::ports::SwsApi;
pub use crate::utils::error::Result;

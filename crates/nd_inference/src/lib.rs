pub mod models;

pub use models::create_model;

/// Settings for a chat backend. Unset fields fall back to the backend's
/// defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    pub base_url: Option<String>,
}

pub mod prelude {
    pub use crate::models::create_model;
    pub use crate::Config;
    pub use nd_core::{ChatModel, Error, Result};
}

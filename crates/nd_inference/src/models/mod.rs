use crate::Config;
use nd_core::{ChatModel, Error, Result};
use std::sync::Arc;

pub mod dummy;
pub mod groq;

pub use dummy::DummyModel;
pub use groq::GroqModel;

/// Creates a chat backend by name. Available models: groq, dummy.
pub fn create_model(name: &str, config: Config) -> Result<Arc<dyn ChatModel>> {
    match name {
        "groq" => Ok(Arc::new(GroqModel::new(config)?)),
        "dummy" => Ok(Arc::new(DummyModel::new())),
        other => Err(Error::Config(format!("Unknown model backend: {}", other))),
    }
}

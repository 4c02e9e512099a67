use async_trait::async_trait;
use nd_core::{ChatModel, Result};
use std::fmt;

/// Deterministic offline backend: echoes a bounded word prefix of the user
/// message. Used by tests and for wiring checks without a hosted model.
pub struct DummyModel;

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

#[async_trait]
impl ChatModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn complete(&self, _system_prompt: &str, user_message: &str) -> Result<String> {
        // Take first 20 words and join them
        let words: Vec<&str> = user_message.split_whitespace().take(20).collect();
        Ok(words.join(" "))
    }
}

use crate::Result;
use async_trait::async_trait;
use std::fmt;

#[async_trait]
pub trait ChatModel: Send + Sync + fmt::Debug {
    /// Returns the name of the backing model
    fn name(&self) -> &str;

    /// Run one system + user round against the model and return the reply
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String>;
}

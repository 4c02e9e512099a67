use crate::Config;
use async_trait::async_trait;
use nd_core::{ChatModel, Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

/// Chat-completions client for Groq's OpenAI-compatible endpoint.
pub struct GroqModel {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
    model_name: String,
}

impl GroqModel {
    pub fn new(config: Config) -> Result<Self> {
        let api_key = config
            .api_key
            .ok_or_else(|| Error::Inference("Groq API key is required".to_string()))?;

        Ok(Self {
            client: Arc::new(Client::new()),
            api_key,
            base_url: config
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model_name: config
                .model_name
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}

impl fmt::Debug for GroqModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model_name", &self.model_name)
            .finish()
    }
}

#[async_trait]
impl ChatModel for GroqModel {
    fn name(&self) -> &str {
        "Groq"
    }

    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model_name.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_message.to_string(),
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?
            .json::<ChatResponse>()
            .await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::Inference("Model returned no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            api_key: Some("test-key".to_string()),
            model_name: None,
            base_url: None,
        }
    }

    #[test]
    fn test_model_requires_api_key() {
        let result = GroqModel::new(Config::default());
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Inference error: Groq API key is required"
        );

        assert!(GroqModel::new(test_config()).is_ok());
    }

    #[test]
    fn test_model_defaults() {
        let model = GroqModel::new(test_config()).unwrap();
        assert_eq!(model.base_url, DEFAULT_BASE_URL);
        assert_eq!(model.model_name, DEFAULT_MODEL);
    }

    #[test]
    fn test_debug_redacts_key() {
        let model = GroqModel::new(test_config()).unwrap();
        let debug = format!("{:?}", model);
        assert!(!debug.contains("test-key"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_chat_response_parsing() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Topic: Fashion"}}
            ]
        }"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices[0].message.content, "Topic: Fashion");
    }
}

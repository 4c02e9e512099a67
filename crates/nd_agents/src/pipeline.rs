use crate::prompts;
use chrono::Utc;
use nd_core::{ChatModel, Digest, Result, TopStories};
use nd_search::Retriever;
use std::sync::Arc;
use tracing::info;

/// Chains the three pipeline roles strictly in sequence: topic extraction,
/// source retrieval, categorization/formatting.
pub struct DigestPipeline {
    model: Arc<dyn ChatModel>,
    retriever: Retriever,
}

impl DigestPipeline {
    pub fn new(model: Arc<dyn ChatModel>, retriever: Retriever) -> Self {
        Self { model, retriever }
    }

    pub async fn run(&self, question: &str) -> Result<Digest> {
        let topic = self.extract_topic(question).await?;
        info!("🧠 Extracted topic '{}' from question", topic);

        let stories = self.retriever.retrieve(&topic).await?;
        info!("🗞️ Retrieved {} stories", stories.top_stories.len());

        let text = self.categorize(&topic, &stories).await?;
        info!("✨ Digest ready for '{}'", topic);

        Ok(Digest {
            topic,
            text,
            generated_at: Utc::now(),
        })
    }

    async fn extract_topic(&self, question: &str) -> Result<String> {
        let reply = self
            .model
            .complete(prompts::TOPIC_EXTRACTOR, question)
            .await?;

        let topic = parse_topic(&reply);
        if topic.is_empty() {
            // Fall back to searching the question verbatim
            return Ok(question.trim().to_string());
        }
        Ok(topic)
    }

    async fn categorize(&self, topic: &str, stories: &TopStories) -> Result<String> {
        let today = Utc::now().format("%d.%m.%Y").to_string();
        let system = prompts::categorizer(&today);
        let message = format!(
            "Topic: {}\n\nTop stories:\n{}",
            topic,
            serde_json::to_string_pretty(stories)?
        );

        self.model.complete(&system, &message).await
    }
}

/// Reduces a topic-extraction reply to the bare topic: last non-empty line
/// with any `Topic:` prefix stripped.
fn parse_topic(reply: &str) -> String {
    reply
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.strip_prefix("Topic:").map(str::trim).unwrap_or(line))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use nd_core::{Error, PageFetcher, SearchProvider, Story};
    use std::collections::VecDeque;
    use std::fmt;
    use std::sync::Mutex;

    struct ScriptedModel {
        replies: Mutex<VecDeque<String>>,
    }

    impl ScriptedModel {
        fn new(replies: &[&str]) -> Self {
            Self {
                replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
            }
        }
    }

    impl fmt::Debug for ScriptedModel {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("ScriptedModel").finish()
        }
    }

    #[async_trait]
    impl ChatModel for ScriptedModel {
        fn name(&self) -> &str {
            "Scripted"
        }

        async fn complete(&self, _system_prompt: &str, _user_message: &str) -> Result<String> {
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| Error::Inference("Script exhausted".to_string()))
        }
    }

    struct CannedSearch;

    #[async_trait]
    impl SearchProvider for CannedSearch {
        async fn top_stories(&self, _topic: &str) -> Result<Vec<Story>> {
            Ok(vec![Story {
                title: "Gallery opens".to_string(),
                link: "https://arts.example.com/gallery".to_string(),
            }])
        }
    }

    struct CannedFetcher;

    #[async_trait]
    impl PageFetcher for CannedFetcher {
        async fn fetch_page(&self, _url: &str) -> Result<String> {
            Ok("<html><body><p>A new gallery opened downtown.</p></body></html>".to_string())
        }
    }

    fn test_retriever() -> Retriever {
        Retriever::new(Arc::new(CannedSearch), Arc::new(CannedFetcher))
    }

    #[tokio::test]
    async fn test_pipeline_chains_roles() {
        let digest_text = "*Art news 01.01.2026:*\n\nExhibitions:\n- Gallery opens\n\nSources:\n- www.arts.example.com";
        let model = Arc::new(ScriptedModel::new(&["Topic: Art", digest_text]));
        let pipeline = DigestPipeline::new(model, test_retriever());

        let digest = pipeline
            .run("What is happening in the art world today?")
            .await
            .unwrap();

        assert_eq!(digest.topic, "Art");
        assert_eq!(digest.text, digest_text);
    }

    #[tokio::test]
    async fn test_pipeline_fails_when_model_fails() {
        let model = Arc::new(ScriptedModel::new(&[]));
        let pipeline = DigestPipeline::new(model, test_retriever());

        let result = pipeline.run("Any news?").await;
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_topic_strips_prefix() {
        assert_eq!(parse_topic("Topic: Fashion"), "Fashion");
        assert_eq!(parse_topic("Fashion"), "Fashion");
        assert_eq!(parse_topic("Sure!\n\nTopic: Climate Change\n"), "Climate Change");
    }

    #[test]
    fn test_parse_topic_empty_reply() {
        assert_eq!(parse_topic(""), "");
        assert_eq!(parse_topic("\n  \n"), "");
    }

    #[tokio::test]
    async fn test_empty_topic_falls_back_to_question() {
        let model = Arc::new(ScriptedModel::new(&["", "digest"]));
        let pipeline = DigestPipeline::new(model, test_retriever());

        let digest = pipeline.run("  solar power  ").await.unwrap();
        assert_eq!(digest.topic, "solar power");
    }
}

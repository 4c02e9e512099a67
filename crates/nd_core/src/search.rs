use crate::types::Story;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Returns the top story entries for a topic
    async fn top_stories(&self, topic: &str) -> Result<Vec<Story>>;
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the raw page body behind a story link
    async fn fetch_page(&self, url: &str) -> Result<String>;
}

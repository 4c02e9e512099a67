use crate::excerpt::{excerpt, normalize_source};
use crate::fetcher::body_text;
use nd_core::{PageFetcher, Result, SearchProvider, TopStories, TopStory};
use std::sync::Arc;
use tracing::{info, warn};

/// Merges the search and fetch steps into a uniform record list: one
/// search call, then each story page fetched strictly one at a time.
pub struct Retriever {
    search: Arc<dyn SearchProvider>,
    fetcher: Arc<dyn PageFetcher>,
}

impl Retriever {
    pub fn new(search: Arc<dyn SearchProvider>, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { search, fetcher }
    }

    pub async fn retrieve(&self, topic: &str) -> Result<TopStories> {
        let stories = self.search.top_stories(topic).await?;
        info!("🔍 Found {} top stories for '{}'", stories.len(), topic);

        let mut top_stories = Vec::with_capacity(stories.len());
        for story in stories {
            match self.retrieve_story(&story.link).await {
                Ok(text) => top_stories.push(TopStory {
                    title: story.title,
                    source: normalize_source(&story.link),
                    text,
                }),
                Err(e) => warn!("Failed to retrieve {}: {}", story.link, e),
            }
        }

        Ok(TopStories { top_stories })
    }

    async fn retrieve_story(&self, url: &str) -> Result<String> {
        let html = self.fetcher.fetch_page(url).await?;
        let body = body_text(&html)?;
        Ok(excerpt(&body))
    }
}

use async_trait::async_trait;
use nd_core::{Result, SearchProvider, Story};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const DEFAULT_BASE_URL: &str = "https://google.serper.dev";

#[derive(Serialize)]
struct SearchRequest {
    q: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(rename = "topStories", default)]
    top_stories: Vec<StoryEntry>,
}

#[derive(Deserialize)]
struct StoryEntry {
    title: String,
    link: String,
}

/// Client for the Serper search API, authenticated with a static key.
pub struct SerperClient {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
}

impl SerperClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Arc::new(Client::new()),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Builds the query string sent to the API for a topic
    pub fn search_query(topic: &str) -> String {
        format!("{} news", topic)
    }
}

impl fmt::Debug for SerperClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerperClient")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl SearchProvider for SerperClient {
    async fn top_stories(&self, topic: &str) -> Result<Vec<Story>> {
        let request = SearchRequest {
            q: Self::search_query(topic),
        };

        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .header("X-API-KEY", &self.api_key)
            .json(&request)
            .send()
            .await?
            .json::<SearchResponse>()
            .await?;

        Ok(response
            .top_stories
            .into_iter()
            .map(|entry| Story {
                title: entry.title,
                link: entry.link,
            })
            .collect())
    }
}

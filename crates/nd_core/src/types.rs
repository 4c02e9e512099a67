use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One candidate entry as returned by the search API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub link: String,
}

/// A retrieved article: title, normalized base URL and a bounded excerpt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopStory {
    pub title: String,
    pub source: String,
    pub text: String,
}

/// Envelope handed to the categorization step, serialized as
/// `{"top_stories": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopStories {
    pub top_stories: Vec<TopStory>,
}

/// The formatted digest returned to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Digest {
    pub topic: String,
    pub text: String,
    pub generated_at: DateTime<Utc>,
}

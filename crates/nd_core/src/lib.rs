pub mod error;
pub mod models;
pub mod search;
pub mod types;

pub use error::Error;
pub use models::ChatModel;
pub use search::{PageFetcher, SearchProvider};
pub use types::{Digest, Story, TopStories, TopStory};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::models::ChatModel;
    pub use crate::search::{PageFetcher, SearchProvider};
    pub use crate::types::{Digest, Story, TopStories, TopStory};
    pub use crate::{Error, Result};
}

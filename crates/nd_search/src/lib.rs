pub mod excerpt;
pub mod fetcher;
pub mod retriever;
pub mod serper;

pub use fetcher::HttpFetcher;
pub use retriever::Retriever;
pub use serper::SerperClient;

pub mod prelude {
    pub use crate::fetcher::HttpFetcher;
    pub use crate::retriever::Retriever;
    pub use crate::serper::SerperClient;
    pub use nd_core::{Error, Result, Story, TopStories, TopStory};
}

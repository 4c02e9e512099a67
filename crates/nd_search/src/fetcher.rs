use async_trait::async_trait;
use nd_core::{Error, PageFetcher, Result};
use scraper::{Html, Selector};

/// Fetches story pages with a plain GET, no redirect policy or user agent
/// beyond the reqwest defaults.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher;

impl HttpFetcher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = reqwest::get(url).await?;
        Ok(response.text().await?)
    }
}

/// Flattens the `<body>` of a document into a single whitespace-normalized
/// string.
pub fn body_text(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("body")
        .map_err(|e| Error::Scraping(format!("Invalid selector: {}", e)))?;

    let body = document
        .select(&selector)
        .next()
        .ok_or_else(|| Error::Scraping("Document has no body".to_string()))?;

    Ok(body
        .text()
        .flat_map(|t| t.split_whitespace())
        .collect::<Vec<_>>()
        .join(" "))
}

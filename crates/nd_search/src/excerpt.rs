use url::Url;

/// Upper bound on the excerpt taken from a scraped page body.
pub const EXCERPT_CHARS: usize = 1000;

/// Slices a window of at most [`EXCERPT_CHARS`] characters centered near
/// the midpoint of the body text. Counted in chars, so multi-byte pages
/// never split a code point.
pub fn excerpt(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let start = (chars.len() / 2).saturating_sub(EXCERPT_CHARS / 2);
    chars[start..].iter().take(EXCERPT_CHARS).collect()
}

/// Normalizes a story link to its base URL: the prefix up to and including
/// the first `.com`, falling back to `scheme://host` for other domains.
pub fn normalize_source(link: &str) -> String {
    if let Some(idx) = link.find(".com") {
        return link[..idx + ".com".len()].to_string();
    }

    match Url::parse(link) {
        Ok(url) => match url.host_str() {
            Some(host) => format!("{}://{}", url.scheme(), host),
            None => link.to_string(),
        },
        Err(_) => link.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_never_exceeds_limit() {
        let text = "x".repeat(5000);
        assert_eq!(excerpt(&text).chars().count(), EXCERPT_CHARS);

        let short = "just a short body";
        assert_eq!(excerpt(short), short);
    }

    #[test]
    fn test_excerpt_is_centered() {
        // 3000 chars, midpoint at 1500: window should start at 1000
        let text: String = (0..3000).map(|i| ((i % 26) as u8 + b'a') as char).collect();
        let window = excerpt(&text);
        assert_eq!(window.chars().count(), EXCERPT_CHARS);
        assert_eq!(window, &text[1000..2000]);
    }

    #[test]
    fn test_excerpt_short_text_kept_whole() {
        let text = "a".repeat(999);
        assert_eq!(excerpt(&text), text);
    }

    #[test]
    fn test_excerpt_multibyte_safe() {
        let text = "ñ".repeat(2500);
        let window = excerpt(&text);
        assert_eq!(window.chars().count(), EXCERPT_CHARS);
        assert!(window.chars().all(|c| c == 'ñ'));
    }

    #[test]
    fn test_normalize_source_com_prefix() {
        assert_eq!(
            normalize_source("https://www.example.com/news/story-123"),
            "https://www.example.com"
        );
        assert_eq!(
            normalize_source("http://news.site.com.br/a"),
            "http://news.site.com"
        );
    }

    #[test]
    fn test_normalize_source_is_link_prefix() {
        let link = "https://edition.cnn.com/2024/05/01/art/story.html";
        let source = normalize_source(link);
        assert!(link.starts_with(&source));
        assert!(source.ends_with(".com"));
    }

    #[test]
    fn test_normalize_source_non_com_host() {
        assert_eq!(
            normalize_source("https://www.bbc.co.uk/news/story"),
            "https://www.bbc.co.uk"
        );
    }

    #[test]
    fn test_normalize_source_unparseable() {
        assert_eq!(normalize_source("not a url"), "not a url");
    }
}

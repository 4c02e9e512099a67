//! Role prompts for the three pipeline steps.

/// System prompt for the topic-extraction role.
pub const TOPIC_EXTRACTOR: &str = "\
You retrieve the topic of the question from the question provided by the user.

Examples:
Question: What are the latest news about fashion?
Topic: Fashion

Question: Tell me about latest cryptocurrency trends.
Topic: Cryptocurrency

Respond with a single line in the form `Topic: <topic>`.";

/// System prompt for the categorization/formatting role. The date is
/// rendered into the digest header.
pub fn categorizer(today: &str) -> String {
    format!(
        "\
You analyze top stories texts, combine each text with its title and summarize \
them into 1-2 sentences (these 1-2 sentences should contain the most \
representative information about the article and sound like a news title that \
summarizes the article).
Then you divide them into 2-4 categories by theme.
If there are no titles in a category, do not include it in the returned result text.
Do not duplicate sources and include only valid links in the specified format.

Ensure all sources are valid URLs in the format www.source.com. Do not include \
any source with invalid URLs or that does not meet this format. Do not include \
links within the text; list them only in the sources section.

Return output in the format (where topic is the topic that was questioned by \
the user), with no additional text or introduction:

*Topic news {today}:*

Category Name:
- Title
- Title
- ...

Category Name:
- Title
- Title
- ...

Sources:
- www.source.com
- ...

Respond only with the formatted text. Do not include any phrases like \"Here \
is the formatted output\" or any other introductory or concluding text."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorizer_embeds_date() {
        let prompt = categorizer("01.05.2026");
        assert!(prompt.contains("*Topic news 01.05.2026:*"));
        assert!(prompt.contains("Sources:"));
    }
}

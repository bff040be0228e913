use crate::types::Article;

/// Derive the visible subset of an aggregated feed for a keyword query.
///
/// Pure and synchronous. A whitespace-only query returns the feed unchanged;
/// otherwise the subset whose titles contain the query case-insensitively,
/// in the feed's order. Applying the same query twice yields the same list.
pub fn visible_subset(articles: &[Article], query: &str) -> Vec<Article> {
    let query = query.trim();
    if query.is_empty() {
        return articles.to_vec();
    }
    let needle = query.to_lowercase();
    articles
        .iter()
        .filter(|article| article.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PLACEHOLDER_IMAGE;

    fn feed() -> Vec<Article> {
        ["OpenAI ships new model", "Markets rally", "AI chips in demand"]
            .iter()
            .map(|title| Article {
                title: title.to_string(),
                url: format!("https://example.com/{title}"),
                published_at: "2024-01-01T00:00:00Z".to_string(),
                image: PLACEHOLDER_IMAGE.to_string(),
            })
            .collect()
    }

    #[test]
    fn empty_and_whitespace_queries_return_the_feed_unchanged() {
        let articles = feed();
        assert_eq!(visible_subset(&articles, ""), articles);
        assert_eq!(visible_subset(&articles, "   "), articles);
    }

    #[test]
    fn matching_is_case_insensitive_and_order_preserving() {
        let articles = feed();
        let visible = visible_subset(&articles, "ai");
        let titles: Vec<&str> = visible.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["OpenAI ships new model", "AI chips in demand"]);
    }

    #[test]
    fn non_matching_query_yields_empty_subset() {
        assert!(visible_subset(&feed(), "cricket").is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let articles = feed();
        let once = visible_subset(&articles, "AI");
        let twice = visible_subset(&once, "AI");
        assert_eq!(once, twice);
    }

    #[test]
    fn output_is_a_subset_of_the_input() {
        let articles = feed();
        for visible in visible_subset(&articles, "model") {
            assert!(articles.contains(&visible));
        }
    }
}

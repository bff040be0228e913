pub mod gnews;
pub mod mediastack;
pub mod newsdata;

use crate::types::{AggregatorError, Article, Provider, Result, SearchParams, PLACEHOLDER_IMAGE};
use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

pub use gnews::GNewsSource;
pub use mediastack::MediastackSource;
pub use newsdata::NewsDataSource;

/// Trait for pulling articles from a single news provider's API.
///
/// An implementation makes exactly one outbound request per `fetch` call and
/// never retries internally; retry and partial-failure policy belong to the
/// aggregator.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Which provider this adapter talks to.
    fn provider(&self) -> Provider;

    /// Fetch one page of articles matching the search parameters, mapped to
    /// the canonical shape.
    async fn fetch(&self, client: &Client, search: &SearchParams) -> Result<Vec<Article>>;
}

/// Reject a non-success response before touching its body.
pub(crate) fn ensure_success(provider: Provider, response: Response) -> Result<Response> {
    let status = response.status();
    if !status.is_success() {
        return Err(AggregatorError::Status {
            provider,
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }
    Ok(response)
}

/// Decode a provider body, tagging parse failures with the provider.
pub(crate) fn decode_body<T: serde::de::DeserializeOwned>(
    provider: Provider,
    body: &str,
) -> Result<T> {
    serde_json::from_str(body).map_err(|source| AggregatorError::Parse { provider, source })
}

/// Assemble a canonical article from loosely-typed raw fields. Items with no
/// usable title or no parseable link are dropped; a missing image becomes
/// the placeholder.
pub(crate) fn normalize_item(
    provider: Provider,
    title: Option<String>,
    url: Option<String>,
    published_at: Option<String>,
    image: Option<String>,
) -> Option<Article> {
    let title = title.filter(|t| !t.trim().is_empty());
    let url = url.filter(|u| url::Url::parse(u).is_ok());
    let (title, url) = match (title, url) {
        (Some(title), Some(url)) => (title, url),
        _ => {
            debug!(%provider, "dropping raw item without title or dereferenceable url");
            return None;
        }
    };
    Some(Article {
        title,
        url,
        published_at: published_at.unwrap_or_default(),
        image: image
            .filter(|i| !i.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_drops_items_without_title_or_url() {
        assert!(normalize_item(
            Provider::GNews,
            None,
            Some("https://example.com".to_string()),
            None,
            None,
        )
        .is_none());

        assert!(normalize_item(
            Provider::GNews,
            Some("Title".to_string()),
            Some("  ".to_string()),
            None,
            None,
        )
        .is_none());
    }

    #[test]
    fn normalize_defaults_image_and_keeps_timestamp_verbatim() {
        let article = normalize_item(
            Provider::NewsData,
            Some("Title".to_string()),
            Some("https://example.com/a".to_string()),
            Some("not-a-date".to_string()),
            None,
        )
        .unwrap();

        assert_eq!(article.image, PLACEHOLDER_IMAGE);
        assert_eq!(article.published_at, "not-a-date");
    }

    #[test]
    fn normalize_treats_empty_image_as_absent() {
        let article = normalize_item(
            Provider::Mediastack,
            Some("Title".to_string()),
            Some("https://example.com/a".to_string()),
            None,
            Some(String::new()),
        )
        .unwrap();

        assert_eq!(article.image, PLACEHOLDER_IMAGE);
        assert_eq!(article.published_at, "");
    }
}

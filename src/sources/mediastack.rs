use super::{decode_body, ensure_success, normalize_item, NewsSource};
use crate::types::{Article, Provider, Result, SearchParams};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

const ENDPOINT: &str = "http://api.mediastack.com/v1/news";

/// Mediastack adapter. Articles live under the top-level `data` array with
/// snake_case field names; the API supports a server-side recency sort.
pub struct MediastackSource {
    access_key: String,
}

impl MediastackSource {
    pub fn new(access_key: String) -> Self {
        Self { access_key }
    }
}

#[derive(Debug, Deserialize)]
struct MediastackResponse {
    #[serde(default)]
    data: Vec<MediastackItem>,
}

#[derive(Debug, Deserialize)]
struct MediastackItem {
    title: Option<String>,
    url: Option<String>,
    published_at: Option<String>,
    image: Option<String>,
}

fn map_response(response: MediastackResponse) -> Vec<Article> {
    response
        .data
        .into_iter()
        .filter_map(|item| {
            normalize_item(
                Provider::Mediastack,
                item.title,
                item.url,
                item.published_at,
                item.image,
            )
        })
        .collect()
}

#[async_trait]
impl NewsSource for MediastackSource {
    fn provider(&self) -> Provider {
        Provider::Mediastack
    }

    async fn fetch(&self, client: &Client, search: &SearchParams) -> Result<Vec<Article>> {
        debug!(keywords = %search.keywords, "requesting mediastack news");
        let response = client
            .get(ENDPOINT)
            .query(&[
                ("access_key", self.access_key.as_str()),
                ("keywords", search.keywords.as_str()),
                ("languages", search.language.as_str()),
                ("limit", &search.limit.to_string()),
                ("sort", "published_desc"),
            ])
            .send()
            .await?;

        let response = ensure_success(self.provider(), response)?;
        let body = response.text().await?;
        let parsed: MediastackResponse = decode_body(self.provider(), &body)?;
        Ok(map_response(parsed))
    }
}

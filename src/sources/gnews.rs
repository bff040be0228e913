use super::{decode_body, ensure_success, normalize_item, NewsSource};
use crate::types::{Article, Provider, Result, SearchParams};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

const ENDPOINT: &str = "https://gnews.io/api/v4/search";

/// GNews adapter. Articles live under the top-level `articles` array with
/// camelCase field names; results come back newest-first by default.
pub struct GNewsSource {
    api_key: String,
}

impl GNewsSource {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

#[derive(Debug, Deserialize)]
struct GNewsResponse {
    #[serde(default)]
    articles: Vec<GNewsItem>,
}

#[derive(Debug, Deserialize)]
struct GNewsItem {
    title: Option<String>,
    url: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    image: Option<String>,
}

fn map_response(response: GNewsResponse) -> Vec<Article> {
    response
        .articles
        .into_iter()
        .filter_map(|item| {
            normalize_item(
                Provider::GNews,
                item.title,
                item.url,
                item.published_at,
                item.image,
            )
        })
        .collect()
}

#[async_trait]
impl NewsSource for GNewsSource {
    fn provider(&self) -> Provider {
        Provider::GNews
    }

    async fn fetch(&self, client: &Client, search: &SearchParams) -> Result<Vec<Article>> {
        debug!(keywords = %search.keywords, "requesting gnews articles");
        let response = client
            .get(ENDPOINT)
            .query(&[
                ("q", search.keywords.as_str()),
                ("lang", search.language.as_str()),
                ("max", &search.limit.to_string()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let response = ensure_success(self.provider(), response)?;
        let body = response.text().await?;
        let parsed: GNewsResponse = decode_body(self.provider(), &body)?;
        Ok(map_response(parsed))
    }
}

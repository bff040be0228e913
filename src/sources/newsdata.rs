use super::{decode_body, ensure_success, normalize_item, NewsSource};
use crate::types::{Article, Provider, Result, SearchParams};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

const ENDPOINT: &str = "https://newsdata.io/api/1/news";

/// NewsData.io adapter. Articles live under the top-level `results` array;
/// the link and image fields use this provider's own names, and `pubDate`
/// comes back as a space-separated timestamp rather than RFC 3339. The API
/// has no recency-sort parameter, so ordering is left to the aggregator.
pub struct NewsDataSource {
    api_key: String,
}

impl NewsDataSource {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

#[derive(Debug, Deserialize)]
struct NewsDataResponse {
    #[serde(default)]
    results: Vec<NewsDataItem>,
}

#[derive(Debug, Deserialize)]
struct NewsDataItem {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    image_url: Option<String>,
}

fn map_response(response: NewsDataResponse) -> Vec<Article> {
    response
        .results
        .into_iter()
        .filter_map(|item| {
            normalize_item(
                Provider::NewsData,
                item.title,
                item.link,
                item.pub_date,
                item.image_url,
            )
        })
        .collect()
}

#[async_trait]
impl NewsSource for NewsDataSource {
    fn provider(&self) -> Provider {
        Provider::NewsData
    }

    async fn fetch(&self, client: &Client, search: &SearchParams) -> Result<Vec<Article>> {
        debug!(keywords = %search.keywords, "requesting newsdata articles");
        let response = client
            .get(ENDPOINT)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("q", search.keywords.as_str()),
                ("language", search.language.as_str()),
            ])
            .send()
            .await?;

        let response = ensure_success(self.provider(), response)?;
        let body = response.text().await?;
        let parsed: NewsDataResponse = decode_body(self.provider(), &body)?;
        Ok(map_response(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PLACEHOLDER_IMAGE;

    #[test]
    fn maps_results_array_with_provider_field_names() {
        let body = r#"{
            "status": "success",
            "results": [
                {
                    "title": "Chip shortage easing",
                    "link": "https://example.com/chips",
                    "pubDate": "2024-05-06 07:08:09",
                    "image_url": null
                }
            ]
        }"#;

        let parsed: NewsDataResponse = serde_json::from_str(body).unwrap();
        let articles = map_response(parsed);

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].url, "https://example.com/chips");
        assert_eq!(articles[0].published_at, "2024-05-06 07:08:09");
        assert_eq!(articles[0].image, PLACEHOLDER_IMAGE);
        assert!(articles[0].parsed_published_at().is_some());
    }

    #[test]
    fn missing_results_field_means_zero_articles() {
        let parsed: NewsDataResponse =
            serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        assert!(map_response(parsed).is_empty());
    }
}

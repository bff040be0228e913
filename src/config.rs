use crate::types::{AggregatorError, Result, SearchParams};
use std::env;
use std::time::Duration;

/// Per-provider API credentials, read from the environment. Adapters are only
/// constructed for the credentials that are present; at least one is required.
#[derive(Debug, Clone, Default)]
pub struct ProviderCredentials {
    pub mediastack_access_key: Option<String>,
    pub gnews_api_key: Option<String>,
    pub newsdata_api_key: Option<String>,
}

impl ProviderCredentials {
    pub fn configured_count(&self) -> usize {
        [
            self.mediastack_access_key.is_some(),
            self.gnews_api_key.is_some(),
            self.newsdata_api_key.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: ProviderCredentials,
    pub search: SearchParams,
    pub http_timeout: Duration,
    pub user_agent: String,
}

impl AppConfig {
    /// Load configuration from the environment. Credentials are never
    /// hard-coded; a `.env` file is honored when present (loaded by main).
    pub fn from_env() -> Result<Self> {
        let credentials = ProviderCredentials {
            mediastack_access_key: non_empty_var("MEDIASTACK_ACCESS_KEY"),
            gnews_api_key: non_empty_var("GNEWS_API_KEY"),
            newsdata_api_key: non_empty_var("NEWSDATA_API_KEY"),
        };

        if credentials.configured_count() == 0 {
            return Err(AggregatorError::Config(
                "no provider credentials set; expected at least one of \
                 MEDIASTACK_ACCESS_KEY, GNEWS_API_KEY, NEWSDATA_API_KEY"
                    .to_string(),
            ));
        }

        let defaults = SearchParams::default();
        let search = SearchParams {
            keywords: non_empty_var("NEWS_KEYWORDS").unwrap_or(defaults.keywords),
            language: non_empty_var("NEWS_LANGUAGE").unwrap_or(defaults.language),
            limit: match non_empty_var("NEWS_LIMIT") {
                Some(raw) => raw.parse().map_err(|_| {
                    AggregatorError::Config(format!("NEWS_LIMIT is not a number: {raw}"))
                })?,
                None => defaults.limit,
            },
        };

        let http_timeout = match non_empty_var("HTTP_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(raw.parse().map_err(|_| {
                AggregatorError::Config(format!("HTTP_TIMEOUT_SECS is not a number: {raw}"))
            })?),
            None => Duration::from_secs(12),
        };

        Ok(Self {
            credentials,
            search,
            http_timeout,
            user_agent: format!("news-aggregator/{}", env!("CARGO_PKG_VERSION")),
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

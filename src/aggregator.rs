use crate::config::AppConfig;
use crate::sources::{GNewsSource, MediastackSource, NewsDataSource, NewsSource};
use crate::types::{AggregateOutcome, Article, ProviderFailure, SearchParams};
use futures::future;
use reqwest::Client;
use std::collections::HashSet;
use tracing::{error, info, warn};

/// Fans one search out to every configured provider, merges what comes back,
/// and produces the deduplicated, recency-ordered feed.
pub struct NewsAggregator {
    client: Client,
    sources: Vec<Box<dyn NewsSource>>,
}

impl NewsAggregator {
    /// Build the aggregator from configuration. Sources are instantiated in
    /// fixed priority order (Mediastack, GNews, NewsData); the credentials
    /// that are absent simply leave their provider out of the fan-out.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut sources: Vec<Box<dyn NewsSource>> = Vec::new();
        if let Some(key) = &config.credentials.mediastack_access_key {
            sources.push(Box::new(MediastackSource::new(key.clone())));
        }
        if let Some(key) = &config.credentials.gnews_api_key {
            sources.push(Box::new(GNewsSource::new(key.clone())));
        }
        if let Some(key) = &config.credentials.newsdata_api_key {
            sources.push(Box::new(NewsDataSource::new(key.clone())));
        }

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.http_timeout)
            .gzip(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, sources }
    }

    /// Build the aggregator over an explicit source list. Used by tests and
    /// by callers wiring custom providers.
    pub fn with_sources(client: Client, sources: Vec<Box<dyn NewsSource>>) -> Self {
        Self { client, sources }
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Run one aggregation cycle. All providers are queried concurrently and
    /// each outcome is collected independently; a provider failing only adds a
    /// failure record while the rest still contribute articles. The returned
    /// order is deterministic: concatenation follows provider priority, not
    /// response arrival.
    pub async fn run(&self, search: &SearchParams) -> AggregateOutcome {
        let requests = self.sources.iter().map(|source| {
            let client = &self.client;
            async move { (source.provider(), source.fetch(client, search).await) }
        });
        let settled = future::join_all(requests).await;

        let mut merged = Vec::new();
        let mut failures = Vec::new();
        for (provider, outcome) in settled {
            match outcome {
                Ok(articles) => {
                    info!(%provider, count = articles.len(), "provider returned articles");
                    merged.extend(articles);
                }
                Err(err) => {
                    warn!(%provider, error = %err, "provider failed, continuing without it");
                    failures.push(ProviderFailure {
                        provider,
                        error: err.to_string(),
                    });
                }
            }
        }

        let articles = sort_by_recency(dedup_by_title(merged));
        let outcome = AggregateOutcome {
            articles,
            failures,
            attempted: self.sources.len(),
        };
        if outcome.all_failed() {
            error!("{}", outcome.failure_summary());
        } else {
            info!(
                articles = outcome.articles.len(),
                failed_providers = outcome.failures.len(),
                "aggregation cycle complete"
            );
        }
        outcome
    }
}

/// Keep only the first occurrence of each exact title. Input order is the
/// provider priority order, so the highest-priority provider's copy wins.
fn dedup_by_title(articles: Vec<Article>) -> Vec<Article> {
    let mut seen = HashSet::new();
    articles
        .into_iter()
        .filter(|article| seen.insert(article.title.clone()))
        .collect()
}

/// Sort newest-first by parsed timestamp. The sort is stable and articles
/// with an unparseable timestamp order after every dated article, keeping
/// their relative order.
fn sort_by_recency(mut articles: Vec<Article>) -> Vec<Article> {
    articles.sort_by(|a, b| match (a.parsed_published_at(), b.parsed_published_at()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    articles
}

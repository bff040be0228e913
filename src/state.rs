use crate::aggregator::NewsAggregator;
use crate::filter::visible_subset;
use crate::types::{Article, SearchParams};
use tracing::{info, warn};

/// Lifecycle of one aggregation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    Idle,
    Loading,
    Success,
    Failure,
}

/// Owns the state of the aggregated feed for the view layer: the current
/// phase, the latest aggregate, the error message if the run failed, and the
/// user's filter query. The visible list is recomputed explicitly whenever
/// the aggregate or the query changes; nothing here is reactive.
pub struct NewsFeedState {
    phase: FeedPhase,
    articles: Vec<Article>,
    error: Option<String>,
    query: String,
    visible: Vec<Article>,
}

impl NewsFeedState {
    pub fn new() -> Self {
        Self {
            phase: FeedPhase::Idle,
            articles: Vec::new(),
            error: None,
            query: String::new(),
            visible: Vec::new(),
        }
    }

    /// Run one aggregation cycle and store its outcome. Success replaces the
    /// feed wholesale and clears any prior error; total provider failure
    /// keeps the last-known feed and records a user-facing message. Partial
    /// failure counts as success with no error banner.
    pub async fn refresh(&mut self, aggregator: &NewsAggregator, search: &SearchParams) {
        self.phase = FeedPhase::Loading;
        let outcome = aggregator.run(search).await;

        if outcome.all_failed() {
            let message = outcome.failure_summary();
            warn!("feed refresh failed: {message}");
            self.phase = FeedPhase::Failure;
            self.error = Some(message);
        } else {
            info!(articles = outcome.articles.len(), "feed refreshed");
            self.phase = FeedPhase::Success;
            self.articles = outcome.articles;
            self.error = None;
        }
        self.recompute_visible();
    }

    /// Update the filter query and re-derive the visible list.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute_visible();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> FeedPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FeedPhase::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The full aggregate from the latest successful run, unfiltered.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// The aggregate narrowed by the current query.
    pub fn visible_articles(&self) -> &[Article] {
        &self.visible
    }

    fn recompute_visible(&mut self) {
        self.visible = visible_subset(&self.articles, &self.query);
    }
}

impl Default for NewsFeedState {
    fn default() -> Self {
        Self::new()
    }
}

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback image used when a provider returns no usable image URL.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/400x200?text=AI+News";

/// The news providers this crate aggregates, in fixed priority order.
/// When two providers return an article with the same title, the copy from
/// the earlier-listed provider is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    Mediastack,
    GNews,
    NewsData,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Mediastack => write!(f, "mediastack"),
            Provider::GNews => write!(f, "gnews"),
            Provider::NewsData => write!(f, "newsdata"),
        }
    }
}

/// Canonical, provider-agnostic article shape. Raw provider payloads are
/// mapped into this at the adapter boundary and never retained past it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Non-empty; serves as the deduplication key (case-sensitive exact match).
    pub title: String,
    pub url: String,
    /// Kept verbatim as the provider delivered it. Some providers send
    /// stamps chrono cannot parse; those sort as the oldest rather than
    /// failing the pipeline.
    pub published_at: String,
    pub image: String,
}

impl Article {
    /// Parse the publication timestamp, trying RFC 3339 first and then the
    /// space-separated and date-only forms NewsData emits. `None` means the
    /// stamp is missing or unparseable.
    pub fn parsed_published_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.published_at.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            return Some(naive.and_utc());
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
        }
        None
    }
}

/// Search parameters shared by every adapter request.
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub keywords: String,
    pub language: String,
    pub limit: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            keywords: "AI".to_string(),
            language: "en".to_string(),
            limit: 10,
        }
    }
}

/// One provider's failure within an aggregation cycle. The other providers'
/// articles still make it into the merged result.
#[derive(Debug, Clone)]
pub struct ProviderFailure {
    pub provider: Provider,
    pub error: String,
}

/// The product of one aggregation cycle: unique articles in descending
/// recency order, plus the record of which providers failed. Treated as
/// immutable once produced; the next cycle replaces it wholesale.
#[derive(Debug, Clone, Default)]
pub struct AggregateOutcome {
    pub articles: Vec<Article>,
    pub failures: Vec<ProviderFailure>,
    /// Number of providers the cycle fanned out to.
    pub attempted: usize,
}

impl AggregateOutcome {
    /// True when every provider failed and nothing was aggregated.
    pub fn all_failed(&self) -> bool {
        self.attempted > 0 && self.failures.len() == self.attempted
    }

    /// Human-readable summary of the per-provider failures.
    pub fn failure_summary(&self) -> String {
        let parts: Vec<String> = self
            .failures
            .iter()
            .map(|f| format!("{}: {}", f.provider, f.error))
            .collect();
        format!("all news providers failed ({})", parts.join("; "))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AggregatorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} returned HTTP {status}: {message}")]
    Status {
        provider: Provider,
        status: u16,
        message: String,
    },

    #[error("{provider} response parse error: {source}")]
    Parse {
        provider: Provider,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AggregatorError>;

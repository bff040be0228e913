use news_aggregator::{AppConfig, NewsAggregator, NewsFeedState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;
    info!(
        providers = config.credentials.configured_count(),
        keywords = %config.search.keywords,
        "starting news aggregation cycle"
    );

    let aggregator = NewsAggregator::from_config(&config);
    let mut feed = NewsFeedState::new();

    // One fetch per process lifetime; refresh() is the re-trigger point if a
    // caller ever wants more.
    feed.refresh(&aggregator, &config.search).await;

    if let Some(message) = feed.error_message() {
        error!("{message}");
        anyhow::bail!("no articles could be fetched");
    }

    info!(articles = feed.articles().len(), "aggregated feed ready");
    for article in feed.visible_articles() {
        info!(
            published_at = %article.published_at,
            url = %article.url,
            "{}",
            article.title
        );
    }

    Ok(())
}

pub mod aggregator;
pub mod config;
pub mod filter;
pub mod sources;
pub mod state;
pub mod types;

pub use aggregator::NewsAggregator;
pub use config::AppConfig;
pub use filter::visible_subset;
pub use sources::NewsSource;
pub use state::{FeedPhase, NewsFeedState};
pub use types::*;

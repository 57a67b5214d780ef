pub mod error;
pub mod historical;
pub mod prediction;

pub use error::{FetchError, FetchResult};
pub use historical::HistoryClient;
pub use prediction::PredictionClient;

use std::time::Duration;

use async_trait::async_trait;
use replay_core::{DailyClose, TimeSeries};

/// Configuration for the market data API.
#[derive(Debug, Clone)]
pub struct MarketConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("MARKET_API_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Source of predicted price series.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    async fn fetch_series(&self, symbol: &str) -> FetchResult<TimeSeries>;
}

/// Source of historical daily closes.
#[async_trait]
pub trait HistorySource: Send + Sync {
    async fn fetch_closes(&self, symbol: &str, period: &str) -> FetchResult<Vec<DailyClose>>;
}

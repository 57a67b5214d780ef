use market_client::MarketConfig;

/// Runtime configuration, read from the environment with defaults matching
/// the original page.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub market: MarketConfig,
    /// Ticker symbol to animate.
    pub symbol: String,
    /// Period requested from the historical endpoint.
    pub period: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            market: MarketConfig::default(),
            symbol: std::env::var("CHART_SYMBOL").unwrap_or_else(|_| "AAPL".to_string()),
            period: std::env::var("CHART_PERIOD").unwrap_or_else(|_| "1y".to_string()),
        }
    }
}

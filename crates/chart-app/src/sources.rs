//! Fetch adapters: resolve a fetch and route the outcome to playback and to
//! the display regions.
//!
//! The prediction and historical fetches are independent; whichever resolves
//! last leaves its series bound to the controller. Last writer wins, with no
//! request-generation guard.

use std::sync::Arc;

use market_client::{HistorySource, SeriesSource};
use playback_engine::PlaybackDriver;
use replay_core::{HistorySink, HistoryUpdate, LiveValue, LiveValueSink, TimeSeries};

/// Fetch a fresh prediction and restart playback with it.
///
/// On failure the loaded series and cursor are left untouched and the live
/// display degrades to its fixed unavailable marker.
pub async fn refresh_prediction(
    source: &dyn SeriesSource,
    driver: &mut PlaybackDriver,
    live: &Arc<dyn LiveValueSink>,
    symbol: &str,
) {
    match source.fetch_series(symbol).await {
        Ok(series) => {
            let latest = series.latest().map(|(_, price)| price);
            driver.load(series).await;
            // Seed the readout with the newest prediction; the first tick
            // overwrites it.
            if let Some(price) = latest {
                live.show(LiveValue::Price(price));
            }
        }
        Err(err) => {
            tracing::warn!(%err, symbol, "prediction fetch failed");
            live.show(LiveValue::Unavailable);
        }
    }
}

/// Fetch historical closes, render the table, and bind the closes as the
/// playback series.
///
/// On failure the table degrades to its fixed marker and playback is left
/// undisturbed.
pub async fn refresh_history(
    source: &dyn HistorySource,
    driver: &mut PlaybackDriver,
    history: &Arc<dyn HistorySink>,
    symbol: &str,
    period: &str,
) {
    match source.fetch_closes(symbol, period).await {
        Ok(rows) => {
            let series = TimeSeries::from(rows.clone());
            history.show(HistoryUpdate::Loaded(rows));
            driver.load(series).await;
        }
        Err(err) => {
            tracing::warn!(%err, symbol, period, "historical fetch failed");
            history.show(HistoryUpdate::Unavailable);
        }
    }
}

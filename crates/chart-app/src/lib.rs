pub mod config;
pub mod controls;
pub mod display;
pub mod sources;

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use market_client::{HistoryClient, PredictionClient};
use playback_engine::{PlaybackController, PlaybackDriver};
use replay_core::{HistorySink, LiveValueSink, RenderSink};

use config::AppConfig;
use controls::Command;
use display::{spawn_clock, ConsoleChart, ConsoleHistory, ConsoleLive};
use sources::{refresh_history, refresh_prediction};

pub async fn run() -> anyhow::Result<()> {
    let config = AppConfig::default();
    tracing::info!(symbol = %config.symbol, api = %config.market.base_url, "starting chart app");

    let render: Arc<dyn RenderSink> = Arc::new(ConsoleChart::new(config.symbol.clone()));
    let live: Arc<dyn LiveValueSink> = Arc::new(ConsoleLive);
    let history_sink: Arc<dyn HistorySink> = Arc::new(ConsoleHistory);

    let prediction = PredictionClient::new(config.market.base_url.clone(), config.market.timeout);
    let history = HistoryClient::new(config.market.base_url.clone(), config.market.timeout);

    let controller = PlaybackController::new(render, Arc::clone(&live));
    let mut driver = PlaybackDriver::new(controller);

    let clock = spawn_clock();

    // Initial fetches. Each binds its series when it resolves; the later one
    // wins the buffer.
    refresh_prediction(&prediction, &mut driver, &live, &config.symbol).await;
    refresh_history(
        &history,
        &mut driver,
        &history_sink,
        &config.symbol,
        &config.period,
    )
    .await;

    controls::print_help();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match controls::parse_command(&line) {
            Some(Command::TogglePlayPause) => {
                let playing = driver.toggle_play_pause().await;
                println!("{}", if playing { "playing" } else { "paused" });
            }
            Some(Command::SetSpeed(speed)) => {
                driver.set_speed(speed).await;
                println!("speed: {}x", driver.controller().lock().await.speed());
            }
            Some(Command::Export) => export_csv(&driver, &config.symbol).await?,
            Some(Command::RefreshPrediction) => {
                refresh_prediction(&prediction, &mut driver, &live, &config.symbol).await;
            }
            Some(Command::RefreshHistory(period)) => {
                let period = period.as_deref().unwrap_or(&config.period);
                refresh_history(&history, &mut driver, &history_sink, &config.symbol, period)
                    .await;
            }
            Some(Command::Help) => controls::print_help(),
            Some(Command::Quit) => break,
            None => println!("unrecognized input, 'h' lists commands"),
        }
    }

    clock.abort();
    Ok(())
}

async fn export_csv(driver: &PlaybackDriver, symbol: &str) -> anyhow::Result<()> {
    let series = driver.controller().lock().await.series().clone();
    if series.is_empty() {
        tracing::warn!("nothing loaded yet, skipping export");
        return Ok(());
    }
    let path = csv_export::export_filename(symbol);
    std::fs::write(&path, csv_export::to_csv(&series))?;
    println!("wrote {path}");
    Ok(())
}

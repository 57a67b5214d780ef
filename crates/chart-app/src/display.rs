//! Console renditions of the page's display regions.

use replay_core::{HistorySink, HistoryUpdate, LiveValue, LiveValueSink, RenderSink};

const SPARK_LEVELS: &[char] = &['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Draws the revealed prefix as a sparkline with the newest point spelled
/// out, standing in for the line chart.
pub struct ConsoleChart {
    symbol: String,
}

impl ConsoleChart {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}

impl RenderSink for ConsoleChart {
    fn render(&self, labels: &[String], values: &[f64]) {
        let (Some(date), Some(price)) = (labels.last(), values.last()) else {
            return;
        };
        println!(
            "{} {} {} ${price:.2}",
            self.symbol,
            sparkline(values),
            date
        );
    }
}

fn sparkline(values: &[f64]) -> String {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = (max - min).max(f64::EPSILON);
    values
        .iter()
        .map(|v| {
            let level = ((v - min) / span * (SPARK_LEVELS.len() - 1) as f64).round() as usize;
            SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
        })
        .collect()
}

/// Prints the live price readout.
pub struct ConsoleLive;

impl LiveValueSink for ConsoleLive {
    fn show(&self, value: LiveValue) {
        println!("Live: {value}");
    }
}

/// Prints the historical close table.
pub struct ConsoleHistory;

impl HistorySink for ConsoleHistory {
    fn show(&self, update: HistoryUpdate) {
        match update {
            HistoryUpdate::Loaded(rows) => {
                println!("{:<12} {:>10}", "Date", "Close");
                for row in &rows {
                    println!("{:<12} {:>10.2}", row.date, row.close);
                }
            }
            HistoryUpdate::Unavailable => println!("Could not load historical data."),
        }
    }
}

/// Independent one-second clock display; shares no state with playback.
pub fn spawn_clock() -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(std::time::Duration::from_secs(1));
        loop {
            ticker.tick().await;
            println!("{}", chrono::Local::now().format("%I:%M:%S %p"));
        }
    })
}

use crate::{HistoryUpdate, LiveValue};

/// Chart collaborator: accepts a prefix of the series and redraws.
pub trait RenderSink: Send + Sync {
    /// Replace the chart contents with `labels`/`values` and redraw.
    fn render(&self, labels: &[String], values: &[f64]);
}

/// Collaborator rendering the single current price as text.
pub trait LiveValueSink: Send + Sync {
    fn show(&self, value: LiveValue);
}

/// Collaborator rendering the historical close table.
pub trait HistorySink: Send + Sync {
    fn show(&self, update: HistoryUpdate);
}

//! Playback state machine for the animated price chart.
//!
//! The controller owns the cursor into the loaded series, the play/pause
//! flag and the speed setting, and pushes each revealed prefix to the render
//! and live-value sinks. It is deliberately free of any clock: a timer
//! drives it by calling [`PlaybackController::tick`], and tests drive it the
//! same way.

use std::sync::Arc;
use std::time::Duration;

use replay_core::{LiveValue, LiveValueSink, RenderSink, TimeSeries};

/// Slowest supported playback speed, in ticks per second.
pub const MIN_SPEED: u32 = 1;
/// Fastest supported playback speed, in ticks per second.
pub const MAX_SPEED: u32 = 10;
/// Speed used until the user moves the control.
pub const DEFAULT_SPEED: u32 = 5;

pub struct PlaybackController {
    series: TimeSeries,
    cursor: usize,
    playing: bool,
    speed: u32,
    render: Arc<dyn RenderSink>,
    live: Arc<dyn LiveValueSink>,
}

impl PlaybackController {
    /// New controller with no series loaded. Playback starts in the playing
    /// state so the first successful fetch animates immediately.
    pub fn new(render: Arc<dyn RenderSink>, live: Arc<dyn LiveValueSink>) -> Self {
        Self {
            series: TimeSeries::new(),
            cursor: 0,
            playing: true,
            speed: DEFAULT_SPEED,
            render,
            live,
        }
    }

    /// Bind a freshly fetched series and rewind the cursor.
    ///
    /// The play/pause flag is left as the user set it: a new fetch restarts
    /// the animation unless playback was explicitly paused.
    pub fn load(&mut self, series: TimeSeries) {
        tracing::debug!(points = series.len(), "series replaced, cursor rewound");
        self.series = series;
        self.cursor = 0;
    }

    /// Flip play/pause and return the new flag. The cursor is untouched.
    pub fn toggle_play_pause(&mut self) -> bool {
        self.playing = !self.playing;
        tracing::debug!(playing = self.playing, "play/pause toggled");
        self.playing
    }

    /// Store a new tick rate, clamped to `MIN_SPEED..=MAX_SPEED`.
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    /// Advance the animation by one step.
    ///
    /// Reveals one more point to the sinks and moves the cursor. Past the
    /// end of the series the cursor wraps to 0 and replay continues, so the
    /// animation loops until paused. Ticks are swallowed while paused or
    /// with no series loaded.
    pub fn tick(&mut self) {
        if !self.playing || self.series.is_empty() {
            return;
        }
        if self.cursor >= self.series.len() {
            tracing::debug!("series exhausted, restarting replay");
            self.cursor = 0;
        }

        let shown = self.cursor + 1;
        match self.series.prefix(shown) {
            Ok((labels, values)) => {
                self.render.render(labels, values);
                self.live.show(LiveValue::Price(values[shown - 1]));
                self.cursor = shown;
            }
            Err(err) => {
                // Unreachable while the cursor invariant holds.
                debug_assert!(false, "playback cursor out of range: {err}");
                tracing::error!(%err, "playback cursor out of range");
            }
        }
    }

    /// Delay between ticks at the current speed.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(1_000 / u64::from(self.speed))
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn series(&self) -> &TimeSeries {
        &self.series
    }
}

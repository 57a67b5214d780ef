//! Timer integration around [`PlaybackController`].
//!
//! The driver owns the recurring tick task. Every entry point that changes
//! the cadence aborts the previous task before spawning a new one, so at
//! most one timer is ever live and the cursor cannot race ahead under
//! stacked timers. Ticks and series rebinds serialize on the controller
//! mutex; `tick` holds the lock with no await point inside, so a tick never
//! observes a half-replaced series.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use replay_core::TimeSeries;

use crate::controller::PlaybackController;

pub struct PlaybackDriver {
    controller: Arc<Mutex<PlaybackController>>,
    timer: Option<JoinHandle<()>>,
}

impl PlaybackDriver {
    pub fn new(controller: PlaybackController) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
            timer: None,
        }
    }

    /// Shared handle to the underlying state machine.
    pub fn controller(&self) -> Arc<Mutex<PlaybackController>> {
        Arc::clone(&self.controller)
    }

    /// Bind a freshly fetched series and restart the animation, unless the
    /// user had paused.
    pub async fn load(&mut self, series: TimeSeries) {
        self.disarm();
        let playing = {
            let mut controller = self.controller.lock().await;
            controller.load(series);
            controller.is_playing()
        };
        if playing {
            self.arm().await;
        }
    }

    /// Flip play/pause; returns the new playing flag. Pausing guarantees no
    /// further ticks fire until the next re-arm.
    pub async fn toggle_play_pause(&mut self) -> bool {
        self.disarm();
        let playing = self.controller.lock().await.toggle_play_pause();
        if playing {
            self.arm().await;
        }
        playing
    }

    /// Change the tick rate. While playing, the timer is re-armed so the
    /// next tick fires one full period from now, not from the previous tick.
    pub async fn set_speed(&mut self, speed: u32) {
        let playing = {
            let mut controller = self.controller.lock().await;
            controller.set_speed(speed);
            controller.is_playing()
        };
        if playing {
            self.arm().await;
        }
    }

    async fn arm(&mut self) {
        self.disarm();
        let period = self.controller.lock().await.tick_period();
        let controller = Arc::clone(&self.controller);
        self.timer = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(period).await;
                controller.lock().await.tick();
            }
        }));
    }

    fn disarm(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for PlaybackDriver {
    fn drop(&mut self) {
        self.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use replay_core::{LiveValue, LiveValueSink, RenderSink};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Default)]
    struct CountingRender {
        renders: AtomicUsize,
    }

    impl RenderSink for CountingRender {
        fn render(&self, _labels: &[String], _values: &[f64]) {
            self.renders.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct NullLive;

    impl LiveValueSink for NullLive {
        fn show(&self, _value: LiveValue) {}
    }

    fn sample_series() -> TimeSeries {
        TimeSeries::from_parts(
            vec!["d1".into(), "d2".into(), "d3".into()],
            vec![10.0, 20.0, 30.0],
        )
        .unwrap()
    }

    fn driver() -> (PlaybackDriver, Arc<CountingRender>) {
        let render = Arc::new(CountingRender::default());
        let controller = PlaybackController::new(render.clone(), Arc::new(NullLive));
        (PlaybackDriver::new(controller), render)
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_ticks_at_current_speed() {
        let (mut driver, render) = driver();
        // Default speed 5 -> one tick every 200ms.
        driver.load(sample_series()).await;

        tokio::time::sleep(Duration::from_millis(1050)).await;
        assert_eq!(render.renders.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_stops_all_sink_writes() {
        let (mut driver, render) = driver();
        driver.load(sample_series()).await;

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(render.renders.load(Ordering::SeqCst), 1);

        assert!(!driver.toggle_play_pause().await);
        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(render.renders.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_speed_rearms_from_now() {
        let (mut driver, render) = driver();
        driver.load(sample_series()).await;

        // First tick lands at t=200ms.
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(render.renders.load(Ordering::SeqCst), 1);

        // New period is 500ms measured from the call at t=250ms, so the next
        // tick lands at t=750ms, not at 200+500=700ms.
        driver.set_speed(2).await;
        tokio::time::sleep(Duration::from_millis(450)).await;
        assert_eq!(render.renders.load(Ordering::SeqCst), 1);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(render.renders.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_while_paused_stays_disarmed() {
        let (mut driver, render) = driver();
        assert!(!driver.toggle_play_pause().await);

        driver.load(sample_series()).await;
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(render.renders.load(Ordering::SeqCst), 0);

        // Resuming picks the animation up from the start.
        assert!(driver.toggle_play_pause().await);
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(render.renders.load(Ordering::SeqCst), 1);
        assert_eq!(driver.controller().lock().await.cursor(), 1);
    }
}

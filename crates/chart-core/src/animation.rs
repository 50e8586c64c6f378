// File: crates/chart-core/src/animation.rs
// Summary: Reveal progress driver (delayed one-shot flip per data set) with easing tweens.
// Notes:
// - The driver is clock-injected: callers pass `now` so it can run inside any
//   event loop (or a test) without owning a timer.
// - The flip is a step from 0 to 1. `eased_progress` adds the interpolation a
//   renderer needs when it has no built-in attribute transitions.

use std::time::{Duration, Instant};

use serde::Deserialize;

use crate::series::SeriesId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    #[default]
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Interpolates `from -> to` over `duration` starting at `start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start: Instant,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn value_at(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.start).as_secs_f64();
        let t = elapsed / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

/// One reveal per data set: `on_data` arms a flip `delay` in the future, `tick`
/// fires it. A new data set before the deadline discards the pending flip.
#[derive(Clone, Debug)]
pub struct RevealDriver {
    delay: Duration,
    transition: Duration,
    easing: Easing,
    series: Option<SeriesId>,
    state: RevealState,
    deadline: Option<Instant>,
    revealed_at: Option<Instant>,
}

impl RevealDriver {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            transition: Duration::ZERO,
            easing: Easing::default(),
            series: None,
            state: RevealState::Hidden,
            deadline: None,
            revealed_at: None,
        }
    }

    pub fn with_transition(mut self, duration: Duration, easing: Easing) -> Self {
        self.transition = duration;
        self.easing = easing;
        self
    }

    pub fn delay(&self) -> Duration { self.delay }
    pub fn state(&self) -> RevealState { self.state }
    pub fn is_pending(&self) -> bool { self.deadline.is_some() }

    /// Register the current data set. Returns `true` when a new reveal was scheduled;
    /// the same data set again is a no-op.
    pub fn on_data(&mut self, series: SeriesId, now: Instant) -> bool {
        if self.series == Some(series) {
            return false;
        }
        if self.deadline.is_some() {
            tracing::debug!(series = series.get(), "data set changed before reveal; discarding pending flip");
        }
        self.series = Some(series);
        self.state = RevealState::Hidden;
        self.revealed_at = None;
        self.deadline = Some(now + self.delay);
        tracing::debug!(series = series.get(), delay_ms = self.delay.as_millis() as u64, "reveal scheduled");
        true
    }

    /// Fire the pending flip if its deadline has passed.
    pub fn tick(&mut self, now: Instant) -> RevealState {
        if let Some(deadline) = self.deadline {
            if now >= deadline {
                self.deadline = None;
                self.state = RevealState::Revealed;
                self.revealed_at = Some(deadline);
                tracing::debug!(series = self.series.map(|s| s.get()), "revealed");
            }
        }
        self.state
    }

    /// Drop a pending flip (teardown). A revealed chart stays revealed; a
    /// cancelled one forgets its data set so the next `on_data` reschedules.
    pub fn cancel(&mut self) {
        if self.deadline.take().is_some() {
            tracing::debug!(series = self.series.map(|s| s.get()), "pending reveal cancelled");
            self.series = None;
        }
    }

    /// Step progress: 0 until the flip, 1 after.
    pub fn progress(&self) -> f64 {
        match self.state {
            RevealState::Hidden => 0.0,
            RevealState::Revealed => 1.0,
        }
    }

    /// Progress with the transition interpolated from the flip instant.
    pub fn eased_progress(&self, now: Instant) -> f64 {
        match (self.state, self.revealed_at) {
            (RevealState::Revealed, Some(start)) => Tween {
                from: 0.0,
                to: 1.0,
                start,
                duration: self.transition,
                easing: self.easing,
            }
            .value_at(now),
            (RevealState::Revealed, None) => 1.0,
            (RevealState::Hidden, _) => 0.0,
        }
    }

    /// Next instant at which the caller should call `tick`/re-render, if any.
    pub fn next_wakeup(&self, now: Instant) -> Option<Instant> {
        if let Some(deadline) = self.deadline {
            return Some(deadline);
        }
        match self.revealed_at {
            Some(start) if self.state == RevealState::Revealed && now < start + self.transition => Some(now),
            _ => None,
        }
    }
}

#[cfg(feature = "timer")]
pub use timer::RevealTimer;

#[cfg(feature = "timer")]
mod timer {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::sync::watch;
    use tokio::task::JoinHandle;

    use crate::series::SeriesId;

    /// Async reveal timer. The pending flip is a spawned task owned by the
    /// timer: restarting for a new data set or dropping the timer aborts it.
    /// `restart` must be called from within a tokio runtime.
    pub struct RevealTimer {
        delay: Duration,
        tx: Arc<watch::Sender<f64>>,
        task: Option<JoinHandle<()>>,
        series: Option<SeriesId>,
    }

    impl RevealTimer {
        pub fn new(delay: Duration) -> Self {
            let (tx, _rx) = watch::channel(0.0);
            Self { delay, tx: Arc::new(tx), task: None, series: None }
        }

        pub fn subscribe(&self) -> watch::Receiver<f64> {
            self.tx.subscribe()
        }

        pub fn progress(&self) -> f64 {
            *self.tx.borrow()
        }

        /// Reset progress to 0 and schedule the flip for `series`. No-op for the
        /// data set already scheduled.
        pub fn restart(&mut self, series: SeriesId) {
            if self.series == Some(series) {
                return;
            }
            self.cancel();
            self.series = Some(series);
            self.tx.send_replace(0.0);
            let tx = Arc::clone(&self.tx);
            let delay = self.delay;
            self.task = Some(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                tx.send_replace(1.0);
                tracing::debug!(series = series.get(), "reveal timer fired");
            }));
        }

        /// Abort a pending flip. An unfired data set is forgotten so a later
        /// `restart` with the same id schedules again.
        pub fn cancel(&mut self) {
            if let Some(task) = self.task.take() {
                if !task.is_finished() {
                    tracing::debug!(series = self.series.map(|s| s.get()), "aborting pending reveal timer");
                }
                task.abort();
                if self.progress() < 1.0 {
                    self.series = None;
                }
            }
        }
    }

    impl Drop for RevealTimer {
        fn drop(&mut self) {
            self.cancel();
        }
    }
}

use gloo_timers::callback::{Interval, Timeout};
use shared::Scheduler;
use time::{Duration, OffsetDateTime};
use tracing::trace;

/// A scheduled browser timer. Dropping the task cancels it.
pub struct Task {
    label: &'static str,
    _interval: Option<Interval>,
    _timeout: Option<Timeout>,
}

impl Task {
    pub fn every<F: FnMut() + 'static>(label: &'static str, period: Duration, callback: F) -> Self {
        trace!(task = label, period_ms = millis(period), "task scheduled");
        Self {
            label,
            _interval: Some(Interval::new(millis(period), callback)),
            _timeout: None,
        }
    }

    pub fn after<F: FnOnce() + 'static>(label: &'static str, delay: Duration, callback: F) -> Self {
        trace!(task = label, delay_ms = millis(delay), "task scheduled");
        Self {
            label,
            _interval: None,
            _timeout: Some(Timeout::new(millis(delay), callback)),
        }
    }
}

impl Drop for Task {
    fn drop(&mut self) {
        trace!(task = self.label, "task cancelled");
    }
}

fn millis(d: Duration) -> u32 {
    d.whole_milliseconds().clamp(0, i128::from(u32::MAX)) as u32
}

/// Wall-clock scheduler backed by browser timers.
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Task = Task;

    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    fn every<F: FnMut() + 'static>(&self, label: &'static str, period: Duration, callback: F) -> Task {
        Task::every(label, period, callback)
    }

    fn after<F: FnOnce() + 'static>(&self, label: &'static str, delay: Duration, callback: F) -> Task {
        Task::after(label, delay, callback)
    }
}

use crate::timer::{FiredTimer, TimerHandle, TimerPurpose, TimerService};
use std::time::Duration;

/// Default wait for viewport resize bursts.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Collapses a burst of calls into the last value, delivered `wait` after the
/// burst goes quiet.
#[derive(Debug)]
pub struct Debouncer<V, S: TimerService> {
    wait: Duration,
    timers: S,
    pending: Option<(TimerHandle, V)>,
}

impl<V, S: TimerService> Debouncer<V, S> {
    pub fn new(wait: Duration, timers: S) -> Self {
        Self {
            wait,
            timers,
            pending: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Restarts the wait with `value` as the latest call.
    pub fn call(&mut self, value: V) {
        if let Some((handle, _)) = self.pending.take() {
            self.timers.cancel(handle);
        }
        let handle = self.timers.schedule(self.wait, TimerPurpose::Debounce);
        self.pending = Some((handle, value));
    }

    /// Yields the debounced value when `fired` is this debouncer's timer.
    pub fn on_timer(&mut self, fired: &FiredTimer) -> Option<V> {
        match &self.pending {
            Some((handle, _)) if *handle == fired.handle => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        if let Some((handle, _)) = self.pending.take() {
            self.timers.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::SharedTimers;

    #[test]
    fn bursts_collapse_to_last_value() {
        let timers = SharedTimers::new();
        let mut resize = Debouncer::new(RESIZE_DEBOUNCE, timers.clone());

        resize.call(800.0_f32);
        timers.advance(Duration::from_millis(100), |_| {});
        resize.call(900.0);
        timers.advance(Duration::from_millis(100), |_| {});
        resize.call(1200.0);

        let mut delivered = Vec::new();
        timers.advance(Duration::from_millis(249), |fired| delivered.extend(resize.on_timer(&fired)));
        assert!(delivered.is_empty());
        timers.advance(Duration::from_millis(1), |fired| delivered.extend(resize.on_timer(&fired)));
        assert_eq!(delivered, vec![1200.0]);
        assert!(!resize.is_pending());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn cancel_drops_pending_value() {
        let timers = SharedTimers::new();
        let mut debouncer = Debouncer::new(Duration::from_millis(10), timers.clone());
        debouncer.call("first");
        debouncer.cancel();

        let mut delivered = Vec::new();
        timers.advance(Duration::from_secs(1), |fired| delivered.extend(debouncer.on_timer(&fired)));
        assert!(delivered.is_empty());
    }
}

use crate::timer::{FiredTimer, TimerHandle, TimerPurpose, TimerService};
use std::time::Duration;

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, message: message.into() }
    }
}

/// Stack of transient notifications. Each toast removes itself once its own
/// timer expires; newer toasts sit below older ones.
#[derive(Debug)]
pub struct Toasts<S: TimerService> {
    duration: Duration,
    timers: S,
    shown: Vec<(TimerHandle, Toast)>,
}

impl<S: TimerService> Toasts<S> {
    pub fn new(duration: Duration, timers: S) -> Self {
        Self {
            duration,
            timers,
            shown: Vec::new(),
        }
    }

    pub fn show(&mut self, toast: Toast) {
        log::debug!("toast ({:?}): {}", toast.kind, toast.message);
        let handle = self.timers.schedule(self.duration, TimerPurpose::ToastExpiry);
        self.shown.push((handle, toast));
    }

    /// Drops the toast owned by `fired`. False for anyone else's timer.
    pub fn on_timer(&mut self, fired: &FiredTimer) -> bool {
        let Some(pos) = self.shown.iter().position(|(handle, _)| *handle == fired.handle) else {
            return false;
        };
        self.shown.remove(pos);
        true
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.shown.iter().map(|(_, toast)| toast)
    }

    pub fn len(&self) -> usize {
        self.shown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    pub fn clear(&mut self) {
        for (handle, _) in self.shown.drain(..) {
            self.timers.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::SharedTimers;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn each_toast_expires_on_its_own_clock() {
        let timers = SharedTimers::new();
        let mut toasts = Toasts::new(TOAST_DURATION, timers.clone());

        toasts.show(Toast::info("Subscribing..."));
        timers.advance(ms(1000), |fired| {
            toasts.on_timer(&fired);
        });
        toasts.show(Toast::success("Thank you for subscribing!"));
        assert_eq!(toasts.len(), 2);

        timers.advance(ms(2000), |fired| {
            toasts.on_timer(&fired);
        });
        let left: Vec<_> = toasts.visible().map(|t| t.message.as_str()).collect();
        assert_eq!(left, vec!["Thank you for subscribing!"]);

        timers.advance(ms(1000), |fired| {
            toasts.on_timer(&fired);
        });
        assert!(toasts.is_empty());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn foreign_timers_are_not_consumed() {
        let timers = SharedTimers::new();
        let mut other = timers.clone();
        let mut toasts = Toasts::new(TOAST_DURATION, timers.clone());
        toasts.show(Toast::error("Please enter a valid email address"));
        other.schedule(ms(10), TimerPurpose::Debounce);

        let mut consumed = Vec::new();
        timers.advance(TOAST_DURATION, |fired| consumed.push(toasts.on_timer(&fired)));
        assert_eq!(consumed, vec![false, true]);
    }

    #[test]
    fn clear_cancels_pending_expiries() {
        let timers = SharedTimers::new();
        let mut toasts = Toasts::new(TOAST_DURATION, timers.clone());
        toasts.show(Toast::info("a"));
        toasts.show(Toast::info("b"));

        toasts.clear();
        assert!(toasts.is_empty());
        assert_eq!(timers.pending_with(TimerPurpose::ToastExpiry), 0);
    }
}

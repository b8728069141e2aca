//! Timer contract used by every interactive component, plus a deterministic
//! virtual-time driver.
//!
//! Components never block on a timer. They ask a [`TimerService`] for a handle
//! and later receive a [`FiredTimer`] through their own `on_timer` method. The
//! host decides when time moves: the showcase advances [`SharedTimers`] by the
//! frame delta, tests advance it by hand.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::rc::Rc;
use std::time::Duration;

/// Repeating timers never fire more often than this.
const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// What a timer was armed for, so owners can sanity-check expiries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerPurpose {
    TransitionEnd,
    Autoplay,
    Debounce,
    ToastExpiry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiredTimer {
    pub handle: TimerHandle,
    pub purpose: TimerPurpose,
    /// Virtual time at which the timer expired.
    pub at: Duration,
}

pub trait TimerService {
    fn schedule(&mut self, delay: Duration, purpose: TimerPurpose) -> TimerHandle;
    fn schedule_repeating(&mut self, period: Duration, purpose: TimerPurpose) -> TimerHandle;
    /// Cancelling an unknown or already-fired handle is a no-op.
    fn cancel(&mut self, handle: TimerHandle);
}

/// An entry in the due-time queue
#[derive(Debug)]
struct Scheduled {
    due: Duration,
    seq: u64,
    handle: TimerHandle,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        // Earliest due first, then earliest scheduled first
        other.due.cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    purpose: TimerPurpose,
    period: Option<Duration>,
}

/// Deterministic timer queue driven by explicit `advance` calls.
#[derive(Debug, Default)]
pub struct VirtualTimers {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    queue: BinaryHeap<Scheduled>,
    armed: HashMap<TimerHandle, Armed>,
}

impl VirtualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of armed (not cancelled, not yet expired) timers.
    pub fn pending(&self) -> usize {
        self.armed.len()
    }

    pub fn pending_with(&self, purpose: TimerPurpose) -> usize {
        self.armed.values().filter(|a| a.purpose == purpose).count()
    }

    pub fn is_armed(&self, handle: TimerHandle) -> bool {
        self.armed.contains_key(&handle)
    }

    fn arm(&mut self, delay: Duration, armed: Armed) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.push(self.now + delay, handle);
        self.armed.insert(handle, armed);
        handle
    }

    fn push(&mut self, due: Duration, handle: TimerHandle) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Scheduled { due, seq, handle });
    }

    /// Pops the next timer due at or before `until`, moving the clock to its
    /// due time. Repeating timers are re-queued one period later.
    pub fn pop_due(&mut self, until: Duration) -> Option<FiredTimer> {
        loop {
            let due = self.queue.peek().map(|s| s.due)?;
            if due > until {
                return None;
            }
            let Some(entry) = self.queue.pop() else {
                return None;
            };

            // Cancelled timers leave stale queue entries behind
            let Some(armed) = self.armed.get(&entry.handle).copied() else {
                continue;
            };

            self.now = self.now.max(entry.due);
            match armed.period {
                Some(period) => self.push(entry.due + period, entry.handle),
                None => {
                    self.armed.remove(&entry.handle);
                }
            }

            return Some(FiredTimer {
                handle: entry.handle,
                purpose: armed.purpose,
                at: entry.due,
            });
        }
    }

    /// Moves the clock to `until` once nothing more is due.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Advances the clock by `by`, returning every expiry in due order.
    ///
    /// Expiries are collected before any owner reacts to them. Hosts that need
    /// each reaction to see the clock at its own expiry should use
    /// [`SharedTimers::advance`] instead.
    pub fn advance(&mut self, by: Duration) -> Vec<FiredTimer> {
        let until = self.now + by;
        let mut fired = Vec::new();
        while let Some(timer) = self.pop_due(until) {
            fired.push(timer);
        }
        self.settle(until);
        fired
    }
}

impl TimerService for VirtualTimers {
    fn schedule(&mut self, delay: Duration, purpose: TimerPurpose) -> TimerHandle {
        self.arm(delay, Armed { purpose, period: None })
    }

    fn schedule_repeating(&mut self, period: Duration, purpose: TimerPurpose) -> TimerHandle {
        let period = period.max(MIN_PERIOD);
        self.arm(period, Armed { purpose, period: Some(period) })
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.armed.remove(&handle);
    }
}

/// One virtual clock shared by every component on a page.
///
/// Single-threaded by construction: components keep a clone and the host
/// pumps expiries back to them.
#[derive(Debug, Clone, Default)]
pub struct SharedTimers(Rc<RefCell<VirtualTimers>>);

impl SharedTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.0.borrow().now()
    }

    pub fn pending(&self) -> usize {
        self.0.borrow().pending()
    }

    pub fn pending_with(&self, purpose: TimerPurpose) -> usize {
        self.0.borrow().pending_with(purpose)
    }

    pub fn is_armed(&self, handle: TimerHandle) -> bool {
        self.0.borrow().is_armed(handle)
    }

    /// Advances the clock by `by`, handing each expiry to `on_fire` in due
    /// order. Timers armed by `on_fire` itself fire within the same call when
    /// they come due before the end of the step.
    pub fn advance(&self, by: Duration, mut on_fire: impl FnMut(FiredTimer)) {
        let until = self.now() + by;
        loop {
            // Release the borrow before the owner re-enters the timer service
            let next = self.0.borrow_mut().pop_due(until);
            match next {
                Some(fired) => on_fire(fired),
                None => break,
            }
        }
        self.0.borrow_mut().settle(until);
    }
}

impl TimerService for SharedTimers {
    fn schedule(&mut self, delay: Duration, purpose: TimerPurpose) -> TimerHandle {
        self.0.borrow_mut().schedule(delay, purpose)
    }

    fn schedule_repeating(&mut self, period: Duration, purpose: TimerPurpose) -> TimerHandle {
        self.0.borrow_mut().schedule_repeating(period, purpose)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.0.borrow_mut().cancel(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn one_shot_fires_once() {
        let mut timers = VirtualTimers::new();
        let handle = timers.schedule(ms(500), TimerPurpose::TransitionEnd);

        assert!(timers.advance(ms(499)).is_empty());
        let fired = timers.advance(ms(1));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].handle, handle);
        assert_eq!(fired[0].at, ms(500));
        assert!(timers.advance(ms(5000)).is_empty());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn repeating_fires_every_period() {
        let mut timers = VirtualTimers::new();
        timers.schedule_repeating(ms(100), TimerPurpose::Autoplay);

        let fired = timers.advance(ms(350));
        let times: Vec<_> = fired.iter().map(|f| f.at).collect();
        assert_eq!(times, vec![ms(100), ms(200), ms(300)]);
        assert_eq!(timers.pending(), 1);
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut timers = VirtualTimers::new();
        let a = timers.schedule(ms(10), TimerPurpose::Debounce);
        let b = timers.schedule_repeating(ms(10), TimerPurpose::Autoplay);
        timers.cancel(a);
        timers.cancel(b);
        timers.cancel(b);

        assert!(timers.advance(ms(100)).is_empty());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn ties_fire_in_schedule_order() {
        let mut timers = VirtualTimers::new();
        let first = timers.schedule(ms(50), TimerPurpose::Debounce);
        let second = timers.schedule(ms(50), TimerPurpose::TransitionEnd);

        let fired = timers.advance(ms(50));
        assert_eq!(fired[0].handle, first);
        assert_eq!(fired[1].handle, second);
    }

    #[test]
    fn shared_timers_fire_nested_schedules_in_same_step() {
        let timers = SharedTimers::new();
        let mut scheduler = timers.clone();
        scheduler.schedule(ms(10), TimerPurpose::Debounce);

        let mut seen = Vec::new();
        timers.advance(ms(100), |fired| {
            seen.push(fired.at);
            if fired.purpose == TimerPurpose::Debounce {
                scheduler.schedule(ms(20), TimerPurpose::TransitionEnd);
            }
        });

        assert_eq!(seen, vec![ms(10), ms(30)]);
        assert_eq!(timers.now(), ms(100));
    }
}

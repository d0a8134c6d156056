//! Repeating timers with scoped release.
//!
//! A [`Scheduler`] hands out a [`TimerHandle`] for every repeating timer it
//! starts. [`CounterAnimation`] owns the Hero's handle and cancels it exactly
//! once: on [`CounterAnimation::stop`] or when dropped, whichever comes first.
//! Cancelling consumes the handle, so a double cancel does not type-check.
//!
//! Two schedulers ship with the crate:
//!
//! - [`IntervalScheduler`] - the browser's `setInterval`, through Leptos helpers
//! - [`manual::ManualScheduler`] - a deterministic event loop driven by
//!   [`advance`](manual::ManualScheduler::advance), for headless hosts and tests

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use thiserror::Error;

use crate::state::BookCounter;

/// Failure to start a repeating timer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// A zero period would tick without end.
    #[error("timer period must be non-zero")]
    ZeroPeriod,
    /// The host could not schedule the interval (e.g. no window).
    #[error("host refused a {period:?} interval: {reason}")]
    Refused {
        /// Period that was asked for.
        period: Duration,
        /// Host's explanation.
        reason: String,
    },
}

/// A running repeating timer.
pub trait TimerHandle {
    /// Stop the timer. The callback never runs again afterwards.
    fn cancel(self);
}

/// Host capability: run `tick` every `period` until the handle is cancelled.
///
/// The first tick fires one full period after scheduling. Ticks run to
/// completion on the host's single event loop.
pub trait Scheduler {
    /// Handle returned for each started timer.
    type Handle: TimerHandle;

    /// Start a repeating timer. Fails on a zero `period` or when the host
    /// refuses.
    fn every<F>(&self, period: Duration, tick: F) -> Result<Self::Handle, TimerError>
    where
        F: Fn() + 'static;
}

/// Somewhere the Hero's counter lives between ticks.
pub trait CounterStore {
    /// Mutate the stored counter in place.
    fn apply(&self, change: impl FnOnce(&mut BookCounter));
}

impl CounterStore for RwSignal<BookCounter> {
    fn apply(&self, change: impl FnOnce(&mut BookCounter)) {
        // Settled ticks leave the value alone and should not wake subscribers.
        self.maybe_update(|counter| {
            let before = *counter;
            change(counter);
            *counter != before
        });
    }
}

impl CounterStore for Rc<RefCell<BookCounter>> {
    fn apply(&self, change: impl FnOnce(&mut BookCounter)) {
        change(&mut self.borrow_mut());
    }
}

/// The Hero's running counter animation.
///
/// Ticks keep arriving after the counter settles at [`BookCounter::CAP`]; they
/// are no-ops. The timer itself is only released on teardown.
#[must_use = "dropping the animation cancels its timer"]
pub struct CounterAnimation<H: TimerHandle> {
    handle: Option<H>,
}

impl<H: TimerHandle> CounterAnimation<H> {
    /// Start ticking `store` every [`BookCounter::INTERVAL`].
    pub fn start<S, C>(scheduler: &S, store: C) -> Result<Self, TimerError>
    where
        S: Scheduler<Handle = H>,
        C: CounterStore + 'static,
    {
        let handle =
            scheduler.every(BookCounter::INTERVAL, move || store.apply(BookCounter::tick))?;
        Ok(Self {
            handle: Some(handle),
        })
    }

    /// False once stopped.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Tear the animation down now instead of at drop.
    pub fn stop(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }
}

impl<H: TimerHandle> Drop for CounterAnimation<H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// `setInterval` on the browser window.
///
/// Only usable where a window exists; scheduling happens inside effects, which
/// never run during server rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler;

impl TimerHandle for IntervalHandle {
    fn cancel(self) {
        self.clear();
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = IntervalHandle;

    fn every<F>(&self, period: Duration, tick: F) -> Result<Self::Handle, TimerError>
    where
        F: Fn() + 'static,
    {
        if period.is_zero() {
            return Err(TimerError::ZeroPeriod);
        }
        set_interval_with_handle(tick, period).map_err(|err| TimerError::Refused {
            period,
            reason: format!("{err:?}"),
        })
    }
}

/// Simulated time.
pub mod manual {

    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use std::time::Duration;

    use super::{Scheduler, TimerError, TimerHandle};

    struct Timer {
        id: u64,
        period: Duration,
        due: Duration,
        tick: Rc<dyn Fn()>,
    }

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: u64,
        timers: Vec<Timer>,
        cancelled: Vec<u64>,
    }

    /// Single-threaded event loop whose clock only moves on [`advance`](Self::advance).
    ///
    /// Clones share the same clock.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    /// Handle to a timer on a [`ManualScheduler`].
    #[derive(Debug)]
    pub struct ManualTimer {
        id: u64,
        clock: Weak<RefCell<Clock>>,
    }

    impl ManualScheduler {
        /// A scheduler at time zero with no timers.
        pub fn new() -> Self {
            Self::default()
        }

        /// Simulated time elapsed since creation.
        pub fn now(&self) -> Duration {
            self.clock.borrow().now
        }

        /// Timers started and not yet cancelled.
        pub fn active_timers(&self) -> usize {
            self.clock.borrow().timers.len()
        }

        /// How many times any handle from this scheduler was cancelled.
        pub fn cancellations(&self) -> usize {
            self.clock.borrow().cancelled.len()
        }

        /// Move the clock forward by `by`, firing every tick that falls due on
        /// the way in due-time order. Returns the number of ticks fired.
        pub fn advance(&self, by: Duration) -> usize {
            let target = self.now() + by;
            let mut fired = 0;

            loop {
                let next = {
                    let clock = self.clock.borrow();
                    clock
                        .timers
                        .iter()
                        .filter(|timer| timer.due <= target)
                        .min_by_key(|timer| (timer.due, timer.id))
                        .map(|timer| (timer.id, timer.due, Rc::clone(&timer.tick)))
                };
                let Some((id, due, tick)) = next else {
                    break;
                };

                {
                    let mut clock = self.clock.borrow_mut();
                    clock.now = due;
                    if let Some(timer) = clock.timers.iter_mut().find(|timer| timer.id == id) {
                        timer.due += timer.period;
                    }
                }

                // Clock is unborrowed here: ticks may cancel or schedule timers.
                tick();
                fired += 1;
            }

            self.clock.borrow_mut().now = target;
            fired
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualTimer;

        fn every<F>(&self, period: Duration, tick: F) -> Result<Self::Handle, TimerError>
        where
            F: Fn() + 'static,
        {
            if period.is_zero() {
                return Err(TimerError::ZeroPeriod);
            }
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + period;
            clock.timers.push(Timer {
                id,
                period,
                due,
                tick: Rc::new(tick),
            });
            Ok(ManualTimer {
                id,
                clock: Rc::downgrade(&self.clock),
            })
        }
    }

    impl TimerHandle for ManualTimer {
        fn cancel(self) {
            if let Some(clock) = self.clock.upgrade() {
                let mut clock = clock.borrow_mut();
                clock.timers.retain(|timer| timer.id != self.id);
                clock.cancelled.push(self.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn started() -> (
        ManualScheduler,
        Rc<RefCell<BookCounter>>,
        CounterAnimation<manual::ManualTimer>,
    ) {
        let scheduler = ManualScheduler::new();
        let books = Rc::new(RefCell::new(BookCounter::new()));
        let animation = CounterAnimation::start(&scheduler, Rc::clone(&books))
            .expect("manual scheduler accepts 20ms");
        (scheduler, books, animation)
    }

    #[test]
    fn counter_reaches_cap_after_two_seconds_and_stays() {
        let (scheduler, books, _animation) = started();

        assert_eq!(scheduler.advance(ms(2000)), 100);
        assert_eq!(books.borrow().value(), 10_000);

        scheduler.advance(ms(1000));
        assert_eq!(books.borrow().value(), 10_000);
        // Settled ticks still fire; the timer lives until teardown.
        assert_eq!(scheduler.active_timers(), 1);
    }

    #[test]
    fn count_matches_ticks_elapsed() {
        let (scheduler, books, _animation) = started();

        for n in 1..=120u64 {
            scheduler.advance(ms(20));
            assert_eq!(books.borrow().value(), (100 * n).min(10_000) as u32);
        }
    }

    #[test]
    fn first_tick_waits_a_full_period() {
        let (scheduler, books, _animation) = started();

        assert_eq!(scheduler.advance(ms(19)), 0);
        assert_eq!(books.borrow().value(), 0);
        assert_eq!(scheduler.advance(ms(1)), 1);
        assert_eq!(books.borrow().value(), 100);
    }

    #[test]
    fn teardown_cancels_once_and_freezes_state() {
        let (scheduler, books, animation) = started();
        scheduler.advance(ms(500));
        assert_eq!(books.borrow().value(), 2_500);

        drop(animation);
        assert_eq!(scheduler.cancellations(), 1);
        assert_eq!(scheduler.active_timers(), 0);

        assert_eq!(scheduler.advance(ms(1000)), 0);
        assert_eq!(books.borrow().value(), 2_500);
        assert_eq!(scheduler.cancellations(), 1);
    }

    #[test]
    fn stop_releases_before_drop() {
        let (scheduler, _books, animation) = started();
        assert!(animation.is_running());

        animation.stop();
        assert_eq!(scheduler.cancellations(), 1);
    }

    #[test]
    fn teardown_cancels_even_after_cap() {
        let (scheduler, books, animation) = started();
        scheduler.advance(ms(5000));
        assert!(books.borrow().is_settled());

        drop(animation);
        assert_eq!(scheduler.cancellations(), 1);
        assert_eq!(scheduler.active_timers(), 0);
    }

    #[test]
    fn zero_period_is_rejected() {
        let scheduler = ManualScheduler::new();
        let err = scheduler.every(Duration::ZERO, || {}).expect_err("zero period");
        assert_eq!(err, TimerError::ZeroPeriod);
    }

    #[test]
    fn timers_fire_in_due_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let fast_log = Rc::clone(&log);
        let _fast = scheduler
            .every(ms(20), move || fast_log.borrow_mut().push("fast"))
            .expect("schedule fast");
        let slow_log = Rc::clone(&log);
        let _slow = scheduler
            .every(ms(30), move || slow_log.borrow_mut().push("slow"))
            .expect("schedule slow");

        scheduler.advance(ms(60));
        assert_eq!(
            *log.borrow(),
            vec!["fast", "slow", "fast", "fast", "slow"]
        );
        assert_eq!(scheduler.now(), ms(60));
    }
}

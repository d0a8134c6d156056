//! Component-local state machines.
//!
//! Both machines are plain values. The components wrap them in signals; tests
//! drive them directly.

use std::time::Duration;

/// Header's two-state menu flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    /// Whether the collapsible navigation is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    #[cfg(test)]
    pub(crate) fn opened() -> Self {
        Self { open: true }
    }
}

/// Hero's monotonic bounded counter.
///
/// Starts at 0 and moves by [`BookCounter::STEP`] per tick until it reaches
/// [`BookCounter::CAP`], where it stays. The cap is a multiple of the step, so
/// the counter lands on it exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookCounter {
    count: u32,
}

impl BookCounter {
    /// Upper bound of the count.
    pub const CAP: u32 = 10_000;
    /// Increment applied per tick.
    pub const STEP: u32 = 100;
    /// Time between ticks.
    pub const INTERVAL: Duration = Duration::from_millis(20);
    /// Time from mount until the counter reaches [`BookCounter::CAP`].
    pub const SETTLE_TIME: Duration =
        Duration::from_millis(Self::INTERVAL.as_millis() as u64 * (Self::CAP / Self::STEP) as u64);

    /// A counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count.
    pub fn value(&self) -> u32 {
        self.count
    }

    /// True once the cap is reached; later ticks are no-ops.
    pub fn is_settled(&self) -> bool {
        self.count >= Self::CAP
    }

    /// Advance by one step, unless already at the cap.
    pub fn tick(&mut self) {
        if self.count < Self::CAP {
            self.count += Self::STEP;
        }
    }

    /// Counter value after `ticks` ticks from zero.
    pub fn after_ticks(ticks: u64) -> Self {
        let count = ticks
            .saturating_mul(u64::from(Self::STEP))
            .min(u64::from(Self::CAP));
        Self {
            count: count as u32,
        }
    }
}

//! Wall-clock budget for a single move selection.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Upper bound on how long a strategy may think; zero means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimeBudget(Option<Duration>);

impl TimeBudget {
    /// No time limit.
    pub const fn unlimited() -> Self {
        Self(None)
    }

    /// Limits thinking to `limit`. A zero duration is unlimited.
    pub fn from_duration(limit: Duration) -> Self {
        if limit.is_zero() {
            Self(None)
        } else {
            Self(Some(limit))
        }
    }

    /// Limits thinking to `ms` milliseconds. Zero is unlimited.
    pub fn from_millis(ms: u64) -> Self {
        Self::from_duration(Duration::from_millis(ms))
    }

    /// Returns the limit, `None` when unlimited.
    pub fn limit(self) -> Option<Duration> {
        self.0
    }

    /// Checks if no limit is set.
    pub fn is_unlimited(self) -> bool {
        self.0.is_none()
    }

    /// True once strictly more than the limit has elapsed since `start`.
    pub fn is_exceeded(self, start: Instant) -> bool {
        self.0.is_some_and(|limit| start.elapsed() > limit)
    }

    /// Time left since `start`; `None` when unlimited.
    pub fn remaining(self, start: Instant) -> Option<Duration> {
        self.0.map(|limit| limit.saturating_sub(start.elapsed()))
    }
}

impl From<Duration> for TimeBudget {
    fn from(limit: Duration) -> Self {
        Self::from_duration(limit)
    }
}

impl std::fmt::Display for TimeBudget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(limit) => write!(f, "{}ms", limit.as_millis()),
            None => write!(f, "unlimited"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_unlimited() {
        assert!(TimeBudget::from_millis(0).is_unlimited());
        assert!(TimeBudget::default().is_unlimited());
        assert!(!TimeBudget::unlimited().is_exceeded(Instant::now()));
    }

    #[test]
    fn test_elapsed_budget_is_exceeded() {
        let budget = TimeBudget::from_duration(Duration::from_nanos(1));
        let start = Instant::now();
        std::thread::sleep(Duration::from_millis(2));
        assert!(budget.is_exceeded(start));
        assert_eq!(budget.remaining(start), Some(Duration::ZERO));
    }

    #[test]
    fn test_generous_budget_not_exceeded() {
        let budget = TimeBudget::from_millis(60_000);
        assert!(!budget.is_exceeded(Instant::now()));
    }
}

//! Wall-clock instants for deadline checks.

use core::fmt;

/// Seconds since the Unix epoch.
///
/// Deadlines are evaluated exactly once, at operation entry, against a
/// caller-supplied current time. The pool itself never reads the system
/// clock, which keeps every operation deterministic; [`Timestamp::now`]
/// exists for callers that want the real clock.
///
/// # Examples
///
/// ```
/// use pair_pool::domain::Timestamp;
///
/// let deadline = Timestamp::from_secs(1_000);
/// assert!(deadline.is_expired_at(Timestamp::from_secs(1_001)));
/// assert!(!deadline.is_expired_at(Timestamp::from_secs(1_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates a `Timestamp` from seconds since the Unix epoch.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the underlying seconds value.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Treating `self` as a deadline: `true` once `now` is strictly past
    /// it. A call made exactly at the deadline is still accepted.
    #[must_use]
    pub const fn is_expired_at(&self, now: Timestamp) -> bool {
        now.0 > self.0
    }

    /// The current system time.
    ///
    /// A clock before the Unix epoch is treated as the epoch itself.
    #[must_use]
    pub fn now() -> Self {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self(secs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn from_secs_round_trip() {
        assert_eq!(Timestamp::from_secs(99).as_secs(), 99);
    }

    #[test]
    fn deadline_in_future_not_expired() {
        let deadline = Timestamp::from_secs(100);
        assert!(!deadline.is_expired_at(Timestamp::from_secs(50)));
    }

    #[test]
    fn deadline_exactly_now_not_expired() {
        let deadline = Timestamp::from_secs(100);
        assert!(!deadline.is_expired_at(Timestamp::from_secs(100)));
    }

    #[test]
    fn deadline_in_past_expired() {
        let deadline = Timestamp::from_secs(100);
        assert!(deadline.is_expired_at(Timestamp::from_secs(101)));
    }

    #[test]
    fn now_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(Timestamp::now().as_secs() > 1_577_836_800);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Timestamp::from_secs(5)), "5s");
    }
}

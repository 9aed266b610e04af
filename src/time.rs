//! Time abstraction traits for platform-agnostic timing.
//!
//! All session lengths and elapsed-time checks go through these traits; the
//! core never touches wall-clock or calendar time.

/// Trait for abstracting monotonic time sources.
///
/// `now()` must be non-decreasing. The epoch is arbitrary (typically process
/// start); only differences between instants are meaningful.
pub trait Clock {
    /// Instant type produced by this clock.
    type Instant: TimeInstant;

    /// Returns the current time instant.
    fn now(&self) -> Self::Instant;
}

/// Trait for blocking delays.
///
/// Used for the post-press settle delay and the alert tone burst. The core
/// only ever sleeps for short, fixed intervals.
pub trait Delay {
    /// Blocks for at least `ms` milliseconds.
    fn delay_ms(&mut self, ms: u64);
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Saturating subtraction (returns ZERO on underflow).
    fn saturating_sub(self, other: Self) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy + PartialOrd {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Adds duration to instant, returns None on overflow.
    fn checked_add(self, duration: Self::Duration) -> Option<Self>;

    /// Subtracts duration from instant, returns None on underflow.
    fn checked_sub(self, duration: Self::Duration) -> Option<Self>;
}

/// Shorthand for the duration type of a clock's instant.
pub type ClockDuration<C> = <<C as Clock>::Instant as TimeInstant>::Duration;

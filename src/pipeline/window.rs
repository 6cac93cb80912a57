// src/pipeline/window.rs

//! Poll window computation.
//!
//! The only state that survives a cycle is when we last asked the feed. The
//! first cycle looks back a fixed window; every later cycle asks "since my
//! previous invocation", so consecutive windows tile the timeline with no
//! gaps and no overlap.

use chrono::{DateTime, Duration, Utc};

/// Cross-cycle poll state, owned by the poll loop and advanced exactly once
/// per cycle before the fan-out starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollState {
    last_invoked: Option<DateTime<Utc>>,
}

impl PollState {
    /// Compute the window start for a cycle invoked at `now` and the state
    /// the next cycle starts from.
    pub fn advance(self, now: DateTime<Utc>, lookback: Duration) -> (DateTime<Utc>, PollState) {
        let window_start = self.last_invoked.unwrap_or(now - lookback);
        (
            window_start,
            PollState {
                last_invoked: Some(now),
            },
        )
    }

    /// When the feed was last polled, if ever.
    pub fn last_invoked(&self) -> Option<DateTime<Utc>> {
        self.last_invoked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_first_cycle_uses_lookback() {
        let now = at(10_000);
        let (start, _) = PollState::default().advance(now, Duration::hours(1));
        assert_eq!(start, now - Duration::hours(1));
    }

    #[test]
    fn test_later_cycles_window_since_previous_invocation() {
        let state = PollState::default();
        let (_, state) = state.advance(at(10_000), Duration::hours(1));
        let (start, state) = state.advance(at(10_015), Duration::hours(1));
        assert_eq!(start, at(10_000));
        let (start, _) = state.advance(at(10_030), Duration::hours(1));
        assert_eq!(start, at(10_015));
    }

    #[test]
    fn test_window_start_is_monotonic() {
        let mut state = PollState::default();
        let mut previous_start = None;
        for tick in 0..5 {
            let (start, next) = state.advance(at(10_000 + tick * 15), Duration::hours(1));
            if let Some(previous) = previous_start {
                assert!(start >= previous);
            }
            previous_start = Some(start);
            state = next;
        }
    }
}

//! Wall-clock limits for long solves.

use std::time::{Duration, Instant};

use stepwise_core::Observer;

use crate::traits::CanStopEarly;

/// Stops a solver at the first event observed after a point in time.
///
/// The check happens at loop boundaries only, so a single slow step or sweep
/// can run past the deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    /// `None` when the budget reaches past any representable instant.
    expires_at: Option<Instant>,
}

impl Deadline {
    /// A deadline `budget` from now.
    ///
    /// A budget too large to represent, such as `Duration::MAX`, never
    /// expires.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Self {
            expires_at: Instant::now().checked_add(budget),
        }
    }

    #[must_use]
    pub fn at(expires_at: Instant) -> Self {
        Self {
            expires_at: Some(expires_at),
        }
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() >= expires_at)
    }

    /// Time left before expiry, zero once expired and `Duration::MAX` for a
    /// deadline that never expires.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.expires_at.map_or(Duration::MAX, |expires_at| {
            expires_at.saturating_duration_since(Instant::now())
        })
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for Deadline {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.is_expired().then(A::stop_early)
    }
}

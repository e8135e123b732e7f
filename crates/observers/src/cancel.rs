//! Cooperative cancellation.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use stepwise_core::Observer;

use crate::traits::CanStopEarly;

/// A cloneable flag that stops any solver observing it.
///
/// Clones share the flag, so one clone can be handed to a solver while
/// another is kept by a controlling thread. Cancellation takes effect at the
/// next event the solver emits and cannot be undone.
///
/// # Example
///
/// ```rust
/// use stepwise_observers::CancelToken;
/// use stepwise_solvers::ode::{Status, TimeGrid, rk4};
///
/// let token = CancelToken::new();
/// let handle = token.clone();
/// std::thread::spawn(move || handle.cancel()).join().unwrap();
///
/// let grid = TimeGrid::new(0.0, 10.0, 0.01).unwrap();
/// let solution = rk4::solve(&|y: &f64, _t: f64| -y, 1.0, &grid, token).unwrap();
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert_eq!(solution.states.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation for every clone of this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for CancelToken {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.is_cancelled().then(A::stop_early)
    }
}

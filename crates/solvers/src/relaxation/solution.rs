use ndarray::Array2;

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The last sweep changed no value by more than the tolerance.
    Converged,

    /// Reached the sweep limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a relaxation solve.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The relaxed field, boundaries included.
    pub field: Array2<f64>,

    /// Number of full sweeps performed.
    pub sweeps: usize,

    /// Maximum absolute change of the last sweep, `None` if no sweep ran.
    pub change: Option<f64>,
}

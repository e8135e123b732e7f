use super::TimeGrid;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all steps on the grid.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// Outcome of the Newton correction for one implicit step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction {
    /// Newton iterations performed.
    pub iters: usize,

    /// Residual of the implicit equation at the accepted state.
    pub residual: f64,

    /// Whether `|residual|` reached the configured tolerance.
    pub converged: bool,
}

/// The result of a time integration.
///
/// `states` and `times` always have the same length, including when the
/// solver stopped early.
#[derive(Debug, Clone)]
pub struct Solution<S> {
    /// How the solver terminated.
    pub status: Status,

    /// Trajectory, starting with the initial state.
    pub states: Vec<S>,

    /// Grid times matching `states`.
    pub times: Vec<f64>,

    /// Number of integration steps completed.
    pub steps: usize,

    /// Per-step Newton corrections, empty unless the solver iterates.
    pub corrections: Vec<Correction>,
}

impl<S> Solution<S> {
    pub(super) fn new(
        status: Status,
        states: Vec<S>,
        grid: &TimeGrid,
        corrections: Vec<Correction>,
    ) -> Self {
        let times: Vec<f64> = grid.times().take(states.len()).collect();
        Self {
            status,
            steps: states.len().saturating_sub(1),
            states,
            times,
            corrections,
        }
    }

    /// Returns true if every Newton correction reached its tolerance.
    ///
    /// Solvers that do not iterate report no corrections and are always
    /// considered converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.corrections.iter().all(|correction| correction.converged)
    }

    /// Iterates over `(time, state)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &S)> {
        self.times.iter().copied().zip(&self.states)
    }
}

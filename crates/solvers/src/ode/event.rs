use super::Correction;

/// Event emitted by the ODE solvers for each point of the trajectory.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..=total are emitted after each integration step.
#[derive(Debug)]
pub struct Event<'a, S> {
    /// The step number (0 for initial, 1..=total for integration steps).
    pub step: usize,

    /// Total number of steps on the grid.
    pub total: usize,

    /// Grid time of this state.
    pub time: f64,

    /// The state at `time`.
    pub state: &'a S,

    /// Newton correction applied during this step.
    ///
    /// Only implicit solvers with linearization disabled report one.
    pub correction: Option<Correction>,
}

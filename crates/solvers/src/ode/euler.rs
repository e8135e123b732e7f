//! Explicit (forward) Euler solver.
//!
//! Steps the state forward with a single right-hand-side evaluation per
//! interval:
//!
//! ```text
//! y_{n+1} = y_n + dt * f(y_n, t_n)
//! ```
//!
//! First-order accurate. On stiff or strongly decaying problems the step must
//! satisfy the method's stability limit (for `y' = -λy`, `dt < 2/λ`).
//!
//! # Example
//!
//! ```
//! use stepwise_solvers::ode::{TimeGrid, euler};
//!
//! let grid = TimeGrid::new(0.0, 1.0, 0.1)?;
//! let solution = euler::solve_unobserved(&|y: &f64, _t: f64| -y, 1.0, &grid)?;
//!
//! assert_eq!(solution.states.len(), solution.times.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use stepwise_core::{Observer, OdeProblem, StepIntegrable};

use super::{
    Action, Error, Event, Solution, TimeGrid,
    march::{Advance, Stepper, march},
};

struct ForwardEuler;

impl<S: StepIntegrable> Stepper<S> for ForwardEuler {
    fn advance<P: OdeProblem<S>>(
        &mut self,
        problem: &P,
        state: &S,
        time: f64,
        dt: f64,
    ) -> Result<Advance<S>, Error> {
        let slope = problem.derivative(state, time).map_err(Error::problem)?;
        Ok(Advance::direct(state.step(&slope, dt)))
    }
}

/// Integrates an ODE problem using explicit Euler.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial state and after each
/// integration step, and may return [`Action::StopEarly`] to terminate the
/// integration early.
///
/// # Errors
///
/// Returns an error if the problem fails to evaluate the right-hand side.
pub fn solve<S, P, Obs>(
    problem: &P,
    initial: S,
    grid: &TimeGrid,
    observer: Obs,
) -> Result<Solution<S>, Error>
where
    S: StepIntegrable,
    P: OdeProblem<S>,
    Obs: for<'a> Observer<Event<'a, S>, Action>,
{
    march(problem, ForwardEuler, initial, grid, observer)
}

/// Integrates an ODE problem using explicit Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the problem fails to evaluate the right-hand side.
pub fn solve_unobserved<S, P>(problem: &P, initial: S, grid: &TimeGrid) -> Result<Solution<S>, Error>
where
    S: StepIntegrable,
    P: OdeProblem<S>,
{
    solve(problem, initial, grid, ())
}

//! Two-step Adams-Bashforth solver.
//!
//! AB2 combines the current slope with the slope cached from the previous
//! step:
//!
//! ```text
//! y_{n+1} = y_n + dt * (3/2 * f(y_n, t_n) - 1/2 * f(y_{n-1}, t_{n-1}))
//! ```
//!
//! No previous slope exists at the first grid point, so the first interval is
//! taken with one classical RK4 step. The slope `f(y_0, t_0)` evaluated for
//! that step is cached as the history for the first AB2 update, so each
//! interval costs a single new right-hand-side evaluation afterwards.

use stepwise_core::{DerivativeOf, Observer, OdeProblem, StepIntegrable};

use super::{
    Action, Error, Event, Solution, TimeGrid,
    march::{Advance, Stepper, march},
    rk4,
};

const CURRENT_WEIGHT: f64 = 1.5;
const PREVIOUS_WEIGHT: f64 = -0.5;

struct AdamsBashforth2<S: StepIntegrable> {
    previous: Option<DerivativeOf<S>>,
}

impl<S: StepIntegrable> Stepper<S> for AdamsBashforth2<S> {
    fn advance<P: OdeProblem<S>>(
        &mut self,
        problem: &P,
        state: &S,
        time: f64,
        dt: f64,
    ) -> Result<Advance<S>, Error> {
        let slope = problem.derivative(state, time).map_err(Error::problem)?;

        let next = match self.previous.take() {
            None => rk4::advance_from(problem, state, &slope, time, dt)?,
            Some(previous) => state
                .step(&slope, CURRENT_WEIGHT * dt)
                .step(&previous, PREVIOUS_WEIGHT * dt),
        };

        self.previous = Some(slope);
        Ok(Advance::direct(next))
    }
}

/// Integrates an ODE problem using two-step Adams-Bashforth.
///
/// The observer receives an [`Event`] for the initial state and after each
/// step (including the RK4 bootstrap step), and may return
/// [`Action::StopEarly`] to terminate early.
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
    let stepper = AdamsBashforth2 { previous: None };
    march(problem, stepper, initial, grid, observer)
}

/// Integrates an ODE problem using two-step Adams-Bashforth without observation.
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

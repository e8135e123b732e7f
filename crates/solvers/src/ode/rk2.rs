//! Second-order Runge-Kutta (midpoint) solver.
//!
//! Each interval uses two stage evaluations:
//!
//! ```text
//! k1 = dt * f(y_n, t_n)
//! k2 = dt * f(y_n + k1/2, t_n + dt/2)
//! y_{n+1} = y_n + k2
//! ```

use stepwise_core::{Observer, OdeProblem, StepIntegrable};

use super::{
    Action, Error, Event, Solution, TimeGrid,
    march::{Advance, Stepper, march},
};

struct Midpoint;

impl<S: StepIntegrable> Stepper<S> for Midpoint {
    fn advance<P: OdeProblem<S>>(
        &mut self,
        problem: &P,
        state: &S,
        time: f64,
        dt: f64,
    ) -> Result<Advance<S>, Error> {
        let half = 0.5 * dt;

        let k1 = problem.derivative(state, time).map_err(Error::problem)?;
        let midpoint = state.step(&k1, half);
        let k2 = problem
            .derivative(&midpoint, time + half)
            .map_err(Error::problem)?;

        Ok(Advance::direct(state.step(&k2, dt)))
    }
}

/// Integrates an ODE problem using the midpoint Runge-Kutta method.
///
/// The observer receives an [`Event`] for the initial state and after each
/// step, and may return [`Action::StopEarly`] to terminate early.
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
    march(problem, Midpoint, initial, grid, observer)
}

/// Integrates an ODE problem using the midpoint method without observation.
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

//! Classical fourth-order Runge-Kutta solver.
//!
//! Each interval uses four stage evaluations combined with the weights
//! `1/6, 1/3, 1/3, 1/6`:
//!
//! ```text
//! k1 = dt * f(y_n, t_n)
//! k2 = dt * f(y_n + k1/2, t_n + dt/2)
//! k3 = dt * f(y_n + k2/2, t_n + dt/2)
//! k4 = dt * f(y_n + k3, t_n + dt)
//! y_{n+1} = y_n + k1/6 + k2/3 + k3/3 + k4/6
//! ```

use stepwise_core::{DerivativeOf, Observer, OdeProblem, StepIntegrable};

use super::{
    Action, Error, Event, Solution, TimeGrid,
    march::{Advance, Stepper, march},
};

const SIXTH: f64 = 1.0 / 6.0;
const THIRD: f64 = 1.0 / 3.0;

struct ClassicalRk4;

impl<S: StepIntegrable> Stepper<S> for ClassicalRk4 {
    fn advance<P: OdeProblem<S>>(
        &mut self,
        problem: &P,
        state: &S,
        time: f64,
        dt: f64,
    ) -> Result<Advance<S>, Error> {
        let k1 = problem.derivative(state, time).map_err(Error::problem)?;
        advance_from(problem, state, &k1, time, dt).map(Advance::direct)
    }
}

/// Completes one RK4 step given the first stage slope `f(state, time)`.
///
/// Adams-Bashforth bootstraps through this function so its first step shares
/// the slope it caches for the multistep update.
pub(super) fn advance_from<S, P>(
    problem: &P,
    state: &S,
    k1: &DerivativeOf<S>,
    time: f64,
    dt: f64,
) -> Result<S, Error>
where
    S: StepIntegrable,
    P: OdeProblem<S>,
{
    let half = 0.5 * dt;
    let mid_time = time + half;

    let k2 = problem
        .derivative(&state.step(k1, half), mid_time)
        .map_err(Error::problem)?;
    let k3 = problem
        .derivative(&state.step(&k2, half), mid_time)
        .map_err(Error::problem)?;
    let k4 = problem
        .derivative(&state.step(&k3, dt), time + dt)
        .map_err(Error::problem)?;

    Ok(state
        .step(k1, SIXTH * dt)
        .step(&k2, THIRD * dt)
        .step(&k3, THIRD * dt)
        .step(&k4, SIXTH * dt))
}

/// Integrates an ODE problem using classical fourth-order Runge-Kutta.
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
    march(problem, ClassicalRk4, initial, grid, observer)
}

/// Integrates an ODE problem using RK4 without observation.
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

//! Backward (implicit) Euler solver for scalar states.
//!
//! ```text
//! y_{n+1} = y_n + dt * f(y_{n+1}, t_{n+1})
//! ```
//!
//! First-order accurate and L-stable: stiff components are damped rather
//! than oscillating, unlike Crank-Nicolson at large steps. Linearized and
//! Newton-refined modes behave exactly as in [`crank_nicolson`](super::crank_nicolson).

use stepwise_core::{Jacobian, Observer, OdeProblem};

use super::{Action, Error, Event, Solution, TimeGrid, implicit::Theta, march::march};

pub use super::implicit::{Config, ConfigError};

const THETA: f64 = 1.0;

/// Integrates a scalar ODE problem using backward Euler.
///
/// # Errors
///
/// Returns an error if the config is invalid, the problem or Jacobian fails
/// to evaluate, or the implicit update is singular.
pub fn solve<P, J, Obs>(
    problem: &P,
    jacobian: &J,
    initial: f64,
    grid: &TimeGrid,
    config: &Config,
    observer: Obs,
) -> Result<Solution<f64>, Error>
where
    P: OdeProblem<f64>,
    J: Jacobian,
    Obs: for<'a> Observer<Event<'a, f64>, Action>,
{
    config.validate()?;
    let stepper = Theta::new(THETA, jacobian, *config);
    march(problem, stepper, initial, grid, observer)
}

/// Integrates a scalar ODE problem using backward Euler without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid, the problem or Jacobian fails
/// to evaluate, or the implicit update is singular.
pub fn solve_unobserved<P, J>(
    problem: &P,
    jacobian: &J,
    initial: f64,
    grid: &TimeGrid,
    config: &Config,
) -> Result<Solution<f64>, Error>
where
    P: OdeProblem<f64>,
    J: Jacobian,
{
    solve(problem, jacobian, initial, grid, config, ())
}

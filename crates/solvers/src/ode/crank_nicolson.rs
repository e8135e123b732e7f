//! Crank-Nicolson (trapezoidal) solver for scalar states.
//!
//! Solves the implicit update
//!
//! ```text
//! y_{n+1} = y_n + (dt/2) * [f(y_{n+1}, t_{n+1}) + f(y_n, t_n)]
//! ```
//!
//! # Modes
//!
//! - **Linearized** (default, [`Config::linearize`] = `true`): the update is
//!   closed analytically with the Jacobian `dfdy`,
//!   `y_{n+1} = y_n + (dt/2) [f(y_n, t_{n+1}) + f(y_n, t_n)] / (1 - (dt/2) dfdy(y_n, t_{n+1}))`.
//!   Exact for right-hand sides linear in `y`, and unconditionally stable for
//!   linear decay.
//! - **Newton-refined** (`linearize = false`): the linearized value seeds a
//!   Newton iteration on the trapezoidal residual, using the derivative
//!   frozen at `y_n`. Each step reports a [`Correction`]; a step that
//!   exhausts [`Config::max_iters`] is accepted with `converged = false`, so
//!   check [`Solution::is_converged`](super::Solution::is_converged).
//!
//! [`Correction`]: super::Correction

use stepwise_core::{Jacobian, Observer, OdeProblem};

use super::{Action, Error, Event, Solution, TimeGrid, implicit::Theta, march::march};

pub use super::implicit::{Config, ConfigError};

const THETA: f64 = 0.5;

/// Integrates a scalar ODE problem using Crank-Nicolson.
///
/// The observer receives an [`Event`] for the initial state and after each
/// step (carrying the step's Newton correction when refinement is enabled),
/// and may return [`Action::StopEarly`] to terminate early.
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

/// Integrates a scalar ODE problem using Crank-Nicolson without observation.
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

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use thiserror::Error;

    use crate::ode::{Correction, Status};

    fn decay(y: &f64, _t: f64) -> f64 {
        -y
    }

    fn decay_jacobian(_y: &f64, _t: f64) -> f64 {
        -1.0
    }

    fn cubic_decay(y: &f64, _t: f64) -> f64 {
        -y.powi(3)
    }

    fn cubic_decay_jacobian(y: &f64, _t: f64) -> f64 {
        -3.0 * y.powi(2)
    }

    #[derive(Debug, Error)]
    #[error("jacobian unavailable")]
    struct Unavailable;

    struct BrokenJacobian;

    impl Jacobian for BrokenJacobian {
        type Error = Unavailable;

        fn jacobian(&self, _state: &f64, _time: f64) -> Result<f64, Self::Error> {
            Err(Unavailable)
        }
    }

    #[test]
    fn linear_decay_uses_trapezoidal_amplification() {
        let dt = 0.2;
        let grid = TimeGrid::new(0.0, 1.0, dt).unwrap();

        let solution =
            solve_unobserved(&decay, &decay_jacobian, 1.0, &grid, &Config::default()).unwrap();

        let factor = (1.0 - dt / 2.0) / (1.0 + dt / 2.0);
        for (n, y) in solution.states.iter().enumerate() {
            assert_relative_eq!(*y, factor.powi(n as i32), epsilon = 1e-14);
        }
        assert!(solution.corrections.is_empty());
    }

    #[test]
    fn stable_where_explicit_euler_diverges() {
        // dt = 3 is beyond forward Euler's limit (dt < 2) for y' = -y.
        let grid = TimeGrid::new(0.0, 60.0, 3.0).unwrap();

        let implicit =
            solve_unobserved(&decay, &decay_jacobian, 1.0, &grid, &Config::default()).unwrap();
        let explicit = crate::ode::euler::solve_unobserved(&decay, 1.0, &grid).unwrap();

        assert!(implicit.states.iter().all(|y| y.abs() <= 1.0));
        assert!(implicit.states.last().unwrap().abs() < 1e-10);
        assert!(explicit.states.last().unwrap().abs() > 1e5);
    }

    #[test]
    fn newton_mode_solves_the_trapezoidal_equation() {
        let dt = 0.5;
        let grid = TimeGrid::new(0.0, 5.0, dt).unwrap();

        let solution = solve_unobserved(
            &cubic_decay,
            &cubic_decay_jacobian,
            1.0,
            &grid,
            &Config::newton(),
        )
        .unwrap();

        assert_eq!(solution.status, Status::Complete);
        assert!(solution.is_converged());
        assert_eq!(solution.corrections.len(), grid.steps());

        for pair in solution.states.windows(2) {
            let (y, next) = (pair[0], pair[1]);
            let residual = next - 0.5 * dt * (cubic_decay(&next, 0.0) + cubic_decay(&y, 0.0)) - y;
            assert!(residual.abs() <= 1e-9);
        }
    }

    #[test]
    fn newton_mode_refines_linearized_value() {
        let grid = TimeGrid::new(0.0, 1.0, 1.0).unwrap();

        let linearized = solve_unobserved(
            &cubic_decay,
            &cubic_decay_jacobian,
            1.0,
            &grid,
            &Config::default(),
        )
        .unwrap();
        let refined = solve_unobserved(
            &cubic_decay,
            &cubic_decay_jacobian,
            1.0,
            &grid,
            &Config::newton(),
        )
        .unwrap();

        // Linearized: 1 + 0.5 * (-1 - 1) / (1 + 1.5) = 0.6.
        assert_relative_eq!(linearized.states[1], 0.6, epsilon = 1e-12);
        // The refined value solves y + 0.5 y^3 = 0.5.
        let y = refined.states[1];
        assert_relative_eq!(y + 0.5 * y.powi(3), 0.5, epsilon = 1e-9);
        assert!(refined.corrections[0].iters > 0);
    }

    #[test]
    fn exhausted_budget_is_reported_not_raised() {
        let grid = TimeGrid::new(0.0, 1.0, 1.0).unwrap();
        let config = Config {
            max_iters: 1,
            ..Config::newton()
        };

        let solution =
            solve_unobserved(&cubic_decay, &cubic_decay_jacobian, 1.0, &grid, &config)
                .expect("non-convergence is not an error");

        assert_eq!(solution.status, Status::Complete);
        assert!(!solution.is_converged());

        let Correction {
            iters,
            residual,
            converged,
        } = solution.corrections[0];
        assert_eq!(iters, 1);
        assert!(!converged);
        assert!(residual.abs() > config.tol);
    }

    #[test]
    fn linear_problem_needs_no_newton_iterations() {
        let grid = TimeGrid::new(0.0, 1.0, 0.1).unwrap();

        let solution =
            solve_unobserved(&decay, &decay_jacobian, 1.0, &grid, &Config::newton()).unwrap();

        assert!(solution.is_converged());
        assert!(solution.corrections.iter().all(|c| c.iters == 0));
    }

    #[test]
    fn observer_sees_corrections() {
        let grid = TimeGrid::new(0.0, 2.0, 0.5).unwrap();

        let mut seen = Vec::new();
        solve(
            &cubic_decay,
            &cubic_decay_jacobian,
            1.0,
            &grid,
            &Config::newton(),
            |event: &Event<'_, f64>| {
                seen.push(event.correction.is_some());
                None
            },
        )
        .unwrap();

        assert_eq!(seen, vec![false, true, true, true, true]);
    }

    #[test]
    fn singular_update_is_an_error() {
        // y' = y with dt = 2 makes 1 - (dt/2) * dfdy vanish.
        let grid = TimeGrid::new(0.0, 4.0, 2.0).unwrap();

        let result = solve_unobserved(
            &|y: &f64, _t: f64| *y,
            &|_y: &f64, _t: f64| 1.0,
            1.0,
            &grid,
            &Config::default(),
        );

        assert!(matches!(
            result,
            Err(Error::SingularStep { time, .. }) if time == 2.0
        ));
    }

    #[test]
    fn jacobian_errors_are_propagated() {
        let grid = TimeGrid::new(0.0, 1.0, 0.5).unwrap();

        let result = solve_unobserved(&decay, &BrokenJacobian, 1.0, &grid, &Config::default());

        assert!(matches!(result, Err(Error::Jacobian(_))));
    }

    #[test]
    fn invalid_config_is_rejected_before_stepping() {
        let grid = TimeGrid::new(0.0, 1.0, 0.5).unwrap();
        let config = Config {
            tol: -1.0,
            ..Config::newton()
        };

        let result = solve_unobserved(&decay, &decay_jacobian, 1.0, &grid, &config);

        assert!(matches!(
            result,
            Err(Error::InvalidConfig(ConfigError::Tol))
        ));
    }
}

//! Newton-Raphson root finding for scalar equations.
//!
//! # Algorithm
//!
//! Starting from a guess, Newton's method repeatedly follows the tangent line
//! of `F` to its zero:
//!
//! ```text
//! x_{n+1} = x_n - F(x_n) / dFdx(x_n)
//! ```
//!
//! The iteration stops as soon as `|F(x)| <= residual_tol`, or after
//! `max_iters` updates. Running out of iterations is not an error: the
//! solution reports [`Status::MaxIters`] together with the last iterate.
//!
//! A derivative that is zero or non-finite makes the update undefined and
//! fails with [`Error::SingularDerivative`] instead of producing `NaN` or
//! infinite iterates.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after each update. Observers can return
//! [`Action::StopEarly`] to halt with [`Status::StoppedByObserver`].

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use stepwise_core::{Observer, ScalarFunction};

/// Multiple of `residual_tol` used as the starting point when no guess is given.
const DEFAULT_GUESS_SCALE: f64 = 10.0;

/// Finds a root of `function` using Newton-Raphson iteration.
///
/// When `guess` is `None`, iteration starts from `10 * residual_tol`.
///
/// # Errors
///
/// Returns an error if the config or guess is invalid, either function fails
/// to evaluate, the residual becomes non-finite, or the derivative is zero or
/// non-finite at an iterate.
pub fn solve<F, D, Obs>(
    function: &F,
    derivative: &D,
    guess: Option<f64>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFunction,
    D: ScalarFunction,
    Obs: Observer<Event, Action>,
{
    config.validate()?;

    let mut x = guess.unwrap_or(DEFAULT_GUESS_SCALE * config.residual_tol);
    if !x.is_finite() {
        return Err(Error::NonFiniteGuess { value: x });
    }

    let mut residual = residual_at(function, x)?;

    for iter in 1..=config.max_iters {
        if residual.abs() <= config.residual_tol {
            return Ok(Solution {
                status: Status::Converged,
                x,
                residual,
                iters: iter - 1,
            });
        }

        let slope = derivative.call(x).map_err(Error::derivative)?;
        #[allow(clippy::float_cmp)]
        if slope == 0.0 || !slope.is_finite() {
            return Err(Error::SingularDerivative {
                x,
                derivative: slope,
                iter,
            });
        }

        x -= residual / slope;
        residual = residual_at(function, x)?;

        let event = Event {
            iter,
            x,
            residual,
            derivative: slope,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x,
                residual,
                iters: iter,
            });
        }
    }

    let status = if residual.abs() <= config.residual_tol {
        Status::Converged
    } else {
        Status::MaxIters
    };

    Ok(Solution {
        status,
        x,
        residual,
        iters: config.max_iters,
    })
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// Returns an error if the config or guess is invalid, either function fails
/// to evaluate, the residual becomes non-finite, or the derivative is zero or
/// non-finite at an iterate.
pub fn solve_unobserved<F, D>(
    function: &F,
    derivative: &D,
    guess: Option<f64>,
    config: &Config,
) -> Result<Solution, Error>
where
    F: ScalarFunction,
    D: ScalarFunction,
{
    solve(function, derivative, guess, config, ())
}

fn residual_at<F: ScalarFunction>(function: &F, x: f64) -> Result<f64, Error> {
    let residual = function.call(x).map_err(Error::function)?;
    if !residual.is_finite() {
        return Err(Error::NonFiniteResidual { x, residual });
    }
    Ok(residual)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use thiserror::Error;

    fn square_minus_two(x: f64) -> f64 {
        x * x - 2.0
    }

    fn twice(x: f64) -> f64 {
        2.0 * x
    }

    #[derive(Debug, Error)]
    #[error("derivative unavailable")]
    struct Unavailable;

    /// A derivative that cannot be evaluated anywhere.
    struct NoSlope;

    impl ScalarFunction for NoSlope {
        type Error = Unavailable;

        fn call(&self, _x: f64) -> Result<f64, Self::Error> {
            Err(Unavailable)
        }
    }

    #[test]
    fn finds_square_root_of_two() {
        let config = Config {
            residual_tol: 1e-10,
            ..Config::default()
        };

        let solution = solve_unobserved(&square_minus_two, &twice, Some(1.0), &config)
            .expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert!(solution.iters < 10);
        assert!(solution.residual.abs() <= 1e-10);
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn guess_at_root_needs_no_iterations() {
        let solution =
            solve_unobserved(&|x: f64| x - 3.0, &|_x: f64| 1.0, Some(3.0), &Config::default())
                .unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 0);
    }

    #[test]
    fn default_guess_is_used() {
        let solution =
            solve_unobserved(&|x: f64| x - 3.0, &|_x: f64| 1.0, None, &Config::default()).unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.x, 3.0);
    }

    #[test]
    fn zero_derivative_is_an_error() {
        // dF/dx = 2x vanishes at the guess.
        let result = solve_unobserved(&square_minus_two, &twice, Some(0.0), &Config::default());

        assert!(matches!(
            result,
            Err(Error::SingularDerivative { x, iter: 1, .. }) if x == 0.0
        ));
    }

    #[test]
    fn exhausted_budget_returns_last_iterate() {
        // x^2 + 1 has no real root, so the iteration cannot converge.
        let config = Config {
            max_iters: 5,
            ..Config::default()
        };

        let solution = solve_unobserved(&|x: f64| x * x + 1.0, &twice, Some(0.5), &config)
            .expect("non-convergence is not an error");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 5);
        assert!(solution.residual >= 1.0);
    }

    #[test]
    fn observer_sees_every_update() {
        let mut residuals = Vec::new();

        let solution = solve(
            &square_minus_two,
            &twice,
            Some(1.0),
            &Config::default(),
            |event: &Event| {
                residuals.push(event.residual.abs());
                None
            },
        )
        .unwrap();

        assert_eq!(residuals.len(), solution.iters);
        assert!(residuals.windows(2).all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn observer_can_stop_iteration() {
        let solution = solve(
            &square_minus_two,
            &twice,
            Some(1.0),
            &Config::default(),
            |event: &Event| (event.iter >= 2).then_some(Action::StopEarly),
        )
        .expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
        // 1 -> 1.5 -> 1.41666...
        assert_relative_eq!(solution.x, 17.0 / 12.0, epsilon = 1e-15);
    }

    #[test]
    fn derivative_errors_are_propagated() {
        let result = solve_unobserved(&square_minus_two, &NoSlope, Some(1.0), &Config::default());

        assert!(matches!(result, Err(Error::Derivative(_))));
    }

    #[test]
    fn non_finite_residual_is_an_error() {
        let reciprocal = |x: f64| 1.0 / x;
        let slope = |x: f64| -1.0 / (x * x);

        let result = solve_unobserved(&reciprocal, &slope, Some(0.0), &Config::default());

        assert!(matches!(result, Err(Error::NonFiniteResidual { .. })));
    }

    #[test]
    fn non_finite_guess_is_an_error() {
        let result = solve_unobserved(&square_minus_two, &twice, Some(f64::NAN), &Config::default());

        assert!(matches!(result, Err(Error::NonFiniteGuess { .. })));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = Config {
            residual_tol: -1.0,
            ..Config::default()
        };

        let result = solve_unobserved(&square_minus_two, &twice, Some(1.0), &config);

        assert!(matches!(
            result,
            Err(Error::InvalidConfig(ConfigError::ResidualTol))
        ));
    }
}

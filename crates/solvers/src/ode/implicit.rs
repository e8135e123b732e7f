//! The θ-method shared by the implicit steppers.
//!
//! ```text
//! y_{n+1} = y_n + dt * [θ f(y_{n+1}, t_{n+1}) + (1 - θ) f(y_n, t_n)]
//! ```
//!
//! The update is first closed analytically by linearizing
//! `f(y_{n+1}, t_{n+1})` about `y_n`:
//!
//! ```text
//! y_{n+1} = y_n + [θ dt f(y_n, t_{n+1}) + (1 - θ) dt f(y_n, t_n)]
//!                 / (1 - θ dt dfdy(y_n, t_{n+1}))
//! ```
//!
//! With linearization disabled, that value seeds a Newton iteration on the
//! residual
//!
//! ```text
//! F(y) = y - θ dt f(y, t_{n+1}) - y_n - (1 - θ) dt f(y_n, t_n)
//! ```
//!
//! whose slope is frozen at the linearization point,
//! `dF/dy = 1 - θ dt dfdy(y_n, t_{n+1})`.

use stepwise_core::{Jacobian, OdeProblem};
use thiserror::Error;

use super::{
    Correction, Error,
    march::{Advance, Stepper},
};

/// Configuration for the implicit solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    /// Accept the linearized update without Newton refinement.
    pub linearize: bool,

    /// Residual tolerance for the Newton correction.
    pub tol: f64,

    /// Newton iteration budget per step.
    pub max_iters: usize,
}

/// Errors that can occur when validating an implicit solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and non-negative")]
    Tol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            linearize: true,
            tol: 1e-10,
            max_iters: 1000,
        }
    }
}

impl Config {
    /// Returns the default config with Newton refinement enabled.
    #[must_use]
    pub fn newton() -> Self {
        Self {
            linearize: false,
            ..Self::default()
        }
    }

    /// Validates that the tolerance is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tol.is_finite() || self.tol < 0.0 {
            return Err(ConfigError::Tol);
        }
        Ok(())
    }
}

pub(super) struct Theta<'a, J> {
    theta: f64,
    jacobian: &'a J,
    config: Config,
}

impl<'a, J: Jacobian> Theta<'a, J> {
    pub(super) fn new(theta: f64, jacobian: &'a J, config: Config) -> Self {
        Self {
            theta,
            jacobian,
            config,
        }
    }
}

impl<J: Jacobian> Stepper<f64> for Theta<'_, J> {
    fn advance<P: OdeProblem<f64>>(
        &mut self,
        problem: &P,
        state: &f64,
        time: f64,
        dt: f64,
    ) -> Result<Advance<f64>, Error> {
        let current = *state;
        let next_time = time + dt;
        let implicit_weight = self.theta * dt;

        let explicit_part = if self.theta < 1.0 {
            let slope = problem.derivative(state, time).map_err(Error::problem)?;
            (1.0 - self.theta) * dt * slope
        } else {
            0.0
        };

        let predicted = problem
            .derivative(state, next_time)
            .map_err(Error::problem)?;
        let dfdy = self
            .jacobian
            .jacobian(state, next_time)
            .map_err(Error::jacobian)?;

        let denominator = 1.0 - implicit_weight * dfdy;
        #[allow(clippy::float_cmp)]
        if denominator == 0.0 || !denominator.is_finite() {
            return Err(Error::SingularStep {
                time: next_time,
                denominator,
            });
        }

        let mut next = current + (implicit_weight * predicted + explicit_part) / denominator;
        if self.config.linearize {
            return Ok(Advance::direct(next));
        }

        let residual_at = |candidate: f64| -> Result<f64, Error> {
            let slope = problem
                .derivative(&candidate, next_time)
                .map_err(Error::problem)?;
            Ok(candidate - implicit_weight * slope - current - explicit_part)
        };

        let mut residual = residual_at(next)?;
        let mut iters = 0;
        while residual.abs() > self.config.tol && iters < self.config.max_iters {
            next -= residual / denominator;
            residual = residual_at(next)?;
            iters += 1;
        }

        Ok(Advance {
            state: next,
            correction: Some(Correction {
                iters,
                residual,
                converged: residual.abs() <= self.config.tol,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_linearized() {
        let config = Config::default();
        assert!(config.linearize);
        assert_eq!(config.max_iters, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn newton_disables_linearization() {
        let config = Config::newton();
        assert!(!config.linearize);
        assert_eq!(config.tol, Config::default().tol);
    }

    #[test]
    fn rejects_bad_tolerance() {
        let negative = Config {
            tol: -1.0,
            ..Config::default()
        };
        assert_eq!(negative.validate(), Err(ConfigError::Tol));

        let nan = Config {
            tol: f64::NAN,
            ..Config::default()
        };
        assert_eq!(nan.validate(), Err(ConfigError::Tol));
    }
}

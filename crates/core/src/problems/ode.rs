use std::convert::Infallible;

use crate::{DerivativeOf, StepIntegrable};

/// Defines the right-hand side of an initial-value problem `y' = f(y, t)`.
///
/// The integrators call [`derivative`](OdeProblem::derivative) at every point
/// they need, including intermediate Runge-Kutta stage points, so
/// implementations must be pure functions of `(state, time)`.
///
/// Any closure `Fn(&S, f64) -> S::Derivative` is an infallible `OdeProblem`.
/// Implement the trait directly when evaluating the right-hand side can fail.
pub trait OdeProblem<S: StepIntegrable> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates `f(state, time)`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(&self, state: &S, time: f64) -> Result<DerivativeOf<S>, Self::Error>;
}

impl<S, F> OdeProblem<S> for F
where
    S: StepIntegrable,
    F: Fn(&S, f64) -> DerivativeOf<S>,
{
    type Error = Infallible;

    fn derivative(&self, state: &S, time: f64) -> Result<DerivativeOf<S>, Self::Error> {
        Ok(self(state, time))
    }
}

/// The partial derivative `df/dy` of a scalar right-hand side.
///
/// Implicit steppers use it both to close the update analytically and as the
/// slope of their Newton correction.
pub trait Jacobian {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates `df/dy` at `(state, time)`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the Jacobian cannot be computed.
    fn jacobian(&self, state: &f64, time: f64) -> Result<f64, Self::Error>;
}

impl<F> Jacobian for F
where
    F: Fn(&f64, f64) -> f64,
{
    type Error = Infallible;

    fn jacobian(&self, state: &f64, time: f64) -> Result<f64, Self::Error> {
        Ok(self(state, time))
    }
}

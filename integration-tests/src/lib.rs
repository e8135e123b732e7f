//! Reference problems with known solutions, shared by the integration tests.

use std::convert::Infallible;

use stepwise_core::{Jacobian, OdeProblem};

/// Linear decay `y' = -rate * y`.
#[derive(Debug, Clone, Copy)]
pub struct Decay {
    pub rate: f64,
}

impl Decay {
    /// Exact solution from `y(0) = initial`.
    #[must_use]
    pub fn exact(&self, initial: f64, time: f64) -> f64 {
        initial * (-self.rate * time).exp()
    }
}

impl OdeProblem<f64> for Decay {
    type Error = Infallible;

    fn derivative(&self, state: &f64, _time: f64) -> Result<f64, Self::Error> {
        Ok(-self.rate * state)
    }
}

impl Jacobian for Decay {
    type Error = Infallible;

    fn jacobian(&self, _state: &f64, _time: f64) -> Result<f64, Self::Error> {
        Ok(-self.rate)
    }
}

/// Nonlinear decay `y' = -y^2`, with `y(t) = y0 / (1 + y0 t)`.
#[derive(Debug, Clone, Copy)]
pub struct Quadratic;

impl Quadratic {
    #[must_use]
    pub fn exact(initial: f64, time: f64) -> f64 {
        initial / (1.0 + initial * time)
    }
}

impl OdeProblem<f64> for Quadratic {
    type Error = Infallible;

    fn derivative(&self, state: &f64, _time: f64) -> Result<f64, Self::Error> {
        Ok(-state * state)
    }
}

impl Jacobian for Quadratic {
    type Error = Infallible;

    fn jacobian(&self, state: &f64, _time: f64) -> Result<f64, Self::Error> {
        Ok(-2.0 * state)
    }
}

/// Harmonic oscillator `x'' = -omega^2 x` as the system `[x, v]`.
#[derive(Debug, Clone, Copy)]
pub struct Oscillator {
    pub omega: f64,
}

impl Oscillator {
    /// Exact position from `x(0) = 1`, `v(0) = 0`.
    #[must_use]
    pub fn position(&self, time: f64) -> f64 {
        (self.omega * time).cos()
    }
}

impl OdeProblem<[f64; 2]> for Oscillator {
    type Error = Infallible;

    fn derivative(&self, state: &[f64; 2], _time: f64) -> Result<[f64; 2], Self::Error> {
        let [x, v] = *state;
        Ok([v, -self.omega * self.omega * x])
    }
}

/// Ratio of successive errors, `errors[i] / errors[i + 1]`.
///
/// Halving the step of an order-`p` method gives ratios near `2^p`.
#[must_use]
pub fn refinement_ratios(errors: &[f64]) -> Vec<f64> {
    errors.windows(2).map(|pair| pair[0] / pair[1]).collect()
}

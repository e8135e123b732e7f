use std::error::Error as StdError;

use thiserror::Error;

use super::ConfigError;

/// Errors that can occur during Newton iteration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("initial guess must be finite, got {value}")]
    NonFiniteGuess { value: f64 },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    /// The derivative is zero or non-finite, so the Newton update diverges.
    #[error("derivative {derivative} at x = {x} admits no Newton update (iteration {iter})")]
    SingularDerivative { x: f64, derivative: f64, iter: usize },

    #[error("function error: {0}")]
    Function(#[source] Box<dyn StdError + Send + Sync>),

    #[error("derivative error: {0}")]
    Derivative(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn function<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Function(Box::new(err))
    }

    pub(crate) fn derivative<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Derivative(Box::new(err))
    }
}

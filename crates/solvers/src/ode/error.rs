use std::error::Error as StdError;

use super::implicit::ConfigError;

/// Errors that can occur during time integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("jacobian error: {0}")]
    Jacobian(#[source] Box<dyn StdError + Send + Sync>),

    /// The implicit update denominator `1 - θ·dt·df/dy` vanished or is not finite.
    #[error("singular implicit update at t = {time} (denominator {denominator})")]
    SingularStep { time: f64, denominator: f64 },
}

impl Error {
    pub(crate) fn problem<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Problem(Box::new(err))
    }

    pub(crate) fn jacobian<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Jacobian(Box::new(err))
    }
}

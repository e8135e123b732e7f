use thiserror::Error;

/// Configuration for the relaxation solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    /// Maximum number of full sweeps.
    pub max_iters: usize,

    /// Convergence threshold on the maximum absolute change of one sweep.
    pub tol: f64,
}

/// Errors that can occur when validating a relaxation solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and non-negative")]
    Tol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 1000,
            tol: 1e-2,
        }
    }
}

impl Config {
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

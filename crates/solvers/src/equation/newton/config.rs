use thiserror::Error;

/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    pub max_iters: usize,
    pub residual_tol: f64,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and non-negative")]
    ResidualTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 10_000,
            residual_tol: 1e-12,
        }
    }
}

impl Config {
    /// Validates that the residual tolerance is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual_tol` is negative or non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.residual_tol.is_finite() || self.residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn zero_tolerance_is_valid() {
        let config = Config {
            residual_tol: 0.0,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn infinite_tolerance_is_invalid() {
        let config = Config {
            residual_tol: f64::INFINITY,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ResidualTol));
    }
}

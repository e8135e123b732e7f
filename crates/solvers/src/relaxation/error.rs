use thiserror::Error;

use super::ConfigError;

/// Errors that can occur before relaxation starts.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("forcing shape {forcing:?} does not match initial field shape {initial:?}")]
    ShapeMismatch {
        forcing: (usize, usize),
        initial: (usize, usize),
    },

    #[error("a {rows}x{cols} grid has no interior points")]
    NoInterior { rows: usize, cols: usize },

    #[error("sweep {sweep} produced a non-finite field (change {change})")]
    NonFiniteField { sweep: usize, change: f64 },
}

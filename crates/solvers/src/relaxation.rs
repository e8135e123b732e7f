//! Relaxation solvers for the discrete Poisson equation on a uniform grid.
//!
//! Both solvers iterate the 5-point update over interior points
//! (`1 <= j < M-1`, `1 <= i < N-1`):
//!
//! ```text
//! phi[j, i] = 0.25 * (phi[j-1, i] + phi[j+1, i] + phi[j, i-1] + phi[j, i+1] - rhs[j, i])
//! ```
//!
//! where `rhs` is the forcing already multiplied by the squared grid spacing
//! (`dx == dy`). Boundary rows and columns keep the values of the initial
//! guess and are never written.
//!
//! # Solvers
//!
//! - [`jacobi`]: point Jacobi, each sweep reads only the previous sweep
//! - [`gauss_seidel`]: Gauss-Seidel, each sweep updates the field in place
//!
//! # Convergence
//!
//! A solve converges when the maximum absolute change of one full sweep is at
//! most [`Config::tol`]. Exhausting [`Config::max_iters`] is not an error; the
//! [`Solution`] reports [`Status::MaxIters`], the sweep count, and the last
//! change so non-convergence is always visible to the caller.
//!
//! A sweep that produces a non-finite value fails with
//! [`Error::NonFiniteField`], since NaN or overflowing values can never
//! satisfy the tolerance.

mod action;
mod config;
mod error;
mod event;
mod solution;

pub mod gauss_seidel;
pub mod jacobi;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use ndarray::{Array2, Zip};

/// Checks that the forcing and initial field are compatible grids with a
/// non-empty interior.
fn validate_grids(forcing: &Array2<f64>, initial: &Array2<f64>) -> Result<(), Error> {
    if forcing.dim() != initial.dim() {
        return Err(Error::ShapeMismatch {
            forcing: forcing.dim(),
            initial: initial.dim(),
        });
    }

    let (rows, cols) = initial.dim();
    if rows < 3 || cols < 3 {
        return Err(Error::NoInterior { rows, cols });
    }

    Ok(())
}

/// Maximum absolute elementwise difference between two same-shape fields.
///
/// NaN anywhere makes the result NaN.
fn max_abs_change(before: &Array2<f64>, after: &Array2<f64>) -> f64 {
    Zip::from(before)
        .and(after)
        .fold(0.0_f64, |acc, &old, &new| larger_change(acc, (new - old).abs()))
}

/// `f64::max` that propagates NaN instead of discarding it.
fn larger_change(acc: f64, change: f64) -> f64 {
    if acc.is_nan() || change.is_nan() {
        f64::NAN
    } else {
        acc.max(change)
    }
}

/// Rejects a sweep whose change is NaN or infinite.
fn check_finite(sweep: usize, change: f64) -> Result<f64, Error> {
    if change.is_finite() {
        Ok(change)
    } else {
        Err(Error::NonFiniteField { sweep, change })
    }
}

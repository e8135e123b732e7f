//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasResidual`]: events that carry a convergence measure
//! - [`ProgressLine`]: events that can describe themselves in one line
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use stepwise_core::Observer;
//! use stepwise_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//!     iter: usize,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.iter += 1;
//!         if self.iter >= self.min_iters && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use std::io::{self, Write};

use stepwise_solvers::{equation::newton, ode, relaxation};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the convergence measure for this event.
    ///
    /// For relaxation sweeps this is the largest change of the sweep.
    /// Returns `f64::NAN` when the event carries no residual.
    fn residual(&self) -> f64;
}

/// An event that can render a one-line progress report.
pub trait ProgressLine {
    /// Writes the report without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns any error produced by the writer.
    fn write_line<W: Write>(&self, out: &mut W) -> io::Result<()>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasResidual ---

impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasResidual for relaxation::Event<'_> {
    fn residual(&self) -> f64 {
        self.change
    }
}

impl<S> HasResidual for ode::Event<'_, S> {
    fn residual(&self) -> f64 {
        self.correction
            .map_or(f64::NAN, |correction| correction.residual)
    }
}

// --- ProgressLine ---

impl<S> ProgressLine for ode::Event<'_, S> {
    fn write_line<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "step {} of {}", self.step, self.total)?;
        if let Some(correction) = self.correction {
            write!(
                out,
                ": {} corrections, residual {:e}",
                correction.iters, correction.residual
            )?;
        }
        Ok(())
    }
}

impl ProgressLine for newton::Event {
    fn write_line<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "iteration {}: residual {:e}", self.iter, self.residual)
    }
}

impl ProgressLine for relaxation::Event<'_> {
    fn write_line<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "sweep {}: change {:e}", self.sweep, self.change)
    }
}

// --- CanStopEarly ---

impl CanStopEarly for ode::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for relaxation::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

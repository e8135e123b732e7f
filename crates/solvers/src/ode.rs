//! Fixed-step solvers for initial-value problems `y' = f(y, t)`.
//!
//! Every solver in this module runs on a [`TimeGrid`] built from
//! `(ti, tf, dt)` and returns a [`Solution`] whose `states` and `times` are
//! indexed identically, with `states[0]` equal to the initial state.
//!
//! # Solvers
//!
//! - [`euler`]: explicit (forward) Euler, first order
//! - [`rk2`]: midpoint Runge-Kutta, second order
//! - [`rk4`]: classical Runge-Kutta, fourth order
//! - [`ab2`]: two-step Adams-Bashforth, bootstrapped with one RK4 step
//! - [`crank_nicolson`]: trapezoidal implicit method for scalar states
//! - [`backward_euler`]: implicit Euler for scalar states
//!
//! # Observer Events
//!
//! All solvers share one driving loop and emit the same [`Event`]: step 0 for
//! the initial state, then one event after each accepted step. Observers can
//! return [`Action::StopEarly`] to end the solve with
//! [`Status::StoppedByObserver`] and the trajectory computed so far.

mod action;
mod error;
mod event;
mod grid;
mod implicit;
mod march;
mod solution;

pub mod ab2;
pub mod backward_euler;
pub mod crank_nicolson;
pub mod euler;
pub mod rk2;
pub mod rk4;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use grid::{GridError, TimeGrid};
pub use solution::{Correction, Solution, Status};

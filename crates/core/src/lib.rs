//! Core traits for the stepwise solvers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`StepIntegrable`]: a state that can be advanced by `derivative * delta`
//! - [`OdeProblem`]: the right-hand side `f(y, t)` of an initial-value problem
//! - [`Jacobian`]: the scalar derivative `df/dy` used by implicit steppers
//! - [`ScalarFunction`]: a scalar function `x -> F(x)` for root finding
//! - [`Observer`]: receives solver events and optionally returns control actions

mod observer;
mod problems;
mod step;

pub use observer::Observer;
pub use problems::{Jacobian, OdeProblem, ScalarFunction};
pub use step::{DerivativeOf, StepIntegrable};

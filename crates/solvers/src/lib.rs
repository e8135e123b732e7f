//! Numerical solvers for the stepwise framework.
//!
//! - [`ode`]: fixed-step integrators for initial-value problems
//! - [`equation`]: scalar root finding
//! - [`relaxation`]: iterative solvers for the discrete Poisson equation
//! - [`quadrature`]: integration of tabulated data

pub mod equation;
pub mod ode;
pub mod quadrature;
pub mod relaxation;

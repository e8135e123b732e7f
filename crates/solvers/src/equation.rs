//! Solvers for scalar equations `F(x) = 0`.
//!
//! # Solvers
//!
//! - [`newton`]: Newton-Raphson iteration with a user-supplied derivative

pub mod newton;

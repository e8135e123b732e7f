mod equation;
mod ode;

pub use equation::ScalarFunction;
pub use ode::{Jacobian, OdeProblem};

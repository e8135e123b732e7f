/// Iteration event emitted by the Newton solver after each update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The updated iterate.
    pub x: f64,

    /// Residual `F(x)` at the updated iterate.
    pub residual: f64,

    /// Derivative used for this update, evaluated at the previous iterate.
    pub derivative: f64,
}

/// Control actions supported by the relaxation solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current sweep and return the field so far.
    StopEarly,
}

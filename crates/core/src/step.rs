/// A state that can be advanced using its derivative.
///
/// Implementing this trait enables the generic fixed-step integrators to work
/// with the type by stepping it via `self + derivative * delta`. Every
/// explicit stage, bootstrap step and multistep combination is expressed
/// through this single operation, so the arithmetic is defined once per state
/// type.
///
/// Implementations are provided for scalar (`f64`), fixed-size vector
/// (`[f64; N]`) and dynamically sized vector (`Vec<f64>`) states.
pub trait StepIntegrable {
    /// The derivative of the state with respect to time.
    type Derivative;

    /// Returns the state after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: &Self::Derivative, delta: f64) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
///
/// This is a convenience for accessing the [`StepIntegrable::Derivative`]
/// associated type without writing out the fully qualified syntax.
pub type DerivativeOf<T> = <T as StepIntegrable>::Derivative;

impl StepIntegrable for f64 {
    type Derivative = f64;

    fn step(&self, derivative: &f64, delta: f64) -> Self {
        self + derivative * delta
    }
}

impl<const N: usize> StepIntegrable for [f64; N] {
    type Derivative = [f64; N];

    fn step(&self, derivative: &[f64; N], delta: f64) -> Self {
        std::array::from_fn(|i| self[i] + derivative[i] * delta)
    }
}

/// Elementwise stepping for dynamically sized states.
///
/// The derivative must have the same length as the state.
impl StepIntegrable for Vec<f64> {
    type Derivative = Vec<f64>;

    fn step(&self, derivative: &Vec<f64>, delta: f64) -> Self {
        debug_assert_eq!(
            self.len(),
            derivative.len(),
            "state and derivative lengths differ"
        );
        self.iter()
            .zip(derivative)
            .map(|(s, d)| s + d * delta)
            .collect()
    }
}

use std::convert::Infallible;

/// A scalar function `x -> F(x)`.
///
/// Root solvers take one `ScalarFunction` for the residual `F` and another for
/// its derivative `dF/dx`. Any closure `Fn(f64) -> f64` is an infallible
/// `ScalarFunction`; implement the trait directly when evaluation can fail.
pub trait ScalarFunction {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the function cannot be evaluated at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> ScalarFunction for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_a_scalar_function() {
        let square_minus_two = |x: f64| x * x - 2.0;
        assert_eq!(square_minus_two.call(3.0).unwrap(), 7.0);
    }

    #[test]
    fn function_pointer_is_a_scalar_function() {
        let cosine: fn(f64) -> f64 = f64::cos;
        assert_eq!(cosine.call(0.0).unwrap(), 1.0);
    }
}

use ndarray::ArrayView2;

/// Event emitted by the relaxation solvers after each full sweep.
#[derive(Debug, Clone)]
pub struct Event<'a> {
    /// Sweep counter (1-based).
    pub sweep: usize,

    /// Maximum absolute change produced by this sweep.
    pub change: f64,

    /// The field after this sweep.
    pub field: ArrayView2<'a, f64>,
}

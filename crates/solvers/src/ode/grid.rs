use thiserror::Error;

/// Relative distance from an integer below which `(tf - ti) / dt` counts as
/// a whole number of steps.
const WHOLE_STEPS_TOL: f64 = 1e-9;

/// Errors that can occur when constructing a [`TimeGrid`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GridError {
    #[error("start time must be finite, got {0}")]
    NonFiniteStart(f64),

    #[error("end time must be finite, got {0}")]
    NonFiniteEnd(f64),

    #[error("time step must be finite and positive, got {0}")]
    InvalidStep(f64),

    #[error("end time {end} precedes start time {start}")]
    Reversed { start: f64, end: f64 },

    #[error("grid would need {steps} steps, more than the limit of {}", TimeGrid::MAX_STEPS)]
    TooManySteps { steps: f64 },
}

/// A uniformly spaced time grid.
///
/// The grid holds the points `start + k * dt` for `k = 0..=steps`. Points are
/// computed by multiplication, so long grids do not accumulate round-off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    start: f64,
    dt: f64,
    steps: usize,
}

impl TimeGrid {
    /// Largest number of steps a grid may hold.
    pub const MAX_STEPS: usize = i32::MAX as usize;

    /// Creates a grid from `start` to `end` with spacing `dt`.
    ///
    /// The last point is the first grid point that reaches `end`: when
    /// `(end - start) / dt` is a whole number (to within round-off) the grid
    /// ends exactly at `end`, otherwise it ends less than one step past it.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite, `dt` is not finite and
    /// positive, `end < start`, or the interval needs more than
    /// [`TimeGrid::MAX_STEPS`] steps.
    pub fn new(start: f64, end: f64, dt: f64) -> Result<Self, GridError> {
        validate_start_and_step(start, dt)?;
        if !end.is_finite() {
            return Err(GridError::NonFiniteEnd(end));
        }
        if end < start {
            return Err(GridError::Reversed { start, end });
        }

        let span = (end - start) / dt;
        let nearest = span.round();
        let steps = if (span - nearest).abs() <= WHOLE_STEPS_TOL * nearest.max(1.0) {
            nearest
        } else {
            span.ceil()
        };

        #[allow(clippy::cast_precision_loss)]
        let limit = Self::MAX_STEPS as f64;
        if !steps.is_finite() || steps > limit {
            return Err(GridError::TooManySteps { steps });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = steps as usize;

        Ok(Self { start, dt, steps })
    }

    /// Creates a grid with an explicit number of steps.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not finite, `dt` is not finite and
    /// positive, or `steps` exceeds [`TimeGrid::MAX_STEPS`].
    pub fn with_steps(start: f64, dt: f64, steps: usize) -> Result<Self, GridError> {
        validate_start_and_step(start, dt)?;
        if steps > Self::MAX_STEPS {
            #[allow(clippy::cast_precision_loss)]
            let steps = steps as f64;
            return Err(GridError::TooManySteps { steps });
        }
        Ok(Self { start, dt, steps })
    }

    /// Returns the first grid time.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the last grid time.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.time(self.steps)
    }

    /// Returns the grid spacing.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the number of steps (intervals) on the grid.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the number of grid points, always `steps() + 1`.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.steps + 1
    }

    /// Returns the time of grid point `index`.
    #[must_use]
    pub fn time(&self, index: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let k = index as f64;
        self.start + k * self.dt
    }

    /// Iterates over all grid times in increasing order.
    pub fn times(&self) -> impl Iterator<Item = f64> + use<> {
        let grid = *self;
        (0..=grid.steps).map(move |index| grid.time(index))
    }
}

fn validate_start_and_step(start: f64, dt: f64) -> Result<(), GridError> {
    if !start.is_finite() {
        return Err(GridError::NonFiniteStart(start));
    }
    if !dt.is_finite() || dt <= 0.0 {
        return Err(GridError::InvalidStep(dt));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn whole_number_of_steps_ends_at_end() {
        let grid = TimeGrid::new(0.0, 5.0, 0.1).unwrap();

        assert_eq!(grid.steps(), 50);
        assert_eq!(grid.num_points(), 51);
        assert_relative_eq!(grid.end(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn round_off_does_not_add_a_step() {
        // 0.3 / 0.1 evaluates to 2.9999999999999996.
        let grid = TimeGrid::new(0.0, 0.3, 0.1).unwrap();
        assert_eq!(grid.steps(), 3);

        // 0.7 / 0.1 evaluates to 6.999999999999999.
        let grid = TimeGrid::new(0.0, 0.7, 0.1).unwrap();
        assert_eq!(grid.steps(), 7);
    }

    #[test]
    fn partial_step_overshoots_by_less_than_dt() {
        let grid = TimeGrid::new(0.0, 1.0, 0.3).unwrap();

        assert_eq!(grid.steps(), 4);
        assert!(grid.end() >= 1.0);
        assert!(grid.end() - 1.0 < grid.dt());
    }

    #[test]
    fn times_are_evenly_spaced() {
        let grid = TimeGrid::new(2.0, 3.0, 0.25).unwrap();
        let times: Vec<f64> = grid.times().collect();
        assert_eq!(times, vec![2.0, 2.25, 2.5, 2.75, 3.0]);
    }

    #[test]
    fn long_grids_do_not_drift() {
        let grid = TimeGrid::new(0.0, 1000.0, 0.001).unwrap();
        assert_eq!(grid.steps(), 1_000_000);
        assert_relative_eq!(grid.end(), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_length_interval_has_one_point() {
        let grid = TimeGrid::new(1.0, 1.0, 0.1).unwrap();
        assert_eq!(grid.steps(), 0);
        assert_eq!(grid.times().collect::<Vec<_>>(), vec![1.0]);
    }

    #[test]
    fn rejects_non_positive_step() {
        assert_eq!(
            TimeGrid::new(0.0, 1.0, 0.0),
            Err(GridError::InvalidStep(0.0))
        );
        assert_eq!(
            TimeGrid::new(0.0, 1.0, -0.1),
            Err(GridError::InvalidStep(-0.1))
        );
        assert!(matches!(
            TimeGrid::new(0.0, 1.0, f64::NAN),
            Err(GridError::InvalidStep(_))
        ));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(matches!(
            TimeGrid::new(f64::NAN, 1.0, 0.1),
            Err(GridError::NonFiniteStart(_))
        ));
        assert_eq!(
            TimeGrid::new(0.0, f64::INFINITY, 0.1),
            Err(GridError::NonFiniteEnd(f64::INFINITY))
        );
    }

    #[test]
    fn rejects_reversed_interval() {
        assert_eq!(
            TimeGrid::new(1.0, 0.0, 0.1),
            Err(GridError::Reversed {
                start: 1.0,
                end: 0.0
            })
        );
    }

    #[test]
    fn rejects_grids_too_long_to_store() {
        assert!(matches!(
            TimeGrid::new(0.0, 1.0, 1e-300),
            Err(GridError::TooManySteps { .. })
        ));
        assert!(matches!(
            TimeGrid::new(0.0, 1.0e6, 1e-9),
            Err(GridError::TooManySteps { .. })
        ));
        // The span itself overflows to infinity.
        assert!(matches!(
            TimeGrid::new(-f64::MAX, f64::MAX, 1.0),
            Err(GridError::TooManySteps { steps }) if steps.is_infinite()
        ));
        assert!(matches!(
            TimeGrid::with_steps(0.0, 1.0, usize::MAX),
            Err(GridError::TooManySteps { .. })
        ));
    }

    #[test]
    fn largest_grid_is_accepted() {
        #[allow(clippy::cast_precision_loss)]
        let end = TimeGrid::MAX_STEPS as f64;
        let grid = TimeGrid::new(0.0, end, 1.0).unwrap();

        assert_eq!(grid.steps(), TimeGrid::MAX_STEPS);
        assert_eq!(grid.num_points(), TimeGrid::MAX_STEPS + 1);
    }

    #[test]
    fn explicit_step_count() {
        let grid = TimeGrid::with_steps(0.0, 0.5, 4).unwrap();
        assert_eq!(grid.num_points(), 5);
        assert_relative_eq!(grid.end(), 2.0);
    }
}

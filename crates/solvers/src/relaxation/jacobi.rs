//! Point-Jacobi relaxation.
//!
//! Every interior value of sweep `k + 1` is computed from sweep `k` alone, so
//! the result of a sweep does not depend on the order points are visited.
//! The solver keeps two buffers and swaps them after each sweep.

use ndarray::{Array2, Zip, s};
use stepwise_core::Observer;

use super::{
    Action, Config, Error, Event, Solution, Status, check_finite, max_abs_change, validate_grids,
};

/// Relaxes `initial` towards the solution of the Poisson problem with the
/// given scaled `forcing`.
///
/// # Errors
///
/// Returns an error if the config is invalid, the grid shapes differ, the
/// grid has no interior points, or a sweep produces a non-finite value.
pub fn solve<Obs>(
    forcing: &Array2<f64>,
    initial: &Array2<f64>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config.validate()?;
    validate_grids(forcing, initial)?;

    let mut field = initial.clone();
    let mut next = initial.clone();
    let mut change = None;

    for sweep_index in 1..=config.max_iters {
        sweep(&field, forcing, &mut next);
        let delta = check_finite(sweep_index, max_abs_change(&field, &next))?;
        std::mem::swap(&mut field, &mut next);
        change = Some(delta);

        let event = Event {
            sweep: sweep_index,
            change: delta,
            field: field.view(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                field,
                sweeps: sweep_index,
                change,
            });
        }

        if delta <= config.tol {
            return Ok(Solution {
                status: Status::Converged,
                field,
                sweeps: sweep_index,
                change,
            });
        }
    }

    Ok(Solution {
        status: Status::MaxIters,
        field,
        sweeps: config.max_iters,
        change,
    })
}

/// Runs point-Jacobi relaxation without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid, the grid shapes differ, the
/// grid has no interior points, or a sweep produces a non-finite value.
pub fn solve_unobserved(
    forcing: &Array2<f64>,
    initial: &Array2<f64>,
    config: &Config,
) -> Result<Solution, Error> {
    solve(forcing, initial, config, ())
}

/// Writes one Jacobi sweep of `previous` into the interior of `next`.
fn sweep(previous: &Array2<f64>, forcing: &Array2<f64>, next: &mut Array2<f64>) {
    Zip::from(next.slice_mut(s![1..-1, 1..-1]))
        .and(previous.slice(s![..-2, 1..-1]))
        .and(previous.slice(s![2.., 1..-1]))
        .and(previous.slice(s![1..-1, ..-2]))
        .and(previous.slice(s![1..-1, 2..]))
        .and(forcing.slice(s![1..-1, 1..-1]))
        .for_each(|out, &north, &south, &west, &east, &rhs| {
            *out = 0.25 * (north + south + west + east - rhs);
        });
}

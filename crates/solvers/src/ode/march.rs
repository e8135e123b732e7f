//! The driving loop shared by every ODE solver.

use stepwise_core::{Observer, OdeProblem, StepIntegrable};

use super::{Action, Correction, Error, Event, Solution, Status, TimeGrid};

/// The outcome of advancing a state by one grid interval.
pub(super) struct Advance<S> {
    pub(super) state: S,
    pub(super) correction: Option<Correction>,
}

impl<S> Advance<S> {
    /// An advance that needed no iterative correction.
    pub(super) fn direct(state: S) -> Self {
        Self {
            state,
            correction: None,
        }
    }
}

/// A single-step update rule `y_n -> y_{n+1}`.
///
/// Steppers take `&mut self` so multistep methods can carry history from one
/// interval to the next.
pub(super) trait Stepper<S: StepIntegrable> {
    fn advance<P: OdeProblem<S>>(
        &mut self,
        problem: &P,
        state: &S,
        time: f64,
        dt: f64,
    ) -> Result<Advance<S>, Error>;
}

/// Marches `initial` across `grid` with `stepper`.
///
/// # Algorithm
///
/// 1. Record the initial state and emit step 0.
/// 2. For each interval `[t_{n}, t_{n+1}]` on the grid:
///    - Advance the current state with the stepper.
///    - Record the new state and any Newton correction.
///    - Emit an [`Event`]; stop if the observer returns `StopEarly`.
/// 3. Return the trajectory with its matching grid times.
///
/// The grid already ends at the first point reaching `tf`, so every step
/// taken is kept and `states.len() == times.len()` by construction.
pub(super) fn march<S, P, M, Obs>(
    problem: &P,
    mut stepper: M,
    initial: S,
    grid: &TimeGrid,
    mut observer: Obs,
) -> Result<Solution<S>, Error>
where
    S: StepIntegrable,
    P: OdeProblem<S>,
    M: Stepper<S>,
    Obs: for<'a> Observer<Event<'a, S>, Action>,
{
    let total = grid.steps();
    let mut states = Vec::with_capacity(grid.num_points());
    let mut corrections = Vec::new();
    states.push(initial);

    let event = Event {
        step: 0,
        total,
        time: grid.start(),
        state: &states[0],
        correction: None,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution::new(
            Status::StoppedByObserver,
            states,
            grid,
            corrections,
        ));
    }

    for step in 1..=total {
        let advance = stepper.advance(problem, &states[step - 1], grid.time(step - 1), grid.dt())?;

        states.push(advance.state);
        corrections.extend(advance.correction);

        let event = Event {
            step,
            total,
            time: grid.time(step),
            state: &states[step],
            correction: advance.correction,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(
                Status::StoppedByObserver,
                states,
                grid,
                corrections,
            ));
        }
    }

    Ok(Solution::new(Status::Complete, states, grid, corrections))
}

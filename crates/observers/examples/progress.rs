//! Watch the stepwise solvers work, one line per event.
//!
//! # Usage
//!
//! ```text
//! cargo run --example progress -- newton
//! cargo run --example progress -- ode
//! cargo run --example progress -- ode 0.5
//! cargo run --example progress -- poisson
//! ```
//!
//! # Modes
//!
//! - **newton**: find the Dottie number, the fixed point of cos x.
//!
//! - **ode [dt]**: integrate the stiff decay `y' = -50 (y - cos t)` with
//!   Crank-Nicolson. Larger steps stay bounded where forward Euler would not.
//!
//! - **poisson**: relax a 32x32 plate with one heated edge using point Jacobi,
//!   reporting every 50th sweep and giving up after two seconds.

use std::{error::Error, time::Duration};

use ndarray::Array2;
use stepwise_core::Observer;
use stepwise_observers::{Deadline, Progress};
use stepwise_solvers::{
    equation::newton,
    ode::{TimeGrid, crank_nicolson},
    relaxation::{self, jacobi},
};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "newton".into());
    match mode.as_str() {
        "newton" => dottie(),
        "ode" => {
            let dt = match std::env::args().nth(2) {
                Some(arg) => arg.parse()?,
                None => 0.05,
            };
            stiff_decay(dt)
        }
        "poisson" => heated_plate(),
        other => Err(format!("unknown mode `{other}`, expected newton, ode or poisson").into()),
    }
}

fn dottie() -> Result<(), Box<dyn Error>> {
    let mut progress = Progress::stderr();

    let solution = newton::solve(
        &|x: f64| x.cos() - x,
        &|x: f64| -x.sin() - 1.0,
        Some(1.0),
        &newton::Config::default(),
        &mut progress,
    )?;
    progress.finish()?;

    println!("x = {} after {} iterations", solution.x, solution.iters);
    Ok(())
}

fn stiff_decay(dt: f64) -> Result<(), Box<dyn Error>> {
    let grid = TimeGrid::new(0.0, 2.0, dt)?;
    let mut progress = Progress::stderr().every(grid.steps().div_ceil(10).max(1));

    let solution = crank_nicolson::solve(
        &|y: &f64, t: f64| -50.0 * (y - t.cos()),
        &|_y: &f64, _t: f64| -50.0,
        0.0,
        &grid,
        &crank_nicolson::Config::default(),
        &mut progress,
    )?;
    progress.finish()?;

    for (t, y) in solution.iter().step_by(solution.steps.div_ceil(10).max(1)) {
        println!("{t:>6.3}  {y:>10.6}");
    }
    Ok(())
}

fn heated_plate() -> Result<(), Box<dyn Error>> {
    let mut initial = Array2::zeros((32, 32));
    initial.row_mut(0).fill(100.0);
    let forcing = Array2::zeros((32, 32));
    let config = relaxation::Config {
        max_iters: 20_000,
        tol: 1e-6,
    };

    let mut progress = Progress::stderr().every(50);
    let mut deadline = Deadline::after(Duration::from_secs(2));

    let solution = jacobi::solve(&forcing, &initial, &config, |event: &relaxation::Event<'_>| {
        Observer::<_, relaxation::Action>::observe(&mut progress, event);
        Observer::<_, relaxation::Action>::observe(&mut deadline, event)
    })?;
    progress.finish()?;

    println!(
        "{:?} after {} sweeps, centre temperature {:.3}",
        solution.status,
        solution.sweeps,
        solution.field[[16, 16]]
    );
    Ok(())
}

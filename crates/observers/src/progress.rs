//! Text progress reports for any solver.

use std::io::{self, Stderr, Write};

use stepwise_core::Observer;

use crate::traits::ProgressLine;

/// Writes one line per observed event.
///
/// `Progress` never asks a solver to stop, so observing with it leaves the
/// numerics untouched. The first write error is kept and reported by
/// [`Progress::finish`]; later events are ignored once writing has failed.
///
/// # Example
///
/// ```rust
/// use stepwise_observers::Progress;
/// use stepwise_solvers::equation::newton;
///
/// let mut progress = Progress::new(Vec::new());
/// newton::solve(
///     &|x: f64| x * x - 2.0,
///     &|x: f64| 2.0 * x,
///     Some(1.0),
///     &newton::Config::default(),
///     &mut progress,
/// )
/// .unwrap();
///
/// let report = String::from_utf8(progress.finish().unwrap()).unwrap();
/// assert!(report.starts_with("iteration 1: residual"));
/// ```
#[derive(Debug)]
pub struct Progress<W: Write> {
    out: W,
    every: usize,
    seen: usize,
    written: usize,
    error: Option<io::Error>,
}

impl<W: Write> Progress<W> {
    /// Reports every event to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            every: 1,
            seen: 0,
            written: 0,
            error: None,
        }
    }

    /// Reports only every `n`-th event, starting with the first.
    ///
    /// An `n` of zero is treated as one.
    #[must_use]
    pub fn every(mut self, n: usize) -> Self {
        self.every = n.max(1);
        self
    }

    /// Number of lines written so far.
    pub fn lines(&self) -> usize {
        self.written
    }

    /// Flushes and returns the writer.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while writing, or the flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn report<E: ProgressLine>(&mut self, event: &E) -> io::Result<()> {
        event.write_line(&mut self.out)?;
        writeln!(self.out)
    }
}

impl Progress<Stderr> {
    /// Reports every event to standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write, E: ProgressLine, A> Observer<E, A> for Progress<W> {
    fn observe(&mut self, event: &E) -> Option<A> {
        let due = self.seen % self.every == 0;
        self.seen += 1;

        if due && self.error.is_none() {
            match self.report(event) {
                Ok(()) => self.written += 1,
                Err(error) => self.error = Some(error),
            }
        }
        None
    }
}

/// Progress can be lent to a solver and inspected afterwards.
impl<W: Write, E: ProgressLine, A> Observer<E, A> for &mut Progress<W> {
    fn observe(&mut self, event: &E) -> Option<A> {
        Observer::<E, A>::observe(&mut **self, event)
    }
}

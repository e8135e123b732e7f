//! Reusable observers for the stepwise solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every solver family in `stepwise-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`CanStopEarly`], [`HasResidual`], [`ProgressLine`])
//! - [`progress`]: [`Progress`], one line of text per solver event
//! - [`deadline`]: [`Deadline`], stops a solve after a wall-clock budget
//! - [`cancel`]: [`CancelToken`], stops a solve from another thread
//!
//! [`Observer`]: stepwise_core::Observer
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`HasResidual`]: traits::HasResidual
//! [`ProgressLine`]: traits::ProgressLine

pub mod cancel;
pub mod deadline;
pub mod progress;
pub mod traits;

pub use cancel::CancelToken;
pub use deadline::Deadline;
pub use progress::Progress;

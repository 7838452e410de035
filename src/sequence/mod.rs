//! Asynchronous task sequencing.
//!
//! # Key Concepts
//! - Step: a task's result, either immediate or pending
//! - Task chain: tasks run strictly one after another, each receiving the
//!   previous result; the first failure stops the chain
//! - `run_in_sequence` works on a homogeneous list; `Chain` checks each
//!   hand-off type at compile time
//! - `run_all` drives independent steps concurrently and keeps input order

mod chain;
mod run;
mod step;

pub use chain::Chain;
pub use run::{run_all, run_in_sequence, task, Task};
pub use step::Step;

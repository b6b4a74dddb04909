//! # Roundloop
//!
//! Single-threaded, round-based cooperative schedulers.
//!
//! This library provides the minimal scheduling core behind an event loop:
//! a driver that repeatedly executes a batch of scheduled units of work,
//! collects re-scheduled work into a fresh batch, and terminates when no
//! work remains. Two variants are provided:
//!
//! - **`CallbackScheduler`**: drives plain callbacks. Each callback runs to
//!   completion when invoked; work scheduled from inside a callback lands in
//!   the next round.
//! - **`CoroutineScheduler`**: drives resumable computations wrapped in
//!   tasks. A resumable can suspend mid-execution, be resumed later with an
//!   injected value, and eventually complete with a final result readable
//!   through its task handle.
//!
//! ## Execution model
//!
//! Execution is cooperative and never parallel. Each scheduler owns a pair of
//! ordered batches (active/pending) that are swapped once per round. Within a
//! round, entries run in exact insertion order; work scheduled during round N
//! is guaranteed not to run before round N+1. There are no priorities, no
//! preemption, no timers, and no cancellation.
//!
//! ## Failure semantics
//!
//! Errors raised by a callback or a resumable are never caught by the
//! scheduler: the first failure propagates out of `run_to_completion`,
//! abandoning all remaining scheduled work. This is a deliberate limitation
//! of the core, not an oversight; isolation between unrelated units of work
//! belongs to a layer above.
//!
//! ## Example
//!
//! ```rust,ignore
//! use roundloop::core::{CoroutineScheduler, Step, resume_fn};
//!
//! let mut sched = CoroutineScheduler::new();
//! let mut i = 0;
//! let handle = sched.schedule(resume_fn(move |_input: Option<u32>| {
//!     i += 1;
//!     if i < 3 { Ok(Step::Yielded(i)) } else { Ok(Step::Completed(i)) }
//! }));
//! sched.run_to_completion()?;
//! assert_eq!(handle.value(), Some(3));
//! ```
//!
//! For complete examples, see:
//! - `tests/callback_scheduler_test.rs` - callback rounds and chaining
//! - `tests/coroutine_scheduler_test.rs` - suspend/resume and fairness

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions: batches, tasks, and the two drivers.
pub mod core;
/// Configuration models for scheduler construction.
pub mod config;
/// Builders to construct schedulers from configuration.
pub mod builders;
/// Shared utilities.
pub mod util;

//! Core scheduling abstractions: batches, tasks, and the two drivers.

pub mod error;
pub mod batch;
pub mod resumable;
pub mod task;
pub mod callback;
pub mod coroutine;

pub use error::{AppResult, SchedulerError};
pub use batch::Batch;
pub use resumable::{resume_fn, ResumeFn, Resumable, Step};
pub use task::{Task, TaskHandle, TaskState};
pub use callback::{CallbackEntry, CallbackScheduler};
pub use coroutine::CoroutineScheduler;

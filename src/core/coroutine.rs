//! Round-robin driver for resumable computations.

use crate::core::{AppResult, Batch, Resumable, Task, TaskHandle, TaskState};

/// Round-based driver for resumable computations wrapped in tasks.
///
/// The round structure is identical to the callback scheduler's, but each
/// active entry is a task that may suspend instead of running to completion.
/// A task that yields is unconditionally re-queued into the pending batch (a
/// yield never means "done", only "not yet"); a task that completes exits
/// scheduling permanently, its final value readable through the caller's
/// [`TaskHandle`].
pub struct CoroutineScheduler<V> {
    active: Batch<TaskHandle<V>>,
    pending: Batch<TaskHandle<V>>,
    rounds: u64,
    trace_rounds: bool,
}

impl<V: Clone + 'static> CoroutineScheduler<V> {
    /// Create a scheduler with empty batches.
    pub fn new() -> Self {
        Self {
            active: Batch::new(),
            pending: Batch::new(),
            rounds: 0,
            trace_rounds: false,
        }
    }

    /// Create a scheduler with preallocated batch capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            active: Batch::with_capacity(capacity),
            pending: Batch::with_capacity(capacity),
            rounds: 0,
            trace_rounds: false,
        }
    }

    /// Enable or disable per-round debug events.
    pub fn with_trace_rounds(mut self, trace_rounds: bool) -> Self {
        self.trace_rounds = trace_rounds;
        self
    }

    /// Whether per-round debug events are emitted.
    pub fn trace_rounds(&self) -> bool {
        self.trace_rounds
    }

    /// Wrap a resumable in a new task, append it to the pending batch, and
    /// return the caller's handle.
    ///
    /// The scheduler keeps its own clone of the handle while the task is
    /// live and drops it once the task completes; the returned handle stays
    /// valid for reading the final value afterwards.
    pub fn schedule<R>(&mut self, resumable: R) -> TaskHandle<V>
    where
        R: Resumable<Value = V> + 'static,
    {
        let handle = TaskHandle::new(Task::new(Box::new(resumable)));
        self.pending.push(handle.clone());
        handle
    }

    /// Drive every scheduled task to completion, in rounds.
    ///
    /// Each round swaps the pending batch into the active role and advances
    /// every active task exactly once, in insertion order. A suspended task
    /// re-enters the pending batch; a completed one never re-enters any
    /// batch. The first failing task aborts the run immediately: its error
    /// propagates unchanged and every task still active or pending is
    /// abandoned mid-flight, never driven further.
    pub fn run_to_completion(&mut self) -> AppResult<()> {
        self.rounds = 0;
        while !self.active.is_empty() || !self.pending.is_empty() {
            self.rounds += 1;
            std::mem::swap(&mut self.active, &mut self.pending);
            if self.trace_rounds {
                tracing::debug!(round = self.rounds, tasks = self.active.len(), "starting round");
            }

            while let Some(task) = self.active.pop() {
                match task.advance()? {
                    TaskState::Suspended => self.pending.push(task),
                    TaskState::Completed => {
                        if self.trace_rounds {
                            tracing::debug!(round = self.rounds, "task completed");
                        }
                        // Scheduler's reference ends here; the caller's
                        // handle keeps the final value readable.
                    }
                    TaskState::Pending => unreachable!("advance never reports Pending"),
                }
            }
        }
        if self.trace_rounds {
            tracing::debug!(rounds = self.rounds, "run complete");
        }
        Ok(())
    }

    /// Number of rounds executed by the most recent run.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }
}

impl<V: Clone + 'static> Default for CoroutineScheduler<V> {
    fn default() -> Self {
        Self::new()
    }
}

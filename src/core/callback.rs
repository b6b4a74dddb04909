//! Round-robin driver for non-suspending callbacks.

use crate::core::{AppResult, Batch};

/// A scheduled callback with its arguments captured at schedule time.
///
/// The boxed closure receives the scheduler itself so the callback can
/// schedule follow-up work; anything else it needs is captured when the
/// entry is created and immutable afterwards.
pub struct CallbackEntry {
    callback: Box<dyn FnOnce(&mut CallbackScheduler) -> AppResult<()>>,
}

impl CallbackEntry {
    fn invoke(self, scheduler: &mut CallbackScheduler) -> AppResult<()> {
        (self.callback)(scheduler)
    }
}

impl std::fmt::Debug for CallbackEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackEntry").finish_non_exhaustive()
    }
}

/// Round-based driver for callbacks that run to completion when invoked.
///
/// Each round swaps the pending batch into the active role and invokes every
/// active entry exactly once, in insertion order. `schedule` calls made from
/// inside a callback append to the new pending batch and therefore run no
/// earlier than the next round. The driver terminates when both batches are
/// empty.
#[derive(Debug, Default)]
pub struct CallbackScheduler {
    active: Batch<CallbackEntry>,
    pending: Batch<CallbackEntry>,
    rounds: u64,
    trace_rounds: bool,
}

impl CallbackScheduler {
    /// Create a scheduler with empty batches.
    pub fn new() -> Self {
        Self::default()
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

    /// Append a callback to the pending batch.
    ///
    /// The callback runs in the next round the driver starts. No side
    /// effects beyond the append.
    pub fn schedule<F>(&mut self, callback: F)
    where
        F: FnOnce(&mut Self) -> AppResult<()> + 'static,
    {
        self.pending.push(CallbackEntry {
            callback: Box::new(callback),
        });
    }

    /// Drain all batches in rounds until no work remains.
    ///
    /// A callback error is not caught: it propagates immediately, abandoning
    /// the remaining entries of the current round and every subsequent
    /// round. No isolation exists between unrelated callbacks.
    pub fn run_to_completion(&mut self) -> AppResult<()> {
        self.rounds = 0;
        while !self.active.is_empty() || !self.pending.is_empty() {
            self.rounds += 1;
            std::mem::swap(&mut self.active, &mut self.pending);
            if self.trace_rounds {
                tracing::debug!(round = self.rounds, entries = self.active.len(), "starting round");
            }

            while let Some(entry) = self.active.pop() {
                entry.invoke(self)?;
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

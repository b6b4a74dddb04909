//! Task wrapper and shared handles for resumable computations.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::{AppResult, Resumable, SchedulerError, Step};

/// Lifecycle state of a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TaskState {
    /// Scheduled but never advanced.
    Pending,
    /// Suspended at a yield point, awaiting the next round.
    Suspended,
    /// Finished; `value` holds the final result.
    Completed,
}

/// Wraps one resumable computation and tracks the last value it produced.
///
/// `value` holds the most recently yielded value and is overwritten by the
/// final result on completion. It is only meaningful as "final result" once
/// the driver has observed [`TaskState::Completed`].
pub struct Task<V> {
    resumable: Box<dyn Resumable<Value = V>>,
    value: Option<V>,
    state: TaskState,
}

impl<V: Clone> Task<V> {
    /// Wrap a resumable in a fresh task.
    pub fn new(resumable: Box<dyn Resumable<Value = V>>) -> Self {
        Self {
            resumable,
            value: None,
            state: TaskState::Pending,
        }
    }

    /// Resume the wrapped computation with the value stored from the
    /// previous advance (`None` on the first).
    ///
    /// On `Yielded(v)` or `Completed(v)` the value is stored; the new state
    /// is returned so the driver can decide whether to re-queue. Advancing a
    /// completed task is a contract violation and fails with
    /// [`SchedulerError::ResumeAfterCompletion`]. A failing resumable leaves
    /// the task in an undefined state; it must not be reused.
    pub fn advance(&mut self) -> AppResult<TaskState> {
        if self.state == TaskState::Completed {
            return Err(SchedulerError::ResumeAfterCompletion.into());
        }

        match self.resumable.resume(self.value.clone())? {
            Step::Yielded(v) => {
                self.value = Some(v);
                self.state = TaskState::Suspended;
            }
            Step::Completed(v) => {
                self.value = Some(v);
                self.state = TaskState::Completed;
            }
        }
        Ok(self.state)
    }

    /// The most recently observed value, final result once completed.
    pub fn value(&self) -> Option<V> {
        self.value.clone()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TaskState {
        self.state
    }
}

/// Caller-held reference to a scheduled task.
///
/// Handles share ownership of the task: the scheduler keeps one reference
/// while the task is live and drops it on completion, while the caller's
/// clone stays valid for reading the final value afterwards.
pub struct TaskHandle<V> {
    inner: Arc<Mutex<Task<V>>>,
}

impl<V> Clone for TaskHandle<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: Clone> TaskHandle<V> {
    /// Wrap a task in a shareable handle.
    pub fn new(task: Task<V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(task)),
        }
    }

    /// Advance the underlying task. See [`Task::advance`].
    pub fn advance(&self) -> AppResult<TaskState> {
        self.inner.lock().advance()
    }

    /// Read the task's last observed value.
    pub fn value(&self) -> Option<V> {
        self.inner.lock().value()
    }

    /// Read the task's lifecycle state.
    pub fn state(&self) -> TaskState {
        self.inner.lock().state()
    }

    /// Whether the task has reached its final value.
    pub fn is_completed(&self) -> bool {
        self.state() == TaskState::Completed
    }
}

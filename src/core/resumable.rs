//! The resumable-computation capability driven by the coroutine scheduler.

use std::marker::PhantomData;

use crate::core::AppResult;

/// Outcome of resuming a computation.
///
/// Completion is an explicit tagged outcome on the success path: a resumable
/// that finishes returns `Completed`, never an error. The error channel of
/// [`Resumable::resume`] is reserved strictly for genuine failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<V> {
    /// The computation suspended at a yield point, producing a value.
    Yielded(V),
    /// The computation finished with its final value.
    Completed(V),
}

/// A computation that can pause at defined points and later continue with an
/// injected input value.
///
/// The schedulers depend only on this capability; how the suspension is
/// realized (an explicit state enum with stored locals, continuation
/// passing, or anything else) is the implementor's business.
///
/// # Contract
///
/// - `resume(input)` drives the computation to its next suspension point or
///   to completion. `input` is the value the driver observed from the
///   previous step, `None` on the first resume.
/// - Once `Completed` has been returned, `resume` must not be called again.
/// - A returned `Err` leaves the computation in an undefined state; it must
///   not be reused.
pub trait Resumable {
    /// The value type yielded at suspension points and produced on
    /// completion.
    type Value;

    /// Run until the next suspension point or completion.
    fn resume(&mut self, input: Option<Self::Value>) -> AppResult<Step<Self::Value>>;
}

/// Adapter implementing [`Resumable`] from a closure.
///
/// Lets callers express small state-machine resumables inline without a
/// named type. Construct with [`resume_fn`].
pub struct ResumeFn<V, F> {
    f: F,
    _value_marker: PhantomData<V>,
}

/// Wrap a closure as a [`Resumable`].
///
/// ```rust,ignore
/// let mut remaining = 3;
/// let countdown = resume_fn(move |_input: Option<u32>| {
///     remaining -= 1;
///     if remaining > 0 {
///         Ok(Step::Yielded(remaining))
///     } else {
///         Ok(Step::Completed(0))
///     }
/// });
/// ```
pub fn resume_fn<V, F>(f: F) -> ResumeFn<V, F>
where
    F: FnMut(Option<V>) -> AppResult<Step<V>>,
{
    ResumeFn {
        f,
        _value_marker: PhantomData,
    }
}

impl<V, F> Resumable for ResumeFn<V, F>
where
    F: FnMut(Option<V>) -> AppResult<Step<V>>,
{
    type Value = V;

    fn resume(&mut self, input: Option<V>) -> AppResult<Step<V>> {
        (self.f)(input)
    }
}

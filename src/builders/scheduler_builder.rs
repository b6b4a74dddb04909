//! Construct schedulers from validated configuration.

use crate::config::SchedulerConfig;
use crate::core::{CallbackScheduler, CoroutineScheduler, SchedulerError};

/// Build a callback scheduler from configuration.
pub fn build_callback_scheduler(
    cfg: &SchedulerConfig,
) -> Result<CallbackScheduler, SchedulerError> {
    cfg.validate().map_err(SchedulerError::InvalidConfig)?;
    tracing::info!(name = %cfg.name, capacity = cfg.initial_capacity, "building callback scheduler");
    Ok(CallbackScheduler::with_capacity(cfg.initial_capacity).with_trace_rounds(cfg.trace_rounds))
}

/// Build a coroutine scheduler from configuration.
pub fn build_coroutine_scheduler<V: Clone + 'static>(
    cfg: &SchedulerConfig,
) -> Result<CoroutineScheduler<V>, SchedulerError> {
    cfg.validate().map_err(SchedulerError::InvalidConfig)?;
    tracing::info!(name = %cfg.name, capacity = cfg.initial_capacity, "building coroutine scheduler");
    Ok(CoroutineScheduler::with_capacity(cfg.initial_capacity).with_trace_rounds(cfg.trace_rounds))
}

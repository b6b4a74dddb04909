//! Structured logging bootstrap.

/// Install the default env-filtered tracing subscriber.
///
/// Consumers that install their own subscriber keep full control: if a
/// dispatcher is already set this is a no-op, and the fallible `try_init`
/// keeps a racing installation from panicking.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

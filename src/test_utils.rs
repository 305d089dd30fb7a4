//! Helpers shared by unit tests, integration tests and benches.
//! Enabled with the `test-utils` feature.

use crate::time::VClock;

/// Builds a clock from `(id, ticks)` pairs.
pub fn vclock_from(entries: &[(&str, u64)]) -> VClock {
    entries.iter().map(|(id, ticks)| (*id, *ticks)).collect()
}

/// Installs a `tracing` subscriber honouring `RUST_LOG` (default `warn`).
/// Safe to call from every test; only the first call takes effect.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

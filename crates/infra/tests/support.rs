//! Shared helpers for infra integration tests.

use once_cell::sync::Lazy;

/// Install a test subscriber once per process so failed assertions come with
/// scheduler/client traces. `RUST_LOG` still controls verbosity.
static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
});

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

//! Test tracing setup

use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

static TRACING: Lazy<()> = Lazy::new(|| {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Another test binary harness may have installed a subscriber already
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
});

/// Installs a `fmt` subscriber once per test binary
///
/// The filter comes from `RUST_LOG` and defaults to `warn`, e.g.
/// `RUST_LOG=domain_registry=debug cargo test`.
pub fn init_test_tracing() {
    Lazy::force(&TRACING);
}

//! Shared helpers for unit and integration tests.

use std::env;
use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::{BinaryTree, FixedCapacity, NaryTree};

static TEST_SETUP: Once = Once::new();

/// Installs the global tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`; falls back to `rstree=debug`.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rstree=debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_target(true)
            .with_thread_names(false)
            .with_test_writer()
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else if let Err(e) = subscriber.try_init() {
        eprintln!("Error: Failed to set up logging: {}", e);
    }
    debug!(rust_log = ?env::var("RUST_LOG").ok(), "test logging ready");
}

/// N-ary tree with deterministic capacities, filled in order.
pub fn nary_fixed(root: usize, other: usize, values: &[i64]) -> NaryTree<i64, FixedCapacity> {
    let mut tree = NaryTree::with_policy(FixedCapacity::new(root, other));
    for &v in values {
        tree.insert(v);
    }
    tree
}

/// Binary tree filled in order.
pub fn binary_of(values: &[i64]) -> BinaryTree<i64> {
    let mut tree = BinaryTree::new();
    for &v in values {
        tree.insert(v);
    }
    tree
}

//! Para command-line driver.
//!
//! Builds a small demonstration parameter program, binds parameters from the
//! command line, and runs the three tree traversals over it.

pub mod commands;
pub mod demo;
pub mod report;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. `PARA_LOG_TREE=1` switches from
/// flat lines to an indented span tree. Safe to call more than once.
///
/// ```bash
/// RUST_LOG=para_exec=debug para run
/// RUST_LOG=trace PARA_LOG_TREE=1 para run --set R1=3
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = std::env::var("PARA_LOG_TREE").is_ok_and(|v| v == "1");
        if tree {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

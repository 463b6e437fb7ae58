// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Test helpers that route `tracing` output into the libtest writer.
//!
//! Use [`test`] in place of the built-in `#[test]` attribute. The first test
//! to run installs a global fmt subscriber; every later test reuses it.
//! Filtering follows `RUST_LOG` when set, otherwise everything at `DEBUG`
//! and above is shown, plus `TRACE` for the key-derivation crate.

// Test-only crate: `expect` is allowed here, `unwrap` is not.
#![allow(clippy::expect_used)]

#[cfg(test)]
extern crate self as test_with_tracing;

pub use test_with_tracing_macro::test;
use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

/// Target that is always traced at full verbosity when `RUST_LOG` is unset.
const DEFAULT_TRACE_TARGET: &str = "hkdf_crypto";

fn default_targets() -> Targets {
    Targets::new()
        .with_default(LevelFilter::DEBUG)
        .with_target(DEFAULT_TRACE_TARGET, LevelFilter::TRACE)
}

#[doc(hidden)]
/// Installs the test subscriber once per test binary.
pub fn init() {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        let targets = match std::env::var("RUST_LOG") {
            Ok(var) => var
                .parse()
                .expect("Failed to parse RUST_LOG environment variable"),
            Err(_) => default_targets(),
        };

        // Another harness may already own the global subscriber.
        let _ = tracing_subscriber::fmt()
            .pretty()
            .with_ansi(false)
            .log_internal_errors(true)
            .with_test_writer()
            .with_max_level(LevelFilter::TRACE)
            .with_thread_ids(true)
            .finish()
            .with(targets)
            .try_init();
    });
}

//! Helper to set the backtrace env var.

use std::sync::Once;

static INIT: Once = Once::new();

/// Sets the `RUST_BACKTRACE` environment variable to `1` if it is not already set.
///
/// Call this first thing in `main`, before any other thread is spawned.
pub fn enable() {
    INIT.call_once(|| {
        // Respect an explicitly provided value such as `full` or `0`.
        if std::env::var_os("RUST_BACKTRACE").is_none() {
            // SAFETY: the binaries call this at the top of `main`, while single threaded.
            unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
        }
    });
}

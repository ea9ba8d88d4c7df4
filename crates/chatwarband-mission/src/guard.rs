//! Safety boundary for engine callbacks.
//!
//! A fault while tracking one hero must never take down the shared battle
//! simulation, so every engine-facing handler runs behind this
//! catch-log-continue wrapper. Faults are logged and dropped; recovery is
//! simply the next event.

use std::panic::{self, AssertUnwindSafe};

/// Run `f`, swallowing any panic and logging it under `context`.
pub fn guarded<F: FnOnce()>(context: &str, f: F) {
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(f)) {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string());
        log::error!("suppressed fault in {context}: {message}");
    }
}

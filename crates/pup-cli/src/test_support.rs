//! Helpers for tests that touch process environment variables
//!
//! Router tests drive real gateway sessions, which consult the
//! environment on every request, and the `web` subcommand reads `HOST` /
//! `PORT` at argument-parse time. Any test in this crate that depends on
//! environment state must hold [`env_guard`] for its whole body.

use std::env;
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

const PUP_VARS: [&str; 12] = [
    "ALBERTO_API_URL",
    "PUP_BACKEND_URL",
    "SYN_API_KEY",
    "OPEN_API_KEY",
    "PUP_MODEL_PROVIDER",
    "PUP_ALLOW_KEYLESS_BACKEND",
    "PUP_DNS_OVERRIDES",
    "PUP_ACCESS_JWT",
    "PUP_ACCESS_CLIENT_ID",
    "PUP_ACCESS_CLIENT_SECRET",
    "HOST",
    "PORT",
];

/// Serialize access to the process environment across test threads.
pub(crate) fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Remove every variable the CLI reads, giving tests a clean slate.
/// Callers must already hold the guard from [`env_guard`].
pub(crate) fn clear_pup_env() {
    for var in PUP_VARS {
        unsafe {
            env::remove_var(var);
        }
    }
}

//! Helpers for tests that touch process environment variables
//!
//! The gateway consults the environment on every request (remote-backend
//! refresh), so any test driving a session must hold [`env_guard`] for its
//! whole body to keep environment state from interleaving across threads.

use std::env;
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

const PUP_VARS: [&str; 10] = [
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
];

/// Serialize access to the process environment across test threads.
pub(crate) fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Remove every variable the SDK reads, giving tests a clean slate.
/// Callers must already hold the guard from [`env_guard`].
pub(crate) fn clear_pup_env() {
    for var in PUP_VARS {
        unsafe {
            env::remove_var(var);
        }
    }
}
